pub use alignment::Alignment;
pub use coordinate::Coordinate;
pub use gapped::{Gapped, GAP_CHAR};
pub use op::Op;
pub use step::Step;

mod alignment;
mod coordinate;
mod gapped;
mod op;
pub mod step;
