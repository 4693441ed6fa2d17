pub use alignment::{Alignment, Coordinate, Gapped, Op, Step};
pub use config::{Config, Output};
pub use dp::Mode;
pub use invocation::{Aligner, Algorithm, WorkItem};
pub use result::AlignmentResult;
pub use traceback::traceback;

pub mod alignment;
mod config;
pub mod dp;
mod invocation;
pub mod matrix;
mod result;
pub mod scoring;
mod traceback;
