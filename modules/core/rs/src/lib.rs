pub use lending_iterator::{LendingIterator, Map};

mod lending_iterator;
pub mod num;
pub mod parallelism;
