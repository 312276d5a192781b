//! Data types for the report pipeline.

mod grid;
mod record;
mod suite;

pub use grid::*;
pub use record::*;
pub use suite::*;
