pub mod processed;

pub use processed::*;
