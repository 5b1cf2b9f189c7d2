pub mod range;
pub mod segment;
pub mod matcher;

pub use range::*;
pub use segment::*;
pub use matcher::*;
