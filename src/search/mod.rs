pub mod types;
pub mod source;
pub mod feed;

pub use types::*;
pub use source::*;
pub use feed::*;
