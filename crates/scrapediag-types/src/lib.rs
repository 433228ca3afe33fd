pub mod artifact;
pub mod payload;
pub mod summary;

pub use artifact::*;
pub use payload::*;
pub use summary::*;
