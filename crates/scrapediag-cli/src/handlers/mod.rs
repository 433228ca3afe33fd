mod context;

pub mod collect;
pub mod ping;
pub mod probe;
pub mod summarize;

pub use context::HandlerContext;
