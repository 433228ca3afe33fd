mod collect;
mod probe;
mod summary;

pub use collect::{present_collection, present_ping};
pub use probe::present_probe;
pub use summary::{present_summary, present_summary_file};
