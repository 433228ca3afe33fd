pub mod style;
pub mod text;

pub use style::Palette;
pub use text::{humanize_bytes, rule, short_hash, truncate};
