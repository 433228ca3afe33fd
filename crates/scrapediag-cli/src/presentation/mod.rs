//! # Presentation Layer
//!
//! Handlers never print directly. The flow is one-way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> stdout
//!                                                      (JSON or View)
//! ```
//!
//! * `view_models/`: serializable data only; `--format json` dumps them as-is.
//! * `presenters/`: turn runtime results into view models, pick badges and tips.
//! * `views/`: `fmt::Display` layouts; the only place styling happens.
//! * `renderers/`: choose JSON or text and write the result.
//! * `formatters/`: small shared helpers (bytes, hashes, palette).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use formatters::Palette;
pub use renderers::{ConsoleRenderer, Renderer};
