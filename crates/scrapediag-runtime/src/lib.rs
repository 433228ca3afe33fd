pub mod artifacts;
pub mod collector;
pub mod config;
pub mod error;
pub mod http;

pub use artifacts::{ArtifactWriter, SoupParts, Transform, Transformed, pretty_json, split_soup};
pub use collector::{
    CollectOptions, CollectionReport, Collector, DebugQuery, TradesQuery, summarize_file,
};
pub use config::{ColorMode, Config, ConfigOverrides};
pub use error::{Error, Result};
pub use http::{Endpoint, ServiceClient};
