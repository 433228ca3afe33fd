//! Testing infrastructure for scrapediag integration tests.
//!
//! - `StubServer`: a throwaway HTTP service standing in for the scraper
//! - `TestWorld`: isolated output directory plus CLI execution
//! - `fixtures`: payloads and pages the stub serves
//! - `assertions`: checks over the artifacts and JSON output

pub mod assertions;
pub mod fixtures;
pub mod server;
pub mod world;

pub use server::{StubResponse, StubServer, closed_port_url};
pub use world::{CliResult, TestWorld};
