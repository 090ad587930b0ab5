//! distrib-core — shared types for the distrib file distributor.
//!
//! Holds the entity model (`Node`, `Item`), the line-oriented record
//! parser, the `distrib.toml` configuration, and a synthetic test-data
//! generator. Allocation lives in `distrib-placement`; reporting lives in
//! `distrib-report`.

pub mod config;
pub mod error;
pub mod generate;
pub mod record;
pub mod types;

pub use config::DistribConfig;
pub use error::{ConfigError, InvalidEntity, MalformedRecord};
pub use generate::{GeneratorOptions, generate_text};
pub use record::{Record, parse_records};
pub use types::{Item, Node};
