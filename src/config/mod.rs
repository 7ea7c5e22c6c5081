//! Configuration for the wage supplement engine.
//!
//! This module provides loading of wage supplement rule sets from YAML
//! configuration files.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{SupplementEntry, SupplementMetadata, SupplementsConfig};
