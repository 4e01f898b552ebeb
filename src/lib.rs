pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::CachedHttpSource;
pub use config::{cli::LocalStorage, AppConfig};
pub use crate::core::{etl::EtlEngine, pipeline::WordListPipeline};
pub use domain::model::{LoadReport, PlayerMode, TileDistribution, WordsByLength};
pub use utils::error::{EtlError, Result};
