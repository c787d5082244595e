pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{storage::LocalStorage, toml_config::TomlConfig};
pub use core::{engine::HomeEngine, loader::HomepageLoader, pipeline::HomepagePipeline};
pub use domain::device::DeviceClass;
pub use utils::error::{HomeError, Result};
