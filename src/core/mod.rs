pub mod engine;
pub mod loader;
pub mod pipeline;
pub mod render;
pub mod view;

pub use crate::domain::model::{HomepageData, HomepageView};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
