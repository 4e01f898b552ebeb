pub mod etl;
pub mod grouper;
pub mod loader;
pub mod numbers;
pub mod pipeline;
pub mod tiles;
pub mod writer;

pub use crate::domain::model::{TransformResult, WordsByLength};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage, WordSource};
pub use crate::utils::error::Result;
