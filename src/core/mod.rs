pub mod controller;
pub mod render;
pub mod upload;

pub use crate::domain::model::{Block, Report};
pub use crate::domain::ports::{ConfigProvider, Storage, View};
pub use crate::utils::error::Result;
