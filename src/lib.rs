pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::terminal::TerminalView;
pub use config::{cli::LocalStorage, CliConfig};
pub use core::{controller::UploadController, render::report_blocks, upload::ChunkedUploader};
pub use domain::model::{Block, Report};
pub use utils::error::{Result, ScrubError};
