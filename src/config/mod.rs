pub mod cli;

use crate::core::upload::DEFAULT_CHUNK_SIZE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extensions, validate_path, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 後端允許的資料集副檔名
const ALLOWED_DATASET_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls"];

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "scrub-client")]
#[command(about = "Upload a dataset to the data cleaning service and view the report")]
pub struct CliConfig {
    /// Dataset file to upload
    pub file: Option<PathBuf>,

    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub server_url: String,

    #[arg(long, help = "Upload the file in fixed-size chunks")]
    pub chunked: bool,

    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    #[arg(long, help = "Save the EDA report and cleaned file into this directory")]
    pub output_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn server_url(&self) -> &str {
        &self.server_url
    }

    fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    fn chunked_upload(&self) -> bool {
        self.chunked
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("server_url", &self.server_url)?;
        validate_positive_number("chunk_size", self.chunk_size, 1)?;

        if let Some(file) = &self.file {
            let files = vec![file.to_string_lossy().to_string()];
            validate_file_extensions("file", &files, ALLOWED_DATASET_EXTENSIONS)?;
        }

        if let Some(output_path) = &self.output_path {
            validate_path("output_path", output_path)?;
        }

        Ok(())
    }
}
