use crate::core::render::report_blocks;
use crate::core::upload::{server_error_message, ChunkedUploader, DirectUploader};
use crate::domain::model::Report;
use crate::domain::ports::{ConfigProvider, Storage, View};
use crate::utils::error::{Result, ScrubError};
use reqwest::Client;
use std::path::Path;

/// 串起整個上傳流程：檢查輸入、上傳、渲染結果或錯誤。
/// 所有 UI 變化都透過 View，流程本身不保留任何狀態。
pub struct UploadController<C: ConfigProvider, V: View> {
    config: C,
    view: V,
    client: Client,
}

impl<C: ConfigProvider, V: View> UploadController<C, V> {
    pub fn new(config: C, view: V) -> Self {
        Self {
            config,
            view,
            client: Client::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// 單次上傳嘗試。失敗即終止，不重試
    pub async fn run(&mut self, file: Option<&Path>) -> Result<Report> {
        self.view.reset();

        let path = match file {
            Some(path) => path,
            None => {
                let err = ScrubError::NoFileSelected;
                self.view.show_error(&err.to_string());
                return Err(err);
            }
        };

        self.view.show_loading();

        match self.process(path).await {
            Ok(report) => {
                self.view.hide_loading();
                let blocks = report_blocks(&report, self.config.server_url());
                self.view.show_results(&blocks);
                Ok(report)
            }
            Err(err) => {
                self.view.hide_loading();
                self.view.show_error(&err.to_string());
                Err(err)
            }
        }
    }

    async fn process(&self, path: &Path) -> Result<Report> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload.dat")
            .to_string();

        let data = tokio::fs::read(path).await?;

        if self.config.chunked_upload() {
            ChunkedUploader::new(
                self.client.clone(),
                self.config.server_url(),
                self.config.chunk_size(),
            )
            .upload(&file_name, &data)
            .await
        } else {
            DirectUploader::new(self.client.clone(), self.config.server_url())
                .upload(&file_name, data)
                .await
        }
    }

    /// 把 EDA 報告與清理後的檔案抓回本地
    pub async fn fetch_results<S: Storage>(&self, report: &Report, storage: &S) -> Result<()> {
        let base = self.config.server_url().trim_end_matches('/');
        let artifacts = [
            ("eda", report.eda_report.as_str()),
            ("download", report.cleaned_file.as_str()),
        ];

        for (route, name) in artifacts {
            let url = format!("{}/{}/{}", base, route, name);
            tracing::debug!("Fetching {}", url);

            let response = self.client.get(&url).send().await?;
            if !response.status().is_success() {
                let status = response.status().as_u16();
                let message = server_error_message(response).await;
                return Err(ScrubError::Server { status, message });
            }

            let bytes = response.bytes().await?;
            storage.write_file(name, &bytes).await?;
            tracing::info!("📁 Saved {}", name);
        }

        Ok(())
    }
}
