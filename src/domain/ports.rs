use crate::domain::model::Block;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn server_url(&self) -> &str;
    fn chunk_size(&self) -> usize;
    fn chunked_upload(&self) -> bool;
    fn output_path(&self) -> Option<&str>;
}

/// UI 狀態的薄介面，controller 只透過它改變畫面
pub trait View {
    fn reset(&mut self);
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
    fn show_error(&mut self, message: &str);
    fn show_results(&mut self, blocks: &[Block]);
}
