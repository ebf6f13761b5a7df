use httpmock::prelude::*;
use scrub_client::domain::ports::{ConfigProvider, View};
use scrub_client::{Block, CliConfig, LocalStorage, ScrubError, UploadController};
use std::io::Write;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingView {
    errors: Vec<String>,
    results: Vec<Vec<Block>>,
}

impl View for RecordingView {
    fn reset(&mut self) {}
    fn show_loading(&mut self) {}
    fn hide_loading(&mut self) {}

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn show_results(&mut self, blocks: &[Block]) {
        self.results.push(blocks.to_vec());
    }
}

fn config_for(server: &MockServer, chunked: bool, chunk_size: usize) -> CliConfig {
    CliConfig {
        file: None,
        server_url: server.base_url(),
        chunked,
        chunk_size,
        output_path: None,
        verbose: false,
    }
}

fn write_dataset(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content).unwrap();
    path
}

fn report_body() -> serde_json::Value {
    serde_json::json!({
        "overview": {
            "shape": {"rows": 150, "columns": 5},
            "duplicates": 3,
            "memory_usage": {"total": "12.4 KB"},
            "missing_values": {"age": 3},
            "dtypes": {"name": "object", "age": "int64"}
        },
        "log_report": [
            [],
            [{"col": "age", "old": null, "new": 0}]
        ],
        "eda_report": "eda_report.html",
        "cleaned_file": "cleaned_data.csv"
    })
}

#[tokio::test]
async fn test_end_to_end_direct_upload_renders_report() {
    let server = MockServer::start();
    let upload_mock = server.mock(|when, then| {
        when.method(POST).path("/upload");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(report_body());
    });

    let temp_dir = TempDir::new().unwrap();
    let dataset = write_dataset(&temp_dir, "data.csv", b"name,age\nAda,36\n");

    let config = config_for(&server, false, 2097152);
    let mut controller = UploadController::new(config, RecordingView::default());

    let report = controller.run(Some(&dataset)).await.unwrap();

    upload_mock.assert();
    assert_eq!(report.eda_report, "eda_report.html");

    let results = &controller.view().results;
    assert_eq!(results.len(), 1);

    // 基本資訊、缺失值、型別三張表，加上一張清理日誌表
    let tables: Vec<_> = results[0]
        .iter()
        .filter(|block| matches!(block, Block::Table(_)))
        .collect();
    assert_eq!(tables.len(), 4);

    let links: Vec<_> = results[0]
        .iter()
        .filter_map(|block| match block {
            Block::Link(link) => Some(link),
            _ => None,
        })
        .collect();
    assert_eq!(links.len(), 2);
    assert!(links[0].url.ends_with("/eda/eda_report.html"));
    assert!(links[1].url.ends_with("/download/cleaned_data.csv"));
}

#[tokio::test]
async fn test_end_to_end_chunked_upload_and_artifact_download() {
    let server = MockServer::start();
    let chunk_mock = server.mock(|when, then| {
        when.method(POST).path("/upload_chunk");
        then.status(200);
    });
    let merge_mock = server.mock(|when, then| {
        when.method(POST).path("/merge_chunks");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(report_body());
    });
    server.mock(|when, then| {
        when.method(GET).path("/eda/eda_report.html");
        then.status(200).body("<html>report</html>");
    });
    server.mock(|when, then| {
        when.method(GET).path("/download/cleaned_data.csv");
        then.status(200).body("name,age\nAda,36\n");
    });

    let temp_dir = TempDir::new().unwrap();
    // 10 bytes / 4-byte chunks = 3 chunks
    let dataset = write_dataset(&temp_dir, "data.csv", b"AAAABBBBCC");

    let config = config_for(&server, true, 4);
    let mut controller = UploadController::new(config, RecordingView::default());

    let report = controller.run(Some(&dataset)).await.unwrap();

    chunk_mock.assert_hits(3);
    merge_mock.assert();

    let output_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(output_dir.path().to_str().unwrap().to_string());
    controller.fetch_results(&report, &storage).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(output_dir.path().join("eda_report.html")).unwrap(),
        "<html>report</html>"
    );
    assert_eq!(
        std::fs::read_to_string(output_dir.path().join("cleaned_data.csv")).unwrap(),
        "name,age\nAda,36\n"
    );
}

#[tokio::test]
async fn test_end_to_end_chunk_failure_never_merges() {
    let server = MockServer::start();
    let ok_mock = server.mock(|when, then| {
        when.method(POST).path("/upload_chunk").body_contains("AAAA");
        then.status(200);
    });
    let fail_mock = server.mock(|when, then| {
        when.method(POST).path("/upload_chunk").body_contains("BBBB");
        then.status(500);
    });
    let merge_mock = server.mock(|when, then| {
        when.method(POST).path("/merge_chunks");
        then.status(200).json_body(report_body());
    });

    let temp_dir = TempDir::new().unwrap();
    let dataset = write_dataset(&temp_dir, "data.csv", b"AAAABBBBCC");

    let config = config_for(&server, true, 4);
    let mut controller = UploadController::new(config, RecordingView::default());

    let err = controller.run(Some(&dataset)).await.unwrap_err();

    ok_mock.assert();
    fail_mock.assert();
    assert_eq!(merge_mock.hits(), 0);
    assert!(matches!(err, ScrubError::ChunkUpload { index: 1, .. }));
    assert!(controller.view().results.is_empty());
}

#[tokio::test]
async fn test_end_to_end_merge_error_surfaces_exact_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/upload_chunk");
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(POST).path("/merge_chunks");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"error": "bad file"}));
    });

    let temp_dir = TempDir::new().unwrap();
    let dataset = write_dataset(&temp_dir, "data.csv", b"AAAABBBBCC");

    let config = config_for(&server, true, 4);
    let mut controller = UploadController::new(config, RecordingView::default());

    controller.run(Some(&dataset)).await.unwrap_err();

    assert_eq!(controller.view().errors, vec!["bad file".to_string()]);
    assert!(controller.view().results.is_empty());
}

#[tokio::test]
async fn test_no_file_selected_is_synchronous_and_offline() {
    let server = MockServer::start();
    let upload_mock = server.mock(|when, then| {
        when.method(POST).path("/upload");
        then.status(200);
    });
    let chunk_mock = server.mock(|when, then| {
        when.method(POST).path("/upload_chunk");
        then.status(200);
    });
    let merge_mock = server.mock(|when, then| {
        when.method(POST).path("/merge_chunks");
        then.status(200);
    });

    let config = config_for(&server, true, 4);
    let mut controller = UploadController::new(config, RecordingView::default());

    let err = controller.run(None).await.unwrap_err();

    assert!(matches!(err, ScrubError::NoFileSelected));
    assert_eq!(upload_mock.hits(), 0);
    assert_eq!(chunk_mock.hits(), 0);
    assert_eq!(merge_mock.hits(), 0);
    assert_eq!(
        controller.view().errors,
        vec!["Please select a file before uploading.".to_string()]
    );
}

#[tokio::test]
async fn test_config_provider_is_wired_from_cli_values() {
    let server = MockServer::start();
    let config = CliConfig {
        file: Some(std::path::PathBuf::from("data.csv")),
        server_url: server.base_url(),
        chunked: true,
        chunk_size: 1024,
        output_path: Some("./output".to_string()),
        verbose: false,
    };

    assert_eq!(config.server_url(), server.base_url());
    assert_eq!(config.chunk_size(), 1024);
    assert!(config.chunked_upload());
    assert_eq!(config.output_path(), Some("./output"));
}
