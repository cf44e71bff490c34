use crate::common::{RecordingReporter, SAMPLE_PAGE};
use seolyzer::config::parse_config;
use seolyzer::output::CSV_HEADERS;
use seolyzer::runner::{analyze_and_report, run, OutputFormat, RunOptions};
use seolyzer::{SeolyzerError, ValidationError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONFIG: &str = r#"
[http]
user-agent = "SEOlyzerTest/1.0"
request-timeout-secs = 2
connect-timeout-secs = 1
"#;

fn write_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, CONFIG).unwrap();
    path
}

fn output_path(dir: &TempDir) -> String {
    dir.path().join("report.csv").to_str().unwrap().to_string()
}

fn options(input: String, output: String, config_path: PathBuf) -> RunOptions {
    RunOptions {
        input,
        output,
        format: OutputFormat::Csv,
        depth: 1,
        pagespeed: false,
        pagespeed_api_key: None,
        config_path,
    }
}

#[tokio::test]
async fn test_missing_config_aborts_before_output_and_network() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let output = output_path(&dir);

    let opts = options(
        format!("{}/", mock_server.uri()),
        output.clone(),
        dir.path().join("missing.toml"),
    );
    let reporter = RecordingReporter::default();
    let result = run(&opts, &reporter).await;

    assert!(matches!(result, Err(SeolyzerError::Config(_))));
    assert!(!Path::new(&output).exists());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
    assert!(reporter.events.borrow().is_empty());
}

#[tokio::test]
async fn test_invalid_input_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = output_path(&dir);
    let config = write_config(&dir);

    let opts = options("neither-a-file-nor-url".to_string(), output.clone(), config);
    let result = run(&opts, &RecordingReporter::default()).await;

    assert!(matches!(result, Err(SeolyzerError::InvalidInput { .. })));
    assert!(!Path::new(&output).exists());
}

#[tokio::test]
async fn test_no_valid_urls_aborts_without_output() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let output = output_path(&dir);
    let config = write_config(&dir);

    // Mock server URLs are IP:port, which the URL validator rejects
    let url_file = dir.path().join("urls.txt");
    std::fs::write(
        &url_file,
        format!("{}/a\n\nnot a url\n{}/b\n", mock_server.uri(), mock_server.uri()),
    )
    .unwrap();

    let opts = options(url_file.to_str().unwrap().to_string(), output.clone(), config);
    let reporter = RecordingReporter::default();
    let result = run(&opts, &reporter).await;

    assert!(matches!(result, Err(SeolyzerError::NoValidUrls)));
    assert!(!Path::new(&output).exists());
    assert!(mock_server.received_requests().await.unwrap().is_empty());

    let events = reporter.events.borrow();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.starts_with("warning Skipping")));
}

#[tokio::test]
async fn test_invalid_depth_aborts_before_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = output_path(&dir);

    let mut opts = options(
        "https://example.com/".to_string(),
        output.clone(),
        dir.path().join("missing.toml"),
    );
    opts.depth = 0;

    let result = run(&opts, &RecordingReporter::default()).await;

    assert!(matches!(
        result,
        Err(SeolyzerError::Validation(ValidationError::DepthTooSmall(0)))
    ));
    assert!(!Path::new(&output).exists());
}

#[tokio::test]
async fn test_analyze_and_report_writes_csv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_PAGE))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = output_path(&dir);
    let config = parse_config(CONFIG).unwrap();
    let urls = vec![
        format!("{}/home", mock_server.uri()),
        format!("{}/missing", mock_server.uri()),
    ];

    let opts = options(urls[0].clone(), output.clone(), dir.path().join("config.toml"));
    let reporter = RecordingReporter::default();
    let summary = analyze_and_report(&config, &urls, &opts, &reporter)
        .await
        .expect("Run should succeed");

    assert_eq!(summary.reports.len(), 2);
    assert_eq!(summary.failed_count(), 1);
    assert_eq!(summary.output, PathBuf::from(&output));

    // Content and timed fetch for the page, a single fetch for the 404
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, CSV_HEADERS.to_vec());

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], urls[0].as_str());
    assert_eq!(&rows[0][1], "Sample Page");
    assert_eq!(&rows[0][3], "2");
    assert_eq!(&rows[1][0], urls[1].as_str());
    assert_eq!(&rows[1][1], "");
    assert_eq!(&rows[1][3], "0");

    let events = reporter.events.borrow();
    assert_eq!(
        *events,
        vec![
            "analyzing 2".to_string(),
            format!("started {}", urls[0]),
            format!("finished {}", urls[0]),
            format!("started {}", urls[1]),
            format!("finished {}", urls[1]),
            format!("saved {}", output),
        ]
    );
}
