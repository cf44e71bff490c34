use crate::common::{http_config, pagespeed_config, RecordingReporter, SAMPLE_PAGE};
use seolyzer::analyzer::Analyzer;
use seolyzer::output::{report_row, PAGESPEED_HEADERS};
use seolyzer::pagespeed::{PageSpeedClient, PageSpeedOutcome, PageSpeedScores};
use seolyzer::runner::analyze_urls;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PSI_PATH: &str = "/pagespeedonline/v5/runPagespeed";

fn lighthouse_body() -> serde_json::Value {
    serde_json::json!({
        "lighthouseResult": {
            "categories": { "performance": { "score": 0.87 } },
            "audits": {
                "largest-contentful-paint": { "displayValue": "2.1 s" },
                "cumulative-layout-shift": { "displayValue": "0.05" },
                "interactive": { "displayValue": "3.4 s" }
            }
        }
    })
}

#[tokio::test]
async fn test_pagespeed_scores_extracted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PSI_PATH))
        .and(query_param("url", "https://example.com/"))
        .and(query_param("key", "test-key"))
        .and(query_param("strategy", "desktop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lighthouse_body()))
        .mount(&mock_server)
        .await;

    let config = pagespeed_config(format!("{}{}", mock_server.uri(), PSI_PATH));
    let client = PageSpeedClient::new(&config, Some("test-key".to_string())).unwrap();

    let outcome = client.analyze("https://example.com/").await;

    assert_eq!(
        outcome,
        PageSpeedOutcome::Scores(PageSpeedScores {
            score: Some("0.87".to_string()),
            lcp: Some("2.1 s".to_string()),
            cls: Some("0.05".to_string()),
            fid: Some("3.4 s".to_string()),
        })
    );
}

#[tokio::test]
async fn test_pagespeed_http_error_degrades() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PSI_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("{\"error\": {}}"))
        .mount(&mock_server)
        .await;

    let config = pagespeed_config(format!("{}{}", mock_server.uri(), PSI_PATH));
    let client = PageSpeedClient::new(&config, Some("bad-key".to_string())).unwrap();

    assert_eq!(
        client.analyze("https://example.com/").await,
        PageSpeedOutcome::Error("HTTP 400".to_string())
    );
}

#[tokio::test]
async fn test_pagespeed_malformed_body_degrades() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PSI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let config = pagespeed_config(format!("{}{}", mock_server.uri(), PSI_PATH));
    let client = PageSpeedClient::new(&config, Some("test-key".to_string())).unwrap();

    assert!(matches!(
        client.analyze("https://example.com/").await,
        PageSpeedOutcome::Error(_)
    ));
}

#[tokio::test]
async fn test_pagespeed_attached_to_reports() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_PAGE))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(PSI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(lighthouse_body()))
        .mount(&mock_server)
        .await;

    let analyzer = Analyzer::new(&http_config(5)).unwrap();
    let config = pagespeed_config(format!("{}{}", mock_server.uri(), PSI_PATH));
    let pagespeed = PageSpeedClient::new(&config, Some("test-key".to_string())).unwrap();
    let urls = vec![format!("{}/page", mock_server.uri())];

    let reports = analyze_urls(&analyzer, Some(&pagespeed), &urls, &RecordingReporter::default()).await;
    analyzer.close();

    let row = report_row(&reports[0], true);
    assert_eq!(row.len(), 14 + PAGESPEED_HEADERS.len());
    assert_eq!(&row[14..], ["0.87", "2.1 s", "0.05", "3.4 s"]);
}

#[tokio::test]
async fn test_missing_key_does_not_stop_analysis() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_PAGE))
        .mount(&mock_server)
        .await;

    let analyzer = Analyzer::new(&http_config(5)).unwrap();
    let config = pagespeed_config(format!("{}{}", mock_server.uri(), PSI_PATH));
    let pagespeed = PageSpeedClient::new(&config, None).unwrap();
    let urls = vec![format!("{}/page", mock_server.uri())];

    let reports = analyze_urls(&analyzer, Some(&pagespeed), &urls, &RecordingReporter::default()).await;

    assert!(reports[0].outcome.analysis().is_some());
    assert_eq!(
        reports[0].pagespeed,
        Some(PageSpeedOutcome::Error("No API key set".to_string()))
    );
}
