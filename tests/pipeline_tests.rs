//! End-to-end tests for the scan pipeline
//!
//! These tests run the full two-pass scan against a wiremock server
//! serving fixture listing and detail pages, and check the TSV table
//! written at the end.

use listsift::config::{Config, FetcherConfig, OutputConfig, ScanConfig};
use listsift::crawler::run_scan;
use listsift::fetch::HttpFetcher;
use listsift::output::{write_results, TsvSink};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a config pointed at the mock server
fn test_config(server_uri: &str, total: u32, per_page: u32, keywords: Vec<&str>) -> Config {
    Config {
        scan: ScanConfig {
            index_url_template: format!("{}/list?tn={{tag}}&p={{page}}", server_uri),
            detail_url_base: format!("{}/detail/", server_uri),
            page_size: per_page,
            total_item_count: total,
            tag_number: 2,
            keywords: keywords.into_iter().map(String::from).collect(),
            summary_limit: 50,
            skip_failed_details: false,
        },
        fetcher: FetcherConfig {
            max_concurrent_details: 1,
            request_timeout_secs: 5,
            user_agents: vec!["listsift-test/1.0".to_string()],
        },
        output: OutputConfig {
            result_path: "./unused.tsv".to_string(),
        },
    }
}

/// Renders a fixture list page from (link, title, date) triples
fn list_page(items: &[(&str, &str, &str)]) -> String {
    let body: String = items
        .iter()
        .map(|(link, title, date)| {
            format!(
                r#"<li><a href="{}"><span class="b1">1</span><span class="b2">{}</span><span class="b4">{}</span></a></li>"#,
                link, title, date
            )
        })
        .collect();
    format!(
        r#"<html><body><div id="part_02"><div class="blk01"><div><ul>{}</ul></div></div></div></body></html>"#,
        body
    )
}

/// Renders a fixture detail page with one content node per paragraph
fn detail_page(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<tr><td><p><span>{}</span></p></td></tr>", p))
        .collect();
    format!(
        r#"<html><body><table id="myTable">{}</table></body></html>"#,
        body
    )
}

async fn mount_list_page(server: &MockServer, page: u32, body: String) {
    Mock::given(method("GET"))
        .and(path("/list"))
        .and(query_param("tn", "2"))
        .and(query_param("p", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_detail_page(server: &MockServer, id: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("/detail/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_scan_with_keyword_filter() {
    let server = MockServer::start().await;

    // 97 items at 20 per page: all five pages must be visited, and page 2
    // repeats an entry from page 1
    mount_list_page(
        &server,
        1,
        list_page(&[
            ("a1", "Recovery notice", "2022-01-01"),
            ("a2", "Budget report", "2022-01-02"),
        ]),
    )
    .await;
    mount_list_page(
        &server,
        2,
        list_page(&[
            ("a1", "Duplicate of a1", "2022-09-09"),
            ("a3", "Weather bulletin", "2022-01-03"),
        ]),
    )
    .await;
    for page in 3..=5 {
        mount_list_page(&server, page, list_page(&[("a4", "Filler", "2022-01-04")])).await;
    }

    mount_detail_page(
        &server,
        "a1",
        detail_page(&["economic recovery plan", "unrelated text"]),
    )
    .await;
    mount_detail_page(&server, "a2", detail_page(&["annual budget economic outlook"])).await;
    mount_detail_page(&server, "a3", detail_page(&["tomorrow will be sunny"])).await;
    mount_detail_page(&server, "a4", detail_page(&["nothing relevant"])).await;

    let config = test_config(&server.uri(), 97, 20, vec!["economic"]);
    let fetcher = HttpFetcher::new(&config.fetcher).unwrap();

    let results = run_scan(&config, &fetcher).await.unwrap();

    // a3 and a4 have no keyword match; a1's duplicate was deduped
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].url, format!("{}/detail/a1", server.uri()));
    assert_eq!(results[0].title, "Recovery notice");
    assert_eq!(results[0].published_at, "2022-01-01");
    assert_eq!(results[0].summary, "economic recovery plan");
    assert_eq!(results[1].summary, "annual budget economic outlook");
}

#[tokio::test]
async fn test_dedup_keeps_first_seen_entry() {
    let server = MockServer::start().await;

    mount_list_page(&server, 1, list_page(&[("a1", "Original title", "2022-01-01")])).await;
    mount_list_page(&server, 2, list_page(&[("a1", "Other title", "2022-02-02")])).await;
    mount_detail_page(&server, "a1", detail_page(&["anything"])).await;

    // Passthrough so the entry definitely comes out the other end
    let config = test_config(&server.uri(), 25, 20, vec![]);
    let fetcher = HttpFetcher::new(&config.fetcher).unwrap();

    let results = run_scan(&config, &fetcher).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Original title");
    assert_eq!(results[0].published_at, "2022-01-01");
}

#[tokio::test]
async fn test_passthrough_mode_emits_all_with_empty_summaries() {
    let server = MockServer::start().await;

    mount_list_page(
        &server,
        1,
        list_page(&[("a1", "One", "2022-01-01"), ("a2", "Two", "2022-01-02")]),
    )
    .await;
    mount_detail_page(&server, "a1", detail_page(&["text"])).await;
    mount_detail_page(&server, "a2", detail_page(&["text"])).await;

    let config = test_config(&server.uri(), 2, 20, vec![]);
    let fetcher = HttpFetcher::new(&config.fetcher).unwrap();

    let results = run_scan(&config, &fetcher).await.unwrap();

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.summary.is_empty()));
}

#[tokio::test]
async fn test_summary_truncation_at_limit() {
    let server = MockServer::start().await;

    // 60 characters of content against a limit of 50
    let long_text = "economic".to_string() + &"x".repeat(52);
    mount_list_page(&server, 1, list_page(&[("a1", "Long", "2022-01-01")])).await;
    mount_detail_page(&server, "a1", detail_page(&[&long_text])).await;

    let config = test_config(&server.uri(), 1, 20, vec!["economic"]);
    let fetcher = HttpFetcher::new(&config.fetcher).unwrap();

    let results = run_scan(&config, &fetcher).await.unwrap();

    assert_eq!(results.len(), 1);
    let summary = &results[0].summary;
    assert_eq!(summary.chars().count(), 52); // 50 chars + ".." marker
    assert!(summary.ends_with(".."));
    assert!(summary.starts_with("economic"));
}

#[tokio::test]
async fn test_missing_list_page_aborts_run() {
    let server = MockServer::start().await;

    mount_list_page(&server, 1, list_page(&[("a1", "One", "2022-01-01")])).await;
    // Page 2 is never mounted; wiremock answers 404

    let config = test_config(&server.uri(), 25, 20, vec![]);
    let fetcher = HttpFetcher::new(&config.fetcher).unwrap();

    let result = run_scan(&config, &fetcher).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_broken_detail_page_aborts_unless_skipped() {
    let server = MockServer::start().await;

    mount_list_page(
        &server,
        1,
        list_page(&[("a1", "One", "2022-01-01"), ("a2", "Two", "2022-01-02")]),
    )
    .await;
    mount_detail_page(&server, "a1", detail_page(&["text"])).await;
    // a2's detail page is never mounted

    let mut config = test_config(&server.uri(), 2, 20, vec![]);
    let fetcher = HttpFetcher::new(&config.fetcher).unwrap();

    assert!(run_scan(&config, &fetcher).await.is_err());

    config.scan.skip_failed_details = true;
    let results = run_scan(&config, &fetcher).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "One");
}

#[tokio::test]
async fn test_results_written_as_tsv_table() {
    let server = MockServer::start().await;

    mount_list_page(&server, 1, list_page(&[("a1", "Notice", "2022-01-01")])).await;
    mount_detail_page(&server, "a1", detail_page(&["economic text"])).await;

    let config = test_config(&server.uri(), 1, 20, vec!["economic"]);
    let fetcher = HttpFetcher::new(&config.fetcher).unwrap();

    let results = run_scan(&config, &fetcher).await.unwrap();

    let out = tempfile::NamedTempFile::new().unwrap();
    write_results(&TsvSink::new(), out.path(), results).unwrap();

    let content = std::fs::read_to_string(out.path()).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines[0], "link\ttitle\tdatetime\tsummary");
    assert_eq!(
        lines[1],
        format!(
            "{}/detail/a1\tNotice\t2022-01-01\teconomic text",
            server.uri()
        )
    );
}
