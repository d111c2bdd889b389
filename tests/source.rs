use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pushkind_sales::feed::SalesFeed;
use pushkind_sales::source::{CsvSource, FetchError, HttpCsvSource};

mod common;

#[tokio::test]
async fn downloads_sheet_export() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/export"))
        .respond_with(ResponseTemplate::new(200).set_body_string(common::SHEET))
        .expect(1)
        .mount(&server)
        .await;
    let source =
        HttpCsvSource::new(format!("{}/export", server.uri()), Duration::from_secs(5)).unwrap();

    let csv = source.fetch_csv().await.unwrap();

    assert_eq!(csv, common::SHEET);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let source = HttpCsvSource::new(server.uri(), Duration::from_secs(5)).unwrap();

    let result = source.fetch_csv().await;

    assert!(matches!(result, Err(FetchError::Status(status)) if status.as_u16() == 404));
}

#[tokio::test]
async fn slow_export_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;
    let source = HttpCsvSource::new(server.uri(), Duration::from_millis(200)).unwrap();

    let result = source.fetch_csv().await;

    assert!(matches!(result, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn feed_parses_downloaded_sheet() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(common::SHEET))
        .mount(&server)
        .await;
    let source = HttpCsvSource::new(server.uri(), Duration::from_secs(5)).unwrap();
    let feed = SalesFeed::new(std::sync::Arc::new(source));

    assert_eq!(feed.refresh().await.unwrap(), 4);
    let records = feed.records();
    assert_eq!(records[3].plan, "Fiber30, business");
    assert_eq!(records[3].amount_paid, 50.0);
}
