use super::{FetchConfig, RoadmapFetcher};
use crate::model::status::HealthStatus;
use crate::model::work_item::FetchResult;

fn item_json(module: &str, status: &str) -> String {
    format!(
        r#"{{"moduleName":"{module}","owner":"ana","pm":"li","healthStatus":"{status}","teamWorking":"Core","okrHierarchy":"O1 > KR2"}}"#
    )
}

fn body_with(items: &[String]) -> String {
    format!(
        r#"{{"items":[{}],"total":{}}}"#,
        items.join(","),
        items.len()
    )
}

fn fetcher_for(server: &mockito::Server) -> RoadmapFetcher {
    RoadmapFetcher::new(FetchConfig {
        base_url: server.url(),
        endpoint_path: "/api/execution-items".to_string(),
    })
}

#[test]
fn fetcher_starts_empty_and_idle() {
    let fetcher = RoadmapFetcher::new(FetchConfig::default());
    assert!(fetcher.items().is_empty());
    assert!(!fetcher.loading());
    assert!(fetcher.error().is_none());
}

#[tokio::test]
async fn load_populates_items_in_response_order() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/execution-items")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body_with(&[
            item_json("Payments", "on-track"),
            item_json("Search", "at-risk"),
            item_json("Billing", "off-track"),
        ]))
        .create_async()
        .await;

    let mut fetcher = fetcher_for(&server);
    fetcher.load().await;

    assert_eq!(fetcher.items().len(), 3);
    assert_eq!(fetcher.items()[0].module_name, "Payments");
    assert_eq!(fetcher.items()[1].module_name, "Search");
    assert_eq!(fetcher.items()[2].module_name, "Billing");
    assert_eq!(fetcher.items()[1].health_status, HealthStatus::AtRisk);
    assert!(!fetcher.loading());
    assert!(fetcher.error().is_none());
}

#[tokio::test]
async fn consecutive_loads_return_same_items() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/execution-items")
        .with_status(200)
        .with_body(body_with(&[
            item_json("Payments", "on-track"),
            item_json("Search", "at-risk"),
        ]))
        .expect(2)
        .create_async()
        .await;

    let mut fetcher = fetcher_for(&server);
    fetcher.load().await;
    let first: Vec<_> = fetcher.items().to_vec();
    fetcher.load().await;

    assert_eq!(fetcher.items(), first.as_slice());
}

#[tokio::test]
async fn http_error_reports_code_and_status_text() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/execution-items")
        .with_status(404)
        .create_async()
        .await;

    let mut fetcher = fetcher_for(&server);
    fetcher.load().await;

    assert!(fetcher.items().is_empty());
    assert!(!fetcher.loading());
    let error = fetcher.error().expect("error should be set");
    assert!(error.contains("404"), "error was: {error}");
    assert!(error.contains("Not Found"), "error was: {error}");
}

#[tokio::test]
async fn missing_items_field_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/execution-items")
        .with_status(200)
        .with_body(r#"{"total":10}"#)
        .create_async()
        .await;

    let mut fetcher = fetcher_for(&server);
    fetcher.load().await;

    assert!(fetcher.items().is_empty());
    let error = fetcher.error().expect("error should be set");
    assert!(error.contains("items"), "error was: {error}");
}

#[tokio::test]
async fn non_array_items_field_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/execution-items")
        .with_status(200)
        .with_body(r#"{"items":"oops","total":1}"#)
        .create_async()
        .await;

    let mut fetcher = fetcher_for(&server);
    fetcher.load().await;

    let error = fetcher.error().expect("error should be set");
    assert!(error.contains("items"), "error was: {error}");
}

#[tokio::test]
async fn unknown_status_value_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/execution-items")
        .with_status(200)
        .with_body(body_with(&[item_json("Payments", "paused")]))
        .create_async()
        .await;

    let mut fetcher = fetcher_for(&server);
    fetcher.load().await;

    assert!(fetcher.items().is_empty());
    let error = fetcher.error().expect("error should be set");
    assert!(error.contains("healthStatus"), "error was: {error}");
    assert!(error.contains("paused"), "error was: {error}");
}

#[tokio::test]
async fn envelope_totals_are_surfaced() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/execution-items")
        .with_status(200)
        .with_body(format!(
            r#"{{"items":[{}],"total":40,"page":2,"limit":20}}"#,
            item_json("Payments", "on-track")
        ))
        .create_async()
        .await;

    let mut fetcher = fetcher_for(&server);
    fetcher.load().await;

    assert_eq!(fetcher.total(), 40);
    assert_eq!(fetcher.pagination(), Some((2, 20)));
}

#[tokio::test]
async fn failed_refetch_discards_previous_items() {
    let mut server = mockito::Server::new_async().await;
    let ok = server
        .mock("GET", "/api/execution-items")
        .with_status(200)
        .with_body(body_with(&[item_json("Payments", "on-track")]))
        .create_async()
        .await;

    let mut fetcher = fetcher_for(&server);
    fetcher.load().await;
    assert_eq!(fetcher.items().len(), 1);

    ok.remove_async().await;
    let _fail = server
        .mock("GET", "/api/execution-items")
        .with_status(500)
        .create_async()
        .await;

    fetcher.refetch().await;

    assert!(fetcher.items().is_empty());
    assert_eq!(fetcher.total(), 0);
    assert_eq!(fetcher.pagination(), None);
    assert!(fetcher.error().is_some());
    assert!(!fetcher.loading());
}

#[tokio::test]
async fn successful_refetch_clears_previous_error() {
    let mut server = mockito::Server::new_async().await;
    let fail = server
        .mock("GET", "/api/execution-items")
        .with_status(503)
        .create_async()
        .await;

    let mut fetcher = fetcher_for(&server);
    fetcher.load().await;
    assert!(fetcher.error().is_some());

    fail.remove_async().await;
    let _ok = server
        .mock("GET", "/api/execution-items")
        .with_status(200)
        .with_body(body_with(&[item_json("Payments", "on-track")]))
        .create_async()
        .await;

    fetcher.refetch().await;

    assert!(fetcher.error().is_none());
    assert_eq!(fetcher.items().len(), 1);
}

#[tokio::test]
async fn missing_api_config_is_a_configuration_error() {
    // The state every fresh install is in: no config file, so the default
    // endpoint path is set but the base URL is not.
    let mut fetcher = RoadmapFetcher::new(FetchConfig::default());

    fetcher.load().await;

    assert!(fetcher.items().is_empty());
    assert!(!fetcher.loading());
    let error = fetcher.error().expect("error should be set");
    assert!(error.contains("base_url"), "error was: {error}");
    assert!(error.contains("endpoint_path"), "error was: {error}");
}

#[tokio::test]
async fn empty_url_is_a_configuration_error() {
    let mut fetcher = RoadmapFetcher::new(FetchConfig {
        base_url: String::new(),
        endpoint_path: String::new(),
    });

    fetcher.load().await;

    assert!(fetcher.items().is_empty());
    let error = fetcher.error().expect("error should be set");
    assert!(error.contains("base_url"), "error was: {error}");
    assert!(error.contains("endpoint_path"), "error was: {error}");
}

#[tokio::test]
async fn unreachable_server_surfaces_transport_error() {
    // Nothing listens on this port.
    let mut fetcher = RoadmapFetcher::new(FetchConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        endpoint_path: "/api/execution-items".to_string(),
    });

    fetcher.load().await;

    assert!(fetcher.items().is_empty());
    assert!(fetcher.error().is_some());
    assert!(!fetcher.loading());
}

#[test]
fn pagination_requires_both_fields() {
    let paged: FetchResult =
        serde_json::from_str(r#"{"items":[],"total":40,"page":2,"limit":20}"#).unwrap();
    assert_eq!(paged.pagination(), Some((2, 20)));

    let page_only: FetchResult =
        serde_json::from_str(r#"{"items":[],"total":40,"page":2}"#).unwrap();
    assert_eq!(page_only.pagination(), None);

    let limit_only: FetchResult =
        serde_json::from_str(r#"{"items":[],"total":40,"limit":20}"#).unwrap();
    assert_eq!(limit_only.pagination(), None);

    let unpaged: FetchResult = serde_json::from_str(r#"{"items":[],"total":40}"#).unwrap();
    assert_eq!(unpaged.pagination(), None);
}

#[test]
fn work_item_round_trips_camel_case() {
    let json = item_json("Payments", "off-track");
    let item: crate::model::work_item::WorkItem = serde_json::from_str(&json).unwrap();
    assert_eq!(item.module_name, "Payments");
    assert_eq!(item.health_status, HealthStatus::OffTrack);
    assert_eq!(item.team_working, "Core");
    assert_eq!(item.okr_hierarchy, "O1 > KR2");

    let back = serde_json::to_string(&item).unwrap();
    assert!(back.contains("moduleName"));
    assert!(back.contains("okrHierarchy"));
    assert!(back.contains("\"off-track\""));
}
