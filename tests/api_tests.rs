mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::Value;

/// Helper to create a test server
fn setup() -> TestServer {
    TestServer::new(common::create_test_app()).unwrap()
}

/// Markup of the Live section, which is rendered last
fn live_section(html: &str) -> &str {
    let start = html.find("<strong>Live</strong>").expect("live section");
    &html[start..]
}

// ============================================================================
// Timetable page
// ============================================================================

#[tokio::test]
async fn test_timetable_page_defaults() {
    let server = setup();

    let response = server.get("/").await;
    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Test Timetable"));
    assert!(html.contains("Showing 5 out of 5 papers"));

    // Day selector, all days checked on first visit
    assert!(html.contains("Monday, 24th Oct"));
    assert!(html.contains("Tuesday, 25th Oct"));
    assert!(html.contains("Wednesday, 26th Oct"));
    assert!(html.contains(r#"value="2022-10-24" checked"#));

    // Popular tags with counts
    assert!(html.contains("grasping (2)"));
    assert!(html.contains("slam (2)"));

    // Slot headings in day order
    let monday = html.find("Mon 10:00").expect("Monday slot");
    let monday_later = html.find("Mon 10:10").expect("second Monday slot");
    let wednesday = html.find("Wed 14:00").expect("Wednesday slot");
    assert!(monday < monday_later && monday_later < wednesday);

    // Abstract and keywords hidden by default
    assert!(!html.contains("<th>Abstract</th>"));
    assert!(!html.contains("<th>Keywords</th>"));
    assert!(html.contains("https://www.google.com/calendar/render?action=TEMPLATE"));
}

#[tokio::test]
async fn test_timetable_keyword_filter_highlights() {
    let server = setup();

    let response = server.get("/?keywords=SLAM&submitted=1&day=2022-10-24&day=2022-10-25").await;
    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains("Showing 2 out of 5 papers"));
    assert!(html.contains("Robust <b>SLAM</b> in the Dark"));
    assert!(!html.contains("Learning to Grasp Novel Objects"));
    assert!(html.contains(r#"value="SLAM""#));
}

#[tokio::test]
async fn test_timetable_tag_selection() {
    let server = setup();

    let response = server.get("/?tag=grasping").await;
    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains("Showing 2 out of 5 papers"));
    assert!(html.contains(r#"value="grasping" checked"#));
}

#[tokio::test]
async fn test_timetable_no_days_selected() {
    let server = setup();

    let response = server.get("/?submitted=1").await;
    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains("Showing 0 out of 5 papers"));
    assert!(html.contains("No papers match the current filter."));
}

#[tokio::test]
async fn test_timetable_optional_columns_are_escaped() {
    let server = setup();

    let response = server
        .get("/?day=2022-10-24&show_abstract=on&show_keywords=on")
        .await;
    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains("<th>Abstract</th>"));
    assert!(html.contains("<th>Keywords</th>"));
    assert!(html.contains("for &lt;dark&gt; scenes &amp; tunnels."));
    assert!(html.contains("We learn grasp poses from depth images."));
}

#[tokio::test]
async fn test_timetable_live_view_with_clock_override() {
    let server = setup();

    let response = server.get("/?now=2022-10-24T10:05:30").await;
    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains("Mon 10:00 to Mon 11:00"));
}

#[tokio::test]
async fn test_live_view_includes_papers_at_window_start() {
    let server = setup();

    let response = server.get("/?now=2022-10-24T10:05").await;
    response.assert_status_ok();
    let html = response.text();
    let live = live_section(&html);

    assert!(live.contains("Learning to Grasp Novel Objects"));
    assert!(live.contains("Robust SLAM in the Dark"));
    assert!(live.contains("Walking with Reinforcement Learning"));
    assert!(!live.contains("Large Scale Dense Mapping"));
}

#[tokio::test]
async fn test_live_view_excludes_papers_before_window() {
    let server = setup();

    let response = server.get("/?now=2022-10-24T10:10").await;
    response.assert_status_ok();
    let html = response.text();
    let live = live_section(&html);

    assert!(live.contains("Mon 10:10 to Mon 11:10"));
    assert!(!live.contains("Learning to Grasp Novel Objects"));
    assert!(!live.contains("Robust SLAM in the Dark"));
    assert!(live.contains("Walking with Reinforcement Learning"));
}

#[tokio::test]
async fn test_live_view_excludes_papers_at_window_end() {
    let server = setup();

    let response = server.get("/?now=2022-10-24T09:10").await;
    response.assert_status_ok();
    let html = response.text();
    let live = live_section(&html);

    assert!(live.contains("Mon 09:10 to Mon 10:10"));
    assert!(live.contains("Learning to Grasp Novel Objects"));
    assert!(live.contains("Robust SLAM in the Dark"));
    assert!(!live.contains("Walking with Reinforcement Learning"));
}

#[tokio::test]
async fn test_live_view_empty_window() {
    let server = setup();

    let response = server.get("/?now=2022-10-25T18:00").await;
    response.assert_status_ok();
    let html = response.text();

    assert!(live_section(&html).contains("Nothing scheduled in this window."));
}

#[tokio::test]
async fn test_timetable_htmx_partial() {
    let server = setup();

    let response = server
        .get("/?keywords=walking")
        .add_header(
            HeaderName::from_static("hx-request"),
            HeaderValue::from_static("true"),
        )
        .await;
    response.assert_status_ok();
    let html = response.text();

    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Showing 1 out of 5 papers"));
    assert!(html.contains("<b>Walking</b> with Reinforcement Learning"));
}

#[tokio::test]
async fn test_timetable_bad_parameters() {
    let server = setup();

    server.get("/?day=Monday").await.assert_status(StatusCode::BAD_REQUEST);
    server.get("/?now=tomorrow").await.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_timetable_now_at_end_of_calendar() {
    let server = setup();

    // parses, but the live window would end past the last representable time
    server
        .get("/?now=%2B262142-12-31T23:30")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

// ============================================================================
// JSON API
// ============================================================================

#[tokio::test]
async fn test_api_papers_unfiltered() {
    let server = setup();

    let response = server.get("/api/papers").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["shown"], 5);
    assert_eq!(body["total"], 5);
    let papers = body["papers"].as_array().unwrap();
    assert_eq!(papers[0]["id"], "Paper MoA-1.1");
    assert_eq!(papers[0]["room"], "1");
    assert_eq!(papers[0]["time"], "10:00");
    assert_eq!(papers[0]["start"], "2022-10-24T10:00:00");
    assert_eq!(papers[0]["keywords"], "Grasping, Deep Learning in Grasping and Manipulation");
    assert_eq!(papers[0]["abstract"], "We learn grasp poses from depth images.");
    assert_eq!(papers[4]["room"], "Annex Hall");
}

#[tokio::test]
async fn test_api_papers_filtered() {
    let server = setup();

    let response = server.get("/api/papers?tag=slam&day=2022-10-24").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["shown"], 1);
    assert_eq!(body["total"], 5);
    assert_eq!(body["terms"], serde_json::json!(["slam"]));
    assert_eq!(body["papers"][0]["title"], "Robust SLAM in the Dark");
}

#[tokio::test]
async fn test_api_papers_every_term_must_match() {
    let server = setup();

    let response = server.get("/api/papers?keywords=learning%20grasp").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["shown"], 1);
    assert_eq!(body["papers"][0]["id"], "Paper MoA-1.1");
}

#[tokio::test]
async fn test_api_tags() {
    let server = setup();

    let response = server.get("/api/tags").await;
    response.assert_status_ok();
    let tags: Vec<Value> = response.json();

    assert_eq!(tags.len(), 8);
    assert_eq!(tags[0]["name"], "grasping");
    assert_eq!(tags[0]["count"], 2);
    assert_eq!(tags[1]["name"], "slam");
    assert_eq!(tags[1]["count"], 2);
    assert!(tags[2..].iter().all(|t| t["count"] == 1));
}

#[tokio::test]
async fn test_api_days() {
    let server = setup();

    let response = server.get("/api/days").await;
    response.assert_status_ok();
    let days: Vec<Value> = response.json();

    let dates: Vec<&str> = days.iter().map(|d| d["date"].as_str().unwrap()).collect();
    assert_eq!(dates, vec!["2022-10-24", "2022-10-25", "2022-10-26"]);
}

#[tokio::test]
async fn test_openapi_document() {
    let server = setup();

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();
    let doc: Value = response.json();

    assert!(doc["paths"]["/api/papers"].is_object());
    assert!(doc["paths"]["/api/tags"].is_object());
    assert!(doc["components"]["schemas"]["ScheduledPaper"].is_object());

    let params: Vec<&str> = doc["paths"]["/api/papers"]["get"]["parameters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(params, vec!["day", "tag", "keywords", "submitted"]);
}
