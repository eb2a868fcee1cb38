// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use leadlens_api::{Client, NewSchedule};
use leadlens_app::{BulkEntryResult, Frequency, ReportId, ScheduleId, Source, Weekday};
use std::io::Read;
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Response, Server};

fn json_response(body: &str, status: u16) -> Response<std::io::Cursor<Vec<u8>>> {
    Response::from_string(body)
        .with_status_code(status)
        .with_header(
            Header::from_bytes("Content-Type", "application/json")
                .expect("valid content type header"),
        )
}

fn read_body(request: &mut tiny_http::Request) -> String {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .expect("request body should be readable");
    body
}

#[test]
fn connection_error_is_actionable() {
    let client =
        Client::new("http://127.0.0.1:1", Duration::from_millis(50)).expect("client should build");
    let error = client
        .list_reports()
        .expect_err("unreachable backend should fail");
    assert!(error.to_string().contains("cannot reach http://127.0.0.1:1"));
}

#[test]
fn scrape_posts_payload_and_decodes_outcome() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let mut request = server.recv().expect("request expected");
        assert_eq!(request.url(), "/scrape");
        let body = read_body(&mut request);
        assert!(body.contains("\"username\":\"acme\""));
        assert!(body.contains("saas, pricing"));

        let response = json_response(
            r#"{"success":true,"report_file":"acme_report.txt","json_file":"acme_report.json","tweet_count":42}"#,
            200,
        );
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let outcome = client.scrape("acme", &["saas".to_owned(), "pricing".to_owned()])?;
    assert_eq!(outcome.source, Source::Twitter);
    assert_eq!(outcome.target, "acme");
    assert_eq!(outcome.item_count, 42);
    assert_eq!(outcome.report_file, "acme_report.txt");
    assert_eq!(outcome.json_file.as_deref(), Some("acme_report.json"));

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn application_errors_surface_the_envelope_message() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let response = json_response(r#"{"error":"No tweets found or API error occurred"}"#, 404);
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client
        .scrape("ghost", &[])
        .expect_err("404 should surface as an error");
    assert_eq!(
        error.to_string(),
        "server error (404): No tweets found or API error occurred"
    );

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn reports_list_and_detail_round_trip() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("list request expected");
        assert_eq!(request.url(), "/reports");
        let response = json_response(
            r#"{"reports":[
                {"id":3,"username":"acme","source":"reddit","keywords":"saas","tweet_count":17,"account_type":"startup","lead_score":80,"created_at":"2026-02-27T09:30:00"},
                {"id":4,"username":"widgetco","keywords":"","tweet_count":5,"account_type":"","lead_score":null,"created_at":"2026-02-28T10:00:00"}
            ]}"#,
            200,
        );
        request.respond(response).expect("response should succeed");

        let request = server.recv().expect("detail request expected");
        assert_eq!(request.url(), "/reports/3");
        let response = json_response(
            r#"{"report":{"id":3,"username":"acme","source":"reddit","keywords":"saas","tweet_count":17,"account_type":"startup","lead_score":80,"created_at":"2026-02-27T09:30:00"},
                "content":"LEAD REPORT\n===========","report_file":"acme_report.txt","json_file":null}"#,
            200,
        );
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let reports = client.list_reports()?;
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].source, Source::Reddit);
    assert_eq!(reports[0].keywords, vec!["saas"]);
    assert_eq!(reports[1].source, Source::Twitter);
    assert_eq!(reports[1].lead_score, None);

    let detail = client.get_report(ReportId::new(3))?;
    assert_eq!(detail.summary.item_count, 17);
    assert!(detail.content.starts_with("LEAD REPORT"));
    assert_eq!(detail.report_file.as_deref(), Some("acme_report.txt"));

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn schedule_create_and_delete_round_trip() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let mut request = server.recv().expect("create request expected");
        assert_eq!(request.url(), "/schedules");
        let body = read_body(&mut request);
        assert!(body.contains("\"frequency\":\"weekly\""));
        assert!(body.contains("\"day\":\"friday\""));

        let response = json_response(
            r#"{"id":9,"username":"acme","keywords":"saas","frequency":"weekly","time":"09:30","day":"friday","enabled":true,"last_run":null,"created_at":"2026-02-27T09:30:00"}"#,
            200,
        );
        request.respond(response).expect("response should succeed");

        let request = server.recv().expect("delete request expected");
        assert_eq!(request.url(), "/schedules/9");
        assert_eq!(*request.method(), tiny_http::Method::Delete);
        request
            .respond(json_response(r#"{"success":true}"#, 200))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let created = client.create_schedule(&NewSchedule {
        username: "acme".to_owned(),
        keywords: vec!["saas".to_owned()],
        frequency: Frequency::Weekly,
        time_of_day: Some("09:30".to_owned()),
        weekday: Some(Weekday::Friday),
        enabled: true,
    })?;
    assert_eq!(created.id, ScheduleId::new(9));
    assert_eq!(created.frequency, Frequency::Weekly);

    client.delete_schedule(created.id)?;

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn bulk_scrape_reports_mixed_outcomes() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        assert_eq!(request.url(), "/bulk-scrape");
        let response = json_response(
            r#"{"results":[
                {"username":"acme","success":true,"tweet_count":12},
                {"username":"ghost","success":false,"error":"account not found"}
            ]}"#,
            200,
        );
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let outcomes = client.bulk_scrape(&["acme".to_owned(), "ghost".to_owned()], &[])?;
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].succeeded());
    assert_eq!(
        outcomes[1].result,
        BulkEntryResult::Failed {
            error: "account not found".to_owned()
        }
    );

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn download_writes_the_artifact_to_disk() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        assert_eq!(request.url(), "/download/acme_report.txt");
        request
            .respond(Response::from_string("report body").with_status_code(200))
            .expect("response should succeed");
    });

    let dir = tempfile::tempdir()?;
    let client = Client::new(&addr, Duration::from_secs(1))?;
    let path = client.download("acme_report.txt", dir.path())?;
    assert_eq!(std::fs::read_to_string(&path)?, "report body");

    let traversal = client.download("../sneaky.txt", dir.path());
    assert!(traversal.is_err());

    handle.join().expect("server thread should join");
    Ok(())
}
