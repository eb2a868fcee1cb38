// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use leadlens_app::{
    Account, BulkEntryOutcome, BulkEntryResult, Frequency, ReportDetail, ReportId, ReportSummary,
    Schedule, ScheduleId, ScrapeOutcome, Source, TimeFilter, Weekday, format_keywords,
    parse_keywords, parse_time_of_day,
};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, PrimitiveDateTime};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSchedule {
    pub username: String,
    pub keywords: Vec<String>,
    pub frequency: Frequency,
    pub time_of_day: Option<String>,
    pub weekday: Option<Weekday>,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("server.base_url must not be empty");
        }
        Url::parse(&base_url)
            .with_context(|| format!("server.base_url {base_url:?} is not a valid URL"))?;

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn scrape(&self, username: &str, keywords: &[String]) -> Result<ScrapeOutcome> {
        let response: ScrapeResponse = self.post_json(
            "/scrape",
            &ScrapeRequest {
                username,
                keywords: &format_keywords(keywords),
            },
        )?;
        Ok(scrape_outcome_from_wire(
            response,
            Source::Twitter,
            username,
        ))
    }

    pub fn scrape_reddit(
        &self,
        subreddit: &str,
        keywords: &[String],
        time_filter: TimeFilter,
    ) -> Result<ScrapeOutcome> {
        let response: ScrapeResponse = self.post_json(
            "/scrape-reddit",
            &RedditScrapeRequest {
                subreddit,
                keywords: &format_keywords(keywords),
                time_filter: time_filter.as_str(),
            },
        )?;
        Ok(scrape_outcome_from_wire(response, Source::Reddit, subreddit))
    }

    pub fn discover_accounts(&self, keywords: &[String], max_results: i64) -> Result<Vec<Account>> {
        let response: AccountListResponse = self.post_json(
            "/discover-accounts",
            &DiscoverRequest {
                keywords: &format_keywords(keywords),
                max_results,
            },
        )?;
        Ok(response
            .accounts
            .into_iter()
            .map(account_from_wire)
            .collect())
    }

    pub fn find_similar_accounts(&self, reference_account: &str) -> Result<Vec<Account>> {
        let response: AccountListResponse = self.post_json(
            "/find-similar-accounts",
            &SimilarAccountsRequest { reference_account },
        )?;
        Ok(response
            .accounts
            .into_iter()
            .map(account_from_wire)
            .collect())
    }

    pub fn bulk_scrape(
        &self,
        usernames: &[String],
        keywords: &[String],
    ) -> Result<Vec<BulkEntryOutcome>> {
        let response: BulkScrapeResponse = self.post_json(
            "/bulk-scrape",
            &BulkScrapeRequest {
                usernames,
                keywords: &format_keywords(keywords),
            },
        )?;
        Ok(response
            .results
            .into_iter()
            .map(bulk_entry_from_wire)
            .collect())
    }

    pub fn list_schedules(&self) -> Result<Vec<Schedule>> {
        let response: ScheduleListResponse = self.get_json("/schedules")?;
        response
            .schedules
            .into_iter()
            .map(schedule_from_wire)
            .collect()
    }

    pub fn create_schedule(&self, schedule: &NewSchedule) -> Result<Schedule> {
        let request = CreateScheduleRequest {
            username: &schedule.username,
            keywords: format_keywords(&schedule.keywords),
            frequency: schedule.frequency.as_str(),
            time: schedule.time_of_day.as_deref(),
            day: schedule.weekday.map(Weekday::as_str),
            enabled: schedule.enabled,
        };
        let response: ScheduleWire = self.post_json("/schedules", &request)?;
        schedule_from_wire(response)
    }

    pub fn delete_schedule(&self, id: ScheduleId) -> Result<()> {
        let url = format!("{}/schedules/{}", self.base_url, id.get());
        let response = self
            .http
            .delete(&url)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }
        Ok(())
    }

    pub fn run_schedule(&self, id: ScheduleId) -> Result<ScrapeOutcome> {
        let url = format!("{}/schedules/{}/run", self.base_url, id.get());
        let response = self
            .http
            .post(&url)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }
        let parsed: ScheduleRunResponse = response.json().context("decode schedule run")?;
        let target = parsed.username.clone().unwrap_or_default();
        Ok(scrape_outcome_from_wire(
            parsed.outcome,
            Source::Twitter,
            &target,
        ))
    }

    pub fn list_reports(&self) -> Result<Vec<ReportSummary>> {
        let response: ReportListResponse = self.get_json("/reports")?;
        response
            .reports
            .into_iter()
            .map(report_summary_from_wire)
            .collect()
    }

    pub fn get_report(&self, id: ReportId) -> Result<ReportDetail> {
        let response: ReportDetailWire = self.get_json(&format!("/reports/{}", id.get()))?;
        let summary = report_summary_from_wire(response.report)?;
        Ok(ReportDetail {
            summary,
            content: response.content,
            report_file: response.report_file,
            json_file: response.json_file,
        })
    }

    /// Fetch a report artifact into `dest_dir` and return the written path.
    pub fn download(&self, file_name: &str, dest_dir: &Path) -> Result<PathBuf> {
        validate_artifact_name(file_name)?;
        let url = format!("{}/download/{file_name}", self.base_url);
        let mut response = self
            .http
            .get(&url)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let dest = dest_dir.join(file_name);
        let mut out = File::create(&dest)
            .with_context(|| format!("create download file {}", dest.display()))?;
        response
            .copy_to(&mut out)
            .with_context(|| format!("write download file {}", dest.display()))?;
        Ok(dest)
    }

    fn get_json<R: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<R> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }
        response
            .json()
            .with_context(|| format!("decode response from {path}"))
    }

    fn post_json<B: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }
        response
            .json()
            .with_context(|| format!("decode response from {path}"))
    }
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach {} -- check that the backend is running ({} )",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(error) = parsed.error
        && !error.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), error);
    }

    if body.len() < 100 && !body.contains('{') && !body.trim().is_empty() {
        return anyhow!("server error ({}): {}", status.as_u16(), body.trim());
    }

    anyhow!("server returned {}", status.as_u16())
}

fn validate_artifact_name(file_name: &str) -> Result<()> {
    if file_name.is_empty()
        || file_name.contains('/')
        || file_name.contains('\\')
        || file_name.contains("..")
    {
        bail!("refusing to download artifact with unsafe name {file_name:?}");
    }
    Ok(())
}

// Backend timestamps are ISO 8601, usually without an offset. Offset-free
// values are taken as UTC.
fn parse_timestamp(raw: &str) -> Result<OffsetDateTime> {
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(parsed);
    }
    let naive = PrimitiveDateTime::parse(
        raw,
        &time::macros::format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
        ),
    )
    .with_context(|| format!("unrecognized timestamp {raw:?}"))?;
    Ok(naive.assume_utc())
}

fn scrape_outcome_from_wire(wire: ScrapeResponse, source: Source, target: &str) -> ScrapeOutcome {
    ScrapeOutcome {
        source,
        target: target.to_owned(),
        item_count: wire.tweet_count,
        report_file: wire.report_file,
        json_file: wire.json_file,
    }
}

fn account_from_wire(wire: AccountWire) -> Account {
    Account {
        username: wire.username,
        display_name: wire.display_name,
        followers: wire.followers,
        account_type: wire.account_type,
        lead_score: wire.lead_score,
        matched_keywords: wire.matched_keywords,
        bio: wire.bio,
    }
}

fn bulk_entry_from_wire(wire: BulkEntryWire) -> BulkEntryOutcome {
    let result = if wire.success {
        BulkEntryResult::Scraped {
            item_count: wire.tweet_count.unwrap_or(0),
        }
    } else {
        BulkEntryResult::Failed {
            error: wire
                .error
                .unwrap_or_else(|| "unknown scrape failure".to_owned()),
        }
    };
    BulkEntryOutcome {
        username: wire.username,
        result,
    }
}

fn schedule_from_wire(wire: ScheduleWire) -> Result<Schedule> {
    let frequency = Frequency::parse(&wire.frequency)
        .ok_or_else(|| anyhow!("unknown schedule frequency {:?}", wire.frequency))?;
    let time_of_day = match wire.time.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(
            parse_time_of_day(raw).ok_or_else(|| anyhow!("unparseable schedule time {raw:?}"))?,
        ),
    };
    let weekday = match wire.day.as_deref() {
        None | Some("") => None,
        Some(raw) => {
            Some(Weekday::parse(raw).ok_or_else(|| anyhow!("unknown schedule day {raw:?}"))?)
        }
    };
    let last_run = wire.last_run.as_deref().map(parse_timestamp).transpose()?;
    let created_at = wire.created_at.as_deref().map(parse_timestamp).transpose()?;

    Ok(Schedule {
        id: ScheduleId::new(wire.id),
        username: wire.username,
        keywords: parse_keywords(&wire.keywords),
        frequency,
        time_of_day,
        weekday,
        enabled: wire.enabled,
        last_run,
        created_at,
    })
}

fn report_summary_from_wire(wire: ReportWire) -> Result<ReportSummary> {
    let source = match wire.source.as_deref() {
        None | Some("") => Source::Twitter,
        Some(raw) => Source::parse(raw).ok_or_else(|| anyhow!("unknown report source {raw:?}"))?,
    };
    let created_at = parse_timestamp(&wire.created_at)?;

    Ok(ReportSummary {
        id: ReportId::new(wire.id),
        username: wire.username,
        source,
        keywords: parse_keywords(&wire.keywords),
        item_count: wire.tweet_count,
        account_type: wire.account_type,
        lead_score: wire.lead_score,
        created_at,
    })
}

#[derive(Debug, Serialize)]
struct ScrapeRequest<'a> {
    username: &'a str,
    keywords: &'a str,
}

#[derive(Debug, Serialize)]
struct RedditScrapeRequest<'a> {
    subreddit: &'a str,
    keywords: &'a str,
    time_filter: &'a str,
}

#[derive(Debug, Serialize)]
struct DiscoverRequest<'a> {
    keywords: &'a str,
    max_results: i64,
}

#[derive(Debug, Serialize)]
struct SimilarAccountsRequest<'a> {
    reference_account: &'a str,
}

#[derive(Debug, Serialize)]
struct BulkScrapeRequest<'a> {
    usernames: &'a [String],
    keywords: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateScheduleRequest<'a> {
    username: &'a str,
    keywords: String,
    frequency: &'a str,
    time: Option<&'a str>,
    day: Option<&'static str>,
    enabled: bool,
}

#[derive(Debug, Deserialize)]
struct ScrapeResponse {
    report_file: String,
    json_file: Option<String>,
    tweet_count: i64,
}

#[derive(Debug, Deserialize)]
struct AccountListResponse {
    accounts: Vec<AccountWire>,
}

#[derive(Debug, Deserialize)]
struct AccountWire {
    username: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    followers: Option<i64>,
    #[serde(default)]
    account_type: String,
    #[serde(default)]
    lead_score: Option<i64>,
    #[serde(default)]
    matched_keywords: Vec<String>,
    #[serde(default)]
    bio: String,
}

#[derive(Debug, Deserialize)]
struct BulkScrapeResponse {
    results: Vec<BulkEntryWire>,
}

#[derive(Debug, Deserialize)]
struct BulkEntryWire {
    username: String,
    success: bool,
    #[serde(default)]
    tweet_count: Option<i64>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScheduleListResponse {
    schedules: Vec<ScheduleWire>,
}

#[derive(Debug, Deserialize)]
struct ScheduleWire {
    id: i64,
    username: String,
    #[serde(default)]
    keywords: String,
    frequency: String,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    day: Option<String>,
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default)]
    last_run: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

const fn default_enabled() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct ScheduleRunResponse {
    #[serde(default)]
    username: Option<String>,
    #[serde(flatten)]
    outcome: ScrapeResponse,
}

#[derive(Debug, Deserialize)]
struct ReportListResponse {
    reports: Vec<ReportWire>,
}

#[derive(Debug, Deserialize)]
struct ReportWire {
    id: i64,
    username: String,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    keywords: String,
    tweet_count: i64,
    #[serde(default)]
    account_type: String,
    #[serde(default)]
    lead_score: Option<i64>,
    created_at: String,
}

#[derive(Debug, Deserialize)]
struct ReportDetailWire {
    report: ReportWire,
    #[serde(default)]
    content: String,
    #[serde(default)]
    report_file: Option<String>,
    #[serde(default)]
    json_file: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{
        ScheduleWire, clean_error_response, parse_timestamp, schedule_from_wire,
        validate_artifact_name,
    };
    use leadlens_app::{Frequency, Weekday};
    use reqwest::StatusCode;
    use time::macros::datetime;

    #[test]
    fn timestamps_parse_with_and_without_offset() {
        assert_eq!(
            parse_timestamp("2026-03-01T09:30:00").unwrap(),
            datetime!(2026-03-01 09:30 UTC)
        );
        assert_eq!(
            parse_timestamp("2026-03-01T09:30:00.123456").unwrap(),
            datetime!(2026-03-01 09:30:00.123456 UTC)
        );
        assert_eq!(
            parse_timestamp("2026-03-01T09:30:00Z").unwrap(),
            datetime!(2026-03-01 09:30 UTC)
        );
        assert!(parse_timestamp("last tuesday").is_err());
    }

    #[test]
    fn error_envelope_is_decoded() {
        let error = clean_error_response(StatusCode::NOT_FOUND, r#"{"error":"No tweets found"}"#);
        assert_eq!(error.to_string(), "server error (404): No tweets found");

        let plain = clean_error_response(StatusCode::BAD_GATEWAY, "upstream timeout");
        assert_eq!(plain.to_string(), "server error (502): upstream timeout");

        let opaque = clean_error_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert!(opaque.to_string().contains("500"));
    }

    #[test]
    fn schedule_wire_converts_fields() {
        let schedule = schedule_from_wire(ScheduleWire {
            id: 7,
            username: "acme".to_owned(),
            keywords: "saas, pricing".to_owned(),
            frequency: "weekly".to_owned(),
            time: Some("09:30".to_owned()),
            day: Some("friday".to_owned()),
            enabled: true,
            last_run: Some("2026-02-27T09:30:00".to_owned()),
            created_at: None,
        })
        .unwrap();

        assert_eq!(schedule.id.get(), 7);
        assert_eq!(schedule.keywords, vec!["saas", "pricing"]);
        assert_eq!(schedule.frequency, Frequency::Weekly);
        assert_eq!(schedule.weekday, Some(Weekday::Friday));
        assert_eq!(schedule.last_run, Some(datetime!(2026-02-27 09:30 UTC)));
        assert_eq!(schedule.created_at, None);
    }

    #[test]
    fn schedule_wire_rejects_unknown_frequency() {
        let result = schedule_from_wire(ScheduleWire {
            id: 1,
            username: "acme".to_owned(),
            keywords: String::new(),
            frequency: "fortnightly".to_owned(),
            time: None,
            day: None,
            enabled: true,
            last_run: None,
            created_at: None,
        });
        assert!(result.is_err());
    }

    #[test]
    fn artifact_names_with_path_components_are_rejected() {
        assert!(validate_artifact_name("acme_report.txt").is_ok());
        assert!(validate_artifact_name("../etc/passwd").is_err());
        assert!(validate_artifact_name("reports/acme.txt").is_err());
        assert!(validate_artifact_name("").is_err());
    }
}
