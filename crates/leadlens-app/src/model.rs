// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use time::{Duration, OffsetDateTime, Time};

use crate::ids::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    Twitter,
    Reddit,
}

impl Source {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Reddit => "reddit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "twitter" => Some(Self::Twitter),
            "reddit" => Some(Self::Reddit),
            _ => None,
        }
    }

    pub const fn target_label(self) -> &'static str {
        match self {
            Self::Twitter => "@",
            Self::Reddit => "r/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Hourly,
    Daily,
    Weekly,
}

impl Frequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "monday" => Some(Self::Monday),
            "tuesday" => Some(Self::Tuesday),
            "wednesday" => Some(Self::Wednesday),
            "thursday" => Some(Self::Thursday),
            "friday" => Some(Self::Friday),
            "saturday" => Some(Self::Saturday),
            "sunday" => Some(Self::Sunday),
            _ => None,
        }
    }

    const fn to_time_weekday(self) -> time::Weekday {
        match self {
            Self::Monday => time::Weekday::Monday,
            Self::Tuesday => time::Weekday::Tuesday,
            Self::Wednesday => time::Weekday::Wednesday,
            Self::Thursday => time::Weekday::Thursday,
            Self::Friday => time::Weekday::Friday,
            Self::Saturday => time::Weekday::Saturday,
            Self::Sunday => time::Weekday::Sunday,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFilter {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeFilter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hour" => Some(Self::Hour),
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    Scrape,
    Accounts,
    Reports,
    Schedules,
}

impl TabKind {
    pub const ALL: [Self; 4] = [Self::Scrape, Self::Accounts, Self::Reports, Self::Schedules];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Scrape => "scrape",
            Self::Accounts => "accounts",
            Self::Reports => "reports",
            Self::Schedules => "schedules",
        }
    }
}

/// An account surfaced by keyword or reference-based discovery. The lead
/// score is computed by the backend and treated as opaque here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub display_name: String,
    pub followers: Option<i64>,
    pub account_type: String,
    pub lead_score: Option<i64>,
    pub matched_keywords: Vec<String>,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub id: ReportId,
    pub username: String,
    pub source: Source,
    pub keywords: Vec<String>,
    pub item_count: i64,
    pub account_type: String,
    pub lead_score: Option<i64>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDetail {
    pub summary: ReportSummary,
    pub content: String,
    pub report_file: Option<String>,
    pub json_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    pub username: String,
    pub keywords: Vec<String>,
    pub frequency: Frequency,
    pub time_of_day: Option<Time>,
    pub weekday: Option<Weekday>,
    pub enabled: bool,
    pub last_run: Option<OffsetDateTime>,
    pub created_at: Option<OffsetDateTime>,
}

impl Schedule {
    /// Next occurrence strictly after `now`, for display only; the backend
    /// owns actual schedule execution.
    pub fn next_run_after(&self, now: OffsetDateTime) -> Option<OffsetDateTime> {
        if !self.enabled {
            return None;
        }
        match self.frequency {
            Frequency::Hourly => {
                let top = now.replace_time(Time::from_hms(now.hour(), 0, 0).ok()?);
                Some(top + Duration::hours(1))
            }
            Frequency::Daily => {
                let at = self.time_of_day?;
                let today = now.replace_time(at);
                Some(if today > now {
                    today
                } else {
                    today + Duration::days(1)
                })
            }
            Frequency::Weekly => {
                let at = self.time_of_day?;
                let target = self.weekday?.to_time_weekday();
                let mut candidate = now.replace_time(at);
                while candidate.weekday() != target || candidate <= now {
                    candidate += Duration::days(1);
                }
                Some(candidate)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeOutcome {
    pub source: Source,
    pub target: String,
    pub item_count: i64,
    pub report_file: String,
    pub json_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulkEntryResult {
    Scraped { item_count: i64 },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkEntryOutcome {
    pub username: String,
    pub result: BulkEntryResult,
}

impl BulkEntryOutcome {
    pub const fn succeeded(&self) -> bool {
        matches!(self.result, BulkEntryResult::Scraped { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountSortKey {
    LeadScore,
    Followers,
    Username,
}

impl AccountSortKey {
    pub const ALL: [Self; 3] = [Self::LeadScore, Self::Followers, Self::Username];

    pub const fn label(self) -> &'static str {
        match self {
            Self::LeadScore => "lead score",
            Self::Followers => "followers",
            Self::Username => "username",
        }
    }

    pub const fn comparator(self) -> fn(&Account, &Account) -> Ordering {
        match self {
            Self::LeadScore => cmp_account_lead_score,
            Self::Followers => cmp_account_followers,
            Self::Username => cmp_account_username,
        }
    }
}

// Numeric keys order descending: highest-scoring entries surface first.
fn cmp_account_lead_score(left: &Account, right: &Account) -> Ordering {
    right.lead_score.cmp(&left.lead_score)
}

fn cmp_account_followers(left: &Account, right: &Account) -> Ordering {
    right.followers.cmp(&left.followers)
}

fn cmp_account_username(left: &Account, right: &Account) -> Ordering {
    left.username
        .to_ascii_lowercase()
        .cmp(&right.username.to_ascii_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportSortKey {
    CreatedAt,
    LeadScore,
    ItemCount,
}

impl ReportSortKey {
    pub const ALL: [Self; 3] = [Self::CreatedAt, Self::LeadScore, Self::ItemCount];

    pub const fn label(self) -> &'static str {
        match self {
            Self::CreatedAt => "created",
            Self::LeadScore => "lead score",
            Self::ItemCount => "items",
        }
    }

    pub const fn comparator(self) -> fn(&ReportSummary, &ReportSummary) -> Ordering {
        match self {
            Self::CreatedAt => cmp_report_created_at,
            Self::LeadScore => cmp_report_lead_score,
            Self::ItemCount => cmp_report_item_count,
        }
    }
}

fn cmp_report_created_at(left: &ReportSummary, right: &ReportSummary) -> Ordering {
    right.created_at.cmp(&left.created_at)
}

fn cmp_report_lead_score(left: &ReportSummary, right: &ReportSummary) -> Ordering {
    right.lead_score.cmp(&left.lead_score)
}

fn cmp_report_item_count(left: &ReportSummary, right: &ReportSummary) -> Ordering {
    right.item_count.cmp(&left.item_count)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleSortKey {
    LastRun,
    Username,
}

impl ScheduleSortKey {
    pub const ALL: [Self; 2] = [Self::LastRun, Self::Username];

    pub const fn label(self) -> &'static str {
        match self {
            Self::LastRun => "last run",
            Self::Username => "username",
        }
    }

    pub const fn comparator(self) -> fn(&Schedule, &Schedule) -> Ordering {
        match self {
            Self::LastRun => cmp_schedule_last_run,
            Self::Username => cmp_schedule_username,
        }
    }
}

fn cmp_schedule_last_run(left: &Schedule, right: &Schedule) -> Ordering {
    right.last_run.cmp(&left.last_run)
}

fn cmp_schedule_username(left: &Schedule, right: &Schedule) -> Ordering {
    left.username
        .to_ascii_lowercase()
        .cmp(&right.username.to_ascii_lowercase())
}

/// Split a comma-separated keyword field the way the backend expects:
/// trimmed, empties dropped.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn format_keywords(keywords: &[String]) -> String {
    keywords.join(", ")
}

pub fn parse_time_of_day(raw: &str) -> Option<Time> {
    let (hour, minute) = raw.split_once(':')?;
    let hour: u8 = hour.parse().ok()?;
    let minute: u8 = minute.parse().ok()?;
    Time::from_hms(hour, minute, 0).ok()
}

pub fn format_countdown(now: OffsetDateTime, next: OffsetDateTime) -> String {
    let remaining = next - now;
    if remaining <= Duration::ZERO {
        return "due".to_owned();
    }
    let total_minutes = remaining.whole_minutes();
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes % (24 * 60)) / 60;
    let minutes = total_minutes % 60;
    if days > 0 {
        format!("in {days}d {hours}h")
    } else if hours > 0 {
        format!("in {hours}h {minutes}m")
    } else if minutes > 0 {
        format!("in {minutes}m")
    } else {
        format!("in {}s", remaining.whole_seconds())
    }
}
