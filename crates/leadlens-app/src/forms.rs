// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::{Frequency, TimeFilter, Weekday, parse_keywords, parse_time_of_day};

pub const MAX_DISCOVER_RESULTS: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormKind {
    TwitterScrape,
    RedditScrape,
    BulkScrape,
    Discover,
    SimilarAccounts,
    Schedule,
}

impl FormKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::TwitterScrape => "scrape account",
            Self::RedditScrape => "scrape subreddit",
            Self::BulkScrape => "bulk scrape",
            Self::Discover => "discover accounts",
            Self::SimilarAccounts => "similar accounts",
            Self::Schedule => "new schedule",
        }
    }
}

/// Keyword fields stay raw text until submission; the comma-split happens
/// in `keywords()` so the user can edit freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterScrapeFormInput {
    pub username: String,
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedditScrapeFormInput {
    pub subreddit: String,
    pub keywords: String,
    pub time_filter: TimeFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkScrapeFormInput {
    pub usernames: String,
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverFormInput {
    pub keywords: String,
    pub max_results: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarAccountsFormInput {
    pub reference_account: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleFormInput {
    pub username: String,
    pub keywords: String,
    pub frequency: Frequency,
    pub time_of_day: String,
    pub weekday: Option<Weekday>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPayload {
    TwitterScrape(TwitterScrapeFormInput),
    RedditScrape(RedditScrapeFormInput),
    BulkScrape(BulkScrapeFormInput),
    Discover(DiscoverFormInput),
    SimilarAccounts(SimilarAccountsFormInput),
    Schedule(ScheduleFormInput),
}

impl FormPayload {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::TwitterScrape(_) => FormKind::TwitterScrape,
            Self::RedditScrape(_) => FormKind::RedditScrape,
            Self::BulkScrape(_) => FormKind::BulkScrape,
            Self::Discover(_) => FormKind::Discover,
            Self::SimilarAccounts(_) => FormKind::SimilarAccounts,
            Self::Schedule(_) => FormKind::Schedule,
        }
    }

    pub fn blank_for(kind: FormKind) -> Self {
        match kind {
            FormKind::TwitterScrape => Self::TwitterScrape(TwitterScrapeFormInput {
                username: String::new(),
                keywords: String::new(),
            }),
            FormKind::RedditScrape => Self::RedditScrape(RedditScrapeFormInput {
                subreddit: String::new(),
                keywords: String::new(),
                time_filter: TimeFilter::Week,
            }),
            FormKind::BulkScrape => Self::BulkScrape(BulkScrapeFormInput {
                usernames: String::new(),
                keywords: String::new(),
            }),
            FormKind::Discover => Self::Discover(DiscoverFormInput {
                keywords: String::new(),
                max_results: 25,
            }),
            FormKind::SimilarAccounts => Self::SimilarAccounts(SimilarAccountsFormInput {
                reference_account: String::new(),
            }),
            FormKind::Schedule => Self::Schedule(ScheduleFormInput {
                username: String::new(),
                keywords: String::new(),
                frequency: Frequency::Daily,
                time_of_day: "09:00".to_owned(),
                weekday: None,
            }),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::TwitterScrape(form) => form.validate(),
            Self::RedditScrape(form) => form.validate(),
            Self::BulkScrape(form) => form.validate(),
            Self::Discover(form) => form.validate(),
            Self::SimilarAccounts(form) => form.validate(),
            Self::Schedule(form) => form.validate(),
        }
    }
}

impl TwitterScrapeFormInput {
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            bail!("username is required -- enter a handle without the @ and retry");
        }
        Ok(())
    }

    pub fn keywords(&self) -> Vec<String> {
        parse_keywords(&self.keywords)
    }
}

impl RedditScrapeFormInput {
    pub fn validate(&self) -> Result<()> {
        if self.subreddit.trim().is_empty() {
            bail!("subreddit is required -- enter a name without the r/ and retry");
        }
        Ok(())
    }

    pub fn keywords(&self) -> Vec<String> {
        parse_keywords(&self.keywords)
    }
}

impl BulkScrapeFormInput {
    pub fn validate(&self) -> Result<()> {
        let usernames = self.usernames();
        if usernames.is_empty() {
            bail!("at least one username is required -- separate handles with commas");
        }
        let mut seen = Vec::new();
        for username in &usernames {
            let lowered = username.to_ascii_lowercase();
            if seen.contains(&lowered) {
                bail!("duplicate username {username:?} -- remove the repeat and retry");
            }
            seen.push(lowered);
        }
        Ok(())
    }

    pub fn usernames(&self) -> Vec<String> {
        self.usernames
            .split([',', '\n'])
            .map(str::trim)
            .filter(|username| !username.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn keywords(&self) -> Vec<String> {
        parse_keywords(&self.keywords)
    }
}

impl DiscoverFormInput {
    pub fn validate(&self) -> Result<()> {
        if self.keywords().is_empty() {
            bail!("at least one keyword is required -- separate keywords with commas");
        }
        if self.max_results < 1 || self.max_results > MAX_DISCOVER_RESULTS {
            bail!(
                "max results must be between 1 and {MAX_DISCOVER_RESULTS}, got {}",
                self.max_results
            );
        }
        Ok(())
    }

    pub fn keywords(&self) -> Vec<String> {
        parse_keywords(&self.keywords)
    }
}

impl SimilarAccountsFormInput {
    pub fn validate(&self) -> Result<()> {
        if self.reference_account.trim().is_empty() {
            bail!("reference account is required -- enter a handle and retry");
        }
        Ok(())
    }
}

impl ScheduleFormInput {
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            bail!("schedule username is required -- enter a handle and retry");
        }
        if self.frequency != Frequency::Hourly && parse_time_of_day(&self.time_of_day).is_none() {
            bail!(
                "schedule time {:?} is invalid -- use 24h HH:MM, for example 09:30",
                self.time_of_day
            );
        }
        match (self.frequency, self.weekday) {
            (Frequency::Weekly, None) => {
                bail!("weekly schedules need a weekday -- pick one and retry")
            }
            (Frequency::Hourly | Frequency::Daily, Some(_)) => {
                bail!("only weekly schedules take a weekday -- clear it and retry")
            }
            _ => Ok(()),
        }
    }

    pub fn keywords(&self) -> Vec<String> {
        parse_keywords(&self.keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BulkScrapeFormInput, DiscoverFormInput, FormKind, FormPayload, ScheduleFormInput,
        TwitterScrapeFormInput,
    };
    use crate::{Frequency, Weekday};

    #[test]
    fn blank_payload_matches_requested_kind() {
        for kind in [
            FormKind::TwitterScrape,
            FormKind::RedditScrape,
            FormKind::BulkScrape,
            FormKind::Discover,
            FormKind::SimilarAccounts,
            FormKind::Schedule,
        ] {
            assert_eq!(FormPayload::blank_for(kind).kind(), kind);
        }
    }

    #[test]
    fn scrape_validation_requires_username() {
        let payload = FormPayload::TwitterScrape(TwitterScrapeFormInput {
            username: "   ".to_owned(),
            keywords: "saas".to_owned(),
        });
        assert!(payload.validate().is_err());
    }

    #[test]
    fn bulk_validation_rejects_duplicates_case_insensitively() {
        let form = BulkScrapeFormInput {
            usernames: "acme, Acme".to_owned(),
            keywords: String::new(),
        };
        let error = form.validate().expect_err("duplicate should fail");
        assert!(error.to_string().contains("duplicate username"));

        let empty = BulkScrapeFormInput {
            usernames: " , \n ".to_owned(),
            keywords: String::new(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn bulk_usernames_split_on_commas_and_newlines() {
        let form = BulkScrapeFormInput {
            usernames: "acme\nwidgetco, initech ".to_owned(),
            keywords: String::new(),
        };
        assert_eq!(form.usernames(), vec!["acme", "widgetco", "initech"]);
    }

    #[test]
    fn discover_validation_bounds_max_results() {
        let mut form = DiscoverFormInput {
            keywords: "saas".to_owned(),
            max_results: 0,
        };
        assert!(form.validate().is_err());

        form.max_results = 101;
        assert!(form.validate().is_err());

        form.max_results = 25;
        assert!(form.validate().is_ok());

        form.keywords = " , ".to_owned();
        assert!(form.validate().is_err());
    }

    #[test]
    fn schedule_validation_enforces_weekday_rules() {
        let mut form = ScheduleFormInput {
            username: "acme".to_owned(),
            keywords: String::new(),
            frequency: Frequency::Weekly,
            time_of_day: "09:00".to_owned(),
            weekday: None,
        };
        assert!(form.validate().is_err());

        form.weekday = Some(Weekday::Friday);
        assert!(form.validate().is_ok());

        form.frequency = Frequency::Daily;
        assert!(form.validate().is_err());

        form.weekday = None;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn schedule_validation_rejects_malformed_time() {
        let form = ScheduleFormInput {
            username: "acme".to_owned(),
            keywords: String::new(),
            frequency: Frequency::Daily,
            time_of_day: "25:00".to_owned(),
            weekday: None,
        };
        let error = form.validate().expect_err("bad time should fail");
        assert!(error.to_string().contains("HH:MM"));
    }

    #[test]
    fn hourly_schedule_ignores_time_field() {
        let form = ScheduleFormInput {
            username: "acme".to_owned(),
            keywords: String::new(),
            frequency: Frequency::Hourly,
            time_of_day: String::new(),
            weekday: None,
        };
        assert!(form.validate().is_ok());
    }
}
