// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use leadlens_api::{Client, NewSchedule};
use leadlens_app::{
    Account, BulkEntryOutcome, BulkScrapeFormInput, DiscoverFormInput, PageSize,
    RedditScrapeFormInput, ReportDetail, ReportId, ReportSummary, Schedule, ScheduleFormInput,
    ScheduleId, ScrapeOutcome, SimilarAccountsFormInput, TwitterScrapeFormInput,
};
use std::path::PathBuf;

/// Backs the UI with the HTTP client. Every call is a blocking round trip;
/// the UI stays on its previous data when one fails.
pub struct ApiRuntime {
    client: Client,
    downloads_dir: PathBuf,
    page_size: PageSize,
}

impl ApiRuntime {
    pub fn new(client: Client, downloads_dir: PathBuf, page_size: PageSize) -> Self {
        Self {
            client,
            downloads_dir,
            page_size,
        }
    }
}

impl leadlens_tui::AppRuntime for ApiRuntime {
    fn scrape(&mut self, input: &TwitterScrapeFormInput) -> Result<ScrapeOutcome> {
        self.client.scrape(input.username.trim(), &input.keywords())
    }

    fn scrape_reddit(&mut self, input: &RedditScrapeFormInput) -> Result<ScrapeOutcome> {
        self.client
            .scrape_reddit(input.subreddit.trim(), &input.keywords(), input.time_filter)
    }

    fn bulk_scrape(&mut self, input: &BulkScrapeFormInput) -> Result<Vec<BulkEntryOutcome>> {
        self.client.bulk_scrape(&input.usernames(), &input.keywords())
    }

    fn discover_accounts(&mut self, input: &DiscoverFormInput) -> Result<Vec<Account>> {
        self.client
            .discover_accounts(&input.keywords(), input.max_results)
    }

    fn find_similar_accounts(&mut self, input: &SimilarAccountsFormInput) -> Result<Vec<Account>> {
        self.client
            .find_similar_accounts(input.reference_account.trim())
    }

    fn list_reports(&mut self) -> Result<Vec<ReportSummary>> {
        self.client.list_reports()
    }

    fn get_report(&mut self, id: ReportId) -> Result<ReportDetail> {
        self.client.get_report(id)
    }

    fn download_artifact(&mut self, file_name: &str) -> Result<PathBuf> {
        self.client.download(file_name, &self.downloads_dir)
    }

    fn list_schedules(&mut self) -> Result<Vec<Schedule>> {
        self.client.list_schedules()
    }

    fn create_schedule(&mut self, input: &ScheduleFormInput) -> Result<Schedule> {
        let time_of_day = match input.time_of_day.trim() {
            "" => None,
            time => Some(time.to_owned()),
        };
        self.client.create_schedule(&NewSchedule {
            username: input.username.trim().to_owned(),
            keywords: input.keywords(),
            frequency: input.frequency,
            time_of_day,
            weekday: input.weekday,
            enabled: true,
        })
    }

    fn delete_schedule(&mut self, id: ScheduleId) -> Result<()> {
        self.client.delete_schedule(id)
    }

    fn run_schedule(&mut self, id: ScheduleId) -> Result<ScrapeOutcome> {
        self.client.run_schedule(id)
    }

    fn default_page_size(&self) -> PageSize {
        self.page_size
    }
}
