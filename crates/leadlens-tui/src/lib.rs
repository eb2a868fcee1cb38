// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use leadlens_app::{
    Account, AccountSortKey, AppCommand, AppMode, AppState, BulkEntryOutcome, BulkEntryResult,
    BulkScrapeFormInput, DiscoverFormInput, FormKind, FormPayload, Frequency, PageSize,
    PageStripEntry, PagedView, RedditScrapeFormInput, ReportDetail, ReportId, ReportSortKey,
    ReportSummary, Schedule, ScheduleFormInput, ScheduleId, ScheduleSortKey, ScrapeOutcome,
    SimilarAccountsFormInput, TabKind, TimeFilter, TwitterScrapeFormInput, Weekday,
    format_countdown, format_keywords,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs};
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use time::OffsetDateTime;

const SCRAPE_LOG_LIMIT: usize = 40;
const PAGE_SIZE_PRESETS: [PageSize; 4] = [
    PageSize::Rows(10),
    PageSize::Rows(25),
    PageSize::Rows(50),
    PageSize::All,
];

/// The seam between the UI loop and the backend client. `leadlens-cli`
/// implements this over HTTP; tests implement it with canned data.
pub trait AppRuntime {
    fn scrape(&mut self, input: &TwitterScrapeFormInput) -> Result<ScrapeOutcome>;
    fn scrape_reddit(&mut self, input: &RedditScrapeFormInput) -> Result<ScrapeOutcome>;
    fn bulk_scrape(&mut self, input: &BulkScrapeFormInput) -> Result<Vec<BulkEntryOutcome>>;
    fn discover_accounts(&mut self, input: &DiscoverFormInput) -> Result<Vec<Account>>;
    fn find_similar_accounts(&mut self, input: &SimilarAccountsFormInput) -> Result<Vec<Account>>;
    fn list_reports(&mut self) -> Result<Vec<ReportSummary>>;
    fn get_report(&mut self, id: ReportId) -> Result<ReportDetail>;
    fn download_artifact(&mut self, file_name: &str) -> Result<PathBuf>;
    fn list_schedules(&mut self) -> Result<Vec<Schedule>>;
    fn create_schedule(&mut self, input: &ScheduleFormInput) -> Result<Schedule>;
    fn delete_schedule(&mut self, id: ScheduleId) -> Result<()>;
    fn run_schedule(&mut self, id: ScheduleId) -> Result<ScrapeOutcome>;

    fn default_page_size(&self) -> PageSize {
        PageSize::Rows(10)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeLogEntry {
    Completed(ScrapeOutcome),
    Bulk(Vec<BulkEntryOutcome>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormFieldKind {
    Text,
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FormFieldSpec {
    label: &'static str,
    kind: FormFieldKind,
}

const TIME_FILTER_CHOICES: [&str; 6] = ["hour", "day", "week", "month", "year", "all"];
const FREQUENCY_CHOICES: [&str; 3] = ["hourly", "daily", "weekly"];
const WEEKDAY_CHOICES: [&str; 8] = [
    "-",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormUiState {
    kind: FormKind,
    fields: &'static [FormFieldSpec],
    values: Vec<String>,
    choices: Vec<usize>,
    cursor: usize,
}

fn form_field_specs(kind: FormKind) -> &'static [FormFieldSpec] {
    match kind {
        FormKind::TwitterScrape => &[
            FormFieldSpec {
                label: "username",
                kind: FormFieldKind::Text,
            },
            FormFieldSpec {
                label: "keywords",
                kind: FormFieldKind::Text,
            },
        ],
        FormKind::RedditScrape => &[
            FormFieldSpec {
                label: "subreddit",
                kind: FormFieldKind::Text,
            },
            FormFieldSpec {
                label: "keywords",
                kind: FormFieldKind::Text,
            },
            FormFieldSpec {
                label: "time filter",
                kind: FormFieldKind::Choice(&TIME_FILTER_CHOICES),
            },
        ],
        FormKind::BulkScrape => &[
            FormFieldSpec {
                label: "usernames",
                kind: FormFieldKind::Text,
            },
            FormFieldSpec {
                label: "keywords",
                kind: FormFieldKind::Text,
            },
        ],
        FormKind::Discover => &[
            FormFieldSpec {
                label: "keywords",
                kind: FormFieldKind::Text,
            },
            FormFieldSpec {
                label: "max results",
                kind: FormFieldKind::Text,
            },
        ],
        FormKind::SimilarAccounts => &[FormFieldSpec {
            label: "reference account",
            kind: FormFieldKind::Text,
        }],
        FormKind::Schedule => &[
            FormFieldSpec {
                label: "username",
                kind: FormFieldKind::Text,
            },
            FormFieldSpec {
                label: "keywords",
                kind: FormFieldKind::Text,
            },
            FormFieldSpec {
                label: "frequency",
                kind: FormFieldKind::Choice(&FREQUENCY_CHOICES),
            },
            FormFieldSpec {
                label: "time",
                kind: FormFieldKind::Text,
            },
            FormFieldSpec {
                label: "weekday",
                kind: FormFieldKind::Choice(&WEEKDAY_CHOICES),
            },
        ],
    }
}

impl FormUiState {
    fn blank_for(kind: FormKind) -> Self {
        let fields = form_field_specs(kind);
        let mut values = vec![String::new(); fields.len()];
        let mut choices = vec![0; fields.len()];
        match kind {
            FormKind::RedditScrape => {
                // default time filter: week
                choices[2] = 2;
            }
            FormKind::Discover => {
                values[1] = "25".to_owned();
            }
            FormKind::Schedule => {
                // default frequency: daily
                choices[2] = 1;
                values[3] = "09:00".to_owned();
            }
            _ => {}
        }
        Self {
            kind,
            fields,
            values,
            choices,
            cursor: 0,
        }
    }

    fn build_payload(&self) -> Result<FormPayload> {
        let payload = match self.kind {
            FormKind::TwitterScrape => FormPayload::TwitterScrape(TwitterScrapeFormInput {
                username: self.values[0].clone(),
                keywords: self.values[1].clone(),
            }),
            FormKind::RedditScrape => {
                let time_filter = TimeFilter::parse(TIME_FILTER_CHOICES[self.choices[2]])
                    .unwrap_or(TimeFilter::Week);
                FormPayload::RedditScrape(RedditScrapeFormInput {
                    subreddit: self.values[0].clone(),
                    keywords: self.values[1].clone(),
                    time_filter,
                })
            }
            FormKind::BulkScrape => FormPayload::BulkScrape(BulkScrapeFormInput {
                usernames: self.values[0].clone(),
                keywords: self.values[1].clone(),
            }),
            FormKind::Discover => {
                let max_results = self.values[1]
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("max results {:?} is not a number", self.values[1]))?;
                FormPayload::Discover(DiscoverFormInput {
                    keywords: self.values[0].clone(),
                    max_results,
                })
            }
            FormKind::SimilarAccounts => FormPayload::SimilarAccounts(SimilarAccountsFormInput {
                reference_account: self.values[0].clone(),
            }),
            FormKind::Schedule => {
                let frequency = Frequency::parse(FREQUENCY_CHOICES[self.choices[2]])
                    .unwrap_or(Frequency::Daily);
                let weekday = match WEEKDAY_CHOICES[self.choices[4]] {
                    "-" => None,
                    name => Weekday::parse(name),
                };
                FormPayload::Schedule(ScheduleFormInput {
                    username: self.values[0].clone(),
                    keywords: self.values[1].clone(),
                    frequency,
                    time_of_day: self.values[3].clone(),
                    weekday,
                })
            }
        };
        payload.validate()?;
        Ok(payload)
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.fields.len() as isize;
        let next = (self.cursor as isize + delta).rem_euclid(len);
        self.cursor = next as usize;
    }

    fn cycle_choice(&mut self, delta: isize) -> bool {
        let FormFieldKind::Choice(options) = self.fields[self.cursor].kind else {
            return false;
        };
        let len = options.len() as isize;
        let next = (self.choices[self.cursor] as isize + delta).rem_euclid(len);
        self.choices[self.cursor] = next as usize;
        true
    }

    fn push_char(&mut self, ch: char) {
        if matches!(self.fields[self.cursor].kind, FormFieldKind::Text) {
            self.values[self.cursor].push(ch);
        }
    }

    fn pop_char(&mut self) {
        if matches!(self.fields[self.cursor].kind, FormFieldKind::Text) {
            self.values[self.cursor].pop();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FilterInputUiState {
    visible: bool,
    query: String,
}

struct ViewData {
    accounts: PagedView<Account>,
    reports: PagedView<ReportSummary>,
    schedules: PagedView<Schedule>,
    account_sort: Option<AccountSortKey>,
    report_sort: Option<ReportSortKey>,
    schedule_sort: Option<ScheduleSortKey>,
    account_filter: Option<String>,
    report_filter: Option<String>,
    schedule_filter: Option<String>,
    accounts_cursor: usize,
    reports_cursor: usize,
    schedules_cursor: usize,
    scrape_log: Vec<ScrapeLogEntry>,
    form: Option<FormUiState>,
    filter_input: FilterInputUiState,
    report_detail: Option<ReportDetail>,
    help_visible: bool,
    status_token: u64,
}

impl ViewData {
    fn new(page_size: PageSize) -> Self {
        Self {
            accounts: PagedView::new(page_size),
            reports: PagedView::new(page_size),
            schedules: PagedView::new(page_size),
            account_sort: None,
            report_sort: None,
            schedule_sort: None,
            account_filter: None,
            report_filter: None,
            schedule_filter: None,
            accounts_cursor: 0,
            reports_cursor: 0,
            schedules_cursor: 0,
            scrape_log: Vec::new(),
            form: None,
            filter_input: FilterInputUiState::default(),
            report_detail: None,
            help_visible: false,
            status_token: 0,
        }
    }

    fn cursor(&self, tab: TabKind) -> usize {
        match tab {
            TabKind::Accounts => self.accounts_cursor,
            TabKind::Reports => self.reports_cursor,
            TabKind::Schedules => self.schedules_cursor,
            TabKind::Scrape => 0,
        }
    }

    fn set_cursor(&mut self, tab: TabKind, value: usize) {
        match tab {
            TabKind::Accounts => self.accounts_cursor = value,
            TabKind::Reports => self.reports_cursor = value,
            TabKind::Schedules => self.schedules_cursor = value,
            TabKind::Scrape => {}
        }
    }

    fn page_rows(&self, tab: TabKind) -> usize {
        match tab {
            TabKind::Accounts => self.accounts.page_slice().len(),
            TabKind::Reports => self.reports.page_slice().len(),
            TabKind::Schedules => self.schedules.page_slice().len(),
            TabKind::Scrape => 0,
        }
    }

    fn clamp_cursor(&mut self, tab: TabKind) {
        let rows = self.page_rows(tab);
        let cursor = self.cursor(tab);
        self.set_cursor(tab, cursor.min(rows.saturating_sub(1)));
    }

    fn push_log(&mut self, entry: ScrapeLogEntry) {
        self.scrape_log.insert(0, entry);
        self.scrape_log.truncate(SCRAPE_LOG_LIMIT);
    }
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::new(runtime.default_page_size());
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = load_reports(runtime, &mut view_data) {
        state.dispatch(AppCommand::SetStatus(format!("reports load failed: {error}")));
    }
    if let Err(error) = load_schedules(runtime, &mut view_data) {
        state.dispatch(AppCommand::SetStatus(format!(
            "schedules load failed: {error}"
        )));
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn load_reports<R: AppRuntime>(runtime: &mut R, view_data: &mut ViewData) -> Result<()> {
    let reports = runtime.list_reports()?;
    view_data.reports.replace_items(reports);
    view_data.clamp_cursor(TabKind::Reports);
    Ok(())
}

fn load_schedules<R: AppRuntime>(runtime: &mut R, view_data: &mut ViewData) -> Result<()> {
    let schedules = runtime.list_schedules()?;
    view_data.schedules.replace_items(schedules);
    view_data.clamp_cursor(TabKind::Schedules);
    Ok(())
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if view_data.report_detail.is_some() {
        handle_report_detail_key(state, runtime, view_data, internal_tx, key);
        return false;
    }

    if view_data.filter_input.visible {
        handle_filter_input_key(state, view_data, internal_tx, key);
        return false;
    }

    if matches!(state.mode, AppMode::Form(_)) {
        handle_form_key(state, runtime, view_data, internal_tx, key);
        return false;
    }

    handle_nav_key(state, runtime, view_data, internal_tx, key)
}

fn handle_report_detail_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            view_data.report_detail = None;
        }
        KeyCode::Char('w') => {
            let file = view_data
                .report_detail
                .as_ref()
                .and_then(|detail| detail.report_file.clone());
            download_and_report(state, runtime, view_data, internal_tx, file);
        }
        KeyCode::Char('j') => {
            let file = view_data
                .report_detail
                .as_ref()
                .and_then(|detail| detail.json_file.clone());
            download_and_report(state, runtime, view_data, internal_tx, file);
        }
        _ => {}
    }
}

fn download_and_report<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    file: Option<String>,
) {
    let Some(file) = file else {
        emit_status(state, view_data, internal_tx, "no artifact for this report");
        return;
    };
    match runtime.download_artifact(&file) {
        Ok(path) => {
            let message = format!("saved {}", path.display());
            emit_status(state, view_data, internal_tx, message);
        }
        Err(error) => {
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("download failed: {error}"),
            );
        }
    }
}

fn handle_filter_input_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            view_data.filter_input = FilterInputUiState::default();
        }
        KeyCode::Enter => {
            let query = view_data.filter_input.query.clone();
            view_data.filter_input = FilterInputUiState::default();
            let status = apply_filter(view_data, state.active_tab, &query);
            emit_status(state, view_data, internal_tx, status);
        }
        KeyCode::Backspace => {
            view_data.filter_input.query.pop();
        }
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            view_data.filter_input.query.push(ch);
        }
        _ => {}
    }
}

fn apply_filter(view_data: &mut ViewData, tab: TabKind, query: &str) -> String {
    let needle = query.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return clear_filter(view_data, tab);
    }
    match tab {
        TabKind::Accounts => {
            view_data.account_filter = Some(needle.clone());
            view_data
                .accounts
                .set_filter(Some(Box::new(move |account: &Account| {
                    account_matches(account, &needle)
                })));
        }
        TabKind::Reports => {
            view_data.report_filter = Some(needle.clone());
            view_data
                .reports
                .set_filter(Some(Box::new(move |report: &ReportSummary| {
                    report_matches(report, &needle)
                })));
        }
        TabKind::Schedules => {
            view_data.schedule_filter = Some(needle.clone());
            view_data
                .schedules
                .set_filter(Some(Box::new(move |schedule: &Schedule| {
                    schedule_matches(schedule, &needle)
                })));
        }
        TabKind::Scrape => return "filter unavailable here".to_owned(),
    }
    view_data.clamp_cursor(tab);
    format!("filter: {query}")
}

fn clear_filter(view_data: &mut ViewData, tab: TabKind) -> String {
    match tab {
        TabKind::Accounts => {
            view_data.account_filter = None;
            view_data.accounts.clear_filter();
        }
        TabKind::Reports => {
            view_data.report_filter = None;
            view_data.reports.clear_filter();
        }
        TabKind::Schedules => {
            view_data.schedule_filter = None;
            view_data.schedules.clear_filter();
        }
        TabKind::Scrape => return "filter unavailable here".to_owned(),
    }
    view_data.clamp_cursor(tab);
    "filter cleared".to_owned()
}

fn account_matches(account: &Account, needle: &str) -> bool {
    account.username.to_ascii_lowercase().contains(needle)
        || account.display_name.to_ascii_lowercase().contains(needle)
        || account.account_type.to_ascii_lowercase().contains(needle)
        || account.bio.to_ascii_lowercase().contains(needle)
        || account
            .matched_keywords
            .iter()
            .any(|keyword| keyword.to_ascii_lowercase().contains(needle))
}

fn report_matches(report: &ReportSummary, needle: &str) -> bool {
    report.username.to_ascii_lowercase().contains(needle)
        || report.account_type.to_ascii_lowercase().contains(needle)
        || report
            .keywords
            .iter()
            .any(|keyword| keyword.to_ascii_lowercase().contains(needle))
}

fn schedule_matches(schedule: &Schedule, needle: &str) -> bool {
    schedule.username.to_ascii_lowercase().contains(needle)
        || schedule
            .keywords
            .iter()
            .any(|keyword| keyword.to_ascii_lowercase().contains(needle))
}

fn handle_form_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Some(form) = view_data.form.as_mut() else {
        state.dispatch(AppCommand::ExitToNav);
        return;
    };

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            view_data.form = None;
            state.dispatch(AppCommand::ExitToNav);
        }
        (KeyCode::Enter, _) => {
            let payload = match form.build_payload() {
                Ok(payload) => payload,
                Err(error) => {
                    emit_status(
                        state,
                        view_data,
                        internal_tx,
                        format!("form invalid: {error}"),
                    );
                    return;
                }
            };
            match submit_payload(runtime, view_data, &payload) {
                Ok(status) => {
                    view_data.form = None;
                    state.dispatch(AppCommand::ExitToNav);
                    emit_status(state, view_data, internal_tx, status);
                }
                Err(error) => {
                    emit_status(
                        state,
                        view_data,
                        internal_tx,
                        format!("request failed: {error}"),
                    );
                }
            }
        }
        (KeyCode::Tab, _) | (KeyCode::Down, _) => form.move_cursor(1),
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => form.move_cursor(-1),
        (KeyCode::Left, _) => {
            form.cycle_choice(-1);
        }
        (KeyCode::Right, _) => {
            form.cycle_choice(1);
        }
        (KeyCode::Backspace, _) => form.pop_char(),
        (KeyCode::Char(ch), modifiers)
            if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT =>
        {
            form.push_char(ch);
        }
        _ => {}
    }
}

/// Issues the backend request for a validated payload and folds the result
/// into the view. Errors propagate so the form stays open for a retry.
fn submit_payload<R: AppRuntime>(
    runtime: &mut R,
    view_data: &mut ViewData,
    payload: &FormPayload,
) -> Result<String> {
    match payload {
        FormPayload::TwitterScrape(input) => {
            let outcome = runtime.scrape(input)?;
            let status = format!("scraped {} items from @{}", outcome.item_count, input.username);
            view_data.push_log(ScrapeLogEntry::Completed(outcome));
            Ok(status)
        }
        FormPayload::RedditScrape(input) => {
            let outcome = runtime.scrape_reddit(input)?;
            let status = format!(
                "scraped {} items from r/{}",
                outcome.item_count, input.subreddit
            );
            view_data.push_log(ScrapeLogEntry::Completed(outcome));
            Ok(status)
        }
        FormPayload::BulkScrape(input) => {
            let outcomes = runtime.bulk_scrape(input)?;
            let succeeded = outcomes.iter().filter(|entry| entry.succeeded()).count();
            let status = format!("bulk scrape: {succeeded}/{} succeeded", outcomes.len());
            view_data.push_log(ScrapeLogEntry::Bulk(outcomes));
            Ok(status)
        }
        FormPayload::Discover(input) => {
            let accounts = runtime.discover_accounts(input)?;
            let status = format!("{} accounts discovered", accounts.len());
            view_data.accounts.replace_items(accounts);
            view_data.clamp_cursor(TabKind::Accounts);
            Ok(status)
        }
        FormPayload::SimilarAccounts(input) => {
            let accounts = runtime.find_similar_accounts(input)?;
            let status = format!(
                "{} accounts similar to @{}",
                accounts.len(),
                input.reference_account
            );
            view_data.accounts.replace_items(accounts);
            view_data.clamp_cursor(TabKind::Accounts);
            Ok(status)
        }
        FormPayload::Schedule(input) => {
            let created = runtime.create_schedule(input)?;
            let status = format!("schedule #{} created", created.id.get());
            // creation already succeeded; a failed reload keeps the stale rows
            if let Ok(schedules) = runtime.list_schedules() {
                view_data.schedules.replace_items(schedules);
                view_data.clamp_cursor(TabKind::Schedules);
            }
            Ok(status)
        }
    }
}

fn handle_nav_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    let tab = state.active_tab;
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return true,
        (KeyCode::Char('?'), _) => {
            view_data.help_visible = true;
        }
        (KeyCode::Char('f'), KeyModifiers::NONE) | (KeyCode::Tab, KeyModifiers::NONE) => {
            state.dispatch(AppCommand::NextTab);
        }
        (KeyCode::Char('b'), KeyModifiers::NONE) | (KeyCode::BackTab, _) => {
            state.dispatch(AppCommand::PrevTab);
        }
        (KeyCode::Up, _) => {
            let cursor = view_data.cursor(tab);
            view_data.set_cursor(tab, cursor.saturating_sub(1));
        }
        (KeyCode::Down, _) => {
            let cursor = view_data.cursor(tab);
            view_data.set_cursor(tab, cursor.saturating_add(1));
            view_data.clamp_cursor(tab);
        }
        (KeyCode::Left, _) => {
            with_active_view(view_data, tab, |view| view.prev_page());
            view_data.clamp_cursor(tab);
        }
        (KeyCode::Right, _) => {
            with_active_view(view_data, tab, |view| view.next_page());
            view_data.clamp_cursor(tab);
        }
        (KeyCode::Home, _) => {
            with_active_view(view_data, tab, |view| view.go_to_page(1));
            view_data.clamp_cursor(tab);
        }
        (KeyCode::End, _) => {
            with_active_view(view_data, tab, |view| view.go_to_page(usize::MAX));
            view_data.clamp_cursor(tab);
        }
        (KeyCode::Char(ch), KeyModifiers::NONE) if ch.is_ascii_digit() && ch != '0' => {
            let page = usize::from(ch as u8 - b'0');
            with_active_view(view_data, tab, |view| view.go_to_page(page));
            view_data.clamp_cursor(tab);
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) => {
            let status = cycle_sort(view_data, tab);
            emit_status(state, view_data, internal_tx, status);
        }
        (KeyCode::Char('/'), KeyModifiers::NONE) => {
            if tab == TabKind::Scrape {
                emit_status(state, view_data, internal_tx, "filter unavailable here");
            } else {
                view_data.filter_input = FilterInputUiState {
                    visible: true,
                    query: String::new(),
                };
            }
        }
        (KeyCode::Char('c'), KeyModifiers::NONE) => {
            let status = clear_filter(view_data, tab);
            emit_status(state, view_data, internal_tx, status);
        }
        (KeyCode::Char('z'), KeyModifiers::NONE) => {
            let status = cycle_page_size(view_data, tab);
            emit_status(state, view_data, internal_tx, status);
        }
        (KeyCode::Char('r'), KeyModifiers::NONE) => {
            refresh_active_tab(state, runtime, view_data, internal_tx);
        }
        (KeyCode::Char('n'), KeyModifiers::NONE) => {
            let kind = match tab {
                TabKind::Scrape => FormKind::TwitterScrape,
                TabKind::Accounts => FormKind::Discover,
                TabKind::Schedules => FormKind::Schedule,
                TabKind::Reports => {
                    emit_status(state, view_data, internal_tx, "reports are read-only");
                    return false;
                }
            };
            open_form(state, view_data, kind);
        }
        (KeyCode::Char('R'), _) if tab == TabKind::Scrape => {
            open_form(state, view_data, FormKind::RedditScrape);
        }
        (KeyCode::Char('B'), _) if tab == TabKind::Scrape => {
            open_form(state, view_data, FormKind::BulkScrape);
        }
        (KeyCode::Char('S'), _) if tab == TabKind::Accounts => {
            open_form(state, view_data, FormKind::SimilarAccounts);
        }
        (KeyCode::Char('d'), KeyModifiers::NONE) if tab == TabKind::Schedules => {
            delete_selected_schedule(state, runtime, view_data, internal_tx);
        }
        (KeyCode::Char('x'), KeyModifiers::NONE) if tab == TabKind::Schedules => {
            run_selected_schedule(state, runtime, view_data, internal_tx);
        }
        (KeyCode::Enter, _) if tab == TabKind::Reports => {
            open_selected_report(state, runtime, view_data, internal_tx);
        }
        _ => {}
    }
    false
}

fn with_active_view(
    view_data: &mut ViewData,
    tab: TabKind,
    apply: impl FnOnce(&mut dyn PageControls),
) {
    match tab {
        TabKind::Accounts => apply(&mut view_data.accounts),
        TabKind::Reports => apply(&mut view_data.reports),
        TabKind::Schedules => apply(&mut view_data.schedules),
        TabKind::Scrape => {}
    }
}

/// Object-safe subset of `PagedView` used for tab-generic paging keys.
trait PageControls {
    fn prev_page(&mut self);
    fn next_page(&mut self);
    fn go_to_page(&mut self, page: usize);
    fn set_page_size(&mut self, page_size: PageSize);
    fn page_size(&self) -> PageSize;
}

impl<T> PageControls for PagedView<T> {
    fn prev_page(&mut self) {
        PagedView::prev_page(self);
    }

    fn next_page(&mut self) {
        PagedView::next_page(self);
    }

    fn go_to_page(&mut self, page: usize) {
        PagedView::go_to_page(self, page);
    }

    fn set_page_size(&mut self, page_size: PageSize) {
        PagedView::set_page_size(self, page_size);
    }

    fn page_size(&self) -> PageSize {
        PagedView::page_size(self)
    }
}

fn cycle_key<K: Copy + PartialEq>(all: &[K], current: Option<K>) -> Option<K> {
    match current {
        None => all.first().copied(),
        Some(key) => {
            let position = all.iter().position(|entry| *entry == key).unwrap_or(0);
            all.get(position + 1).copied()
        }
    }
}

fn cycle_sort(view_data: &mut ViewData, tab: TabKind) -> String {
    match tab {
        TabKind::Accounts => {
            view_data.account_sort = cycle_key(&AccountSortKey::ALL, view_data.account_sort);
            view_data
                .accounts
                .set_sort(view_data.account_sort.map(AccountSortKey::comparator));
            view_data.clamp_cursor(tab);
            sort_status(view_data.account_sort.map(AccountSortKey::label))
        }
        TabKind::Reports => {
            view_data.report_sort = cycle_key(&ReportSortKey::ALL, view_data.report_sort);
            view_data
                .reports
                .set_sort(view_data.report_sort.map(ReportSortKey::comparator));
            view_data.clamp_cursor(tab);
            sort_status(view_data.report_sort.map(ReportSortKey::label))
        }
        TabKind::Schedules => {
            view_data.schedule_sort = cycle_key(&ScheduleSortKey::ALL, view_data.schedule_sort);
            view_data
                .schedules
                .set_sort(view_data.schedule_sort.map(ScheduleSortKey::comparator));
            view_data.clamp_cursor(tab);
            sort_status(view_data.schedule_sort.map(ScheduleSortKey::label))
        }
        TabKind::Scrape => "sort unavailable here".to_owned(),
    }
}

fn sort_status(label: Option<&'static str>) -> String {
    match label {
        Some(label) => format!("sort: {label}"),
        None => "sort cleared (load order)".to_owned(),
    }
}

fn cycle_page_size(view_data: &mut ViewData, tab: TabKind) -> String {
    if tab == TabKind::Scrape {
        return "paging unavailable here".to_owned();
    }
    let mut label = String::new();
    with_active_view(view_data, tab, |view| {
        let current = view.page_size();
        let position = PAGE_SIZE_PRESETS
            .iter()
            .position(|preset| *preset == current)
            .unwrap_or(0);
        let next = PAGE_SIZE_PRESETS[(position + 1) % PAGE_SIZE_PRESETS.len()];
        view.set_page_size(next);
        label = page_size_label(next);
    });
    view_data.clamp_cursor(tab);
    format!("page size: {label}")
}

fn page_size_label(page_size: PageSize) -> String {
    match page_size {
        PageSize::Rows(rows) => rows.to_string(),
        PageSize::All => "all".to_owned(),
    }
}

fn refresh_active_tab<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let outcome = match state.active_tab {
        TabKind::Reports => load_reports(runtime, view_data).map(|()| "reports reloaded"),
        TabKind::Schedules => load_schedules(runtime, view_data).map(|()| "schedules reloaded"),
        TabKind::Accounts => {
            emit_status(
                state,
                view_data,
                internal_tx,
                "accounts refresh: run a discovery (n) or similar-accounts (S) search",
            );
            return;
        }
        TabKind::Scrape => {
            emit_status(state, view_data, internal_tx, "nothing to reload here");
            return;
        }
    };
    match outcome {
        Ok(status) => emit_status(state, view_data, internal_tx, status),
        // a failed reload keeps the previous rows on screen
        Err(error) => emit_status(
            state,
            view_data,
            internal_tx,
            format!("reload failed: {error}"),
        ),
    }
}

fn open_form(state: &mut AppState, view_data: &mut ViewData, kind: FormKind) {
    view_data.form = Some(FormUiState::blank_for(kind));
    state.dispatch(AppCommand::OpenForm(kind));
}

fn selected_schedule_id(view_data: &ViewData) -> Option<ScheduleId> {
    view_data
        .schedules
        .page_slice()
        .get(view_data.schedules_cursor)
        .map(|schedule| schedule.id)
}

fn selected_report_id(view_data: &ViewData) -> Option<ReportId> {
    view_data
        .reports
        .page_slice()
        .get(view_data.reports_cursor)
        .map(|report| report.id)
}

fn delete_selected_schedule<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(id) = selected_schedule_id(view_data) else {
        emit_status(state, view_data, internal_tx, "no schedule selected");
        return;
    };
    match runtime.delete_schedule(id) {
        Ok(()) => {
            // only drop the row once the backend confirmed the delete
            view_data.schedules.remove_item(|schedule| schedule.id == id);
            view_data.clamp_cursor(TabKind::Schedules);
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("schedule #{} deleted", id.get()),
            );
        }
        Err(error) => {
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("delete failed: {error}"),
            );
        }
    }
}

fn run_selected_schedule<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(id) = selected_schedule_id(view_data) else {
        emit_status(state, view_data, internal_tx, "no schedule selected");
        return;
    };
    match runtime.run_schedule(id) {
        Ok(outcome) => {
            let status = format!(
                "schedule #{} ran: {} items",
                id.get(),
                outcome.item_count
            );
            view_data.push_log(ScrapeLogEntry::Completed(outcome));
            // refresh picks up the new last_run; stale rows are fine on failure
            let _ = load_schedules(runtime, view_data);
            emit_status(state, view_data, internal_tx, status);
        }
        Err(error) => {
            emit_status(state, view_data, internal_tx, format!("run failed: {error}"));
        }
    }
}

fn open_selected_report<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(id) = selected_report_id(view_data) else {
        emit_status(state, view_data, internal_tx, "no report selected");
        return;
    };
    match runtime.get_report(id) {
        Ok(detail) => view_data.report_detail = Some(detail),
        Err(error) => {
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("report load failed: {error}"),
            );
        }
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let selected = TabKind::ALL
        .iter()
        .position(|tab| *tab == state.active_tab)
        .unwrap_or(0);
    let tab_titles = TabKind::ALL
        .iter()
        .map(|tab| tab.label().to_owned())
        .collect::<Vec<String>>();
    let tabs = Tabs::new(tab_titles)
        .block(Block::default().title("leadlens").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, layout[0]);

    match state.active_tab {
        TabKind::Scrape => {
            let body = Paragraph::new(render_scrape_log_text(&view_data.scrape_log))
                .block(Block::default().borders(Borders::ALL).title("scrape activity"));
            frame.render_widget(body, layout[1]);
        }
        TabKind::Accounts => render_accounts_table(frame, layout[1], view_data),
        TabKind::Reports => render_reports_table(frame, layout[1], view_data),
        TabKind::Schedules => render_schedules_table(frame, layout[1], view_data),
    }

    let status_widget = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[2]);

    if let Some(form) = &view_data.form {
        let area = centered_rect(60, 55, frame.area());
        frame.render_widget(Clear, area);
        let body = Paragraph::new(render_form_text(form)).block(
            Block::default()
                .title(form.kind.title())
                .borders(Borders::ALL),
        );
        frame.render_widget(body, area);
    }

    if view_data.filter_input.visible {
        let area = centered_rect(50, 18, frame.area());
        frame.render_widget(Clear, area);
        let body = Paragraph::new(format!("match: {}_", view_data.filter_input.query))
            .block(Block::default().title("filter").borders(Borders::ALL));
        frame.render_widget(body, area);
    }

    if let Some(detail) = &view_data.report_detail {
        let area = centered_rect(80, 75, frame.area());
        frame.render_widget(Clear, area);
        let body = Paragraph::new(render_report_detail_text(detail)).block(
            Block::default()
                .title(format!("report #{}", detail.summary.id.get()))
                .borders(Borders::ALL),
        );
        frame.render_widget(body, area);
    }

    if view_data.help_visible {
        let area = centered_rect(70, 70, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_table_widget(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    title: String,
    headers: &[&'static str],
    rows: Vec<Vec<String>>,
    cursor: usize,
) {
    let header = Row::new(
        headers
            .iter()
            .map(|label| {
                Cell::from(*label).style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect::<Vec<_>>(),
    );

    let body = rows.into_iter().enumerate().map(|(index, cells)| {
        let style = if index == cursor {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        Row::new(cells.into_iter().map(Cell::from).collect::<Vec<_>>()).style(style)
    });

    let widths = vec![Constraint::Min(8); headers.len().max(1)];
    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn render_accounts_table(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let rows = view_data
        .accounts
        .page_slice()
        .into_iter()
        .map(account_row_cells)
        .collect();
    let title = table_title(
        "accounts",
        &view_data.accounts,
        view_data.account_sort.map(AccountSortKey::label),
        view_data.account_filter.as_deref(),
    );
    render_table_widget(
        frame,
        area,
        title,
        &["username", "name", "followers", "type", "score", "keywords"],
        rows,
        view_data.accounts_cursor,
    );
}

fn render_reports_table(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let rows = view_data
        .reports
        .page_slice()
        .into_iter()
        .map(report_row_cells)
        .collect();
    let title = table_title(
        "reports",
        &view_data.reports,
        view_data.report_sort.map(ReportSortKey::label),
        view_data.report_filter.as_deref(),
    );
    render_table_widget(
        frame,
        area,
        title,
        &["id", "target", "source", "keywords", "items", "score", "created"],
        rows,
        view_data.reports_cursor,
    );
}

fn render_schedules_table(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let now = OffsetDateTime::now_utc();
    let rows = view_data
        .schedules
        .page_slice()
        .into_iter()
        .map(|schedule| schedule_row_cells(schedule, now))
        .collect();
    let title = table_title(
        "schedules",
        &view_data.schedules,
        view_data.schedule_sort.map(ScheduleSortKey::label),
        view_data.schedule_filter.as_deref(),
    );
    render_table_widget(
        frame,
        area,
        title,
        &["id", "username", "keywords", "frequency", "at", "next run", "last run", "on"],
        rows,
        view_data.schedules_cursor,
    );
}

fn account_row_cells(account: &Account) -> Vec<String> {
    vec![
        format!("@{}", account.username),
        account.display_name.clone(),
        account
            .followers
            .map(|count| count.to_string())
            .unwrap_or_default(),
        account.account_type.clone(),
        account
            .lead_score
            .map(|score| score.to_string())
            .unwrap_or_default(),
        format_keywords(&account.matched_keywords),
    ]
}

fn report_row_cells(report: &ReportSummary) -> Vec<String> {
    vec![
        report.id.get().to_string(),
        format!("{}{}", report.source.target_label(), report.username),
        report.source.as_str().to_owned(),
        format_keywords(&report.keywords),
        report.item_count.to_string(),
        report
            .lead_score
            .map(|score| score.to_string())
            .unwrap_or_default(),
        format_datetime(report.created_at),
    ]
}

fn schedule_row_cells(schedule: &Schedule, now: OffsetDateTime) -> Vec<String> {
    let next_run = schedule
        .next_run_after(now)
        .map(|next| format_countdown(now, next))
        .unwrap_or_else(|| "off".to_owned());
    vec![
        schedule.id.get().to_string(),
        format!("@{}", schedule.username),
        format_keywords(&schedule.keywords),
        schedule.frequency.as_str().to_owned(),
        schedule
            .time_of_day
            .map(|time| format!("{:02}:{:02}", time.hour(), time.minute()))
            .unwrap_or_default(),
        next_run,
        schedule
            .last_run
            .map(format_datetime)
            .unwrap_or_else(|| "never".to_owned()),
        if schedule.enabled { "yes" } else { "no" }.to_owned(),
    ]
}

fn table_title<T>(
    name: &str,
    view: &PagedView<T>,
    sort_label: Option<&'static str>,
    filter: Option<&str>,
) -> String {
    let mut title = format!(
        "{name} ({}/{})  {}",
        view.filtered_len(),
        view.len(),
        page_strip_label(view)
    );
    if let Some(label) = sort_label {
        title.push_str(&format!("  sort: {label}"));
    }
    if let Some(query) = filter {
        title.push_str(&format!("  filter: {query:?}"));
    }
    title
}

fn page_strip_label<T>(view: &PagedView<T>) -> String {
    view.page_strip()
        .iter()
        .map(|entry| match entry {
            PageStripEntry::Page(page) if *page == view.page() => format!("[{page}]"),
            PageStripEntry::Page(page) => page.to_string(),
            PageStripEntry::Ellipsis => "..".to_owned(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_scrape_log_text(log: &[ScrapeLogEntry]) -> String {
    if log.is_empty() {
        return "no scrapes yet\n\nn: scrape account  R: scrape subreddit  B: bulk scrape"
            .to_owned();
    }
    let mut out = String::new();
    for entry in log {
        match entry {
            ScrapeLogEntry::Completed(outcome) => {
                out.push_str(&format!(
                    "{}{}  {} items  {}\n",
                    outcome.source.target_label(),
                    outcome.target,
                    outcome.item_count,
                    outcome.report_file
                ));
            }
            ScrapeLogEntry::Bulk(outcomes) => {
                let succeeded = outcomes.iter().filter(|entry| entry.succeeded()).count();
                out.push_str(&format!(
                    "bulk: {succeeded}/{} succeeded\n",
                    outcomes.len()
                ));
                for outcome in outcomes {
                    if let BulkEntryResult::Failed { error } = &outcome.result {
                        out.push_str(&format!("  @{}: {error}\n", outcome.username));
                    }
                }
            }
        }
    }
    out
}

fn render_form_text(form: &FormUiState) -> String {
    let mut out = String::new();
    for (index, field) in form.fields.iter().enumerate() {
        let marker = if index == form.cursor { ">" } else { " " };
        let value = match field.kind {
            FormFieldKind::Text => {
                if index == form.cursor {
                    format!("{}_", form.values[index])
                } else {
                    form.values[index].clone()
                }
            }
            FormFieldKind::Choice(options) => format!("< {} >", options[form.choices[index]]),
        };
        out.push_str(&format!("{marker} {}: {value}\n", field.label));
    }
    out.push_str("\nenter: submit  esc: cancel  tab: next field  left/right: choice");
    out
}

fn render_report_detail_text(detail: &ReportDetail) -> String {
    let summary = &detail.summary;
    let mut out = format!(
        "{}{}  {} items  score {}  {}\nkeywords: {}\n\n",
        summary.source.target_label(),
        summary.username,
        summary.item_count,
        summary
            .lead_score
            .map(|score| score.to_string())
            .unwrap_or_else(|| "-".to_owned()),
        format_datetime(summary.created_at),
        format_keywords(&summary.keywords),
    );
    out.push_str(&detail.content);
    out.push_str("\n\nw: save report  j: save json  esc: close");
    out
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if let Some(status) = &state.status_line {
        return status.clone();
    }
    if view_data.form.is_some() {
        return "form: enter submits, esc cancels".to_owned();
    }
    match state.active_tab {
        TabKind::Scrape => "n: scrape  R: reddit  B: bulk  f/b: tabs  ?: help".to_owned(),
        TabKind::Accounts => {
            "n: discover  S: similar  s: sort  /: filter  z: page size  ?: help".to_owned()
        }
        TabKind::Reports => {
            "enter: open  r: reload  s: sort  /: filter  1-9: page  ?: help".to_owned()
        }
        TabKind::Schedules => {
            "n: new  d: delete  x: run now  r: reload  s: sort  ?: help".to_owned()
        }
    }
}

fn help_overlay_text() -> &'static str {
    "f / b / tab      switch tab\n\
     up / down        move selection\n\
     left / right     previous / next page\n\
     home / end       first / last page\n\
     1-9              jump to page\n\
     z                cycle page size (10, 25, 50, all)\n\
     s                cycle sort key (numeric keys sort descending)\n\
     /                filter rows, c clears\n\
     n                new scrape / discovery / schedule\n\
     R, B             reddit scrape, bulk scrape (scrape tab)\n\
     S                similar accounts (accounts tab)\n\
     enter            open report (reports tab)\n\
     d, x             delete / run schedule (schedules tab)\n\
     r                reload from backend\n\
     q, ctrl-q        quit\n\
     esc, ?           close this help"
}

fn format_datetime(value: OffsetDateTime) -> String {
    value
        .format(&time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]"
        ))
        .unwrap_or_else(|_| value.to_string())
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
