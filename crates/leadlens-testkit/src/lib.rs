// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use leadlens_app::{
    Account, Frequency, ReportDetail, ReportId, ReportSummary, Schedule, ScheduleId, Source,
    Weekday, parse_time_of_day,
};
use time::{Duration, OffsetDateTime};
use time::macros::datetime;

// Distinct handles, none a prefix or substring of another, so substring
// filters in tests match exactly one row.
const USERNAMES: [&str; 12] = [
    "acmelabs",
    "brightloop",
    "cobaltworks",
    "driftly",
    "emberscale",
    "fernstack",
    "gridpoint",
    "hollowpine",
    "ironvale",
    "junipertech",
    "kelpforge",
    "lumenbay",
];

const DISPLAY_NAMES: [&str; 12] = [
    "Acme Labs",
    "Bright Loop",
    "Cobalt Works",
    "Driftly",
    "Ember Scale",
    "Fern Stack",
    "Grid Point",
    "Hollow Pine",
    "Iron Vale",
    "Juniper Tech",
    "Kelp Forge",
    "Lumen Bay",
];

const ACCOUNT_TYPES: [&str; 5] = ["startup", "agency", "founder", "investor", "creator"];

const KEYWORDS: [&str; 10] = [
    "saas",
    "pricing",
    "lead gen",
    "automation",
    "analytics",
    "devtools",
    "fintech",
    "onboarding",
    "growth",
    "api",
];

const BIOS: [&str; 6] = [
    "Building tools for small teams.",
    "We help founders find their first customers.",
    "Analytics without the spreadsheet pain.",
    "Automation for the rest of us.",
    "Scaling B2B outreach, one account at a time.",
    "Developer-first infrastructure.",
];

const FREQUENCIES: [Frequency; 3] = [Frequency::Daily, Frequency::Hourly, Frequency::Weekly];

fn reference_now() -> OffsetDateTime {
    datetime!(2026-03-01 12:00 UTC)
}

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Deterministic builder for display-layer fixtures. Identity fields
/// (ids, usernames) come from the item index so collections never collide;
/// the seeded generator only fills in cosmetic variety.
#[derive(Debug, Clone)]
pub struct LeadFaker {
    rng: DeterministicRng,
}

impl LeadFaker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DeterministicRng::new(if seed == 0 { 1 } else { seed }),
        }
    }

    pub fn account(&mut self, index: usize) -> Account {
        let pool = USERNAMES.len();
        let username = if index < pool {
            USERNAMES[index].to_owned()
        } else {
            format!("{}{}", USERNAMES[index % pool], index / pool)
        };
        let keyword_count = 1 + self.rng.int_n(3);
        let matched_keywords = (0..keyword_count)
            .map(|offset| KEYWORDS[(index + offset) % KEYWORDS.len()].to_owned())
            .collect();
        Account {
            username,
            display_name: DISPLAY_NAMES[index % DISPLAY_NAMES.len()].to_owned(),
            followers: if index % 5 == 4 {
                None
            } else {
                Some(500 + (self.rng.int_n(200_000) as i64))
            },
            account_type: ACCOUNT_TYPES[index % ACCOUNT_TYPES.len()].to_owned(),
            lead_score: if index % 4 == 3 {
                None
            } else {
                Some(self.rng.int_n(101) as i64)
            },
            matched_keywords,
            bio: BIOS[index % BIOS.len()].to_owned(),
        }
    }

    pub fn report(&mut self, index: usize) -> ReportSummary {
        let source = if index % 3 == 2 {
            Source::Reddit
        } else {
            Source::Twitter
        };
        ReportSummary {
            id: ReportId::new(index as i64 + 1),
            username: USERNAMES[index % USERNAMES.len()].to_owned(),
            source,
            keywords: vec![
                KEYWORDS[index % KEYWORDS.len()].to_owned(),
                KEYWORDS[(index + 3) % KEYWORDS.len()].to_owned(),
            ],
            item_count: 5 + (self.rng.int_n(95) as i64),
            account_type: ACCOUNT_TYPES[index % ACCOUNT_TYPES.len()].to_owned(),
            lead_score: if index % 4 == 3 {
                None
            } else {
                Some(self.rng.int_n(101) as i64)
            },
            created_at: reference_now() - Duration::days(index as i64) - Duration::hours(2),
        }
    }

    pub fn report_detail(&mut self, index: usize) -> ReportDetail {
        let summary = self.report(index);
        let content = format!(
            "LEAD REPORT\n===========\naccount: {}{}\nitems: {}\n",
            summary.source.target_label(),
            summary.username,
            summary.item_count,
        );
        let report_file = format!("{}_report.txt", summary.username);
        ReportDetail {
            summary,
            content,
            report_file: Some(report_file),
            json_file: None,
        }
    }

    pub fn schedule(&mut self, index: usize) -> Schedule {
        let frequency = FREQUENCIES[index % FREQUENCIES.len()];
        let time_of_day = match frequency {
            Frequency::Hourly => None,
            Frequency::Daily | Frequency::Weekly => parse_time_of_day("09:00"),
        };
        let weekday = match frequency {
            Frequency::Weekly => Some(Weekday::ALL[index % Weekday::ALL.len()]),
            Frequency::Hourly | Frequency::Daily => None,
        };
        let last_run = if index % 3 == 0 {
            None
        } else {
            Some(reference_now() - Duration::days(index as i64 + 1))
        };
        Schedule {
            id: ScheduleId::new(index as i64 + 1),
            username: USERNAMES[index % USERNAMES.len()].to_owned(),
            keywords: vec![KEYWORDS[index % KEYWORDS.len()].to_owned()],
            frequency,
            time_of_day,
            weekday,
            enabled: index % 4 != 3,
            last_run,
            created_at: Some(reference_now() - Duration::days(30 + index as i64)),
        }
    }
}

pub fn sample_accounts(count: usize) -> Vec<Account> {
    let mut faker = LeadFaker::new(11);
    (0..count).map(|index| faker.account(index)).collect()
}

pub fn sample_reports(count: usize) -> Vec<ReportSummary> {
    let mut faker = LeadFaker::new(23);
    (0..count).map(|index| faker.report(index)).collect()
}

pub fn sample_schedules(count: usize) -> Vec<Schedule> {
    let mut faker = LeadFaker::new(47);
    (0..count).map(|index| faker.schedule(index)).collect()
}

#[cfg(test)]
mod tests {
    use super::{LeadFaker, sample_accounts, sample_reports, sample_schedules};

    #[test]
    fn builders_are_deterministic() {
        assert_eq!(sample_accounts(6), sample_accounts(6));
        assert_eq!(sample_reports(6), sample_reports(6));
        assert_eq!(sample_schedules(6), sample_schedules(6));
    }

    #[test]
    fn identity_fields_never_collide() {
        let accounts = sample_accounts(30);
        for (left_index, left) in accounts.iter().enumerate() {
            for right in accounts.iter().skip(left_index + 1) {
                assert_ne!(left.username, right.username);
            }
        }

        let reports = sample_reports(30);
        for (left_index, left) in reports.iter().enumerate() {
            for right in reports.iter().skip(left_index + 1) {
                assert_ne!(left.id, right.id);
            }
        }
    }

    #[test]
    fn first_schedule_is_enabled_and_daily() {
        let schedules = sample_schedules(1);
        assert!(schedules[0].enabled);
        assert!(schedules[0].time_of_day.is_some());
    }

    #[test]
    fn weekly_schedules_carry_a_weekday() {
        for schedule in sample_schedules(12) {
            match schedule.frequency {
                leadlens_app::Frequency::Weekly => {
                    assert!(schedule.weekday.is_some());
                    assert!(schedule.time_of_day.is_some());
                }
                leadlens_app::Frequency::Hourly => assert!(schedule.weekday.is_none()),
                leadlens_app::Frequency::Daily => {
                    assert!(schedule.weekday.is_none());
                    assert!(schedule.time_of_day.is_some());
                }
            }
        }
    }

    #[test]
    fn report_detail_embeds_the_summary() {
        let detail = LeadFaker::new(5).report_detail(2);
        assert!(detail.content.contains(&detail.summary.username));
        assert!(
            detail
                .report_file
                .as_deref()
                .is_some_and(|file| file.ends_with("_report.txt"))
        );
    }
}
