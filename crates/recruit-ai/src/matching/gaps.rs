use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::facts::{EducationEntry, WorkEntry};

/// Minimum unexplained interval that counts as an employment gap.
const GAP_THRESHOLD_MONTHS: i64 = 6;

/// Month assumed for education entries that only report a graduation year.
const ASSUMED_GRADUATION_MONTH: u32 = 6;

/// Classification of a detected employment gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GapKind {
    PostEducation,
    BetweenJobs,
}

impl GapKind {
    pub const fn label(self) -> &'static str {
        match self {
            GapKind::PostEducation => "POST_EDUCATION",
            GapKind::BetweenJobs => "BETWEEN_JOBS",
        }
    }
}

/// One detected gap, bounded by "YYYY-MM" labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapPeriod {
    pub kind: GapKind,
    pub start: String,
    pub end: String,
    pub months: u32,
}

/// Gap summary for a candidate's timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapScan {
    pub has_gap: bool,
    pub total_gap_months: u32,
    pub gap_details: Vec<GapPeriod>,
}

/// Infers unexplained ≥6-month intervals from a work-history list.
///
/// The reference date arrives as an argument so "present" resolves the same
/// way in tests and in replayed batch runs; the calculator never reads the
/// clock itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmploymentGapCalculator;

impl EmploymentGapCalculator {
    pub fn scan(
        &self,
        work_history: &[WorkEntry],
        education: &[EducationEntry],
        today: NaiveDate,
    ) -> GapScan {
        let current_month = YearMonth::from_date(today);

        let mut jobs: Vec<(Option<YearMonth>, Option<YearMonth>)> = work_history
            .iter()
            .map(|entry| {
                (
                    parse_bound(entry.start.as_deref(), current_month),
                    parse_bound(entry.end.as_deref(), current_month),
                )
            })
            .collect();
        jobs.sort_by_key(|(start, _)| (start.is_none(), *start));

        let mut gap_details = Vec::new();

        if let Some(graduated) = latest_graduation(education, current_month) {
            if let Some(first_start) = jobs.iter().find_map(|(start, _)| *start) {
                let months = graduated.months_until(first_start);
                if months >= GAP_THRESHOLD_MONTHS {
                    gap_details.push(GapPeriod {
                        kind: GapKind::PostEducation,
                        start: graduated.label(),
                        end: first_start.label(),
                        months: months as u32,
                    });
                }
            }
        }

        for pair in jobs.windows(2) {
            let (Some(end), Some(next_start)) = (pair[0].1, pair[1].0) else {
                continue;
            };
            let months = end.months_until(next_start);
            if months >= GAP_THRESHOLD_MONTHS {
                gap_details.push(GapPeriod {
                    kind: GapKind::BetweenJobs,
                    start: end.label(),
                    end: next_start.label(),
                    months: months as u32,
                });
            }
        }

        let total_gap_months = gap_details.iter().map(|gap| gap.months).sum();
        GapScan {
            has_gap: total_gap_months > 0,
            total_gap_months,
            gap_details,
        }
    }
}

/// Month-granularity point on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        let (year, month) = raw.trim().split_once('-')?;
        let year = year.parse::<i32>().ok()?;
        let month = month.parse::<u32>().ok()?;
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Whole months from this point to a later one; negative when `later`
    /// is actually earlier.
    fn months_until(self, later: YearMonth) -> i64 {
        (later.year as i64 - self.year as i64) * 12 + (later.month as i64 - self.month as i64)
    }

    fn label(self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

fn parse_bound(raw: Option<&str>, current_month: YearMonth) -> Option<YearMonth> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.eq_ignore_ascii_case("present")
        || raw.eq_ignore_ascii_case("current")
        || raw.eq_ignore_ascii_case("now")
    {
        return Some(current_month);
    }
    YearMonth::parse(raw)
}

fn latest_graduation(education: &[EducationEntry], current_month: YearMonth) -> Option<YearMonth> {
    education
        .iter()
        .filter_map(|entry| {
            parse_bound(entry.end.as_deref(), current_month).or_else(|| {
                entry.graduation_year.map(|year| YearMonth {
                    year,
                    month: ASSUMED_GRADUATION_MONTH,
                })
            })
        })
        .max()
}
