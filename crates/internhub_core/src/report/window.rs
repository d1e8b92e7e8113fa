//! Report selectors and the date windows they map to.

use chrono::{Days, Months, NaiveDate};
use std::fmt::{Display, Formatter};

/// Lookback period of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportPeriod {
    Week,
    Month,
    Quarter,
    All,
}

impl ReportPeriod {
    /// Parses a selector; anything unrecognized means all time.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "week" => Self::Week,
            "month" => Self::Month,
            "quarter" => Self::Quarter,
            _ => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::All => "all",
        }
    }

    /// First day included in the window ending at `today`.
    ///
    /// Month arithmetic clamps to the last day of shorter months
    /// (2024-03-31 minus one month is 2024-02-29).
    pub fn window_start(self, today: NaiveDate) -> NaiveDate {
        let start = match self {
            Self::Week => today.checked_sub_days(Days::new(7)),
            Self::Month => today.checked_sub_months(Months::new(1)),
            Self::Quarter => today.checked_sub_months(Months::new(3)),
            Self::All => None,
        };
        start.unwrap_or(NaiveDate::MIN)
    }

    /// Whether `date` lies in `[window_start(today), today]`.
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= self.window_start(today) && date <= today
    }
}

impl Display for ReportPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collection a report is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportType {
    /// Reviews by `last_review`.
    Performance,
    /// Tasks by `deadline`.
    Task,
    /// Attendance records by `date`.
    Attendance,
    /// Interns by `join_date`.
    Intern,
}

impl ReportType {
    /// Parses a selector; unrecognized values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "performance" => Some(Self::Performance),
            "task" => Some(Self::Task),
            "attendance" => Some(Self::Attendance),
            "intern" => Some(Self::Intern),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Task => "task",
            Self::Attendance => "attendance",
            Self::Intern => "intern",
        }
    }
}

impl Display for ReportType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
