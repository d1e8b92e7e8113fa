//! Dashboard and chart aggregates.
//!
//! Month buckets are keyed by month *name* only, so reviews or tasks from
//! different years that share a month are merged into one bucket.

use crate::model::attendance::AttendanceStatus;
use crate::model::snapshot::Snapshot;
use crate::model::task::TaskStatus;
use chrono::{Datelike, Days, Month, NaiveDate};

pub const WEEKLY_BUCKETS: usize = 4;
pub const FEED_LIMIT: usize = 3;

/// Attendance counts for one intern.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttendanceStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub half_day: usize,
    pub leave: usize,
    /// `(present + 0.5 * half_day) / total * 100`, one decimal; 0 when empty.
    pub percentage: f64,
}

pub fn attendance_stats(snapshot: &Snapshot, intern_id: &str) -> AttendanceStats {
    let mut stats = AttendanceStats::default();
    for record in snapshot
        .attendance
        .iter()
        .filter(|record| record.intern_id == intern_id)
    {
        stats.total += 1;
        match record.status {
            AttendanceStatus::Present => stats.present += 1,
            AttendanceStatus::Absent => stats.absent += 1,
            AttendanceStatus::HalfDay => stats.half_day += 1,
            AttendanceStatus::Leave => stats.leave += 1,
        }
    }

    if stats.total > 0 {
        let attended = stats.present as f64 + stats.half_day as f64 * 0.5;
        stats.percentage = round_to(attended / stats.total as f64 * 100.0, 1);
    }
    stats
}

/// Completed tasks whose deadline falls in one 7-day window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyCompletion {
    pub label: String,
    pub start: NaiveDate,
    /// Inclusive.
    pub end: NaiveDate,
    pub completed: usize,
}

/// Four trailing 7-day windows ending at `today`, oldest first.
pub fn weekly_task_completion(snapshot: &Snapshot, today: NaiveDate) -> Vec<WeeklyCompletion> {
    (0..WEEKLY_BUCKETS)
        .map(|index| {
            let weeks_back = (WEEKLY_BUCKETS - 1 - index) as u64;
            let end = today
                .checked_sub_days(Days::new(weeks_back * 7))
                .unwrap_or(NaiveDate::MIN);
            let start = end.checked_sub_days(Days::new(6)).unwrap_or(NaiveDate::MIN);
            let completed = snapshot
                .tasks
                .iter()
                .filter(|task| task.is_completed() && task.deadline >= start && task.deadline <= end)
                .count();
            WeeklyCompletion {
                label: format!("Week {}", index + 1),
                start,
                end,
                completed,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyRating {
    pub month: Month,
    pub review_count: usize,
    /// Mean rating, two decimals; 0 when the month has no reviews.
    pub average: f64,
}

/// Average review rating per calendar month, January first.
pub fn monthly_average_rating(snapshot: &Snapshot) -> Vec<MonthlyRating> {
    all_months()
        .map(|month| {
            let ratings: Vec<f64> = snapshot
                .performances
                .iter()
                .filter(|review| in_month(review.last_review, month))
                .map(|review| review.rating)
                .collect();
            MonthlyRating {
                month,
                review_count: ratings.len(),
                average: mean(&ratings).map_or(0.0, |value| round_to(value, 2)),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyCompletion {
    pub month: Month,
    pub completed: usize,
}

/// Completed tasks per calendar month of their deadline, January first.
pub fn monthly_task_completion(snapshot: &Snapshot) -> Vec<MonthlyCompletion> {
    all_months()
        .map(|month| MonthlyCompletion {
            month,
            completed: snapshot
                .tasks
                .iter()
                .filter(|task| task.is_completed() && in_month(task.deadline, month))
                .count(),
        })
        .collect()
}

/// Headline counters of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub active_interns: usize,
    /// Tasks currently `In Progress`.
    pub active_tasks: usize,
    /// Interns minus reviews, floored at zero.
    pub pending_reviews: usize,
    pub top_performers: usize,
}

pub fn dashboard_summary(snapshot: &Snapshot) -> DashboardSummary {
    DashboardSummary {
        active_interns: snapshot.interns.iter().filter(|i| i.is_active()).count(),
        active_tasks: snapshot
            .tasks
            .iter()
            .filter(|task| task.status == TaskStatus::InProgress)
            .count(),
        pending_reviews: snapshot
            .interns
            .len()
            .saturating_sub(snapshot.performances.len()),
        top_performers: snapshot
            .performances
            .iter()
            .filter(|review| review.is_top_performer())
            .count(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    InternJoined,
    TaskCompleted,
    ReviewSubmitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub text: String,
    pub date: NaiveDate,
}

/// Latest joins, completed tasks and reviews, newest first.
///
/// Ties keep collection order: interns, then tasks, then reviews.
pub fn recent_activities(snapshot: &Snapshot, limit: usize) -> Vec<Activity> {
    let joins = snapshot.interns.iter().map(|intern| Activity {
        kind: ActivityKind::InternJoined,
        text: format!("New intern joined - {}", intern.name),
        date: intern.join_date,
    });
    let completions = snapshot
        .tasks
        .iter()
        .filter(|task| task.is_completed())
        .map(|task| Activity {
            kind: ActivityKind::TaskCompleted,
            text: format!("Task completed - {}", task.title),
            date: task.deadline,
        });
    let reviews = snapshot.performances.iter().map(|review| Activity {
        kind: ActivityKind::ReviewSubmitted,
        text: format!(
            "Performance review submitted for {}",
            snapshot.intern_name(&review.intern_id)
        ),
        date: review.last_review,
    });

    let mut activities: Vec<Activity> = joins.chain(completions).chain(reviews).collect();
    activities.sort_by(|a, b| b.date.cmp(&a.date));
    activities.truncate(limit);
    activities
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingDeadline {
    pub task_id: String,
    pub title: String,
    pub deadline: NaiveDate,
}

/// Open tasks due after `today`, soonest first.
pub fn upcoming_deadlines(
    snapshot: &Snapshot,
    today: NaiveDate,
    limit: usize,
) -> Vec<UpcomingDeadline> {
    let mut open: Vec<UpcomingDeadline> = snapshot
        .tasks
        .iter()
        .filter(|task| !task.is_completed() && task.deadline > today)
        .map(|task| UpcomingDeadline {
            task_id: task.id.clone(),
            title: task.title.clone(),
            deadline: task.deadline,
        })
        .collect();
    open.sort_by_key(|item| item.deadline);
    open.truncate(limit);
    open
}

/// Totals shown beside the report builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSummary {
    pub total_interns: usize,
    pub completed_tasks: usize,
    /// Two decimals; `None` when there are no reviews.
    pub average_rating: Option<f64>,
}

pub fn report_summary(snapshot: &Snapshot) -> ReportSummary {
    let ratings: Vec<f64> = snapshot.performances.iter().map(|r| r.rating).collect();
    ReportSummary {
        total_interns: snapshot.interns.len(),
        completed_tasks: snapshot.tasks.iter().filter(|t| t.is_completed()).count(),
        average_rating: mean(&ratings).map(|value| round_to(value, 2)),
    }
}

fn all_months() -> impl Iterator<Item = Month> {
    (1u8..=12).filter_map(|number| Month::try_from(number).ok())
}

fn in_month(date: NaiveDate, month: Month) -> bool {
    date.month() == month.number_from_month()
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
