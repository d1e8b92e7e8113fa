//! Performance review records.

use super::{new_record_id, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest rating the review form offers.
pub const MIN_RATING: f64 = 1.0;
/// Highest rating the review form offers.
pub const MAX_RATING: f64 = 5.0;
/// Rating at or above which an intern counts as a top performer.
pub const TOP_PERFORMER_RATING: f64 = 4.5;

/// One review of an intern. An intern may have any number of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReview {
    pub id: RecordId,
    pub intern_id: RecordId,
    /// Not range-checked by the store; see [`PerformanceReview::rating_in_range`].
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tasks_completed: u32,
    pub last_review: NaiveDate,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPerformanceReview {
    pub intern_id: RecordId,
    pub rating: f64,
    pub tasks_completed: u32,
    pub last_review: NaiveDate,
    pub feedback: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceReviewPatch {
    pub intern_id: Option<RecordId>,
    pub rating: Option<f64>,
    pub tasks_completed: Option<u32>,
    pub last_review: Option<NaiveDate>,
    pub feedback: Option<String>,
}

impl PerformanceReview {
    pub fn create(fields: NewPerformanceReview) -> Self {
        Self {
            id: new_record_id(),
            intern_id: fields.intern_id,
            rating: fields.rating,
            tasks_completed: fields.tasks_completed,
            last_review: fields.last_review,
            feedback: fields.feedback,
        }
    }

    /// Whether the rating lies in the range offered to reviewers.
    pub fn rating_in_range(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }

    pub fn is_top_performer(&self) -> bool {
        self.rating >= TOP_PERFORMER_RATING
    }

    pub fn apply(&mut self, patch: PerformanceReviewPatch) {
        if let Some(intern_id) = patch.intern_id {
            self.intern_id = intern_id;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(tasks_completed) = patch.tasks_completed {
            self.tasks_completed = tasks_completed;
        }
        if let Some(last_review) = patch.last_review {
            self.last_review = last_review;
        }
        if let Some(feedback) = patch.feedback {
            self.feedback = feedback;
        }
    }
}
