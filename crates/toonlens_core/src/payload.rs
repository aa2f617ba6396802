//! Synthetic payload schema.
//!
//! These are the records that get serialized twice and measured. They carry
//! no identity beyond a single comparison run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default `max_score` for a [`Score`].
pub const DEFAULT_MAX_SCORE: f64 = 100.0;

/// Default schema version stamped on a [`DataPayload`].
pub const PAYLOAD_VERSION: &str = "1.0.0";

/// A single tracked user activity.
///
/// `duration_seconds` is expected to be non-negative but the type does not
/// enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity identifier, unique within one user
    pub id: u32,
    /// Display name
    pub name: String,
    /// When the activity happened
    pub timestamp: DateTime<Utc>,
    /// Free-form string tags
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    /// How long the activity lasted
    pub duration_seconds: f64,
}

/// A graded result for one subject.
///
/// # Examples
///
/// ```
/// use toonlens_core::Score;
/// use chrono::Utc;
///
/// let score = Score::new("Subject_0", 87.5, Utc::now());
/// assert_eq!(score.max_score, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Subject name
    pub subject: String,
    /// Achieved score
    pub score: f64,
    /// Maximum attainable score
    #[serde(default = "default_max_score")]
    pub max_score: f64,
    /// When the score was recorded
    pub date: DateTime<Utc>,
}

fn default_max_score() -> f64 {
    DEFAULT_MAX_SCORE
}

impl Score {
    /// Creates a score out of [`DEFAULT_MAX_SCORE`].
    pub fn new(subject: impl Into<String>, score: f64, date: DateTime<Utc>) -> Self {
        Self {
            subject: subject.into(),
            score,
            max_score: DEFAULT_MAX_SCORE,
            date,
        }
    }
}

/// A user account with its nested scores and activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    pub id: u32,
    /// Login name
    pub username: String,
    /// Contact address
    pub email: String,
    /// Whether the account is active
    pub is_active: bool,
    /// Granted roles, in order
    pub roles: Vec<String>,
    /// UI preferences
    pub preferences: BTreeMap<String, String>,
    /// Graded results
    pub scores: Vec<Score>,
    /// Recent activities
    pub activities: Vec<Activity>,
    /// Free-text biography
    pub bio: String,
    /// Account creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// The root object handed to both encoders.
///
/// # Examples
///
/// ```
/// use toonlens_core::DataPayload;
///
/// let payload = DataPayload::new(vec![]);
/// assert_eq!(payload.version, "1.0.0");
/// assert!(payload.users.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPayload {
    /// All generated users
    pub users: Vec<UserProfile>,
    /// Schema version
    #[serde(default = "default_version")]
    pub version: String,
    /// When the payload was generated
    #[serde(default = "Utc::now")]
    pub generated_at: DateTime<Utc>,
}

fn default_version() -> String {
    PAYLOAD_VERSION.to_string()
}

impl DataPayload {
    /// Wraps users in a payload stamped with the current version and time.
    pub fn new(users: Vec<UserProfile>) -> Self {
        Self {
            users,
            version: default_version(),
            generated_at: Utc::now(),
        }
    }

    /// Total number of scores across all users.
    pub fn score_count(&self) -> usize {
        self.users.iter().map(|u| u.scores.len()).sum()
    }

    /// Total number of activities across all users.
    pub fn activity_count(&self) -> usize {
        self.users.iter().map(|u| u.activities.len()).sum()
    }
}
