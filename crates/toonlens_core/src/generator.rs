//! Synthetic payload generation.
//!
//! The shape of a generated payload is fixed (field counts, names, role
//! assignment) while numeric values and flags are random. Randomness is
//! passed in so tests can seed it.

use crate::{Activity, DataPayload, Score, UserProfile};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Scores generated per user.
pub const SCORES_PER_USER: usize = 3;

/// Activities generated per user.
pub const ACTIVITIES_PER_USER: usize = 5;

const BIO_SENTENCE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
const BIO_REPEAT: usize = 5;

/// Generates a payload with `num_users` users using the thread-local RNG.
///
/// Output is structurally deterministic but not byte-for-byte reproducible.
///
/// # Examples
///
/// ```
/// use toonlens_core::generate_dummy_data;
///
/// let payload = generate_dummy_data(2);
/// assert_eq!(payload.users.len(), 2);
/// assert_eq!(payload.users[1].roles, vec!["viewer".to_string()]);
/// ```
pub fn generate_dummy_data(num_users: usize) -> DataPayload {
    generate_payload(num_users, &mut rand::thread_rng())
}

/// Generates a payload with `num_users` users drawing values from `rng`.
///
/// The user count is not validated here; bound it before calling.
#[instrument(skip(rng))]
pub fn generate_payload<R: Rng + ?Sized>(num_users: usize, rng: &mut R) -> DataPayload {
    let now = Utc::now();
    let users = (0..num_users)
        .map(|i| generate_user(i as u32, now, rng))
        .collect::<Vec<_>>();

    debug!(users = users.len(), "Generated synthetic payload");

    let mut payload = DataPayload::new(users);
    payload.generated_at = now;
    payload
}

fn generate_user<R: Rng + ?Sized>(id: u32, now: DateTime<Utc>, rng: &mut R) -> UserProfile {
    let scores = (0..SCORES_PER_USER)
        .map(|j| {
            Score::new(
                format!("Subject_{j}"),
                rng.gen_range(50.0..100.0),
                now - Duration::days(j as i64),
            )
        })
        .collect();

    let activities = (0..ACTIVITIES_PER_USER)
        .map(|k| Activity {
            id: k as u32,
            name: format!("Activity_{k}"),
            timestamp: now - Duration::hours(k as i64),
            metadata: BTreeMap::from([
                ("location".to_string(), "US".to_string()),
                ("device".to_string(), "mobile".to_string()),
            ]),
            duration_seconds: rng.gen_range(60.0..3600.0),
        })
        .collect();

    // Even users get write access, odd users are read-only.
    let roles = if id % 2 == 0 {
        vec!["admin".to_string(), "editor".to_string()]
    } else {
        vec!["viewer".to_string()]
    };

    UserProfile {
        id,
        username: format!("user_{id}"),
        email: format!("user_{id}@example.com"),
        is_active: rng.gen_bool(0.5),
        roles,
        preferences: BTreeMap::from([
            ("theme".to_string(), "dark".to_string()),
            ("notifications".to_string(), "true".to_string()),
        ]),
        scores,
        activities,
        bio: BIO_SENTENCE.repeat(BIO_REPEAT),
        created_at: now - Duration::days(365),
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_generate_zero_users() {
        let payload = generate_payload(0, &mut StdRng::seed_from_u64(1));
        assert!(payload.users.is_empty());
    }

    #[test]
    fn test_values_stay_in_range() {
        let payload = generate_payload(10, &mut StdRng::seed_from_u64(7));
        for user in &payload.users {
            for score in &user.scores {
                assert!((50.0..100.0).contains(&score.score));
                assert_eq!(score.max_score, 100.0);
            }
            for activity in &user.activities {
                assert!((60.0..3600.0).contains(&activity.duration_seconds));
                assert_eq!(activity.metadata.len(), 2);
            }
            assert!(user.created_at <= user.updated_at);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible_in_values() {
        let a = generate_payload(3, &mut StdRng::seed_from_u64(42));
        let b = generate_payload(3, &mut StdRng::seed_from_u64(42));
        let scores = |p: &DataPayload| -> Vec<f64> {
            p.users
                .iter()
                .flat_map(|u| u.scores.iter().map(|s| s.score))
                .collect()
        };
        assert_eq!(scores(&a), scores(&b));
    }
}
