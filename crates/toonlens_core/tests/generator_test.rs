use rand::{SeedableRng, rngs::StdRng};
use toonlens_core::{ACTIVITIES_PER_USER, SCORES_PER_USER, generate_dummy_data, generate_payload};

#[test]
fn every_bounded_user_count_has_fixed_shape() {
    let mut rng = StdRng::seed_from_u64(2024);
    for n in 1..=50 {
        let payload = generate_payload(n, &mut rng);
        assert_eq!(payload.users.len(), n);
        for user in &payload.users {
            assert_eq!(user.scores.len(), SCORES_PER_USER);
            assert_eq!(user.activities.len(), ACTIVITIES_PER_USER);
        }
        assert_eq!(payload.score_count(), n * 3);
        assert_eq!(payload.activity_count(), n * 5);
    }
}

#[test]
fn single_user_payload() {
    let payload = generate_dummy_data(1);
    assert_eq!(payload.users.len(), 1);

    let user = &payload.users[0];
    assert_eq!(user.id, 0);
    assert_eq!(user.username, "user_0");
    assert_eq!(user.email, "user_0@example.com");
    assert_eq!(user.scores.len(), 3);
    assert_eq!(user.activities.len(), 5);
    assert_eq!(payload.version, "1.0.0");
}

#[test]
fn roles_alternate_by_parity() {
    let payload = generate_dummy_data(4);
    for user in &payload.users {
        if user.id % 2 == 0 {
            assert_eq!(user.roles, vec!["admin", "editor"]);
        } else {
            assert_eq!(user.roles, vec!["viewer"]);
        }
    }
}

#[test]
fn fixed_fields_are_populated() {
    let payload = generate_dummy_data(2);
    let user = &payload.users[1];

    assert_eq!(user.preferences["theme"], "dark");
    assert_eq!(user.preferences["notifications"], "true");
    assert_eq!(
        user.bio,
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(5)
    );

    let names: Vec<&str> = user.activities.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        ["Activity_0", "Activity_1", "Activity_2", "Activity_3", "Activity_4"]
    );

    let subjects: Vec<&str> = user.scores.iter().map(|s| s.subject.as_str()).collect();
    assert_eq!(subjects, ["Subject_0", "Subject_1", "Subject_2"]);

    // Activities step back one hour each.
    let first = user.activities[0].timestamp;
    let last = user.activities[4].timestamp;
    assert_eq!((first - last).num_hours(), 4);
}

#[test]
fn payload_serializes_with_rfc3339_timestamps() -> anyhow::Result<()> {
    let payload = generate_dummy_data(1);
    let value = serde_json::to_value(&payload)?;

    let created = value["users"][0]["created_at"]
        .as_str()
        .expect("timestamp should serialize as a string");
    assert!(chrono::DateTime::parse_from_rfc3339(created).is_ok());
    Ok(())
}
