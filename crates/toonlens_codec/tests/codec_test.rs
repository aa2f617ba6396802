//! Round-trip and failure tests for the payload encoders.

use rand::{SeedableRng, rngs::StdRng};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use toonlens_codec::{decode_json, decode_toon, encode_both, encode_json, encode_toon, to_plain};
use toonlens_core::{DataPayload, generate_payload};
use toonlens_error::EncodeErrorKind;

fn seeded_payload(users: usize) -> DataPayload {
    generate_payload(users, &mut StdRng::seed_from_u64(2024))
}

#[test]
fn test_json_round_trip_matches_projection() -> anyhow::Result<()> {
    let payload = seeded_payload(4);
    let plain = to_plain(&payload)?;

    let text = encode_json(&plain)?;
    assert_eq!(decode_json(&text)?, plain);
    Ok(())
}

#[test]
fn test_toon_round_trip_restores_payload() -> anyhow::Result<()> {
    for users in [1, 2, 7] {
        let payload = seeded_payload(users);
        let text = encode_toon(&to_plain(&payload)?)?;

        let decoded: DataPayload = serde_json::from_value(decode_toon(&text)?)?;
        assert_eq!(decoded, payload, "round trip failed for {users} users");
    }
    Ok(())
}

#[test]
fn test_toon_round_trip_on_mixed_structures() -> anyhow::Result<()> {
    let value = json!({
        "name": "mixed",
        "empty_list": [],
        "empty_map": {},
        "flags": [true, false, null],
        "matrix": [[1, 2], [3, 4]],
        "people": [
            {"name": "Ada", "age": 36},
            {"name": "Grace", "title": "RADM"},
        ],
        "tricky": ["", " padded ", "true", "42", "-dash", "a,b", "x: y", "line\nbreak"],
        "nested": {"deeper": {"deepest": [{"k": "v"}]}},
        "weird key": 1,
    });

    let text = encode_toon(&value)?;
    assert_eq!(decode_toon(&text)?, value);
    Ok(())
}

#[test]
fn test_single_user_toon_is_shorter() -> anyhow::Result<()> {
    let encoded = encode_both(&seeded_payload(1))?;
    assert!(
        encoded.json.len() > encoded.toon.len(),
        "json {} <= toon {}",
        encoded.json.len(),
        encoded.toon.len()
    );
    Ok(())
}

#[test]
fn test_payload_uses_tables_for_nested_lists() -> anyhow::Result<()> {
    let encoded = encode_both(&seeded_payload(1))?;
    assert!(encoded.toon.contains("scores[3]{subject,score,max_score,date}:"));
    assert!(encoded.toon.contains("roles[2]: admin,editor"));
    assert!(encoded.toon.contains("activities[5]{id,name,timestamp,"));
    assert!(encoded.toon.starts_with("users[1]:"));
    Ok(())
}

#[test]
fn test_unprojectable_value_fails_both_encoders() {
    let mut bad = BTreeMap::new();
    bad.insert((1u8, 2u8), "pair");

    let err = encode_both(&bad).unwrap_err();
    assert!(matches!(err.kind, EncodeErrorKind::Projection(_)));
}

#[test]
fn test_malformed_toon_is_rejected() {
    let err = decode_toon("users[2]:\n  - id: 0").unwrap_err();
    assert!(matches!(err.kind, EncodeErrorKind::Malformed(_)));
}

#[test]
fn test_round_trip_holds_across_seeds() -> anyhow::Result<()> {
    for seed in 0..20 {
        let payload = generate_payload(4, &mut StdRng::seed_from_u64(seed));
        let plain = to_plain(&payload)?;

        assert_eq!(decode_json(&encode_json(&plain)?)?, plain, "json, seed {seed}");

        let decoded: DataPayload = serde_json::from_value(decode_toon(&encode_toon(&plain)?)?)?;
        assert_eq!(decoded, payload, "toon, seed {seed}");
    }
    Ok(())
}

#[test]
fn test_single_user_toon_is_shorter_for_any_seed() -> anyhow::Result<()> {
    for seed in 0..20 {
        let payload = generate_payload(1, &mut StdRng::seed_from_u64(seed));
        let encoded = encode_both(&payload)?;
        assert!(encoded.json.len() > encoded.toon.len(), "seed {seed}");
    }
    Ok(())
}

#[test]
fn test_json_projection_keeps_field_order() -> anyhow::Result<()> {
    let plain = to_plain(&seeded_payload(1))?;
    let keys: Vec<&str> = match &plain {
        Value::Object(map) => map.keys().map(String::as_str).collect(),
        _ => Vec::new(),
    };
    assert_eq!(keys, ["users", "version", "generated_at"]);
    Ok(())
}
