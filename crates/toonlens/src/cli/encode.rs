//! `toonlens encode` handler.

use super::commands::EncodingFormat;
use rand::{SeedableRng, rngs::StdRng};
use toonlens::{
    ConfigError, Format, MAX_USERS, MIN_USERS, ToonlensResult, encode_json, encode_toon,
    generate_dummy_data, generate_payload, to_plain,
};

/// Print one encoding of a generated payload.
pub fn handle_encode(users: usize, format: EncodingFormat, seed: Option<u64>) -> ToonlensResult<()> {
    if !(MIN_USERS..=MAX_USERS).contains(&users) {
        Err(ConfigError::new(format!(
            "users must be between {} and {}, got {}",
            MIN_USERS, MAX_USERS, users
        )))?
    }

    let payload = match seed {
        Some(seed) => generate_payload(users, &mut StdRng::seed_from_u64(seed)),
        None => generate_dummy_data(users),
    };
    let plain = to_plain(&payload)?;

    let text = match Format::from(format) {
        Format::Json => encode_json(&plain)?,
        Format::Toon => encode_toon(&plain)?,
    };
    println!("{}", text);
    Ok(())
}
