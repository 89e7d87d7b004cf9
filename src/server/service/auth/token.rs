use chrono::{Duration, NaiveDateTime};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// How long an issued token stays valid.
pub fn token_lifetime() -> Duration {
    Duration::hours(24)
}

/// Generates a new token: the lower-case hex SHA-256 digest of a random UUID v4.
pub fn generate_token() -> String {
    let seed = Uuid::new_v4().to_string();

    hex::encode(Sha256::digest(seed.as_bytes()))
}

/// A token is expired strictly after its expiry instant.
pub fn is_expired(expired: NaiveDateTime, now: NaiveDateTime) -> bool {
    expired < now
}
