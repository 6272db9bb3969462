//! Per-element identifiers of the form `<project>_<type>_<hash>`.

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::element::ElementType;

/// Number of hex characters in the hash suffix.
pub const HASH_LEN: usize = 8;

/// Generate an identifier for a new element instance.
///
/// The suffix hashes a nanosecond timestamp together with a random value,
/// so collisions within one session are improbable but not impossible.
pub fn generate_id(project: &str, kind: ElementType) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let salt: u64 = rand::random();
    format!("{project}_{kind}_{}", short_hash(&format!("{nanos}{salt}")))
}

fn short_hash(seed: &str) -> String {
    let digest = Sha256::digest(seed.as_bytes());
    digest
        .iter()
        .take(HASH_LEN / 2)
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Check that `id` looks like something [`generate_id`] produced for
/// `project` and `kind`.
pub fn is_valid_id(id: &str, project: &str, kind: ElementType) -> bool {
    let prefix = format!("{project}_{kind}_");
    match id.strip_prefix(&prefix) {
        Some(hash) => {
            hash.len() == HASH_LEN
                && hash.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        }
        None => false,
    }
}
