//! Random invite codes and anonymous display names.

use rand::seq::SliceRandom;
use rand::Rng;

/// Invite codes are short public join tokens; 36^6 keyspace.
pub const INVITE_CODE_LENGTH: usize = 6;

const INVITE_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const ADJECTIVES: [&str; 8] = [
    "Creative",
    "Thoughtful",
    "Insightful",
    "Brilliant",
    "Clever",
    "Wise",
    "Bold",
    "Curious",
];

const ANIMALS: [&str; 8] = [
    "Owl", "Fox", "Eagle", "Dolphin", "Lion", "Tiger", "Bear", "Wolf",
];

/// Generates a 6-character uppercase alphanumeric invite code.
///
/// Uniqueness is enforced by the caller against the store (bounded retry in
/// `RetrospectiveService::create`), not here.
pub fn generate_invite_code() -> String {
    let mut rng = rand::thread_rng();
    (0..INVITE_CODE_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..INVITE_CODE_CHARSET.len());
            INVITE_CODE_CHARSET[idx] as char
        })
        .collect()
}

/// Generates an adjective+animal anonymous display name, e.g. "Curious Fox".
pub fn generate_anonymous_name() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES.choose(&mut rng).unwrap_or(&ADJECTIVES[0]);
    let animal = ANIMALS.choose(&mut rng).unwrap_or(&ANIMALS[0]);
    format!("{} {}", adjective, animal)
}
