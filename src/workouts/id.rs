//! Workout identifier generation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of a generated identifier in characters.
const ID_LENGTH: usize = 10;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Short random identifier for a workout.
///
/// Ten lowercase base-36 characters drawn from a v4 UUID's random bits.
/// Generation performs no uniqueness check against existing entries;
/// collisions are accepted as negligible at this length (~51 bits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        let mut bits = Uuid::new_v4().as_u128();
        let mut token = String::with_capacity(ID_LENGTH);
        for _ in 0..ID_LENGTH {
            token.push(BASE36_ALPHABET[(bits % 36) as usize] as char);
            bits /= 36;
        }
        Self(token)
    }

    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkoutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_ten_base36_chars() {
        let id = WorkoutId::generate();
        assert_eq!(id.as_str().len(), 10);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn consecutive_ids_differ() {
        assert_ne!(WorkoutId::generate(), WorkoutId::generate());
    }
}
