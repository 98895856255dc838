use serde::{Deserialize, Serialize};

/// Number of shift-table buckets a key is reduced into.
pub const SHIFT_INDEX: u32 = 256 * 256;

pub type Key = u32;

/// Rolling hash (`h * 31 + byte`) over the first `len` bytes of `s`, reduced
/// into `[0, SHIFT_INDEX)`.
///
/// `len` is clamped to the byte length of `s`.
pub fn key_of(s: &str, len: usize) -> Key {
    let h = s
        .as_bytes()
        .iter()
        .take(len)
        .fold(0u32, |h, &b| h.wrapping_mul(31).wrapping_add(b as u32));
    h % SHIFT_INDEX
}

/// How much of a string feeds its key.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyScope {
    /// Hash the whole string. Entries sharing a key are true hash collisions.
    #[default]
    FullString,
    /// Hash only the first `prefix_length` bytes, so every pattern sharing a
    /// prefix lands in the same run of equal keys.
    Prefix,
}

impl KeyScope {
    pub(crate) fn key(&self, s: &str, prefix_length: usize) -> Key {
        match self {
            KeyScope::FullString => key_of(s, s.len()),
            KeyScope::Prefix => key_of(s, prefix_length),
        }
    }
}
