use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-authored title+content text record.
///
/// The serialized field names (`_id`, `createdAt`) are the historical wire
/// format of the pastes slot, kept so existing data files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paste {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Paste {
    /// Creates a paste with a freshly generated id and the current time.
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: generate_id(),
            title,
            content,
            created_at: Utc::now(),
        }
    }
}

/// Generates a paste id: the current unix time in milliseconds, base-36.
///
/// Ids are monotonic-ish rather than random. Collisions within the same
/// millisecond are a caller error the store does not guard against.
pub fn generate_id() -> String {
    encode_base36(Utc::now().timestamp_millis().max(0) as u64)
}

fn encode_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    out.into_iter().rev().collect()
}
