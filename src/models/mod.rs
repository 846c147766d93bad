//! Domain models for learning content.
//!
//! # Hierarchy
//!
//! - [`Topic`]: A learning topic, identified by its `slug`, holding an ordered
//!   list of sessions and the total minutes those sessions take.
//! - [`Session`]: One sitting within a topic, made of ordered sections.
//! - [`Section`]: The smallest unit of content, tagged with a [`SectionKind`].
//!
//! Every record keeps the fields it does not model in an `extra` map, so a
//! decode/encode round trip never drops data (quiz questions, video URLs,
//! topic colours and so on).

mod section;
mod session;
mod topic;

pub use section::*;
pub use session::*;
pub use topic::*;

use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// Fields carried through a round trip without being interpreted.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// Deserialize a key that is present, `null` included, as `Some`.
///
/// Paired with `#[serde(default)]` so an absent key stays `None` and an
/// explicit `null` survives as `Some(None)`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// `minutes` added to a time field, keeping integers integral.
///
/// Integer sums that would overflow fall back to floating point.
pub fn add_minutes(time: &Number, minutes: u32) -> Number {
    let minutes = u64::from(minutes);
    if let Some(sum) = time.as_u64().and_then(|t| t.checked_add(minutes)) {
        return Number::from(sum);
    }
    if let Some(sum) = time
        .as_i64()
        .and_then(|t| i64::try_from(minutes).ok().and_then(|m| t.checked_add(m)))
    {
        return Number::from(sum);
    }
    time.as_f64()
        .and_then(|t| Number::from_f64(t + minutes as f64))
        .unwrap_or_else(|| time.clone())
}
