use serde::{Deserialize, Deserializer};

/// Deserializes a nullable column change.
///
/// Paired with `#[serde(default)]`: an absent field stays `None` (unchanged) while an
/// explicit `null` becomes `Some(None)` (cleared).
pub(crate) fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
