use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field of a partial update.
///
/// Plain `Option<T>` cannot tell "the client left this field out" apart from
/// "the client sent `null`". `Patch` keeps the three states separate:
///
/// * `Absent`: the key was missing from the request body
/// * `Null`: the key was present with an explicit `null`
/// * `Value(v)`: the key was present with a value
///
/// Struct fields must be annotated with `#[serde(default)]` so a missing key
/// falls back to `Absent`; the `Deserialize` impl itself only ever sees
/// present keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// `None` when absent, `Some(None)` when null, `Some(Some(v))` otherwise.
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Patch::Absent => None,
            Patch::Null => Some(None),
            Patch::Value(value) => Some(Some(value)),
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Value(value)
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}

impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Value(value) => value.serialize(serializer),
            // Absent fields should be skipped with `skip_serializing_if`
            Patch::Absent | Patch::Null => serializer.serialize_none(),
        }
    }
}
