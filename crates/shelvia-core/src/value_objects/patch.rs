//! Tri-state field for partial updates
//!
//! A JSON object field can be missing, explicitly `null`, or carry a value.
//! `Patch<T>` keeps those three cases apart so an update only touches the
//! fields the caller actually sent. Use it with `#[serde(default)]` so a
//! missing field deserializes to [`Patch::Absent`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Field state in a partial update
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// Field not present; leave the current value untouched
    #[default]
    Absent,
    /// Field present as `null`; clear the current value
    Null,
    /// Field present with a value; replace the current value
    Value(T),
}

impl<T> Patch<T> {
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Borrow the value, if any
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    /// Apply this patch to a nullable field
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Self::Absent => {}
            Self::Null => *target = None,
            Self::Value(v) => *target = Some(v),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
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
        Option::<T>::deserialize(deserializer).map(Patch::from)
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
            Self::Value(v) => v.serialize(serializer),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}
