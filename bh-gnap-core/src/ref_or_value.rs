// Copyright (C) 2020-2026  The Blockhouse Technology Limited (TBTL).
//
// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or (at your
// option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public
// License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Objects transmitted either by value or by reference.

use bherror::traits::ForeignError as _;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{utils::short_type_name, Error, Result};

/// A type that can stand in for an object when the object is passed by
/// reference.
///
/// Implemented by the opaque [`Reference`] handle and by every
/// [`ClosedEnum`](crate::ClosedEnum) family declared with
/// [`closed_enum!`](crate::closed_enum!).
pub trait ReferenceKind: Sized {
    /// Builds the reference from a non-empty wire string.
    fn from_reference(raw: &str) -> Result<Self>;

    /// Returns the wire string of the reference.
    fn to_reference(&self) -> Result<String>;
}

/// An opaque, non-empty string handle referring to an object known to both
/// parties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reference(String);

impl Reference {
    /// Creates a new [`Reference`], rejecting the empty string.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(bherror::Error::root(Error::MalformedReference)
                .ctx("reference must not be empty"));
        }
        Ok(Self(raw))
    }

    /// Returns the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the reference and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Reference {
    type Error = bherror::Error<Error>;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Reference {
    type Error = bherror::Error<Error>;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl ReferenceKind for Reference {
    fn from_reference(raw: &str) -> Result<Self> {
        Self::new(raw)
    }

    fn to_reference(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// A protocol object that is sent either in full, as a JSON object, or
/// collapsed to a reference string.
///
/// Decoding inspects the JSON shape: a non-empty string becomes
/// [`RefOrValue::Ref`], an object becomes [`RefOrValue::Value`]. Anything
/// else, including the empty string, is rejected with
/// [`Error::MalformedReference`].
///
/// Encoding emits the bare reference string for [`RefOrValue::Ref`] and the
/// full object otherwise, even when every field of the object is empty.
///
/// # Example
///
/// ```
/// use bh_gnap_core::{RefOrValue, Reference};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Display {
///     name: String,
/// }
///
/// let by_ref: RefOrValue<Display> = serde_json::from_str(r#""client-7""#).unwrap();
/// assert_eq!(by_ref.reference().map(Reference::as_str), Some("client-7"));
///
/// let by_value: RefOrValue<Display> = serde_json::from_str(r#"{"name":"Demo"}"#).unwrap();
/// assert_eq!(by_value.value().unwrap().name, "Demo");
///
/// assert!(serde_json::from_str::<RefOrValue<Display>>(r#""""#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefOrValue<T, R = Reference> {
    /// The object is passed by reference.
    Ref(R),
    /// The object is passed by value.
    Value(T),
}

impl<T, R> RefOrValue<T, R> {
    /// Wraps an object passed by value.
    pub fn by_value(value: T) -> Self {
        Self::Value(value)
    }

    /// Wraps an object passed by reference.
    pub fn by_reference(reference: R) -> Self {
        Self::Ref(reference)
    }

    /// Returns `true` if the object is passed by reference.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Ref(_))
    }

    /// Returns the reference, if the object is passed by reference.
    pub fn reference(&self) -> Option<&R> {
        match self {
            Self::Ref(reference) => Some(reference),
            Self::Value(_) => None,
        }
    }

    /// Returns the object, if it is passed by value.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ref(_) => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Consumes `self` and returns the object, if it is passed by value.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ref(_) => None,
            Self::Value(value) => Some(value),
        }
    }
}

impl<T, R> RefOrValue<T, R>
where
    T: DeserializeOwned,
    R: ReferenceKind,
{
    /// Decodes a JSON value into a [`RefOrValue`].
    ///
    /// Failures of the reference type itself (e.g. an unregistered closed
    /// enumeration value) are propagated unchanged; failures of the object are
    /// reported as [`Error::MalformedValue`].
    pub fn decode(value: &Value) -> Result<Self> {
        match value {
            Value::String(raw) if raw.is_empty() => Err(bherror::Error::root(
                Error::MalformedReference,
            )
            .ctx("reference must not be empty")),
            Value::String(raw) => R::from_reference(raw).map(Self::Ref),
            Value::Object(_) => {
                let object = T::deserialize(value).match_foreign_err(|err| {
                    Error::MalformedValue(short_type_name::<T>(), err.to_string())
                })?;
                Ok(Self::Value(object))
            }
            other => Err(bherror::Error::root(Error::MalformedReference)
                .ctx(format!("expected a string or an object, got {}", other))),
        }
    }
}

impl<T, R> RefOrValue<T, R>
where
    T: Serialize,
    R: ReferenceKind,
{
    /// Encodes the [`RefOrValue`] into a JSON value.
    pub fn encode(&self) -> Result<Value> {
        match self {
            Self::Ref(reference) => reference.to_reference().map(Value::String),
            Self::Value(value) => serde_json::to_value(value).match_foreign_err(|err| {
                Error::MalformedValue(short_type_name::<T>(), err.to_string())
            }),
        }
    }
}

impl<T, R> Serialize for RefOrValue<T, R>
where
    T: Serialize,
    R: ReferenceKind,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Ref(reference) => {
                let raw = reference.to_reference().map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&raw)
            }
            Self::Value(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T, R> Deserialize<'de> for RefOrValue<T, R>
where
    T: DeserializeOwned,
    R: ReferenceKind,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}
