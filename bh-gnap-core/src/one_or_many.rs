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

//! Fields holding either a single item or an array of items.

use std::collections::HashSet;

use bherror::traits::{ErrorContext as _, ForeignError as _};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{utils::short_type_name, Error, Result};

/// An item carrying an optional client-chosen label.
///
/// Labels disambiguate which element of a multi-item response corresponds to
/// which element of the request.
pub trait Labeled {
    /// Returns the label, if any. An empty string counts as no label.
    fn label(&self) -> Option<&str>;
}

/// A field that holds either one item or an array of items.
///
/// [`OneOrMany::One`] is encoded as the bare item, [`OneOrMany::Many`] always
/// as an array, including the empty array. Absence of the field is expressed
/// with [`Option`] at the containing struct, so "not sent", "sent empty" and
/// "sent with items" remain three distinct states.
///
/// Decoding inspects the JSON shape: an array yields [`OneOrMany::Many`] (even
/// with a single element), anything else is decoded as a single item.
///
/// # Example
///
/// ```
/// use bh_gnap_core::OneOrMany;
///
/// let one: OneOrMany<String> = serde_json::from_str(r#""aud-1""#).unwrap();
/// assert_eq!(one, OneOrMany::One("aud-1".to_owned()));
///
/// let many: OneOrMany<String> = serde_json::from_str(r#"["aud-1"]"#).unwrap();
/// assert_eq!(many, OneOrMany::Many(vec!["aud-1".to_owned()]));
///
/// let empty: OneOrMany<String> = OneOrMany::Many(vec![]);
/// assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
    /// A single item.
    One(T),
    /// An ordered array of items.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Returns `true` for the array form, regardless of its length.
    pub fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    /// Returns `true` if there are no items, which is only possible for the
    /// array form.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the items as a slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }

    /// Iterates over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Consumes `self` and returns the items as a vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

impl<T: Labeled> OneOrMany<T> {
    /// Builds the array form out of labeled items.
    ///
    /// Every item must carry a non-empty label and no two labels may be equal
    /// (case-sensitive).
    pub fn from_labeled(items: Vec<T>) -> Result<Self> {
        let many = Self::Many(items);
        many.validate_labels()?;
        Ok(many)
    }

    /// Checks the labeling rules.
    ///
    /// A single item may go without a label. In the array form, a missing
    /// label fails with [`Error::MissingLabel`] and a repeated one with
    /// [`Error::DuplicateLabel`].
    pub fn validate_labels(&self) -> Result<()> {
        let Self::Many(items) = self else {
            return Ok(());
        };

        let mut seen = HashSet::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let label = match item.label() {
                Some(label) if !label.is_empty() => label,
                _ => {
                    return Err(bherror::Error::root(Error::MissingLabel)
                        .ctx(format!("item at index {index} has no label")));
                }
            };

            if !seen.insert(label) {
                return Err(bherror::Error::root(Error::DuplicateLabel(
                    label.to_owned(),
                )));
            }
        }

        Ok(())
    }
}

impl<T: DeserializeOwned> OneOrMany<T> {
    /// Decodes a JSON value into a [`OneOrMany`].
    ///
    /// An item that fails to decode, in either form, yields
    /// [`Error::MalformedCardinality`].
    pub fn decode(value: &Value) -> Result<Self> {
        match value {
            Value::Array(elements) => {
                let items = elements
                    .iter()
                    .enumerate()
                    .map(|(index, element)| {
                        T::deserialize(element)
                            .foreign_err(|| Error::MalformedCardinality)
                            .ctx(|| {
                                format!(
                                    "array item {index} is not a valid {}",
                                    short_type_name::<T>()
                                )
                            })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Many(items))
            }
            single => T::deserialize(single)
                .foreign_err(|| Error::MalformedCardinality)
                .ctx(|| {
                    format!(
                        "value is neither a {} nor an array of them",
                        short_type_name::<T>()
                    )
                })
                .map(Self::One),
        }
    }
}

impl<T: Labeled + DeserializeOwned> OneOrMany<T> {
    /// Deserializes an optional labeled field and checks its labeling rules.
    ///
    /// Meant for `#[serde(default, deserialize_with = "...")]` on fields of
    /// type `Option<OneOrMany<T>>`.
    pub fn deserialize_labeled<'de, D>(deserializer: D) -> std::result::Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(value) = Option::<Value>::deserialize(deserializer)? else {
            return Ok(None);
        };

        let decoded = Self::decode(&value).map_err(serde::de::Error::custom)?;
        decoded
            .validate_labels()
            .map_err(serde::de::Error::custom)?;

        Ok(Some(decoded))
    }
}

impl<T: Serialize> OneOrMany<T> {
    /// Encodes the [`OneOrMany`] into a JSON value.
    pub fn encode(&self) -> Result<Value> {
        serde_json::to_value(self).match_foreign_err(|err| {
            Error::MalformedValue(short_type_name::<T>(), err.to_string())
        })
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(item: T) -> Self {
        Self::One(item)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items)
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for OneOrMany<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::One(item) => item.serialize(serializer),
            Self::Many(items) => items.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for OneOrMany<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        Self::decode(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Token {
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    }

    impl Labeled for Token {
        fn label(&self) -> Option<&str> {
            self.label.as_deref()
        }
    }

    fn token(value: &str, label: Option<&str>) -> Token {
        Token {
            value: value.to_owned(),
            label: label.map(str::to_owned),
        }
    }

    #[test]
    fn decode_object_as_single() {
        let decoded = OneOrMany::<Token>::decode(&json!({"value": "tok"})).unwrap();

        assert_eq!(decoded, OneOrMany::One(token("tok", None)));
        assert!(!decoded.is_many());
    }

    #[test]
    fn decode_singleton_array_stays_many() {
        let decoded = OneOrMany::<Token>::decode(&json!([{"value": "tok"}])).unwrap();

        assert_eq!(decoded, OneOrMany::Many(vec![token("tok", None)]));
        assert_eq!(decoded.len(), 1);
    }

    #[test]
    fn decode_empty_array_stays_many() {
        let decoded = OneOrMany::<Token>::decode(&json!([])).unwrap();

        assert!(decoded.is_many());
        assert!(decoded.is_empty());
        assert_eq!(decoded.encode().unwrap(), json!([]));
    }

    #[test]
    fn decode_malformed_fails_with_cardinality_error() {
        for value in [json!("tok"), json!(null), json!([{"value": "a"}, 3])] {
            let err = OneOrMany::<Token>::decode(&value).unwrap_err();
            assert_eq!(err.error, Error::MalformedCardinality);
        }
    }

    #[test]
    fn encode_preserves_form_and_order() {
        let single = OneOrMany::One(token("tok", None));
        assert_eq!(single.encode().unwrap(), json!({"value": "tok"}));

        let many = OneOrMany::Many(vec![token("tok1", Some("a")), token("tok2", Some("b"))]);
        assert_eq!(
            serde_json::to_string(&many).unwrap(),
            r#"[{"value":"tok1","label":"a"},{"value":"tok2","label":"b"}]"#
        );

        let decoded: OneOrMany<Token> =
            serde_json::from_value(many.encode().unwrap()).unwrap();
        assert_eq!(decoded, many);
    }

    #[test]
    fn from_labeled_rejects_duplicate_labels() {
        let err = OneOrMany::from_labeled(vec![
            token("tok1", Some("primary")),
            token("tok2", Some("primary")),
        ])
        .unwrap_err();

        assert_eq!(err.error, Error::DuplicateLabel("primary".to_owned()));
    }

    #[test]
    fn from_labeled_labels_are_case_sensitive() {
        let many = OneOrMany::from_labeled(vec![
            token("tok1", Some("primary")),
            token("tok2", Some("Primary")),
        ])
        .unwrap();

        assert_eq!(many.len(), 2);
    }

    #[test]
    fn from_labeled_rejects_missing_labels() {
        let err = OneOrMany::from_labeled(vec![token("tok1", Some("a")), token("tok2", None)])
            .unwrap_err();
        assert_eq!(err.error, Error::MissingLabel);

        let err = OneOrMany::from_labeled(vec![token("tok1", Some(""))]).unwrap_err();
        assert_matches!(err.error, Error::MissingLabel);
    }

    #[test]
    fn single_item_needs_no_label() {
        let single = OneOrMany::One(token("tok", None));

        assert!(single.validate_labels().is_ok());
    }

    #[derive(Debug, Deserialize)]
    struct Envelope {
        #[serde(default, deserialize_with = "OneOrMany::deserialize_labeled")]
        tokens: Option<OneOrMany<Token>>,
    }

    #[test]
    fn deserialize_labeled_field() {
        let envelope: Envelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.tokens.is_none());

        let envelope: Envelope =
            serde_json::from_value(json!({"tokens": {"value": "tok"}})).unwrap();
        assert_eq!(envelope.tokens, Some(OneOrMany::One(token("tok", None))));

        let err = serde_json::from_value::<Envelope>(json!({
            "tokens": [
                {"value": "tok1", "label": "primary"},
                {"value": "tok2", "label": "primary"}
            ]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("used more than once"));
    }

    #[test]
    fn scalar_items() {
        let one: OneOrMany<String> = serde_json::from_value(json!("rs-1")).unwrap();
        assert_eq!(one.as_slice(), ["rs-1".to_owned()]);

        let many: OneOrMany<String> = serde_json::from_value(json!(["rs-1", "rs-2"])).unwrap();
        assert_eq!(many.into_vec(), vec!["rs-1".to_owned(), "rs-2".to_owned()]);
    }
}
