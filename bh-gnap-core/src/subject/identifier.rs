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

use serde::{Deserialize, Serialize, Serializer};

use super::{
    format::{Field, Format},
    validate,
};
use crate::{ClosedEnum as _, Error, Result};

/// A subject identifier of any single format, i.e. anything but
/// [`Format::Aliases`].
///
/// Each variant holds exactly the payload fields of its format. Use the
/// per-format constructors, which validate the payload; an instance assembled
/// directly from its variant is validated again when it gets serialized.
///
/// Equality compares the format and the fields of that format only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawSubjectIdentifier")]
pub enum NoAlias {
    /// `account`: an `acct` URI.
    Account {
        /// The `acct` URI.
        uri: String,
    },
    /// `email`: an e-mail address.
    Email {
        /// The e-mail address.
        email: String,
    },
    /// `iss_sub`: an issuer and subject pair.
    IssuerSubject {
        /// The issuer (`iss`).
        issuer: String,
        /// The subject (`sub`), unique within the issuer.
        subject: String,
    },
    /// `opaque`: an opaque string.
    Opaque {
        /// The opaque identifier.
        id: String,
    },
    /// `phone_number`: an E.164 telephone number.
    PhoneNumber {
        /// The telephone number.
        phone_number: String,
    },
    /// `did`: a decentralized identifier URL.
    Did {
        /// The DID URL.
        url: String,
    },
    /// `uri`: any URI.
    Uri {
        /// The URI.
        uri: String,
    },
}

impl NoAlias {
    /// Creates an `account` identifier.
    pub fn account(uri: impl Into<String>) -> Result<Self> {
        Self::Account { uri: uri.into() }.validated()
    }

    /// Creates an `email` identifier.
    pub fn email(email: impl Into<String>) -> Result<Self> {
        Self::Email {
            email: email.into(),
        }
        .validated()
    }

    /// Creates an `iss_sub` identifier.
    pub fn issuer_subject(issuer: impl Into<String>, subject: impl Into<String>) -> Result<Self> {
        Self::IssuerSubject {
            issuer: issuer.into(),
            subject: subject.into(),
        }
        .validated()
    }

    /// Creates an `opaque` identifier.
    pub fn opaque(id: impl Into<String>) -> Result<Self> {
        Self::Opaque { id: id.into() }.validated()
    }

    /// Creates a `phone_number` identifier.
    pub fn phone_number(phone_number: impl Into<String>) -> Result<Self> {
        Self::PhoneNumber {
            phone_number: phone_number.into(),
        }
        .validated()
    }

    /// Creates a `did` identifier.
    pub fn did(url: impl Into<String>) -> Result<Self> {
        Self::Did { url: url.into() }.validated()
    }

    /// Creates a `uri` identifier.
    pub fn uri(uri: impl Into<String>) -> Result<Self> {
        Self::Uri { uri: uri.into() }.validated()
    }

    /// Returns the format of the identifier.
    pub fn format(&self) -> Format {
        match self {
            NoAlias::Account { .. } => Format::Account,
            NoAlias::Email { .. } => Format::Email,
            NoAlias::IssuerSubject { .. } => Format::IssuerSubject,
            NoAlias::Opaque { .. } => Format::Opaque,
            NoAlias::PhoneNumber { .. } => Format::PhoneNumber,
            NoAlias::Did { .. } => Format::Did,
            NoAlias::Uri { .. } => Format::Uri,
        }
    }

    /// Checks the payload against the grammar of the format.
    pub fn validate(&self) -> Result<()> {
        let check = match self {
            NoAlias::Account { uri } => validate::account(uri),
            NoAlias::Email { email } => validate::email(email),
            NoAlias::IssuerSubject { issuer, subject } => {
                validate::issuer_subject(issuer, subject)
            }
            NoAlias::Opaque { id } => validate::opaque(id),
            NoAlias::PhoneNumber { phone_number } => validate::phone_number(phone_number),
            NoAlias::Did { url } => validate::did(url),
            NoAlias::Uri { uri } => validate::uri(uri),
        };

        check.map_err(|reason| {
            bherror::Error::root(Error::InvalidSubjectIdentifier(self.format(), reason))
        })
    }

    fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}

impl Serialize for NoAlias {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.validate().map_err(serde::ser::Error::custom)?;
        RawSubjectIdentifier::from(self).serialize(serializer)
    }
}

impl TryFrom<RawSubjectIdentifier> for NoAlias {
    type Error = bherror::Error<Error>;

    fn try_from(mut raw: RawSubjectIdentifier) -> Result<Self> {
        let format = Format::decode(&raw.format)?;
        raw.reject_foreign_fields(format)?;

        let mut take = |field| raw.take(field).unwrap_or_default();
        let id = match format {
            Format::Account => NoAlias::Account {
                uri: take(Field::Uri),
            },
            Format::Email => NoAlias::Email {
                email: take(Field::Email),
            },
            Format::IssuerSubject => NoAlias::IssuerSubject {
                issuer: take(Field::Issuer),
                subject: take(Field::Subject),
            },
            Format::Opaque => NoAlias::Opaque { id: take(Field::Id) },
            Format::PhoneNumber => NoAlias::PhoneNumber {
                phone_number: take(Field::PhoneNumber),
            },
            Format::Did => NoAlias::Did {
                url: take(Field::Url),
            },
            Format::Uri => NoAlias::Uri {
                uri: take(Field::Uri),
            },
            Format::Aliases => {
                return Err(bherror::Error::root(Error::InvalidSubjectIdentifier(
                    format,
                    "aliases cannot be nested".to_owned(),
                )));
            }
        };

        id.validated()
    }
}

/// A non-empty, duplicate-free, ordered set of [`NoAlias`] identifiers that
/// all refer to the same subject.
#[derive(Debug, Clone, Eq)]
pub struct Aliases(Vec<NoAlias>);

impl Aliases {
    /// Creates the set, keeping the given order.
    ///
    /// Fails if `identifiers` is empty or contains the same identifier twice.
    pub fn new(identifiers: Vec<NoAlias>) -> Result<Self> {
        let aliases = Self(identifiers);
        aliases.validate()?;
        Ok(aliases)
    }

    /// Validates every identifier and the set rules.
    pub fn validate(&self) -> Result<()> {
        if self.0.is_empty() {
            return Err(bherror::Error::root(Error::InvalidSubjectIdentifier(
                Format::Aliases,
                "at least one identifier is required".to_owned(),
            )));
        }

        for (index, id) in self.0.iter().enumerate() {
            id.validate()?;

            if self.0[..index].contains(id) {
                return Err(bherror::Error::root(Error::InvalidSubjectIdentifier(
                    Format::Aliases,
                    format!("identifier at index {index} is a duplicate"),
                )));
            }
        }

        Ok(())
    }

    /// Returns the identifiers in their original order.
    pub fn identifiers(&self) -> &[NoAlias] {
        &self.0
    }

    /// Returns `true` if the set contains an identifier equal to `id`.
    pub fn contains(&self, id: &NoAlias) -> bool {
        self.0.contains(id)
    }

    /// Consumes the set and returns the identifiers.
    pub fn into_inner(self) -> Vec<NoAlias> {
        self.0
    }
}

/// Order-independent comparison: both sets hold the same identifiers.
impl PartialEq for Aliases {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().all(|id| other.contains(id))
            && other.0.iter().all(|id| self.contains(id))
    }
}

impl<'a> IntoIterator for &'a Aliases {
    type Item = &'a NoAlias;
    type IntoIter = std::slice::Iter<'a, NoAlias>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A subject identifier: either a single identifier or a set of aliases.
///
/// # Example
///
/// ```
/// use bh_gnap_core::subject::{Format, NoAlias, SubjectIdentifier};
///
/// let json = r#"{"format":"email","email":"user@example.com"}"#;
/// let id: SubjectIdentifier = serde_json::from_str(json).unwrap();
/// assert_eq!(id.format(), Format::Email);
/// assert_eq!(id, SubjectIdentifier::email("user@example.com").unwrap());
///
/// let aliases = SubjectIdentifier::aliases(vec![
///     NoAlias::email("user@example.com").unwrap(),
///     NoAlias::phone_number("+12065550100").unwrap(),
/// ])
/// .unwrap();
/// assert_eq!(aliases.format(), Format::Aliases);
/// ```
#[derive(Debug, Clone, Eq, Deserialize)]
#[serde(try_from = "RawSubjectIdentifier")]
pub enum SubjectIdentifier {
    /// A single identifier.
    Single(NoAlias),
    /// `aliases`: several identifiers for the same subject.
    Aliases(Aliases),
}

impl SubjectIdentifier {
    /// Creates an `account` identifier.
    pub fn account(uri: impl Into<String>) -> Result<Self> {
        NoAlias::account(uri).map(Self::Single)
    }

    /// Creates an `email` identifier.
    pub fn email(email: impl Into<String>) -> Result<Self> {
        NoAlias::email(email).map(Self::Single)
    }

    /// Creates an `iss_sub` identifier.
    pub fn issuer_subject(issuer: impl Into<String>, subject: impl Into<String>) -> Result<Self> {
        NoAlias::issuer_subject(issuer, subject).map(Self::Single)
    }

    /// Creates an `opaque` identifier.
    pub fn opaque(id: impl Into<String>) -> Result<Self> {
        NoAlias::opaque(id).map(Self::Single)
    }

    /// Creates a `phone_number` identifier.
    pub fn phone_number(phone_number: impl Into<String>) -> Result<Self> {
        NoAlias::phone_number(phone_number).map(Self::Single)
    }

    /// Creates a `did` identifier.
    pub fn did(url: impl Into<String>) -> Result<Self> {
        NoAlias::did(url).map(Self::Single)
    }

    /// Creates a `uri` identifier.
    pub fn uri(uri: impl Into<String>) -> Result<Self> {
        NoAlias::uri(uri).map(Self::Single)
    }

    /// Creates an `aliases` identifier.
    pub fn aliases(identifiers: Vec<NoAlias>) -> Result<Self> {
        Aliases::new(identifiers).map(Self::Aliases)
    }

    /// Returns the format of the identifier.
    pub fn format(&self) -> Format {
        match self {
            SubjectIdentifier::Single(id) => id.format(),
            SubjectIdentifier::Aliases(_) => Format::Aliases,
        }
    }

    /// Validates the identifier against the rules of its format.
    pub fn validate(&self) -> Result<()> {
        match self {
            SubjectIdentifier::Single(id) => id.validate(),
            SubjectIdentifier::Aliases(aliases) => aliases.validate(),
        }
    }

    /// Returns the identifiers as a slice: one element for a single
    /// identifier, all of them for aliases.
    pub fn identifiers(&self) -> &[NoAlias] {
        match self {
            SubjectIdentifier::Single(id) => std::slice::from_ref(id),
            SubjectIdentifier::Aliases(aliases) => aliases.identifiers(),
        }
    }
}

/// Two single identifiers are equal when their format and format fields are.
/// When either side is `aliases`, both sides are compared as sets, a single
/// identifier being a set of one.
impl PartialEq for SubjectIdentifier {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SubjectIdentifier::Single(a), SubjectIdentifier::Single(b)) => a == b,
            (SubjectIdentifier::Aliases(a), SubjectIdentifier::Aliases(b)) => a == b,
            (SubjectIdentifier::Single(single), SubjectIdentifier::Aliases(aliases))
            | (SubjectIdentifier::Aliases(aliases), SubjectIdentifier::Single(single)) => {
                aliases.identifiers() == std::slice::from_ref(single)
            }
        }
    }
}

impl From<NoAlias> for SubjectIdentifier {
    fn from(id: NoAlias) -> Self {
        Self::Single(id)
    }
}

impl Serialize for SubjectIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.validate().map_err(serde::ser::Error::custom)?;
        RawSubjectIdentifier::from(self).serialize(serializer)
    }
}

impl TryFrom<RawSubjectIdentifier> for SubjectIdentifier {
    type Error = bherror::Error<Error>;

    fn try_from(mut raw: RawSubjectIdentifier) -> Result<Self> {
        let format = Format::decode(&raw.format)?;
        if format.is_single() {
            return NoAlias::try_from(raw).map(Self::Single);
        }
        raw.reject_foreign_fields(format)?;

        let identifiers = raw
            .identifiers
            .take()
            .unwrap_or_default()
            .into_iter()
            .map(NoAlias::try_from)
            .collect::<Result<Vec<_>>>()?;

        Self::aliases(identifiers)
    }
}

/// The flat wire shape shared by every format. This is a "shadow" type used
/// to validate deserialized identifiers through `TryFrom`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct RawSubjectIdentifier {
    format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(rename = "iss", skip_serializing_if = "Option::is_none")]
    issuer: Option<String>,
    #[serde(rename = "sub", skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    identifiers: Option<Vec<RawSubjectIdentifier>>,
}

impl RawSubjectIdentifier {
    fn is_present(&self, field: Field) -> bool {
        match field {
            Field::Uri => self.uri.is_some(),
            Field::Email => self.email.is_some(),
            Field::Issuer => self.issuer.is_some(),
            Field::Subject => self.subject.is_some(),
            Field::Id => self.id.is_some(),
            Field::PhoneNumber => self.phone_number.is_some(),
            Field::Url => self.url.is_some(),
            Field::Identifiers => self.identifiers.is_some(),
        }
    }

    fn take(&mut self, field: Field) -> Option<String> {
        match field {
            Field::Uri => self.uri.take(),
            Field::Email => self.email.take(),
            Field::Issuer => self.issuer.take(),
            Field::Subject => self.subject.take(),
            Field::Id => self.id.take(),
            Field::PhoneNumber => self.phone_number.take(),
            Field::Url => self.url.take(),
            Field::Identifiers => None,
        }
    }

    /// Fails if a payload field of another format is present.
    fn reject_foreign_fields(&self, format: Format) -> Result<()> {
        const ALL: [Field; 8] = [
            Field::Uri,
            Field::Email,
            Field::Issuer,
            Field::Subject,
            Field::Id,
            Field::PhoneNumber,
            Field::Url,
            Field::Identifiers,
        ];

        let allowed = format.fields();
        match ALL
            .into_iter()
            .find(|field| !allowed.contains(field) && self.is_present(*field))
        {
            Some(field) => Err(bherror::Error::root(Error::InvalidSubjectIdentifier(
                format,
                format!("unexpected `{}` field", field.as_str()),
            ))),
            None => Ok(()),
        }
    }
}

impl From<&NoAlias> for RawSubjectIdentifier {
    fn from(id: &NoAlias) -> Self {
        let mut raw = RawSubjectIdentifier {
            format: id.format().as_str().to_owned(),
            ..Default::default()
        };
        match id {
            NoAlias::Account { uri } | NoAlias::Uri { uri } => raw.uri = Some(uri.clone()),
            NoAlias::Email { email } => raw.email = Some(email.clone()),
            NoAlias::IssuerSubject { issuer, subject } => {
                raw.issuer = Some(issuer.clone());
                raw.subject = Some(subject.clone());
            }
            NoAlias::Opaque { id } => raw.id = Some(id.clone()),
            NoAlias::PhoneNumber { phone_number } => raw.phone_number = Some(phone_number.clone()),
            NoAlias::Did { url } => raw.url = Some(url.clone()),
        }
        raw
    }
}

impl From<&SubjectIdentifier> for RawSubjectIdentifier {
    fn from(id: &SubjectIdentifier) -> Self {
        match id {
            SubjectIdentifier::Single(id) => id.into(),
            SubjectIdentifier::Aliases(aliases) => RawSubjectIdentifier {
                format: Format::Aliases.as_str().to_owned(),
                identifiers: Some(aliases.identifiers().iter().map(Into::into).collect()),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn email(email: &str) -> NoAlias {
        NoAlias::email(email).unwrap()
    }

    fn phone(phone: &str) -> NoAlias {
        NoAlias::phone_number(phone).unwrap()
    }

    #[test]
    fn constructors_validate_literal_cases() {
        assert!(NoAlias::account("acct:example.user@service.example.com").is_ok());
        assert!(NoAlias::phone_number("+12065550100").is_ok());
        assert!(NoAlias::did("did:example:123456/did/url/path?versionId=1").is_ok());

        let err = NoAlias::account("http://example.com").unwrap_err();
        assert_matches!(
            err.error,
            Error::InvalidSubjectIdentifier(Format::Account, _)
        );

        let err = NoAlias::phone_number("").unwrap_err();
        assert_matches!(
            err.error,
            Error::InvalidSubjectIdentifier(Format::PhoneNumber, _)
        );
    }

    #[test]
    fn decode_single_identifiers() {
        let cases = [
            (
                json!({"format": "account", "uri": "acct:example.user@service.example.com"}),
                NoAlias::account("acct:example.user@service.example.com").unwrap(),
            ),
            (
                json!({"format": "email", "email": "user@example.com"}),
                email("user@example.com"),
            ),
            (
                json!({"format": "iss_sub", "iss": "https://issuer.example.com/", "sub": "145234573"}),
                NoAlias::issuer_subject("https://issuer.example.com/", "145234573").unwrap(),
            ),
            (
                json!({"format": "opaque", "id": "11112222333344445555"}),
                NoAlias::opaque("11112222333344445555").unwrap(),
            ),
            (
                json!({"format": "phone_number", "phone_number": "+12065550100"}),
                phone("+12065550100"),
            ),
            (
                json!({"format": "did", "url": "did:example:123456"}),
                NoAlias::did("did:example:123456").unwrap(),
            ),
            (
                json!({"format": "uri", "uri": "https://user.example.com/"}),
                NoAlias::uri("https://user.example.com/").unwrap(),
            ),
        ];

        for (json, expected) in cases {
            let decoded: SubjectIdentifier = serde_json::from_value(json.clone()).unwrap();
            assert_eq!(decoded, SubjectIdentifier::Single(expected));
            assert_eq!(serde_json::to_value(&decoded).unwrap(), json);
        }
    }

    #[test]
    fn decode_rejects_foreign_fields() {
        let raw: RawSubjectIdentifier = serde_json::from_value(
            json!({"format": "email", "email": "user@example.com", "phone_number": "+12065550100"}),
        )
        .unwrap();

        let err = SubjectIdentifier::try_from(raw).unwrap_err();
        assert_matches!(err.error, Error::InvalidSubjectIdentifier(Format::Email, _));
    }

    #[test]
    fn decode_rejects_missing_payload() {
        let raw: RawSubjectIdentifier =
            serde_json::from_value(json!({"format": "opaque"})).unwrap();

        let err = SubjectIdentifier::try_from(raw).unwrap_err();
        assert_matches!(err.error, Error::InvalidSubjectIdentifier(Format::Opaque, _));
    }

    #[test]
    fn decode_rejects_unknown_format() {
        let raw: RawSubjectIdentifier =
            serde_json::from_value(json!({"format": "x509", "uri": "x"})).unwrap();

        let err = SubjectIdentifier::try_from(raw).unwrap_err();
        assert_matches!(err.error, Error::InvalidEnumValue(_, _));

        assert!(serde_json::from_value::<SubjectIdentifier>(json!({"uri": "x"})).is_err());
    }

    #[test]
    fn aliases_end_to_end_preserves_order() {
        let json = json!({
            "format": "aliases",
            "identifiers": [
                {"format": "email", "email": "user@example.com"},
                {"format": "phone_number", "phone_number": "+12065550100"}
            ]
        });

        let decoded: SubjectIdentifier = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(decoded.format(), Format::Aliases);
        assert_eq!(
            decoded.identifiers(),
            [email("user@example.com"), phone("+12065550100")]
        );

        let encoded = serde_json::to_value(&decoded).unwrap();
        assert_eq!(encoded, json);
    }

    #[test]
    fn aliases_reject_duplicates() {
        let err = SubjectIdentifier::aliases(vec![
            email("a@b.com"),
            email("a@b.com"),
        ])
        .unwrap_err();
        assert_matches!(
            err.error,
            Error::InvalidSubjectIdentifier(Format::Aliases, _)
        );

        let ok = SubjectIdentifier::aliases(vec![email("a@b.com"), phone("+12065550100")]);
        assert!(ok.is_ok());
    }

    #[test]
    fn aliases_reject_empty_set() {
        let err = SubjectIdentifier::aliases(vec![]).unwrap_err();
        assert_matches!(
            err.error,
            Error::InvalidSubjectIdentifier(Format::Aliases, _)
        );

        let raw: RawSubjectIdentifier =
            serde_json::from_value(json!({"format": "aliases"})).unwrap();
        assert!(SubjectIdentifier::try_from(raw).is_err());
    }

    #[test]
    fn aliases_reject_nesting_and_scalar_fields() {
        let nested = json!({
            "format": "aliases",
            "identifiers": [
                {"format": "aliases", "identifiers": [{"format": "email", "email": "a@b.com"}]}
            ]
        });
        let raw: RawSubjectIdentifier = serde_json::from_value(nested).unwrap();
        let err = SubjectIdentifier::try_from(raw).unwrap_err();
        assert_matches!(
            err.error,
            Error::InvalidSubjectIdentifier(Format::Aliases, _)
        );

        let with_scalar = json!({
            "format": "aliases",
            "email": "a@b.com",
            "identifiers": [{"format": "email", "email": "a@b.com"}]
        });
        let raw: RawSubjectIdentifier = serde_json::from_value(with_scalar).unwrap();
        let err = SubjectIdentifier::try_from(raw).unwrap_err();
        assert_matches!(
            err.error,
            Error::InvalidSubjectIdentifier(Format::Aliases, _)
        );
    }

    #[test]
    fn aliases_reject_invalid_members() {
        let json = json!({
            "format": "aliases",
            "identifiers": [
                {"format": "email", "email": "a@b.com"},
                {"format": "phone_number", "phone_number": "+0555"}
            ]
        });

        let raw: RawSubjectIdentifier = serde_json::from_value(json.clone()).unwrap();
        let err = SubjectIdentifier::try_from(raw).unwrap_err();
        assert_matches!(
            err.error,
            Error::InvalidSubjectIdentifier(Format::PhoneNumber, _)
        );

        assert!(serde_json::from_value::<SubjectIdentifier>(json).is_err());
    }

    #[test]
    fn equality_compares_format_fields_only() {
        assert_eq!(email("a@b.com"), email("a@b.com"));
        assert_ne!(email("a@b.com"), email("c@b.com"));
        assert_ne!(
            NoAlias::account("acct:a@b.com").unwrap(),
            NoAlias::uri("acct:a@b.com").unwrap()
        );
    }

    #[test]
    fn aliases_equality_is_set_equality() {
        let ab = SubjectIdentifier::aliases(vec![email("a@b.com"), phone("+12065550100")]).unwrap();
        let ba = SubjectIdentifier::aliases(vec![phone("+12065550100"), email("a@b.com")]).unwrap();
        let a = SubjectIdentifier::aliases(vec![email("a@b.com")]).unwrap();

        assert_eq!(ab, ba);
        assert_ne!(ab, a);
        assert_ne!(a, ab);
        assert_eq!(a, SubjectIdentifier::Single(email("a@b.com")));
        assert_ne!(ab, SubjectIdentifier::Single(email("a@b.com")));
    }

    #[test]
    fn serialization_revalidates_directly_built_values() {
        let bogus = NoAlias::Email {
            email: "not-an-email".to_owned(),
        };

        assert!(serde_json::to_value(&bogus).is_err());
        assert!(serde_json::to_value(SubjectIdentifier::Single(bogus)).is_err());
    }
}
