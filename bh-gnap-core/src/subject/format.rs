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

use crate::closed_enum;

closed_enum! {
    /// Subject identifier formats, as listed in the *Subject Identifier
    /// Formats* registry of [RFC 9493].
    ///
    /// [RFC 9493]: https://www.rfc-editor.org/rfc/rfc9493
    pub enum Format: "subject identifier format" {
        /// An `acct` URI.
        Account = "account",
        /// An e-mail address.
        Email = "email",
        /// An issuer and subject pair.
        IssuerSubject = "iss_sub",
        /// An opaque string.
        Opaque = "opaque",
        /// An E.164 telephone number.
        PhoneNumber = "phone_number",
        /// A decentralized identifier URL.
        Did = "did",
        /// An arbitrary URI.
        Uri = "uri",
        /// A set of other identifiers for the same subject.
        Aliases = "aliases",
    }
}

/// Payload fields a subject identifier may carry, by wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Uri,
    Email,
    Issuer,
    Subject,
    Id,
    PhoneNumber,
    Url,
    Identifiers,
}

impl Field {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Field::Uri => "uri",
            Field::Email => "email",
            Field::Issuer => "iss",
            Field::Subject => "sub",
            Field::Id => "id",
            Field::PhoneNumber => "phone_number",
            Field::Url => "url",
            Field::Identifiers => "identifiers",
        }
    }
}

impl Format {
    /// Returns `true` for formats describing a single identifier, i.e. all but
    /// [`Format::Aliases`].
    pub fn is_single(&self) -> bool {
        !matches!(self, Format::Aliases)
    }

    /// The payload fields this format is made of.
    pub(crate) fn fields(&self) -> &'static [Field] {
        match self {
            Format::Account | Format::Uri => &[Field::Uri],
            Format::Email => &[Field::Email],
            Format::IssuerSubject => &[Field::Issuer, Field::Subject],
            Format::Opaque => &[Field::Id],
            Format::PhoneNumber => &[Field::PhoneNumber],
            Format::Did => &[Field::Url],
            Format::Aliases => &[Field::Identifiers],
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ClosedEnum as _, Error};

    use super::*;

    #[test]
    fn registry_contains_every_format() {
        let names: Vec<_> = Format::all().map(|format| format.as_str()).collect();

        assert_eq!(
            names,
            [
                "account",
                "email",
                "iss_sub",
                "opaque",
                "phone_number",
                "did",
                "uri",
                "aliases"
            ]
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = Format::decode("x509").unwrap_err();

        assert_eq!(
            err.error,
            Error::InvalidEnumValue("subject identifier format", "x509".to_owned())
        );
    }

    #[test]
    fn only_aliases_is_not_single() {
        let singles: Vec<_> = Format::all().filter(Format::is_single).collect();

        assert_eq!(singles.len(), 7);
        assert!(!singles.contains(&Format::Aliases));
    }
}
