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

//! Information about the subject (usually the end user) of a grant.

use bh_gnap_core::{
    closed_enum,
    subject::{Format, SubjectIdentifier},
    RefOrValue,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

closed_enum! {
    /// Format of an identity assertion.
    pub enum AssertionFormat: "assertion format" {
        /// OpenID Connect ID Token.
        IdToken = "id_token",
        /// SAML 2 assertion.
        Saml2 = "saml2",
    }
}

/// An identity assertion about the subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    /// Format of the assertion.
    pub format: AssertionFormat,
    /// The assertion, in the encoding of its format.
    pub value: String,
}

/// Subject information requested by the client instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectRequest {
    /// Acceptable subject identifier formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_id_formats: Option<Vec<Format>>,
    /// Acceptable assertion formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion_formats: Option<Vec<AssertionFormat>>,
    /// Identifiers of the subject the client instance expects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_ids: Option<Vec<SubjectIdentifier>>,
}

/// Subject information returned by the authorization server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectResponse {
    /// Identifiers of the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_ids: Option<Vec<SubjectIdentifier>>,
    /// Identity assertions about the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertions: Option<Vec<Assertion>>,
    /// Time the subject information was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Information about the end user, presented by the client instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Identifiers of the end user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_ids: Option<Vec<SubjectIdentifier>>,
    /// Identity assertions about the end user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertions: Option<Vec<Assertion>>,
}

/// The end user, by value or as a reference assigned by the authorization
/// server.
pub type User = RefOrValue<UserInfo>;
