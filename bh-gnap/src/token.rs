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

//! Access tokens: how they are requested, and how they are issued.

use bh_gnap_core::{closed_enum, Labeled, OneOrMany, Url};
use serde::{Deserialize, Serialize, Serializer};

use crate::{access::Access, key::Key, message::invalid, Seconds};

closed_enum! {
    /// Flag describing a property of an access token.
    pub enum TokenFlag: "token flag" {
        /// The token is not bound to a key.
        Bearer = "bearer",
        /// The token survives the rotation of the client's key.
        Durable = "durable",
    }
}

/// Request for a single access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRequest {
    /// Rights of access requested for the token.
    pub access: Vec<Access>,
    /// Label identifying the token in a multi-token request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Requested token flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<TokenFlag>>,
}

impl TokenRequest {
    /// Creates a new unlabeled [`TokenRequest`].
    pub fn new(access: Vec<Access>) -> Self {
        Self {
            access,
            label: None,
            flags: None,
        }
    }

    /// Sets the label of the request.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Labeled for TokenRequest {
    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// One or more access token requests.
///
/// In the array form, every request is labeled with a unique label.
pub type AccessTokenRequest = OneOrMany<TokenRequest>;

/// An issued access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The token value.
    pub value: String,
    /// Label of the corresponding request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Management URI of the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage: Option<Url>,
    /// Rights of access granted to the token.
    pub access: Vec<Access>,
    /// Lifetime of the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<Seconds>,
    /// Key the token is bound to, if not the client instance's key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    /// Flags of the issued token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<TokenFlag>>,
}

impl TokenResponse {
    /// Returns `true` if the token is not bound to a key.
    pub fn is_bearer(&self) -> bool {
        has_flag(&self.flags, TokenFlag::Bearer)
    }

    /// Returns `true` if the token survives key rotation.
    pub fn is_durable(&self) -> bool {
        has_flag(&self.flags, TokenFlag::Durable)
    }
}

impl Labeled for TokenResponse {
    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// One or more issued access tokens.
///
/// In the array form, every token is labeled with a unique label.
pub type AccessTokenResponse = OneOrMany<TokenResponse>;

/// Access token used to continue a grant request.
///
/// A continuation token is always bound to the client instance's key, so
/// it never carries the [`TokenFlag::Bearer`] flag. This is checked both when
/// decoding and when encoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ContinueTokenUnverified")]
pub struct ContinueToken {
    /// The token value.
    pub value: String,
    /// Management URI of the token.
    pub manage: Option<Url>,
    /// Lifetime of the token.
    pub expires_in: Option<Seconds>,
    /// Flags of the token.
    pub flags: Option<Vec<TokenFlag>>,
}

impl ContinueToken {
    /// Creates a new [`ContinueToken`] with the given value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            manage: None,
            expires_in: None,
            flags: None,
        }
    }

    /// Checks that the token is not flagged as a bearer token.
    pub fn validate(&self) -> bh_gnap_core::Result<()> {
        if has_flag(&self.flags, TokenFlag::Bearer) {
            return invalid("ContinueToken", "continuation token must not be a bearer token");
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct ContinueTokenUnverified {
    value: String,
    manage: Option<Url>,
    expires_in: Option<Seconds>,
    flags: Option<Vec<TokenFlag>>,
}

impl TryFrom<ContinueTokenUnverified> for ContinueToken {
    type Error = bherror::Error<bh_gnap_core::Error>;

    fn try_from(value: ContinueTokenUnverified) -> bh_gnap_core::Result<Self> {
        let token = ContinueToken {
            value: value.value,
            manage: value.manage,
            expires_in: value.expires_in,
            flags: value.flags,
        };
        token.validate()?;
        Ok(token)
    }
}

#[derive(Serialize)]
struct ContinueTokenWire<'a> {
    value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    manage: Option<&'a Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_in: Option<Seconds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flags: Option<&'a [TokenFlag]>,
}

impl Serialize for ContinueToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.validate().map_err(serde::ser::Error::custom)?;

        ContinueTokenWire {
            value: &self.value,
            manage: self.manage.as_ref(),
            expires_in: self.expires_in,
            flags: self.flags.as_deref(),
        }
        .serialize(serializer)
    }
}

fn has_flag(flags: &Option<Vec<TokenFlag>>, flag: TokenFlag) -> bool {
    flags.as_ref().is_some_and(|flags| flags.contains(&flag))
}
