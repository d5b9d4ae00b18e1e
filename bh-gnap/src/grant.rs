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

//! Grant requests, their continuation, and the authorization server's
//! responses.

use bh_gnap_core::{OneOrMany, Url};
use serde::{Deserialize, Serialize};

use crate::{
    client::Client,
    error::GnapError,
    interact::{InteractionRequest, InteractionResponse},
    subject::{SubjectRequest, SubjectResponse, User},
    token::{AccessTokenRequest, AccessTokenResponse, ContinueToken},
    Seconds,
};

/// Request sent by the client instance to start a grant.
///
/// Multiple access token requests must be uniquely labeled; this is checked
/// on decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantRequest {
    /// Access tokens requested.
    #[serde(
        default,
        deserialize_with = "OneOrMany::deserialize_labeled",
        skip_serializing_if = "Option::is_none"
    )]
    pub access_token: Option<AccessTokenRequest>,
    /// Subject information requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<SubjectRequest>,
    /// The client instance making the request.
    pub client: Client,
    /// The end user, as known to the client instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Interaction modes supported by the client instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interact: Option<InteractionRequest>,
}

impl GrantRequest {
    /// Creates a new [`GrantRequest`] from the given client instance.
    pub fn new(client: impl Into<Client>) -> Self {
        Self {
            access_token: None,
            subject: None,
            client: client.into(),
            user: None,
            interact: None,
        }
    }

    /// Checks the labels of the requested access tokens.
    pub fn validate(&self) -> bh_gnap_core::Result<()> {
        match &self.access_token {
            Some(tokens) => tokens.validate_labels(),
            None => Ok(()),
        }
    }
}

/// Information the client instance needs to continue the grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinueResponse {
    /// URI to continue the grant at.
    pub uri: Url,
    /// Time to wait before continuing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait: Option<Seconds>,
    /// Token to present when continuing.
    pub access_token: ContinueToken,
}

/// Response of the authorization server to a grant request or its
/// continuation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrantResponse {
    /// How to continue the grant.
    #[serde(rename = "continue", skip_serializing_if = "Option::is_none")]
    pub continue_: Option<ContinueResponse>,
    /// Issued access tokens.
    #[serde(
        default,
        deserialize_with = "OneOrMany::deserialize_labeled",
        skip_serializing_if = "Option::is_none"
    )]
    pub access_token: Option<AccessTokenResponse>,
    /// Granted interaction modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interact: Option<InteractionResponse>,
    /// Subject information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<SubjectResponse>,
    /// Identifier assigned to the client instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Error that ended the grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GnapError>,
}

impl GrantResponse {
    /// Creates a new [`GrantResponse`] carrying only an error.
    pub fn from_error(error: impl Into<GnapError>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Checks the labels of the issued access tokens.
    pub fn validate(&self) -> bh_gnap_core::Result<()> {
        match &self.access_token {
            Some(tokens) => tokens.validate_labels(),
            None => Ok(()),
        }
    }
}

/// Request sent by the client instance to continue a grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinueRequest {
    /// Interaction reference received when the interaction finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interact_ref: Option<String>,
}
