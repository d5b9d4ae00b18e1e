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

//! Messages exchanged between a resource server and the authorization
//! server: discovery, token introspection and resource registration.

use bh_gnap_core::{closed_enum, OneOrMany, RefOrValue, Url};
use serde::{Deserialize, Serialize};

use crate::{
    access::Access,
    key::{Key, ProofMethod},
    token::TokenFlag,
};

closed_enum! {
    /// Format of an access token.
    pub enum TokenFormat: "token format" {
        /// Signed JSON Web Token.
        JwtSigned = "jwt-signed",
        /// Encrypted JSON Web Token.
        JwtEncrypted = "jwt-encrypted",
        /// Macaroon.
        Macaroon = "macaroon",
        /// Biscuit.
        Biscuit = "biscuit",
        /// Authorization capability.
        Zcap = "zcap",
    }
}

/// Discovery document the authorization server advertises to resource
/// servers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsDiscovery {
    /// URI token introspection requests are sent to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introspection_endpoint: Option<Url>,
    /// Token formats the authorization server can issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_formats_supported: Option<Vec<TokenFormat>>,
    /// URI resource sets are registered at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_registration_endpoint: Option<Url>,
    /// URI grant requests are sent to.
    pub grant_request_endpoint: Url,
    /// Supported key proofing methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_proofs_supported: Option<Vec<ProofMethod>>,
}

/// A resource server presented by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceServerObject {
    /// Key the resource server proves possession of.
    pub key: Key,
}

/// The resource server, by value or as an identifier assigned by the
/// authorization server.
pub type ResourceServer = RefOrValue<ResourceServerObject>;

/// Audience of an access token: one or more resource server identifiers.
pub type Audience = OneOrMany<String>;

/// Request of a resource server to introspect an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntrospectionRequest {
    /// The token value presented to the resource server.
    pub access_token: String,
    /// Proofing method the token was presented with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<ProofMethod>,
    /// The resource server making the request.
    pub resource_server: ResourceServer,
    /// Rights of access the token is expected to carry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<Vec<Access>>,
}

/// Result of a token introspection.
///
/// An inactive token carries no other information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntrospectionResponse {
    /// Whether the token is active.
    pub active: bool,
    /// Rights of access held by the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<Vec<Access>>,
    /// Key the token is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    /// Flags of the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<TokenFlag>>,
    /// Expiration time, in seconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issuance time, in seconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Time before which the token is not valid, in seconds since the Unix
    /// epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    /// Intended audience.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<Audience>,
    /// Subject of the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Issuer of the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<Url>,
    /// Identifier of the client instance the token was issued to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

impl IntrospectionResponse {
    /// Creates the response for an inactive token.
    pub fn inactive() -> Self {
        Self::default()
    }
}

/// Request of a resource server to register a set of resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Rights of access making up the resource set.
    pub access: Vec<Access>,
    /// The resource server making the request.
    pub resource_server: ResourceServer,
    /// Token formats the resource server accepts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_formats_supported: Option<Vec<TokenFormat>>,
    /// Whether the resource server introspects tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_introspection_supported: Option<bool>,
}

/// Response to a resource registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    /// Reference the client instance uses to request the resource set.
    pub resource_reference: String,
    /// Identifier assigned to the resource server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// URI token introspection requests are sent to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introspection_endpoint: Option<Url>,
}
