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

//! Rights of access requested for, and granted to, access tokens.

use bh_gnap_core::RefOrValue;
use serde::{Deserialize, Serialize};

use crate::JsonObject;

/// A single right of access, described by value.
///
/// Only [`kind`](Self::kind) is mandatory. Fields specific to the API
/// identified by the type are kept in [`extra`](Self::extra).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessRight {
    /// Type of the resource or API being accessed.
    #[serde(rename = "type")]
    pub kind: String,
    /// Actions to be taken at the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    /// Locations of the resource server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    /// Kinds of data available to the client instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatypes: Option<Vec<String>>,
    /// Identifier of a specific resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Privileges held by the client instance at the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privileges: Option<Vec<String>>,
    /// API-specific fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl AccessRight {
    /// Creates a new [`AccessRight`] of the given type.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            actions: None,
            locations: None,
            datatypes: None,
            identifier: None,
            privileges: None,
            extra: JsonObject::new(),
        }
    }
}

/// A right of access, by value or as a reference string agreed upon with
/// the authorization server.
pub type Access = RefOrValue<AccessRight>;
