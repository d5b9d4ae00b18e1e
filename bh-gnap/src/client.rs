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

//! Identification of the client instance making a request.

use bh_gnap_core::{RefOrValue, Url};
use serde::{Deserialize, Serialize};

use crate::key::Key;

/// Information about the client software, meant to be shown to the resource
/// owner during interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDisplay {
    /// Display name of the client software.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Home page of the client software.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<Url>,
    /// Logo of the client software.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<Url>,
}

/// A client instance presented by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientInstance {
    /// Key the client instance proves possession of.
    pub key: Key,
    /// Identifier of the client software, shared between its instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    /// Display information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<ClientDisplay>,
}

impl ClientInstance {
    /// Creates a new [`ClientInstance`] identified only by its key.
    pub fn new(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            class_id: None,
            display: None,
        }
    }
}

/// The client instance, by value or as an instance identifier assigned by
/// the authorization server.
pub type Client = RefOrValue<ClientInstance>;
