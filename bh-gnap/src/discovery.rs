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

//! Capabilities the authorization server advertises to client instances.

use bh_gnap_core::{subject::Format, Url};
use serde::{Deserialize, Serialize};

use crate::{
    interact::{FinishMethod, StartMode},
    key::ProofMethod,
    subject::AssertionFormat,
};

/// Discovery document of the authorization server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discovery {
    /// URI grant requests are sent to.
    pub grant_request_endpoint: Url,
    /// Supported interaction start modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction_start_modes_supported: Option<Vec<StartMode>>,
    /// Supported interaction finish methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction_finish_methods_supported: Option<Vec<FinishMethod>>,
    /// Supported key proofing methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_proofs_supported: Option<Vec<ProofMethod>>,
    /// Supported subject identifier formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_id_formats_supported: Option<Vec<Format>>,
    /// Supported assertion formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion_formats_supported: Option<Vec<AssertionFormat>>,
    /// Whether access token key rotation is supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_rotation_supported: Option<bool>,
}

impl Discovery {
    /// Creates a new [`Discovery`] document advertising only the grant
    /// endpoint.
    pub fn new(grant_request_endpoint: Url) -> Self {
        Self {
            grant_request_endpoint,
            interaction_start_modes_supported: None,
            interaction_finish_methods_supported: None,
            key_proofs_supported: None,
            sub_id_formats_supported: None,
            assertion_formats_supported: None,
            key_rotation_supported: None,
        }
    }

    /// Returns `true` if the start mode is advertised.
    pub fn supports_start_mode(&self, mode: StartMode) -> bool {
        advertises(&self.interaction_start_modes_supported, mode)
    }

    /// Returns `true` if the finish method is advertised.
    pub fn supports_finish_method(&self, method: FinishMethod) -> bool {
        advertises(&self.interaction_finish_methods_supported, method)
    }

    /// Returns `true` if the proofing method is advertised.
    pub fn supports_proof(&self, method: ProofMethod) -> bool {
        advertises(&self.key_proofs_supported, method)
    }
}

fn advertises<T: PartialEq>(supported: &Option<Vec<T>>, item: T) -> bool {
    supported.as_ref().is_some_and(|supported| supported.contains(&item))
}
