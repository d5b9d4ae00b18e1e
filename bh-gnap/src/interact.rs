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

//! Interaction between the resource owner and the authorization server.

use bh_gnap_core::{closed_enum, hash, HashMethod, RefOrValue, Url};
use bherror::traits::ForeignError as _;
use serde::{Deserialize, Serialize};

use crate::Seconds;

closed_enum! {
    /// Way the client instance can start an interaction.
    pub enum StartMode: "interaction start mode" {
        /// Redirect the end user to an arbitrary URI.
        Redirect = "redirect",
        /// Launch an application through a URI.
        App = "app",
        /// Display a short code the end user enters at a static URI.
        UserCode = "user_code",
        /// Display a short code together with the URI to enter it at.
        UserCodeUri = "user_code_uri",
    }
}

closed_enum! {
    /// Way the authorization server signals the end of an interaction.
    pub enum FinishMethod: "interaction finish method" {
        /// HTTP `POST` to the client instance's URI.
        Push = "push",
        /// Redirect of the end user's browser to the client instance's URI.
        Redirect = "redirect",
    }
}

/// A start mode sent as an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartObject {
    /// The start mode.
    pub mode: StartMode,
}

/// A start mode, either as the bare mode name or as an object.
pub type Start = RefOrValue<StartObject, StartMode>;

/// Interaction modes supported by the client instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRequest {
    /// Ways the client instance can start an interaction.
    pub start: Vec<Start>,
    /// How the client instance wants to be told the interaction finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish: Option<InteractionFinish>,
    /// Hints about the end user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<InteractionHints>,
}

impl InteractionRequest {
    /// Creates a new [`InteractionRequest`] for the given start modes.
    pub fn new(modes: impl IntoIterator<Item = StartMode>) -> Self {
        Self {
            start: modes.into_iter().map(RefOrValue::Ref).collect(),
            finish: None,
            hints: None,
        }
    }

    /// Returns the requested start modes, regardless of the form they were
    /// sent in.
    pub fn start_modes(&self) -> Vec<StartMode> {
        self.start
            .iter()
            .map(|start| match start {
                RefOrValue::Ref(mode) => *mode,
                RefOrValue::Value(object) => object.mode,
            })
            .collect()
    }
}

/// How the client instance is told the interaction finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionFinish {
    /// The finish method.
    pub method: FinishMethod,
    /// URI the authorization server sends the end user or the push to.
    pub uri: Url,
    /// Client nonce, bound into the interaction hash.
    pub nonce: String,
    /// Hash method of the interaction hash; `sha-256` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_method: Option<HashMethod>,
}

impl InteractionFinish {
    /// Computes the interaction hash the authorization server sends back at
    /// the end of the interaction.
    pub fn hash(&self, server_nonce: &str, interact_ref: &str, grant_endpoint: &Url) -> String {
        hash::interaction_hash(
            self.hash_method,
            &self.nonce,
            server_nonce,
            interact_ref,
            grant_endpoint.as_str(),
        )
    }
}

/// Hints about the end user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionHints {
    /// Preferred locales of the end user, in order of preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_locales: Option<Vec<String>>,
}

/// A user code together with the URI to enter it at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCodeUri {
    /// The user code.
    pub code: String,
    /// URI the end user enters the code at.
    pub uri: Url,
}

/// Interaction modes granted by the authorization server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionResponse {
    /// URI to redirect the end user to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Url>,
    /// URI to launch the application with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<Url>,
    /// Code to display to the end user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_code: Option<String>,
    /// Code to display, with the URI to enter it at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_code_uri: Option<UserCodeUri>,
    /// Server nonce, bound into the interaction hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish: Option<String>,
    /// Lifetime of the interaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<Seconds>,
}

/// Parameters passed to the client instance when the interaction finishes.
///
/// Sent as the query of the redirect URI, or as the JSON body of the push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionCallback {
    /// The interaction hash.
    pub hash: String,
    /// Interaction reference, presented when continuing the grant.
    pub interact_ref: String,
}

impl InteractionCallback {
    /// Creates the callback for a finished interaction, computing its hash.
    pub fn new(
        finish: &InteractionFinish,
        server_nonce: &str,
        interact_ref: impl Into<String>,
        grant_endpoint: &Url,
    ) -> Self {
        let interact_ref = interact_ref.into();
        Self {
            hash: finish.hash(server_nonce, &interact_ref, grant_endpoint),
            interact_ref,
        }
    }

    /// Encodes the callback as an `application/x-www-form-urlencoded` query.
    pub fn to_query(&self) -> bh_gnap_core::Result<String> {
        serde_urlencoded::to_string(self).match_foreign_err(|err| {
            bh_gnap_core::Error::MalformedValue("InteractionCallback", err.to_string())
        })
    }

    /// Decodes the callback from an `application/x-www-form-urlencoded`
    /// query, without the leading `?`.
    pub fn from_query(query: &str) -> bh_gnap_core::Result<Self> {
        serde_urlencoded::from_str(query).match_foreign_err(|err| {
            bh_gnap_core::Error::MalformedValue("InteractionCallback", err.to_string())
        })
    }

    /// Checks the hash against the one computed from the request and the
    /// interaction response.
    pub fn verify(&self, finish: &InteractionFinish, server_nonce: &str, grant_endpoint: &Url) -> bool {
        let expected = finish.hash(server_nonce, &self.interact_ref, grant_endpoint);
        if expected != self.hash {
            tracing::debug!(interact_ref = %self.interact_ref, "interaction hash mismatch");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use bh_gnap_core::Error;
    use serde_json::json;

    use super::*;

    fn finish(hash_method: Option<HashMethod>) -> InteractionFinish {
        InteractionFinish {
            method: FinishMethod::Redirect,
            uri: "https://client.example.net/return/123455".parse().unwrap(),
            nonce: "VJLO6A4CAYLBXHTR0KRO".to_owned(),
            hash_method,
        }
    }

    fn grant_endpoint() -> Url {
        "https://server.example.com/tx".parse().unwrap()
    }

    #[test]
    fn decode_interaction_request() {
        let request: InteractionRequest = serde_json::from_value(json!({
            "start": ["redirect", {"mode": "user_code"}],
            "finish": {
                "method": "redirect",
                "uri": "https://client.example.net/return/123455",
                "nonce": "LKLTI25DK82FX4T4QFZC"
            },
            "hints": {"ui_locales": ["en-US", "fr-CA"]}
        }))
        .unwrap();

        assert_eq!(
            request.start_modes(),
            vec![StartMode::Redirect, StartMode::UserCode]
        );
        assert!(request.start[1].value().is_some());

        let finish = request.finish.unwrap();
        assert_eq!(finish.method, FinishMethod::Redirect);
        assert_eq!(finish.hash_method, None);
        assert_eq!(request.hints.unwrap().ui_locales.unwrap(), ["en-US", "fr-CA"]);
    }

    #[test]
    fn decode_unregistered_start_mode_fails() {
        let err = serde_json::from_value::<InteractionRequest>(json!({"start": ["telepathy"]}))
            .unwrap_err();
        assert!(err.to_string().contains("telepathy"));

        let err = Start::decode(&json!("telepathy")).unwrap_err();
        assert_eq!(
            err.error,
            Error::InvalidEnumValue("interaction start mode", "telepathy".to_owned())
        );
    }

    #[test]
    fn encode_request_with_start_modes() {
        let request = InteractionRequest::new([StartMode::Redirect, StartMode::App]);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"start": ["redirect", "app"]})
        );
    }

    #[test]
    fn decode_interaction_response() {
        let response: InteractionResponse = serde_json::from_value(json!({
            "redirect": "https://server.example.com/interact/4CF492MLVMSW9MKMXKHQ",
            "user_code_uri": {"code": "A1BC3DFF", "uri": "https://srv.ex/device"},
            "finish": "MBDOFXG4Y5CVJCX821LH",
            "expires_in": 600
        }))
        .unwrap();

        assert!(response.app.is_none());
        assert_eq!(response.user_code_uri.unwrap().code, "A1BC3DFF");
        assert_eq!(response.finish.as_deref(), Some("MBDOFXG4Y5CVJCX821LH"));
        assert_eq!(response.expires_in, Some(Seconds::new(600)));
    }

    #[test]
    fn callback_hash_defaults_to_sha256() {
        let callback = InteractionCallback::new(
            &finish(None),
            "MBDOFXG4Y5CVJCX821LH",
            "4IFWWIKYBC2PQ6U56NL1",
            &grant_endpoint(),
        );

        assert_eq!(callback.hash, "jdHcrti02HLCwGU3qhUZ3wZXt8IjrV_BtE3oUyOuKNk");
        assert_eq!(
            callback.hash,
            InteractionCallback::new(
                &finish(Some(HashMethod::Sha256)),
                "MBDOFXG4Y5CVJCX821LH",
                "4IFWWIKYBC2PQ6U56NL1",
                &grant_endpoint(),
            )
            .hash
        );
    }

    #[test]
    fn callback_verification() {
        let finish = finish(Some(HashMethod::Sha3_512));
        let callback = InteractionCallback::new(
            &finish,
            "MBDOFXG4Y5CVJCX821LH",
            "4IFWWIKYBC2PQ6U56NL1",
            &grant_endpoint(),
        );

        assert!(callback.verify(&finish, "MBDOFXG4Y5CVJCX821LH", &grant_endpoint()));
        assert!(!callback.verify(&finish, "some-other-nonce", &grant_endpoint()));
    }

    #[test]
    fn callback_query_string() {
        let callback = InteractionCallback {
            hash: "x-gguKWTj8rQf7d7i3w3UhzvuJ5bpOlKyAlVpLxBffY".to_owned(),
            interact_ref: "4IFWWIKYBC2PQ6U56NL1".to_owned(),
        };

        let query = callback.to_query().unwrap();
        assert_eq!(
            query,
            "hash=x-gguKWTj8rQf7d7i3w3UhzvuJ5bpOlKyAlVpLxBffY&interact_ref=4IFWWIKYBC2PQ6U56NL1"
        );
        assert_eq!(InteractionCallback::from_query(&query).unwrap(), callback);
    }

    #[test]
    fn callback_query_without_reference_fails() {
        let err = InteractionCallback::from_query("hash=abc").unwrap_err();

        assert_matches!(err.error, Error::MalformedValue("InteractionCallback", _));
    }
}
