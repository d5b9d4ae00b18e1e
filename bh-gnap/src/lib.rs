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

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Protocol messages of GNAP, the Grant Negotiation and Authorization
//! Protocol ([RFC 9635]), together with the resource server messages of
//! [RFC 9767].
//!
//! Messages are plain data types composed from the codec primitives of
//! [`bh_gnap_core`], re-exported here. Every top-level message implements
//! [`Message`], which decodes and encodes it as JSON and reports failures as
//! a typed [`Error`].
//!
//! This crate does not send or receive messages, sign or verify them, or
//! keep track of the state of a grant.
//!
//! # Example
//!
//! ```
//! use bh_gnap::{GrantRequest, Message as _, OneOrMany, ProofMethod, StartMode};
//! use serde_json::json;
//!
//! let request = GrantRequest::from_json(&json!({
//!     "access_token": {"access": ["dolphin-metadata"]},
//!     "client": {
//!         "key": {
//!             "proof": "httpsig",
//!             "jwk": {"kty": "OKP", "crv": "Ed25519", "x": "11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo"}
//!         }
//!     },
//!     "interact": {"start": ["redirect"]}
//! }))
//! .unwrap();
//!
//! assert!(matches!(request.access_token, Some(OneOrMany::One(_))));
//!
//! let key = request.client.value().unwrap().key.value().unwrap();
//! assert_eq!(key.proof_method(), ProofMethod::HttpSig);
//! assert_eq!(
//!     request.interact.unwrap().start_modes(),
//!     vec![StartMode::Redirect]
//! );
//! ```
//!
//! [RFC 9635]: https://www.rfc-editor.org/rfc/rfc9635
//! [RFC 9767]: https://www.rfc-editor.org/rfc/rfc9767

pub mod access;
pub mod client;
pub mod discovery;
mod duration;
pub mod error;
pub mod grant;
pub mod interact;
pub mod key;
mod message;
pub mod rs;
pub mod subject;
pub mod token;

pub use bh_gnap_core::{
    hash,
    subject::{Aliases, Format as SubjectFormat, NoAlias, SubjectIdentifier},
    ClosedEnum, Error, HashMethod, Labeled, OneOrMany, RefOrValue, Reference, Result, Url,
};

pub use access::{Access, AccessRight};
pub use client::{Client, ClientDisplay, ClientInstance};
pub use discovery::Discovery;
pub use duration::Seconds;
pub use error::{ErrorCode, GnapError, GnapErrorObject};
pub use grant::{ContinueRequest, ContinueResponse, GrantRequest, GrantResponse};
pub use interact::{
    FinishMethod, InteractionCallback, InteractionFinish, InteractionHints, InteractionRequest,
    InteractionResponse, Start, StartMode, StartObject, UserCodeUri,
};
pub use key::{DigestAlg, HttpSigAlg, Key, KeyFormat, KeyObject, KeyProof, Proof, ProofMethod};
pub use message::Message;
pub use rs::{
    Audience, IntrospectionRequest, IntrospectionResponse, RegistrationRequest,
    RegistrationResponse, ResourceServer, ResourceServerObject, RsDiscovery, TokenFormat,
};
pub use subject::{Assertion, AssertionFormat, SubjectRequest, SubjectResponse, User, UserInfo};
pub use token::{
    AccessTokenRequest, AccessTokenResponse, ContinueToken, TokenFlag, TokenRequest,
    TokenResponse,
};

/// A JSON object.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

message::impl_message!(
    GrantRequest,
    GrantResponse,
    ContinueRequest,
    ContinueResponse,
    InteractionCallback,
    Discovery,
    RsDiscovery,
    IntrospectionRequest,
    IntrospectionResponse,
    RegistrationRequest,
    RegistrationResponse,
    SubjectResponse,
);
