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

//! Codec primitives of the GNAP ([RFC 9635]) protocol object model.
//!
//! GNAP messages are JSON documents built out of a handful of recurring
//! shapes. This crate implements those shapes once, with strict validation,
//! so that the message types built on top of them are plain compositions:
//!
//! - [`ClosedEnum`] and the [`closed_enum!`] macro: string enumerations
//!   restricted to a fixed registry of values;
//! - [`RefOrValue`]: an object sent either in full or as a reference string;
//! - [`OneOrMany`]: a field holding a single item or an array of items, with
//!   the label rules of multi-item token requests and responses;
//! - [`subject`]: subject identifiers of [RFC 9493] and their per-format
//!   grammar checks, including the `aliases` format;
//! - [`hash`]: the hash method registry and its default-selection policy;
//! - [`Url`]: absolute URIs carried in messages.
//!
//! Every registry is a compile-time constant and every value is immutable
//! once built, so all types can be shared freely across threads. Decoding is
//! all-or-nothing: on failure, a typed [`Error`] is returned and no partial
//! object is produced.
//!
//! # Example
//!
//! ```
//! use bh_gnap_core::{
//!     subject::{Format, SubjectIdentifier},
//!     Error, OneOrMany, RefOrValue,
//! };
//! use serde_json::json;
//!
//! let id: SubjectIdentifier = serde_json::from_value(json!({
//!     "format": "aliases",
//!     "identifiers": [
//!         {"format": "email", "email": "user@example.com"},
//!         {"format": "phone_number", "phone_number": "+12065550100"}
//!     ]
//! }))
//! .unwrap();
//! assert_eq!(id.format(), Format::Aliases);
//! assert_eq!(id.identifiers().len(), 2);
//!
//! let err = RefOrValue::<serde_json::Map<String, serde_json::Value>>::decode(&json!(""))
//!     .unwrap_err();
//! assert_eq!(err.error, Error::MalformedReference);
//!
//! let many = OneOrMany::<String>::decode(&json!(["a"])).unwrap();
//! assert!(many.is_many());
//! ```
//!
//! [RFC 9635]: https://www.rfc-editor.org/rfc/rfc9635
//! [RFC 9493]: https://www.rfc-editor.org/rfc/rfc9493

pub mod closed_enum;
mod error;
pub mod hash;
mod one_or_many;
mod ref_or_value;
pub mod subject;
mod url;
mod utils;

pub use closed_enum::ClosedEnum;
pub use error::{Error, Result};
pub use hash::{HashMethod, Hasher};
pub use one_or_many::{Labeled, OneOrMany};
pub use ref_or_value::{RefOrValue, Reference, ReferenceKind};
pub use url::Url;

pub use iref::{Uri, UriBuf};

#[doc(hidden)]
pub mod __private {
    pub use bherror;
    pub use serde;
}
