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

use crate::subject::Format;

/// Error type defining the possible failures of the GNAP codec layer.
///
/// All decoding is all-or-nothing: whenever one of these errors is returned,
/// no partially decoded object is handed back to the caller.
#[derive(strum_macros::Display, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string is not a member of the registry of the named enumeration
    /// family.
    #[strum(to_string = "\"{1}\" is not a registered {0} value")]
    InvalidEnumValue(&'static str, String),

    /// The value is neither a non-empty reference string nor an object passed
    /// by value.
    #[strum(to_string = "Value is neither a non-empty reference nor an object")]
    MalformedReference,

    /// The value has the expected JSON shape, but its content could not be
    /// decoded as the named type.
    #[strum(to_string = "Malformed {0}: {1}")]
    MalformedValue(&'static str, String),

    /// The value is neither a single item nor an array of items.
    #[strum(to_string = "Value is neither a single item nor an array of items")]
    MalformedCardinality,

    /// Two items of a labeled collection share the same label.
    #[strum(to_string = "Label \"{0}\" is used more than once")]
    DuplicateLabel(String),

    /// An item of a multi-item labeled collection has no label.
    #[strum(to_string = "Every item of a multi-item collection must be labeled")]
    MissingLabel,

    /// The subject identifier violates the rules of its format.
    #[strum(to_string = "Invalid `{0}` subject identifier: {1}")]
    InvalidSubjectIdentifier(Format, String),

    /// The URL is empty or cannot be parsed as an absolute URI.
    #[strum(to_string = "Invalid URL: \"{0}\"")]
    InvalidUrl(String),

    /// The hash method name is not registered.
    #[strum(to_string = "\"{0}\" is not a registered hash method")]
    InvalidHashMethod(String),
}

impl bherror::BhError for Error {}

/// Result type alias for the crate.
pub type Result<T> = bherror::Result<T, Error>;
