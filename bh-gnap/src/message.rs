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

use bh_gnap_core::{Error, Result};
use bherror::traits::ForeignError as _;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// JSON encoding and decoding of a whole protocol message.
///
/// Failures are reported as [`Error::MalformedValue`] naming the message,
/// with the underlying cause (e.g. an unregistered enumeration value deep
/// inside the message) as its description.
///
/// The kind of a nested failure is not kept: an unregistered start mode
/// inside a grant request yields `MalformedValue("GrantRequest", ..)`, not
/// [`Error::InvalidEnumValue`]. To match on the precise kind, decode the
/// field itself with the primitive decoders of [`bh_gnap_core`], such as
/// [`RefOrValue::decode`](bh_gnap_core::RefOrValue::decode) or
/// [`ClosedEnum::decode`](bh_gnap_core::ClosedEnum::decode).
pub trait Message: Serialize + DeserializeOwned {
    /// Name of the message, used in errors.
    const NAME: &'static str;

    /// Decodes the message from a JSON value.
    fn from_json(value: &Value) -> Result<Self> {
        Self::deserialize(value)
            .match_foreign_err(|err| Error::MalformedValue(Self::NAME, err.to_string()))
    }

    /// Decodes the message from a JSON string.
    fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .match_foreign_err(|err| Error::MalformedValue(Self::NAME, err.to_string()))
    }

    /// Encodes the message into a JSON value.
    fn to_json(&self) -> Result<Value> {
        serde_json::to_value(self)
            .match_foreign_err(|err| Error::MalformedValue(Self::NAME, err.to_string()))
    }

    /// Encodes the message into a JSON string.
    fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .match_foreign_err(|err| Error::MalformedValue(Self::NAME, err.to_string()))
    }
}

/// Implements [`Message`] for the listed types, named after the type.
macro_rules! impl_message {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $crate::Message for $name {
                const NAME: &'static str = stringify!($name);
            }
        )+
    };
}

pub(crate) use impl_message;

/// Fails with [`Error::MalformedValue`] for the named message.
pub(crate) fn invalid<T>(name: &'static str, reason: impl Into<String>) -> Result<T> {
    Err(bherror::Error::root(Error::MalformedValue(name, reason.into())))
}
