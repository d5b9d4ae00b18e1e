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

//! Closed string enumerations validated against fixed registries.

use serde::{Deserialize, Deserializer, Serializer};

use crate::{Error, Result};

/// A string-valued enumeration restricted to a fixed registry of wire values.
///
/// Implementors are plain Rust enums whose variants are listed in
/// [`ClosedEnum::REGISTRY`] together with their canonical wire strings. The
/// registry is a compile-time constant, so lookups need no synchronization.
///
/// Most families are declared with the [`closed_enum!`](crate::closed_enum!)
/// macro, which also wires up [`std::fmt::Display`], [`std::str::FromStr`]
/// and the `serde` string codec.
pub trait ClosedEnum: Sized + Copy + PartialEq + std::fmt::Debug + 'static {
    /// Human-readable name of the enumeration family, used in errors.
    const FAMILY: &'static str;

    /// Registry mapping each canonical wire value to its variant.
    const REGISTRY: &'static [(&'static str, Self)];

    /// Builds the error reported when `raw` is not a registry key.
    fn invalid_value(raw: &str) -> Error {
        Error::InvalidEnumValue(Self::FAMILY, raw.to_owned())
    }

    /// Finds the variant registered under `raw`.
    ///
    /// Matching is exact and case-sensitive.
    fn lookup(raw: &str) -> Option<Self> {
        Self::REGISTRY
            .iter()
            .find(|(name, _)| *name == raw)
            .map(|(_, variant)| *variant)
    }

    /// Decodes a wire string, failing if it is not registered.
    fn decode(raw: &str) -> Result<Self> {
        Self::lookup(raw).ok_or_else(|| bherror::Error::root(Self::invalid_value(raw)))
    }

    /// Encodes the variant into its wire string.
    ///
    /// The reverse lookup fails only for a variant missing from the registry.
    fn encode(&self) -> Result<&'static str> {
        Self::REGISTRY
            .iter()
            .find(|(_, variant)| variant == self)
            .map(|(name, _)| *name)
            .ok_or_else(|| bherror::Error::root(Self::invalid_value(&format!("{:?}", self))))
    }

    /// Iterates over every registered variant, in registry order.
    fn all() -> impl Iterator<Item = Self> {
        Self::REGISTRY.iter().map(|(_, variant)| *variant)
    }
}

/// Serializes a [`ClosedEnum`] as a bare JSON string.
///
/// Used by the `serde` implementations generated through
/// [`closed_enum!`](crate::closed_enum!).
pub fn serialize<E, S>(value: &E, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    E: ClosedEnum,
    S: Serializer,
{
    let raw = value.encode().map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(raw)
}

/// Deserializes a [`ClosedEnum`] from a JSON string, rejecting unregistered
/// values.
pub fn deserialize<'de, E, D>(deserializer: D) -> std::result::Result<E, D::Error>
where
    E: ClosedEnum,
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    E::decode(&raw).map_err(serde::de::Error::custom)
}

/// Declares a [`ClosedEnum`] family.
///
/// Each variant is bound to its canonical wire string. An optional
/// `invalid = <constructor>` after the family name replaces the
/// [`Error::InvalidEnumValue`] reported for unregistered values with another
/// single-`String` error variant. The macro generates the
/// enum itself, its registry, `as_str`, [`std::fmt::Display`],
/// [`std::str::FromStr`], the `serde` string codec and the
/// [`ReferenceKind`](crate::ReferenceKind) implementation, so the family can
/// be carried by reference inside a [`RefOrValue`](crate::RefOrValue).
///
/// ```
/// bh_gnap_core::closed_enum! {
///     /// Colors of a traffic light.
///     pub enum Light: "Light" {
///         /// Stop.
///         Red = "red",
///         /// Go.
///         Green = "green",
///     }
/// }
///
/// use bh_gnap_core::ClosedEnum;
///
/// assert_eq!(Light::decode("red").unwrap(), Light::Red);
/// assert!(Light::decode("amber").is_err());
/// assert_eq!(Light::Green.to_string(), "green");
/// ```
#[macro_export]
macro_rules! closed_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident : $family:literal $(, invalid = $invalid:path)? {
            $($(#[$vattr:meta])* $variant:ident = $wire:literal,)+
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vattr])* $variant,)+
        }

        impl $crate::ClosedEnum for $name {
            const FAMILY: &'static str = $family;
            const REGISTRY: &'static [(&'static str, Self)] = &[$(($wire, $name::$variant),)+];

            $(
                fn invalid_value(raw: &str) -> $crate::Error {
                    $invalid(raw.to_owned())
                }
            )?
        }

        impl $name {
            /// Returns the canonical wire value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::__private::bherror::Error<$crate::Error>;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::ClosedEnum>::decode(value)
            }
        }

        impl $crate::ReferenceKind for $name {
            fn from_reference(raw: &str) -> $crate::Result<Self> {
                <Self as $crate::ClosedEnum>::decode(raw)
            }

            fn to_reference(&self) -> $crate::Result<String> {
                <Self as $crate::ClosedEnum>::encode(self).map(str::to_owned)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::closed_enum::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::closed_enum::deserialize(deserializer)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::closed_enum! {
        /// Enumeration used only by the tests below.
        enum Mode: "Mode" {
            /// First.
            Redirect = "redirect",
            /// Second.
            UserCodeUri = "user_code_uri",
        }
    }

    crate::closed_enum! {
        /// Enumeration with its own error for unregistered values.
        enum Digest: "Digest", invalid = Error::InvalidHashMethod {
            /// First.
            Sha256 = "sha-256",
        }
    }

    #[test]
    fn custom_invalid_value_error() {
        assert_eq!(Digest::decode("sha-256").unwrap(), Digest::Sha256);

        let err = Digest::decode("md5").unwrap_err();
        assert_eq!(err.error, Error::InvalidHashMethod("md5".to_owned()));
    }

    #[test]
    fn decode_accepts_registered_values_only() {
        assert_eq!(Mode::decode("redirect").unwrap(), Mode::Redirect);
        assert_eq!(Mode::decode("user_code_uri").unwrap(), Mode::UserCodeUri);

        let err = Mode::decode("Redirect").unwrap_err();
        assert_eq!(
            err.error,
            Error::InvalidEnumValue("Mode", "Redirect".to_owned())
        );

        let err = Mode::decode("").unwrap_err();
        assert!(matches!(err.error, Error::InvalidEnumValue("Mode", _)));
    }

    #[test]
    fn encode_returns_the_registered_string() {
        for (wire, variant) in Mode::REGISTRY {
            assert_eq!(variant.encode().unwrap(), *wire);
            assert_eq!(variant.as_str(), *wire);
            assert_eq!(variant.to_string(), *wire);
        }
    }

    #[test]
    fn all_follows_registry_order() {
        let all: Vec<_> = Mode::all().collect();
        assert_eq!(all, vec![Mode::Redirect, Mode::UserCodeUri]);
    }

    #[test]
    fn serde_uses_bare_strings() {
        let json = serde_json::to_value(Mode::UserCodeUri).unwrap();
        assert_eq!(json, serde_json::json!("user_code_uri"));

        let mode: Mode = serde_json::from_value(json).unwrap();
        assert_eq!(mode, Mode::UserCodeUri);

        assert!(serde_json::from_value::<Mode>(serde_json::json!("app")).is_err());
        assert!(serde_json::from_value::<Mode>(serde_json::json!({"mode": "app"})).is_err());
    }

    #[test]
    fn from_str_matches_decode() {
        let mode: Mode = "redirect".parse().unwrap();
        assert_eq!(mode, Mode::Redirect);

        let err = "push".parse::<Mode>().unwrap_err();
        assert!(matches!(err.error, Error::InvalidEnumValue(_, ref raw) if raw == "push"));
    }
}
