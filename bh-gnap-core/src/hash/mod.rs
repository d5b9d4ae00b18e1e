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

//! Hash methods of the *Named Information Hash Algorithm Registry*, bound to
//! their digest implementations.
//!
//! Decoding an unknown hash method name fails loudly with
//! [`Error::InvalidHashMethod`](crate::Error::InvalidHashMethod), while
//! [`sum_by_name`] on an unknown name returns an empty digest; callers of the
//! latter must check for it.

mod hasher;
mod hashers;

use base64::{prelude::BASE64_URL_SAFE_NO_PAD, Engine as _};

pub use hasher::Hasher;
pub use hashers::{
    Blake2b256, Blake2b512, Blake2s256, Sha256, Sha384, Sha3_224, Sha3_384, Sha3_512, Sha512,
};

use crate::ClosedEnum as _;

crate::closed_enum! {
    /// A hash method name, as registered in the *IANA* [Named Information Hash
    /// Algorithm Registry].
    ///
    /// The default method is `sha-256`.
    ///
    /// [Named Information Hash Algorithm Registry]: https://www.iana.org/assignments/named-information/named-information.xhtml
    #[derive(Default)]
    pub enum HashMethod: "hash method", invalid = crate::Error::InvalidHashMethod {
        /// `sha-256`
        #[default]
        Sha256 = "sha-256",
        /// `sha-384`
        Sha384 = "sha-384",
        /// `sha-512`
        Sha512 = "sha-512",
        /// `sha3-224`
        Sha3_224 = "sha3-224",
        /// `sha3-384`
        Sha3_384 = "sha3-384",
        /// `sha3-512`
        Sha3_512 = "sha3-512",
        /// `blake2s-256`
        Blake2s256 = "blake2s-256",
        /// `blake2b-256`
        Blake2b256 = "blake2b-256",
        /// `blake2b-512`
        Blake2b512 = "blake2b-512",
    }
}

impl HashMethod {
    /// Returns the digest implementation bundled for the method.
    pub fn hasher(&self) -> &'static dyn Hasher {
        match self {
            HashMethod::Sha256 => &Sha256,
            HashMethod::Sha384 => &Sha384,
            HashMethod::Sha512 => &Sha512,
            HashMethod::Sha3_224 => &Sha3_224,
            HashMethod::Sha3_384 => &Sha3_384,
            HashMethod::Sha3_512 => &Sha3_512,
            HashMethod::Blake2s256 => &Blake2s256,
            HashMethod::Blake2b256 => &Blake2b256,
            HashMethod::Blake2b512 => &Blake2b512,
        }
    }

    /// Computes the digest of `data` with this method.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        self.hasher().digest(data)
    }

    /// Computes the digest of `data`, falling back to the default method
    /// (`sha-256`) when `method` is unset.
    pub fn sum(method: Option<HashMethod>, data: &[u8]) -> Vec<u8> {
        let method = method.unwrap_or_else(|| {
            tracing::debug!("hash method unset, using the default");
            HashMethod::default()
        });

        method.digest(data)
    }
}

/// Computes the digest of `data` with the method registered under `name`.
///
/// An empty `name` selects the default method. An unregistered `name` yields
/// an empty digest instead of an error.
pub fn sum_by_name(name: &str, data: &[u8]) -> Vec<u8> {
    if name.is_empty() {
        return HashMethod::sum(None, data);
    }

    match HashMethod::lookup(name) {
        Some(method) => method.digest(data),
        None => {
            tracing::warn!(name, "unregistered hash method, returning an empty digest");
            Vec::new()
        }
    }
}

/// Computes the interaction hash that binds the finish callback to the grant
/// request.
///
/// The hash base is the client nonce, the server nonce, the interaction
/// reference and the grant endpoint URI, joined with `\n`. The result is the
/// `base64url` encoding, without padding, of its digest.
pub fn interaction_hash(
    method: Option<HashMethod>,
    client_nonce: &str,
    server_nonce: &str,
    interact_ref: &str,
    grant_endpoint: &str,
) -> String {
    let base = [client_nonce, server_nonce, interact_ref, grant_endpoint].join("\n");

    BASE64_URL_SAFE_NO_PAD.encode(HashMethod::sum(method, base.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClosedEnum, Error};

    const DATA: &[u8] = b"gnap-core-protocol";

    #[test]
    fn sum_sha256_matches_fixed_digest() {
        assert_eq!(
            hex::encode(HashMethod::sum(Some(HashMethod::Sha256), DATA)),
            "3d7538088f4a26d9c8c516df15881ea16319a7eaced6972d24eafce60709d52f"
        );
    }

    #[test]
    fn sum_defaults_to_sha256() {
        for data in [&b""[..], DATA, b"hello world"] {
            assert_eq!(
                HashMethod::sum(None, data),
                HashMethod::sum(Some(HashMethod::Sha256), data)
            );
            assert_eq!(sum_by_name("", data), HashMethod::Sha256.digest(data));
        }
    }

    #[test]
    fn sum_by_name_uses_the_registry() {
        assert_eq!(
            hex::encode(sum_by_name("sha-512", b"hello world")),
            "309ecc489c12d6eb4cc40f50c902f2b4d0ed77ee511a7c7a9bcd3ca86d4cd86f989dd35bc5ff499670da34255b45b0cfd830e81f605dcf7dc5542e93ae9cd76f"
        );
    }

    #[test]
    fn sum_by_name_misses_silently() {
        assert!(sum_by_name("md5", DATA).is_empty());
        assert!(sum_by_name("SHA-256", DATA).is_empty());
    }

    #[test]
    fn decode_fails_loudly() {
        let err = HashMethod::decode("md5").unwrap_err();
        assert_eq!(err.error, Error::InvalidHashMethod("md5".to_owned()));

        let err = serde_json::from_value::<HashMethod>(serde_json::json!("md5")).unwrap_err();
        assert!(err.to_string().contains("md5"));

        let err = "sha-1".parse::<HashMethod>().unwrap_err();
        assert_eq!(err.error, Error::InvalidHashMethod("sha-1".to_owned()));
    }

    #[test]
    fn every_method_has_a_matching_hasher() {
        for method in HashMethod::all() {
            assert_eq!(method.hasher().method(), method);
            assert_eq!(method.encode().unwrap(), method.as_str());
            assert!(!method.digest(DATA).is_empty());
        }
    }

    #[test]
    fn serde_uses_registered_names() {
        let json = serde_json::to_value(HashMethod::Blake2b256).unwrap();
        assert_eq!(json, serde_json::json!("blake2b-256"));

        let method: HashMethod = serde_json::from_value(serde_json::json!("sha3-384")).unwrap();
        assert_eq!(method, HashMethod::Sha3_384);
    }

    #[test]
    fn interaction_hash_vectors() {
        let hash = interaction_hash(
            None,
            "VJLO6A4CAYLBXHTR0KRO",
            "MBDOFXG4Y5CVJCX821LH",
            "4IFWWIKYBC2PQ6U56NL1",
            "https://server.example.com/tx",
        );
        assert_eq!(hash, "jdHcrti02HLCwGU3qhUZ3wZXt8IjrV_BtE3oUyOuKNk");

        let hash = interaction_hash(
            Some(HashMethod::Sha3_512),
            "VJLO6A4CAYLBXHTR0KRO",
            "MBDOFXG4Y5CVJCX821LH",
            "4IFWWIKYBC2PQ6U56NL1",
            "https://server.example.com/tx",
        );
        assert_eq!(
            hash,
            "1431Hzg9CChH5xVdRr7p6U5DVLKtiAFWoyVaC5al9mi5zPca8h5VWXzqUNI9s7A6CDnegzvX7E7upnQauktu_A"
        );
    }
}
