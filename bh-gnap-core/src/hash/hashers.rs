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

//! [`Hasher`] implementations backing the hash method registry.
//!
//! SHA-2 and SHA-3 come from `openssl`, BLAKE2 from the RustCrypto `blake2`
//! crate.

use blake2::Digest as _;
use openssl::hash::MessageDigest;

use super::{HashMethod, Hasher};

/// A [`Hasher`] implementation for the `SHA-256` hash function.
#[derive(Debug, Default, Copy, Clone)]
pub struct Sha256;

impl Hasher for Sha256 {
    fn method(&self) -> HashMethod {
        HashMethod::Sha256
    }

    fn digest(&self, input: &[u8]) -> Vec<u8> {
        openssl::sha::sha256(input).to_vec()
    }
}

/// A [`Hasher`] implementation for the `SHA-384` hash function.
#[derive(Debug, Default, Copy, Clone)]
pub struct Sha384;

impl Hasher for Sha384 {
    fn method(&self) -> HashMethod {
        HashMethod::Sha384
    }

    fn digest(&self, input: &[u8]) -> Vec<u8> {
        openssl::sha::sha384(input).to_vec()
    }
}

/// A [`Hasher`] implementation for the `SHA-512` hash function.
#[derive(Debug, Default, Copy, Clone)]
pub struct Sha512;

impl Hasher for Sha512 {
    fn method(&self) -> HashMethod {
        HashMethod::Sha512
    }

    fn digest(&self, input: &[u8]) -> Vec<u8> {
        openssl::sha::sha512(input).to_vec()
    }
}

/// A [`Hasher`] implementation for the `SHA3-224` hash function.
#[derive(Debug, Default, Copy, Clone)]
pub struct Sha3_224;

impl Hasher for Sha3_224 {
    fn method(&self) -> HashMethod {
        HashMethod::Sha3_224
    }

    fn digest(&self, input: &[u8]) -> Vec<u8> {
        openssl_digest(MessageDigest::sha3_224(), input)
    }
}

/// A [`Hasher`] implementation for the `SHA3-384` hash function.
#[derive(Debug, Default, Copy, Clone)]
pub struct Sha3_384;

impl Hasher for Sha3_384 {
    fn method(&self) -> HashMethod {
        HashMethod::Sha3_384
    }

    fn digest(&self, input: &[u8]) -> Vec<u8> {
        openssl_digest(MessageDigest::sha3_384(), input)
    }
}

/// A [`Hasher`] implementation for the `SHA3-512` hash function.
#[derive(Debug, Default, Copy, Clone)]
pub struct Sha3_512;

impl Hasher for Sha3_512 {
    fn method(&self) -> HashMethod {
        HashMethod::Sha3_512
    }

    fn digest(&self, input: &[u8]) -> Vec<u8> {
        openssl_digest(MessageDigest::sha3_512(), input)
    }
}

/// A [`Hasher`] implementation for the `BLAKE2s-256` hash function.
#[derive(Debug, Default, Copy, Clone)]
pub struct Blake2s256;

impl Hasher for Blake2s256 {
    fn method(&self) -> HashMethod {
        HashMethod::Blake2s256
    }

    fn digest(&self, input: &[u8]) -> Vec<u8> {
        blake2::Blake2s256::digest(input).to_vec()
    }
}

/// A [`Hasher`] implementation for the `BLAKE2b-256` hash function.
#[derive(Debug, Default, Copy, Clone)]
pub struct Blake2b256;

impl Hasher for Blake2b256 {
    fn method(&self) -> HashMethod {
        HashMethod::Blake2b256
    }

    fn digest(&self, input: &[u8]) -> Vec<u8> {
        blake2::Blake2b::<blake2::digest::consts::U32>::digest(input).to_vec()
    }
}

/// A [`Hasher`] implementation for the `BLAKE2b-512` hash function.
#[derive(Debug, Default, Copy, Clone)]
pub struct Blake2b512;

impl Hasher for Blake2b512 {
    fn method(&self) -> HashMethod {
        HashMethod::Blake2b512
    }

    fn digest(&self, input: &[u8]) -> Vec<u8> {
        blake2::Blake2b512::digest(input).to_vec()
    }
}

/// Digest through the `EVP` interface of `openssl`, which is fallible; a
/// failure yields an empty digest, like a registry miss.
fn openssl_digest(digest: MessageDigest, input: &[u8]) -> Vec<u8> {
    match openssl::hash::hash(digest, input) {
        Ok(bytes) => bytes.to_vec(),
        Err(error) => {
            tracing::error!(%error, "openssl digest failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = b"gnap-core-protocol";

    fn check(hasher: &dyn Hasher, expected: &str) {
        assert_eq!(hex::encode(hasher.digest(INPUT)), expected, "{}", hasher.method());
    }

    #[test]
    fn sha2_test_vectors() {
        check(
            &Sha256,
            "3d7538088f4a26d9c8c516df15881ea16319a7eaced6972d24eafce60709d52f",
        );
        check(
            &Sha384,
            "107da7a10ef0c330e8a134a532abc1b86d90f0950a7687eae0ecd5602b23534767b4f9b01e77dbff1c0eada6160d005b",
        );
        check(
            &Sha512,
            "29dd85b164bdc88d563331bd1ee3ad48dbbf6d4086b9c6ae791aa11bb50a1d818a5e67a9699af91d9c8bb82d8120af3e90f97cb2cddbb8357ac49b0b7a85627b",
        );
        assert_eq!(
            hex::encode(Sha256.digest(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha3_test_vectors() {
        check(
            &Sha3_224,
            "71d76e8c0477ffcba88b434302ebb0e4c7b3995d156b01ec8c529f54",
        );
        check(
            &Sha3_384,
            "dcacf8df36017a49ed07a970008a7f8456dd31b360c2ee5d530c04ae1c6b664fb8c2dcf3a09222374b710beb7771e27d",
        );
        check(
            &Sha3_512,
            "d59c5fb8137f02244c6948c3220210bccb22aa4820155970e4428f8b61643031f990db633488188b36919f2408791b81f4905d65c0a8dbe256bb84004af465d9",
        );
    }

    #[test]
    fn blake2_test_vectors() {
        check(
            &Blake2s256,
            "04ff4760632a40fc1d2f3d6a03b0c5e4685499565f7576dee995fbaf2c3c9592",
        );
        check(
            &Blake2b256,
            "cc0c334553f777fb81480a1da0d4565147aa97ed7151b1707d54f9a28942bb49",
        );
        check(
            &Blake2b512,
            "b9362fb9428d536e29b29a15eb690fa8a5c134c70755da2f8f10be092ea9194fe01ce063e5dc02cff5ad20af2e4e4fcec51b0ce3e1c33e22f5a1d7ba87e3744e",
        );
    }
}
