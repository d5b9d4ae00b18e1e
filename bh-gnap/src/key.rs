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

//! Client keys and the proofing methods bound to them.

use bh_gnap_core::{closed_enum, RefOrValue};
use serde::{Deserialize, Serialize, Serializer};

use crate::{message::invalid, JsonObject};

closed_enum! {
    /// Method the client instance uses to prove possession of its key.
    pub enum ProofMethod: "proof method" {
        /// HTTP Message Signatures.
        HttpSig = "httpsig",
        /// Mutual TLS.
        Mtls = "mtls",
        /// Detached JWS.
        Jwsd = "jwsd",
        /// Attached JWS.
        Jws = "jws",
    }
}

closed_enum! {
    /// Signature algorithm of the HTTP Message Signatures proofing method.
    pub enum HttpSigAlg: "HTTP signature algorithm" {
        /// RSASSA-PSS using SHA-512.
        RsaPssSha512 = "rsa-pss-sha512",
        /// RSASSA-PKCS1-v1_5 using SHA-256.
        RsaV1_5Sha256 = "rsa-v1_5-sha256",
        /// HMAC using SHA-256.
        HmacSha256 = "hmac-sha256",
        /// ECDSA using curve P-256 and SHA-256.
        EcdsaP256Sha256 = "ecdsa-p256-sha256",
        /// ECDSA using curve P-384 and SHA-384.
        EcdsaP384Sha384 = "ecdsa-p384-sha384",
        /// EdDSA using curve edwards25519.
        Ed25519 = "ed25519",
    }
}

closed_enum! {
    /// Digest algorithm of the `Content-Digest` HTTP field.
    pub enum DigestAlg: "content digest algorithm" {
        /// SHA-256.
        Sha256 = "sha-256",
        /// SHA-512.
        Sha512 = "sha-512",
    }
}

closed_enum! {
    /// Format of the key material carried by a [`KeyObject`].
    pub enum KeyFormat: "key format" {
        /// JSON Web Key.
        Jwk = "jwk",
        /// PEM-encoded X.509 certificate.
        Cert = "cert",
        /// SHA-256 thumbprint of an X.509 certificate.
        CertS256 = "cert#S256",
    }
}

/// Fully specified proofing method, carrying the method's parameters.
///
/// Encoded as an object tagged by its `method` field, e.g.
/// `{"method": "httpsig", "alg": "ecdsa-p256-sha256", "content-digest-alg": "sha-256"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum Proof {
    /// HTTP Message Signatures.
    #[serde(rename = "httpsig")]
    HttpSig {
        /// Signature algorithm.
        alg: HttpSigAlg,
        /// Algorithm of the `Content-Digest` field.
        #[serde(rename = "content-digest-alg")]
        content_digest_alg: DigestAlg,
    },
    /// Mutual TLS.
    #[serde(rename = "mtls")]
    Mtls,
    /// Detached JWS.
    #[serde(rename = "jwsd")]
    Jwsd,
    /// Attached JWS.
    #[serde(rename = "jws")]
    Jws,
}

impl Proof {
    /// Returns the proofing method.
    pub fn method(&self) -> ProofMethod {
        match self {
            Proof::HttpSig { .. } => ProofMethod::HttpSig,
            Proof::Mtls => ProofMethod::Mtls,
            Proof::Jwsd => ProofMethod::Jwsd,
            Proof::Jws => ProofMethod::Jws,
        }
    }
}

/// Proofing method of a key: either the bare method name or the full
/// [`Proof`] object.
pub type KeyProof = RefOrValue<Proof, ProofMethod>;

/// A public key bound to a proofing method.
///
/// At least one of [`jwk`](Self::jwk), [`cert`](Self::cert) and
/// [`cert_s256`](Self::cert_s256) is present. This is checked both when
/// decoding and when encoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "KeyObjectUnverified")]
pub struct KeyObject {
    /// Proofing method.
    pub proof: KeyProof,
    /// Public key as a JSON Web Key.
    pub jwk: Option<JsonObject>,
    /// PEM-encoded X.509 certificate.
    pub cert: Option<String>,
    /// SHA-256 thumbprint of an X.509 certificate, sent as `cert#S256`.
    pub cert_s256: Option<String>,
}

impl KeyObject {
    /// Creates a new [`KeyObject`] holding a JSON Web Key.
    pub fn with_jwk(proof: impl Into<KeyProof>, jwk: JsonObject) -> Self {
        Self {
            proof: proof.into(),
            jwk: Some(jwk),
            cert: None,
            cert_s256: None,
        }
    }

    /// Creates a new [`KeyObject`] holding a PEM-encoded X.509 certificate.
    pub fn with_cert(proof: impl Into<KeyProof>, cert: impl Into<String>) -> Self {
        Self {
            proof: proof.into(),
            jwk: None,
            cert: Some(cert.into()),
            cert_s256: None,
        }
    }

    /// Returns the proofing method, regardless of the form it was sent in.
    pub fn proof_method(&self) -> ProofMethod {
        match &self.proof {
            RefOrValue::Ref(method) => *method,
            RefOrValue::Value(proof) => proof.method(),
        }
    }

    /// Checks that the key carries key material.
    pub fn validate(&self) -> bh_gnap_core::Result<()> {
        if self.formats().is_empty() {
            return invalid("KeyObject", "key carries no key material");
        }
        Ok(())
    }

    /// Returns the formats of the key material present in the key.
    pub fn formats(&self) -> Vec<KeyFormat> {
        [
            (self.jwk.is_some(), KeyFormat::Jwk),
            (self.cert.is_some(), KeyFormat::Cert),
            (self.cert_s256.is_some(), KeyFormat::CertS256),
        ]
        .into_iter()
        .filter_map(|(present, format)| present.then_some(format))
        .collect()
    }
}

impl From<Proof> for KeyProof {
    fn from(proof: Proof) -> Self {
        RefOrValue::Value(proof)
    }
}

impl From<ProofMethod> for KeyProof {
    fn from(method: ProofMethod) -> Self {
        RefOrValue::Ref(method)
    }
}

#[derive(Deserialize)]
struct KeyObjectUnverified {
    proof: KeyProof,
    jwk: Option<JsonObject>,
    cert: Option<String>,
    #[serde(rename = "cert#S256")]
    cert_s256: Option<String>,
}

impl TryFrom<KeyObjectUnverified> for KeyObject {
    type Error = bherror::Error<bh_gnap_core::Error>;

    fn try_from(value: KeyObjectUnverified) -> bh_gnap_core::Result<Self> {
        let key = KeyObject {
            proof: value.proof,
            jwk: value.jwk,
            cert: value.cert,
            cert_s256: value.cert_s256,
        };

        key.validate()?;
        Ok(key)
    }
}

#[derive(Serialize)]
struct KeyObjectWire<'a> {
    proof: &'a KeyProof,
    #[serde(skip_serializing_if = "Option::is_none")]
    jwk: Option<&'a JsonObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cert: Option<&'a str>,
    #[serde(rename = "cert#S256", skip_serializing_if = "Option::is_none")]
    cert_s256: Option<&'a str>,
}

impl Serialize for KeyObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.validate().map_err(serde::ser::Error::custom)?;

        KeyObjectWire {
            proof: &self.proof,
            jwk: self.jwk.as_ref(),
            cert: self.cert.as_deref(),
            cert_s256: self.cert_s256.as_deref(),
        }
        .serialize(serializer)
    }
}

/// A key, either by value or as a reference to a key known to the server.
pub type Key = RefOrValue<KeyObject>;

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use bh_gnap_core::{ClosedEnum as _, Error};
    use serde_json::json;

    use super::*;

    fn jwk() -> JsonObject {
        json!({"kty": "OKP", "crv": "Ed25519", "x": "11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo"})
            .as_object()
            .unwrap()
            .clone()
    }

    #[test]
    fn decode_key_with_proof_method_reference() {
        let key: Key = serde_json::from_value(json!({
            "proof": "httpsig",
            "jwk": jwk(),
        }))
        .unwrap();

        let key = key.value().unwrap();
        assert_eq!(key.proof, RefOrValue::Ref(ProofMethod::HttpSig));
        assert_eq!(key.proof_method(), ProofMethod::HttpSig);
        assert_eq!(key.formats(), vec![KeyFormat::Jwk]);
    }

    #[test]
    fn decode_key_with_full_proof_object() {
        let key: KeyObject = serde_json::from_value(json!({
            "proof": {
                "method": "httpsig",
                "alg": "ecdsa-p256-sha256",
                "content-digest-alg": "sha-256"
            },
            "cert#S256": "bBMEVb-BVdMHdHgzsNCbsPPjjA2ahXzfrwyq4g1LKo8"
        }))
        .unwrap();

        assert_eq!(
            key.proof,
            RefOrValue::Value(Proof::HttpSig {
                alg: HttpSigAlg::EcdsaP256Sha256,
                content_digest_alg: DigestAlg::Sha256,
            })
        );
        assert_eq!(key.formats(), vec![KeyFormat::CertS256]);
    }

    #[test]
    fn encode_proof_object() {
        let key = KeyObject::with_cert(Proof::Mtls, "MIIC...");

        assert_eq!(
            serde_json::to_value(&key).unwrap(),
            json!({"proof": {"method": "mtls"}, "cert": "MIIC..."})
        );
    }

    #[test]
    fn decode_unregistered_proof_method_fails() {
        let err = Key::decode(&json!({"proof": "carrier-pigeon", "jwk": jwk()})).unwrap_err();
        assert_matches!(err.error, Error::MalformedValue("KeyObject", _));

        let err = ProofMethod::decode("carrier-pigeon").unwrap_err();
        assert_eq!(
            err.error,
            Error::InvalidEnumValue("proof method", "carrier-pigeon".to_owned())
        );
    }

    #[test]
    fn decode_httpsig_without_parameters_fails() {
        let result = serde_json::from_value::<KeyObject>(json!({
            "proof": {"method": "httpsig"},
            "jwk": jwk(),
        }));

        assert!(result.is_err());
    }

    #[test]
    fn decode_key_without_material_fails() {
        let err = Key::decode(&json!({"proof": "mtls"})).unwrap_err();

        assert_matches!(err.error, Error::MalformedValue("KeyObject", _));
    }

    #[test]
    fn encode_key_without_material_fails() {
        let key = KeyObject {
            proof: ProofMethod::Mtls.into(),
            jwk: None,
            cert: None,
            cert_s256: None,
        };

        assert_matches!(
            key.validate().unwrap_err().error,
            Error::MalformedValue("KeyObject", _)
        );
        assert!(serde_json::to_value(&key).is_err());
        assert!(Key::by_value(key).encode().is_err());
    }

    #[test]
    fn encode_thumbprint_key() {
        let key = KeyObject {
            proof: ProofMethod::Jwsd.into(),
            jwk: None,
            cert: None,
            cert_s256: Some("bBMEVb-BVdMHdHgzsNCbsPPjjA2ahXzfrwyq4g1LKo8".to_owned()),
        };

        let encoded = serde_json::to_value(&key).unwrap();
        assert_eq!(
            encoded,
            json!({"proof": "jwsd", "cert#S256": "bBMEVb-BVdMHdHgzsNCbsPPjjA2ahXzfrwyq4g1LKo8"})
        );
        assert_eq!(serde_json::from_value::<KeyObject>(encoded).unwrap(), key);
    }

    #[test]
    fn key_by_reference() {
        let key: Key = serde_json::from_value(json!("7C7C4AZ9KHRS6X63AJAO")).unwrap();

        assert!(key.is_reference());
        assert_eq!(serde_json::to_value(&key).unwrap(), json!("7C7C4AZ9KHRS6X63AJAO"));
    }

    #[test]
    fn proof_tags_match_proof_methods() {
        for proof in [
            Proof::HttpSig {
                alg: HttpSigAlg::Ed25519,
                content_digest_alg: DigestAlg::Sha512,
            },
            Proof::Mtls,
            Proof::Jwsd,
            Proof::Jws,
        ] {
            let encoded = serde_json::to_value(&proof).unwrap();
            assert_eq!(encoded["method"], json!(proof.method().as_str()));
        }
    }
}
