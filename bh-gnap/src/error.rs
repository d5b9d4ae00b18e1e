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

//! Errors reported by the authorization server inside a grant response.

use bh_gnap_core::{closed_enum, RefOrValue};
use serde::{Deserialize, Serialize};

closed_enum! {
    /// Code of a protocol error.
    pub enum ErrorCode: "error code" {
        /// The request is malformed.
        InvalidRequest = "invalid_request",
        /// The client instance is not recognized or allowed.
        InvalidClient = "invalid_client",
        /// The interaction reference is incorrect or has expired.
        InvalidInteraction = "invalid_interaction",
        /// The flag configuration is not valid.
        InvalidFlag = "invalid_flag",
        /// The token rotation request is not valid.
        InvalidRotation = "invalid_rotation",
        /// Key rotation of the token is not allowed.
        KeyRotationNotSupported = "key_rotation_not_supported",
        /// The grant could not be continued.
        InvalidContinuation = "invalid_continuation",
        /// The resource owner denied the request.
        UserDenied = "user_denied",
        /// The request was denied for an unspecified reason.
        RequestDenied = "request_denied",
        /// The user is not known to the authorization server.
        UnknownUser = "unknown_user",
        /// The interaction integrity could not be established.
        UnknownInteraction = "unknown_interaction",
        /// The client instance did not respect the `wait` interval.
        TooFast = "too_fast",
        /// Too many attempts have been made.
        TooManyAttempts = "too_many_attempts",
    }
}

impl ErrorCode {
    /// Returns the default human-readable description of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "The request is missing a required parameter, includes an invalid parameter value or is otherwise malformed.",
            ErrorCode::InvalidClient => "The request was made from a client that was not recognized or allowed by the AS, or the client's signature validation failed.",
            ErrorCode::InvalidInteraction => "The client instance has provided an interaction reference that is incorrect for this request or the interaction modes in use have expired.",
            ErrorCode::InvalidFlag => "The flag configuration is not valid.",
            ErrorCode::InvalidRotation => "The token rotation request is not valid.",
            ErrorCode::KeyRotationNotSupported => "The AS does not allow rotation of this access token's key.",
            ErrorCode::InvalidContinuation => "The continuation of the referenced grant could not be processed.",
            ErrorCode::UserDenied => "The RO denied the request.",
            ErrorCode::RequestDenied => "The request was denied for an unspecified reason.",
            ErrorCode::UnknownUser => "The user presented in the request is not known to the AS or does not match the user present during interaction.",
            ErrorCode::UnknownInteraction => "The interaction integrity could not be established.",
            ErrorCode::TooFast => "The client instance did not respect the timeout in the wait response before the next call.",
            ErrorCode::TooManyAttempts => "A limit has been reached in the total number of reasonable attempts.",
        }
    }
}

/// A protocol error sent as an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GnapErrorObject {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable description, overriding the code's default one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A protocol error, either as the bare error code or as an object with a
/// description.
///
/// # Example
///
/// ```
/// use bh_gnap::{ErrorCode, GnapError};
///
/// let error: GnapError = serde_json::from_str(r#""user_denied""#).unwrap();
/// assert!(error.is(ErrorCode::UserDenied));
/// assert_eq!(error.to_string(), "user_denied: The RO denied the request.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GnapError(RefOrValue<GnapErrorObject, ErrorCode>);

impl GnapError {
    /// Creates a new [`GnapError`] carrying only its code.
    pub fn new(code: ErrorCode) -> Self {
        Self(RefOrValue::Ref(code))
    }

    /// Creates a new [`GnapError`] with a custom description.
    pub fn with_description(code: ErrorCode, description: impl Into<String>) -> Self {
        Self(RefOrValue::Value(GnapErrorObject {
            code,
            description: Some(description.into()),
        }))
    }

    /// Returns the error code.
    pub fn code(&self) -> ErrorCode {
        match &self.0 {
            RefOrValue::Ref(code) => *code,
            RefOrValue::Value(object) => object.code,
        }
    }

    /// Returns the transmitted description, or the code's default one.
    pub fn description(&self) -> &str {
        match &self.0 {
            RefOrValue::Value(GnapErrorObject {
                description: Some(description),
                ..
            }) if !description.is_empty() => description.as_str(),
            _ => self.code().description(),
        }
    }

    /// Returns `true` if the error has the given code.
    pub fn is(&self, code: ErrorCode) -> bool {
        self.code() == code
    }

    /// Returns the error in the form it was sent in.
    pub fn as_ref_or_value(&self) -> &RefOrValue<GnapErrorObject, ErrorCode> {
        &self.0
    }
}

impl From<ErrorCode> for GnapError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

impl From<GnapErrorObject> for GnapError {
    fn from(object: GnapErrorObject) -> Self {
        Self(RefOrValue::Value(object))
    }
}

impl std::fmt::Display for GnapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use bh_gnap_core::{ClosedEnum as _, Error};
    use serde_json::json;

    use super::*;

    #[test]
    fn every_code_has_a_description() {
        for code in ErrorCode::all() {
            assert!(!code.description().is_empty(), "{code}");
        }
        assert_eq!(ErrorCode::all().count(), 13);
    }

    #[test]
    fn decode_error_object() {
        let error: GnapError = serde_json::from_value(json!({
            "code": "invalid_flag",
            "description": "bearer tokens are not allowed"
        }))
        .unwrap();

        assert!(error.is(ErrorCode::InvalidFlag));
        assert!(!error.is(ErrorCode::InvalidRequest));
        assert_eq!(error.to_string(), "invalid_flag: bearer tokens are not allowed");
    }

    #[test]
    fn display_falls_back_to_default_description() {
        let error: GnapError =
            serde_json::from_value(json!({"code": "too_fast"})).unwrap();

        assert_eq!(
            error.to_string(),
            "too_fast: The client instance did not respect the timeout in the wait response before the next call."
        );
    }

    #[test]
    fn decode_unregistered_code_fails() {
        let err = RefOrValue::<GnapErrorObject, ErrorCode>::decode(&json!("teapot")).unwrap_err();

        assert_eq!(
            err.error,
            Error::InvalidEnumValue("error code", "teapot".to_owned())
        );
        assert!(serde_json::from_value::<GnapError>(json!({"code": "teapot"})).is_err());
    }

    #[test]
    fn encode_keeps_the_form() {
        assert_eq!(
            serde_json::to_value(GnapError::new(ErrorCode::UserDenied)).unwrap(),
            json!("user_denied")
        );
        assert_eq!(
            serde_json::to_value(GnapError::with_description(ErrorCode::InvalidClient, "unknown key"))
                .unwrap(),
            json!({"code": "invalid_client", "description": "unknown key"})
        );
    }
}
