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

//! Grammar checks of the single-identifier formats.
//!
//! Every check returns the reason of the failure, which the caller wraps into
//! [`Error::InvalidSubjectIdentifier`](crate::Error::InvalidSubjectIdentifier).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Address grammar of RFC 5322, restricted to ASCII. Supports quoted local
    /// parts and domain literals.
    static ref EMAIL_REGEX: Regex = Regex::new(concat!(
        r#"^([!#-'*+/-9=?A-Z\^-~\-]+(\.[!#-'*+/-9=?A-Z\^-~\-]+)*|"([\]!#-\[\^-~ \t]|(\\[\t -~]))+")"#,
        r#"@([!#-'*+/-9=?A-Z\^-~\-]+(\.[!#-'*+/-9=?A-Z\^-~\-]+)*|\[[\t -Z\^-~]*\])$"#,
    ))
    .expect("the e-mail pattern is a valid regex");

    /// E.164 telephone number, with an optional leading `+`.
    static ref PHONE_REGEX: Regex =
        Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("the phone pattern is a valid regex");
}

pub(crate) type Check = std::result::Result<(), String>;

/// `acct` URI: non-empty, parses as a URI with the `acct` scheme.
pub(crate) fn account(uri: &str) -> Check {
    uri_with_scheme(uri, "acct")
}

pub(crate) fn email(email: &str) -> Check {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(format!("\"{email}\" is not a valid e-mail address"))
    }
}

/// Both parts must satisfy the JWT `StringOrURI` rule.
pub(crate) fn issuer_subject(issuer: &str, subject: &str) -> Check {
    string_or_uri(issuer).map_err(|reason| format!("issuer {reason}"))?;
    string_or_uri(subject).map_err(|reason| format!("subject {reason}"))
}

pub(crate) fn opaque(id: &str) -> Check {
    non_empty(id, "id")
}

pub(crate) fn phone_number(phone: &str) -> Check {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(format!("\"{phone}\" is not an E.164 phone number"))
    }
}

/// DID URL: non-empty, parses as a URI with the `did` scheme.
pub(crate) fn did(url: &str) -> Check {
    uri_with_scheme(url, "did")
}

pub(crate) fn uri(uri: &str) -> Check {
    non_empty(uri, "uri")?;
    parse_uri(uri).map(|_| ())
}

fn non_empty(value: &str, field: &str) -> Check {
    if value.is_empty() {
        Err(format!("`{field}` must not be empty"))
    } else {
        Ok(())
    }
}

fn parse_uri(raw: &str) -> std::result::Result<&iref::Uri, String> {
    // This is `map_err` because `Uri::new` returns non std::Error.
    iref::Uri::new(raw).map_err(|_| format!("\"{raw}\" is not a valid URI"))
}

fn uri_with_scheme(raw: &str, scheme: &str) -> Check {
    non_empty(raw, "uri")?;
    let uri = parse_uri(raw)?;
    if uri.scheme().as_str().eq_ignore_ascii_case(scheme) {
        Ok(())
    } else {
        Err(format!("\"{raw}\" does not use the `{scheme}` scheme"))
    }
}

/// A non-empty string which, if it contains a `:`, must be a URI.
fn string_or_uri(value: &str) -> Check {
    if value.is_empty() {
        return Err("must not be empty".to_owned());
    }
    if value.contains(':') {
        parse_uri(value)?;
    }
    Ok(())
}
