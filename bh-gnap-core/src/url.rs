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

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An absolute URI carried in a protocol message, such as an endpoint or a
/// management URI.
///
/// The empty string and anything that does not parse as an absolute URI are
/// rejected with [`Error::InvalidUrl`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Url(iref::UriBuf);

impl Url {
    /// Parses and validates `raw`.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(bherror::Error::root(Error::InvalidUrl(raw.to_owned()))
                .ctx("URL must not be empty"));
        }

        // This is `map_err` because `UriBuf::new` returns non std::Error.
        let uri = iref::UriBuf::new(raw.as_bytes().to_vec())
            .map_err(|_| bherror::Error::root(Error::InvalidUrl(raw.to_owned())))?;

        Ok(Self(uri))
    }

    /// Returns the URL as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the URL as an [`iref::Uri`].
    pub fn as_uri(&self) -> &iref::Uri {
        &self.0
    }
}

impl std::fmt::Display for Url {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Url {
    type Err = bherror::Error<Error>;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Url {
    type Error = bherror::Error<Error>;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.0.as_str().to_owned()
    }
}

impl From<iref::UriBuf> for Url {
    fn from(uri: iref::UriBuf) -> Self {
        Self(uri)
    }
}
