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

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A whole number of seconds, serialized as a JSON integer.
///
/// Used for lifetimes (`expires_in`) and polling intervals (`wait`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seconds(u64);

impl Seconds {
    /// Creates a new [`Seconds`] value.
    pub const fn new(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Returns the number of seconds.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns the value as a [`Duration`].
    pub const fn as_duration(&self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl From<u64> for Seconds {
    fn from(seconds: u64) -> Self {
        Self(seconds)
    }
}

/// Sub-second precision is truncated.
impl From<Duration> for Seconds {
    fn from(duration: Duration) -> Self {
        Self(duration.as_secs())
    }
}

impl From<Seconds> for Duration {
    fn from(seconds: Seconds) -> Self {
        seconds.as_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_as_integer() {
        let seconds = Seconds::new(300);

        assert_eq!(serde_json::to_string(&seconds).unwrap(), "300");
        assert_eq!(serde_json::from_str::<Seconds>("300").unwrap(), seconds);
        assert!(serde_json::from_str::<Seconds>("-1").is_err());
        assert!(serde_json::from_str::<Seconds>("\"300\"").is_err());
    }

    #[test]
    fn converts_to_and_from_duration() {
        assert_eq!(Duration::from(Seconds::new(2)), Duration::from_secs(2));
        assert_eq!(Seconds::from(Duration::from_millis(2500)), Seconds::new(2));
    }
}
