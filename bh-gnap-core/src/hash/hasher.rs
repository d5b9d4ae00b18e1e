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

use super::HashMethod;

/// The trait used for calculating hash digests.
///
/// The algorithm used for calculating the digest needs to be the one returned
/// from the [`Hasher::method`] method. Implementations are registered per
/// [`HashMethod`] in the registry behind [`HashMethod::hasher`].
pub trait Hasher: Send + Sync {
    /// Returns the hash method implemented by [`Hasher::digest`].
    fn method(&self) -> HashMethod;

    /// Computes the hash digest of the given `input`.
    fn digest(&self, input: &[u8]) -> Vec<u8>;
}
