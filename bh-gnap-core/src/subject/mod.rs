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

//! Subject identifiers as defined by [RFC 9493], including the `aliases`
//! format which groups several identifiers of the same subject.
//!
//! Every single-identifier format has its own grammar check, applied by the
//! constructors of [`NoAlias`] and on every decode. An `aliases` identifier
//! must hold at least one identifier, may not hold the same identifier twice,
//! and may not nest another `aliases` identifier.
//!
//! [RFC 9493]: https://www.rfc-editor.org/rfc/rfc9493

mod format;
mod identifier;
mod validate;

pub use format::Format;
pub use identifier::{Aliases, NoAlias, SubjectIdentifier};
