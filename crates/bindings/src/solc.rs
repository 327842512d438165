// This file is part of kroma-rs.
//
// kroma-rs is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// kroma-rs is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with kroma-rs.
// If not, see https://www.gnu.org/licenses/.

//! Serde model of the solc `storageLayout` compiler artifact.
//!
//! Numeric fields that solc emits as decimal strings (`slot`,
//! `numberOfBytes`) stay strings here; callers parse them when they need
//! arithmetic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The `storageLayout` section of a compiled contract.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct StorageLayout {
    /// Declared storage variables, in declaration order.
    pub storage: Vec<StorageLayoutEntry>,
    /// Type descriptors referenced by the entries.
    pub types: BTreeMap<String, StorageLayoutType>,
}

impl StorageLayout {
    /// Looks up an entry by its source-level variable name.
    pub fn entry(&self, label: &str) -> Option<&StorageLayoutEntry> {
        self.storage.iter().find(|e| e.label == label)
    }

    /// Looks up the type descriptor for an entry.
    pub fn type_of(&self, entry: &StorageLayoutEntry) -> Option<&StorageLayoutType> {
        self.types.get(&entry.storage_type)
    }
}

/// One declared storage variable.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StorageLayoutEntry {
    /// AST node id of the declaration.
    pub ast_id: u64,
    /// Fully qualified contract name.
    pub contract: String,
    /// Variable name.
    pub label: String,
    /// Byte offset within the slot.
    pub offset: u64,
    /// Slot number, decimal string.
    pub slot: String,
    /// Key into [`StorageLayout::types`].
    #[serde(rename = "type")]
    pub storage_type: String,
}

/// Type descriptor for a storage entry.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StorageLayoutType {
    /// How values of this type are laid out (`inplace`, `mapping`, ...).
    pub encoding: String,
    /// Human-readable type name.
    pub label: String,
    /// Width in bytes, decimal string.
    pub number_of_bytes: String,
}
