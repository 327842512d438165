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

//! Types for interacting with EVM storage

use std::{collections::BTreeMap, str::FromStr};

use alloy_primitives::{Address, B256, U256};
use kroma_bindings::solc::StorageLayout;

/// An EVM storage slot
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct StorageSlot {
    /// The address of the contract owning this slot
    pub address: Address,
    /// The storage slot
    pub slot: U256,
}

/// A value to write into a named storage variable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StorageValue {
    /// Boolean flag, encoded as 0 or 1.
    Bool(bool),
    /// 20-byte address, right-aligned within its packing width.
    Address(Address),
    /// Unsigned integer, big-endian.
    Uint(U256),
}

impl FromStr for StorageValue {
    type Err = StorageError;

    /// Parses `true`/`false` as booleans, 20-byte hex strings as addresses,
    /// and anything else as a decimal or `0x` hex integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => return Ok(Self::Bool(true)),
            "false" => return Ok(Self::Bool(false)),
            _ => {}
        }
        if let Ok(address) = s.parse::<Address>() {
            return Ok(Self::Address(address));
        }
        let parsed = match s.strip_prefix("0x") {
            Some(hex) => U256::from_str_radix(hex, 16),
            None => U256::from_str_radix(s, 10),
        };
        parsed
            .map(Self::Uint)
            .map_err(|_| StorageError::InvalidValue(s.to_string()))
    }
}

/// Storage computation failure.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The label does not appear in the layout.
    #[error("{0}: not found in storage layout")]
    UnknownLabel(String),
    /// The entry references a type the layout does not describe.
    #[error("{0}: unknown storage type")]
    UnknownType(String),
    /// Only `inplace` encodings are supported.
    #[error("{label}: unsupported storage encoding {encoding}")]
    UnsupportedEncoding {
        /// Variable name.
        label: String,
        /// The layout's encoding string.
        encoding: String,
    },
    /// The value kind does not match the variable's declared type.
    #[error("{label}: value is not a {expected}")]
    TypeMismatch {
        /// Variable name.
        label: String,
        /// The layout's type label.
        expected: String,
    },
    /// The value needs more bits than the variable's packing width.
    #[error("{label}: value does not fit in {width} bytes")]
    ValueDoesNotFit {
        /// Variable name.
        label: String,
        /// Packing width in bytes.
        width: u64,
    },
    /// The layout entry itself is inconsistent (bad slot/width numbers).
    #[error("{0}: malformed storage layout entry")]
    MalformedLayout(String),
    /// The string does not parse as any supported value kind.
    #[error("{0}: cannot parse storage value")]
    InvalidValue(String),
}

/// Computes the slot writes that set the named variables of a contract to the
/// given values.
///
/// Supports `inplace` encodings up to one word wide. Variables packed into
/// the same slot are merged into a single write; each label may appear at
/// most once. Results are ordered by ascending slot.
pub fn storage_slots_for(
    layout: &StorageLayout,
    address: Address,
    values: &[(String, StorageValue)],
) -> Result<Vec<(StorageSlot, B256)>, StorageError> {
    let mut words: BTreeMap<U256, U256> = BTreeMap::new();

    for (label, value) in values {
        let entry = layout
            .entry(label)
            .ok_or_else(|| StorageError::UnknownLabel(label.clone()))?;
        let ty = layout
            .type_of(entry)
            .ok_or_else(|| StorageError::UnknownType(entry.storage_type.clone()))?;

        if ty.encoding != "inplace" {
            return Err(StorageError::UnsupportedEncoding {
                label: label.clone(),
                encoding: ty.encoding.clone(),
            });
        }

        let width: u64 = ty
            .number_of_bytes
            .parse()
            .map_err(|_| StorageError::MalformedLayout(label.clone()))?;
        if width == 0 || entry.offset + width > 32 {
            return Err(StorageError::MalformedLayout(label.clone()));
        }
        let slot = U256::from_str_radix(&entry.slot, 10)
            .map_err(|_| StorageError::MalformedLayout(label.clone()))?;

        let encoded = match (value, ty.label.as_str()) {
            (StorageValue::Bool(b), "bool") => U256::from(*b as u8),
            (StorageValue::Address(a), "address" | "address payable") => {
                U256::from_be_slice(a.as_slice())
            }
            (StorageValue::Uint(v), l) if l.starts_with("uint") => *v,
            _ => {
                return Err(StorageError::TypeMismatch {
                    label: label.clone(),
                    expected: ty.label.clone(),
                })
            }
        };
        if encoded.bit_len() as u64 > width * 8 {
            return Err(StorageError::ValueDoesNotFit {
                label: label.clone(),
                width,
            });
        }

        *words.entry(slot).or_default() |= encoded << (entry.offset as usize * 8);
    }

    Ok(words
        .into_iter()
        .map(|(slot, word)| (StorageSlot { address, slot }, B256::from(word)))
        .collect())
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, b256};
    use kroma_bindings::registry;

    use super::*;

    const TARGET: Address = address!("0x4200000000000000000000000000000000000005");

    fn packed_layout() -> StorageLayout {
        serde_json::from_str(
            r#"{
                "storage": [
                    {"astId": 1, "contract": "t.sol:T", "label": "flag", "offset": 0, "slot": "0", "type": "t_bool"},
                    {"astId": 2, "contract": "t.sol:T", "label": "scalar", "offset": 1, "slot": "0", "type": "t_uint32"},
                    {"astId": 3, "contract": "t.sol:T", "label": "owner", "offset": 0, "slot": "1", "type": "t_address"},
                    {"astId": 4, "contract": "t.sol:T", "label": "names", "offset": 0, "slot": "2", "type": "t_mapping"}
                ],
                "types": {
                    "t_bool": {"encoding": "inplace", "label": "bool", "numberOfBytes": "1"},
                    "t_uint32": {"encoding": "inplace", "label": "uint32", "numberOfBytes": "4"},
                    "t_address": {"encoding": "inplace", "label": "address", "numberOfBytes": "20"},
                    "t_mapping": {"encoding": "mapping", "label": "mapping(uint256 => string)", "numberOfBytes": "32"}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn sets_the_ecotone_flag() {
        let layout = registry::storage_layout("GasPriceOracle").unwrap();
        let writes = storage_slots_for(
            layout,
            TARGET,
            &[("isEcotone".to_string(), StorageValue::Bool(true))],
        )
        .unwrap();

        assert_eq!(writes.len(), 1);
        let (slot, value) = &writes[0];
        assert_eq!(slot.address, TARGET);
        assert_eq!(slot.slot, U256::ZERO);
        assert_eq!(
            *value,
            b256!("0x0000000000000000000000000000000000000000000000000000000000000001")
        );
    }

    #[test]
    fn packs_values_sharing_a_slot() {
        let writes = storage_slots_for(
            &packed_layout(),
            TARGET,
            &[
                ("flag".to_string(), StorageValue::Bool(true)),
                ("scalar".to_string(), StorageValue::Uint(U256::from(0xabcd))),
            ],
        )
        .unwrap();

        assert_eq!(writes.len(), 1);
        // scalar shifted one byte left of the flag
        assert_eq!(
            writes[0].1,
            b256!("0x0000000000000000000000000000000000000000000000000000000000abcd01")
        );
    }

    #[test]
    fn encodes_addresses_right_aligned() {
        let owner = address!("0x00000000000000000000000000000000000000aa");
        let writes = storage_slots_for(
            &packed_layout(),
            TARGET,
            &[("owner".to_string(), StorageValue::Address(owner))],
        )
        .unwrap();

        assert_eq!(writes[0].0.slot, U256::from(1));
        assert_eq!(
            writes[0].1,
            b256!("0x00000000000000000000000000000000000000000000000000000000000000aa")
        );
    }

    #[test]
    fn rejects_unknown_labels_and_wide_values() {
        let layout = packed_layout();

        let err = storage_slots_for(
            &layout,
            TARGET,
            &[("missing".to_string(), StorageValue::Bool(true))],
        )
        .unwrap_err();
        assert!(matches!(err, StorageError::UnknownLabel(_)));

        let err = storage_slots_for(
            &layout,
            TARGET,
            &[("flag".to_string(), StorageValue::Uint(U256::from(2)))],
        )
        .unwrap_err();
        assert!(matches!(err, StorageError::TypeMismatch { .. }));

        let err = storage_slots_for(
            &layout,
            TARGET,
            &[(
                "scalar".to_string(),
                StorageValue::Uint(U256::from(1u64 << 32)),
            )],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StorageError::ValueDoesNotFit { width: 4, .. }
        ));
    }

    #[test]
    fn rejects_non_inplace_encodings() {
        let err = storage_slots_for(
            &packed_layout(),
            TARGET,
            &[("names".to_string(), StorageValue::Uint(U256::ZERO))],
        )
        .unwrap_err();
        assert!(matches!(err, StorageError::UnsupportedEncoding { .. }));
    }

    #[test]
    fn parses_value_strings() {
        assert_eq!("true".parse::<StorageValue>().unwrap(), StorageValue::Bool(true));
        assert_eq!(
            "0x4200000000000000000000000000000000000005".parse::<StorageValue>().unwrap(),
            StorageValue::Address(TARGET)
        );
        assert_eq!(
            "1000".parse::<StorageValue>().unwrap(),
            StorageValue::Uint(U256::from(1000))
        );
        assert_eq!(
            "0xff".parse::<StorageValue>().unwrap(),
            StorageValue::Uint(U256::from(255))
        );
        assert!("bogus".parse::<StorageValue>().is_err());
    }
}
