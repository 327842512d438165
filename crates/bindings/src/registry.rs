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

//! Name-keyed lookup over the contracts this crate embeds artifacts for.

use std::{collections::HashMap, sync::LazyLock};

use alloy_primitives::Bytes;

use crate::{
    gas_price_oracle::{GasPriceOracle, GAS_PRICE_ORACLE_ABI, GAS_PRICE_ORACLE_STORAGE_LAYOUT_JSON},
    solc::StorageLayout,
};

/// Registry lookup failure.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No storage layout is embedded for the contract.
    #[error("{0}: storage layout not found")]
    StorageLayoutNotFound(String),
    /// No deployed bytecode is embedded for the contract.
    #[error("{0}: deployed bytecode not found")]
    DeployedBytecodeNotFound(String),
    /// The contract is not tracked for immutable references.
    #[error("{0}: immutable reference not found")]
    ImmutableReferenceNotFound(String),
    /// No ABI is embedded for the contract.
    #[error("{0}: abi not found")]
    AbiNotFound(String),
}

static LAYOUTS: LazyLock<HashMap<&'static str, StorageLayout>> = LazyLock::new(|| {
    let gas_price_oracle: StorageLayout =
        serde_json::from_str(GAS_PRICE_ORACLE_STORAGE_LAYOUT_JSON)
            .expect("embedded storage layout should parse");
    HashMap::from([("GasPriceOracle", gas_price_oracle)])
});

static DEPLOYED_BYTECODES: LazyLock<HashMap<&'static str, Bytes>> =
    LazyLock::new(|| HashMap::from([("GasPriceOracle", GasPriceOracle::DEPLOYED_BYTECODE.clone())]));

static IMMUTABLE_REFERENCES: LazyLock<HashMap<&'static str, bool>> =
    LazyLock::new(|| HashMap::from([("GasPriceOracle", false)]));

static ABIS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HashMap::from([("GasPriceOracle", GAS_PRICE_ORACLE_ABI)]));

/// Returns the storage layout of a contract by name.
pub fn storage_layout(name: &str) -> Result<&'static StorageLayout, RegistryError> {
    LAYOUTS
        .get(name)
        .ok_or_else(|| RegistryError::StorageLayoutNotFound(name.to_string()))
}

/// Returns the deployed bytecode of a contract by name.
pub fn deployed_bytecode(name: &str) -> Result<Bytes, RegistryError> {
    DEPLOYED_BYTECODES
        .get(name)
        .cloned()
        .ok_or_else(|| RegistryError::DeployedBytecodeNotFound(name.to_string()))
}

/// Returns whether a contract's deployed bytecode contains immutable references.
pub fn has_immutable_references(name: &str) -> Result<bool, RegistryError> {
    IMMUTABLE_REFERENCES
        .get(name)
        .copied()
        .ok_or_else(|| RegistryError::ImmutableReferenceNotFound(name.to_string()))
}

/// Returns the JSON ABI of a contract by name.
pub fn abi(name: &str) -> Result<&'static str, RegistryError> {
    ABIS.get(name)
        .copied()
        .ok_or_else(|| RegistryError::AbiNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_contract_resolves() {
        let layout = storage_layout("GasPriceOracle").unwrap();
        assert_eq!(layout.storage[0].label, "isEcotone");

        let bytecode = deployed_bytecode("GasPriceOracle").unwrap();
        assert_eq!(bytecode.len(), 5230);

        assert!(!has_immutable_references("GasPriceOracle").unwrap());

        let abi = abi("GasPriceOracle").unwrap();
        assert!(abi.starts_with('['));
    }

    #[test]
    fn unknown_contract_is_a_typed_error() {
        let err = storage_layout("Missing").unwrap_err();
        assert_eq!(err.to_string(), "Missing: storage layout not found");

        let err = deployed_bytecode("Missing").unwrap_err();
        assert_eq!(err.to_string(), "Missing: deployed bytecode not found");

        let err = has_immutable_references("Missing").unwrap_err();
        assert_eq!(err.to_string(), "Missing: immutable reference not found");

        let err = abi("Missing").unwrap_err();
        assert_eq!(err.to_string(), "Missing: abi not found");
    }
}
