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

// Contract from https://github.com/kroma-network/kroma/tree/main/packages/contracts/contracts/L2

use alloy_sol_macro::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    GasPriceOracle,
    "contracts/out/GasPriceOracle.sol/GasPriceOracle.json"
);

/// ABI of the GasPriceOracle contract, byte-for-byte the generator output.
pub const GAS_PRICE_ORACLE_ABI: &str = include_str!("../contracts/abi/GasPriceOracle.json");

/// Storage layout of the GasPriceOracle contract as emitted by solc.
///
/// Only `isEcotone` lives in structured storage; the MPT flag sits in an
/// unstructured slot managed by the contract itself.
pub const GAS_PRICE_ORACLE_STORAGE_LAYOUT_JSON: &str =
    include_str!("../contracts/layouts/GasPriceOracle.json");

#[cfg(test)]
mod tests {
    use alloy_primitives::keccak256;
    use alloy_sol_types::SolCall;
    use serde_json::Value;

    use super::*;

    // Selectors published by the upstream generator, one per ABI function.
    fn generated_selector(name: &str) -> Option<[u8; 4]> {
        let selector = match name {
            "DECIMALS" => GasPriceOracle::DECIMALSCall::SELECTOR,
            "baseFee" => GasPriceOracle::baseFeeCall::SELECTOR,
            "baseFeeScalar" => GasPriceOracle::baseFeeScalarCall::SELECTOR,
            "blobBaseFee" => GasPriceOracle::blobBaseFeeCall::SELECTOR,
            "blobBaseFeeScalar" => GasPriceOracle::blobBaseFeeScalarCall::SELECTOR,
            "decimals" => GasPriceOracle::decimalsCall::SELECTOR,
            "gasPrice" => GasPriceOracle::gasPriceCall::SELECTOR,
            "getL1Fee" => GasPriceOracle::getL1FeeCall::SELECTOR,
            "getL1GasUsed" => GasPriceOracle::getL1GasUsedCall::SELECTOR,
            "isEcotone" => GasPriceOracle::isEcotoneCall::SELECTOR,
            "isKromaMPT" => GasPriceOracle::isKromaMPTCall::SELECTOR,
            "l1BaseFee" => GasPriceOracle::l1BaseFeeCall::SELECTOR,
            "overhead" => GasPriceOracle::overheadCall::SELECTOR,
            "scalar" => GasPriceOracle::scalarCall::SELECTOR,
            "setEcotone" => GasPriceOracle::setEcotoneCall::SELECTOR,
            "setKromaMPT" => GasPriceOracle::setKromaMPTCall::SELECTOR,
            "version" => GasPriceOracle::versionCall::SELECTOR,
            _ => return None,
        };
        Some(selector)
    }

    fn abi_functions() -> Vec<Value> {
        let abi: Vec<Value> = serde_json::from_str(GAS_PRICE_ORACLE_ABI).unwrap();
        abi.into_iter()
            .filter(|e| e["type"] == "function")
            .collect()
    }

    #[test]
    fn every_abi_function_has_a_generated_accessor() {
        let functions = abi_functions();
        assert_eq!(functions.len(), 17);

        for function in functions {
            let name = function["name"].as_str().unwrap();
            let inputs: Vec<&str> = function["inputs"]
                .as_array()
                .unwrap()
                .iter()
                .map(|i| i["type"].as_str().unwrap())
                .collect();
            let signature = format!("{}({})", name, inputs.join(","));
            let expected = &keccak256(signature.as_bytes())[..4];

            let selector =
                generated_selector(name).unwrap_or_else(|| panic!("no accessor for {name}"));
            assert_eq!(&selector[..], expected, "selector mismatch for {signature}");
        }
    }

    #[test]
    fn known_selectors() {
        assert_eq!(GasPriceOracle::baseFeeCall::SELECTOR, [0x6e, 0xf2, 0x5c, 0x3a]);
        assert_eq!(GasPriceOracle::getL1FeeCall::SELECTOR, [0x49, 0x94, 0x8e, 0x0e]);
        assert_eq!(GasPriceOracle::setEcotoneCall::SELECTOR, [0x22, 0xb9, 0x0a, 0xb3]);
        assert_eq!(GasPriceOracle::setKromaMPTCall::SELECTOR, [0x8c, 0xca, 0x67, 0x62]);
        assert_eq!(GasPriceOracle::isKromaMPTCall::SELECTOR, [0xa5, 0x66, 0xe1, 0xa5]);
        assert_eq!(GasPriceOracle::versionCall::SELECTOR, [0x54, 0xfd, 0x4d, 0x50]);
    }

    #[test]
    fn mutability_matches_abi() {
        for function in abi_functions() {
            let name = function["name"].as_str().unwrap();
            let mutability = function["stateMutability"].as_str().unwrap();
            match name {
                "setEcotone" | "setKromaMPT" => assert_eq!(mutability, "nonpayable"),
                "decimals" => assert_eq!(mutability, "pure"),
                _ => assert_eq!(mutability, "view", "{name} should be a view function"),
            }
        }
    }

    #[test]
    fn bytecode_statics_match_artifact() {
        assert_eq!(GasPriceOracle::BYTECODE.len(), 5417);
        assert_eq!(GasPriceOracle::DEPLOYED_BYTECODE.len(), 5230);
        // Creation code starts with the usual free-memory-pointer setup.
        assert_eq!(&GasPriceOracle::BYTECODE[..2], &const_hex::decode("6080").unwrap()[..]);
    }

    #[test]
    fn call_encoding_round_trips() {
        let call = GasPriceOracle::getL1FeeCall {
            _data: alloy_primitives::bytes!("deadbeef"),
        };
        let encoded = call.abi_encode();
        assert_eq!(&encoded[..4], GasPriceOracle::getL1FeeCall::SELECTOR);
        let decoded = GasPriceOracle::getL1FeeCall::abi_decode(&encoded).unwrap();
        assert_eq!(decoded._data, call._data);
    }
}
