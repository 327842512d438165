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

//! Chain specification for Kroma networks

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

use crate::predeploys;

/// The account deposit transactions originate from. `setEcotone` and
/// `setKromaMPT` revert unless sent by it.
pub const DEPOSITOR_ACCOUNT: Address = address!("0xDeaDDEaDDeAdDeAdDEAdDEaddeAddEAdDEAd0001");

/// Chain specification for a Kroma network.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChainSpec {
    /// name for logging purposes, e.g. "kroma", no logic is performed on this
    pub name: String,
    /// chain id
    pub id: u64,
    /// address the GasPriceOracle is deployed at
    pub gas_price_oracle_address: Address,
    /// sender of deposit transactions, the only account allowed to flip the
    /// oracle's hardfork switches
    pub deposit_transaction_from: Address,
}

impl Default for ChainSpec {
    fn default() -> Self {
        Self {
            name: "kroma".to_string(),
            id: 255,
            gas_price_oracle_address: predeploys::GAS_PRICE_ORACLE,
            deposit_transaction_from: DEPOSITOR_ACCOUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_kroma_mainnet() {
        let spec = ChainSpec::default();
        assert_eq!(spec.id, 255);
        assert_eq!(spec.gas_price_oracle_address, predeploys::GAS_PRICE_ORACLE);
        assert_eq!(spec.deposit_transaction_from, DEPOSITOR_ACCOUNT);
    }

    #[test]
    fn deserializes_from_json() {
        let spec: ChainSpec = serde_json::from_str(
            r#"{
                "name": "kroma-sepolia",
                "id": 2358,
                "gas_price_oracle_address": "0x4200000000000000000000000000000000000005",
                "deposit_transaction_from": "0xDeaDDEaDDeAdDeAdDEAdDEaddeAddEAdDEAd0001"
            }"#,
        )
        .unwrap();
        assert_eq!(spec.name, "kroma-sepolia");
        assert_eq!(spec.id, 2358);
        assert_eq!(spec.gas_price_oracle_address, predeploys::GAS_PRICE_ORACLE);
    }

    #[test]
    fn serde_round_trip() {
        let spec = ChainSpec::default();
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(spec, serde_json::from_str::<ChainSpec>(&json).unwrap());
    }
}
