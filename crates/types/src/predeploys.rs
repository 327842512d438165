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

//! Addresses of the Kroma L2 predeploys. Fixed in the genesis state, the same
//! on every Kroma network.

use alloy_primitives::{address, Address};

/// ProxyAdmin predeploy.
pub const PROXY_ADMIN: Address = address!("0x4200000000000000000000000000000000000000");
/// WETH9 predeploy. The only predeploy that does not sit behind a proxy.
pub const WETH9: Address = address!("0x4200000000000000000000000000000000000001");
/// L1Block predeploy.
pub const L1_BLOCK: Address = address!("0x4200000000000000000000000000000000000002");
/// L2ToL1MessagePasser predeploy.
pub const L2_TO_L1_MESSAGE_PASSER: Address =
    address!("0x4200000000000000000000000000000000000003");
/// L2CrossDomainMessenger predeploy.
pub const L2_CROSS_DOMAIN_MESSENGER: Address =
    address!("0x4200000000000000000000000000000000000004");
/// GasPriceOracle predeploy.
pub const GAS_PRICE_ORACLE: Address = address!("0x4200000000000000000000000000000000000005");
/// ProtocolVault predeploy.
pub const PROTOCOL_VAULT: Address = address!("0x4200000000000000000000000000000000000006");
/// L1FeeVault predeploy.
pub const L1_FEE_VAULT: Address = address!("0x4200000000000000000000000000000000000007");
/// ValidatorRewardVault predeploy.
pub const VALIDATOR_REWARD_VAULT: Address =
    address!("0x4200000000000000000000000000000000000008");
/// L2StandardBridge predeploy.
pub const L2_STANDARD_BRIDGE: Address = address!("0x4200000000000000000000000000000000000009");
/// GovernanceToken predeploy.
pub const GOVERNANCE_TOKEN: Address = address!("0x4200000000000000000000000000000000000010");
/// L2ERC721Bridge predeploy.
pub const L2_ERC721_BRIDGE: Address = address!("0x420000000000000000000000000000000000000A");
/// KromaMintableERC20Factory predeploy.
pub const KROMA_MINTABLE_ERC20_FACTORY: Address =
    address!("0x420000000000000000000000000000000000000B");
/// KromaMintableERC721Factory predeploy.
pub const KROMA_MINTABLE_ERC721_FACTORY: Address =
    address!("0x420000000000000000000000000000000000000C");

/// Name/address table of every predeploy.
pub fn all() -> &'static [(&'static str, Address)] {
    &[
        ("ProxyAdmin", PROXY_ADMIN),
        ("WETH9", WETH9),
        ("L1Block", L1_BLOCK),
        ("L2ToL1MessagePasser", L2_TO_L1_MESSAGE_PASSER),
        ("L2CrossDomainMessenger", L2_CROSS_DOMAIN_MESSENGER),
        ("GasPriceOracle", GAS_PRICE_ORACLE),
        ("ProtocolVault", PROTOCOL_VAULT),
        ("L1FeeVault", L1_FEE_VAULT),
        ("ValidatorRewardVault", VALIDATOR_REWARD_VAULT),
        ("L2StandardBridge", L2_STANDARD_BRIDGE),
        ("GovernanceToken", GOVERNANCE_TOKEN),
        ("L2ERC721Bridge", L2_ERC721_BRIDGE),
        ("KromaMintableERC20Factory", KROMA_MINTABLE_ERC20_FACTORY),
        ("KromaMintableERC721Factory", KROMA_MINTABLE_ERC721_FACTORY),
    ]
}

/// Returns true for predeploys that sit behind a proxy contract.
pub fn is_proxied(predeploy: Address) -> bool {
    predeploy != WETH9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_complete() {
        assert_eq!(all().len(), 14);
        let (name, addr) = all()[5];
        assert_eq!(name, "GasPriceOracle");
        assert_eq!(addr, GAS_PRICE_ORACLE);
    }

    #[test]
    fn only_weth9_is_unproxied() {
        for (name, addr) in all() {
            assert_eq!(is_proxied(*addr), *name != "WETH9");
        }
    }
}
