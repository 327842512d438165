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

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_rpc_types_eth::BlockId;

use crate::ProviderResult;

/// Trait for interacting with the GasPriceOracle predeploy.
///
/// Implemented by the alloy-backed provider, mocked for testing.
/// Read methods accept an optional block at which to query state,
/// defaulting to latest.
#[async_trait::async_trait]
#[auto_impl::auto_impl(&, &mut, Rc, Arc, Box)]
pub trait GasPriceOracle: Send + Sync {
    /// Address the oracle is bound to
    fn address(&self) -> Address;

    /// Number of decimals used in scalar math, via the legacy
    /// all-caps accessor
    async fn decimals_legacy(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;

    /// L2 base fee, backed by the L1Block attributes
    async fn base_fee(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;

    /// Ecotone base fee scalar
    async fn base_fee_scalar(&self, block_id: Option<BlockId>) -> ProviderResult<u32>;

    /// Current blob base fee
    async fn blob_base_fee(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;

    /// Ecotone blob base fee scalar
    async fn blob_base_fee_scalar(&self, block_id: Option<BlockId>) -> ProviderResult<u32>;

    /// Number of decimals used in scalar math
    async fn decimals(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;

    /// L2 gas price, an alias for the base fee
    async fn gas_price(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;

    /// L1 portion of the fee for a transaction with the given
    /// unsigned RLP payload
    async fn get_l1_fee(&self, data: Bytes, block_id: Option<BlockId>) -> ProviderResult<U256>;

    /// Amount of L1 gas the given payload consumes
    async fn get_l1_gas_used(&self, data: Bytes, block_id: Option<BlockId>)
        -> ProviderResult<U256>;

    /// Whether the Ecotone fee formula is active
    async fn is_ecotone(&self, block_id: Option<BlockId>) -> ProviderResult<bool>;

    /// Whether the Kroma MPT transition is active
    async fn is_kroma_mpt(&self, block_id: Option<BlockId>) -> ProviderResult<bool>;

    /// L1 base fee as relayed into the L1Block predeploy
    async fn l1_base_fee(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;

    /// Pre-Ecotone fixed overhead, zero once Ecotone is active
    async fn overhead(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;

    /// Pre-Ecotone fee scalar, zero once Ecotone is active
    async fn scalar(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;

    /// Semantic version of the deployed contract
    async fn version(&self, block_id: Option<BlockId>) -> ProviderResult<String>;

    /// Activate the Ecotone fee formula. Only callable by the
    /// depositor account. Waits for inclusion and returns the
    /// transaction hash.
    async fn set_ecotone(&self) -> ProviderResult<B256>;

    /// Activate the Kroma MPT transition. Only callable by the
    /// depositor account. Waits for inclusion and returns the
    /// transaction hash.
    async fn set_kroma_mpt(&self) -> ProviderResult<B256>;
}
