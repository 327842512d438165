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

use crate::{GasPriceOracle, ProviderResult};

mockall::mock! {
    pub GasPriceOracle {}

    #[async_trait::async_trait]
    impl GasPriceOracle for GasPriceOracle {
        fn address(&self) -> Address;
        async fn decimals_legacy(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;
        async fn base_fee(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;
        async fn base_fee_scalar(&self, block_id: Option<BlockId>) -> ProviderResult<u32>;
        async fn blob_base_fee(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;
        async fn blob_base_fee_scalar(&self, block_id: Option<BlockId>) -> ProviderResult<u32>;
        async fn decimals(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;
        async fn gas_price(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;
        async fn get_l1_fee(&self, data: Bytes, block_id: Option<BlockId>) -> ProviderResult<U256>;
        async fn get_l1_gas_used(
            &self,
            data: Bytes,
            block_id: Option<BlockId>,
        ) -> ProviderResult<U256>;
        async fn is_ecotone(&self, block_id: Option<BlockId>) -> ProviderResult<bool>;
        async fn is_kroma_mpt(&self, block_id: Option<BlockId>) -> ProviderResult<bool>;
        async fn l1_base_fee(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;
        async fn overhead(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;
        async fn scalar(&self, block_id: Option<BlockId>) -> ProviderResult<U256>;
        async fn version(&self, block_id: Option<BlockId>) -> ProviderResult<String>;
        async fn set_ecotone(&self) -> ProviderResult<B256>;
        async fn set_kroma_mpt(&self) -> ProviderResult<B256>;
    }
}
