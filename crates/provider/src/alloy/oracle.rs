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
use alloy_provider::Provider as AlloyProvider;
use alloy_rpc_types_eth::BlockId;
use anyhow::Context;
use kroma_bindings::GasPriceOracle::{self, GasPriceOracleInstance};
use tracing::instrument;

use crate::{GasPriceOracle as GasPriceOracleTrait, ProviderError, ProviderResult};

/// GasPriceOracle provider backed by an alloy provider.
///
/// Holds only the bound address and the transport. All state lives
/// on chain, so cloning or rebinding is cheap and always consistent.
pub struct AlloyGasPriceOracle<AP> {
    oracle: GasPriceOracleInstance<AP>,
}

impl<AP> AlloyGasPriceOracle<AP>
where
    AP: AlloyProvider,
{
    /// Create a new oracle provider bound to the given address
    pub fn new(address: Address, provider: AP) -> Self {
        Self {
            oracle: GasPriceOracleInstance::new(address, provider),
        }
    }

    /// Deploy a fresh GasPriceOracle contract and bind to it.
    ///
    /// The provider must have a wallet attached. Waits for the
    /// deployment to be mined and returns the bound provider along
    /// with the deployment transaction hash.
    #[instrument(skip_all)]
    pub async fn deploy(provider: AP) -> ProviderResult<(Self, B256)>
    where
        AP: Clone,
    {
        let pending = GasPriceOracle::deploy_builder(provider.clone())
            .send()
            .await?;
        let tx_hash = *pending.tx_hash();
        let receipt = pending
            .get_receipt()
            .await
            .context("waiting for deploy transaction inclusion")?;
        if !receipt.status() {
            return Err(ProviderError::ContractError(format!(
                "deploy transaction {tx_hash} reverted"
            )));
        }
        let address = receipt
            .contract_address
            .context("deploy receipt should contain a contract address")?;
        Ok((Self::new(address, provider), tx_hash))
    }
}

#[async_trait::async_trait]
impl<AP> GasPriceOracleTrait for AlloyGasPriceOracle<AP>
where
    AP: AlloyProvider,
{
    fn address(&self) -> Address {
        *self.oracle.address()
    }

    async fn decimals_legacy(&self, block_id: Option<BlockId>) -> ProviderResult<U256> {
        block_id
            .map_or(self.oracle.DECIMALS(), |bid| self.oracle.DECIMALS().block(bid))
            .call()
            .await
            .map_err(Into::into)
    }

    async fn base_fee(&self, block_id: Option<BlockId>) -> ProviderResult<U256> {
        block_id
            .map_or(self.oracle.baseFee(), |bid| self.oracle.baseFee().block(bid))
            .call()
            .await
            .map_err(Into::into)
    }

    async fn base_fee_scalar(&self, block_id: Option<BlockId>) -> ProviderResult<u32> {
        block_id
            .map_or(self.oracle.baseFeeScalar(), |bid| {
                self.oracle.baseFeeScalar().block(bid)
            })
            .call()
            .await
            .map_err(Into::into)
    }

    async fn blob_base_fee(&self, block_id: Option<BlockId>) -> ProviderResult<U256> {
        block_id
            .map_or(self.oracle.blobBaseFee(), |bid| {
                self.oracle.blobBaseFee().block(bid)
            })
            .call()
            .await
            .map_err(Into::into)
    }

    async fn blob_base_fee_scalar(&self, block_id: Option<BlockId>) -> ProviderResult<u32> {
        block_id
            .map_or(self.oracle.blobBaseFeeScalar(), |bid| {
                self.oracle.blobBaseFeeScalar().block(bid)
            })
            .call()
            .await
            .map_err(Into::into)
    }

    async fn decimals(&self, block_id: Option<BlockId>) -> ProviderResult<U256> {
        block_id
            .map_or(self.oracle.decimals(), |bid| self.oracle.decimals().block(bid))
            .call()
            .await
            .map_err(Into::into)
    }

    async fn gas_price(&self, block_id: Option<BlockId>) -> ProviderResult<U256> {
        block_id
            .map_or(self.oracle.gasPrice(), |bid| self.oracle.gasPrice().block(bid))
            .call()
            .await
            .map_err(Into::into)
    }

    async fn get_l1_fee(&self, data: Bytes, block_id: Option<BlockId>) -> ProviderResult<U256> {
        block_id
            .map_or(self.oracle.getL1Fee(data.clone()), |bid| {
                self.oracle.getL1Fee(data).block(bid)
            })
            .call()
            .await
            .map_err(Into::into)
    }

    async fn get_l1_gas_used(
        &self,
        data: Bytes,
        block_id: Option<BlockId>,
    ) -> ProviderResult<U256> {
        block_id
            .map_or(self.oracle.getL1GasUsed(data.clone()), |bid| {
                self.oracle.getL1GasUsed(data).block(bid)
            })
            .call()
            .await
            .map_err(Into::into)
    }

    async fn is_ecotone(&self, block_id: Option<BlockId>) -> ProviderResult<bool> {
        block_id
            .map_or(self.oracle.isEcotone(), |bid| {
                self.oracle.isEcotone().block(bid)
            })
            .call()
            .await
            .map_err(Into::into)
    }

    async fn is_kroma_mpt(&self, block_id: Option<BlockId>) -> ProviderResult<bool> {
        block_id
            .map_or(self.oracle.isKromaMPT(), |bid| {
                self.oracle.isKromaMPT().block(bid)
            })
            .call()
            .await
            .map_err(Into::into)
    }

    async fn l1_base_fee(&self, block_id: Option<BlockId>) -> ProviderResult<U256> {
        block_id
            .map_or(self.oracle.l1BaseFee(), |bid| {
                self.oracle.l1BaseFee().block(bid)
            })
            .call()
            .await
            .map_err(Into::into)
    }

    async fn overhead(&self, block_id: Option<BlockId>) -> ProviderResult<U256> {
        block_id
            .map_or(self.oracle.overhead(), |bid| self.oracle.overhead().block(bid))
            .call()
            .await
            .map_err(Into::into)
    }

    async fn scalar(&self, block_id: Option<BlockId>) -> ProviderResult<U256> {
        block_id
            .map_or(self.oracle.scalar(), |bid| self.oracle.scalar().block(bid))
            .call()
            .await
            .map_err(Into::into)
    }

    async fn version(&self, block_id: Option<BlockId>) -> ProviderResult<String> {
        block_id
            .map_or(self.oracle.version(), |bid| self.oracle.version().block(bid))
            .call()
            .await
            .map_err(Into::into)
    }

    #[instrument(skip_all)]
    async fn set_ecotone(&self) -> ProviderResult<B256> {
        let pending = self.oracle.setEcotone().send().await?;
        let tx_hash = *pending.tx_hash();
        let receipt = pending
            .get_receipt()
            .await
            .context("waiting for setEcotone transaction inclusion")?;
        if !receipt.status() {
            return Err(ProviderError::ContractError(format!(
                "setEcotone transaction {tx_hash} reverted"
            )));
        }
        Ok(tx_hash)
    }

    #[instrument(skip_all)]
    async fn set_kroma_mpt(&self) -> ProviderResult<B256> {
        let pending = self.oracle.setKromaMPT().send().await?;
        let tx_hash = *pending.tx_hash();
        let receipt = pending
            .get_receipt()
            .await
            .context("waiting for setKromaMPT transaction inclusion")?;
        if !receipt.status() {
            return Err(ProviderError::ContractError(format!(
                "setKromaMPT transaction {tx_hash} reverted"
            )));
        }
        Ok(tx_hash)
    }
}

#[cfg(test)]
mod tests {
    use alloy_transport::{TransportError, TransportErrorKind};

    use super::*;

    #[test]
    fn transport_errors_pass_through() {
        let err = alloy_contract::Error::TransportError(TransportError::Transport(
            TransportErrorKind::BackendGone,
        ));
        match ProviderError::from(err) {
            ProviderError::RPC(TransportError::Transport(TransportErrorKind::BackendGone)) => {}
            other => panic!("expected RPC error, got {other:?}"),
        }
    }

    #[test]
    fn decode_errors_become_contract_errors() {
        let err = alloy_contract::Error::UnknownFunction("setGasPrice".to_string());
        match ProviderError::from(err) {
            ProviderError::ContractError(msg) => {
                assert!(msg.contains("setGasPrice"), "unexpected message: {msg}")
            }
            other => panic!("expected contract error, got {other:?}"),
        }
    }
}
