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

use anyhow::Context;
use clap::Args;
use kroma_provider::{AlloyGasPriceOracle, GasPriceOracle};
use kroma_types::ChainSpec;

use crate::cli::CommonArgs;

#[derive(Debug, Args)]
pub(super) struct CheckArgs {
    /// Print the full read surface in addition to the health checks
    #[arg(short, long)]
    detail: bool,
}

pub(super) async fn run(
    args: CheckArgs,
    chain_spec: ChainSpec,
    common: &CommonArgs,
) -> anyhow::Result<()> {
    let provider = kroma_provider::new_alloy_provider(
        common.node_http()?,
        common.provider_client_timeout_seconds,
    )?;
    let oracle = AlloyGasPriceOracle::new(chain_spec.gas_price_oracle_address, provider);

    check_gas_price_oracle(&oracle).await?;
    if args.detail {
        print_detail(&oracle).await?;
    }

    Ok(())
}

/// Health-check a GasPriceOracle deployment.
///
/// The oracle must report the Kroma MPT transition as active and
/// none of the fee attributes may read zero.
pub(super) async fn check_gas_price_oracle(oracle: &impl GasPriceOracle) -> anyhow::Result<()> {
    let is_kroma_mpt = oracle
        .is_kroma_mpt(None)
        .await
        .context("failed to get Kroma MPT status")?;
    if !is_kroma_mpt {
        anyhow::bail!("GPO is not set to Kroma MPT");
    }

    let l1_base_fee = oracle
        .l1_base_fee(None)
        .await
        .context("failed to get l1 base fee")?;
    if l1_base_fee.is_zero() {
        anyhow::bail!("l1 base fee should not be zero");
    }

    let blob_base_fee = oracle
        .blob_base_fee(None)
        .await
        .context("failed to get blob base fee")?;
    if blob_base_fee.is_zero() {
        anyhow::bail!("blob base fee should not be zero");
    }

    let base_fee_scalar = oracle
        .base_fee_scalar(None)
        .await
        .context("failed to get base fee scalar")?;
    if base_fee_scalar == 0 {
        anyhow::bail!("base fee scalar should not be zero");
    }

    let blob_base_fee_scalar = oracle
        .blob_base_fee_scalar(None)
        .await
        .context("failed to get blob base fee scalar")?;
    if blob_base_fee_scalar == 0 {
        anyhow::bail!("blob base fee scalar should not be zero");
    }

    tracing::info!("GasPriceOracle contract test: SUCCESS");
    Ok(())
}

async fn print_detail(oracle: &impl GasPriceOracle) -> anyhow::Result<()> {
    println!("address: {}", oracle.address());
    println!("version: {}", oracle.version(None).await?);
    println!("decimals: {}", oracle.decimals(None).await?);
    println!("gas price: {}", oracle.gas_price(None).await?);
    println!("base fee: {}", oracle.base_fee(None).await?);
    println!("l1 base fee: {}", oracle.l1_base_fee(None).await?);
    println!("blob base fee: {}", oracle.blob_base_fee(None).await?);
    println!("base fee scalar: {}", oracle.base_fee_scalar(None).await?);
    println!(
        "blob base fee scalar: {}",
        oracle.blob_base_fee_scalar(None).await?
    );
    println!("overhead: {}", oracle.overhead(None).await?);
    println!("scalar: {}", oracle.scalar(None).await?);
    println!("ecotone active: {}", oracle.is_ecotone(None).await?);
    println!("kroma mpt active: {}", oracle.is_kroma_mpt(None).await?);
    Ok(())
}
