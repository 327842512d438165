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

use clap::Args;
use kroma_provider::{AlloyGasPriceOracle, GasPriceOracle};
use kroma_types::ChainSpec;

use crate::cli::{CommonArgs, SignerArgs};

#[derive(Debug, Args)]
pub(super) struct DeployArgs {
    /// Signer arguments
    #[command(flatten)]
    signer: SignerArgs,
}

pub(super) async fn run(
    args: DeployArgs,
    chain_spec: ChainSpec,
    common: &CommonArgs,
) -> anyhow::Result<()> {
    let provider = kroma_provider::new_alloy_provider_with_wallet(
        common.node_http()?,
        common.provider_client_timeout_seconds,
        args.signer.signer(chain_spec.id)?,
    )?;

    tracing::info!("Deploying GasPriceOracle on chain {}", chain_spec.id);
    let (oracle, tx_hash) = AlloyGasPriceOracle::deploy(provider).await?;

    println!("Deployed GasPriceOracle");
    println!("  address: {}", oracle.address());
    println!("  transaction: {tx_hash}");

    Ok(())
}
