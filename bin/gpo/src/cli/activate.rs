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

use alloy_primitives::B256;
use clap::{Args, Subcommand};
use kroma_provider::{AlloyGasPriceOracle, GasPriceOracle};
use kroma_types::ChainSpec;

use crate::cli::{CommonArgs, SignerArgs};

#[derive(Debug, Args)]
pub(super) struct ActivateArgs {
    #[clap(subcommand)]
    command: ActivateCommand,

    /// Signer arguments
    #[command(flatten)]
    signer: SignerArgs,
}

#[derive(Debug, Subcommand)]
enum ActivateCommand {
    /// Activate the Ecotone fee formula
    #[command(name = "ecotone")]
    Ecotone,

    /// Activate the Kroma MPT transition
    #[command(name = "kroma-mpt")]
    KromaMpt,
}

pub(super) async fn run(
    args: ActivateArgs,
    chain_spec: ChainSpec,
    common: &CommonArgs,
) -> anyhow::Result<()> {
    let provider = kroma_provider::new_alloy_provider_with_wallet(
        common.node_http()?,
        common.provider_client_timeout_seconds,
        args.signer.signer(chain_spec.id)?,
    )?;
    let oracle = AlloyGasPriceOracle::new(chain_spec.gas_price_oracle_address, provider);

    let tx_hash = match args.command {
        ActivateCommand::Ecotone => activate_ecotone(&oracle).await?,
        ActivateCommand::KromaMpt => activate_kroma_mpt(&oracle).await?,
    };

    println!("Activation transaction mined: {tx_hash}");
    Ok(())
}

/// Send setEcotone and verify the flag flipped.
///
/// The transaction only succeeds when sent from the depositor
/// account; contract reverts pass through unchanged.
pub(super) async fn activate_ecotone(oracle: &impl GasPriceOracle) -> anyhow::Result<B256> {
    let tx_hash = oracle.set_ecotone().await?;
    if !oracle.is_ecotone(None).await? {
        anyhow::bail!("setEcotone was mined in {tx_hash} but isEcotone still reads false");
    }
    Ok(tx_hash)
}

/// Send setKromaMPT and verify the flag flipped.
pub(super) async fn activate_kroma_mpt(oracle: &impl GasPriceOracle) -> anyhow::Result<B256> {
    let tx_hash = oracle.set_kroma_mpt().await?;
    if !oracle.is_kroma_mpt(None).await? {
        anyhow::bail!("setKromaMPT was mined in {tx_hash} but isKromaMPT still reads false");
    }
    Ok(tx_hash)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::b256;
    use kroma_provider::{MockGasPriceOracle, ProviderError};

    use super::*;

    const TX_HASH: B256 =
        b256!("0x00000000000000000000000000000000000000000000000000000000deadbeef");

    #[tokio::test]
    async fn ecotone_activation_round_trips() {
        let mut oracle = MockGasPriceOracle::new();
        oracle.expect_set_ecotone().returning(|| Ok(TX_HASH));
        oracle.expect_is_ecotone().returning(|_| Ok(true));

        let tx_hash = activate_ecotone(&oracle).await.unwrap();
        assert_eq!(tx_hash, TX_HASH);
    }

    #[tokio::test]
    async fn fails_when_flag_does_not_flip() {
        let mut oracle = MockGasPriceOracle::new();
        oracle.expect_set_kroma_mpt().returning(|| Ok(TX_HASH));
        oracle.expect_is_kroma_mpt().returning(|_| Ok(false));

        let err = activate_kroma_mpt(&oracle).await.unwrap_err();
        assert!(
            err.to_string().contains("isKromaMPT still reads false"),
            "{err}"
        );
    }

    #[tokio::test]
    async fn contract_reverts_pass_through() {
        let mut oracle = MockGasPriceOracle::new();
        oracle.expect_set_ecotone().returning(|| {
            Err(ProviderError::ContractError(
                "execution reverted: GasPriceOracle: only the depositor account can set isEcotone flag".to_string(),
            ))
        });

        let err = activate_ecotone(&oracle).await.unwrap_err();
        assert!(
            err.to_string().contains("only the depositor account"),
            "{err}"
        );
    }
}
