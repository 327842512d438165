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

use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use anyhow::Context;
use clap::{builder::PossibleValuesParser, Args, Parser, Subcommand};

mod activate;
mod chain_spec;
mod check;
mod deploy;
mod layout;
mod tracing;

/// Main entry point for the CLI
///
/// Parses the CLI arguments and runs the appropriate subcommand.
pub async fn run() -> anyhow::Result<()> {
    let opt = Cli::parse();
    let _guard = tracing::configure_logging(&opt.logs)?;
    tracing::info!("Parsed CLI options: {:#?}", opt);

    let cs = chain_spec::resolve_chain_spec(&opt.common.network, &opt.common.chain_spec);
    tracing::info!("Chain spec: {:#?}", cs);

    match opt.command {
        Command::Check(args) => check::run(args, cs, &opt.common).await?,
        Command::Deploy(args) => deploy::run(args, cs, &opt.common).await?,
        Command::Activate(args) => activate::run(args, cs, &opt.common).await?,
        Command::Layout(args) => layout::print_layout(args)?,
        Command::Abi(args) => layout::print_abi(args)?,
    }

    Ok(())
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Command {
    /// Check command
    ///
    /// Health-checks a GasPriceOracle deployment
    #[command(name = "check")]
    Check(check::CheckArgs),

    /// Deploy command
    ///
    /// Deploys the GasPriceOracle contract
    #[command(name = "deploy")]
    Deploy(deploy::DeployArgs),

    /// Activate command
    ///
    /// Activates a fee formula on the GasPriceOracle
    #[command(name = "activate")]
    Activate(activate::ActivateArgs),

    /// Layout command
    ///
    /// Prints the storage layout of a registered contract
    #[command(name = "layout")]
    Layout(layout::LayoutArgs),

    /// Abi command
    ///
    /// Prints the ABI of a registered contract
    #[command(name = "abi")]
    Abi(layout::AbiArgs),
}

/// CLI common options
#[derive(Debug, Args)]
#[command(next_help_heading = "Common")]
pub struct CommonArgs {
    /// Network flag
    #[arg(
        long = "network",
        name = "network",
        env = "NETWORK",
        value_parser = PossibleValuesParser::new(chain_spec::HARDCODED_CHAIN_SPECS),
        global = true)
    ]
    network: Option<String>,

    /// Chain spec file path
    #[arg(
        long = "chain_spec",
        name = "chain_spec",
        env = "CHAIN_SPEC",
        global = true
    )]
    chain_spec: Option<String>,

    /// ETH Node HTTP URL to connect to
    #[arg(
        long = "node_http",
        name = "node_http",
        env = "NODE_HTTP",
        global = true
    )]
    node_http: Option<String>,

    #[arg(
        long = "provider_client_timeout_seconds",
        name = "provider_client_timeout_seconds",
        env = "PROVIDER_CLIENT_TIMEOUT_SECONDS",
        default_value = "10",
        global = true
    )]
    pub provider_client_timeout_seconds: u64,
}

impl CommonArgs {
    fn node_http(&self) -> anyhow::Result<&str> {
        self.node_http.as_deref().context("must provide node_http")
    }
}

/// CLI options for the transaction signer
#[derive(Debug, Args)]
#[command(next_help_heading = "Signer")]
pub struct SignerArgs {
    /// Private key to sign transactions with, hex encoded
    #[arg(
        long = "private_key",
        name = "private_key",
        env = "PRIVATE_KEY",
        hide_env_values = true
    )]
    private_key: String,
}

impl SignerArgs {
    fn signer(&self, chain_id: u64) -> anyhow::Result<PrivateKeySigner> {
        Ok(self
            .private_key
            .parse::<PrivateKeySigner>()
            .context("failed to parse private key signer")?
            .with_chain_id(Some(chain_id)))
    }
}

/// CLI options for logging
#[derive(Debug, Args)]
#[command(next_help_heading = "Logging")]
pub struct LogsArgs {
    /// Log file
    ///
    /// If not provided, logs will be written to stdout
    #[arg(
        long = "log.file",
        name = "log.file",
        env = "LOG_FILE",
        default_value = None,
        global = true
    )]
    file: Option<String>,

    /// Log JSON
    ///
    /// If set, logs will be written in JSON format
    #[arg(
        long = "log.json",
        name = "log.json",
        env = "LOG_JSON",
        required = false,
        num_args = 0,
        global = true
    )]
    json: bool,
}

/// CLI options
#[derive(Debug, Parser)]
pub struct Cli {
    #[clap(subcommand)]
    command: Command,

    #[clap(flatten)]
    common: CommonArgs,

    #[clap(flatten)]
    logs: LogsArgs,
}

fn parse_key_val(s: &str) -> Result<(String, String), anyhow::Error> {
    let pos = s
        .find('=')
        .ok_or_else(|| anyhow::anyhow!(format!("invalid KEY=value: no `=` found in `{}`", s)))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}
