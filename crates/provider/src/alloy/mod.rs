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

use std::time::Duration;

use alloy_network::EthereumWallet;
use alloy_provider::{Provider as AlloyProvider, ProviderBuilder};
use alloy_rpc_client::{ClientBuilder, RpcClient};
use alloy_signer_local::PrivateKeySigner;
use anyhow::Context;
use client_timeout::ClientTimeoutLayer;
use self::metrics::ClientMetricLayer;
use url::Url;

mod client_timeout;
pub(crate) mod metrics;
pub(crate) mod oracle;

// TODO: make the retry parameters configurable: use a large number for CUPS for now
const RETRY_MAX_RATE_LIMIT_RETRIES: u32 = 10;
const RETRY_INITIAL_BACKOFF_MS: u64 = 500;
const RETRY_COMPUTE_UNITS_PER_SECOND: u64 = 1_000_000;

/// Create a new alloy provider from a given RPC URL
pub fn new_alloy_provider(
    rpc_url: &str,
    client_timeout_seconds: u64,
) -> anyhow::Result<impl AlloyProvider + Clone> {
    let client = new_rpc_client(rpc_url, client_timeout_seconds)?;
    Ok(ProviderBuilder::new().connect_client(client))
}

/// Create a new alloy provider with a local signer attached, from a
/// given RPC URL. Transactions sent through it are signed locally.
pub fn new_alloy_provider_with_wallet(
    rpc_url: &str,
    client_timeout_seconds: u64,
    signer: PrivateKeySigner,
) -> anyhow::Result<impl AlloyProvider + Clone> {
    let client = new_rpc_client(rpc_url, client_timeout_seconds)?;
    Ok(ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_client(client))
}

fn new_rpc_client(rpc_url: &str, client_timeout_seconds: u64) -> anyhow::Result<RpcClient> {
    let url = Url::parse(rpc_url).context("invalid rpc url")?;
    let retry_layer = alloy_transport::layers::RetryBackoffLayer::new(
        RETRY_MAX_RATE_LIMIT_RETRIES,
        RETRY_INITIAL_BACKOFF_MS,
        RETRY_COMPUTE_UNITS_PER_SECOND,
    );
    let metric_layer = ClientMetricLayer::default();
    let timeout_layer = ClientTimeoutLayer::new(Duration::from_secs(client_timeout_seconds));
    Ok(ClientBuilder::default()
        .layer(retry_layer)
        .layer(metric_layer)
        .layer(timeout_layer)
        .http(url))
}
