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

use alloy_transport::TransportError;

/// Error enumeration for the provider traits
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// JSON-RPC error
    #[error(transparent)]
    RPC(#[from] TransportError),
    /// Contract error
    #[error("contract error: {0}")]
    ContractError(String),
    /// Internal errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<alloy_contract::Error> for ProviderError {
    fn from(err: alloy_contract::Error) -> Self {
        match err {
            alloy_contract::Error::TransportError(e) => Self::RPC(e),
            other => Self::ContractError(other.to_string()),
        }
    }
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
