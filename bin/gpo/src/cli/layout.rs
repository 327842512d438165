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

use alloy_primitives::Address;
use anyhow::Context;
use clap::{builder::ValueParser, Args};
use kroma_bindings::registry;
use kroma_types::{storage_slots_for, StorageValue};

use crate::cli::parse_key_val;

#[derive(Debug, Args)]
pub(super) struct LayoutArgs {
    /// Name of the contract in the registry
    #[arg(default_value = "GasPriceOracle")]
    contract: String,

    /// Compute storage slot writes instead of printing the layout
    #[arg(long = "slots", requires = "address")]
    slots: bool,

    /// Address owning the storage, for --slots
    #[arg(long = "address", name = "address")]
    address: Option<Address>,

    /// Storage variable assignment, for --slots
    ///
    /// Format: label=value, may be repeated
    #[arg(
        long = "set",
        name = "set",
        value_delimiter = ',',
        value_parser = ValueParser::new(parse_key_val)
    )]
    set: Vec<(String, String)>,
}

#[derive(Debug, Args)]
pub(super) struct AbiArgs {
    /// Name of the contract in the registry
    #[arg(default_value = "GasPriceOracle")]
    contract: String,
}

pub(super) fn print_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let layout = registry::storage_layout(&args.contract)?;

    if !args.slots {
        println!("{}", serde_json::to_string_pretty(layout)?);
        return Ok(());
    }

    let address = args.address.context("must provide address")?;
    let values = args
        .set
        .iter()
        .map(|(label, value)| Ok((label.clone(), value.parse::<StorageValue>()?)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for (slot, word) in storage_slots_for(layout, address, &values)? {
        println!("{} slot {} = {}", slot.address, slot.slot, word);
    }
    Ok(())
}

pub(super) fn print_abi(args: AbiArgs) -> anyhow::Result<()> {
    let abi = registry::abi(&args.contract)?;
    let parsed: serde_json::Value = serde_json::from_str(abi)?;
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn slot_writes_print_for_the_ecotone_flag() {
        let layout = registry::storage_layout("GasPriceOracle").unwrap();
        let address = address!("0x4200000000000000000000000000000000000005");
        let values = vec![("isEcotone".to_string(), StorageValue::Bool(true))];

        let writes = storage_slots_for(layout, address, &values).unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0.address, address);
    }

    #[test]
    fn unknown_contracts_error() {
        let err = registry::storage_layout("L1Block").unwrap_err();
        assert_eq!(err.to_string(), "L1Block: storage layout not found");
    }
}
