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

use config::{Config, Environment, File, FileFormat};
use kroma_types::ChainSpec;
use paste::paste;

/// Resolve the chain spec from the network flag and a chain spec file
///
/// Sources are layered, highest priority first:
/// - `CHAIN_` prefixed environment variables
/// - chain spec file
/// - network flag
/// - defaults
pub fn resolve_chain_spec(network: &Option<String>, file: &Option<String>) -> ChainSpec {
    let default = serde_json::to_string(&ChainSpec::default()).expect("should serialize to string");
    let mut config_builder =
        Config::builder().add_source(File::from_str(default.as_str(), FileFormat::Json));

    if let Some(network) = &network {
        config_builder = config_builder.add_source(File::from_str(
            get_hardcoded_chain_spec(network.to_lowercase().as_str()),
            FileFormat::Toml,
        ));
    }
    if let Some(file) = &file {
        config_builder = config_builder.add_source(File::with_name(file.as_str()));
    }
    let c = config_builder
        .add_source(Environment::with_prefix("CHAIN"))
        .build()
        .expect("should build config");

    let id = c.get::<u64>("id").ok();
    if let Some(id) = id {
        if id == 0 {
            panic!("chain id must be non-zero");
        }
    } else {
        panic!("chain id must be defined");
    }

    c.try_deserialize().expect("should deserialize config")
}

macro_rules! define_hardcoded_chain_specs {
    ($($network:ident),+) => {
        paste! {
            $(
                const [< $network:upper _SPEC >]: &str = include_str!(concat!("../../chain_specs/", stringify!($network), ".toml"));
            )+

            fn get_hardcoded_chain_spec(network: &str) -> &'static str {
                match network {
                    $(
                        stringify!($network) => [< $network:upper _SPEC >],
                    )+
                    _ => panic!("unknown hardcoded network: {}", network),
                }
            }

            pub const HARDCODED_CHAIN_SPECS: &[&'static str] = &[$(stringify!($network),)+];
        }
    };
}

define_hardcoded_chain_specs!(kroma, kroma_sepolia, dev);

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn defaults_to_kroma_mainnet() {
        let spec = resolve_chain_spec(&None, &None);
        assert_eq!(spec, ChainSpec::default());
    }

    #[test]
    fn network_flag_overrides_defaults() {
        let spec = resolve_chain_spec(&Some("kroma_sepolia".to_string()), &None);
        assert_eq!(spec.name, "kroma-sepolia");
        assert_eq!(spec.id, 2358);
        // the oracle predeploy is the same on every network
        assert_eq!(
            spec.gas_price_oracle_address,
            address!("0x4200000000000000000000000000000000000005")
        );
    }

    #[test]
    fn dev_network_resolves() {
        let spec = resolve_chain_spec(&Some("dev".to_string()), &None);
        assert_eq!(spec.name, "dev");
        assert_eq!(spec.id, 901);
    }
}
