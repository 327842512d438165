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

#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

//! Contract bindings for the Kroma L2 predeploys.
//!
//! The artifacts under `contracts/` are compiler output copied verbatim from
//! the upstream contract releases. Nothing in there is hand-written; treat
//! the ABI, bytecode and storage layout files as opaque data that must stay
//! in sync with the deployed contracts.

mod gas_price_oracle;
pub use gas_price_oracle::{
    GasPriceOracle, GAS_PRICE_ORACLE_ABI, GAS_PRICE_ORACLE_STORAGE_LAYOUT_JSON,
};

pub mod registry;
pub mod solc;
