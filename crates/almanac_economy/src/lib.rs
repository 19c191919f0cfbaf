//! # Almanac Economy
//!
//! Turns a tracked identity token and an inventory snapshot into one
//! displayed count.
//!
//! ## Counting Paths
//!
//! 1. **Resolution** - the token must name a registered item, otherwise the
//!    counter shows a placeholder (steady state, not an error)
//! 2. **Denominated** - the token is the base unit of a [`DenominationTable`]:
//!    every tier is converted to base units and coin pouches are unpacked
//! 3. **Plain** - matching stacks across main, offhand and armor are summed
//! 4. **External** - the token is bound to a [`CrossSystemProvider`]: its
//!    balance is added best-effort, zero when absent or failing
//!
//! Recomputation happens at most once per frame id.
//!
//! ## Example
//!
//! ```rust,ignore
//! use almanac_economy::{CurrencyAggregator, DenominationTable, ProviderRegistry};
//!
//! let mut counter = CurrencyAggregator::new(vec![DenominationTable::builtin()], ProviderRegistry::new());
//! let outcome = counter.on_tick("coinage:copper_coin", frame_id, &registry, &inventory);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod counter;
pub mod denomination;
pub mod error;
pub mod identity;
pub mod inventory;
pub mod provider;

pub use counter::{CountOutcome, CurrencyAggregator, CurrencyHolding, MAX_CONTAINER_DEPTH};
pub use denomination::{Denomination, DenominationSet, DenominationTable};
pub use error::{EconomyError, EconomyResult};
pub use identity::{ItemIdentity, ItemRegistry, StaticItemRegistry};
pub use inventory::{Inventory, InventorySnapshot, ItemStack, SlotGroup, StackPayload};
pub use provider::{CrossSystemProvider, ProviderRegistry};
