//! # Currency Aggregator
//!
//! Produces the one number the counter widget displays.
//!
//! The tracked token is resolved once per change. A resolved identity is
//! then counted at most once per frame id: denominated when it is the base
//! unit of a table, plain otherwise, plus any cross-system balance bound
//! to it.

use crate::denomination::{DenominationSet, DenominationTable};
use crate::identity::{ItemIdentity, ItemRegistry};
use crate::inventory::{InventorySnapshot, ItemStack, SlotGroup};
use crate::provider::ProviderRegistry;

/// Maximum nesting of container payloads that is followed.
pub const MAX_CONTAINER_DEPTH: u32 = 8;

/// Result of a count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CountOutcome {
    /// The tracked token names no known item; a placeholder is shown.
    #[default]
    Unresolved,
    /// Total in base units.
    Counted(u64),
}

impl CountOutcome {
    /// The count, if resolved.
    #[inline]
    #[must_use]
    pub const fn count(self) -> Option<u64> {
        match self {
            Self::Unresolved => None,
            Self::Counted(n) => Some(n),
        }
    }
}

/// Last sampled holding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrencyHolding {
    /// Resolved identity, `None` while unresolved.
    pub tracked_identity: Option<ItemIdentity>,
    /// Total from the last sample.
    pub total_count: u64,
    /// Frame id of the last sample.
    pub last_sampled_frame: Option<u64>,
}

/// Counts the tracked currency.
#[derive(Debug)]
pub struct CurrencyAggregator {
    tables: DenominationSet,
    providers: ProviderRegistry,
    /// Token the current resolution belongs to.
    resolved_token: Option<String>,
    holding: CurrencyHolding,
    outcome: CountOutcome,
}

impl CurrencyAggregator {
    /// Creates an aggregator.
    #[must_use]
    pub fn new(tables: impl Into<DenominationSet>, providers: ProviderRegistry) -> Self {
        Self {
            tables: tables.into(),
            providers,
            resolved_token: None,
            holding: CurrencyHolding::default(),
            outcome: CountOutcome::Unresolved,
        }
    }

    /// Builtin coin table and the stock provider bindings.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DenominationSet::builtin(), ProviderRegistry::with_default_bindings())
    }

    /// Provider registry, for late registration.
    pub fn providers_mut(&mut self) -> &mut ProviderRegistry {
        &mut self.providers
    }

    /// Last outcome.
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> CountOutcome {
        self.outcome
    }

    /// Last sampled holding.
    #[inline]
    #[must_use]
    pub const fn holding(&self) -> &CurrencyHolding {
        &self.holding
    }

    /// Forces the next tick to recount even within the same frame.
    pub fn mark_inventory_changed(&mut self) {
        self.holding.last_sampled_frame = None;
    }

    /// Forgets the resolution and the last sample.
    pub fn reset(&mut self) {
        self.resolved_token = None;
        self.holding = CurrencyHolding::default();
        self.outcome = CountOutcome::Unresolved;
    }

    /// Samples the inventory for `tracked`.
    ///
    /// Skips recomputation when `frame_id` was already sampled for the
    /// same token.
    pub fn on_tick(
        &mut self,
        tracked: &str,
        frame_id: u64,
        registry: &dyn ItemRegistry,
        inventory: &dyn InventorySnapshot,
    ) -> CountOutcome {
        if self.resolved_token.as_deref() != Some(tracked) {
            self.resolve(tracked, registry);
        }

        let Some(identity) = self.holding.tracked_identity.as_ref() else {
            self.outcome = CountOutcome::Unresolved;
            return self.outcome;
        };

        if self.holding.last_sampled_frame == Some(frame_id) {
            return self.outcome;
        }

        let physical = match self.tables.table_for_base(identity) {
            Some(table) => count_denominated(table, inventory),
            None => count_plain(identity, inventory),
        };
        let external = if self.providers.is_external(identity) {
            self.providers.lookup(identity)
        } else {
            0
        };
        let total = physical.saturating_add(external);

        tracing::trace!(identity = %identity, physical, external, frame_id, "Currency sampled");

        self.holding.total_count = total;
        self.holding.last_sampled_frame = Some(frame_id);
        self.outcome = CountOutcome::Counted(total);
        self.outcome
    }

    fn resolve(&mut self, tracked: &str, registry: &dyn ItemRegistry) {
        let identity = match registry.resolve(tracked) {
            Ok(identity) => Some(identity),
            Err(err) => {
                tracing::warn!(token = tracked, error = %err, "Tracked item cannot be resolved");
                None
            }
        };
        self.resolved_token = Some(tracked.to_string());
        self.holding = CurrencyHolding {
            tracked_identity: identity,
            total_count: 0,
            last_sampled_frame: None,
        };
    }
}

impl Default for CurrencyAggregator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Sums matching stacks across every slot group.
fn count_plain(identity: &ItemIdentity, inventory: &dyn InventorySnapshot) -> u64 {
    SlotGroup::ALL
        .iter()
        .flat_map(|&group| inventory.slots_in(group))
        .filter(|stack| !stack.is_empty() && &stack.identity == identity)
        .fold(0u64, |acc, stack| acc.saturating_add(u64::from(stack.count)))
}

/// Converts every tier to base units, unpacking the table's containers.
fn count_denominated(table: &DenominationTable, inventory: &dyn InventorySnapshot) -> u64 {
    SlotGroup::ALL.iter().fold(0u64, |acc, &group| {
        acc.saturating_add(sum_stacks(table, inventory, inventory.slots_in(group), 0))
    })
}

fn sum_stacks(table: &DenominationTable, inventory: &dyn InventorySnapshot, stacks: &[ItemStack], depth: u32) -> u64 {
    let mut total = 0u64;
    for stack in stacks.iter().filter(|s| !s.is_empty()) {
        if let Some(multiplier) = table.multiplier_of(&stack.identity) {
            total = total.saturating_add(u64::from(stack.count).saturating_mul(multiplier));
        } else if table.is_container(&stack.identity) {
            total = total.saturating_add(
                unpack_value(table, inventory, stack, depth).saturating_mul(u64::from(stack.count)),
            );
        }
    }
    total
}

fn unpack_value(table: &DenominationTable, inventory: &dyn InventorySnapshot, stack: &ItemStack, depth: u32) -> u64 {
    if depth >= MAX_CONTAINER_DEPTH {
        tracing::debug!(container = %stack.identity, depth, "Container nesting too deep, skipped");
        return 0;
    }
    let Some(payload) = stack.payload else {
        return 0;
    };
    match inventory.unpack_container(&stack.identity, payload) {
        Some(contents) => sum_stacks(table, inventory, &contents, depth + 1),
        None => {
            tracing::debug!(container = %stack.identity, "Container contents unavailable");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::EconomyResult;
    use crate::identity::StaticItemRegistry;
    use crate::inventory::{Inventory, StackPayload};
    use crate::provider::CrossSystemProvider;

    fn id(token: &str) -> ItemIdentity {
        ItemIdentity::parse(token).unwrap()
    }

    fn registry() -> StaticItemRegistry {
        StaticItemRegistry::with_items([
            "diamond",
            "coinage:copper_coin",
            "coinage:silver_coin",
            "coinage:gold_coin",
            "coinage:coin_pouch",
            "kubejs:coin",
        ])
    }

    fn coins(copper: u32, silver: u32, gold: u32) -> Vec<ItemStack> {
        vec![
            ItemStack::new(id("coinage:copper_coin"), copper),
            ItemStack::new(id("coinage:silver_coin"), silver),
            ItemStack::new(id("coinage:gold_coin"), gold),
        ]
    }

    #[test]
    fn test_denominations_convert_to_base() {
        let mut inventory = Inventory::new();
        for stack in coins(3, 1, 1) {
            inventory.push(SlotGroup::Main, stack);
        }
        let mut counter = CurrencyAggregator::with_defaults();
        let outcome = counter.on_tick("coinage:copper_coin", 1, &registry(), &inventory);
        assert_eq!(outcome, CountOutcome::Counted(3 + 9 + 81));
    }

    #[test]
    fn test_pouch_counts_only_when_unpackable() {
        let mut inventory = Inventory::new();
        let payload = inventory.store_container(coins(2, 0, 0));
        inventory.push(
            SlotGroup::Main,
            ItemStack::new(id("coinage:coin_pouch"), 1).with_payload(payload),
        );
        let registry = registry();
        let mut counter = CurrencyAggregator::with_defaults();

        assert_eq!(counter.on_tick("coinage:copper_coin", 1, &registry, &inventory), CountOutcome::Counted(2));

        inventory.set_unpack_enabled(false);
        assert_eq!(counter.on_tick("coinage:copper_coin", 2, &registry, &inventory), CountOutcome::Counted(0));
    }

    #[test]
    fn test_self_containing_pouch_is_bounded() {
        let mut inventory = Inventory::new();
        let pouch = ItemStack::new(id("coinage:coin_pouch"), 1).with_payload(StackPayload(0));
        let mut contents = coins(1, 0, 0);
        contents.push(pouch.clone());
        assert_eq!(inventory.store_container(contents), StackPayload(0));
        inventory.push(SlotGroup::Main, pouch);

        let mut counter = CurrencyAggregator::with_defaults();
        let outcome = counter.on_tick("coinage:copper_coin", 1, &registry(), &inventory);
        assert_eq!(outcome, CountOutcome::Counted(u64::from(MAX_CONTAINER_DEPTH)));
    }

    #[test]
    fn test_plain_item_sums_groups() {
        let mut inventory = Inventory::new();
        inventory
            .push(SlotGroup::Main, ItemStack::new(id("diamond"), 5))
            .push(SlotGroup::Main, ItemStack::new(id("diamond"), 7))
            .push(SlotGroup::Offhand, ItemStack::new(id("diamond"), 1))
            .push(SlotGroup::Armor, ItemStack::new(id("coinage:gold_coin"), 1));

        let mut counter = CurrencyAggregator::with_defaults();
        assert_eq!(counter.on_tick("diamond", 1, &registry(), &inventory), CountOutcome::Counted(13));
    }

    #[test]
    fn test_same_frame_is_not_resampled() {
        let mut inventory = Inventory::new();
        inventory.push(SlotGroup::Main, ItemStack::new(id("diamond"), 5));
        let registry = registry();
        let mut counter = CurrencyAggregator::with_defaults();

        assert_eq!(counter.on_tick("diamond", 7, &registry, &inventory), CountOutcome::Counted(5));
        inventory.push(SlotGroup::Main, ItemStack::new(id("diamond"), 5));
        assert_eq!(counter.on_tick("diamond", 7, &registry, &inventory), CountOutcome::Counted(5));

        counter.mark_inventory_changed();
        assert_eq!(counter.on_tick("diamond", 7, &registry, &inventory), CountOutcome::Counted(10));
        assert_eq!(counter.holding().last_sampled_frame, Some(7));
    }

    #[test]
    fn test_unresolved_identity() {
        let inventory = Inventory::new();
        let registry = registry();
        let mut counter = CurrencyAggregator::with_defaults();

        assert_eq!(counter.on_tick("unknown:thing", 1, &registry, &inventory), CountOutcome::Unresolved);
        assert_eq!(counter.on_tick("Not A Token", 2, &registry, &inventory), CountOutcome::Unresolved);
        assert!(counter.holding().tracked_identity.is_none());

        assert_eq!(counter.on_tick("diamond", 3, &registry, &inventory), CountOutcome::Counted(0));
    }

    #[test]
    fn test_external_balance_added() {
        struct Wallet;
        impl CrossSystemProvider for Wallet {
            fn name(&self) -> &str {
                "sdmshop"
            }
            fn try_get_value(&self, _key: &ItemIdentity) -> EconomyResult<u64> {
                Ok(40)
            }
        }

        let mut inventory = Inventory::new();
        inventory.push(SlotGroup::Main, ItemStack::new(id("kubejs:coin"), 2));
        let registry = registry();

        let mut counter = CurrencyAggregator::with_defaults();
        assert_eq!(counter.on_tick("kubejs:coin", 1, &registry, &inventory), CountOutcome::Counted(2));

        counter.providers_mut().register(Arc::new(Wallet));
        counter.mark_inventory_changed();
        assert_eq!(counter.on_tick("kubejs:coin", 1, &registry, &inventory), CountOutcome::Counted(42));
    }
}
