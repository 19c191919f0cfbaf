//! Integration test for currency aggregation through the public API.

use std::sync::Arc;

use almanac_economy::{
    CountOutcome, CrossSystemProvider, CurrencyAggregator, DenominationSet, EconomyError,
    EconomyResult, Inventory, ItemIdentity, ItemStack, ProviderRegistry, SlotGroup,
    StaticItemRegistry,
};

const SHELLS: &str = r#"
[[table]]
name = "shells"
container = "sea:clam"
denominations = [
    { item = "sea:shell", multiplier = 1 },
    { item = "sea:pearl", multiplier = 50 },
]
"#;

fn id(token: &str) -> ItemIdentity {
    ItemIdentity::parse(token).unwrap()
}

struct FlakyWallet {
    fail: bool,
}

impl CrossSystemProvider for FlakyWallet {
    fn name(&self) -> &str {
        "bank"
    }

    fn try_get_value(&self, key: &ItemIdentity) -> EconomyResult<u64> {
        if self.fail {
            Err(EconomyError::LookupFailed {
                provider: "bank".to_string(),
                reason: format!("no account for {key}"),
            })
        } else {
            Ok(1_000)
        }
    }
}

#[test]
fn test_custom_table_with_container() {
    let tables = DenominationSet::from_toml_str(SHELLS).unwrap();
    let registry = StaticItemRegistry::with_items(["sea:shell", "sea:pearl", "sea:clam"]);

    let mut inventory = Inventory::new();
    let clam = inventory.store_container(vec![
        ItemStack::new(id("sea:pearl"), 1),
        ItemStack::new(id("sea:shell"), 5),
    ]);
    inventory
        .push(SlotGroup::Main, ItemStack::new(id("sea:clam"), 2).with_payload(clam))
        .push(SlotGroup::Armor, ItemStack::new(id("sea:shell"), 3));

    let mut counter = CurrencyAggregator::new(tables, ProviderRegistry::new());
    assert_eq!(
        counter.on_tick("sea:shell", 1, &registry, &inventory),
        CountOutcome::Counted(2 * 55 + 3)
    );

    // Tracking a higher tier counts it as a plain item.
    assert_eq!(counter.on_tick("sea:pearl", 2, &registry, &inventory), CountOutcome::Counted(0));
}

#[test]
fn test_external_balance_is_best_effort() {
    let registry = StaticItemRegistry::with_items(["shop:token"]);
    let mut inventory = Inventory::new();
    inventory.push(SlotGroup::Main, ItemStack::new(id("shop:token"), 4));

    let mut providers = ProviderRegistry::new();
    providers.bind(id("shop:token"), "bank");
    providers.register(Arc::new(FlakyWallet { fail: true }));

    let mut counter = CurrencyAggregator::new(DenominationSet::default(), providers);
    for frame in 0..3 {
        assert_eq!(
            counter.on_tick("shop:token", frame, &registry, &inventory),
            CountOutcome::Counted(4)
        );
    }

    counter.providers_mut().register(Arc::new(FlakyWallet { fail: false }));
    assert_eq!(
        counter.on_tick("shop:token", 3, &registry, &inventory),
        CountOutcome::Counted(1_004)
    );
}

#[test]
fn test_identity_change_resets_sample() {
    let registry = StaticItemRegistry::with_items(["diamond", "emerald"]);
    let mut inventory = Inventory::new();
    inventory
        .push(SlotGroup::Main, ItemStack::new(id("diamond"), 2))
        .push(SlotGroup::Main, ItemStack::new(id("emerald"), 9));

    let mut counter = CurrencyAggregator::with_defaults();
    assert_eq!(counter.on_tick("diamond", 5, &registry, &inventory), CountOutcome::Counted(2));
    // Same frame, new identity: recounted.
    assert_eq!(counter.on_tick("minecraft:emerald", 5, &registry, &inventory), CountOutcome::Counted(9));
    assert_eq!(
        counter.holding().tracked_identity.as_ref().map(ItemIdentity::as_str),
        Some("minecraft:emerald")
    );
}
