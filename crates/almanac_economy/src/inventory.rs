//! # Inventory Snapshot
//!
//! Read-only view of the player's containers, delivered by the host each
//! tick. Stacks may carry an opaque payload that the host can unpack into
//! the stacks of a nested container (coin pouches).

use std::collections::HashMap;

use crate::identity::ItemIdentity;

/// A group of inventory slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotGroup {
    /// Main inventory including the hotbar.
    Main,
    /// Offhand slot.
    Offhand,
    /// Armor slots.
    Armor,
}

impl SlotGroup {
    /// All groups in scan order.
    pub const ALL: [Self; 3] = [Self::Main, Self::Offhand, Self::Armor];

    const fn index(self) -> usize {
        match self {
            Self::Main => 0,
            Self::Offhand => 1,
            Self::Armor => 2,
        }
    }
}

/// Opaque handle to the contents of a container stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StackPayload(pub u64);

/// A stack of items in one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStack {
    /// The item.
    pub identity: ItemIdentity,
    /// Number of items, 0 for an empty slot.
    pub count: u32,
    /// Nested container contents, if this stack is a container.
    pub payload: Option<StackPayload>,
}

impl ItemStack {
    /// Creates a plain stack.
    #[inline]
    #[must_use]
    pub const fn new(identity: ItemIdentity, count: u32) -> Self {
        Self {
            identity,
            count,
            payload: None,
        }
    }

    /// Attaches a container payload.
    #[inline]
    #[must_use]
    pub fn with_payload(mut self, payload: StackPayload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Returns true if this slot is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Host inventory contract.
pub trait InventorySnapshot {
    /// Stacks in a slot group.
    fn slots_in(&self, group: SlotGroup) -> &[ItemStack];

    /// Contents of a nested container, or `None` when the host cannot
    /// unpack it (integration absent, unknown payload).
    fn unpack_container(&self, identity: &ItemIdentity, payload: StackPayload) -> Option<Vec<ItemStack>> {
        let _ = (identity, payload);
        None
    }
}

/// In-memory inventory.
///
/// Used by hosts without a native inventory view and by tests.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    groups: [Vec<ItemStack>; 3],
    containers: HashMap<StackPayload, Vec<ItemStack>>,
    next_payload: u64,
    /// When false, [`InventorySnapshot::unpack_container`] always fails.
    unpack_enabled: bool,
}

impl Inventory {
    /// Creates an empty inventory that can unpack its containers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            unpack_enabled: true,
            ..Self::default()
        }
    }

    /// Adds a stack to a group.
    pub fn push(&mut self, group: SlotGroup, stack: ItemStack) -> &mut Self {
        self.groups[group.index()].push(stack);
        self
    }

    /// Stores container contents and returns the payload referring to them.
    pub fn store_container(&mut self, contents: Vec<ItemStack>) -> StackPayload {
        let payload = StackPayload(self.next_payload);
        self.next_payload += 1;
        self.containers.insert(payload, contents);
        payload
    }

    /// Enables or disables container unpacking.
    pub fn set_unpack_enabled(&mut self, enabled: bool) {
        self.unpack_enabled = enabled;
    }

    /// Removes every stack from a group.
    pub fn clear_group(&mut self, group: SlotGroup) {
        self.groups[group.index()].clear();
    }

    /// Mutable stacks of a group.
    pub fn group_mut(&mut self, group: SlotGroup) -> &mut Vec<ItemStack> {
        &mut self.groups[group.index()]
    }

    /// Counts an item across all groups, ignoring nested containers.
    #[must_use]
    pub fn count_item(&self, identity: &ItemIdentity) -> u64 {
        self.groups
            .iter()
            .flatten()
            .filter(|s| &s.identity == identity)
            .map(|s| u64::from(s.count))
            .sum()
    }
}

impl InventorySnapshot for Inventory {
    fn slots_in(&self, group: SlotGroup) -> &[ItemStack] {
        &self.groups[group.index()]
    }

    fn unpack_container(&self, _identity: &ItemIdentity, payload: StackPayload) -> Option<Vec<ItemStack>> {
        if !self.unpack_enabled {
            return None;
        }
        self.containers.get(&payload).cloned()
    }
}
