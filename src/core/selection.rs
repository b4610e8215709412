//! Pure box assembly transitions
//!
//! A [`SelectionState`] tracks the active box size and the cookies placed in
//! the box so far. Every transition takes the state by value and returns the
//! next one; invalid requests (overfilling, finalizing a partial box,
//! removing an unknown slot) leave the state unchanged instead of failing.
//!
//! # Invariants
//!
//! - `slots.len() <= capacity` after every transition
//! - a tier size of 1 never fills slots: adds become individual order lines
//! - a finalized box is priced from its tier, never from its items

use super::cart::OrderLine;
use crate::abstractions::{IdGenerator, IdKind, LineId, SlotId};
use crate::catalog::{BundleTier, CatalogItem};
use serde::{Deserialize, Serialize};

/// One filled position of the box being assembled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: SlotId,
    pub item: CatalogItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    active_tier_size: usize,
    slots: Vec<Slot>,
}

/// Result of [`add_item`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item went into a new slot of the box
    Slotted(SlotId),
    /// Individual mode: the item bypassed the box and became an order line
    Individual(OrderLine),
    /// The box is already full; nothing changed
    AtCapacity,
}

impl SelectionState {
    /// Start an empty selection; a size of zero is treated as individual mode
    pub fn new(tier_size: usize) -> Self {
        Self {
            active_tier_size: tier_size.max(1),
            slots: Vec::new(),
        }
    }

    pub fn active_tier_size(&self) -> usize {
        self.active_tier_size
    }

    pub fn capacity(&self) -> usize {
        self.active_tier_size
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_individual(&self) -> bool {
        self.active_tier_size == 1
    }

    /// Slots still open in the box ("Add N More"); zero in individual mode
    pub fn remaining(&self) -> usize {
        if self.is_individual() {
            0
        } else {
            self.capacity().saturating_sub(self.slots.len())
        }
    }

    /// A box can be finalized only when every slot is filled
    pub fn is_full(&self) -> bool {
        !self.is_individual() && self.slots.len() == self.capacity()
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Pure: Switch the active box size.
///
/// Shrinking below the current fill keeps the oldest slots and silently
/// drops the rest. A size of zero is ignored.
pub fn set_tier_size(mut state: SelectionState, size: usize) -> SelectionState {
    if size == 0 {
        return state;
    }
    state.active_tier_size = size;
    state.slots.truncate(size);
    state
}

/// Pure: Place an item.
///
/// In individual mode the item becomes an [`OrderLine`] priced at its unit
/// price and the slots are left alone. Otherwise it fills the next slot, or
/// the call is a no-op when the box is full.
pub fn add_item(
    mut state: SelectionState,
    item: &CatalogItem,
    ids: &mut impl IdGenerator,
) -> (SelectionState, AddOutcome) {
    if state.is_individual() {
        let line = OrderLine::individual(LineId::new(ids.next_id(IdKind::Line)), item.clone());
        return (state, AddOutcome::Individual(line));
    }

    if state.slots.len() >= state.capacity() {
        return (state, AddOutcome::AtCapacity);
    }

    let id = SlotId::new(ids.next_id(IdKind::Slot));
    state.slots.push(Slot {
        id: id.clone(),
        item: item.clone(),
    });
    (state, AddOutcome::Slotted(id))
}

/// Pure: Remove the slot with the given id; no-op if absent
pub fn remove_item(mut state: SelectionState, slot_id: &SlotId) -> SelectionState {
    state.slots.retain(|slot| &slot.id != slot_id);
    state
}

/// Pure: Turn a full box into a bundle line and empty the box.
///
/// Returns `None` and the unchanged state when the box is not full, when in
/// individual mode, or when `tiers` has no priced tier of the active size.
pub fn finalize_bundle(
    mut state: SelectionState,
    tiers: &[BundleTier],
    ids: &mut impl IdGenerator,
) -> (SelectionState, Option<OrderLine>) {
    if !state.is_full() {
        return (state, None);
    }

    let fixed_price = tiers
        .iter()
        .find(|tier| tier.size == state.active_tier_size)
        .and_then(|tier| tier.fixed_price);
    let Some(fixed_price) = fixed_price else {
        return (state, None);
    };

    let items = std::mem::take(&mut state.slots)
        .into_iter()
        .map(|slot| slot.item)
        .collect();
    let line = OrderLine::bundle(LineId::new(ids.next_id(IdKind::Line)), items, fixed_price);
    (state, Some(line))
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::abstractions::SequentialIds;
    use crate::catalog::Catalog;
    use proptest::prelude::*;

    // Strategy producing a sequence of catalog item indexes to add
    fn picks_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(0usize..5, 0..40)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: slots never exceed capacity, whatever is added
        #[test]
        fn prop_slots_never_exceed_capacity(
            size in prop::sample::select(vec![5usize, 10, 15]),
            picks in picks_strategy(),
        ) {
            let catalog = Catalog::stockholm();
            let mut ids = SequentialIds::new();
            let mut state = SelectionState::new(size);

            for pick in picks {
                state = add_item(state, &catalog.items[pick], &mut ids).0;
                prop_assert!(state.len() <= state.capacity());
            }
        }

        /// Property: n adds fill a box of n exactly; one more is a no-op
        #[test]
        fn prop_n_adds_fill_box(size in 2usize..20) {
            let catalog = Catalog::stockholm();
            let mut ids = SequentialIds::new();
            let mut state = SelectionState::new(size);

            for i in 0..size {
                let (next, outcome) = add_item(state, &catalog.items[i % 5], &mut ids);
                prop_assert!(matches!(outcome, AddOutcome::Slotted(_)));
                state = next;
            }
            prop_assert_eq!(state.len(), size);

            let (state, outcome) = add_item(state, &catalog.items[0], &mut ids);
            prop_assert_eq!(outcome, AddOutcome::AtCapacity);
            prop_assert_eq!(state.len(), size);
        }

        /// Property: shrinking keeps exactly the first k slots
        #[test]
        fn prop_shrink_keeps_prefix(fill_count in 0usize..15, k in 1usize..15) {
            let catalog = Catalog::stockholm();
            let mut ids = SequentialIds::new();
            let mut state = SelectionState::new(15);
            for i in 0..fill_count {
                state = add_item(state, &catalog.items[i % 5], &mut ids).0;
            }
            let before: Vec<SlotId> = state.slots().iter().map(|s| s.id.clone()).collect();

            let state = set_tier_size(state, k);
            let after: Vec<SlotId> = state.slots().iter().map(|s| s.id.clone()).collect();

            prop_assert_eq!(after.len(), fill_count.min(k));
            prop_assert_eq!(&before[..after.len()], &after[..]);
        }

        /// Property: individual adds always price at the unit price
        #[test]
        fn prop_individual_add_uses_unit_price(pick in 0usize..5) {
            let catalog = Catalog::stockholm();
            let mut ids = SequentialIds::new();
            let item = &catalog.items[pick];

            let (state, outcome) = add_item(SelectionState::new(1), item, &mut ids);
            prop_assert!(state.is_empty());
            match outcome {
                AddOutcome::Individual(line) => prop_assert_eq!(line.price, item.unit_price),
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
        }
    }
}
