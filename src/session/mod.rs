//! Storefront session: one state struct driven by discrete intents
//!
//! [`ShopSession`] is the imperative shell around the pure transitions in
//! [`crate::core`]. Every user action arrives as an [`Intent`] through
//! [`ShopSession::dispatch`], which threads the relevant part of the state
//! through a pure function and stores the result. Nothing here blocks or
//! spawns; one session serves one visitor.

pub mod intents;
pub mod order;
pub mod view;


pub use intents::{IgnoreReason, Intent, Outcome};
pub use order::PlacedOrder;
pub use view::{LineView, SessionView, SlotView};

use crate::abstractions::{IdGenerator, IdKind, OrderId, UuidIds};
use crate::catalog::Catalog;
use crate::config::ShopConfig;
use crate::core::{
    cart, checkout, selection, AddOutcome, AdvanceOutcome, CheckoutState, CheckoutStep,
    CloseEffect, OrderList, SelectionState, ShippingDetails, ShippingField,
};
use chrono::Utc;
use tracing::{debug, info, warn};

/// Box size the storefront opens on
pub const DEFAULT_TIER_SIZE: usize = 5;

pub struct ShopSession<G: IdGenerator = UuidIds> {
    catalog: Catalog,
    locality: String,
    selection: SelectionState,
    cart: OrderList,
    checkout: CheckoutState,
    shipping: ShippingDetails,
    instructions: String,
    cart_open: bool,
    last_order: Option<PlacedOrder>,
    ids: G,
}

impl ShopSession<UuidIds> {
    /// Create a session with random identifiers
    pub fn new(catalog: Catalog, locality: impl Into<String>) -> Self {
        Self::with_ids(catalog, locality, UuidIds)
    }
}

impl<G: IdGenerator> ShopSession<G> {
    /// Create a session with an injected identifier source
    pub fn with_ids(catalog: Catalog, locality: impl Into<String>, ids: G) -> Self {
        let locality = locality.into();
        Self {
            catalog,
            selection: SelectionState::new(DEFAULT_TIER_SIZE),
            cart: OrderList::new(),
            checkout: CheckoutState::new(),
            shipping: ShippingDetails::for_locality(&locality),
            instructions: String::new(),
            cart_open: false,
            last_order: None,
            locality,
            ids,
        }
    }

    /// Create a session using the configured locality and opening box size
    pub fn from_config(config: &ShopConfig, catalog: Catalog, ids: G) -> Self {
        Self::with_ids(catalog, config.locality.clone(), ids)
            .with_tier_size(config.default_tier_size)
    }

    /// Start on a different box size
    pub fn with_tier_size(mut self, size: usize) -> Self {
        self.selection = SelectionState::new(size);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn locality(&self) -> &str {
        &self.locality
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn cart(&self) -> &OrderList {
        &self.cart
    }

    pub fn checkout(&self) -> &CheckoutState {
        &self.checkout
    }

    pub fn shipping(&self) -> &ShippingDetails {
        &self.shipping
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// The order recorded when checkout last reached confirmation
    pub fn last_order(&self) -> Option<&PlacedOrder> {
        self.last_order.as_ref()
    }

    /// Apply one user intent
    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        debug!("Dispatching intent: {}", intent.description());

        if self.checkout.is_confirmed() && !intent.allowed_while_confirmed() {
            warn!("Ignored intent: {}", IgnoreReason::AlreadyConfirmed);
            return Outcome::Ignored(IgnoreReason::AlreadyConfirmed);
        }

        let outcome = match intent {
            Intent::SetTierSize { size } => self.set_tier_size(size),
            Intent::AddItem { item_id } => self.add_item(&item_id),
            Intent::RemoveItem { slot_id } => {
                if !self.selection.slots().iter().any(|slot| slot.id == slot_id) {
                    Outcome::Ignored(IgnoreReason::UnknownSlot(slot_id))
                } else {
                    let state = std::mem::take(&mut self.selection);
                    self.selection = selection::remove_item(state, &slot_id);
                    Outcome::Applied
                }
            }
            Intent::FinalizeBundle => self.finalize_bundle(),
            Intent::RemoveLine { line_id } => {
                if !self.cart.contains(&line_id) {
                    Outcome::Ignored(IgnoreReason::UnknownLine(line_id))
                } else if self.checkout.step != CheckoutStep::Review {
                    Outcome::Ignored(IgnoreReason::CartLocked)
                } else {
                    let cart = std::mem::take(&mut self.cart);
                    self.cart = cart.remove(&line_id);
                    Outcome::Applied
                }
            }
            Intent::OpenCart => {
                self.cart_open = true;
                Outcome::Applied
            }
            Intent::CloseCart => self.close_cart(),
            Intent::Advance => self.advance(),
            Intent::EditField { field, value } => {
                if field == ShippingField::City {
                    Outcome::Ignored(IgnoreReason::LockedField(field))
                } else {
                    let shipping = std::mem::take(&mut self.shipping);
                    self.shipping = shipping.with_field(field, value);
                    Outcome::Applied
                }
            }
            Intent::SetInstructions { text } => {
                self.instructions = text;
                Outcome::Applied
            }
        };

        if let Outcome::Ignored(reason) = &outcome {
            warn!("Ignored intent: {}", reason);
        }
        outcome
    }

    fn set_tier_size(&mut self, size: usize) -> Outcome {
        if self.catalog.tier(size).is_none() {
            return Outcome::Ignored(IgnoreReason::UnknownTier(size));
        }

        let before = self.selection.len();
        let state = std::mem::take(&mut self.selection);
        self.selection = selection::set_tier_size(state, size);

        let dropped = before - self.selection.len();
        if dropped > 0 {
            debug!("Box shrunk to {}, dropped {} cookies", size, dropped);
        }
        Outcome::Applied
    }

    fn add_item(&mut self, item_id: &str) -> Outcome {
        let Some(item) = self.catalog.item(item_id) else {
            return Outcome::Ignored(IgnoreReason::UnknownItem(item_id.to_string()));
        };

        let state = std::mem::take(&mut self.selection);
        let (state, outcome) = selection::add_item(state, item, &mut self.ids);
        self.selection = state;

        match outcome {
            AddOutcome::Slotted(slot_id) => {
                debug!(
                    "Placed {} in slot {} ({}/{})",
                    item_id,
                    slot_id,
                    self.selection.len(),
                    self.selection.capacity()
                );
                Outcome::Applied
            }
            AddOutcome::Individual(line) => {
                debug!("Added {} to cart for {} SEK", line.label, line.price);
                self.append_line(line);
                Outcome::Applied
            }
            AddOutcome::AtCapacity => Outcome::Ignored(IgnoreReason::BoxFull),
        }
    }

    fn finalize_bundle(&mut self) -> Outcome {
        let remaining = self.selection.remaining();
        let state = std::mem::take(&mut self.selection);
        let (state, line) = selection::finalize_bundle(state, &self.catalog.tiers, &mut self.ids);
        self.selection = state;

        match line {
            Some(line) => {
                debug!("Added {} to cart for {} SEK", line.label, line.price);
                self.append_line(line);
                self.checkout = checkout::reset(std::mem::take(&mut self.checkout));
                Outcome::Applied
            }
            None => Outcome::Ignored(IgnoreReason::BoxIncomplete { remaining }),
        }
    }

    fn append_line(&mut self, line: cart::OrderLine) {
        let cart = std::mem::take(&mut self.cart);
        self.cart = cart.append(line);
        self.cart_open = true;
    }

    fn advance(&mut self) -> Outcome {
        let step = self.checkout.step;
        let state = std::mem::take(&mut self.checkout);
        let (state, outcome) =
            checkout::advance(state, self.cart.is_empty(), &self.shipping, &self.locality);
        self.checkout = state;

        match outcome {
            AdvanceOutcome::Advanced(CheckoutStep::Confirmed) => {
                self.place_order();
                Outcome::Applied
            }
            AdvanceOutcome::Advanced(next) => {
                debug!("Checkout moved from {:?} to {:?}", step, next);
                Outcome::Applied
            }
            AdvanceOutcome::Rejected => Outcome::Rejected(self.checkout.field_errors.clone()),
            AdvanceOutcome::Blocked if step == CheckoutStep::Confirmed => {
                Outcome::Ignored(IgnoreReason::AlreadyConfirmed)
            }
            AdvanceOutcome::Blocked => Outcome::Ignored(IgnoreReason::EmptyCart),
        }
    }

    fn place_order(&mut self) {
        let id = OrderId::new(self.ids.next_id(IdKind::Order));
        let order = PlacedOrder::new(
            id,
            &self.cart,
            &self.shipping,
            &self.instructions,
            Utc::now(),
        );
        info!(
            "Order {} placed: {} lines, {} SEK",
            order.id,
            order.lines.len(),
            order.total
        );
        self.last_order = Some(order);
    }

    /// Dismissal is the moment a confirmed order is cleared away
    fn close_cart(&mut self) -> Outcome {
        self.cart_open = false;

        let state = std::mem::take(&mut self.checkout);
        let (state, effect) = checkout::close(state);
        self.checkout = state;

        if effect == CloseEffect::ResetOrder {
            self.cart = std::mem::take(&mut self.cart).clear();
            self.shipping = ShippingDetails::for_locality(&self.locality);
            self.instructions.clear();
            debug!("Order confirmation dismissed, cart reset");
        }
        Outcome::Applied
    }
}
