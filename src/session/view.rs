//! Read-only snapshot handed to the presentation layer

use super::{PlacedOrder, ShopSession};
use crate::abstractions::{IdGenerator, LineId, SlotId};
use crate::core::{checkout, CheckoutStep, LineKind, ShippingField};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub id: SlotId,
    pub item_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineView {
    pub id: LineId,
    pub kind: LineKind,
    pub label: String,
    pub price: u32,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMessage {
    pub field: ShippingField,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub tier_size: usize,
    pub tier_label: Option<String>,
    pub box_price: Option<u32>,
    pub slots: Vec<SlotView>,
    pub remaining: usize,
    pub can_finalize: bool,
    pub lines: Vec<LineView>,
    pub total: u64,
    pub cart_open: bool,
    pub step: CheckoutStep,
    pub can_advance: bool,
    pub field_errors: Vec<FieldMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_order: Option<PlacedOrder>,
}

impl<G: IdGenerator> ShopSession<G> {
    /// Snapshot the state the storefront renders
    pub fn view(&self) -> SessionView {
        let selection = self.selection();
        let tier = self.catalog().tier(selection.active_tier_size());

        SessionView {
            tier_size: selection.active_tier_size(),
            tier_label: tier.map(|t| t.label.clone()),
            box_price: tier.and_then(|t| t.fixed_price),
            slots: selection
                .slots()
                .iter()
                .map(|slot| SlotView {
                    id: slot.id.clone(),
                    item_id: slot.item.id.clone(),
                    name: slot.item.name.clone(),
                })
                .collect(),
            remaining: selection.remaining(),
            can_finalize: selection.is_full(),
            lines: self
                .cart()
                .lines()
                .iter()
                .map(|line| LineView {
                    id: line.id.clone(),
                    kind: line.kind,
                    label: line.label.clone(),
                    price: line.price,
                    items: line.items.iter().map(|item| item.name.clone()).collect(),
                })
                .collect(),
            total: self.cart().total(),
            cart_open: self.is_cart_open(),
            step: self.checkout().step,
            can_advance: checkout::can_advance(self.checkout(), self.cart().is_empty()),
            field_errors: self
                .checkout()
                .field_errors
                .messages()
                .into_iter()
                .map(|(field, message)| FieldMessage { field, message })
                .collect(),
            last_order: self.last_order().cloned(),
        }
    }
}

impl fmt::Display for SessionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tier_size == 1 {
            writeln!(f, "Mode: individual cookies")?;
        } else {
            writeln!(
                f,
                "Box: {}/{} ({}){}",
                self.slots.len(),
                self.tier_size,
                self.tier_label.as_deref().unwrap_or("custom"),
                self.box_price
                    .map(|p| format!(" {p} SEK"))
                    .unwrap_or_default()
            )?;
            for slot in &self.slots {
                writeln!(f, "  [{}] {}", slot.id, slot.name)?;
            }
            if self.remaining > 0 {
                writeln!(f, "  Add {} More", self.remaining)?;
            }
        }

        writeln!(f, "Cart ({} lines):", self.lines.len())?;
        for line in &self.lines {
            writeln!(f, "  {} {} - {} SEK", line.id, line.label, line.price)?;
        }
        writeln!(f, "Total: {} SEK", self.total)?;
        writeln!(f, "Checkout: {:?}", self.step)?;
        for error in &self.field_errors {
            writeln!(f, "  {}: {}", error.field, error.message)?;
        }
        if let Some(order) = &self.last_order {
            writeln!(f, "Last order: {} ({} SEK)", order.id, order.total)?;
        }
        Ok(())
    }
}
