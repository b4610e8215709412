//! User intents forwarded by the presentation layer and their outcomes

use crate::abstractions::{LineId, SlotId};
use crate::core::{FieldErrors, ShippingField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete user action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    /// Pick a box size (1 = individual cookies)
    SetTierSize { size: usize },
    /// Add a cookie to the box, or straight to the cart in individual mode
    AddItem { item_id: String },
    /// Take a cookie back out of the box
    RemoveItem { slot_id: SlotId },
    /// Put the full box in the cart
    FinalizeBundle,
    /// Drop a line from the cart
    RemoveLine { line_id: LineId },
    OpenCart,
    /// Dismiss the cart drawer; after a confirmed order this resets it
    CloseCart,
    /// Move the checkout one step forward
    Advance,
    /// Edit one shipping field
    EditField { field: ShippingField, value: String },
    /// Free-text note for the bakery
    SetInstructions { text: String },
}

impl Intent {
    /// Get a human-readable description of the intent
    pub fn description(&self) -> String {
        match self {
            Intent::SetTierSize { size: 1 } => "Pick flavors individually".to_string(),
            Intent::SetTierSize { size } => format!("Switch to box of {size}"),
            Intent::AddItem { item_id } => format!("Add {item_id}"),
            Intent::RemoveItem { slot_id } => format!("Remove slot {slot_id}"),
            Intent::FinalizeBundle => "Add box to cart".to_string(),
            Intent::RemoveLine { line_id } => format!("Remove cart line {line_id}"),
            Intent::OpenCart => "Open cart".to_string(),
            Intent::CloseCart => "Close cart".to_string(),
            Intent::Advance => "Continue checkout".to_string(),
            Intent::EditField { field, .. } => format!("Edit {field}"),
            Intent::SetInstructions { .. } => "Set special instructions".to_string(),
        }
    }

    /// Whether the intent may run while a confirmed order awaits dismissal
    pub fn allowed_while_confirmed(&self) -> bool {
        matches!(self, Intent::OpenCart | Intent::CloseCart | Intent::Advance)
    }
}

/// Why an intent was a guarded no-op
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    UnknownTier(usize),
    UnknownItem(String),
    BoxFull,
    UnknownSlot(SlotId),
    BoxIncomplete { remaining: usize },
    UnknownLine(LineId),
    /// Lines are only removable while the cart is under review
    CartLocked,
    EmptyCart,
    AlreadyConfirmed,
    LockedField(ShippingField),
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::UnknownTier(size) => write!(f, "no box of {size} is offered"),
            IgnoreReason::UnknownItem(id) => write!(f, "unknown cookie '{id}'"),
            IgnoreReason::BoxFull => write!(f, "box is already full"),
            IgnoreReason::UnknownSlot(id) => write!(f, "no slot {id} in the box"),
            IgnoreReason::BoxIncomplete { remaining: 0 } => {
                write!(f, "individual cookies are not boxed")
            }
            IgnoreReason::BoxIncomplete { remaining } => write!(f, "add {remaining} more"),
            IgnoreReason::UnknownLine(id) => write!(f, "no cart line {id}"),
            IgnoreReason::CartLocked => write!(f, "cart can only be edited during review"),
            IgnoreReason::EmptyCart => write!(f, "cart is empty"),
            IgnoreReason::AlreadyConfirmed => write!(f, "order already placed"),
            IgnoreReason::LockedField(field) => write!(f, "{field} cannot be changed"),
        }
    }
}

/// What [`super::ShopSession::dispatch`] did with an intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
    /// Shipping validation failed; the checkout stays at the shipping step
    Rejected(FieldErrors),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Applied => write!(f, "ok"),
            Outcome::Ignored(reason) => write!(f, "ignored: {reason}"),
            Outcome::Rejected(errors) => {
                let messages: Vec<String> = errors
                    .messages()
                    .into_iter()
                    .map(|(field, message)| format!("{field}: {message}"))
                    .collect();
                write!(f, "rejected: {}", messages.join("; "))
            }
        }
    }
}
