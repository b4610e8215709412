//! Pure checkout flow transitions
//!
//! ```text
//!   Review ──advance (cart not empty)──► Shipping
//!     ▲                                    │
//!     │                      advance (details valid)
//!     │                                    ▼
//!     └──────────close (reset order)──── Confirmed
//! ```
//!
//! Closing the drawer at `Review` or `Shipping` leaves the flow untouched.
//! Leaving `Confirmed` is the only transition that asks the caller to clear
//! the order, and it happens on dismissal so the confirmation view stays
//! stable while it is displayed.

use super::validation::{validate, FieldErrors, ShippingDetails};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    #[default]
    Review,
    Shipping,
    Confirmed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutState {
    pub step: CheckoutStep,
    pub field_errors: FieldErrors,
}

/// Result of [`advance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the given step
    Advanced(CheckoutStep),
    /// Shipping details failed validation; `field_errors` is populated
    Rejected,
    /// Nothing to advance: empty cart at review, or already confirmed
    Blocked,
}

/// Side effect the caller must apply after [`close`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseEffect {
    None,
    /// Clear the cart and restore default shipping details
    ResetOrder,
}

impl CheckoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_confirmed(&self) -> bool {
        self.step == CheckoutStep::Confirmed
    }
}

/// Pure: Whether [`advance`] may leave the current step.
///
/// Both `Review` and `Shipping` need a non-empty cart; nothing follows
/// `Confirmed`. Shipping details are checked separately by [`advance`].
pub fn can_advance(state: &CheckoutState, cart_is_empty: bool) -> bool {
    match state.step {
        CheckoutStep::Review | CheckoutStep::Shipping => !cart_is_empty,
        CheckoutStep::Confirmed => false,
    }
}

/// Pure: Move one step forward.
///
/// `Review` and `Shipping` need a non-empty cart. `Shipping` also needs
/// details that pass [`validate`]; on failure the state stays in `Shipping`
/// with the errors recorded.
pub fn advance(
    mut state: CheckoutState,
    cart_is_empty: bool,
    details: &ShippingDetails,
    locality: &str,
) -> (CheckoutState, AdvanceOutcome) {
    if !can_advance(&state, cart_is_empty) {
        return (state, AdvanceOutcome::Blocked);
    }

    match state.step {
        CheckoutStep::Review => {
            state.step = CheckoutStep::Shipping;
            (state, AdvanceOutcome::Advanced(CheckoutStep::Shipping))
        }
        CheckoutStep::Shipping => {
            let errors = validate(details, locality);
            if errors.is_empty() {
                state.step = CheckoutStep::Confirmed;
                state.field_errors = FieldErrors::new();
                (state, AdvanceOutcome::Advanced(CheckoutStep::Confirmed))
            } else {
                state.field_errors = errors;
                (state, AdvanceOutcome::Rejected)
            }
        }
        CheckoutStep::Confirmed => (state, AdvanceOutcome::Blocked),
    }
}

/// Pure: Dismiss the checkout surface
pub fn close(state: CheckoutState) -> (CheckoutState, CloseEffect) {
    if state.is_confirmed() {
        (reset(state), CloseEffect::ResetOrder)
    } else {
        (state, CloseEffect::None)
    }
}

/// Pure: Back to `Review` with no errors
pub fn reset(_state: CheckoutState) -> CheckoutState {
    CheckoutState::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::ShippingField;

    fn valid_details() -> ShippingDetails {
        ShippingDetails::for_locality("Stockholm")
            .with_field(ShippingField::FullName, "Astrid Lind")
            .with_field(ShippingField::Email, "astrid@example.se")
            .with_field(ShippingField::Phone, "0701234567")
            .with_field(ShippingField::StreetAddress, "Sveavägen")
    }

    fn at_shipping() -> CheckoutState {
        CheckoutState {
            step: CheckoutStep::Shipping,
            field_errors: FieldErrors::new(),
        }
    }

    #[test]
    fn test_review_to_shipping() {
        let (state, outcome) = advance(CheckoutState::new(), false, &valid_details(), "Stockholm");
        assert_eq!(outcome, AdvanceOutcome::Advanced(CheckoutStep::Shipping));
        assert_eq!(state.step, CheckoutStep::Shipping);
    }

    #[test]
    fn test_review_with_empty_cart_is_blocked() {
        let (state, outcome) = advance(CheckoutState::new(), true, &valid_details(), "Stockholm");
        assert_eq!(outcome, AdvanceOutcome::Blocked);
        assert_eq!(state.step, CheckoutStep::Review);
    }

    #[test]
    fn test_shipping_to_confirmed() {
        let (state, outcome) = advance(at_shipping(), false, &valid_details(), "Stockholm");
        assert_eq!(outcome, AdvanceOutcome::Advanced(CheckoutStep::Confirmed));
        assert!(state.is_confirmed());
        assert!(state.field_errors.is_empty());
    }

    #[test]
    fn test_invalid_details_stay_in_shipping() {
        let details = valid_details()
            .with_field(ShippingField::FullName, "")
            .with_field(ShippingField::Email, "not-an-email");

        let (state, outcome) = advance(at_shipping(), false, &details, "Stockholm");
        assert_eq!(outcome, AdvanceOutcome::Rejected);
        assert_eq!(state.step, CheckoutStep::Shipping);
        assert!(state.field_errors.contains(ShippingField::FullName));
        assert!(state.field_errors.contains(ShippingField::Email));
        assert_eq!(state.field_errors.len(), 2);
    }

    #[test]
    fn test_errors_cleared_after_correction() {
        let (state, _) = advance(at_shipping(), false, &ShippingDetails::default(), "Stockholm");
        assert!(!state.field_errors.is_empty());

        let (state, outcome) = advance(state, false, &valid_details(), "Stockholm");
        assert_eq!(outcome, AdvanceOutcome::Advanced(CheckoutStep::Confirmed));
        assert!(state.field_errors.is_empty());
    }

    #[test]
    fn test_confirmed_cannot_advance() {
        let (state, _) = advance(at_shipping(), false, &valid_details(), "Stockholm");
        let (state, outcome) = advance(state, false, &valid_details(), "Stockholm");
        assert_eq!(outcome, AdvanceOutcome::Blocked);
        assert!(state.is_confirmed());
    }

    #[test]
    fn test_shipping_with_empty_cart_is_blocked() {
        let (state, outcome) = advance(at_shipping(), true, &valid_details(), "Stockholm");
        assert_eq!(outcome, AdvanceOutcome::Blocked);
        assert_eq!(state.step, CheckoutStep::Shipping);
        assert!(state.field_errors.is_empty());
    }

    #[test]
    fn test_can_advance_per_step() {
        assert!(can_advance(&CheckoutState::new(), false));
        assert!(!can_advance(&CheckoutState::new(), true));
        assert!(can_advance(&at_shipping(), false));
        assert!(!can_advance(&at_shipping(), true));

        let (confirmed, _) = advance(at_shipping(), false, &valid_details(), "Stockholm");
        assert!(!can_advance(&confirmed, false));
    }

    #[test]
    fn test_close_before_confirmation_keeps_state() {
        let (state, effect) = close(at_shipping());
        assert_eq!(effect, CloseEffect::None);
        assert_eq!(state.step, CheckoutStep::Shipping);

        let (state, effect) = close(CheckoutState::new());
        assert_eq!(effect, CloseEffect::None);
        assert_eq!(state.step, CheckoutStep::Review);
    }

    #[test]
    fn test_close_after_confirmation_resets() {
        let (state, _) = advance(at_shipping(), false, &valid_details(), "Stockholm");
        let (state, effect) = close(state);
        assert_eq!(effect, CloseEffect::ResetOrder);
        assert_eq!(state, CheckoutState::new());
    }
}
