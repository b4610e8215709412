//! Core business logic module with pure functions
//!
//! This module contains the storefront's state transitions without any I/O.
//! Following the "functional core, imperative shell" pattern, all functions here:
//! - Take the current state by value and return the next one
//! - Have no side effects (identifiers come from an injected generator)
//! - Reject invalid requests by returning the state unchanged
//! - Are easily testable without mocks

pub mod cart;
pub mod checkout;
pub mod selection;
pub mod validation;

pub use cart::{LineKind, OrderLine, OrderList};
pub use checkout::{AdvanceOutcome, CheckoutState, CheckoutStep, CloseEffect};
pub use selection::{AddOutcome, SelectionState, Slot};
pub use validation::{FieldError, FieldErrors, ShippingDetails, ShippingField};
