//! # Cookiebox
//!
//! The core of a cookie-box storefront: pick a box size, fill it flavor by
//! flavor, collect boxes and single cookies in a cart, and check out with
//! shipping details validated against the one city the bakery delivers to.
//!
//! ## Usage
//!
//! ```bash
//! cookiebox catalog
//! cookiebox run order.yaml [--json]
//! cookiebox check-config
//! ```
//!
//! ## Modules
//!
//! - `abstractions` - Injected identifier generation
//! - `catalog` - Cookies, box tiers and testimonials
//! - `cli` - Argument parsing, command routing and scripted sessions
//! - `config` - Configuration management for the storefront
//! - `core` - Pure transitions for box selection, cart and checkout
//! - `error` - Error types and error codes
//! - `session` - Session state driven by user intents
pub mod abstractions;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod session;

pub use error::{Result, ShopError};
pub use session::{Intent, Outcome, SessionView, ShopSession};
