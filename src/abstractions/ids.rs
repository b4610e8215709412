//! Identifier generation for slots, order lines and placed orders
//!
//! Tokens are produced by an injected [`IdGenerator`] so that tests can use
//! [`SequentialIds`] and assert exact ids, while the binary defaults to
//! [`UuidIds`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// What an identifier is minted for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Slot,
    Line,
    Order,
}

impl IdKind {
    fn prefix(self) -> &'static str {
        match self {
            IdKind::Slot => "slot",
            IdKind::Line => "line",
            IdKind::Order => "order",
        }
    }
}

/// Source of unique tokens
pub trait IdGenerator {
    /// Produce a token that has not been returned before by this generator
    fn next_id(&mut self, kind: IdKind) -> String;
}

/// Monotonic counter shared by all kinds: `slot-1`, `line-2`, `order-3`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    counter: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, kind: IdKind) -> String {
        self.counter += 1;
        format!("{}-{}", kind.prefix(), self.counter)
    }
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self, _kind: IdKind) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

macro_rules! token_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

token_type!(
    /// Identifies one slot of an in-progress box
    SlotId
);
token_type!(
    /// Identifies one line in the cart
    LineId
);
token_type!(
    /// Identifies a placed order
    OrderId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids_are_monotonic() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id(IdKind::Slot), "slot-1");
        assert_eq!(ids.next_id(IdKind::Line), "line-2");
        assert_eq!(ids.next_id(IdKind::Order), "order-3");
        assert_eq!(ids.next_id(IdKind::Slot), "slot-4");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidIds;
        let generated: HashSet<String> = (0..100).map(|_| ids.next_id(IdKind::Line)).collect();
        assert_eq!(generated.len(), 100);
    }

    #[test]
    fn test_token_serializes_transparently() {
        let id = LineId::new("line-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"line-7\"");
        let back: LineId = serde_json::from_str("\"line-7\"").unwrap();
        assert_eq!(back, id);
        assert_eq!(id.to_string(), "line-7");
    }
}
