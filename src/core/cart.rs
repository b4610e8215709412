//! Pure order list operations
//!
//! The cart is an ordered list of finalized lines. Insertion order is kept
//! for display only; the total is recomputed on every call so it can never
//! go stale after a removal.

use crate::abstractions::LineId;
use crate::catalog::CatalogItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Individual,
    Bundle,
}

/// A finalized, priced cart entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: LineId,
    pub kind: LineKind,
    pub label: String,
    pub items: Vec<CatalogItem>,
    pub price: u32,
}

impl OrderLine {
    /// A single cookie bought at its unit price
    pub fn individual(id: LineId, item: CatalogItem) -> Self {
        Self {
            id,
            kind: LineKind::Individual,
            label: item.name.clone(),
            price: item.unit_price,
            items: vec![item],
        }
    }

    /// A completed box sold at the tier's flat price
    pub fn bundle(id: LineId, items: Vec<CatalogItem>, fixed_price: u32) -> Self {
        Self {
            id,
            kind: LineKind::Bundle,
            label: format!("Custom Box of {}", items.len()),
            items,
            price: fixed_price,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderList {
    lines: Vec<OrderLine>,
}

impl OrderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line at the end
    pub fn append(mut self, line: OrderLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Remove the line with the given id; no-op if absent
    pub fn remove(mut self, id: &LineId) -> Self {
        if let Some(pos) = self.lines.iter().position(|line| &line.id == id) {
            self.lines.remove(pos);
        }
        self
    }

    pub fn clear(mut self) -> Self {
        self.lines.clear();
        self
    }

    /// Sum of line prices
    pub fn total(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.price)).sum()
    }

    /// Number of cookies across all lines
    pub fn item_count(&self) -> usize {
        self.lines.iter().map(|line| line.items.len()).sum()
    }

    pub fn get(&self, id: &LineId) -> Option<&OrderLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    pub fn contains(&self, id: &LineId) -> bool {
        self.get(id).is_some()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
