//! Snapshot of an order at the moment it is confirmed

use crate::abstractions::OrderId;
use crate::core::{OrderLine, OrderList, ShippingDetails};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub id: OrderId,
    pub lines: Vec<OrderLine>,
    pub total: u64,
    pub shipping: ShippingDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    pub placed_at: DateTime<Utc>,
}

impl PlacedOrder {
    pub fn new(
        id: OrderId,
        cart: &OrderList,
        shipping: &ShippingDetails,
        instructions: &str,
        placed_at: DateTime<Utc>,
    ) -> Self {
        let instructions = instructions.trim();
        Self {
            id,
            lines: cart.lines().to_vec(),
            total: cart.total(),
            shipping: shipping.clone(),
            instructions: (!instructions.is_empty()).then(|| instructions.to_string()),
            placed_at,
        }
    }

    pub fn item_count(&self) -> usize {
        self.lines.iter().map(|line| line.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstractions::LineId;
    use crate::catalog::Catalog;

    #[test]
    fn test_snapshot_copies_cart() {
        let catalog = Catalog::stockholm();
        let cart = OrderList::new()
            .append(OrderLine::individual(
                LineId::new("line-1"),
                catalog.item("biscoff").unwrap().clone(),
            ))
            .append(OrderLine::bundle(
                LineId::new("line-2"),
                catalog.items.clone(),
                199,
            ));
        let shipping = ShippingDetails::for_locality("Stockholm");

        let order = PlacedOrder::new(OrderId::new("order-3"), &cart, &shipping, "  ", Utc::now());
        assert_eq!(order.total, 234);
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.item_count(), 6);
        assert_eq!(order.instructions, None);

        let order = PlacedOrder::new(
            OrderId::new("order-4"),
            &cart,
            &shipping,
            " Ring twice ",
            Utc::now(),
        );
        assert_eq!(order.instructions.as_deref(), Some("Ring twice"));
    }
}
