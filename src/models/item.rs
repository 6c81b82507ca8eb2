use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An inventory item.
///
/// `stock` and `avg_cost` are derived fields: they are mutated only by
/// stock-affecting events (receive, adjust, produce, deliver, return),
/// never set directly by a user edit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub item_type: String,
    /// Unit of measure, e.g. "pcs".
    pub uom: String,
    pub sell_price: Decimal,
    /// On-hand quantity. Negative only via the manual adjustment escape hatch.
    pub stock: i64,
    /// Weighted-average unit cost, recomputed on every stock-increasing receipt.
    pub avg_cost: Decimal,
}

impl Item {
    pub fn new(name: impl Into<String>, item_type: impl Into<String>, uom: impl Into<String>, sell_price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            item_type: item_type.into(),
            uom: uom.into(),
            sell_price,
            stock: 0,
            avg_cost: Decimal::ZERO,
        }
    }
}
