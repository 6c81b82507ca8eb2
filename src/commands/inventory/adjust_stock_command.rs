use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::commands::Command;
use crate::errors::ServiceError;
use crate::events::Event;
use crate::store::Store;

/// Manual stock correction.
///
/// This is the one escape hatch that may drive stock negative: the delta is
/// applied with no floor check so that physical-count corrections can always
/// be entered. Every other stock-decreasing path enforces the non-negative
/// invariant; do not copy this behavior into lifecycle commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustStockCommand {
    pub item_id: Uuid,
    pub delta: i64,
}

impl Command for AdjustStockCommand {
    type Result = i64;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        let item = store
            .item_mut(self.item_id)
            .ok_or_else(|| ServiceError::not_found("Item", self.item_id))?;

        item.stock += self.delta;
        let new_stock = item.stock;
        let name = item.name.clone();

        if new_stock < 0 {
            warn!(item_id = %self.item_id, stock = new_stock, "adjustment drove stock negative");
        }

        store.record(Event::StockAdjusted {
            item_id: self.item_id,
            name,
            delta: self.delta,
        });

        info!(item_id = %self.item_id, delta = self.delta, stock = new_stock, "stock adjusted");
        Ok(new_stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::masterdata::AddItemCommand;
    use rust_decimal_macros::dec;

    #[test]
    fn negative_delta_may_drive_stock_below_zero() {
        let mut store = Store::new();
        let item_id = AddItemCommand {
            name: "Part".into(),
            item_type: "raw".into(),
            uom: "pcs".into(),
            sell_price: dec!(0),
        }
        .execute(&mut store)
        .unwrap();

        let stock = AdjustStockCommand { item_id, delta: -4 }
            .execute(&mut store)
            .unwrap();
        assert_eq!(stock, -4);
        assert_eq!(store.item(item_id).unwrap().stock, -4);
    }

    #[test]
    fn adjustment_never_touches_average_cost() {
        let mut store = Store::new();
        let item_id = AddItemCommand {
            name: "Part".into(),
            item_type: "raw".into(),
            uom: "pcs".into(),
            sell_price: dec!(0),
        }
        .execute(&mut store)
        .unwrap();
        store.item_mut(item_id).unwrap().avg_cost = dec!(75);

        AdjustStockCommand { item_id, delta: 12 }
            .execute(&mut store)
            .unwrap();
        assert_eq!(store.item(item_id).unwrap().avg_cost, dec!(75));
    }

    #[test]
    fn unknown_item_is_an_error() {
        let mut store = Store::new();
        let result = AdjustStockCommand {
            item_id: Uuid::new_v4(),
            delta: 1,
        }
        .execute(&mut store);
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
