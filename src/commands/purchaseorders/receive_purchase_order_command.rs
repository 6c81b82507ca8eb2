use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::commands::{Command, TransitionOutcome};
use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::finance::CATEGORY_PURCHASING;
use crate::models::{EntrySource, EntryType, FinanceEntry, PurchaseOrderStatus};
use crate::store::Store;

/// Receives an open purchase order: stock in, average-cost recalculation,
/// auto-posted expense, status `Received`. Idempotent — a second receive of
/// the same order is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivePurchaseOrderCommand {
    pub purchase_order_id: Uuid,
}

impl Command for ReceivePurchaseOrderCommand {
    type Result = TransitionOutcome;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        let po = match store.purchase_order(self.purchase_order_id) {
            Some(po) if po.status == PurchaseOrderStatus::Open => po.clone(),
            _ => {
                debug!(purchase_order_id = %self.purchase_order_id, "receive skipped");
                return Ok(TransitionOutcome::Skipped);
            }
        };

        // Stock in + weighted-average cost. When the item was deleted after
        // the order was placed, the inventory step is skipped but the
        // receipt itself still completes.
        if let Some(item) = store.item_mut(po.item_id) {
            let old_stock = item.stock;
            let old_cost = item.avg_cost;
            let new_stock = old_stock + po.quantity;

            let new_cost = if new_stock == 0 {
                Decimal::ZERO
            } else {
                let blended = Decimal::from(old_stock) * old_cost
                    + Decimal::from(po.quantity) * po.unit_price;
                (blended / Decimal::from(new_stock))
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            };

            item.stock = new_stock;
            item.avg_cost = new_cost;
        }

        if let Some(po) = store.purchase_order_mut(self.purchase_order_id) {
            po.status = PurchaseOrderStatus::Received;
        }

        store.finance.push(FinanceEntry::new(
            po.date,
            EntryType::Expense,
            CATEGORY_PURCHASING,
            po.total,
            Some("Receive PO".to_string()),
            EntrySource::PurchaseOrder(po.id),
        ));

        store.record(Event::PurchaseOrderReceived {
            purchase_order_id: po.id,
            quantity: po.quantity,
            total: po.total,
        });

        info!(purchase_order_id = %po.id, quantity = po.quantity, total = %po.total, "purchase order received");
        Ok(TransitionOutcome::Applied)
    }
}
