use std::cmp;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::commands::{Command, TransitionOutcome};
use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::WorkOrderStatus;
use crate::store::Store;

/// Completes an open work order: consume stock out, output stock in,
/// carry-over costing, status `Complete`.
///
/// The output item's average cost becomes `max(output cost, consume cost)`.
/// This is a carry-over heuristic, not process costing; downstream reports
/// rely on this exact rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteWorkOrderCommand {
    pub work_order_id: Uuid,
}

impl Command for CompleteWorkOrderCommand {
    type Result = TransitionOutcome;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        let wo = match store.work_order(self.work_order_id) {
            Some(wo) if wo.status == WorkOrderStatus::Open => wo.clone(),
            _ => {
                debug!(work_order_id = %self.work_order_id, "completion skipped");
                return Ok(TransitionOutcome::Skipped);
            }
        };

        let consume = store
            .item(wo.consume_item_id)
            .ok_or_else(|| ServiceError::not_found("Item", wo.consume_item_id))?;
        if store.item(wo.output_item_id).is_none() {
            return Err(ServiceError::not_found("Item", wo.output_item_id));
        }

        if consume.stock < wo.consume_quantity {
            return Err(ServiceError::InsufficientStock(format!(
                "Work order needs {} of {}, only {} on hand",
                wo.consume_quantity, consume.name, consume.stock
            )));
        }
        let consume_cost = consume.avg_cost;

        // consume != output is enforced at creation, so these two mutable
        // borrows are sequential, never aliasing.
        if let Some(item) = store.item_mut(wo.consume_item_id) {
            item.stock -= wo.consume_quantity;
        }
        if let Some(item) = store.item_mut(wo.output_item_id) {
            item.stock += wo.output_quantity;
            item.avg_cost = cmp::max(item.avg_cost, consume_cost);
        }
        if let Some(wo) = store.work_order_mut(self.work_order_id) {
            wo.status = WorkOrderStatus::Complete;
        }

        store.record(Event::WorkOrderCompleted {
            work_order_id: wo.id,
            consumed: wo.consume_quantity,
            produced: wo.output_quantity,
        });

        info!(work_order_id = %wo.id, consumed = wo.consume_quantity, produced = wo.output_quantity, "work order completed");
        Ok(TransitionOutcome::Applied)
    }
}
