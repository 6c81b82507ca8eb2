use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::commands::{Command, TransitionOutcome};
use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::{SalesOrderStatus, ShipmentStatus};
use crate::store::Store;

/// Delivers a pending shipment: stock out by the sales order quantity,
/// shipment and order both move to `Delivered`.
///
/// Skipped when the shipment is unknown, already delivered, or its sales
/// order / item no longer resolve. Rejected when on-hand stock cannot cover
/// the order quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverShipmentCommand {
    pub shipment_id: Uuid,
}

impl Command for DeliverShipmentCommand {
    type Result = TransitionOutcome;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        let shipment = match store.shipment(self.shipment_id) {
            Some(sh) if sh.status == ShipmentStatus::Pending => sh.clone(),
            _ => {
                debug!(shipment_id = %self.shipment_id, "delivery skipped");
                return Ok(TransitionOutcome::Skipped);
            }
        };

        let so = match store.sales_order(shipment.sales_order_id) {
            Some(so) => so.clone(),
            None => {
                debug!(shipment_id = %shipment.id, "delivery skipped: sales order missing");
                return Ok(TransitionOutcome::Skipped);
            }
        };

        let item = match store.item(so.item_id) {
            Some(item) => item,
            None => {
                debug!(shipment_id = %shipment.id, "delivery skipped: item missing");
                return Ok(TransitionOutcome::Skipped);
            }
        };

        if item.stock < so.quantity {
            return Err(ServiceError::InsufficientStock(format!(
                "Delivery needs {} of {}, only {} on hand",
                so.quantity, item.name, item.stock
            )));
        }

        // Stock-decreasing event: quantity only, average cost untouched.
        if let Some(item) = store.item_mut(so.item_id) {
            item.stock -= so.quantity;
        }
        if let Some(sh) = store.shipment_mut(self.shipment_id) {
            sh.status = ShipmentStatus::Delivered;
        }
        if let Some(so) = store.sales_order_mut(shipment.sales_order_id) {
            so.status = SalesOrderStatus::Delivered;
        }

        store.record(Event::ShipmentDelivered {
            shipment_id: shipment.id,
            sales_order_id: so.id,
            quantity: so.quantity,
        });

        info!(shipment_id = %shipment.id, sales_order_id = %so.id, quantity = so.quantity, "shipment delivered");
        Ok(TransitionOutcome::Applied)
    }
}
