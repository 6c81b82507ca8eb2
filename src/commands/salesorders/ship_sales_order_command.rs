use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::commands::{Command, TransitionOutcome};
use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::{SalesOrderStatus, Shipment};
use crate::store::Store;

/// Moves an invoiced sales order into shipping and creates the pending
/// shipment for it.
///
/// An order still `Open` is rejected — invoicing must come first. Orders
/// already shipping or delivered are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipSalesOrderCommand {
    pub sales_order_id: Uuid,
}

impl Command for ShipSalesOrderCommand {
    type Result = TransitionOutcome;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        let so = match store.sales_order(self.sales_order_id) {
            Some(so) => so.clone(),
            None => {
                debug!(sales_order_id = %self.sales_order_id, "ship skipped: unknown order");
                return Ok(TransitionOutcome::Skipped);
            }
        };

        match so.status {
            SalesOrderStatus::Open => {
                return Err(ServiceError::InvalidStatus(
                    "Sales order must be invoiced before shipping".to_string(),
                ));
            }
            SalesOrderStatus::Shipping | SalesOrderStatus::Delivered => {
                debug!(sales_order_id = %so.id, status = %so.status, "ship skipped");
                return Ok(TransitionOutcome::Skipped);
            }
            SalesOrderStatus::Invoiced => {}
        }

        if let Some(so) = store.sales_order_mut(self.sales_order_id) {
            so.status = SalesOrderStatus::Shipping;
        }

        let shipment = Shipment::new(so.id, Utc::now().date_naive());
        let shipment_id = shipment.id;
        store.shipments.push(shipment);

        store.record(Event::SalesOrderShipped {
            sales_order_id: so.id,
            shipment_id,
        });

        info!(sales_order_id = %so.id, %shipment_id, "sales order shipping");
        Ok(TransitionOutcome::Applied)
    }
}
