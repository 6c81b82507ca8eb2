use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::commands::Command;
use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::PurchaseOrder;
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePurchaseOrderCommand {
    pub vendor_id: Uuid,
    pub item_id: Uuid,
    pub date: NaiveDate,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i64,
    #[validate(custom = "crate::commands::validate_non_negative")]
    pub unit_price: Decimal,
}

impl Command for CreatePurchaseOrderCommand {
    type Result = Uuid;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        self.validate()?;

        if store.vendor(self.vendor_id).is_none() {
            return Err(ServiceError::not_found("Vendor", self.vendor_id));
        }
        if store.item(self.item_id).is_none() {
            return Err(ServiceError::not_found("Item", self.item_id));
        }

        let po = PurchaseOrder::new(
            self.date,
            self.vendor_id,
            self.item_id,
            self.quantity,
            self.unit_price,
        );
        let po_id = po.id;
        let total = po.total;
        store.purchase_orders.push(po);
        store.record(Event::PurchaseOrderCreated(po_id));

        info!(%po_id, quantity = self.quantity, %total, "purchase order created");
        Ok(po_id)
    }
}
