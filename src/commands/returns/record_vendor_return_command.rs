use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::commands::Command;
use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::{ReturnKind, ReturnRecord};
use crate::store::Store;

/// Records goods sent back to a vendor. Stock goes out, so the on-hand
/// quantity must cover the return.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordVendorReturnCommand {
    pub vendor_id: Uuid,
    pub item_id: Uuid,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i64,
    pub reason: String,
}

impl Command for RecordVendorReturnCommand {
    type Result = Uuid;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        self.validate()?;

        if store.vendor(self.vendor_id).is_none() {
            return Err(ServiceError::not_found("Vendor", self.vendor_id));
        }
        let item = store
            .item(self.item_id)
            .ok_or_else(|| ServiceError::not_found("Item", self.item_id))?;

        if item.stock < self.quantity {
            return Err(ServiceError::InsufficientStock(format!(
                "Vendor return needs {} of {}, only {} on hand",
                self.quantity, item.name, item.stock
            )));
        }

        if let Some(item) = store.item_mut(self.item_id) {
            item.stock -= self.quantity;
        }

        let record = ReturnRecord::new(
            Utc::now().date_naive(),
            ReturnKind::Vendor,
            self.vendor_id,
            self.item_id,
            self.quantity,
            self.reason.clone(),
        );
        let return_id = record.id;
        store.returns.push(record);
        store.record(Event::VendorReturnRecorded {
            item_id: self.item_id,
            quantity: self.quantity,
        });

        info!(%return_id, quantity = self.quantity, "vendor return recorded");
        Ok(return_id)
    }
}
