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

/// Records goods coming back from a customer. Restocking, so there is no
/// stock check; returns are single-shot events without a lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordCustomerReturnCommand {
    pub customer_id: Uuid,
    pub item_id: Uuid,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i64,
    pub reason: String,
}

impl Command for RecordCustomerReturnCommand {
    type Result = Uuid;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        self.validate()?;

        if store.customer(self.customer_id).is_none() {
            return Err(ServiceError::not_found("Customer", self.customer_id));
        }
        if store.item(self.item_id).is_none() {
            return Err(ServiceError::not_found("Item", self.item_id));
        }

        if let Some(item) = store.item_mut(self.item_id) {
            item.stock += self.quantity;
        }

        let record = ReturnRecord::new(
            Utc::now().date_naive(),
            ReturnKind::Customer,
            self.customer_id,
            self.item_id,
            self.quantity,
            self.reason.clone(),
        );
        let return_id = record.id;
        store.returns.push(record);
        store.record(Event::CustomerReturnRecorded {
            item_id: self.item_id,
            quantity: self.quantity,
        });

        info!(%return_id, quantity = self.quantity, "customer return recorded");
        Ok(return_id)
    }
}
