use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::commands::Command;
use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::WorkOrder;
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWorkOrderCommand {
    pub consume_item_id: Uuid,
    #[validate(range(min = 1, message = "Consume quantity must be positive"))]
    pub consume_quantity: i64,
    pub output_item_id: Uuid,
    #[validate(range(min = 1, message = "Output quantity must be positive"))]
    pub output_quantity: i64,
    pub date: NaiveDate,
}

impl Command for CreateWorkOrderCommand {
    type Result = Uuid;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        self.validate()?;

        if self.consume_item_id == self.output_item_id {
            return Err(ServiceError::ValidationError(
                "Consume item and output item must differ".to_string(),
            ));
        }
        if store.item(self.consume_item_id).is_none() {
            return Err(ServiceError::not_found("Item", self.consume_item_id));
        }
        if store.item(self.output_item_id).is_none() {
            return Err(ServiceError::not_found("Item", self.output_item_id));
        }

        let wo = WorkOrder::new(
            self.date,
            self.consume_item_id,
            self.consume_quantity,
            self.output_item_id,
            self.output_quantity,
        );
        let wo_id = wo.id;
        store.work_orders.push(wo);
        store.record(Event::WorkOrderCreated(wo_id));

        info!(%wo_id, "work order created");
        Ok(wo_id)
    }
}
