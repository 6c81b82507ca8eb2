use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::commands::Command;
use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::SalesOrder;
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSalesOrderCommand {
    pub customer_id: Uuid,
    pub item_id: Uuid,
    pub date: NaiveDate,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i64,
    #[validate(custom = "crate::commands::validate_non_negative")]
    pub unit_price: Decimal,
}

impl Command for CreateSalesOrderCommand {
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

        let so = SalesOrder::new(
            self.date,
            self.customer_id,
            self.item_id,
            self.quantity,
            self.unit_price,
        );
        let so_id = so.id;
        let total = so.total;
        store.sales_orders.push(so);
        store.record(Event::SalesOrderCreated(so_id));

        info!(%so_id, quantity = self.quantity, %total, "sales order created");
        Ok(so_id)
    }
}
