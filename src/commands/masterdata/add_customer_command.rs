use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::commands::Command;
use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::Customer;
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCustomerCommand {
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Command for AddCustomerCommand {
    type Result = Uuid;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        self.validate()?;

        let customer = Customer::new(self.name.clone(), self.phone.clone(), self.email.clone());
        let customer_id = customer.id;
        store.customers.push(customer);
        store.record(Event::CustomerAdded {
            customer_id,
            name: self.name.clone(),
        });

        info!(%customer_id, name = %self.name, "customer added");
        Ok(customer_id)
    }
}
