use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::commands::Command;
use crate::errors::ServiceError;
use crate::events::Event;
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCustomerCommand {
    pub customer_id: Uuid,
}

impl Command for DeleteCustomerCommand {
    type Result = ();

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        if store.customer(self.customer_id).is_none() {
            return Err(ServiceError::not_found("Customer", self.customer_id));
        }

        store.customers.retain(|c| c.id != self.customer_id);
        store.record(Event::CustomerDeleted(self.customer_id));

        info!(customer_id = %self.customer_id, "customer deleted");
        Ok(())
    }
}
