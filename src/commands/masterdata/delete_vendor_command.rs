use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::commands::Command;
use crate::errors::ServiceError;
use crate::events::Event;
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteVendorCommand {
    pub vendor_id: Uuid,
}

impl Command for DeleteVendorCommand {
    type Result = ();

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        if store.vendor(self.vendor_id).is_none() {
            return Err(ServiceError::not_found("Vendor", self.vendor_id));
        }

        store.vendors.retain(|v| v.id != self.vendor_id);
        store.record(Event::VendorDeleted(self.vendor_id));

        info!(vendor_id = %self.vendor_id, "vendor deleted");
        Ok(())
    }
}
