use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::commands::Command;
use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::Vendor;
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddVendorCommand {
    #[validate(length(min = 1, message = "Vendor name is required"))]
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Command for AddVendorCommand {
    type Result = Uuid;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        self.validate()?;

        let vendor = Vendor::new(self.name.clone(), self.phone.clone(), self.email.clone());
        let vendor_id = vendor.id;
        store.vendors.push(vendor);
        store.record(Event::VendorAdded {
            vendor_id,
            name: self.name.clone(),
        });

        info!(%vendor_id, name = %self.name, "vendor added");
        Ok(vendor_id)
    }
}
