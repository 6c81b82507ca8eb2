use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::commands::Command;
use crate::errors::ServiceError;
use crate::events::Event;
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteItemCommand {
    pub item_id: Uuid,
}

impl Command for DeleteItemCommand {
    type Result = ();

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        if store.item(self.item_id).is_none() {
            return Err(ServiceError::not_found("Item", self.item_id));
        }

        // Orders referencing this item keep their id; lifecycle commands
        // resolve references at execution time and handle the gap.
        store.items.retain(|i| i.id != self.item_id);
        store.record(Event::ItemDeleted(self.item_id));

        info!(item_id = %self.item_id, "item deleted");
        Ok(())
    }
}
