use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::commands::Command;
use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::Item;
use crate::store::Store;

fn default_uom() -> String {
    "pcs".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddItemCommand {
    #[validate(length(min = 1, message = "Item name is required"))]
    pub name: String,
    pub item_type: String,
    #[serde(default = "default_uom")]
    pub uom: String,
    #[validate(custom = "crate::commands::validate_non_negative")]
    pub sell_price: Decimal,
}

impl Command for AddItemCommand {
    type Result = Uuid;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        self.validate()?;

        // Stock and average cost always start at zero; only inventory
        // events may move them afterwards.
        let item = Item::new(
            self.name.clone(),
            self.item_type.clone(),
            self.uom.clone(),
            self.sell_price,
        );
        let item_id = item.id;
        store.items.push(item);
        store.record(Event::ItemAdded {
            item_id,
            name: self.name.clone(),
        });

        info!(%item_id, name = %self.name, "item added");
        Ok(item_id)
    }
}
