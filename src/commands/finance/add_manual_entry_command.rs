use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::commands::Command;
use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::{EntrySource, EntryType, FinanceEntry};
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddManualEntryCommand {
    pub date: NaiveDate,
    pub entry_type: EntryType,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(custom = "crate::commands::validate_non_negative")]
    pub amount: Decimal,
    pub note: Option<String>,
}

impl Command for AddManualEntryCommand {
    type Result = Uuid;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        self.validate()?;

        let entry = FinanceEntry::new(
            self.date,
            self.entry_type,
            self.category.clone(),
            self.amount,
            self.note.clone(),
            EntrySource::Manual,
        );
        let entry_id = entry.id;
        store.finance.push(entry);
        store.record(Event::ManualEntryAdded {
            entry_id,
            amount: self.amount,
        });

        info!(%entry_id, entry_type = %self.entry_type, amount = %self.amount, "manual finance entry added");
        Ok(entry_id)
    }
}
