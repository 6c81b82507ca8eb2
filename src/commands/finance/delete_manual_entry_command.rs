use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::commands::Command;
use crate::errors::ServiceError;
use crate::events::Event;
use crate::store::Store;

/// Deletes a manually entered finance entry.
///
/// Auto-posted entries belong to a completed lifecycle transition and are
/// immutable; attempting to delete one is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteManualEntryCommand {
    pub entry_id: Uuid,
}

impl Command for DeleteManualEntryCommand {
    type Result = ();

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        let entry = store
            .finance_entry(self.entry_id)
            .ok_or_else(|| ServiceError::not_found("Finance entry", self.entry_id))?;

        if !entry.source.is_manual() {
            return Err(ServiceError::InvalidOperation(format!(
                "Finance entry {} was auto-posted and cannot be deleted",
                self.entry_id
            )));
        }

        store.finance.retain(|f| f.id != self.entry_id);
        store.record(Event::ManualEntryDeleted(self.entry_id));

        info!(entry_id = %self.entry_id, "manual finance entry deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::finance::AddManualEntryCommand;
    use crate::models::{EntrySource, EntryType, FinanceEntry};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn manual_entries_are_deletable() {
        let mut store = Store::new();
        let entry_id = AddManualEntryCommand {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            entry_type: EntryType::Expense,
            category: "Rent".into(),
            amount: dec!(500),
            note: None,
        }
        .execute(&mut store)
        .unwrap();

        DeleteManualEntryCommand { entry_id }
            .execute(&mut store)
            .unwrap();
        assert!(store.finance.is_empty());
    }

    #[test]
    fn auto_posted_entries_are_immutable() {
        let mut store = Store::new();
        let entry = FinanceEntry::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            EntryType::Income,
            "Sales",
            dec!(8000),
            None,
            EntrySource::SalesOrder(Uuid::new_v4()),
        );
        let entry_id = entry.id;
        store.finance.push(entry);

        let result = DeleteManualEntryCommand { entry_id }.execute(&mut store);
        assert!(matches!(result, Err(ServiceError::InvalidOperation(_))));
        assert_eq!(store.finance.len(), 1);
    }

    #[test]
    fn unknown_entry_is_not_found() {
        let mut store = Store::new();
        let result = DeleteManualEntryCommand {
            entry_id: Uuid::new_v4(),
        }
        .execute(&mut store);
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
