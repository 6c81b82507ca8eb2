//! Application facade tying the store, the persistence contract and the
//! configuration together for the UI/CLI layer.

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::commands::Command;
use crate::config::AppConfig;
use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::ActivityRecord;
use crate::reports::{self, DashboardSummary, ProfitAndLossReport};
use crate::store::persist::{InMemoryStore, StatePersister};
use crate::store::Store;

pub struct App {
    store: Store,
    persister: Box<dyn StatePersister>,
    config: AppConfig,
}

impl App {
    /// Opens the application against a persister, using the last-saved
    /// store or a fresh one when nothing usable exists.
    pub fn load(persister: Box<dyn StatePersister>, config: AppConfig) -> Result<Self, ServiceError> {
        let store = persister.load()?.unwrap_or_default();
        Ok(Self {
            store,
            persister,
            config,
        })
    }

    /// Fresh in-memory application for tests and demos.
    pub fn in_memory() -> Self {
        Self {
            store: Store::new(),
            persister: Box::new(InMemoryStore::new()),
            config: AppConfig::default(),
        }
    }

    /// Executes a command against the store, then saves the full store.
    ///
    /// A failed save is logged and swallowed: the in-memory store remains
    /// authoritative for the rest of the session.
    pub fn execute<C: Command>(&mut self, command: C) -> Result<C::Result, ServiceError> {
        let result = command.execute(&mut self.store)?;
        self.save();
        Ok(result)
    }

    fn save(&self) {
        if let Err(e) = self.persister.save(&self.store) {
            warn!(error = %e, "failed to persist store; in-memory state stays authoritative");
        }
    }

    // Read accessors

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Activity feed at the configured default length, newest first.
    pub fn activity_feed(&self) -> Vec<&ActivityRecord> {
        self.store.recent_activity(self.config.activity_feed_len)
    }

    pub fn recent_activity(&self, limit: usize) -> Vec<&ActivityRecord> {
        self.store.recent_activity(limit)
    }

    pub fn profit_and_loss(
        &self,
        from: Option<chrono::NaiveDate>,
        to: Option<chrono::NaiveDate>,
    ) -> ProfitAndLossReport {
        reports::profit_and_loss(&self.store, from, to)
    }

    pub fn stock_valuation(&self) -> rust_decimal::Decimal {
        reports::stock_valuation(&self.store)
    }

    pub fn sales_this_month(&self) -> rust_decimal::Decimal {
        reports::sales_in_month(&self.store, Utc::now().date_naive())
    }

    pub fn dashboard(&self) -> DashboardSummary {
        reports::dashboard_summary(&self.store, Utc::now().date_naive())
    }

    // Bulk contracts

    /// Wipes everything back to a fresh store.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.store = Store::new();
        self.store.record(Event::StoreReset);
        self.save();
        info!("store reset");
    }

    /// Replaces the entire store with the supplied backup document.
    /// Rejected documents leave the current store untouched.
    #[instrument(skip(self, json))]
    pub fn import_backup(&mut self, json: &str) -> Result<(), ServiceError> {
        let mut imported = Store::from_backup_json(json)?;
        imported.record(Event::BackupImported);
        self.store = imported;
        self.save();
        info!("backup imported");
        Ok(())
    }

    pub fn export_backup(&self) -> Result<String, ServiceError> {
        self.store.to_backup_json()
    }

    pub fn export_finance_csv(&self) -> String {
        self.store.export_finance_csv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::masterdata::AddVendorCommand;

    #[test]
    fn reset_clears_all_collections() {
        let mut app = App::in_memory();
        app.execute(AddVendorCommand {
            name: "Acme".into(),
            phone: None,
            email: None,
        })
        .unwrap();
        assert_eq!(app.store().vendors.len(), 1);

        app.reset();
        assert!(app.store().vendors.is_empty());
        assert_eq!(app.recent_activity(25).len(), 1);
    }

    #[test]
    fn failed_import_keeps_current_store() {
        let mut app = App::in_memory();
        app.execute(AddVendorCommand {
            name: "Acme".into(),
            phone: None,
            email: None,
        })
        .unwrap();

        let result = app.import_backup("{\"vendors\": []}");
        assert!(matches!(result, Err(ServiceError::ImportFormatError(_))));
        assert_eq!(app.store().vendors.len(), 1);
    }
}
