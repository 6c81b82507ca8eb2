use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::commands::{Command, TransitionOutcome};
use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::finance::CATEGORY_SALES;
use crate::models::{EntrySource, EntryType, FinanceEntry, SalesOrderStatus};
use crate::store::Store;

/// Invoices an open sales order, posting the matching income entry.
/// A no-op on orders that are already invoiced or further along.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceSalesOrderCommand {
    pub sales_order_id: Uuid,
}

impl Command for InvoiceSalesOrderCommand {
    type Result = TransitionOutcome;

    #[instrument(skip(self, store))]
    fn execute(&self, store: &mut Store) -> Result<Self::Result, ServiceError> {
        let so = match store.sales_order(self.sales_order_id) {
            Some(so) if so.status == SalesOrderStatus::Open => so.clone(),
            _ => {
                debug!(sales_order_id = %self.sales_order_id, "invoice skipped");
                return Ok(TransitionOutcome::Skipped);
            }
        };

        if let Some(so) = store.sales_order_mut(self.sales_order_id) {
            so.status = SalesOrderStatus::Invoiced;
        }

        store.finance.push(FinanceEntry::new(
            so.date,
            EntryType::Income,
            CATEGORY_SALES,
            so.total,
            Some("Invoice SO".to_string()),
            EntrySource::SalesOrder(so.id),
        ));

        store.record(Event::SalesOrderInvoiced {
            sales_order_id: so.id,
            total: so.total,
        });

        info!(sales_order_id = %so.id, total = %so.total, "sales order invoiced");
        Ok(TransitionOutcome::Applied)
    }
}
