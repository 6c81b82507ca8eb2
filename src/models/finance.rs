use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ledger entry category used for auto-posted purchase expenses.
pub const CATEGORY_PURCHASING: &str = "Purchasing";
/// Ledger entry category used for auto-posted sales income.
pub const CATEGORY_SALES: &str = "Sales";

/// Direction of a finance entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

/// Origin of a finance entry.
///
/// Auto-posted entries reference the purchase or sales order that produced
/// them and are immutable; only `Manual` entries may be deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source_type", content = "source_id")]
pub enum EntrySource {
    #[serde(rename = "PO")]
    PurchaseOrder(Uuid),
    #[serde(rename = "SO")]
    SalesOrder(Uuid),
    #[serde(rename = "MANUAL")]
    Manual,
}

impl EntrySource {
    pub fn is_manual(&self) -> bool {
        matches!(self, EntrySource::Manual)
    }

    /// Flat `TYPE:id` rendering used by the CSV export (`MANUAL:` has no id).
    pub fn ref_code(&self) -> String {
        match self {
            EntrySource::PurchaseOrder(id) => format!("PO:{}", id),
            EntrySource::SalesOrder(id) => format!("SO:{}", id),
            EntrySource::Manual => "MANUAL:".to_string(),
        }
    }
}

/// An append-only ledger entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinanceEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub entry_type: EntryType,
    pub category: String,
    pub amount: Decimal,
    pub note: Option<String>,
    #[serde(flatten)]
    pub source: EntrySource,
}

impl FinanceEntry {
    pub fn new(
        date: NaiveDate,
        entry_type: EntryType,
        category: impl Into<String>,
        amount: Decimal,
        note: Option<String>,
        source: EntrySource,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            entry_type,
            category: category.into(),
            amount,
            note,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_ref_code_has_empty_id() {
        assert_eq!(EntrySource::Manual.ref_code(), "MANUAL:");
    }

    #[test]
    fn source_serializes_with_tag_and_content() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(EntrySource::SalesOrder(id)).unwrap();
        assert_eq!(json["source_type"], "SO");
        assert_eq!(json["source_id"], serde_json::json!(id));
    }
}
