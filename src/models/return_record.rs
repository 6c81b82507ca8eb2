use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReturnKind {
    /// Goods coming back from a customer (restock).
    Customer,
    /// Goods going back to a vendor (stock out).
    Vendor,
}

/// A one-shot return event. Returns are not stateful documents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReturnRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub kind: ReturnKind,
    /// Customer id for customer returns, vendor id for vendor returns.
    pub partner_id: Uuid,
    pub item_id: Uuid,
    pub quantity: i64,
    pub reason: String,
}

impl ReturnRecord {
    pub fn new(date: NaiveDate, kind: ReturnKind, partner_id: Uuid, item_id: Uuid, quantity: i64, reason: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            kind,
            partner_id,
            item_id,
            quantity,
            reason: reason.into(),
        }
    }
}
