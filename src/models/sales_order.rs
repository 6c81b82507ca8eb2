use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Enum representing the possible statuses of a sales order.
///
/// The progression is strictly forward-only:
/// `Open → Invoiced → Shipping → Delivered`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SalesOrderStatus {
    Open,
    Invoiced,
    Shipping,
    Delivered,
}

/// A sales order for a single item to a customer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub id: Uuid,
    pub date: NaiveDate,
    pub customer_id: Uuid,
    pub item_id: Uuid,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub total: Decimal,
    pub status: SalesOrderStatus,
}

impl SalesOrder {
    pub fn new(date: NaiveDate, customer_id: Uuid, item_id: Uuid, quantity: i64, unit_price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            customer_id,
            item_id,
            quantity,
            unit_price,
            total: Decimal::from(quantity) * unit_price,
            status: SalesOrderStatus::Open,
        }
    }
}
