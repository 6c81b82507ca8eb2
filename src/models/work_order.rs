use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Enum representing the possible statuses of a work order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WorkOrderStatus {
    Open,
    Complete,
}

/// A production work order: consumes one item, produces another.
///
/// Invariant: `consume_item_id != output_item_id`, enforced at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: Uuid,
    pub date: NaiveDate,
    pub consume_item_id: Uuid,
    pub consume_quantity: i64,
    pub output_item_id: Uuid,
    pub output_quantity: i64,
    pub status: WorkOrderStatus,
}

impl WorkOrder {
    pub fn new(
        date: NaiveDate,
        consume_item_id: Uuid,
        consume_quantity: i64,
        output_item_id: Uuid,
        output_quantity: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            consume_item_id,
            consume_quantity,
            output_item_id,
            output_quantity,
            status: WorkOrderStatus::Open,
        }
    }
}
