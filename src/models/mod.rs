pub mod activity;
pub mod finance;
pub mod item;
pub mod partner;
pub mod purchase_order;
pub mod return_record;
pub mod sales_order;
pub mod shipment;
pub mod work_order;

pub use activity::ActivityRecord;
pub use finance::{EntrySource, EntryType, FinanceEntry};
pub use item::Item;
pub use partner::{Customer, Vendor};
pub use purchase_order::{PurchaseOrder, PurchaseOrderStatus};
pub use return_record::{ReturnKind, ReturnRecord};
pub use sales_order::{SalesOrder, SalesOrderStatus};
pub use shipment::{Shipment, ShipmentStatus};
pub use work_order::{WorkOrder, WorkOrderStatus};
