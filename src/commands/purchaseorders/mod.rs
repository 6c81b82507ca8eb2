pub mod create_purchase_order_command;
pub mod receive_purchase_order_command;

pub use create_purchase_order_command::CreatePurchaseOrderCommand;
pub use receive_purchase_order_command::ReceivePurchaseOrderCommand;
