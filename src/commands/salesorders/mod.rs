pub mod create_sales_order_command;
pub mod invoice_sales_order_command;
pub mod ship_sales_order_command;

pub use create_sales_order_command::CreateSalesOrderCommand;
pub use invoice_sales_order_command::InvoiceSalesOrderCommand;
pub use ship_sales_order_command::ShipSalesOrderCommand;
