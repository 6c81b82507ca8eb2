pub mod add_customer_command;
pub mod add_item_command;
pub mod add_vendor_command;
pub mod delete_customer_command;
pub mod delete_item_command;
pub mod delete_vendor_command;

pub use add_customer_command::AddCustomerCommand;
pub use add_item_command::AddItemCommand;
pub use add_vendor_command::AddVendorCommand;
pub use delete_customer_command::DeleteCustomerCommand;
pub use delete_item_command::DeleteItemCommand;
pub use delete_vendor_command::DeleteVendorCommand;
