pub mod record_customer_return_command;
pub mod record_vendor_return_command;

pub use record_customer_return_command::RecordCustomerReturnCommand;
pub use record_vendor_return_command::RecordVendorReturnCommand;
