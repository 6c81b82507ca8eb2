pub mod complete_work_order_command;
pub mod create_work_order_command;

pub use complete_work_order_command::CompleteWorkOrderCommand;
pub use create_work_order_command::CreateWorkOrderCommand;
