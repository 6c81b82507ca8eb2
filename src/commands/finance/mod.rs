pub mod add_manual_entry_command;
pub mod delete_manual_entry_command;

pub use add_manual_entry_command::AddManualEntryCommand;
pub use delete_manual_entry_command::DeleteManualEntryCommand;
