pub mod deliver_shipment_command;

pub use deliver_shipment_command::DeliverShipmentCommand;
