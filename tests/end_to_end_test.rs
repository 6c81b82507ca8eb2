//! Full flow across purchasing, production, sales and delivery, driven
//! through the `App` facade so persistence and the activity feed are
//! exercised too.

mod common;

use rust_decimal_macros::dec;

use common::date;
use erp_core::commands::masterdata::{AddCustomerCommand, AddItemCommand, AddVendorCommand};
use erp_core::commands::purchaseorders::{CreatePurchaseOrderCommand, ReceivePurchaseOrderCommand};
use erp_core::commands::salesorders::{
    CreateSalesOrderCommand, InvoiceSalesOrderCommand, ShipSalesOrderCommand,
};
use erp_core::commands::shipments::DeliverShipmentCommand;
use erp_core::commands::workorders::{CompleteWorkOrderCommand, CreateWorkOrderCommand};
use erp_core::models::{EntryType, SalesOrderStatus, ShipmentStatus};
use erp_core::App;

#[test]
fn purchase_to_delivery_flow() {
    let mut app = App::in_memory();

    let vendor_id = app
        .execute(AddVendorCommand {
            name: "Initech Supply".into(),
            phone: None,
            email: None,
        })
        .unwrap();
    let customer_id = app
        .execute(AddCustomerCommand {
            name: "Globex Retail".into(),
            phone: None,
            email: None,
        })
        .unwrap();
    let item_id = app
        .execute(AddItemCommand {
            name: "Bracket".into(),
            item_type: "finished".into(),
            uom: "pcs".into(),
            sell_price: dec!(2000),
        })
        .unwrap();

    // PO for 10 @ 1000, received.
    let po_id = app
        .execute(CreatePurchaseOrderCommand {
            vendor_id,
            item_id,
            date: date(2024, 3, 1),
            quantity: 10,
            unit_price: dec!(1000),
        })
        .unwrap();
    app.execute(ReceivePurchaseOrderCommand { purchase_order_id: po_id })
        .unwrap();

    {
        let item = app.store().item(item_id).unwrap();
        assert_eq!(item.stock, 10);
        assert_eq!(item.avg_cost, dec!(1000));
    }
    let expenses: Vec<_> = app
        .store()
        .finance
        .iter()
        .filter(|f| f.entry_type == EntryType::Expense)
        .collect();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].amount, dec!(10000));

    // SO for 4 @ 2000: invoice, ship, deliver.
    let so_id = app
        .execute(CreateSalesOrderCommand {
            customer_id,
            item_id,
            date: date(2024, 3, 10),
            quantity: 4,
            unit_price: dec!(2000),
        })
        .unwrap();
    app.execute(InvoiceSalesOrderCommand { sales_order_id: so_id })
        .unwrap();

    let income: Vec<_> = app
        .store()
        .finance
        .iter()
        .filter(|f| f.entry_type == EntryType::Income)
        .collect();
    assert_eq!(income.len(), 1);
    assert_eq!(income[0].amount, dec!(8000));

    app.execute(ShipSalesOrderCommand { sales_order_id: so_id })
        .unwrap();
    let shipment_id = app.store().shipments[0].id;
    assert_eq!(app.store().shipments[0].status, ShipmentStatus::Pending);

    app.execute(DeliverShipmentCommand { shipment_id }).unwrap();

    assert_eq!(app.store().item(item_id).unwrap().stock, 6);
    assert_eq!(
        app.store().shipment(shipment_id).unwrap().status,
        ShipmentStatus::Delivered
    );
    assert_eq!(
        app.store().sales_order(so_id).unwrap().status,
        SalesOrderStatus::Delivered
    );

    // Every mutation left an activity record, newest first, capped at 25.
    let feed = app.recent_activity(25);
    assert!(!feed.is_empty());
    assert!(feed[0].text.contains("Delivered"));
}

#[test]
fn production_flow_moves_stock_between_items() {
    let mut app = App::in_memory();
    let vendor_id = app
        .execute(AddVendorCommand {
            name: "Initech Supply".into(),
            phone: None,
            email: None,
        })
        .unwrap();
    let raw_id = app
        .execute(AddItemCommand {
            name: "Steel blank".into(),
            item_type: "raw".into(),
            uom: "pcs".into(),
            sell_price: dec!(0),
        })
        .unwrap();
    let finished_id = app
        .execute(AddItemCommand {
            name: "Bracket".into(),
            item_type: "finished".into(),
            uom: "pcs".into(),
            sell_price: dec!(2000),
        })
        .unwrap();

    let po_id = app
        .execute(CreatePurchaseOrderCommand {
            vendor_id,
            item_id: raw_id,
            date: date(2024, 3, 1),
            quantity: 12,
            unit_price: dec!(400),
        })
        .unwrap();
    app.execute(ReceivePurchaseOrderCommand { purchase_order_id: po_id })
        .unwrap();

    let wo_id = app
        .execute(CreateWorkOrderCommand {
            consume_item_id: raw_id,
            consume_quantity: 10,
            output_item_id: finished_id,
            output_quantity: 5,
            date: date(2024, 3, 2),
        })
        .unwrap();
    app.execute(CompleteWorkOrderCommand { work_order_id: wo_id })
        .unwrap();

    assert_eq!(app.store().item(raw_id).unwrap().stock, 2);
    let finished = app.store().item(finished_id).unwrap();
    assert_eq!(finished.stock, 5);
    // Carry-over costing: output takes the higher of the two costs.
    assert_eq!(finished.avg_cost, dec!(400));
}
