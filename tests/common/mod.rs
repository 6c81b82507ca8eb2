//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use erp_core::commands::masterdata::{AddCustomerCommand, AddItemCommand, AddVendorCommand};
use erp_core::commands::purchaseorders::{CreatePurchaseOrderCommand, ReceivePurchaseOrderCommand};
use erp_core::commands::salesorders::CreateSalesOrderCommand;
use erp_core::commands::Command;
use erp_core::store::Store;

pub struct Fixture {
    pub store: Store,
    pub vendor_id: Uuid,
    pub customer_id: Uuid,
    pub raw_id: Uuid,
    pub finished_id: Uuid,
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A store seeded with one vendor, one customer and two items
/// (both starting at zero stock and cost).
pub fn fixture() -> Fixture {
    let mut store = Store::new();
    let vendor_id = AddVendorCommand {
        name: "Initech Supply".into(),
        phone: None,
        email: None,
    }
    .execute(&mut store)
    .unwrap();
    let customer_id = AddCustomerCommand {
        name: "Globex Retail".into(),
        phone: None,
        email: None,
    }
    .execute(&mut store)
    .unwrap();
    let raw_id = AddItemCommand {
        name: "Steel blank".into(),
        item_type: "raw".into(),
        uom: "pcs".into(),
        sell_price: Decimal::ZERO,
    }
    .execute(&mut store)
    .unwrap();
    let finished_id = AddItemCommand {
        name: "Bracket".into(),
        item_type: "finished".into(),
        uom: "pcs".into(),
        sell_price: Decimal::from(2500),
    }
    .execute(&mut store)
    .unwrap();

    Fixture {
        store,
        vendor_id,
        customer_id,
        raw_id,
        finished_id,
    }
}

impl Fixture {
    /// Creates and immediately receives a purchase order, stocking
    /// `quantity` units of the item at `unit_price`.
    pub fn stock_via_po(&mut self, item_id: Uuid, quantity: i64, unit_price: Decimal) -> Uuid {
        let po_id = CreatePurchaseOrderCommand {
            vendor_id: self.vendor_id,
            item_id,
            date: date(2024, 3, 1),
            quantity,
            unit_price,
        }
        .execute(&mut self.store)
        .unwrap();
        ReceivePurchaseOrderCommand {
            purchase_order_id: po_id,
        }
        .execute(&mut self.store)
        .unwrap();
        po_id
    }

    pub fn sales_order(&mut self, item_id: Uuid, quantity: i64, unit_price: Decimal) -> Uuid {
        CreateSalesOrderCommand {
            customer_id: self.customer_id,
            item_id,
            date: date(2024, 3, 10),
            quantity,
            unit_price,
        }
        .execute(&mut self.store)
        .unwrap()
    }
}
