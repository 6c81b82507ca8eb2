//! Returns (single-shot events) and the manual stock adjustment escape hatch.

mod common;

use assert_matches::assert_matches;
use rust_decimal_macros::dec;

use common::fixture;
use erp_core::commands::inventory::AdjustStockCommand;
use erp_core::commands::returns::{RecordCustomerReturnCommand, RecordVendorReturnCommand};
use erp_core::commands::Command;
use erp_core::models::ReturnKind;
use erp_core::ServiceError;

#[test]
fn customer_return_restocks_without_stock_check() {
    let mut fx = fixture();
    assert_eq!(fx.store.item(fx.finished_id).unwrap().stock, 0);

    RecordCustomerReturnCommand {
        customer_id: fx.customer_id,
        item_id: fx.finished_id,
        quantity: 3,
        reason: "Wrong color".into(),
    }
    .execute(&mut fx.store)
    .unwrap();

    assert_eq!(fx.store.item(fx.finished_id).unwrap().stock, 3);
    assert_eq!(fx.store.returns.len(), 1);
    assert_eq!(fx.store.returns[0].kind, ReturnKind::Customer);
    assert_eq!(fx.store.returns[0].partner_id, fx.customer_id);
}

#[test]
fn vendor_return_requires_sufficient_stock() {
    let mut fx = fixture();
    fx.stock_via_po(fx.raw_id, 5, dec!(100));

    let result = RecordVendorReturnCommand {
        vendor_id: fx.vendor_id,
        item_id: fx.raw_id,
        quantity: 8,
        reason: "Out of spec".into(),
    }
    .execute(&mut fx.store);

    assert_matches!(result, Err(ServiceError::InsufficientStock(_)));
    assert_eq!(fx.store.item(fx.raw_id).unwrap().stock, 5);
    assert!(fx.store.returns.is_empty());

    RecordVendorReturnCommand {
        vendor_id: fx.vendor_id,
        item_id: fx.raw_id,
        quantity: 2,
        reason: "Out of spec".into(),
    }
    .execute(&mut fx.store)
    .unwrap();

    assert_eq!(fx.store.item(fx.raw_id).unwrap().stock, 3);
    assert_eq!(fx.store.returns[0].kind, ReturnKind::Vendor);
}

#[test]
fn returns_never_touch_average_cost() {
    let mut fx = fixture();
    fx.stock_via_po(fx.raw_id, 10, dec!(100));

    RecordCustomerReturnCommand {
        customer_id: fx.customer_id,
        item_id: fx.raw_id,
        quantity: 2,
        reason: "".into(),
    }
    .execute(&mut fx.store)
    .unwrap();

    assert_eq!(fx.store.item(fx.raw_id).unwrap().avg_cost, dec!(100));
}

#[test]
fn adjustment_is_the_only_path_below_zero() {
    let mut fx = fixture();

    let stock = AdjustStockCommand {
        item_id: fx.raw_id,
        delta: -7,
    }
    .execute(&mut fx.store)
    .unwrap();

    assert_eq!(stock, -7);
    assert_eq!(fx.store.item(fx.raw_id).unwrap().stock, -7);

    let stock = AdjustStockCommand {
        item_id: fx.raw_id,
        delta: 10,
    }
    .execute(&mut fx.store)
    .unwrap();
    assert_eq!(stock, 3);
}
