//! Purchase order lifecycle: create, receive, valuation and ledger effects.

mod common;

use assert_matches::assert_matches;
use rust_decimal_macros::dec;

use common::{date, fixture};
use erp_core::commands::purchaseorders::{CreatePurchaseOrderCommand, ReceivePurchaseOrderCommand};
use erp_core::commands::{Command, TransitionOutcome};
use erp_core::models::{EntrySource, EntryType, PurchaseOrderStatus};
use erp_core::ServiceError;

#[test]
fn receive_stocks_item_and_posts_expense() {
    let mut fx = fixture();
    let po_id = CreatePurchaseOrderCommand {
        vendor_id: fx.vendor_id,
        item_id: fx.raw_id,
        date: date(2024, 3, 1),
        quantity: 10,
        unit_price: dec!(1000),
    }
    .execute(&mut fx.store)
    .unwrap();

    let outcome = ReceivePurchaseOrderCommand {
        purchase_order_id: po_id,
    }
    .execute(&mut fx.store)
    .unwrap();
    assert_eq!(outcome, TransitionOutcome::Applied);

    let item = fx.store.item(fx.raw_id).unwrap();
    assert_eq!(item.stock, 10);
    assert_eq!(item.avg_cost, dec!(1000));

    let po = fx.store.purchase_order(po_id).unwrap();
    assert_eq!(po.status, PurchaseOrderStatus::Received);
    assert_eq!(po.total, dec!(10000));

    assert_eq!(fx.store.finance.len(), 1);
    let entry = &fx.store.finance[0];
    assert_eq!(entry.entry_type, EntryType::Expense);
    assert_eq!(entry.category, "Purchasing");
    assert_eq!(entry.amount, dec!(10000));
    assert_eq!(entry.date, date(2024, 3, 1));
    assert_eq!(entry.source, EntrySource::PurchaseOrder(po_id));
}

#[test]
fn weighted_average_blends_successive_receipts() {
    let mut fx = fixture();
    fx.stock_via_po(fx.raw_id, 10, dec!(100));
    let item = fx.store.item(fx.raw_id).unwrap();
    assert_eq!((item.stock, item.avg_cost), (10, dec!(100)));

    fx.stock_via_po(fx.raw_id, 10, dec!(200));
    let item = fx.store.item(fx.raw_id).unwrap();
    assert_eq!((item.stock, item.avg_cost), (20, dec!(150)));
}

#[test]
fn receive_twice_has_the_effect_of_receiving_once() {
    let mut fx = fixture();
    let po_id = fx.stock_via_po(fx.raw_id, 10, dec!(100));

    let outcome = ReceivePurchaseOrderCommand {
        purchase_order_id: po_id,
    }
    .execute(&mut fx.store)
    .unwrap();

    assert_eq!(outcome, TransitionOutcome::Skipped);
    assert_eq!(fx.store.item(fx.raw_id).unwrap().stock, 10);
    assert_eq!(fx.store.finance.len(), 1);
}

#[test]
fn creation_validates_references_and_quantity() {
    let mut fx = fixture();

    let result = CreatePurchaseOrderCommand {
        vendor_id: fx.vendor_id,
        item_id: fx.raw_id,
        date: date(2024, 3, 1),
        quantity: -3,
        unit_price: dec!(10),
    }
    .execute(&mut fx.store);
    assert_matches!(result, Err(ServiceError::ValidationError(_)));

    let result = CreatePurchaseOrderCommand {
        vendor_id: uuid::Uuid::new_v4(),
        item_id: fx.raw_id,
        date: date(2024, 3, 1),
        quantity: 3,
        unit_price: dec!(10),
    }
    .execute(&mut fx.store);
    assert_matches!(result, Err(ServiceError::NotFound(_)));

    assert!(fx.store.purchase_orders.is_empty());
}
