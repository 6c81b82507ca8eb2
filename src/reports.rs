//! Read-side aggregation. Everything here is a pure function of `&Store`;
//! nothing mutates.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::finance::CATEGORY_SALES;
use crate::models::EntryType;
use crate::store::Store;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitAndLossReport {
    pub income: Decimal,
    pub expense: Decimal,
    pub profit: Decimal,
}

/// Counts and headline figures for the dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub item_count: usize,
    pub vendor_count: usize,
    pub customer_count: usize,
    pub purchase_order_count: usize,
    pub sales_order_count: usize,
    pub finance_entry_count: usize,
    pub stock_value: Decimal,
    pub sales_this_month: Decimal,
    pub profit_this_month: Decimal,
}

/// Sums finance entries by type over an inclusive date range. A missing
/// bound leaves that side of the range open.
pub fn profit_and_loss(
    store: &Store,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> ProfitAndLossReport {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;

    for entry in &store.finance {
        if from.is_some_and(|f| entry.date < f) || to.is_some_and(|t| entry.date > t) {
            continue;
        }
        match entry.entry_type {
            EntryType::Income => income += entry.amount,
            EntryType::Expense => expense += entry.amount,
        }
    }

    ProfitAndLossReport {
        income,
        expense,
        profit: income - expense,
    }
}

/// First and last day of the calendar month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    let last = next_month
        .and_then(|d| d.pred_opt())
        .unwrap_or(date);
    (first, last)
}

pub fn profit_and_loss_for_month(store: &Store, month_of: NaiveDate) -> ProfitAndLossReport {
    let (from, to) = month_bounds(month_of);
    profit_and_loss(store, Some(from), Some(to))
}

/// Σ over items of stock × average cost.
pub fn stock_valuation(store: &Store) -> Decimal {
    store
        .items
        .iter()
        .map(|item| Decimal::from(item.stock) * item.avg_cost)
        .sum()
}

/// Total of "Sales" income entries within the calendar month of `month_of`.
pub fn sales_in_month(store: &Store, month_of: NaiveDate) -> Decimal {
    store
        .finance
        .iter()
        .filter(|entry| {
            entry.entry_type == EntryType::Income
                && entry.category == CATEGORY_SALES
                && entry.date.year() == month_of.year()
                && entry.date.month() == month_of.month()
        })
        .map(|entry| entry.amount)
        .sum()
}

pub fn dashboard_summary(store: &Store, today: NaiveDate) -> DashboardSummary {
    DashboardSummary {
        item_count: store.items.len(),
        vendor_count: store.vendors.len(),
        customer_count: store.customers.len(),
        purchase_order_count: store.purchase_orders.len(),
        sales_order_count: store.sales_orders.len(),
        finance_entry_count: store.finance.len(),
        stock_value: stock_valuation(store),
        sales_this_month: sales_in_month(store, today),
        profit_this_month: profit_and_loss_for_month(store, today).profit,
    }
}
