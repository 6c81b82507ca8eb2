//! Thin command-line wrapper over the ERP core, mainly for demoing and
//! poking at a data file without a UI.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use uuid::Uuid;

use erp_core::commands::finance::AddManualEntryCommand;
use erp_core::commands::inventory::AdjustStockCommand;
use erp_core::commands::masterdata::{AddCustomerCommand, AddItemCommand, AddVendorCommand};
use erp_core::commands::purchaseorders::{CreatePurchaseOrderCommand, ReceivePurchaseOrderCommand};
use erp_core::commands::returns::{RecordCustomerReturnCommand, RecordVendorReturnCommand};
use erp_core::commands::salesorders::{
    CreateSalesOrderCommand, InvoiceSalesOrderCommand, ShipSalesOrderCommand,
};
use erp_core::commands::shipments::DeliverShipmentCommand;
use erp_core::commands::workorders::{CompleteWorkOrderCommand, CreateWorkOrderCommand};
use erp_core::config::{init_tracing, load_config};
use erp_core::models::EntryType;
use erp_core::store::persist::JsonFileStore;
use erp_core::App;

#[derive(Parser)]
#[command(name = "erp-cli", about = "Single-user ERP core CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a small demo data set (vendor, customer, items, one full flow)
    Seed,
    /// Show dashboard counters and headline figures
    Dashboard,
    /// Show the activity feed
    Activity {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Profit and loss over an optional date range
    Pnl {
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Receive an open purchase order
    ReceivePo { id: Uuid },
    /// Complete an open work order
    CompleteWo { id: Uuid },
    /// Invoice an open sales order
    InvoiceSo { id: Uuid },
    /// Move an invoiced sales order into shipping
    ShipSo { id: Uuid },
    /// Deliver a pending shipment
    Deliver { shipment_id: Uuid },
    /// Apply a manual stock adjustment (delta may be negative)
    Adjust { item_id: Uuid, delta: i64 },
    /// Print the full store as a JSON backup document
    ExportBackup,
    /// Print the finance ledger as CSV
    ExportCsv,
    /// Replace the store with a backup document read from a file
    ImportBackup { path: std::path::PathBuf },
    /// Wipe all data
    Reset,
}

fn main() -> Result<()> {
    let config = load_config().context("failed to load configuration")?;
    init_tracing(&config.log_level, config.log_json);

    let persister = JsonFileStore::new(config.data_file.clone());
    let mut app = App::load(Box::new(persister), config).context("failed to open data file")?;

    match Cli::parse().command {
        Commands::Seed => seed(&mut app)?,
        Commands::Dashboard => {
            let summary = app.dashboard();
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Activity { limit } => {
            let limit = limit.unwrap_or(app.config().activity_feed_len);
            for record in app.recent_activity(limit) {
                println!("{}  {}", record.recorded_at.format("%Y-%m-%d %H:%M:%S"), record.text);
            }
        }
        Commands::Pnl { from, to } => {
            let report = app.profit_and_loss(from, to);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::ReceivePo { id } => {
            let outcome = app.execute(ReceivePurchaseOrderCommand { purchase_order_id: id })?;
            println!("{:?}", outcome);
        }
        Commands::CompleteWo { id } => {
            let outcome = app.execute(CompleteWorkOrderCommand { work_order_id: id })?;
            println!("{:?}", outcome);
        }
        Commands::InvoiceSo { id } => {
            let outcome = app.execute(InvoiceSalesOrderCommand { sales_order_id: id })?;
            println!("{:?}", outcome);
        }
        Commands::ShipSo { id } => {
            let outcome = app.execute(ShipSalesOrderCommand { sales_order_id: id })?;
            println!("{:?}", outcome);
        }
        Commands::Deliver { shipment_id } => {
            let outcome = app.execute(DeliverShipmentCommand { shipment_id })?;
            println!("{:?}", outcome);
        }
        Commands::Adjust { item_id, delta } => {
            let stock = app.execute(AdjustStockCommand { item_id, delta })?;
            println!("new stock: {}", stock);
        }
        Commands::ExportBackup => println!("{}", app.export_backup()?),
        Commands::ExportCsv => println!("{}", app.export_finance_csv()),
        Commands::ImportBackup { path } => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            app.import_backup(&json)?;
            println!("imported");
        }
        Commands::Reset => {
            app.reset();
            println!("reset");
        }
    }

    Ok(())
}

fn seed(app: &mut App) -> Result<()> {
    let today = Utc::now().date_naive();

    let vendor_id = app.execute(AddVendorCommand {
        name: "Initech Supply".into(),
        phone: Some("0812-000-111".into()),
        email: None,
    })?;
    let customer_id = app.execute(AddCustomerCommand {
        name: "Globex Retail".into(),
        phone: None,
        email: Some("orders@globex.example".into()),
    })?;
    let raw_id = app.execute(AddItemCommand {
        name: "Steel blank".into(),
        item_type: "raw".into(),
        uom: "pcs".into(),
        sell_price: Decimal::ZERO,
    })?;
    let finished_id = app.execute(AddItemCommand {
        name: "Bracket".into(),
        item_type: "finished".into(),
        uom: "pcs".into(),
        sell_price: Decimal::from(2500),
    })?;

    let po_id = app.execute(CreatePurchaseOrderCommand {
        vendor_id,
        item_id: raw_id,
        date: today,
        quantity: 20,
        unit_price: Decimal::from(800),
    })?;
    app.execute(ReceivePurchaseOrderCommand { purchase_order_id: po_id })?;

    let wo_id = app.execute(CreateWorkOrderCommand {
        consume_item_id: raw_id,
        consume_quantity: 10,
        output_item_id: finished_id,
        output_quantity: 10,
        date: today,
    })?;
    app.execute(CompleteWorkOrderCommand { work_order_id: wo_id })?;

    let so_id = app.execute(CreateSalesOrderCommand {
        customer_id,
        item_id: finished_id,
        date: today,
        quantity: 4,
        unit_price: Decimal::from(2500),
    })?;
    app.execute(InvoiceSalesOrderCommand { sales_order_id: so_id })?;
    app.execute(ShipSalesOrderCommand { sales_order_id: so_id })?;
    let shipment_id = app.store().shipments.last().map(|sh| sh.id);
    if let Some(shipment_id) = shipment_id {
        app.execute(DeliverShipmentCommand { shipment_id })?;
    }

    app.execute(RecordCustomerReturnCommand {
        customer_id,
        item_id: finished_id,
        quantity: 1,
        reason: "Damaged in transit".into(),
    })?;
    app.execute(RecordVendorReturnCommand {
        vendor_id,
        item_id: raw_id,
        quantity: 2,
        reason: "Out of spec".into(),
    })?;
    app.execute(AddManualEntryCommand {
        date: today,
        entry_type: EntryType::Expense,
        category: "Rent".into(),
        amount: Decimal::from(1500),
        note: Some("Workshop rent".into()),
    })?;

    println!("seeded demo data into {}", app.config().data_file.display());
    Ok(())
}
