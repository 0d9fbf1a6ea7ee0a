//! Demo binary: renders the orders and users views as text tables.
//!
//! Usage: `trellis-demo [orders|users]` (defaults to orders). The orders
//! view walks through the interactions the engine exists for: expanding a
//! row with line items, filtering globally, and filtering one column.

mod error;
mod orders;
mod render;
mod users;

use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use trellis::{CellValue, RowKey, Table};

use crate::error::{Error, Result};
use crate::render::render_table;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let view = env::args().nth(1).unwrap_or_else(|| "orders".to_string());
    tracing::info!(view, "starting demo");
    match run(&view) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(view: &str) -> Result<()> {
    match view {
        "orders" => {
            run_orders();
            Ok(())
        }
        "users" => run_users(),
        other => Err(Error::UnknownView(other.to_string())),
    }
}

fn run_orders() {
    let table = Table::new(orders::order_engine()).with_records(orders::orders());

    println!("== Orders ==");
    print_rows(&table);

    println!("== Orders, #6709 expanded ==");
    table.toggle_expanded(RowKey::id("#6709"));
    print_rows(&table);

    println!("== Orders, search \"Kevin\" ==");
    table.set_global_filter("Kevin");
    print_rows(&table);

    println!("== Orders, status = Fulfilled ==");
    table.set_global_filter("");
    table.set_column_filter("status", Some(CellValue::from("Fulfilled")));
    print_rows(&table);
}

fn run_users() -> Result<()> {
    let table = Table::new(users::user_engine()).with_records(users::users()?);
    println!("== Users ==");
    print_rows(&table);
    Ok(())
}

fn print_rows<T>(table: &Table<T>) {
    let text = table.with_visible_rows(|rows| render_table(table.engine().columns(), rows));
    println!("{text}");
}
