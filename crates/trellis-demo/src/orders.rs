//! The orders view: six hard-coded orders, one with three line items.
//!
//! Orders and their line items pass through the same engine, so both are
//! wrapped in [`OrderRow`]; the column accessors pick the matching field per
//! variant (a line item shows its SKU in the id column, its name in the
//! customer column, and so on).

use trellis::{CellValue, Column, ColumnKind, RowEngine};

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Fulfilled,
    Unfulfilled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Fulfilled => "Fulfilled",
            OrderStatus::Unfulfilled => "Unfulfilled",
        }
    }
}

/// Sales channel an order came in through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesChannel {
    Amazon,
    Shopify,
    Etsy,
}

impl SalesChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalesChannel::Amazon => "amazon",
            SalesChannel::Shopify => "shopify",
            SalesChannel::Etsy => "etsy",
        }
    }
}

/// One product line item under an order.
#[derive(Debug, Clone)]
pub struct LineItem {
    pub name: String,
    pub sku: String,
    pub bin: String,
    pub vendor: String,
    pub status: String,
    pub quantity: i64,
}

/// A customer order.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    pub date: String,
    pub customer: String,
    pub sales_channel: SalesChannel,
    pub destination: String,
    pub items: i64,
    pub status: OrderStatus,
    pub line_items: Vec<OrderRow>,
}

/// Row record for the orders view: a top-level order or one of its line
/// items.
#[derive(Debug, Clone)]
pub enum OrderRow {
    Order(Order),
    LineItem(LineItem),
}

impl OrderRow {
    /// Children of this row: an order's line items, nothing for a line item.
    pub fn children(&self) -> &[OrderRow] {
        match self {
            OrderRow::Order(order) => &order.line_items,
            OrderRow::LineItem(_) => &[],
        }
    }

    /// Stable identity: order id or line-item SKU.
    pub fn row_id(&self) -> String {
        match self {
            OrderRow::Order(order) => order.id.clone(),
            OrderRow::LineItem(item) => item.sku.clone(),
        }
    }
}

fn line_item(name: &str, sku: &str, bin: &str, vendor: &str, quantity: i64) -> OrderRow {
    OrderRow::LineItem(LineItem {
        name: name.into(),
        sku: sku.into(),
        bin: bin.into(),
        vendor: vendor.into(),
        status: "On Hand".into(),
        quantity,
    })
}

/// The static order fixture backing the view.
pub fn orders() -> Vec<OrderRow> {
    vec![
        OrderRow::Order(Order {
            id: "#6709".into(),
            date: "08/11/2021".into(),
            customer: "Olivia Cooper".into(),
            sales_channel: SalesChannel::Amazon,
            destination: "International".into(),
            items: 3,
            status: OrderStatus::Pending,
            line_items: vec![
                line_item(
                    "Della Gao Laptop Backpack 15.6 Inch",
                    "PN-756760",
                    "C011-034",
                    "LEVENTA",
                    53,
                ),
                line_item(
                    "Emsa Travel Mug Light Thermo",
                    "AS-765776",
                    "C003-017",
                    "RUDIP",
                    210,
                ),
                line_item(
                    "Dogaus Bluetooth Over Ear Headphones",
                    "DC-787588",
                    "C026-005",
                    "MIOIO",
                    19,
                ),
            ],
        }),
        OrderRow::Order(Order {
            id: "#6708".into(),
            date: "08/11/2021".into(),
            customer: "Kevin Parsons".into(),
            sales_channel: SalesChannel::Etsy,
            destination: "Domestic".into(),
            items: 5,
            status: OrderStatus::Fulfilled,
            line_items: vec![],
        }),
        OrderRow::Order(Order {
            id: "#6707".into(),
            date: "08/11/2021".into(),
            customer: "Frank Reid".into(),
            sales_channel: SalesChannel::Amazon,
            destination: "International".into(),
            items: 1,
            status: OrderStatus::Pending,
            line_items: vec![],
        }),
        OrderRow::Order(Order {
            id: "#6706".into(),
            date: "08/11/2021".into(),
            customer: "Stephanie Berry".into(),
            sales_channel: SalesChannel::Shopify,
            destination: "International".into(),
            items: 2,
            status: OrderStatus::Unfulfilled,
            line_items: vec![],
        }),
        OrderRow::Order(Order {
            id: "#6705".into(),
            date: "08/11/2021".into(),
            customer: "Sophie Miller".into(),
            sales_channel: SalesChannel::Shopify,
            destination: "Domestic".into(),
            items: 7,
            status: OrderStatus::Fulfilled,
            line_items: vec![],
        }),
        OrderRow::Order(Order {
            id: "#6704".into(),
            date: "08/11/2021".into(),
            customer: "Joan Ross".into(),
            sales_channel: SalesChannel::Amazon,
            destination: "International".into(),
            items: 4,
            status: OrderStatus::Fulfilled,
            line_items: vec![],
        }),
    ]
}

/// Builds the engine for the orders view.
pub fn order_engine() -> RowEngine<OrderRow> {
    RowEngine::new(vec![
        Column::structural("expander").with_kind(ColumnKind::Expander),
        Column::new("id", |row: &OrderRow| match row {
            OrderRow::Order(order) => CellValue::from(&order.id),
            OrderRow::LineItem(item) => CellValue::from(&item.sku),
        })
        .with_title("Order ID"),
        Column::new("date", |row: &OrderRow| match row {
            OrderRow::Order(order) => CellValue::from(&order.date),
            OrderRow::LineItem(_) => CellValue::None,
        })
        .with_title("Date"),
        Column::new("customer", |row: &OrderRow| match row {
            OrderRow::Order(order) => CellValue::from(&order.customer),
            OrderRow::LineItem(item) => CellValue::from(&item.name),
        })
        .with_title("Customer"),
        Column::new("salesChannel", |row: &OrderRow| match row {
            OrderRow::Order(order) => CellValue::from(order.sales_channel.as_str()),
            OrderRow::LineItem(item) => CellValue::from(&item.vendor),
        })
        .with_title("Sales Channel")
        .with_kind(ColumnKind::Icon),
        Column::new("destination", |row: &OrderRow| match row {
            OrderRow::Order(order) => CellValue::from(&order.destination),
            OrderRow::LineItem(item) => CellValue::from(&item.bin),
        })
        .with_title("Destination"),
        Column::new("items", |row: &OrderRow| match row {
            OrderRow::Order(order) => CellValue::from(order.items),
            OrderRow::LineItem(item) => CellValue::from(item.quantity),
        })
        .with_title("Items"),
        Column::new("status", |row: &OrderRow| match row {
            OrderRow::Order(order) => CellValue::from(order.status.as_str()),
            OrderRow::LineItem(item) => CellValue::from(&item.status),
        })
        .with_title("Status")
        .with_kind(ColumnKind::Badge),
        Column::structural("actions").with_kind(ColumnKind::Action),
    ])
    .with_children(OrderRow::children)
    .with_row_id(OrderRow::row_id)
}
