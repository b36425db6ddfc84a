// fixtures/tables/orders.rs
//
// The orders table. Three constraints matter to the validation suite:
// - user_id references users(id) and cascades on delete
// - quantity must be strictly positive (CHECK)
// - total_price is NUMERIC(10,2), decoded as rust_decimal::Decimal so the
//   money assertions are exact

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::fixtures::TestTable;

/// A row from the orders table.
/// user_id is nullable at the column level; the foreign key only constrains
/// non-NULL values.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub user_id: Option<i32>,
    pub product_name: String,
    pub quantity: i32,
    pub total_price: Decimal,
    pub order_date: NaiveDateTime,
}

pub struct OrdersTable;

impl TestTable for OrdersTable {
    fn setup_sql() -> &'static [&'static str] {
        &[r#"
            CREATE TABLE IF NOT EXISTS orders (
                id SERIAL PRIMARY KEY,
                user_id INTEGER REFERENCES users(id) ON DELETE CASCADE,
                product_name VARCHAR(100) NOT NULL,
                quantity INTEGER NOT NULL CHECK (quantity > 0),
                total_price DECIMAL(10,2) NOT NULL,
                order_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
        "#]
    }

    fn teardown_sql() -> &'static [&'static str] {
        &["DROP TABLE IF EXISTS orders CASCADE"]
    }
}
