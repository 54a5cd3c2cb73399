//! Order Summary

use std::io;

use rusty_money::iso::Currency;
use tabled::{Table, Tabled};

use crate::{cart::Cart, checkout::OrderTotals, prices::Price};

/// One summary row: a cart line with its derived line total.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Product display name
    pub name: String,

    /// Chosen size label
    pub size: String,

    /// Line quantity
    pub quantity: u32,

    /// Unit price times quantity
    pub line_total: Price,
}

/// Display form of a row, with money bound to a currency.
#[derive(Tabled)]
struct DisplayRow {
    #[tabled(rename = "Item")]
    name: String,

    #[tabled(rename = "Size")]
    size: String,

    #[tabled(rename = "Qty")]
    quantity: u32,

    #[tabled(rename = "Total")]
    line_total: String,
}

/// The order summary shown at checkout: one row per cart line plus the
/// derived totals. Built fresh from a cart snapshot; binds a currency only
/// when written out.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    rows: Vec<SummaryRow>,
    totals: OrderTotals,
}

impl OrderSummary {
    /// Build the summary from the current cart state.
    pub fn from_cart(cart: &Cart) -> Self {
        let rows = cart
            .lines()
            .iter()
            .map(|line| SummaryRow {
                name: line.name.clone(),
                size: line.size.clone(),
                quantity: line.quantity,
                line_total: line.line_total(),
            })
            .collect();

        OrderSummary {
            rows,
            totals: OrderTotals::from_cart(cart),
        }
    }

    /// The per-line rows, in cart order.
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    /// The derived order totals.
    pub fn totals(&self) -> OrderTotals {
        self.totals
    }

    /// Write the summary as a table followed by the totals, formatted in the
    /// given display currency.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if writing to the writer fails.
    pub fn write_to(
        &self,
        writer: &mut impl io::Write,
        currency: &'static Currency,
    ) -> io::Result<()> {
        let rows: Vec<DisplayRow> = self
            .rows
            .iter()
            .map(|row| DisplayRow {
                name: row.name.clone(),
                size: row.size.clone(),
                quantity: row.quantity,
                line_total: row.line_total.as_money(currency).to_string(),
            })
            .collect();

        writeln!(writer, "{}", Table::new(rows))?;
        writeln!(writer, "Subtotal: {}", self.totals.subtotal.as_money(currency))?;
        writeln!(writer, "Shipping: {}", self.totals.shipping.as_money(currency))?;
        writeln!(writer, "Total:    {}", self.totals.total.as_money(currency))?;

        Ok(())
    }
}
