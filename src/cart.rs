//! Cart

use serde::{Deserialize, Serialize};

use crate::{prices::Price, products::Product};

/// A cart line: a product in a chosen size, with a quantity of at least 1.
///
/// Choosing a size that the product actually offers is a precondition for
/// correct catalog usage; the cart itself does not check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Id of the product this line was created from
    pub product_id: String,

    /// Product display name
    pub name: String,

    /// Unit price in minor units
    pub price: Price,

    /// Opaque image reference
    pub image: String,

    /// Category label
    pub category: String,

    /// Chosen size label
    pub size: String,

    /// Quantity, always >= 1
    pub quantity: u32,
}

impl CartLine {
    /// Create a line for one unit of the given product in the given size.
    pub fn new(product: &Product, size: impl Into<String>) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            size: size.into(),
            quantity: 1,
        }
    }

    /// Price of the line: unit price times quantity.
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Cart
///
/// An ordered sequence of [`CartLine`], unique by `(product_id, size)`.
/// Insertion order of distinct keys is preserved; in-place updates never
/// move a line. All operations are total: unknown ids are no-ops, and a
/// quantity of 0 means removal, so 0 is never observable on a line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Add one unit of `product` in `size`.
    ///
    /// An existing `(product_id, size)` line is incremented in place;
    /// otherwise a new line with quantity 1 is appended.
    pub fn add_line(&mut self, product: &Product, size: &str) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id && line.size == size)
        {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine::new(product, size));
        }
    }

    /// Replace the quantity of every line matching `product_id`.
    ///
    /// Lines are addressed by product id alone, so all size variants of the
    /// product are updated together. A quantity of 0 removes the lines
    /// instead. Unknown ids are a no-op and never create a line.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_line(product_id);
            return;
        }

        for line in &mut self.lines {
            if line.product_id == product_id {
                line.quantity = quantity;
            }
        }
    }

    /// Remove every line matching `product_id`. No-op when none match.
    pub fn remove_line(&mut self, product_id: &str) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities over all lines. 0 for an empty cart.
    ///
    /// Recomputed from current state on every call.
    pub fn total_item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Sum of unit price times quantity over all lines. 0 for an empty cart.
    ///
    /// Recomputed from current state on every call.
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The lines, in insertion order of their `(product_id, size)` keys.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
