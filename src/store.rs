//! Cart Store

use std::fmt;

use crate::{cart::Cart, products::Product};

/// Command messages dispatched to the cart store.
///
/// The view layer sends these instead of calling cart methods directly,
/// keeping every consumer decoupled from the store's internals.
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    /// Add one unit of a product in a chosen size.
    AddLine {
        /// The catalog product to add
        product: Product,
        /// The chosen size label
        size: String,
    },

    /// Replace the quantity of every line matching a product id.
    /// A quantity of 0 removes the lines instead.
    SetQuantity {
        /// Product id addressing the lines
        product_id: String,
        /// New quantity; 0 removes
        quantity: u32,
    },

    /// Remove every line matching a product id.
    RemoveLine {
        /// Product id addressing the lines
        product_id: String,
    },

    /// Empty the cart unconditionally.
    Clear,
}

/// Observer notified after every dispatched command.
///
/// Dispatch is synchronous and single-threaded, so an observer only ever
/// sees the post-state of a command, never an intermediate one.
pub trait CartObserver {
    /// Called with the cart after a command has been applied.
    fn cart_changed(&mut self, cart: &Cart);
}

/// Observer that ignores all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {
    fn cart_changed(&mut self, _cart: &Cart) {}
}

/// The sole writer of cart state.
///
/// Explicitly constructed and passed by reference to every consumer; there
/// is no ambient global instance. Consumers subscribe for change
/// notification and read the current snapshot through [`CartStore::cart`].
#[derive(Default)]
pub struct CartStore {
    cart: Cart,
    observers: Vec<Box<dyn CartObserver>>,
}

impl CartStore {
    /// Create a store with an empty cart and no subscribers.
    #[must_use]
    pub fn new() -> Self {
        CartStore {
            cart: Cart::new(),
            observers: Vec::new(),
        }
    }

    /// Subscribe an observer to change notifications.
    pub fn subscribe(&mut self, observer: Box<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// Apply a command to the cart, then notify every subscriber.
    ///
    /// Notification fires on every dispatch, including no-op commands,
    /// mirroring a re-render pass after each state-setting event.
    pub fn dispatch(&mut self, command: CartCommand) {
        match command {
            CartCommand::AddLine { product, size } => self.cart.add_line(&product, &size),
            CartCommand::SetQuantity {
                product_id,
                quantity,
            } => self.cart.set_quantity(&product_id, quantity),
            CartCommand::RemoveLine { product_id } => self.cart.remove_line(&product_id),
            CartCommand::Clear => self.cart.clear(),
        }

        for observer in &mut self.observers {
            observer.cart_changed(&self.cart);
        }
    }

    /// The current cart snapshot.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("observers", &self.observers.len())
            .finish()
    }
}
