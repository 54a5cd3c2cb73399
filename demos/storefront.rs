//! Storefront Example
//!
//! Walks the full storefront flow: load a catalog fixture, dispatch cart
//! commands to an injectable cart store with a subscribed badge observer,
//! render the order summary, and submit a checkout order (the payload is
//! logged, never transmitted).
//!
//! Use `-c` to load a catalog fixture set by name
#![expect(clippy::print_stdout, reason = "Example code")]

use std::io;

use anyhow::Result;
use clap::Parser;
use rusty_money::iso;

use noir::prelude::{
    Cart, CartCommand, CartObserver, CartStore, Checkout, DeliveryLocation, DemoStorefrontArgs,
    Fixture, OrderSummary,
};

/// Header badge: prints the derived item count after every change.
struct BadgeObserver;

impl CartObserver for BadgeObserver {
    fn cart_changed(&mut self, cart: &Cart) {
        println!("[badge] {} items in cart", cart.total_item_count());
    }
}

pub fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let args = DemoStorefrontArgs::parse();

    let fixture = Fixture::from_set(&args.catalog)?;
    let catalog = fixture.catalog()?;

    let mut store = CartStore::new();
    store.subscribe(Box::new(BadgeObserver));

    // Fill the cart: every catalog product once in its first size, then a
    // second unit of the first product so a line merges.
    for product in catalog.products() {
        if let Some(size) = product.sizes.first() {
            store.dispatch(CartCommand::AddLine {
                product: product.clone(),
                size: size.clone(),
            });
        }
    }

    if let Some(product) = catalog.products().first() {
        if let Some(size) = product.sizes.first() {
            store.dispatch(CartCommand::AddLine {
                product: product.clone(),
                size: size.clone(),
            });
        }
        store.dispatch(CartCommand::SetQuantity {
            product_id: product.id.clone(),
            quantity: 3,
        });
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    OrderSummary::from_cart(store.cart()).write_to(&mut handle, iso::USD)?;

    let mut checkout = Checkout::new();
    checkout.form.email = "ada@example.com".to_string();
    checkout.form.first_name = "Ada".to_string();
    checkout.form.last_name = "Noir".to_string();
    checkout.form.phone = "+1 555 0100".to_string();
    checkout.form.address = "1 Mercer St".to_string();
    checkout.form.city = "New York".to_string();
    checkout.form.zip_code = "10013".to_string();
    checkout.form.notes = "Leave with the doorman".to_string();

    checkout.select_location(DeliveryLocation {
        latitude: 40.7128,
        longitude: -74.006,
        address: "40.712800, -74.006000".to_string(),
    });

    let payload = checkout.submit(store.cart());

    println!(
        "order placed: {} lines, total {}",
        payload.lines.len(),
        payload.totals.total.as_money(iso::USD)
    );

    Ok(())
}
