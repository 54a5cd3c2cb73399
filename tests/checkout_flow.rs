//! Integration test for the full storefront flow: catalog fixture, cart
//! store commands, order summary, and checkout submission.
//!
//! Expected cart after the command sequence below:
//!
//! 1. Essential Black Hoodie (id "1", $89.00), size M, quantity 2
//!    - added twice, so the two adds merge into one line: $178.00
//! 2. Premium Black Tee (id "2", $45.00), size L, quantity 1: $45.00
//! 3. Designer Black Jeans (id "3", $129.00), size 32, quantity 3
//!    - added once, then set to quantity 3: $387.00
//! 4. Stealth Sneakers (id "4", $159.00), size 9 — added and then removed,
//!    so it contributes nothing
//!
//! Subtotal: $178.00 + $45.00 + $387.00 = $610.00 (61000 minor units)
//! Shipping: flat $10.00 (1000 minor units)
//! Total:    $620.00 (62000 minor units)
//! Item count: 2 + 1 + 3 = 6

use std::{cell::RefCell, rc::Rc};

use testresult::TestResult;

use noir::prelude::{
    Cart, CartCommand, CartObserver, CartStore, Checkout, DeliveryLocation, Fixture, OrderSummary,
    Price, SHIPPING_FEE,
};

/// Records the item count seen at each notification, like a header badge.
struct Badge {
    counts: Rc<RefCell<Vec<u64>>>,
}

impl CartObserver for Badge {
    fn cart_changed(&mut self, cart: &Cart) {
        self.counts.borrow_mut().push(cart.total_item_count());
    }
}

fn add(store: &mut CartStore, fixture: &Fixture, id: &str, size: &str) -> TestResult {
    store.dispatch(CartCommand::AddLine {
        product: fixture.product(id)?.clone(),
        size: size.to_string(),
    });

    Ok(())
}

#[test]
fn storefront_flow_from_catalog_to_order_payload() -> TestResult {
    let fixture = Fixture::from_set("noir")?;

    let counts = Rc::new(RefCell::new(Vec::new()));
    let mut store = CartStore::new();

    store.subscribe(Box::new(Badge {
        counts: Rc::clone(&counts),
    }));

    add(&mut store, &fixture, "1", "M")?;
    add(&mut store, &fixture, "1", "M")?;
    add(&mut store, &fixture, "2", "L")?;
    add(&mut store, &fixture, "3", "32")?;
    store.dispatch(CartCommand::SetQuantity {
        product_id: "3".to_string(),
        quantity: 3,
    });
    add(&mut store, &fixture, "4", "9")?;
    store.dispatch(CartCommand::RemoveLine {
        product_id: "4".to_string(),
    });

    // Cart state: three lines in insertion order, sneakers gone.
    let cart = store.cart();
    let keys: Vec<(&str, &str, u32)> = cart
        .lines()
        .iter()
        .map(|line| (line.product_id.as_str(), line.size.as_str(), line.quantity))
        .collect();

    assert_eq!(keys, [("1", "M", 2), ("2", "L", 1), ("3", "32", 3)]);
    assert_eq!(cart.total_item_count(), 6);
    assert_eq!(cart.total_price(), Price::new(61000));

    // The badge saw every intermediate count.
    assert_eq!(*counts.borrow(), [1, 2, 3, 4, 6, 7, 6]);

    // Order summary mirrors the cart and adds the flat shipping fee.
    let summary = OrderSummary::from_cart(cart);

    assert_eq!(summary.rows().len(), 3);
    assert_eq!(summary.totals().subtotal, Price::new(61000));
    assert_eq!(summary.totals().shipping, SHIPPING_FEE);
    assert_eq!(summary.totals().total, Price::new(62000));

    // Checkout bundles the snapshot, form and picked location.
    let mut checkout = Checkout::new();
    checkout.form.email = "ada@example.com".to_string();
    checkout.form.city = "New York".to_string();
    checkout.select_location(DeliveryLocation {
        latitude: 40.7128,
        longitude: -74.006,
        address: "40.712800, -74.006000".to_string(),
    });

    let payload = checkout.submit(cart);

    assert_eq!(payload.lines, cart.lines().to_vec());
    assert_eq!(payload.totals.total, Price::new(62000));
    assert_eq!(payload.form.email, "ada@example.com");
    assert_eq!(
        payload.delivery_location.as_ref().map(|loc| loc.address.as_str()),
        Some("40.712800, -74.006000")
    );

    // Submission does not consume the cart; clearing is explicit.
    assert_eq!(store.cart().total_item_count(), 6);

    store.dispatch(CartCommand::Clear);

    assert!(store.cart().is_empty());
    assert_eq!(store.cart().total_price(), Price::ZERO);

    Ok(())
}
