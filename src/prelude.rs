//! Noir prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine},
    checkout::{
        Checkout, CheckoutForm, DeliveryLocation, OrderPayload, OrderTotals, SHIPPING_FEE,
    },
    fixtures::{Fixture, FixtureError},
    prices::Price,
    products::{Catalog, CatalogError, Product},
    store::{CartCommand, CartObserver, CartStore, NoopObserver},
    summary::{OrderSummary, SummaryRow},
    utils::DemoStorefrontArgs,
};
