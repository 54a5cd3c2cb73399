//! Checkout

use serde::{Deserialize, Serialize};

use crate::{
    cart::{Cart, CartLine},
    prices::Price,
};

/// Flat delivery fee in minor units, applied to every order.
pub const SHIPPING_FEE: Price = Price::new(1_000);

/// A point picked on the delivery map.
///
/// Produced by the map collaborator's selection callback and held opaquely;
/// the core never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryLocation {
    /// Latitude of the picked point
    pub latitude: f64,

    /// Longitude of the picked point
    pub longitude: f64,

    /// Formatted address string for the picked point
    pub address: String,
}

/// Checkout form field text.
///
/// Plain transient state; required-field validation is the form renderer's
/// concern, not the core's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    /// Contact email
    pub email: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Phone number
    pub phone: String,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// ZIP code
    pub zip_code: String,

    /// Free-text delivery notes
    pub notes: String,
}

/// Order totals: cart subtotal plus the flat shipping fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    /// Cart subtotal
    pub subtotal: Price,

    /// Flat shipping fee
    pub shipping: Price,

    /// Subtotal plus shipping
    pub total: Price,
}

impl OrderTotals {
    /// Derive the totals from the current cart state.
    pub fn from_cart(cart: &Cart) -> Self {
        let subtotal = cart.total_price();

        OrderTotals {
            subtotal,
            shipping: SHIPPING_FEE,
            total: subtotal + SHIPPING_FEE,
        }
    }
}

/// The bundle handed to a submission collaborator on form submit.
///
/// In this system the payload is only logged, never transmitted; a real
/// submission interface is an external collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPayload {
    /// Checkout form fields at submit time
    pub form: CheckoutForm,

    /// Delivery location, if one was picked on the map
    pub delivery_location: Option<DeliveryLocation>,

    /// Snapshot of the cart lines at submit time
    pub lines: Vec<CartLine>,

    /// Derived order totals at submit time
    pub totals: OrderTotals,
}

/// Checkout state: the form fields plus the map-picked delivery location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Checkout {
    /// Form field text
    pub form: CheckoutForm,

    delivery_location: Option<DeliveryLocation>,
}

impl Checkout {
    /// Create a checkout with empty form fields and no location.
    #[must_use]
    pub fn new() -> Self {
        Checkout {
            form: CheckoutForm::default(),
            delivery_location: None,
        }
    }

    /// Store the location picked on the map. Target of the map
    /// collaborator's selection callback; a later pick replaces the value.
    pub fn select_location(&mut self, location: DeliveryLocation) {
        self.delivery_location = Some(location);
    }

    /// The currently selected delivery location, if any.
    pub fn delivery_location(&self) -> Option<&DeliveryLocation> {
        self.delivery_location.as_ref()
    }

    /// Bundle the current cart snapshot, form fields and delivery location
    /// into an order payload, and log it.
    pub fn submit(&self, cart: &Cart) -> OrderPayload {
        let payload = OrderPayload {
            form: self.form.clone(),
            delivery_location: self.delivery_location.clone(),
            lines: cart.lines().to_vec(),
            totals: OrderTotals::from_cart(cart),
        };

        tracing::info!(order = ?payload, "order submitted");

        payload
    }
}
