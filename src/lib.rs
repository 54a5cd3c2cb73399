//! Noir
//!
//! Noir is the state core of a client-side storefront: a product catalog, a
//! cart store with merge-on-duplicate line items and derived totals, and
//! checkout form state with a map-picked delivery location.

pub mod cart;
pub mod checkout;
pub mod fixtures;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod store;
pub mod summary;
pub mod utils;
