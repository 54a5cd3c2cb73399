//! Prices

use std::{
    iter::Sum,
    ops::{Add, Deref},
};

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// Represents a price in pence/cents.
///
/// Prices are currency-agnostic minor units; a currency is only bound at
/// display time via [`Price::as_money`]. Arithmetic saturates so totals stay
/// total functions over any cart contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    value: u64,
}

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self::new(0);

    /// Creates a new Price
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Price { value }
    }

    /// Multiplies the price by a quantity, saturating at `u64::MAX`.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Price::new(self.value.saturating_mul(u64::from(quantity)))
    }

    /// Converts the price into a [`Money`] value for display in the given
    /// currency.
    pub fn as_money(self, currency: &'static Currency) -> Money<'static, Currency> {
        Money::from_minor(i64::try_from(self.value).unwrap_or(i64::MAX), currency)
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl Add for Price {
    type Output = Self;

    /// Saturating addition.
    fn add(self, rhs: Self) -> Self {
        Price::new(self.value.saturating_add(rhs.value))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    #[test]
    fn new_price() {
        let price = Price::new(1000);

        assert_eq!(price.value, 1000);
    }

    #[test]
    fn price_derefs_to_u64() {
        let price = Price { value: 100 };

        assert_eq!(*price, 100);
    }

    #[test]
    fn times_multiplies_by_quantity() {
        let price = Price::new(8900);

        assert_eq!(price.times(2), Price::new(17800));
    }

    #[test]
    fn times_saturates_instead_of_overflowing() {
        let price = Price::new(u64::MAX);

        assert_eq!(price.times(2), Price::new(u64::MAX));
    }

    #[test]
    fn add_saturates_instead_of_overflowing() {
        let total = Price::new(u64::MAX) + Price::new(1);

        assert_eq!(total, Price::new(u64::MAX));
    }

    #[test]
    fn sum_of_prices() {
        let total: Price = [Price::new(100), Price::new(200), Price::new(300)]
            .into_iter()
            .sum();

        assert_eq!(total, Price::new(600));
    }

    #[test]
    fn sum_of_no_prices_is_zero() {
        let total: Price = std::iter::empty().sum();

        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn as_money_binds_the_given_currency() {
        let price = Price::new(8900);

        assert_eq!(price.as_money(iso::USD), Money::from_minor(8900, iso::USD));
    }
}
