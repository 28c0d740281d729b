use crate::constants::CURRENCY_SYMBOL;

use std::fmt;
use std::iter::Sum;

/// An amount of money held as whole cents.
///
/// The text form always carries two fractional digits, so `51207` cents
/// displays as `512.07`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

impl Price {
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    #[must_use]
    pub const fn cents(self) -> u64 {
        self.cents
    }

    #[must_use]
    pub fn with_currency(self) -> String {
        format!("{CURRENCY_SYMBOL}{self}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::from_cents(iter.map(Self::cents).sum())
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::Price;

    #[test]
    fn formats_two_fractional_digits() {
        assert_eq!(Price::from_cents(51207).to_string(), "512.07");
        assert_eq!(Price::from_cents(20000).to_string(), "200.00");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn prefixes_currency_symbol() {
        assert_eq!(Price::from_cents(79999).with_currency(), "£799.99");
    }

    #[test]
    fn sums_cents() {
        let prices = [Price::from_cents(150), Price::from_cents(275)];
        assert_eq!(prices.iter().sum::<Price>(), Price::from_cents(425));
        assert_eq!(Vec::<Price>::new().into_iter().sum::<Price>(), Price::default());
    }
}
