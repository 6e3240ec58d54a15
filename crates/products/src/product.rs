use rust_decimal::{Decimal, RoundingStrategy};

use stockroom_core::{DomainError, DomainResult, Entity, ValueObject};

/// Currency symbol used by `Display for Product`.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

const NAME_WIDTH: usize = 20;
const PRICE_WIDTH: usize = 10;
const STOCK_WIDTH: usize = 5;

/// Case-insensitive identity of a product, derived from its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductKey(String);

impl ProductKey {
    /// Lookup key for a raw name: lower-cased, otherwise exact (whitespace counts).
    pub fn from_name(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Product name, kept exactly as given. Must contain a non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ValueObject for ProductName {}

impl ProductName {
    pub fn new(name: impl AsRef<str>) -> DomainResult<Self> {
        let name = name.as_ref();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "name",
                "Product name cannot be empty.",
            ));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn key(&self) -> ProductKey {
        ProductKey::from_name(&self.0)
    }
}

/// Strictly positive unit price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

impl ValueObject for Price {}

impl Price {
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::invalid_argument(
                "price",
                "Price must be greater than zero.",
            ));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Render as currency: symbol followed by the amount at two decimal places.
    ///
    /// Midpoints round away from zero (`0.005` -> `0.01`).
    pub fn format_currency(&self, symbol: &str) -> String {
        let mut cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        cents.rescale(2);
        format!("{symbol}{cents}")
    }
}

/// A catalog entry: fixed name, fixed price, mutable stock level.
///
/// Invariants (hold for the whole lifetime of a value):
/// - `price > 0`
/// - `stock_quantity >= 0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    key: ProductKey,
    name: ProductName,
    price: Price,
    stock_quantity: i64,
}

impl Product {
    /// Validate and build a product.
    ///
    /// Arguments are checked in order (name, price, stock) and the first
    /// violation is returned as `DomainError::InvalidArgument`.
    pub fn new(name: impl AsRef<str>, price: Decimal, stock_quantity: i64) -> DomainResult<Self> {
        let name = ProductName::new(name)?;
        let price = Price::new(price)?;
        if stock_quantity < 0 {
            return Err(DomainError::invalid_argument(
                "stock_quantity",
                "Stock quantity cannot be negative.",
            ));
        }

        Ok(Self {
            key: name.key(),
            name,
            price,
            stock_quantity,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn key(&self) -> &ProductKey {
        &self.key
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock_quantity(&self) -> i64 {
        self.stock_quantity
    }

    /// Overwrite the stock level. Negative quantities are refused and leave the
    /// product untouched.
    pub fn set_stock_quantity(&mut self, stock_quantity: i64) -> DomainResult<()> {
        if stock_quantity < 0 {
            return Err(DomainError::invalid_argument(
                "stock_quantity",
                "Stock quantity cannot be negative.",
            ));
        }
        self.stock_quantity = stock_quantity;
        Ok(())
    }

    /// Fixed-width display line using `symbol` for the price.
    pub fn display_with<'a>(&'a self, symbol: &'a str) -> ProductLine<'a> {
        ProductLine {
            product: self,
            symbol,
        }
    }
}

impl Entity for Product {
    type Id = ProductKey;

    fn id(&self) -> &Self::Id {
        &self.key
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.display_with(DEFAULT_CURRENCY_SYMBOL), f)
    }
}

/// Display adapter produced by [`Product::display_with`].
#[derive(Debug, Clone, Copy)]
pub struct ProductLine<'a> {
    product: &'a Product,
    symbol: &'a str,
}

impl core::fmt::Display for ProductLine<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product: {:<name_w$} | Price: {:>price_w$} | Stock: {:>stock_w$}",
            self.product.name(),
            self.product.price.format_currency(self.symbol),
            self.product.stock_quantity,
            name_w = NAME_WIDTH,
            price_w = PRICE_WIDTH,
            stock_w = STOCK_WIDTH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn new_product_keeps_inputs() {
        let product = Product::new("Widget", dec("9.99"), 10).unwrap();
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.price().amount(), dec("9.99"));
        assert_eq!(product.stock_quantity(), 10);
        assert_eq!(product.key().as_str(), "widget");
    }

    #[test]
    fn new_product_keeps_surrounding_whitespace() {
        let product = Product::new(" Widget ", dec("1"), 1).unwrap();
        assert_eq!(product.name(), " Widget ");
        assert_eq!(product.key().as_str(), " widget ");
        assert_ne!(product.key(), &ProductKey::from_name("Widget"));
    }

    #[test]
    fn new_product_accepts_zero_stock() {
        let product = Product::new("Gadget", dec("0.01"), 0).unwrap();
        assert_eq!(product.stock_quantity(), 0);
    }

    #[test]
    fn new_product_rejects_empty_name() {
        for name in ["", "   ", "\t\n"] {
            let DomainError::InvalidArgument { field, message } =
                Product::new(name, dec("1.00"), 1).unwrap_err();
            assert_eq!(field, "name");
            assert_eq!(message, "Product name cannot be empty.");
        }
    }

    #[test]
    fn new_product_rejects_non_positive_price() {
        for price in ["0", "-0.01", "-10"] {
            let err = Product::new("Widget", dec(price), 1).unwrap_err();
            assert_eq!(err.field(), "price");
            assert_eq!(err.message(), "Price must be greater than zero.");
        }
    }

    #[test]
    fn new_product_rejects_negative_stock() {
        let err = Product::new("Widget", dec("1.00"), -1).unwrap_err();
        assert_eq!(err.field(), "stock_quantity");
        assert_eq!(err.message(), "Stock quantity cannot be negative.");
    }

    #[test]
    fn name_is_checked_before_price_and_stock() {
        let err = Product::new(" ", dec("0"), -5).unwrap_err();
        assert_eq!(err.field(), "name");

        let err = Product::new("Widget", dec("0"), -5).unwrap_err();
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn set_stock_quantity_refuses_negative() {
        let mut product = Product::new("Widget", dec("9.99"), 10).unwrap();
        assert!(product.set_stock_quantity(-1).is_err());
        assert_eq!(product.stock_quantity(), 10);

        product.set_stock_quantity(0).unwrap();
        assert_eq!(product.stock_quantity(), 0);
    }

    #[test]
    fn identity_ignores_case_and_stock() {
        let a = Product::new("Widget", dec("9.99"), 10).unwrap();
        let b = Product::new("wIDGET", dec("5.00"), 3).unwrap();
        assert_eq!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn price_formats_as_currency() {
        assert_eq!(Price::new(dec("9.99")).unwrap().format_currency("$"), "$9.99");
        assert_eq!(Price::new(dec("5")).unwrap().format_currency("$"), "$5.00");
        assert_eq!(Price::new(dec("1.5")).unwrap().format_currency("€"), "€1.50");
        assert_eq!(Price::new(dec("0.005")).unwrap().format_currency("$"), "$0.01");
        assert_eq!(Price::new(dec("2.344")).unwrap().format_currency("$"), "$2.34");
    }

    #[test]
    fn display_line_is_fixed_width() {
        let product = Product::new("Widget", dec("9.99"), 10).unwrap();
        assert_eq!(
            product.to_string(),
            "Product: Widget               | Price:      $9.99 | Stock:    10"
        );
    }

    #[test]
    fn display_line_does_not_truncate_long_names() {
        let name = "An Exceptionally Long Product Name";
        let product = Product::new(name, dec("1"), 1).unwrap();
        assert!(product.to_string().starts_with(&format!("Product: {name} | Price:")));
    }

    #[test]
    fn display_with_uses_given_symbol() {
        let product = Product::new("Widget", dec("9.99"), 10).unwrap();
        let line = product.display_with("£").to_string();
        assert!(line.contains("Price:      £9.99 |"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: valid inputs always construct, and fields equal the inputs
            /// (surrounding spaces included).
            #[test]
            fn valid_inputs_construct(
                name in " {0,3}[A-Za-z][A-Za-z0-9 ]{0,40}",
                cents in 1i64..100_000_000,
                stock in 0i64..1_000_000,
            ) {
                let price = Decimal::new(cents, 2);
                let product = Product::new(&name, price, stock).unwrap();
                prop_assert_eq!(product.name(), name.as_str());
                prop_assert_eq!(product.price().amount(), price);
                prop_assert_eq!(product.stock_quantity(), stock);
            }

            /// Property: any non-positive price or negative stock is rejected.
            #[test]
            fn invalid_numbers_are_rejected(
                cents in -100_000_000i64..=0,
                stock in i64::MIN..0,
            ) {
                let price_err = Product::new("Widget", Decimal::new(cents, 2), 1).unwrap_err();
                prop_assert_eq!(price_err.field(), "price");

                let stock_err = Product::new("Widget", Decimal::ONE, stock).unwrap_err();
                prop_assert_eq!(stock_err.field(), "stock_quantity");
            }

            /// Property: the key is identical for every casing of a name.
            #[test]
            fn key_is_case_insensitive(name in "[A-Za-z]{1,30}") {
                prop_assert_eq!(
                    ProductKey::from_name(&name.to_uppercase()),
                    ProductKey::from_name(&name.to_lowercase())
                );
            }
        }
    }
}
