use crate::products::Product;

/// TaxCalculator derives the `taxes` attribute of listed products
#[derive(Debug, Clone, Copy)]
pub struct TaxCalculator {
    rate: f64,
}

impl TaxCalculator {
    /// Flat tax rate applied to every product price
    pub const TAX_RATE: f64 = 0.19;

    pub fn new() -> Self {
        Self {
            rate: Self::TAX_RATE,
        }
    }

    /// Calculate tax amount for a price
    ///
    /// tax = price × rate, clamped at zero. Non-positive (and NaN) prices
    /// produce zero. No rounding is applied.
    pub fn calculate_tax(&self, price: f64) -> f64 {
        if price > 0.0 {
            price * self.rate
        } else {
            0.0
        }
    }

    /// Overwrite `taxes` on every product, keeping their order
    pub fn apply(&self, products: &mut [Product]) {
        for product in products.iter_mut() {
            product.taxes = Some(self.calculate_tax(product.price));
        }
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
