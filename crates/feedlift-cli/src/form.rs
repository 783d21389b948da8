//! Maps command-line flags onto a [`ProductInput`].
//!
//! Numeric flags are accepted as free text and coerced leniently: values
//! that do not parse as a number are omitted from the input rather than
//! rejected, matching the sanitization rule that absent fields are simply
//! never sent.

use feedlift_core::ProductInput;

/// Product fields for the single-optimize form.
#[derive(Debug, clap::Args)]
pub struct ProductForm {
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(long)]
    pub currency: Option<String>,
    #[arg(long)]
    pub sku: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub size: Option<String>,
    #[arg(long)]
    pub material: Option<String>,
    #[arg(long)]
    pub weight: Option<String>,
}

impl ProductForm {
    /// Builds the product input, coercing numeric fields or dropping them.
    #[must_use]
    pub fn into_input(self) -> ProductInput {
        ProductInput {
            product_id: self.id,
            title: self.title,
            description: self.description,
            price: parse_number(self.price.as_deref()),
            category: self.category,
            brand: self.brand,
            currency: self.currency,
            sku: self.sku,
            color: self.color,
            size: self.size,
            material: self.material,
            weight: parse_number(self.weight.as_deref()),
        }
    }
}

/// Lenient numeric coercion: unparseable or non-finite input becomes `None`.
fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_accepts_decimals() {
        assert_eq!(parse_number(Some("24.99")), Some(24.99));
        assert_eq!(parse_number(Some(" 12 ")), Some(12.0));
    }

    #[test]
    fn parse_number_drops_garbage() {
        assert_eq!(parse_number(Some("cheap")), None);
        assert_eq!(parse_number(Some("")), None);
        assert_eq!(parse_number(Some("inf")), None);
        assert_eq!(parse_number(None), None);
    }

    #[test]
    fn into_input_coerces_price_and_weight() {
        let form = ProductForm {
            id: Some("P-1".to_string()),
            title: Some("Bottle".to_string()),
            description: None,
            price: Some("24.99".to_string()),
            category: None,
            brand: None,
            currency: None,
            sku: None,
            color: None,
            size: None,
            material: None,
            weight: Some("not-a-number".to_string()),
        };
        let input = form.into_input();
        assert_eq!(input.price, Some(24.99));
        assert_eq!(input.weight, None);
        assert_eq!(input.product_id.as_deref(), Some("P-1"));
    }
}
