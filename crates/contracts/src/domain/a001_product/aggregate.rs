use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::variants::{Variant, Variation};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Draft,
        ProductStatus::Published,
        ProductStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Published => "published",
            ProductStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "Draft",
            ProductStatus::Published => "Published",
            ProductStatus::Archived => "Archived",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Product as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub status: ProductStatus,
    /// Image file names, resolved against the static server.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub variations: Vec<Variation>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    /// Price a customer pays before variant deltas.
    pub fn effective_price(&self) -> f64 {
        self.discount_price
            .filter(|d| *d > 0.0 && *d < self.price)
            .unwrap_or(self.price)
    }
}

/// Create/edit form. Images travel as multipart files next to this payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "check_discount", skip_on_field_errors = false))]
pub struct ProductForm {
    #[validate(length(min = 1, max = 200, message = "Product name is required (max 200 characters)"))]
    pub name: String,
    #[validate(length(max = 64, message = "SKU must not exceed 64 characters"))]
    pub sku: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(range(min = 0.01, message = "Price must be greater than zero"))]
    pub price: f64,
    pub discount_price: Option<f64>,
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i64,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category_id: String,
    pub status: ProductStatus,
    /// Already uploaded images that should be kept.
    pub existing_images: Vec<String>,
    pub variations: Vec<Variation>,
    pub variants: Vec<Variant>,
}

fn check_discount(form: &ProductForm) -> Result<(), ValidationError> {
    if let Some(discount) = form.discount_price {
        if discount < 0.0 || discount >= form.price {
            let mut err = ValidationError::new("discount_price");
            err.message = Some("Discount price must be lower than the price".into());
            return Err(err);
        }
    }
    Ok(())
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone().unwrap_or_default(),
            description: product.description.clone(),
            price: product.price,
            discount_price: product.discount_price,
            stock: product.stock,
            category_id: product.category_id.clone().unwrap_or_default(),
            status: product.status,
            existing_images: product.images.clone(),
            variations: product.variations.clone(),
            variants: product.variants.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{validate_form, FormErrors};

    fn form() -> ProductForm {
        ProductForm {
            name: "Linen shirt".into(),
            description: "Breathable".into(),
            price: 40.0,
            stock: 3,
            category_id: "c-1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn discount_must_be_below_price() {
        let mut errors = FormErrors::new();
        assert!(validate_form(&mut errors, &form()));

        let bad = ProductForm {
            discount_price: Some(40.0),
            ..form()
        };
        assert!(!validate_form(&mut errors, &bad));
        assert_eq!(errors.global(), Some("Discount price must be lower than the price"));
    }

    #[test]
    fn required_fields_are_reported_together() {
        let mut errors = FormErrors::new();
        assert!(!validate_form(&mut errors, &ProductForm::default()));
        for field in ["name", "description", "price", "category_id"] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn effective_price_ignores_nonsense_discounts() {
        let mut product = Product {
            price: 10.0,
            discount_price: Some(8.0),
            ..Default::default()
        };
        assert_eq!(product.effective_price(), 8.0);
        product.discount_price = Some(12.0);
        assert_eq!(product.effective_price(), 10.0);
    }

    #[test]
    fn status_parses_wire_values() {
        assert_eq!(ProductStatus::parse("published"), Some(ProductStatus::Published));
        assert_eq!(ProductStatus::parse("gone"), None);
    }
}
