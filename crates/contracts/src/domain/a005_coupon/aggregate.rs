use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::common::{parse_date, validate_date};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Fixed => "fixed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "percentage" => Some(DiscountType::Percentage),
            "fixed" => Some(DiscountType::Fixed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub discount_type: DiscountType,
    #[serde(default)]
    pub discount_value: f64,
    #[serde(default)]
    pub min_order_amount: f64,
    #[serde(default)]
    pub max_uses: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    #[serde(default)]
    pub starts_at: String,
    #[serde(default)]
    pub expires_at: String,
    #[serde(default)]
    pub is_active: bool,
}

impl Coupon {
    /// Display form of the discount, e.g. `"15%"` or `"5.00"`.
    pub fn discount_label(&self) -> String {
        match self.discount_type {
            DiscountType::Percentage => format!("{}%", self.discount_value),
            DiscountType::Fixed => format!("{:.2}", self.discount_value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "check_coupon", skip_on_field_errors = false))]
pub struct CouponForm {
    #[validate(
        length(min = 3, max = 32, message = "Code must be 3 to 32 characters"),
        custom(function = "validate_code")
    )]
    pub code: String,
    pub discount_type: DiscountType,
    #[validate(range(min = 0.01, message = "Discount must be greater than zero"))]
    pub discount_value: f64,
    #[validate(range(min = 0.0, message = "Minimum order amount cannot be negative"))]
    pub min_order_amount: f64,
    pub max_uses: Option<u32>,
    #[validate(custom(function = "validate_date"))]
    pub starts_at: String,
    #[validate(custom(function = "validate_date"))]
    pub expires_at: String,
    pub is_active: bool,
}

fn validate_code(code: &str) -> Result<(), ValidationError> {
    if code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Ok(());
    }
    let mut err = ValidationError::new("code");
    err.message = Some("Use letters, digits, '-' or '_' only".into());
    Err(err)
}

fn check_coupon(form: &CouponForm) -> Result<(), ValidationError> {
    if form.discount_type == DiscountType::Percentage && form.discount_value > 100.0 {
        let mut err = ValidationError::new("percentage");
        err.message = Some("A percentage discount cannot exceed 100".into());
        return Err(err);
    }
    if let (Some(starts), Some(expires)) = (parse_date(&form.starts_at), parse_date(&form.expires_at)) {
        if expires < starts {
            let mut err = ValidationError::new("window");
            err.message = Some("Expiry date must not precede the start date".into());
            return Err(err);
        }
    }
    Ok(())
}

impl CouponForm {
    /// Codes are stored upper-case.
    pub fn normalized(mut self) -> Self {
        self.code = self.code.trim().to_uppercase();
        self
    }
}

impl From<&Coupon> for CouponForm {
    fn from(coupon: &Coupon) -> Self {
        Self {
            code: coupon.code.clone(),
            discount_type: coupon.discount_type,
            discount_value: coupon.discount_value,
            min_order_amount: coupon.min_order_amount,
            max_uses: coupon.max_uses,
            starts_at: coupon.starts_at.chars().take(10).collect(),
            expires_at: coupon.expires_at.chars().take(10).collect(),
            is_active: coupon.is_active,
        }
    }
}

/// Code availability check before saving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponCheckRequest {
    pub code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponCheckResponse {
    #[serde(default)]
    pub available: bool,
}
