use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Returned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Returned => "returned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Returned => "Returned",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Pending,
        PaymentStatus::Paid,
        PaymentStatus::Failed,
        PaymentStatus::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub variant_label: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub shipping_address: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub shipping_cost: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub courier_id: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Status update sent by the order detail screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "check_shipping", skip_on_field_errors = false))]
pub struct UpdateOrderStatusForm {
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub courier_id: Option<String>,
    #[validate(length(max = 64, message = "Tracking number must not exceed 64 characters"))]
    pub tracking_number: String,
    #[validate(length(max = 500, message = "Note must not exceed 500 characters"))]
    pub note: String,
}

fn check_shipping(form: &UpdateOrderStatusForm) -> Result<(), ValidationError> {
    let has_courier = form.courier_id.as_deref().is_some_and(|c| !c.is_empty());
    if form.status == OrderStatus::Shipped && !has_courier {
        let mut err = ValidationError::new("courier");
        err.message = Some("Select a courier before marking the order as shipped".into());
        return Err(err);
    }
    Ok(())
}

impl From<&Order> for UpdateOrderStatusForm {
    fn from(order: &Order) -> Self {
        Self {
            status: order.status,
            payment_status: order.payment_status,
            courier_id: order.courier_id.clone(),
            tracking_number: order.tracking_number.clone().unwrap_or_default(),
            note: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{validate_form, FormErrors};

    #[test]
    fn shipping_requires_courier() {
        let mut errors = FormErrors::new();
        let form = UpdateOrderStatusForm {
            status: OrderStatus::Shipped,
            ..Default::default()
        };
        assert!(!validate_form(&mut errors, &form));
        assert!(errors.global().is_some());

        let form = UpdateOrderStatusForm {
            courier_id: Some("k-1".into()),
            ..form
        };
        assert!(validate_form(&mut errors, &form));
    }

    #[test]
    fn order_parses_minimal_payload() {
        let order: Order = serde_json::from_str(
            r##"{"id":"o1","orderNumber":"#1001","customerName":"Bo","total":12.5,
                "items":[{"productId":"p","productName":"Cap","quantity":2,"unitPrice":4.0}],
                "status":"shipped","paymentStatus":"paid"}"##,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.payment_status, PaymentStatus::Paid);
        assert_eq!(order.items[0].line_total(), 8.0);
    }
}
