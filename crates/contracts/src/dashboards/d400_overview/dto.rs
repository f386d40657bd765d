use serde::{Deserialize, Serialize};

use crate::domain::a003_order::aggregate::OrderStatus;

/// Response of the overview dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub pending_orders: u64,
    #[serde(default)]
    pub total_customers: u64,
    #[serde(default)]
    pub total_products: u64,
    /// Products whose stock is at or below the low-stock threshold
    #[serde(default)]
    pub low_stock_products: u64,
    #[serde(default)]
    pub new_inquiries: u64,
    /// Daily revenue, oldest first
    #[serde(default)]
    pub sales: Vec<SalesPoint>,
    #[serde(default)]
    pub recent_orders: Vec<RecentOrder>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoint {
    /// Day in format "YYYY-MM-DD"
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub orders: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub id: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl DashboardSummary {
    pub fn average_order_value(&self) -> f64 {
        if self.total_orders == 0 {
            0.0
        } else {
            self.total_revenue / self.total_orders as f64
        }
    }

    /// Highest daily revenue, used to scale the sales bars.
    pub fn peak_revenue(&self) -> f64 {
        self.sales.iter().map(|p| p.revenue).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_summary_decodes_with_defaults() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{"totalRevenue": 1200.0, "totalOrders": 4, "sales": [{"date": "2026-10-01", "revenue": 700.0}]}"#,
        )
        .unwrap();
        assert_eq!(summary.average_order_value(), 300.0);
        assert_eq!(summary.peak_revenue(), 700.0);
        assert!(summary.recent_orders.is_empty());
    }

    #[test]
    fn average_of_no_orders_is_zero() {
        assert_eq!(DashboardSummary::default().average_order_value(), 0.0);
    }
}
