use contracts::dashboards::d400_overview::DashboardSummary;
use contracts::shared::{ApiError, ApiResponse};

use crate::shared::api_client::{ApiClient, Transport};

const SUMMARY_PATH: &str = "/dashboard/summary";

pub async fn fetch_summary<T: Transport>(
    client: &ApiClient<T>,
) -> Result<ApiResponse<DashboardSummary>, ApiError> {
    client.get(SUMMARY_PATH, None).await
}

/// Height of a sales bar in percent of the busiest day.
pub fn bar_height(revenue: f64, peak: f64) -> f64 {
    if peak <= 0.0 {
        0.0
    } else {
        (revenue / peak * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{client, ScriptedTransport};
    use crate::shared::api_client::Method;
    use futures::executor::block_on;

    #[test]
    fn summary_is_fetched_with_recent_orders() {
        let transport = ScriptedTransport::default();
        transport.reply(
            200,
            r##"{"status":200,"data":{"totalRevenue":950.5,"totalOrders":3,"pendingOrders":1,
                "sales":[{"date":"2026-10-18","revenue":500.0},{"date":"2026-10-19","revenue":450.5}],
                "recentOrders":[{"id":"o-1","orderNumber":"#1001","customerName":"Bo","total":20.0,"status":"pending"}]}}"##,
        );

        let summary = block_on(fetch_summary(&client(&transport))).unwrap().data;
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.recent_orders[0].order_number, "#1001");
        assert_eq!(summary.peak_revenue(), 500.0);

        let sent = transport.last();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url, "http://api.test/api/dashboard/summary");
    }

    #[test]
    fn bars_scale_to_the_peak() {
        assert_eq!(bar_height(250.0, 500.0), 50.0);
        assert_eq!(bar_height(500.0, 500.0), 100.0);
        assert_eq!(bar_height(10.0, 0.0), 0.0);
    }
}
