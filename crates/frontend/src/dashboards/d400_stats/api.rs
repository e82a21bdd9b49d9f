use crate::shared::api_utils::ApiClient;
use crate::shared::grid::GridError;
use contracts::dashboards::d400_stats::DashboardStats;

/// Сводные показатели магазина
pub async fn fetch_stats(client: &ApiClient) -> Result<DashboardStats, GridError> {
    client.get_json("/dashboard/stats").await
}
