use serde::{Deserialize, Serialize};

/// Сводные показатели для главной панели (`GET /dashboard/stats`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub order_count: i64,
    pub customer_count: i64,
    pub total_sales: f64,
    pub product_count: i64,
}
