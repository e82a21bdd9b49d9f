use crate::shared::api_utils::ApiClient;
use crate::shared::grid::GridError;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};

pub async fn fetch_all(client: &ApiClient) -> Result<Vec<Category>, GridError> {
    client.get_json("/categories/all").await
}

pub async fn create(client: &ApiClient, dto: &CategoryDto) -> Result<Category, GridError> {
    client.post_json("/categories/register", dto).await
}

pub async fn update(client: &ApiClient, id: i64, dto: &CategoryDto) -> Result<Category, GridError> {
    client.put_json(&format!("/categories/{}", id), dto).await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), GridError> {
    client.delete(&format!("/categories/{}", id)).await
}
