use crate::shared::api_utils::ApiClient;
use crate::shared::grid::GridError;
use contracts::domain::a002_product::aggregate::{Product, ProductDto, ProductListParams, ProductName};

/// Список товаров; с `category_id` только товары категории
pub async fn fetch_list(
    client: &ApiClient,
    params: &ProductListParams,
) -> Result<Vec<Product>, GridError> {
    client.get_json_with("/products", params).await
}

/// Категория передаётся в пути и в теле не нужна
pub async fn create(client: &ApiClient, dto: &ProductDto) -> Result<Product, GridError> {
    let category_id = dto
        .category_id
        .ok_or_else(|| GridError::Validation("Категория обязательна".to_string()))?;
    let body = ProductDto {
        category_id: None,
        ..dto.clone()
    };
    client
        .post_json(&format!("/products/{}/add", category_id), &body)
        .await
}

pub async fn update(client: &ApiClient, id: i64, dto: &ProductDto) -> Result<Product, GridError> {
    client.put_json(&format!("/products/{}", id), dto).await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), GridError> {
    client.delete(&format!("/products/{}", id)).await
}

/// Название товара по id (для позиций заказа)
pub async fn fetch_name(client: &ApiClient, id: i64) -> Result<String, GridError> {
    let name: ProductName = client
        .get_json(&format!("/products/productName/{}", id))
        .await?;
    Ok(name.name)
}
