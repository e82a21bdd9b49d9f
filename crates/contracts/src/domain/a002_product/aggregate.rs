use serde::{Deserialize, Serialize};

/// Товар каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
    /// Скидка как доля (0.15 = 15%)
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub special_price: f64,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub category_id: i64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Тело запроса на создание/изменение товара.
///
/// При создании категория передаётся в пути (`/products/{categoryId}/add`),
/// поэтому `category_id` сериализуется только когда задан.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub price: f64,
    pub discount: f64,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category_id: Option<i64>,
}

impl ProductDto {
    /// Проверка обязательных полей формы
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название обязательно".into());
        }
        if self.description.trim().is_empty() {
            return Err("Описание обязательно".into());
        }
        if self.quantity < 0 {
            return Err("Количество не может быть отрицательным".into());
        }
        if self.price.is_nan() || self.price <= 0.0 {
            return Err("Цена должна быть больше нуля".into());
        }
        if self.discount < 0.0 {
            return Err("Скидка не может быть отрицательной".into());
        }
        if self.image_url.trim().is_empty() {
            return Err("Ссылка на изображение обязательна".into());
        }
        if self.category_id.is_none() {
            return Err("Категория обязательна".into());
        }
        Ok(())
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone(),
            quantity: p.quantity,
            price: p.price,
            discount: p.discount,
            image_url: p.image_url.clone(),
            category_id: Some(p.category_id),
        }
    }
}

/// Параметры списка товаров (`?categoryId=`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListParams {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category_id: Option<i64>,
}

/// Ответ `GET /products/productName/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductName {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_api_json() {
        let json = r#"{
            "id": 3,
            "name": "Gelo Seco",
            "description": "5kg",
            "quantity": 12,
            "price": 2500.0,
            "discount": 0.1,
            "specialPrice": 2250.0,
            "categoryName": "Gelo",
            "categoryId": 2,
            "isActive": true,
            "imageUrl": "https://cdn.example/gelo.png"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.category_id, 2);
        assert!(p.is_active);
        assert_eq!(p.special_price, 2250.0);
        assert_eq!(p.created_at, None);
    }

    #[test]
    fn test_create_dto_omits_category() {
        let dto = ProductDto {
            name: "Gelo".into(),
            category_id: None,
            ..Default::default()
        };
        let v = serde_json::to_value(&dto).unwrap();
        assert!(v.get("categoryId").is_none());
        assert!(v.get("imageUrl").is_some());
    }

    #[test]
    fn test_dto_from_product_keeps_category() {
        let json = r#"{"id": 1, "name": "X", "description": "d", "price": 10.0, "categoryId": 9, "imageUrl": "u"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        let dto = ProductDto::from(&p);
        assert_eq!(dto.category_id, Some(9));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_dto_rejects_bad_numbers() {
        let valid = ProductDto {
            name: "Gelo".into(),
            description: "5kg".into(),
            quantity: 3,
            price: 100.0,
            discount: 0.0,
            image_url: "https://cdn.example/g.png".into(),
            category_id: Some(2),
        };
        assert!(valid.validate().is_ok());
        assert!(ProductDto { price: 0.0, ..valid.clone() }.validate().is_err());
        assert!(ProductDto { quantity: -1, ..valid.clone() }.validate().is_err());
        assert!(ProductDto { discount: -0.1, ..valid.clone() }.validate().is_err());
        assert!(ProductDto { category_id: None, ..valid }.validate().is_err());
    }
}
