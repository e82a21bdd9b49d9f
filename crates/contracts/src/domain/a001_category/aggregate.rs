use serde::{Deserialize, Serialize};

/// Категория товаров, как её отдаёт `GET /categories/all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub active: bool,
    /// Есть ли в категории товары, попавшие в заказы
    #[serde(default)]
    pub has_orders: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Category {
    /// Категорию нельзя удалять, пока на её товары ссылаются заказы
    pub fn is_delete_locked(&self) -> bool {
        self.active && self.has_orders
    }
}

/// Краткая ссылка на категорию (для выпадающих списков)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

impl From<&Category> for CategoryRef {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
        }
    }
}

/// Тело запроса на создание/изменение категории
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: String,
    pub description: String,
}

impl CategoryDto {
    /// Проверка обязательных полей формы
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название обязательно".into());
        }
        if self.description.trim().is_empty() {
            return Err("Описание обязательно".into());
        }
        Ok(())
    }
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_api_json() {
        let json = r#"{
            "id": 7,
            "name": "Bebidas",
            "description": "Sumos e refrigerantes",
            "active": true,
            "hasOrders": true,
            "createdAt": "2024-03-15T14:02:26.123",
            "updatedAt": null
        }"#;
        let c: Category = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, 7);
        assert!(c.has_orders);
        assert!(c.is_delete_locked());
        assert_eq!(c.updated_at, None);
    }

    #[test]
    fn test_inactive_category_is_not_locked() {
        let c = Category {
            id: 1,
            name: "A".into(),
            description: String::new(),
            active: false,
            has_orders: true,
            created_at: None,
            updated_at: None,
        };
        assert!(!c.is_delete_locked());
    }

    #[test]
    fn test_dto_requires_name_and_description() {
        assert!(CategoryDto::default().validate().is_err());
        let dto = CategoryDto {
            name: "Gelo".into(),
            description: " ".into(),
        };
        assert!(dto.validate().is_err());
        let dto = CategoryDto {
            name: "Gelo".into(),
            description: "Gelo seco".into(),
        };
        assert!(dto.validate().is_ok());
    }
}
