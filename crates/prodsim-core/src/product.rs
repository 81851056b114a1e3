//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ProdsimError, Result};

/// 產品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 產品ID
    pub id: Uuid,

    /// 產品名稱
    pub name: String,

    /// 單價（精確十進位）
    pub price: Decimal,
}

impl Product {
    /// 創建新的產品
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
        }
    }

    /// 建構器模式：設置ID
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// 檢查欄位是否合法
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ProdsimError::Validation("產品名稱不可為空".to_string()));
        }
        if self.price < Decimal::ZERO {
            return Err(ProdsimError::Validation(format!(
                "產品 {} 單價不可為負數：{}",
                self.name, self.price
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product() {
        let product = Product::new("Kit Montagem", Decimal::new(4500, 2));

        assert_eq!(product.name, "Kit Montagem");
        assert_eq!(product.price, Decimal::new(4500, 2));
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let product = Product::new("Caixa Plastica", Decimal::new(-1, 2));
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_zero_price_is_valid() {
        let product = Product::new("Amostra", Decimal::ZERO);
        assert!(product.validate().is_ok());
    }
}
