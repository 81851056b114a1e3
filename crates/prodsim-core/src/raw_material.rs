//! 原物料模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ProdsimError, Result};

/// 原物料庫存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    /// 原物料ID
    pub id: Uuid,

    /// 名稱（慣例上唯一，本層不強制）
    pub name: String,

    /// 現有庫存（無單位，由呼叫端自行約定，如百克、個）
    pub stock_quantity: i64,
}

impl RawMaterial {
    /// 創建新的原物料
    pub fn new(name: impl Into<String>, stock_quantity: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            stock_quantity,
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
            return Err(ProdsimError::Validation("原物料名稱不可為空".to_string()));
        }
        if self.stock_quantity < 0 {
            return Err(ProdsimError::Validation(format!(
                "原物料 {} 庫存不可為負數：{}",
                self.name, self.stock_quantity
            )));
        }
        Ok(())
    }

    /// 轉為庫存讀取模型
    pub fn to_stock_record(&self) -> StockRecord {
        StockRecord {
            name: self.name.clone(),
            stock_quantity: self.stock_quantity,
        }
    }
}

/// 庫存讀取模型（模擬計算使用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub name: String,
    pub stock_quantity: i64,
}

impl StockRecord {
    pub fn new(name: impl Into<String>, stock_quantity: i64) -> Self {
        Self {
            name: name.into(),
            stock_quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_raw_material() {
        let material = RawMaterial::new("Aco", 50);

        assert_eq!(material.name, "Aco");
        assert_eq!(material.stock_quantity, 50);
        assert!(material.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_stock() {
        let material = RawMaterial::new("Tinta", -1);
        assert!(matches!(material.validate(), Err(ProdsimError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let material = RawMaterial::new("  ", 10);
        assert!(material.validate().is_err());
    }

    #[test]
    fn test_to_stock_record() {
        let material = RawMaterial::new("Parafuso", 500);
        assert_eq!(material.to_stock_record(), StockRecord::new("Parafuso", 500));
    }
}
