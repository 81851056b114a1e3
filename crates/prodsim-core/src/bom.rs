//! BOM 模型（產品 ↔ 原物料用量）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ProdsimError, Result};

/// BOM 行：一單位產品消耗的某原物料數量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomLine {
    /// BOM 行ID
    pub id: Uuid,

    /// 產品ID
    pub product_id: Uuid,

    /// 原物料ID
    pub raw_material_id: Uuid,

    /// 單位用量（>= 1）
    pub required_quantity: i64,
}

impl BomLine {
    /// 創建新的 BOM 行
    pub fn new(product_id: Uuid, raw_material_id: Uuid, required_quantity: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            raw_material_id,
            required_quantity,
        }
    }

    /// 檢查用量是否合法
    pub fn validate(&self) -> Result<()> {
        if self.required_quantity < 1 {
            return Err(ProdsimError::Validation(format!(
                "BOM 用量至少為 1，實際為 {}",
                self.required_quantity
            )));
        }
        Ok(())
    }
}

/// 配方行（計算用讀取模型）
///
/// `None` 代表資料不完整：原物料關聯遺失或用量缺漏，計算器需容忍。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeLine {
    /// 原物料名稱
    pub raw_material_name: Option<String>,

    /// 單位用量
    pub required_quantity: Option<i64>,
}

impl RecipeLine {
    /// 創建完整的配方行
    pub fn new(raw_material_name: impl Into<String>, required_quantity: i64) -> Self {
        Self {
            raw_material_name: Some(raw_material_name.into()),
            required_quantity: Some(required_quantity),
        }
    }

    /// 原物料關聯遺失的配方行
    pub fn dangling(required_quantity: Option<i64>) -> Self {
        Self {
            raw_material_name: None,
            required_quantity,
        }
    }

    /// 建構器模式：設置用量（可為缺漏）
    pub fn with_required_quantity(mut self, required_quantity: Option<i64>) -> Self {
        self.required_quantity = required_quantity;
        self
    }
}

/// 產品配方：產品連同其全部 BOM 行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecipe {
    pub product_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub lines: Vec<RecipeLine>,
}

impl ProductRecipe {
    /// 創建沒有 BOM 行的配方
    pub fn new(product_id: Uuid, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            lines: Vec::new(),
        }
    }

    /// 建構器模式：設置配方行
    pub fn with_lines(mut self, lines: Vec<RecipeLine>) -> Self {
        self.lines = lines;
        self
    }
}
