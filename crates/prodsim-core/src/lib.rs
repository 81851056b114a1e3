//! # Prodsim Core
//!
//! 核心資料模型與類型定義

pub mod bom;
pub mod config;
pub mod estimate;
pub mod product;
pub mod raw_material;
pub mod source;

// Re-export 主要類型
pub use bom::{BomLine, ProductRecipe, RecipeLine};
pub use config::{InvalidLinePolicy, SimulationConfig};
pub use estimate::{ExclusionReason, ExclusionRecord, ProductionEstimate};
pub use product::Product;
pub use raw_material::{RawMaterial, StockRecord};
pub use source::{CatalogSnapshot, CatalogSource};

/// 生產模擬錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ProdsimError {
    #[error("{entity} 找不到 {field}: '{value}'")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("資料驗證失敗: {0}")]
    Validation(String),

    #[error("資料來源讀取失敗: {0}")]
    Source(String),

    #[error("計算錯誤: {0}")]
    Calculation(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProdsimError {
    /// 建立「找不到」錯誤
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProdsimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ProdsimError::not_found("RawMaterial", "id", 42);
        assert_eq!(err.to_string(), "RawMaterial 找不到 id: '42'");
    }
}
