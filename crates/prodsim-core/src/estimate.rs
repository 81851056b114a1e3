//! 生產模擬結果模型

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// 可生產估算（模擬計算結果）
///
/// 對外只序列化 `productName`、`quantityPossible`、`totalValue`；
/// 產品ID與單價隨結果攜帶，排序時不需再以名稱回查產品。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionEstimate {
    /// 產品名稱
    pub product_name: String,

    /// 可生產數量
    pub quantity_possible: i64,

    /// 可實現銷售總值
    pub total_value: Decimal,

    /// 來源產品ID
    #[serde(skip)]
    pub product_id: Uuid,

    /// 來源產品單價
    #[serde(skip)]
    pub unit_price: Decimal,

    /// 瓶頸原物料
    #[serde(skip)]
    pub limiting_material: Option<String>,
}

impl ProductionEstimate {
    /// 創建新的估算
    pub fn new(
        product_id: Uuid,
        product_name: String,
        unit_price: Decimal,
        quantity_possible: i64,
        total_value: Decimal,
    ) -> Self {
        Self {
            product_name,
            quantity_possible,
            total_value,
            product_id,
            unit_price,
            limiting_material: None,
        }
    }

    /// 建構器模式：設置瓶頸原物料
    pub fn with_limiting_material(mut self, material: Option<String>) -> Self {
        self.limiting_material = material;
        self
    }
}

/// 產品未列入結果的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExclusionReason {
    /// 沒有任何 BOM 行
    NoRecipe,
    /// 有 BOM 行但全部無效，無法設定上限
    RecipeInvalid,
    /// 可生產數量為 0
    OutOfStock,
    /// 處理時發生錯誤
    Failed,
}

/// 未列入結果的產品記錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusionRecord {
    pub product_id: Uuid,
    pub product_name: String,
    pub reason: ExclusionReason,
}

impl ExclusionRecord {
    pub fn new(product_id: Uuid, product_name: String, reason: ExclusionReason) -> Self {
        Self {
            product_id,
            product_name,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_wire_shape() {
        let estimate = ProductionEstimate::new(
            Uuid::new_v4(),
            "Kit Montagem".to_string(),
            Decimal::new(4500, 2),
            41,
            Decimal::new(184500, 2),
        )
        .with_limiting_material(Some("Parafuso".to_string()));

        let json = serde_json::to_value(&estimate).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(json["productName"], "Kit Montagem");
        assert_eq!(json["quantityPossible"], 41);
        assert_eq!(json["totalValue"], "1845.00");
    }

    #[test]
    fn test_exclusion_reason_serialization() {
        let record = ExclusionRecord::new(
            Uuid::nil(),
            "Amostra".to_string(),
            ExclusionReason::RecipeInvalid,
        );
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["reason"], "recipeInvalid");
    }
}
