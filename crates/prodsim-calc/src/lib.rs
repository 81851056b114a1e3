//! # Prodsim Calculation Engine
//!
//! 可生產數量模擬計算引擎

pub mod feasibility;
pub mod simulator;
pub mod stock_index;
pub mod valuation;

// Re-export 主要類型
pub use feasibility::{Feasibility, FeasibilityCalculator, FeasibilityOutcome, LineIssue};
pub use simulator::ProductionSimulator;
pub use stock_index::StockIndex;
pub use valuation::Valuation;

use chrono::{DateTime, Utc};
use prodsim_core::{ExclusionRecord, ProductionEstimate};
use serde::Serialize;

/// 生產模擬結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    /// 可生產估算（依單價遞減排序）
    pub estimates: Vec<ProductionEstimate>,

    /// 未列入結果的產品
    pub excluded: Vec<ExclusionRecord>,

    /// 警告信息
    pub warnings: Vec<SimulationWarning>,

    /// 模擬時間
    pub simulated_at: DateTime<Utc>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl SimulationReport {
    /// 創建空的模擬結果
    pub fn empty() -> Self {
        Self {
            estimates: Vec::new(),
            excluded: Vec::new(),
            warnings: Vec::new(),
            simulated_at: Utc::now(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: SimulationWarning) {
        self.warnings.push(warning);
    }

    /// 可生產總值
    ///
    /// 各產品產值皆已通過溢位檢查，但加總仍可能溢位。
    pub fn total_value(&self) -> prodsim_core::Result<rust_decimal::Decimal> {
        self.estimates
            .iter()
            .try_fold(rust_decimal::Decimal::ZERO, |acc, e| acc.checked_add(e.total_value))
            .ok_or_else(|| prodsim_core::ProdsimError::Calculation("可生產總值加總溢位".to_string()))
    }

    /// 是否有錯誤等級的警告
    pub fn has_errors(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| w.severity == WarningSeverity::Error)
    }
}

/// 模擬警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationWarning {
    pub product_name: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl SimulationWarning {
    pub fn new(product_name: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            product_name,
            message,
            severity,
        }
    }

    pub fn warning(product_name: String, message: String) -> Self {
        Self::new(product_name, message, WarningSeverity::Warning)
    }

    pub fn error(product_name: String, message: String) -> Self {
        Self::new(product_name, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    Warning,
    Error,
}
