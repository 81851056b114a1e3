//! 庫存索引

use prodsim_core::StockRecord;
use std::collections::HashMap;

/// 原物料名稱 → 現有庫存
///
/// 僅存在於單次模擬內，不保留全域狀態。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockIndex {
    stock: HashMap<String, i64>,
}

impl StockIndex {
    /// 由原物料清單建立索引（名稱重複時後者覆蓋前者）
    pub fn build(records: &[StockRecord]) -> Self {
        let stock = records
            .iter()
            .map(|r| (r.name.clone(), r.stock_quantity))
            .collect();
        Self { stock }
    }

    /// 查詢庫存
    pub fn available(&self, material_name: &str) -> Option<i64> {
        self.stock.get(material_name).copied()
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }
}

impl FromIterator<StockRecord> for StockIndex {
    fn from_iter<T: IntoIterator<Item = StockRecord>>(iter: T) -> Self {
        Self {
            stock: iter
                .into_iter()
                .map(|r| (r.name, r.stock_quantity))
                .collect(),
        }
    }
}
