//! 資料來源介面（由持久層實作）

use serde::{Deserialize, Serialize};

use crate::{ProductRecipe, Result, StockRecord};

/// 一次一致讀取的目錄快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub products: Vec<ProductRecipe>,
    pub raw_materials: Vec<StockRecord>,
}

impl CatalogSnapshot {
    pub fn new(products: Vec<ProductRecipe>, raw_materials: Vec<StockRecord>) -> Self {
        Self {
            products,
            raw_materials,
        }
    }
}

/// 模擬計算的資料來源
pub trait CatalogSource: Send + Sync {
    /// 列出全部原物料庫存
    fn list_raw_materials(&self) -> Result<Vec<StockRecord>>;

    /// 列出全部產品（含 BOM 行，已解析原物料名稱）
    fn list_products_with_bom(&self) -> Result<Vec<ProductRecipe>>;

    /// 在同一讀取範圍內取得產品與原物料
    ///
    /// 預設實作分兩次讀取；需要快照一致性的來源應覆寫。
    fn snapshot(&self) -> Result<CatalogSnapshot> {
        let products = self.list_products_with_bom()?;
        let raw_materials = self.list_raw_materials()?;
        Ok(CatalogSnapshot::new(products, raw_materials))
    }
}

impl CatalogSource for CatalogSnapshot {
    fn list_raw_materials(&self) -> Result<Vec<StockRecord>> {
        Ok(self.raw_materials.clone())
    }

    fn list_products_with_bom(&self) -> Result<Vec<ProductRecipe>> {
        Ok(self.products.clone())
    }

    fn snapshot(&self) -> Result<CatalogSnapshot> {
        Ok(self.clone())
    }
}
