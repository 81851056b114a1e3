//! JSON 目錄文件

use prodsim_core::{BomLine, ProdsimError, Product, RawMaterial, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::store::InventoryStore;

/// 目錄文件（原物料 + 產品 + BOM）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    #[serde(default)]
    pub raw_materials: Vec<MaterialEntry>,

    #[serde(default)]
    pub products: Vec<ProductEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialEntry {
    pub name: String,
    pub stock_quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntry {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub bom: Vec<BomEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomEntry {
    /// 原物料名稱
    pub raw_material: String,
    /// 單位用量
    pub quantity: i64,
}

impl CatalogDocument {
    /// 匯入前檢查，避免只匯入一半
    ///
    /// `known_materials` 為資料庫中已存在的原物料名稱。
    pub fn validate<'a>(&'a self, known_materials: impl IntoIterator<Item = &'a str>) -> Result<()> {
        for entry in &self.raw_materials {
            RawMaterial::new(entry.name.clone(), entry.stock_quantity).validate()?;
        }

        let names: HashSet<&str> = self
            .raw_materials
            .iter()
            .map(|m| m.name.as_str())
            .chain(known_materials)
            .collect();

        for entry in &self.products {
            Product::new(entry.name.clone(), entry.price).validate()?;
            for bom in &entry.bom {
                if !names.contains(bom.raw_material.as_str()) {
                    return Err(ProdsimError::not_found("RawMaterial", "name", &bom.raw_material));
                }
                if bom.quantity < 1 {
                    return Err(ProdsimError::Validation(format!(
                        "產品 {} 的原物料 {} 用量至少為 1，實際為 {}",
                        entry.name, bom.raw_material, bom.quantity
                    )));
                }
            }
        }
        Ok(())
    }

    /// 從 JSON 字串解析
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 從讀取器解析
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// 輸出為 JSON 字串
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl InventoryStore {
    /// 由目錄文件建立資料庫
    ///
    /// BOM 以原物料名稱引用；找不到名稱時整份文件失敗。
    pub fn from_document(document: &CatalogDocument) -> Result<Self> {
        let store = Self::new();
        store.import_document(document)?;
        Ok(store)
    }

    /// 將目錄文件匯入現有資料庫
    ///
    /// 檢查與寫入在同一把寫鎖內完成：失敗時資料庫不變，
    /// 並行的讀取只會看到匯入前或匯入後的完整狀態。
    pub fn import_document(&self, document: &CatalogDocument) -> Result<()> {
        let mut tables = self.tables.write();
        let mut ids = tables.raw_material_ids();
        document.validate(ids.keys().map(String::as_str))?;

        for entry in &document.raw_materials {
            let material = RawMaterial::new(entry.name.clone(), entry.stock_quantity);
            let material = tables.insert_raw_material(material)?;
            ids.insert(material.name, material.id);
        }

        for entry in &document.products {
            let product = tables.insert_product(Product::new(entry.name.clone(), entry.price))?;
            for bom in &entry.bom {
                let material_id = ids.get(&bom.raw_material).copied().ok_or_else(|| {
                    ProdsimError::not_found("RawMaterial", "name", &bom.raw_material)
                })?;
                tables.insert_bom_line(BomLine::new(product.id, material_id, bom.quantity))?;
            }
        }
        drop(tables);

        tracing::info!(
            "匯入目錄：原物料 {} 筆，產品 {} 筆",
            document.raw_materials.len(),
            document.products.len()
        );
        Ok(())
    }
}
