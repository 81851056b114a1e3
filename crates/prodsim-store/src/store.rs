//! 記憶體庫存資料庫（原物料、產品、BOM 行）

use indexmap::IndexMap;
use parking_lot::RwLock;
use prodsim_core::{
    BomLine, CatalogSnapshot, CatalogSource, ProdsimError, Product, ProductRecipe, RawMaterial,
    RecipeLine, Result, StockRecord,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// BOM 行檢視（附帶已解析的產品與原物料名稱）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BomLineView {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub raw_material_id: Uuid,
    pub raw_material_name: String,
    pub quantity: i64,
}

#[derive(Debug, Default)]
pub(crate) struct Tables {
    raw_materials: IndexMap<Uuid, RawMaterial>,
    products: IndexMap<Uuid, Product>,
    bom_lines: IndexMap<Uuid, BomLine>,
}

impl Tables {
    fn raw_material(&self, id: Uuid) -> Result<&RawMaterial> {
        self.raw_materials
            .get(&id)
            .ok_or_else(|| ProdsimError::not_found("RawMaterial", "id", id))
    }

    fn product(&self, id: Uuid) -> Result<&Product> {
        self.products
            .get(&id)
            .ok_or_else(|| ProdsimError::not_found("Product", "id", id))
    }

    /// 原物料名稱 → ID（同名者後者覆蓋）
    pub(crate) fn raw_material_ids(&self) -> HashMap<String, Uuid> {
        self.raw_materials
            .values()
            .map(|m| (m.name.clone(), m.id))
            .collect()
    }

    pub(crate) fn insert_raw_material(&mut self, material: RawMaterial) -> Result<RawMaterial> {
        material.validate()?;
        self.raw_materials.insert(material.id, material.clone());
        tracing::debug!("新增原物料 {} (庫存 {})", material.name, material.stock_quantity);
        Ok(material)
    }

    pub(crate) fn insert_product(&mut self, product: Product) -> Result<Product> {
        product.validate()?;
        self.products.insert(product.id, product.clone());
        tracing::debug!("新增產品 {} (單價 {})", product.name, product.price);
        Ok(product)
    }

    pub(crate) fn insert_bom_line(&mut self, line: BomLine) -> Result<BomLineView> {
        line.validate()?;
        let product_name = self.product(line.product_id)?.name.clone();
        let raw_material_name = self.raw_material(line.raw_material_id)?.name.clone();
        self.bom_lines.insert(line.id, line.clone());

        Ok(BomLineView {
            id: line.id,
            product_id: line.product_id,
            product_name,
            raw_material_id: line.raw_material_id,
            raw_material_name,
            quantity: line.required_quantity,
        })
    }

    fn stock_records(&self) -> Vec<StockRecord> {
        self.raw_materials
            .values()
            .map(RawMaterial::to_stock_record)
            .collect()
    }

    /// 全部產品配方；BOM 行只掃描一次並依產品分組，保留建立順序
    fn recipes(&self) -> Vec<ProductRecipe> {
        let mut lines_by_product: HashMap<Uuid, Vec<RecipeLine>> =
            HashMap::with_capacity(self.products.len());
        for line in self.bom_lines.values() {
            lines_by_product
                .entry(line.product_id)
                .or_default()
                .push(RecipeLine {
                    raw_material_name: self
                        .raw_materials
                        .get(&line.raw_material_id)
                        .map(|m| m.name.clone()),
                    required_quantity: Some(line.required_quantity),
                });
        }

        self.products
            .values()
            .map(|product| {
                let lines = lines_by_product.remove(&product.id).unwrap_or_default();
                ProductRecipe::new(product.id, product.name.clone(), product.price)
                    .with_lines(lines)
            })
            .collect()
    }
}

/// 記憶體庫存資料庫
///
/// 所有資料表共用一把讀寫鎖；`snapshot` 在單次讀鎖內完成，
/// 並行的庫存更新不會被部分觀察到。
#[derive(Debug, Default)]
pub struct InventoryStore {
    pub(crate) tables: RwLock<Tables>,
}

impl InventoryStore {
    /// 創建空的資料庫
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否沒有任何原物料
    pub fn is_empty(&self) -> bool {
        self.tables.read().raw_materials.is_empty()
    }

    // ===== 原物料 =====

    /// 新增原物料
    pub fn create_raw_material(
        &self,
        name: impl Into<String>,
        stock_quantity: i64,
    ) -> Result<RawMaterial> {
        self.tables
            .write()
            .insert_raw_material(RawMaterial::new(name, stock_quantity))
    }

    /// 列出全部原物料
    pub fn raw_materials(&self) -> Vec<RawMaterial> {
        self.tables.read().raw_materials.values().cloned().collect()
    }

    /// 依ID取得原物料
    pub fn raw_material(&self, id: Uuid) -> Result<RawMaterial> {
        self.tables.read().raw_material(id).cloned()
    }

    /// 更新原物料名稱與庫存
    pub fn update_raw_material(
        &self,
        id: Uuid,
        name: impl Into<String>,
        stock_quantity: i64,
    ) -> Result<RawMaterial> {
        let updated = RawMaterial::new(name, stock_quantity).with_id(id);
        updated.validate()?;

        let mut tables = self.tables.write();
        let existing = tables
            .raw_materials
            .get_mut(&id)
            .ok_or_else(|| ProdsimError::not_found("RawMaterial", "id", id))?;
        *existing = updated.clone();
        Ok(updated)
    }

    /// 刪除原物料（連帶刪除引用它的 BOM 行）
    pub fn delete_raw_material(&self, id: Uuid) -> Result<()> {
        let mut tables = self.tables.write();
        if tables.raw_materials.shift_remove(&id).is_none() {
            return Err(ProdsimError::not_found("RawMaterial", "id", id));
        }
        tables.bom_lines.retain(|_, line| line.raw_material_id != id);
        Ok(())
    }

    // ===== 產品 =====

    /// 新增產品
    pub fn create_product(&self, name: impl Into<String>, price: Decimal) -> Result<Product> {
        self.tables.write().insert_product(Product::new(name, price))
    }

    /// 列出全部產品
    pub fn products(&self) -> Vec<Product> {
        self.tables.read().products.values().cloned().collect()
    }

    /// 依ID取得產品
    pub fn product(&self, id: Uuid) -> Result<Product> {
        self.tables.read().product(id).cloned()
    }

    /// 更新產品名稱與單價
    pub fn update_product(
        &self,
        id: Uuid,
        name: impl Into<String>,
        price: Decimal,
    ) -> Result<Product> {
        let updated = Product::new(name, price).with_id(id);
        updated.validate()?;

        let mut tables = self.tables.write();
        let existing = tables
            .products
            .get_mut(&id)
            .ok_or_else(|| ProdsimError::not_found("Product", "id", id))?;
        *existing = updated.clone();
        Ok(updated)
    }

    /// 刪除產品（連帶刪除其 BOM 行）
    pub fn delete_product(&self, id: Uuid) -> Result<()> {
        let mut tables = self.tables.write();
        if tables.products.shift_remove(&id).is_none() {
            return Err(ProdsimError::not_found("Product", "id", id));
        }
        tables.bom_lines.retain(|_, line| line.product_id != id);
        Ok(())
    }

    // ===== BOM 行 =====

    /// 新增 BOM 行（產品與原物料必須存在，用量 >= 1）
    pub fn create_bom_line(
        &self,
        product_id: Uuid,
        raw_material_id: Uuid,
        required_quantity: i64,
    ) -> Result<BomLineView> {
        self.tables
            .write()
            .insert_bom_line(BomLine::new(product_id, raw_material_id, required_quantity))
    }

    /// 列出全部 BOM 行（附名稱）
    pub fn bom_lines(&self) -> Vec<BomLineView> {
        let tables = self.tables.read();
        tables
            .bom_lines
            .values()
            .filter_map(|line| {
                let product = tables.products.get(&line.product_id)?;
                let material = tables.raw_materials.get(&line.raw_material_id)?;
                Some(BomLineView {
                    id: line.id,
                    product_id: product.id,
                    product_name: product.name.clone(),
                    raw_material_id: material.id,
                    raw_material_name: material.name.clone(),
                    quantity: line.required_quantity,
                })
            })
            .collect()
    }

    /// 刪除 BOM 行
    pub fn delete_bom_line(&self, id: Uuid) -> Result<()> {
        if self.tables.write().bom_lines.shift_remove(&id).is_none() {
            return Err(ProdsimError::not_found("ProductRawMaterial", "id", id));
        }
        Ok(())
    }
}

impl CatalogSource for InventoryStore {
    fn list_raw_materials(&self) -> Result<Vec<StockRecord>> {
        Ok(self.tables.read().stock_records())
    }

    fn list_products_with_bom(&self) -> Result<Vec<ProductRecipe>> {
        Ok(self.tables.read().recipes())
    }

    fn snapshot(&self) -> Result<CatalogSnapshot> {
        let tables = self.tables.read();
        Ok(CatalogSnapshot::new(tables.recipes(), tables.stock_records()))
    }
}
