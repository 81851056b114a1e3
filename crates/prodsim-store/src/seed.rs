//! 範例資料

use prodsim_core::Result;
use rust_decimal::Decimal;

use crate::store::InventoryStore;

/// 載入範例資料（資料庫已有原物料時跳過）
///
/// 回傳是否實際寫入。
pub fn load_sample_data(store: &InventoryStore) -> Result<bool> {
    if !store.is_empty() {
        tracing::info!("資料庫已有資料，跳過範例資料初始化");
        return Ok(false);
    }

    tracing::info!("初始化範例資料...");

    let aco = store.create_raw_material("Aco", 50)?;
    let plastico = store.create_raw_material("Plastico", 30)?;
    let parafuso = store.create_raw_material("Parafuso", 500)?;
    let tinta = store.create_raw_material("Tinta", 2000)?;

    let suporte = store.create_product("Suporte de Parede", Decimal::new(2500, 2))?;
    let caixa = store.create_product("Caixa Plastica", Decimal::new(1500, 2))?;
    let kit = store.create_product("Kit Montagem", Decimal::new(4500, 2))?;

    // Suporte de Parede：2 鋼 + 8 螺絲 + 50 油漆
    store.create_bom_line(suporte.id, aco.id, 2)?;
    store.create_bom_line(suporte.id, parafuso.id, 8)?;
    store.create_bom_line(suporte.id, tinta.id, 50)?;

    // Caixa Plastica：1.5kg 塑膠，以百克計為 15
    store.create_bom_line(caixa.id, plastico.id, 15)?;

    // Kit Montagem：12 螺絲
    store.create_bom_line(kit.id, parafuso.id, 12)?;

    tracing::info!("範例資料初始化完成");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_sample_data() {
        let store = InventoryStore::new();

        assert!(load_sample_data(&store).unwrap());
        assert_eq!(store.raw_materials().len(), 4);
        assert_eq!(store.products().len(), 3);
        assert_eq!(store.bom_lines().len(), 5);
    }

    #[test]
    fn test_seeding_is_idempotent() {
        let store = InventoryStore::new();

        assert!(load_sample_data(&store).unwrap());
        assert!(!load_sample_data(&store).unwrap());
        assert_eq!(store.raw_materials().len(), 4);
        assert_eq!(store.bom_lines().len(), 5);
    }
}
