//! # Prodsim
//!
//! 依現有原物料庫存估算各產品可生產數量與可實現產值

pub mod logging;

pub use prodsim_calc::{
    Feasibility, FeasibilityCalculator, ProductionSimulator, SimulationReport, SimulationWarning,
    StockIndex, Valuation, WarningSeverity,
};
pub use prodsim_core::{
    CatalogSnapshot, CatalogSource, ExclusionReason, InvalidLinePolicy, ProdsimError, Product,
    ProductRecipe, ProductionEstimate, RawMaterial, RecipeLine, Result, SimulationConfig,
    StockRecord,
};
pub use prodsim_store::{load_sample_data, CatalogDocument, InventoryStore};

/// 以預設配置執行生產模擬
pub fn simulate_production(source: &dyn CatalogSource) -> Result<Vec<ProductionEstimate>> {
    ProductionSimulator::default().simulate_production(source)
}
