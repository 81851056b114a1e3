//! # Prodsim Store
//!
//! 原物料、產品與 BOM 的資料維護層，實作模擬用的 `CatalogSource`

pub mod document;
pub mod seed;
pub mod store;

// Re-export 主要類型
pub use document::{BomEntry, CatalogDocument, MaterialEntry, ProductEntry};
pub use seed::load_sample_data;
pub use store::{BomLineView, InventoryStore};
