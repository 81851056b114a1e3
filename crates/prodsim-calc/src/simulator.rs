//! 生產模擬主流程

use prodsim_core::{
    CatalogSnapshot, CatalogSource, ExclusionReason, ExclusionRecord, ProdsimError,
    ProductRecipe, ProductionEstimate, SimulationConfig,
};
use rayon::prelude::*;

use crate::feasibility::{Feasibility, FeasibilityCalculator, LineIssue};
use crate::stock_index::StockIndex;
use crate::valuation::Valuation;
use crate::{SimulationReport, SimulationWarning};

/// 單一產品的處理結果
enum ProductEvaluation {
    Included(ProductionEstimate),
    Excluded(ExclusionReason),
    Failed(ProdsimError),
}

/// 生產模擬器（唯讀，不修改庫存）
#[derive(Debug, Clone, Default)]
pub struct ProductionSimulator {
    config: SimulationConfig,
}

impl ProductionSimulator {
    /// 創建新的模擬器
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// 獲取配置引用
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// 主模擬入口
    ///
    /// 資料來源讀取失敗時整體失敗，不回傳部分結果。
    pub fn simulate(&self, source: &dyn CatalogSource) -> prodsim_core::Result<SimulationReport> {
        let snapshot = source.snapshot().map_err(|e| match e {
            ProdsimError::Source(_) => e,
            other => ProdsimError::Source(other.to_string()),
        })?;
        Ok(self.simulate_snapshot(&snapshot))
    }

    /// 只回傳排序後的可生產估算
    pub fn simulate_production(
        &self,
        source: &dyn CatalogSource,
    ) -> prodsim_core::Result<Vec<ProductionEstimate>> {
        Ok(self.simulate(source)?.estimates)
    }

    /// 對已讀取的快照執行模擬
    pub fn simulate_snapshot(&self, snapshot: &CatalogSnapshot) -> SimulationReport {
        tracing::info!(
            "開始生產模擬：產品 {} 筆，原物料 {} 筆",
            snapshot.products.len(),
            snapshot.raw_materials.len()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 建立庫存索引
        let stock = StockIndex::build(&snapshot.raw_materials);

        // Step 2: 逐產品計算
        let evaluations: Vec<(ProductEvaluation, Vec<LineIssue>)> = if self.config.parallel {
            snapshot
                .products
                .par_iter()
                .map(|recipe| self.evaluate_product(recipe, &stock))
                .collect()
        } else {
            snapshot
                .products
                .iter()
                .map(|recipe| self.evaluate_product(recipe, &stock))
                .collect()
        };

        // Step 3: 收集結果
        let mut report = SimulationReport::empty();
        for (recipe, (evaluation, issues)) in snapshot.products.iter().zip(evaluations) {
            for issue in issues {
                report.add_warning(SimulationWarning::warning(
                    recipe.name.clone(),
                    issue.to_string(),
                ));
            }

            match evaluation {
                ProductEvaluation::Included(estimate) => report.estimates.push(estimate),
                ProductEvaluation::Excluded(reason) => report.excluded.push(ExclusionRecord::new(
                    recipe.product_id,
                    recipe.name.clone(),
                    reason,
                )),
                ProductEvaluation::Failed(err) => {
                    report.add_warning(SimulationWarning::error(
                        recipe.name.clone(),
                        err.to_string(),
                    ));
                    report.excluded.push(ExclusionRecord::new(
                        recipe.product_id,
                        recipe.name.clone(),
                        ExclusionReason::Failed,
                    ));
                }
            }
        }

        // Step 4: 依單價遞減排序
        Self::sort_estimates(&mut report.estimates);

        report.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "生產模擬完成，耗時 {:?}，可生產產品 {} 筆",
            start_time.elapsed(),
            report.estimates.len()
        );

        report
    }

    /// 單一產品計算（錯誤只影響該產品）
    fn evaluate_product(
        &self,
        recipe: &ProductRecipe,
        stock: &StockIndex,
    ) -> (ProductEvaluation, Vec<LineIssue>) {
        let outcome = FeasibilityCalculator::compute_max_quantity(
            &recipe.lines,
            stock,
            self.config.invalid_line_policy,
        );

        for issue in &outcome.issues {
            tracing::warn!("產品 {}: {}", recipe.name, issue);
        }

        let evaluation = match outcome.feasibility {
            Feasibility::NoRecipe => {
                tracing::debug!("產品 {} 沒有 BOM 行，跳過", recipe.name);
                ProductEvaluation::Excluded(ExclusionReason::NoRecipe)
            }
            Feasibility::Unconstrained => {
                tracing::warn!("產品 {} 的 BOM 行全部無效，跳過", recipe.name);
                ProductEvaluation::Excluded(ExclusionReason::RecipeInvalid)
            }
            ref limited if !limited.is_producible() => {
                tracing::debug!(
                    "產品 {} 無法生產，原物料 {} 庫存不足",
                    recipe.name,
                    limited.limiting_material().unwrap_or("-")
                );
                ProductEvaluation::Excluded(ExclusionReason::OutOfStock)
            }
            Feasibility::Limited {
                quantity,
                limiting_material,
            } => match Valuation::total_value(recipe.price, quantity) {
                Ok(total_value) => {
                    tracing::debug!(
                        "產品 {} 可生產 {} 單位（瓶頸: {}）",
                        recipe.name,
                        quantity,
                        limiting_material
                    );
                    ProductEvaluation::Included(
                        ProductionEstimate::new(
                            recipe.product_id,
                            recipe.name.clone(),
                            recipe.price,
                            quantity,
                            total_value,
                        )
                        .with_limiting_material(Some(limiting_material)),
                    )
                }
                Err(err) => {
                    tracing::error!("處理產品 {} 時發生錯誤: {}", recipe.name, err);
                    ProductEvaluation::Failed(err)
                }
            },
        };

        (evaluation, outcome.issues)
    }

    /// 單價遞減；同價依名稱、ID 排序，確保結果穩定
    fn sort_estimates(estimates: &mut [ProductionEstimate]) {
        estimates.sort_by(|a, b| {
            b.unit_price
                .cmp(&a.unit_price)
                .then_with(|| a.product_name.cmp(&b.product_name))
                .then_with(|| a.product_id.cmp(&b.product_id))
        });
    }
}
