//! 可生產數量計算（瓶頸原物料）

use prodsim_core::{InvalidLinePolicy, RecipeLine};

use crate::stock_index::StockIndex;

/// 單一產品的可生產結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feasibility {
    /// 沒有任何 BOM 行
    NoRecipe,

    /// 有 BOM 行但沒有任何一行設定上限（全部被略過）
    Unconstrained,

    /// 受瓶頸原物料限制的可生產數量（>= 0）
    Limited {
        quantity: i64,
        limiting_material: String,
    },
}

impl Feasibility {
    /// 可生產數量；「不適用」時為 None
    pub fn quantity(&self) -> Option<i64> {
        match self {
            Self::Limited { quantity, .. } => Some(*quantity),
            Self::NoRecipe | Self::Unconstrained => None,
        }
    }

    /// 瓶頸原物料
    pub fn limiting_material(&self) -> Option<&str> {
        match self {
            Self::Limited {
                limiting_material, ..
            } => Some(limiting_material.as_str()),
            Self::NoRecipe | Self::Unconstrained => None,
        }
    }

    /// 是否至少可生產一單位
    pub fn is_producible(&self) -> bool {
        matches!(self.quantity(), Some(q) if q > 0)
    }
}

/// BOM 行資料問題
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineIssue {
    /// 原物料關聯遺失
    MissingMaterial { line_index: usize },

    /// 用量缺漏或 <= 0
    InvalidQuantity {
        line_index: usize,
        material_name: String,
        required_quantity: Option<i64>,
    },
}

impl std::fmt::Display for LineIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMaterial { line_index } => {
                write!(f, "第 {} 行 BOM 缺少原物料關聯", line_index + 1)
            }
            Self::InvalidQuantity {
                line_index,
                material_name,
                required_quantity,
            } => match required_quantity {
                Some(q) => write!(
                    f,
                    "第 {} 行 BOM 原物料 {} 用量無效: {}",
                    line_index + 1,
                    material_name,
                    q
                ),
                None => write!(
                    f,
                    "第 {} 行 BOM 原物料 {} 缺少用量",
                    line_index + 1,
                    material_name
                ),
            },
        }
    }
}

/// 計算結果與過程中發現的資料問題
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeasibilityOutcome {
    pub feasibility: Feasibility,
    pub issues: Vec<LineIssue>,
}

/// 可生產數量計算器
pub struct FeasibilityCalculator;

impl FeasibilityCalculator {
    /// 計算單一產品的最大可生產整數數量
    ///
    /// 每行依序處理：
    /// - 原物料關聯遺失：記錄問題，略過
    /// - 庫存不存在或為 0：立即回傳 0，不再處理其餘行
    /// - 用量缺漏或 <= 0：記錄問題，依 `policy` 略過或歸零
    /// - 其餘：上限取 min(上限, 庫存 / 用量)（整數截斷）
    pub fn compute_max_quantity(
        lines: &[RecipeLine],
        stock: &StockIndex,
        policy: InvalidLinePolicy,
    ) -> FeasibilityOutcome {
        let mut issues = Vec::new();

        if lines.is_empty() {
            return FeasibilityOutcome {
                feasibility: Feasibility::NoRecipe,
                issues,
            };
        }

        let mut bound: Option<(i64, &str)> = None;

        for (line_index, line) in lines.iter().enumerate() {
            let Some(material_name) = line.raw_material_name.as_deref() else {
                issues.push(LineIssue::MissingMaterial { line_index });
                continue;
            };

            let available = match stock.available(material_name) {
                Some(qty) if qty != 0 => qty,
                _ => {
                    return FeasibilityOutcome {
                        feasibility: Self::zero(material_name),
                        issues,
                    };
                }
            };

            let required = match line.required_quantity {
                Some(q) if q > 0 => q,
                other => {
                    issues.push(LineIssue::InvalidQuantity {
                        line_index,
                        material_name: material_name.to_string(),
                        required_quantity: other,
                    });
                    match policy {
                        InvalidLinePolicy::Skip => continue,
                        InvalidLinePolicy::Block => {
                            return FeasibilityOutcome {
                                feasibility: Self::zero(material_name),
                                issues,
                            };
                        }
                    }
                }
            };

            // 負庫存只可能來自未經驗證的外部資料，視同 0
            let possible = (available / required).max(0);

            bound = match bound {
                Some((current, _)) if current <= possible => bound,
                _ => Some((possible, material_name)),
            };
        }

        let feasibility = match bound {
            Some((quantity, material)) => Feasibility::Limited {
                quantity,
                limiting_material: material.to_string(),
            },
            None => Feasibility::Unconstrained,
        };

        FeasibilityOutcome {
            feasibility,
            issues,
        }
    }

    fn zero(material_name: &str) -> Feasibility {
        Feasibility::Limited {
            quantity: 0,
            limiting_material: material_name.to_string(),
        }
    }
}
