//! 生產模擬配置

use serde::{Deserialize, Serialize};

/// 模擬參數配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// 無效 BOM 行（用量缺漏或 <= 0）的處理方式
    pub invalid_line_policy: InvalidLinePolicy,

    /// 是否以 rayon 並行計算各產品
    ///
    /// 結果排序在收集後進行，與循序計算輸出一致。
    pub parallel: bool,
}

impl SimulationConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            invalid_line_policy: InvalidLinePolicy::Skip,
            parallel: false,
        }
    }

    /// 建構器模式：設置無效 BOM 行處理方式
    pub fn with_invalid_line_policy(mut self, policy: InvalidLinePolicy) -> Self {
        self.invalid_line_policy = policy;
        self
    }

    /// 建構器模式：設置是否並行
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 無效 BOM 行處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidLinePolicy {
    /// 略過該行，該原物料不構成限制（預設）
    #[default]
    Skip,

    /// 視為無法生產：可生產數量歸零
    Block,
}

impl std::str::FromStr for InvalidLinePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "block" => Ok(Self::Block),
            other => Err(format!("未知的無效行處理方式: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();

        assert_eq!(config.invalid_line_policy, InvalidLinePolicy::Skip);
        assert!(!config.parallel);
    }

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new()
            .with_invalid_line_policy(InvalidLinePolicy::Block)
            .with_parallel(true);

        assert_eq!(config.invalid_line_policy, InvalidLinePolicy::Block);
        assert!(config.parallel);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("skip".parse::<InvalidLinePolicy>(), Ok(InvalidLinePolicy::Skip));
        assert_eq!("BLOCK".parse::<InvalidLinePolicy>(), Ok(InvalidLinePolicy::Block));
        assert!("ignore".parse::<InvalidLinePolicy>().is_err());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: SimulationConfig = serde_json::from_str(r#"{"parallel": true}"#).unwrap();

        assert!(config.parallel);
        assert_eq!(config.invalid_line_policy, InvalidLinePolicy::Skip);
    }
}
