//! 处理器配置

use serde::{Deserialize, Serialize};

/// 坐标校验策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoordinatePolicy {
    /// Coordinates must be finite and within geographic bounds
    #[default]
    Strict,
    /// Coordinates must be finite; range enforcement is left to the asset store
    PassThrough,
}

/// Location update handler configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HandlerConfig {
    pub coordinate_policy: CoordinatePolicy,
}

impl HandlerConfig {
    /// Config that forwards any finite coordinate pair to the store
    #[must_use]
    pub fn pass_through() -> Self {
        Self {
            coordinate_policy: CoordinatePolicy::PassThrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_strict() {
        assert_eq!(
            HandlerConfig::default().coordinate_policy,
            CoordinatePolicy::Strict
        );
    }

    #[test]
    fn deserializes_camel_case_and_fills_missing_fields() {
        let config: HandlerConfig =
            serde_json::from_str(r#"{"coordinatePolicy":"passThrough"}"#).unwrap();
        assert_eq!(config, HandlerConfig::pass_through());

        let config: HandlerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HandlerConfig::default());
    }
}
