// ==========================================
// 无线链路 KMZ 导出 - 导出配置
// ==========================================
// 职责: 输入/输出路径、线宽、列名绑定、预定义颜色表
// 红线: 构造后只读,不提供运行期修改
// ==========================================

use crate::domain::types::KmlColor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("配置格式错误: {0}")]
    FormatError(#[from] serde_json::Error),

    #[error("配置值非法 (key: {key}): {message}")]
    InvalidValue { key: String, message: String },
}

// ==========================================
// 配置键默认值
// ==========================================
pub mod defaults {
    pub const INPUT_PATH: &str = "dane_radiowe.xlsx";
    pub const OUTPUT_PATH: &str = "linie_radiowe.kmz";
    pub const LINE_WIDTH: u32 = 3;
    pub const DOCUMENT_NAME: &str = "Linki Radioliniowe (pełne informacje)";
    pub const MISSING_OPERATOR_LABEL: &str = "Brak danych";
}

// ==========================================
// ColumnNames - 源表列名绑定（精确匹配）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub link_id: String,
    pub operator: String,
    pub tx_lat: String,
    pub tx_lon: String,
    pub rx_lat: String,
    pub rx_lon: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            link_id: "Nr_pozw/dec".to_string(),
            operator: "Operator".to_string(),
            tx_lat: "Sz_geo_Tx".to_string(),
            tx_lon: "Dl_geo_Tx".to_string(),
            rx_lat: "Sz_geo_Rx".to_string(),
            rx_lon: "Dl_geo_Rx".to_string(),
        }
    }
}

impl ColumnNames {
    /// 必须存在于表头中的列
    pub fn required(&self) -> [&str; 6] {
        [
            self.link_id.as_str(),
            self.operator.as_str(),
            self.tx_lat.as_str(),
            self.tx_lon.as_str(),
            self.rx_lat.as_str(),
            self.rx_lon.as_str(),
        ]
    }
}

// ==========================================
// ExportConfig - 导出配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub input_path: String,
    pub output_path: String,
    pub line_width: u32,
    pub document_name: String,
    pub missing_operator_label: String,
    pub columns: ColumnNames,

    /// 已知运营商 → 颜色（BTreeMap 保证序列化顺序稳定）
    pub operator_colors: BTreeMap<String, KmlColor>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input_path: defaults::INPUT_PATH.to_string(),
            output_path: defaults::OUTPUT_PATH.to_string(),
            line_width: defaults::LINE_WIDTH,
            document_name: defaults::DOCUMENT_NAME.to_string(),
            missing_operator_label: defaults::MISSING_OPERATOR_LABEL.to_string(),
            columns: ColumnNames::default(),
            operator_colors: default_operator_colors(),
        }
    }
}

/// 预定义运营商颜色表
pub fn default_operator_colors() -> BTreeMap<String, KmlColor> {
    BTreeMap::from([
        ("P4 Sp. z o.o.".to_string(), KmlColor::purple()),
        ("T-Mobile Polska S.A.".to_string(), KmlColor::magenta()),
        ("ORANGE POLSKA S.A.".to_string(), KmlColor::orange()),
        ("Towerlink Poland Sp. z o.o.".to_string(), KmlColor::green()),
    ])
}

impl ExportConfig {
    /// 从 JSON 文本加载（缺省字段取默认值）
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ExportConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// 校验配置值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.line_width == 0 {
            return Err(ConfigError::InvalidValue {
                key: "line_width".to_string(),
                message: "线宽必须大于 0".to_string(),
            });
        }
        for (key, column) in [
            ("columns.link_id", &self.columns.link_id),
            ("columns.operator", &self.columns.operator),
        ] {
            if column.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "列名不能为空".to_string(),
                });
            }
        }
        for (operator, color) in &self.operator_colors {
            let hex = color.as_str();
            if hex.len() != 8 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ConfigError::InvalidValue {
                    key: format!("operator_colors.{}", operator),
                    message: format!("颜色需为 8 位十六进制 aabbggrr: {}", hex),
                });
            }
        }
        Ok(())
    }
}
