// ==========================================
// 无线链路 KMZ 导出 - 配置层
// ==========================================
// 职责: 硬编码默认配置 + 可选 JSON 覆写（库调用方）
// ==========================================

pub mod export_config;

// 重导出核心配置
pub use export_config::{default_operator_colors, defaults, ColumnNames, ConfigError, ExportConfig};
