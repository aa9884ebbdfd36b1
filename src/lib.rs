// ==========================================
// 无线链路 KMZ 导出 - 核心库
// ==========================================
// 输入: 点对点无线链路许可证表（Excel / CSV）
// 输出: 按运营商分层、着色的 KMZ 折线地图
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据
pub mod importer;

// 引擎层 - 坐标/颜色/分组规则
pub mod engine;

// 输出层 - KML/KMZ
pub mod export;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::ExportConfig;

pub use domain::{
    AltitudeMode, ExportSummary, GeoPoint, KmlColor, Layer, LineFeature, LinkRecord,
    ValidatedLink,
};

pub use engine::{
    hashed_color, parse_dms, ColorAssigner, FeatureBuilder, LinkExporter, PipelineError,
    RecordPipeline,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "无线链路 KMZ 导出工具";
