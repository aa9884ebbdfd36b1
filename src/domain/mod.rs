// ==========================================
// 无线链路 KMZ 导出 - 领域模型层
// ==========================================
// 职责: 定义链路记录、坐标、图层等实体
// 红线: 不含文件读写逻辑,不含解析逻辑
// ==========================================

pub mod layer;
pub mod link;
pub mod types;

// 重导出核心类型
pub use layer::{ExportSummary, Layer, LineFeature};
pub use link::{GeoPoint, LinkRecord, ValidatedLink};
pub use types::{AltitudeMode, KmlColor};
