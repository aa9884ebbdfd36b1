// ==========================================
// 无线链路 KMZ 导出 - 引擎层
// ==========================================
// 职责: 坐标解析、颜色分配、去重校验、图层构建、编排
// 红线: 引擎不直接读写文件（经由 importer / export）
// ==========================================

pub mod color;
pub mod dms;
pub mod feature_builder;
pub mod orchestrator;
pub mod record_pipeline;

// 重导出核心引擎
pub use color::{hashed_color, ColorAssigner};
pub use dms::parse_dms;
pub use feature_builder::FeatureBuilder;
pub use orchestrator::{LinkExporter, PipelineError};
pub use record_pipeline::{PipelineOutput, PipelineStats, RecordPipeline};
