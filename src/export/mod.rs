// ==========================================
// 无线链路 KMZ 导出 - 输出层
// ==========================================
// 职责: 有序图层 → KML / KMZ 文件
// ==========================================

pub mod error;
pub mod kml_writer;
pub mod kmz_sink;

pub use error::{ExportError, ExportResult};
pub use kml_writer::KmlWriter;
pub use kmz_sink::{sink_for_path, KmlSink, KmzSink, LayerSink, KMZ_DOCUMENT_ENTRY};
