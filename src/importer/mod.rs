// ==========================================
// 无线链路 KMZ 导出 - 导入层
// ==========================================
// 职责: 外部表格 → LinkRecord
// 支持: Excel, CSV
// ==========================================

pub mod conflict_handler;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod link_importer_trait;

// 重导出核心类型
pub use conflict_handler::ConflictHandler as ConflictHandlerImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};

// 重导出 Trait 接口
pub use link_importer_trait::{ConflictHandler, FieldMapper, FileParser, RawRow, RawTable};
