// ==========================================
// 无线链路 KMZ 导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// ==========================================

use crate::domain::link::LinkRecord;
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

/// 原始行记录（列名 → 单元格文本）
pub type RawRow = HashMap<String, String>;

/// 解析结果：表头 + 行记录
///
/// 每一行都带全部表头键，短行缺失的单元格填空串
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: ExcelParser, CsvParser
pub trait FileParser: Send + Sync {
    /// 解析文件为表头 + 原始行记录
    ///
    /// # 返回
    /// - Ok(RawTable): 表头与行记录（按文件顺序，已跳过全空行）
    /// - Err: 文件不存在、格式错误
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口（阶段 1）
// 实现者: FieldMapper
pub trait FieldMapper: Send + Sync {
    /// 校验表头是否包含全部必需列
    fn check_required_columns(&self, headers: &[String]) -> ImportResult<()>;

    /// 将原始行记录映射为 LinkRecord
    ///
    /// # 参数
    /// - row: 原始行记录
    /// - row_number: 行号（用于日志）
    fn map_to_link_record(&self, row: RawRow, row_number: usize) -> LinkRecord;
}

// ==========================================
// ConflictHandler Trait
// ==========================================
// 用途: 重复链路号处理
// 实现者: ConflictHandler
pub trait ConflictHandler: Send + Sync {
    /// 检测重复链路号
    ///
    /// # 返回
    /// - Vec<(行号, link_id)>: 重复记录列表（不包括第一次出现）
    fn detect_duplicates(&self, records: &[LinkRecord]) -> Vec<(usize, Option<String>)>;

    /// 去重，保留首次出现（按输入顺序）
    fn dedup_keep_first(&self, records: Vec<LinkRecord>) -> Vec<LinkRecord>;
}
