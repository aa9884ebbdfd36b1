// ==========================================
// 无线链路 KMZ 导出 - 输出模块错误类型
// ==========================================

use thiserror::Error;

/// 输出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("KML 生成失败: {0}")]
    KmlWriteError(#[from] quick_xml::Error),

    #[error("KMZ 压缩失败: {0}")]
    ArchiveError(#[from] zip::result::ZipError),

    #[error("输出文件写入失败 ({path}): {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
