// ==========================================
// 无线链路 KMZ 导出 - 输出端
// ==========================================
// LayerSink: 接收有序图层的输出接口
// KmzSink:   KML 以 doc.kml 压缩入 zip 容器
// ==========================================

use crate::domain::layer::Layer;
use crate::export::error::{ExportError, ExportResult};
use crate::export::kml_writer::KmlWriter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// KMZ 内文档名（Google Earth 约定读取第一个 .kml）
pub const KMZ_DOCUMENT_ENTRY: &str = "doc.kml";

// ==========================================
// LayerSink Trait
// ==========================================
// 实现者: KmzSink, KmlSink
pub trait LayerSink: Send + Sync {
    /// 写出完整文档（一次性写入，不支持增量）
    fn emit(&self, document_name: &str, layers: &[Layer], output_path: &Path) -> ExportResult<()>;
}

fn create_output(output_path: &Path) -> ExportResult<File> {
    File::create(output_path).map_err(|source| ExportError::FileWriteError {
        path: output_path.display().to_string(),
        source,
    })
}

// ==========================================
// KmzSink
// ==========================================
pub struct KmzSink;

impl LayerSink for KmzSink {
    fn emit(&self, document_name: &str, layers: &[Layer], output_path: &Path) -> ExportResult<()> {
        let kml = KmlWriter::render(document_name, layers)?;
        debug!(bytes = kml.len(), "KML 文档生成完成");

        let file = create_output(output_path)?;
        let mut zip = ZipWriter::new(BufWriter::new(file));
        zip.start_file(
            KMZ_DOCUMENT_ENTRY,
            FileOptions::default().compression_method(CompressionMethod::Deflated),
        )?;
        zip.write_all(&kml)
            .map_err(|source| ExportError::FileWriteError {
                path: output_path.display().to_string(),
                source,
            })?;

        let mut inner = zip.finish()?;
        inner.flush().map_err(|source| ExportError::FileWriteError {
            path: output_path.display().to_string(),
            source,
        })?;
        Ok(())
    }
}

// ==========================================
// KmlSink - 未压缩 KML（调试/对比用）
// ==========================================
pub struct KmlSink;

impl LayerSink for KmlSink {
    fn emit(&self, document_name: &str, layers: &[Layer], output_path: &Path) -> ExportResult<()> {
        let file = create_output(output_path)?;
        let mut out = BufWriter::new(file);
        KmlWriter::write_to(&mut out, document_name, layers)?;
        out.flush().map_err(|source| ExportError::FileWriteError {
            path: output_path.display().to_string(),
            source,
        })?;
        Ok(())
    }
}

/// 按扩展名选择输出端（.kml → 未压缩，其余 → KMZ）
pub fn sink_for_path(output_path: &Path) -> Box<dyn LayerSink> {
    let is_kml = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("kml"))
        .unwrap_or(false);

    if is_kml {
        Box::new(KmlSink)
    } else {
        Box::new(KmzSink)
    }
}
