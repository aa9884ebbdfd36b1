// ==========================================
// 无线链路 KMZ 导出 - 导出编排器
// ==========================================
// 流程: 解析文件 → 字段映射 → 去重 + 坐标校验 → 分组建图层 → 写出
// 单线程、一次性批处理；任一致命错误即中止，不产生部分输出
// ==========================================

use crate::config::ExportConfig;
use crate::domain::layer::{ExportSummary, Layer};
use crate::domain::link::LinkRecord;
use crate::engine::feature_builder::FeatureBuilder;
use crate::engine::record_pipeline::{PipelineOutput, RecordPipeline};
use crate::export::{sink_for_path, ExportError, LayerSink};
use crate::importer::{
    ConflictHandlerImpl, FieldMapper, FieldMapperImpl, FileParser, ImportError,
    UniversalFileParser,
};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

/// 编排层错误
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

// ==========================================
// LinkExporter - 链路导出器
// ==========================================
pub struct LinkExporter {
    config: ExportConfig,

    // 导出组件
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
    pipeline: RecordPipeline,
    sink: Box<dyn LayerSink>,
}

impl LinkExporter {
    /// 使用默认组件创建（输出端按输出路径扩展名选择）
    pub fn new(config: ExportConfig) -> Self {
        let field_mapper = FieldMapperImpl::new(config.columns.clone());
        let sink = sink_for_path(Path::new(&config.output_path));
        Self::with_components(
            config,
            Box::new(UniversalFileParser),
            Box::new(field_mapper),
            RecordPipeline::new(Box::new(ConflictHandlerImpl)),
            sink,
        )
    }

    /// 注入自定义组件
    pub fn with_components(
        config: ExportConfig,
        file_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapper>,
        pipeline: RecordPipeline,
        sink: Box<dyn LayerSink>,
    ) -> Self {
        Self {
            config,
            file_parser,
            field_mapper,
            pipeline,
            sink,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// 读取并映射输入表
    pub fn load_records(&self) -> Result<Vec<LinkRecord>, PipelineError> {
        let input = Path::new(&self.config.input_path);
        let table = self.file_parser.parse_to_raw_records(input).map_err(|e| {
            error!(error = %e, "文件解析失败");
            e
        })?;
        debug!(columns = table.headers.len(), rows = table.rows.len(), "文件解析完成");

        // 空表直接输出空文档，不做表头校验
        if !table.rows.is_empty() {
            self.field_mapper.check_required_columns(&table.headers)?;
        }

        Ok(table
            .rows
            .into_iter()
            .enumerate()
            .map(|(idx, row)| self.field_mapper.map_to_link_record(row, idx + 1))
            .collect())
    }

    /// 去重 + 坐标校验 + 建图层（不落盘）
    pub fn build(&self, records: Vec<LinkRecord>) -> (PipelineOutput, Vec<Layer>) {
        let output = self.pipeline.process(records);
        let layers = FeatureBuilder::new(&self.config).build_layers(&output.links);
        info!(layers = layers.len(), "图层构建完成");
        (output, layers)
    }

    /// 完整执行一次导出
    #[instrument(skip(self), fields(input = %self.config.input_path, output = %self.config.output_path))]
    pub fn run(&self) -> Result<ExportSummary, PipelineError> {
        let records = self.load_records()?;
        let (output, layers) = self.build(records);

        let output_path = Path::new(&self.config.output_path);
        self.sink
            .emit(&self.config.document_name, &layers, output_path)
            .map_err(|e| {
                error!(error = %e, "输出写入失败");
                e
            })?;

        info!(output = %self.config.output_path, "导出完成");

        Ok(ExportSummary {
            total_rows: output.stats.total_rows,
            unique_rows: output.stats.unique_rows,
            valid_links: output.stats.valid_links,
            layers: layers.len(),
            output_path: self.config.output_path.clone(),
        })
    }
}
