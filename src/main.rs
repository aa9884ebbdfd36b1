// ==========================================
// 无线链路 KMZ 导出 - 命令行入口
// ==========================================
// 无命令行参数：输入/输出路径等取 ExportConfig 默认值
// ==========================================

use radiolink_kmz::{logging, ExportConfig, LinkExporter};

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", radiolink_kmz::APP_NAME);
    tracing::info!("系统版本: {}", radiolink_kmz::VERSION);
    tracing::info!("==================================================");

    let config = ExportConfig::default();
    tracing::info!(input = %config.input_path, "读取输入文件");

    let exporter = LinkExporter::new(config);
    match exporter.run() {
        Ok(summary) => {
            tracing::info!(
                total = summary.total_rows,
                unique = summary.unique_rows,
                valid = summary.valid_links,
                layers = summary.layers,
                "完成! 文件 '{}' 已生成",
                summary.output_path
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("导出失败: {}", e);
            Err(e.into())
        }
    }
}
