// ==========================================
// 无线链路 KMZ 导出 - 记录处理管道
// ==========================================
// 流程: 去重(保留首次) → 四个坐标 DMS 解析 → 丢弃任一缺失的行
// 输出: 按输入顺序的 ValidatedLink 序列 + 各阶段计数
// ==========================================

use crate::domain::link::{GeoPoint, LinkRecord, ValidatedLink};
use crate::engine::dms::parse_dms;
use crate::importer::link_importer_trait::ConflictHandler;
use tracing::{debug, info};

/// 各阶段计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub total_rows: usize,
    pub unique_rows: usize,
    pub valid_links: usize,
}

/// 管道输出
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub links: Vec<ValidatedLink>,
    pub stats: PipelineStats,
}

// ==========================================
// RecordPipeline
// ==========================================
pub struct RecordPipeline {
    conflict_handler: Box<dyn ConflictHandler>,
}

impl RecordPipeline {
    pub fn new(conflict_handler: Box<dyn ConflictHandler>) -> Self {
        Self { conflict_handler }
    }

    /// 执行去重 + 坐标校验
    pub fn process(&self, records: Vec<LinkRecord>) -> PipelineOutput {
        let total_rows = records.len();
        info!(total_rows, "读入行数");

        for (row_number, link_id) in self.conflict_handler.detect_duplicates(&records) {
            debug!(row_number, link_id = ?link_id, "重复链路号，丢弃");
        }
        let unique = self.conflict_handler.dedup_keep_first(records);
        let unique_rows = unique.len();
        info!(unique_rows, "去重后唯一链路数");

        let links: Vec<ValidatedLink> = unique.into_iter().filter_map(validate).collect();
        let valid_links = links.len();
        info!(valid_links, "坐标解析后可用链路数");

        PipelineOutput {
            links,
            stats: PipelineStats {
                total_rows,
                unique_rows,
                valid_links,
            },
        }
    }
}

/// 四个坐标全部可解析时返回 ValidatedLink
fn validate(record: LinkRecord) -> Option<ValidatedLink> {
    let coords = (
        parse_dms(record.tx_lat_raw.as_deref()),
        parse_dms(record.tx_lon_raw.as_deref()),
        parse_dms(record.rx_lat_raw.as_deref()),
        parse_dms(record.rx_lon_raw.as_deref()),
    );

    match coords {
        (Some(tx_lat), Some(tx_lon), Some(rx_lat), Some(rx_lon)) => Some(ValidatedLink {
            tx: GeoPoint::new(tx_lat, tx_lon),
            rx: GeoPoint::new(rx_lat, rx_lon),
            record,
        }),
        _ => {
            debug!(
                row_number = record.row_number,
                link_id = ?record.link_id,
                "坐标无法解析，丢弃"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::ConflictHandlerImpl;
    use std::collections::BTreeMap;

    fn record(id: &str, row_number: usize, rx_lon: &str) -> LinkRecord {
        LinkRecord {
            link_id: Some(id.to_string()),
            operator: Some("Alpha".to_string()),
            tx_lat_raw: Some("52N13'34''".to_string()),
            tx_lon_raw: Some("21E00'10''".to_string()),
            rx_lat_raw: Some("52N14'00''".to_string()),
            rx_lon_raw: Some(rx_lon.to_string()),
            attributes: BTreeMap::new(),
            row_number,
        }
    }

    fn pipeline() -> RecordPipeline {
        RecordPipeline::new(Box::new(ConflictHandlerImpl))
    }

    #[test]
    fn test_all_valid_retained() {
        let records = vec![
            record("A1", 1, "21E01'00''"),
            record("B2", 2, "21E02'00''"),
        ];

        let output = pipeline().process(records);

        assert_eq!(
            output.stats,
            PipelineStats {
                total_rows: 2,
                unique_rows: 2,
                valid_links: 2
            }
        );
        assert!((output.links[0].tx.lat - (52.0 + 13.0 / 60.0 + 34.0 / 3600.0)).abs() < 1e-9);
        assert!((output.links[1].rx.lon - (21.0 + 2.0 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn test_any_missing_coordinate_drops_row() {
        let mut missing = record("C3", 3, "21E01'00''");
        missing.tx_lat_raw = None;

        let records = vec![record("A1", 1, "brak"), record("B2", 2, "21E01'00''"), missing];

        let output = pipeline().process(records);

        assert_eq!(output.stats.unique_rows, 3);
        assert_eq!(output.stats.valid_links, 1);
        assert_eq!(output.links[0].record.link_id, Some("B2".to_string()));
    }

    #[test]
    fn test_duplicate_dropped_even_if_first_invalid() {
        // 去重先于坐标校验：首行坐标非法时，后续同号有效行也不会补位
        let records = vec![record("A1", 1, "brak"), record("A1", 2, "21E01'00''")];

        let output = pipeline().process(records);

        assert_eq!(output.stats.unique_rows, 1);
        assert_eq!(output.stats.valid_links, 0);
    }
}
