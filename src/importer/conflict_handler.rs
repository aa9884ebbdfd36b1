// ==========================================
// 无线链路 KMZ 导出 - 冲突处理器实现
// ==========================================
// 职责: 检测重复许可证号，保留首次出现
// 说明: 链路号缺失的行共享同一个"缺失"键，只保留第一行
// ==========================================

use crate::domain::link::LinkRecord;
use crate::importer::link_importer_trait::ConflictHandler as ConflictHandlerTrait;
use std::collections::HashSet;

pub struct ConflictHandler;

impl ConflictHandlerTrait for ConflictHandler {
    fn detect_duplicates(&self, records: &[LinkRecord]) -> Vec<(usize, Option<String>)> {
        let mut seen: HashSet<Option<&str>> = HashSet::new();
        let mut duplicates = Vec::new();

        for record in records {
            if !seen.insert(record.link_id.as_deref()) {
                duplicates.push((record.row_number, record.link_id.clone()));
            }
        }

        duplicates
    }

    fn dedup_keep_first(&self, records: Vec<LinkRecord>) -> Vec<LinkRecord> {
        let mut seen: HashSet<Option<String>> = HashSet::new();

        // 遍历 Vec 本身，输出顺序 = 输入顺序
        records
            .into_iter()
            .filter(|record| seen.insert(record.link_id.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn create_test_record(link_id: Option<&str>, row_number: usize) -> LinkRecord {
        LinkRecord {
            link_id: link_id.map(str::to_string),
            operator: Some("P4 Sp. z o.o.".to_string()),
            tx_lat_raw: None,
            tx_lon_raw: None,
            rx_lat_raw: None,
            rx_lon_raw: None,
            attributes: BTreeMap::new(),
            row_number,
        }
    }

    #[test]
    fn test_detect_duplicates_none() {
        let records = vec![
            create_test_record(Some("A1"), 1),
            create_test_record(Some("B2"), 2),
        ];

        assert!(ConflictHandler.detect_duplicates(&records).is_empty());
    }

    #[test]
    fn test_detect_duplicates_multiple() {
        let records = vec![
            create_test_record(Some("A1"), 1),
            create_test_record(Some("A1"), 2), // 重复
            create_test_record(Some("B2"), 3),
            create_test_record(Some("A1"), 4), // 再次重复
        ];

        let duplicates = ConflictHandler.detect_duplicates(&records);

        assert_eq!(duplicates.len(), 2);
        assert_eq!(duplicates[0], (2, Some("A1".to_string())));
        assert_eq!(duplicates[1].0, 4);
    }

    #[test]
    fn test_dedup_keep_first_preserves_order() {
        let records = vec![
            create_test_record(Some("C3"), 1),
            create_test_record(Some("A1"), 2),
            create_test_record(Some("C3"), 3),
            create_test_record(Some("B2"), 4),
        ];

        let kept = ConflictHandler.dedup_keep_first(records);
        let rows: Vec<usize> = kept.iter().map(|r| r.row_number).collect();

        assert_eq!(rows, vec![1, 2, 4]);
    }

    #[test]
    fn test_dedup_all_distinct_retained() {
        let records: Vec<LinkRecord> = (1..=5)
            .map(|i| create_test_record(Some(&format!("ID{}", i)), i))
            .collect();

        assert_eq!(ConflictHandler.dedup_keep_first(records).len(), 5);
    }

    #[test]
    fn test_dedup_missing_ids_collapse() {
        let records = vec![
            create_test_record(None, 1),
            create_test_record(Some("A1"), 2),
            create_test_record(None, 3),
        ];

        let kept = ConflictHandler.dedup_keep_first(records);
        let rows: Vec<usize> = kept.iter().map(|r| r.row_number).collect();

        assert_eq!(rows, vec![1, 2]);
    }
}
