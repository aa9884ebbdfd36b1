// ==========================================
// 无线链路 KMZ 导出 - 字段映射器实现
// ==========================================
// 职责: 源列 → LinkRecord（按列名精确绑定）
// ==========================================

use crate::config::ColumnNames;
use crate::domain::link::LinkRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::link_importer_trait::{FieldMapper as FieldMapperTrait, RawRow};
use std::collections::BTreeMap;

pub struct FieldMapper {
    columns: ColumnNames,
}

impl FieldMapper {
    pub fn new(columns: ColumnNames) -> Self {
        Self { columns }
    }

    /// 提取字符串字段，空白视为缺失
    fn get_string(row: &RawRow, key: &str) -> Option<String> {
        row.get(key).and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }
}

impl FieldMapperTrait for FieldMapper {
    fn check_required_columns(&self, headers: &[String]) -> ImportResult<()> {
        match self
            .columns
            .required()
            .into_iter()
            .find(|column| !headers.iter().any(|h| h == column))
        {
            Some(missing) => Err(ImportError::MissingColumn(missing.to_string())),
            None => Ok(()),
        }
    }

    fn map_to_link_record(&self, row: RawRow, row_number: usize) -> LinkRecord {
        let attributes: BTreeMap<String, String> = row
            .iter()
            .filter_map(|(k, _)| Self::get_string(&row, k).map(|v| (k.clone(), v)))
            .collect();

        LinkRecord {
            link_id: Self::get_string(&row, &self.columns.link_id),
            operator: Self::get_string(&row, &self.columns.operator),
            tx_lat_raw: Self::get_string(&row, &self.columns.tx_lat),
            tx_lon_raw: Self::get_string(&row, &self.columns.tx_lon),
            rx_lat_raw: Self::get_string(&row, &self.columns.rx_lat),
            rx_lon_raw: Self::get_string(&row, &self.columns.rx_lon),
            attributes,
            row_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row() -> RawRow {
        let mut row = RawRow::new();
        row.insert("Nr_pozw/dec".to_string(), "  A1 ".to_string());
        row.insert("Operator".to_string(), "P4 Sp. z o.o.".to_string());
        row.insert("Sz_geo_Tx".to_string(), "52N13'34''".to_string());
        row.insert("Dl_geo_Tx".to_string(), "21E00'10''".to_string());
        row.insert("Sz_geo_Rx".to_string(), "52N14'00''".to_string());
        row.insert("Dl_geo_Rx".to_string(), "21E01'00''".to_string());
        row.insert("f [GHz]".to_string(), "18".to_string());
        row.insert("Ulica Tx".to_string(), "".to_string());
        row
    }

    #[test]
    fn test_field_mapper_basic() {
        let mapper = FieldMapper::new(ColumnNames::default());
        let record = mapper.map_to_link_record(full_row(), 1);

        assert_eq!(record.link_id, Some("A1".to_string()));
        assert_eq!(record.operator, Some("P4 Sp. z o.o.".to_string()));
        assert_eq!(record.tx_lat_raw, Some("52N13'34''".to_string()));
        assert_eq!(record.attribute("f [GHz]"), Some("18"));
        assert_eq!(record.row_number, 1);
    }

    #[test]
    fn test_field_mapper_empty_as_none() {
        let mapper = FieldMapper::new(ColumnNames::default());
        let mut row = full_row();
        row.insert("Dl_geo_Rx".to_string(), "   ".to_string());

        let record = mapper.map_to_link_record(row, 3);

        assert_eq!(record.rx_lon_raw, None);
        assert_eq!(record.attribute("Ulica Tx"), None);
    }

    fn headers_of(row: &RawRow) -> Vec<String> {
        row.keys().cloned().collect()
    }

    #[test]
    fn test_check_required_columns() {
        let mapper = FieldMapper::new(ColumnNames::default());
        assert!(mapper.check_required_columns(&headers_of(&full_row())).is_ok());

        let mut row = full_row();
        row.remove("Operator");
        let result = mapper.check_required_columns(&headers_of(&row));
        assert!(matches!(result, Err(ImportError::MissingColumn(c)) if c == "Operator"));
    }

    #[test]
    fn test_custom_id_column() {
        let columns = ColumnNames {
            link_id: "ID".to_string(),
            ..ColumnNames::default()
        };
        let mapper = FieldMapper::new(columns);
        let mut row = full_row();
        row.insert("ID".to_string(), "X9".to_string());

        let record = mapper.map_to_link_record(row, 1);
        assert_eq!(record.link_id, Some("X9".to_string()));
    }
}
