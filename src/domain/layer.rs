// ==========================================
// 无线链路 KMZ 导出 - 图层与要素
// ==========================================
// 职责: 输出文档的不可变组成单元
// 红线: Feature 仅归属一个 Layer
// ==========================================

use crate::domain::link::GeoPoint;
use crate::domain::types::{AltitudeMode, KmlColor};
use serde::{Deserialize, Serialize};

// ==========================================
// LineFeature - 两点折线要素（Tx → Rx）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineFeature {
    pub name: String,
    pub points: [GeoPoint; 2], // [Tx, Rx]
    pub color: KmlColor,
    pub width: u32,
    pub altitude_mode: AltitudeMode,
    pub description: String, // HTML 描述块（对输出层不透明）
}

impl LineFeature {
    /// 经度在前的坐标序列，Tx 在前
    pub fn coordinates(&self) -> [(f64, f64); 2] {
        [
            (self.points[0].lon, self.points[0].lat),
            (self.points[1].lon, self.points[1].lat),
        ]
    }
}

// ==========================================
// Layer - 每个运营商一个图层
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub color: KmlColor,
    pub features: Vec<LineFeature>,
}

// ==========================================
// ExportSummary - 一次导出的统计
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub total_rows: usize,  // 读入行数
    pub unique_rows: usize, // 去重后行数
    pub valid_links: usize, // 坐标校验后链路数
    pub layers: usize,      // 图层数
    pub output_path: String,
}
