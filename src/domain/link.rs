// ==========================================
// 无线链路 KMZ 导出 - 链路领域模型
// ==========================================
// 职责: 导入行记录、地理坐标、校验后链路
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// LinkRecord - 导入中间结构体
// ==========================================
// 用途: 文件解析 → 字段映射 → 此结构
// 生命周期: 读入后不可变，坐标派生结果另存于 ValidatedLink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    // ===== 主键 =====
    pub link_id: Option<String>, // 许可证/决定号

    // ===== 分组 =====
    pub operator: Option<String>, // 运营商名称

    // ===== DMS 原始坐标 =====
    pub tx_lat_raw: Option<String>,
    pub tx_lon_raw: Option<String>,
    pub rx_lat_raw: Option<String>,
    pub rx_lon_raw: Option<String>,

    // ===== 描述性字段（列名 → 单元格值，空值不入表）=====
    pub attributes: BTreeMap<String, String>,

    // ===== 元信息 =====
    pub row_number: usize, // 数据行号（从 1 开始，不含表头）
}

impl LinkRecord {
    /// 读取描述性字段
    pub fn attribute(&self, column: &str) -> Option<&str> {
        self.attributes.get(column).map(String::as_str)
    }
}

// ==========================================
// GeoPoint - 十进制度坐标
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// KML 坐标元组（经度在前）
    pub fn to_kml_tuple(&self) -> String {
        format!("{},{},0.0", self.lon, self.lat)
    }
}

// ==========================================
// ValidatedLink - 四个坐标全部解析成功的链路
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedLink {
    pub record: LinkRecord,
    pub tx: GeoPoint,
    pub rx: GeoPoint,
}
