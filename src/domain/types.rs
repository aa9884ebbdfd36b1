// ==========================================
// 无线链路 KMZ 导出 - 领域类型定义
// ==========================================
// 颜色 / 高度模式 等值对象
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// KML 颜色
// ==========================================
// 格式: 8 位十六进制 aabbggrr（KML 约定，非 RGB 顺序）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KmlColor(String);

impl KmlColor {
    pub const PURPLE: &'static str = "ff800080";
    pub const MAGENTA: &'static str = "ffff00ff";
    pub const ORANGE: &'static str = "ff00a5ff";
    pub const GREEN: &'static str = "ff008000";

    /// 由 aabbggrr 字符串构造（不做格式校验，调用方负责）
    pub fn new(aabbggrr: impl Into<String>) -> Self {
        Self(aabbggrr.into())
    }

    /// 由 RGB 三字节构造，alpha 固定为 ff
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("ff{:02x}{:02x}{:02x}", b, g, r))
    }

    pub fn purple() -> Self {
        Self::new(Self::PURPLE)
    }

    pub fn magenta() -> Self {
        Self::new(Self::MAGENTA)
    }

    pub fn orange() -> Self {
        Self::new(Self::ORANGE)
    }

    pub fn green() -> Self {
        Self::new(Self::GREEN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KmlColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ==========================================
// 高度模式 (Altitude Mode)
// ==========================================
// 链路线段一律贴地
// 序列化格式: camelCase (与 KML 一致)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AltitudeMode {
    #[default]
    ClampToGround, // 贴地
}

impl fmt::Display for AltitudeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AltitudeMode::ClampToGround => write!(f, "clampToGround"),
        }
    }
}
