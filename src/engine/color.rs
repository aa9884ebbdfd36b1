// ==========================================
// 无线链路 KMZ 导出 - 运营商颜色分配
// ==========================================
// 规则:
// 1. 预定义表命中 → 表中颜色
// 2. 否则 SHA-256(名称) 前 3 字节作为 RGB，按 KML aabbggrr 输出
// 红线: 纯函数，无缓存、无全局可变状态
// ==========================================

use crate::domain::types::KmlColor;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// 由名称哈希派生颜色
///
/// 摘要十六进制前 6 位 h0h1h2 → "ff" + h2 + h1 + h0
pub fn hashed_color(label: &str) -> KmlColor {
    let digest = Sha256::digest(label.as_bytes());
    KmlColor::from_rgb(digest[0], digest[1], digest[2])
}

// ==========================================
// ColorAssigner - 借用只读颜色表
// ==========================================
pub struct ColorAssigner<'a> {
    predefined: &'a BTreeMap<String, KmlColor>,
}

impl<'a> ColorAssigner<'a> {
    pub fn new(predefined: &'a BTreeMap<String, KmlColor>) -> Self {
        Self { predefined }
    }

    /// 为运营商分配颜色
    pub fn assign(&self, label: &str) -> KmlColor {
        self.predefined
            .get(label)
            .cloned()
            .unwrap_or_else(|| hashed_color(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_operator_colors;

    #[test]
    fn test_predefined_colors() {
        let table = default_operator_colors();
        let assigner = ColorAssigner::new(&table);

        assert_eq!(assigner.assign("P4 Sp. z o.o."), KmlColor::purple());
        assert_eq!(assigner.assign("T-Mobile Polska S.A."), KmlColor::magenta());
        assert_eq!(assigner.assign("ORANGE POLSKA S.A."), KmlColor::orange());
        assert_eq!(assigner.assign("Towerlink Poland Sp. z o.o."), KmlColor::green());
    }

    #[test]
    fn test_hashed_color_known_values() {
        // sha256("Polkomtel Sp. z o.o.") = 3608fa...
        assert_eq!(hashed_color("Polkomtel Sp. z o.o.").as_str(), "fffa0836");
        // sha256("Alpha") = b1a96d...
        assert_eq!(hashed_color("Alpha").as_str(), "ff6da9b1");
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let table = default_operator_colors();
        let assigner = ColorAssigner::new(&table);

        let first = assigner.assign("Nowy Operator");
        let second = assigner.assign("Nowy Operator");
        assert_eq!(first, second);
        assert_eq!(first, hashed_color("Nowy Operator"));
        assert!(first.as_str().starts_with("ff"));
        assert_eq!(first.as_str().len(), 8);
    }

    #[test]
    fn test_distinct_labels_distinct_colors() {
        assert_ne!(hashed_color("Operator A"), hashed_color("Operator B"));
    }
}
