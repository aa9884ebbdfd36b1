// ==========================================
// 无线链路 KMZ 导出 - DMS 坐标解析
// ==========================================
// 输入: 度-半球-分'秒 文本，如 52N13'34.5'' / 021°E00'10"
// 输出: 带符号十进制度（S/W 为负）
// ==========================================

use once_cell::sync::Lazy;
use regex::Regex;

// 度, 半球, 分', 秒; 记号间允许任意非字母数字、非点分隔符
static DMS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)[^\d\w.]*([NSEW])[^\d\w.]*(\d+)'([\d.]+)").expect("DMS 正则非法")
});

/// 解析 DMS 文本为十进制度
///
/// - 两个连续撇号（秒记号的替代写法）先归一为单个撇号
/// - 只取第一个匹配，之后的内容忽略
/// - 不校验分/秒是否 < 60：源数据存在不规范写法，这里保持宽松
///   （分 ≥ 60 时结果可能越界，属已知问题）
/// - 秒字段形如 "1.2.3" 无法转为数值时返回 None
pub fn parse_dms(text: Option<&str>) -> Option<f64> {
    let normalized = text?.replace("''", "'");
    let caps = DMS_PATTERN.captures(&normalized)?;

    let degrees: f64 = caps[1].parse().ok()?;
    let minutes: f64 = caps[3].parse().ok()?;
    let seconds: f64 = caps[4].parse().ok()?;

    let dd = degrees + minutes / 60.0 + seconds / 3600.0;
    match &caps[2] {
        "S" | "W" => Some(-dd),
        _ => Some(dd),
    }
}
