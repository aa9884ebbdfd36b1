// ==========================================
// 无线链路 KMZ 导出 - 要素构建器
// ==========================================
// 职责: 按运营商分组(字母序) → 每条链路一个带样式的两点折线
// 说明: 描述块字段缺失时填占位符，不中断构建
// ==========================================

use crate::config::ExportConfig;
use crate::domain::layer::{Layer, LineFeature};
use crate::domain::link::{LinkRecord, ValidatedLink};
use crate::domain::types::AltitudeMode;
use crate::engine::color::ColorAssigner;
use quick_xml::escape::escape;
use std::collections::BTreeMap;
use std::fmt::Write;

// ==========================================
// 描述块列名（源表固定列）
// ==========================================
pub mod columns {
    pub const OPERATOR: &str = "Operator";
    pub const VALID_UNTIL: &str = "Data_ważn_pozw/dec";
    pub const FREQUENCY: &str = "f [GHz]";
    pub const THROUGHPUT: &str = "Przepływność [Mb/s]";
    pub const CHANNEL_WIDTH: &str = "Szer_kan [MHz]";
    pub const MODULATION: &str = "Rodz_modu-lacji";
    pub const EIRP: &str = "EIRP [dBm]";
    pub const TX_TOWN: &str = "Miejscowość Tx";
    pub const TX_STREET: &str = "Ulica Tx";
    pub const TX_SITE_HEIGHT: &str = "H_t_Tx [m npm]";
    pub const TX_ANT_VENDOR: &str = "Prod_ant_Tx";
    pub const TX_ANT_TYPE: &str = "Typ_ant_Tx";
    pub const TX_ANT_GAIN: &str = "Zysk_ant_Tx [dBi]";
    pub const TX_ANT_HEIGHT: &str = "H_ant_Tx [m npt]";
    pub const RX_TOWN: &str = "Miejscowość Rx";
    pub const RX_STREET: &str = "Ulica Rx";
    pub const RX_SITE_HEIGHT: &str = "H_t_Rx [m npm]";
    pub const RX_ANT_VENDOR: &str = "Prod_ant_Rx";
    pub const RX_ANT_TYPE: &str = "Typ_ant_Rx";
    pub const RX_ANT_GAIN: &str = "Zysk_ant_Rx [dBi]";
    pub const RX_ANT_HEIGHT: &str = "H_ant_Rx [m npt]";
}

const NO_DATA: &str = "Brak danych";
const UNKNOWN: &str = "?";

const DIV_STYLE: &str = "font-family: Arial, sans-serif; font-size: 14px; max-width: 500px;";
const H3_STYLE: &str = "background-color: #e8e8e8; padding: 5px;";
const TABLE_OPEN: &str = r#"<table border="1" cellpadding="5" style="border-collapse: collapse; width: 100%;">"#;
const LABEL_STYLE: &str = "background-color: #f2f2f2;";

/// 描述表中的一行: (标签, 列名, 占位符, 单位)
struct Field {
    label: &'static str,
    column: &'static str,
    fallback: &'static str,
    unit: &'static str,
}

const fn field(
    label: &'static str,
    column: &'static str,
    fallback: &'static str,
    unit: &'static str,
) -> Field {
    Field {
        label,
        column,
        fallback,
        unit,
    }
}

const RADIO_FIELDS: [Field; 5] = [
    field("Częstotliwość", columns::FREQUENCY, UNKNOWN, " GHz"),
    field("Przepływność", columns::THROUGHPUT, UNKNOWN, " Mb/s"),
    field("Szerokość kanału", columns::CHANNEL_WIDTH, UNKNOWN, " MHz"),
    field("Modulacja", columns::MODULATION, NO_DATA, ""),
    field("Moc EIRP", columns::EIRP, UNKNOWN, " dBm"),
];

/// 收发端位置与天线信息
struct Endpoint {
    heading: &'static str,
    town: &'static str,
    street: &'static str,
    fields: [Field; 5],
}

const ENDPOINTS: [Endpoint; 2] = [
    Endpoint {
        heading: "Nadajnik (Tx)",
        town: columns::TX_TOWN,
        street: columns::TX_STREET,
        fields: [
            field("Wys. n.p.m.", columns::TX_SITE_HEIGHT, UNKNOWN, " m"),
            field("Producent anteny", columns::TX_ANT_VENDOR, NO_DATA, ""),
            field("Typ anteny", columns::TX_ANT_TYPE, NO_DATA, ""),
            field("Zysk anteny", columns::TX_ANT_GAIN, UNKNOWN, " dBi"),
            field("Wys. zawieszenia", columns::TX_ANT_HEIGHT, UNKNOWN, " m"),
        ],
    },
    Endpoint {
        heading: "Odbiornik (Rx)",
        town: columns::RX_TOWN,
        street: columns::RX_STREET,
        fields: [
            field("Wys. n.p.m.", columns::RX_SITE_HEIGHT, UNKNOWN, " m"),
            field("Producent anteny", columns::RX_ANT_VENDOR, NO_DATA, ""),
            field("Typ anteny", columns::RX_ANT_TYPE, NO_DATA, ""),
            field("Zysk anteny", columns::RX_ANT_GAIN, UNKNOWN, " dBi"),
            field("Wys. zawieszenia", columns::RX_ANT_HEIGHT, UNKNOWN, " m"),
        ],
    },
];

// ==========================================
// FeatureBuilder
// ==========================================
pub struct FeatureBuilder<'a> {
    config: &'a ExportConfig,
}

impl<'a> FeatureBuilder<'a> {
    pub fn new(config: &'a ExportConfig) -> Self {
        Self { config }
    }

    /// 分组并构建图层
    ///
    /// BTreeMap 按名称字节序排序；组内保持输入顺序
    pub fn build_layers(&self, links: &[ValidatedLink]) -> Vec<Layer> {
        let mut groups: BTreeMap<&str, Vec<&ValidatedLink>> = BTreeMap::new();
        for link in links {
            let label = link
                .record
                .operator
                .as_deref()
                .unwrap_or(self.config.missing_operator_label.as_str());
            groups.entry(label).or_default().push(link);
        }

        let assigner = ColorAssigner::new(&self.config.operator_colors);
        groups
            .into_iter()
            .map(|(label, members)| {
                let color = assigner.assign(label);
                let features = members
                    .into_iter()
                    .map(|link| LineFeature {
                        name: feature_name(&link.record),
                        points: [link.tx, link.rx],
                        color: color.clone(),
                        width: self.config.line_width,
                        altitude_mode: AltitudeMode::ClampToGround,
                        description: self.describe(&link.record, label),
                    })
                    .collect();

                Layer {
                    name: label.to_string(),
                    color,
                    features,
                }
            })
            .collect()
    }

    /// 生成 HTML 描述块
    pub fn describe(&self, record: &LinkRecord, operator_label: &str) -> String {
        let mut html = String::with_capacity(4096);
        let _ = write!(html, r#"<div style="{}">"#, DIV_STYLE);

        // 基本信息
        section_heading(&mut html, "Informacje Główne", false);
        html.push_str(TABLE_OPEN);
        label_row(&mut html, "Operator", operator_label, true);
        label_row(
            &mut html,
            "Nr pozwolenia",
            record.link_id.as_deref().unwrap_or(NO_DATA),
            false,
        );
        label_row(
            &mut html,
            "Data ważności",
            record.attribute(columns::VALID_UNTIL).unwrap_or(NO_DATA),
            false,
        );
        html.push_str("</table>");

        // 无线参数
        section_heading(&mut html, "Parametry Radiowe", true);
        html.push_str(TABLE_OPEN);
        for (idx, f) in RADIO_FIELDS.iter().enumerate() {
            field_row(&mut html, record, f, idx == 0);
        }
        html.push_str("</table>");

        // 位置与设备
        section_heading(&mut html, "Lokalizacja i Sprzęt", true);
        html.push_str(TABLE_OPEN);
        for (idx, endpoint) in ENDPOINTS.iter().enumerate() {
            let _ = write!(
                html,
                r#"<tr style="background-color: #d0d0d0;"><th colspan="2">{}</th></tr>"#,
                endpoint.heading
            );
            let location = format!(
                "{}, {}",
                record.attribute(endpoint.town).unwrap_or(""),
                record.attribute(endpoint.street).unwrap_or("")
            );
            label_row(&mut html, "Lokalizacja", &location, idx == 0);
            for f in &endpoint.fields {
                field_row(&mut html, record, f, false);
            }
        }
        html.push_str("</table>");

        html.push_str("</div>");
        html
    }
}

/// 要素名称: "<Tx 城镇> - <Rx 城镇>"
fn feature_name(record: &LinkRecord) -> String {
    format!(
        "{} - {}",
        record.attribute(columns::TX_TOWN).unwrap_or(""),
        record.attribute(columns::RX_TOWN).unwrap_or("")
    )
}

fn section_heading(html: &mut String, title: &str, spaced: bool) {
    let margin = if spaced { " margin-top: 15px;" } else { "" };
    let _ = write!(html, r#"<h3 style="{}{}">{}</h3>"#, H3_STYLE, margin, title);
}

fn label_row(html: &mut String, label: &str, value: &str, first: bool) {
    let width = if first { " width: 40%;" } else { "" };
    let _ = write!(
        html,
        r#"<tr><td style="{}{}"><b>{}</b></td><td>{}</td></tr>"#,
        LABEL_STYLE,
        width,
        label,
        escape(value)
    );
}

fn field_row(html: &mut String, record: &LinkRecord, f: &Field, first: bool) {
    let value = format!(
        "{}{}",
        record.attribute(f.column).unwrap_or(f.fallback),
        f.unit
    );
    label_row(html, f.label, &value, first);
}
