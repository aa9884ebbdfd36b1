// ==========================================
// 无线链路 KMZ 导出 - KML 文档生成
// ==========================================
// 结构: kml > Document(name) > Folder(图层) > Placemark(要素)
//       Placemark > name / description / Style>LineStyle / LineString
// ==========================================

use crate::domain::layer::{Layer, LineFeature};
use crate::export::error::ExportResult;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

pub struct KmlWriter;

impl KmlWriter {
    /// 生成完整 KML 文档字节
    pub fn render(document_name: &str, layers: &[Layer]) -> ExportResult<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::write_to(&mut buffer, document_name, layers)?;
        Ok(buffer)
    }

    /// 写入任意 Write 目标
    pub fn write_to<W: Write>(inner: W, document_name: &str, layers: &[Layer]) -> ExportResult<()> {
        let mut writer = Writer::new_with_indent(inner, b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut kml = BytesStart::new("kml");
        kml.push_attribute(("xmlns", KML_NAMESPACE));
        writer.write_event(Event::Start(kml))?;
        writer.write_event(Event::Start(BytesStart::new("Document")))?;
        text_element(&mut writer, "name", document_name)?;

        for layer in layers {
            write_folder(&mut writer, layer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("Document")))?;
        writer.write_event(Event::End(BytesEnd::new("kml")))?;
        Ok(())
    }
}

fn write_folder<W: Write>(writer: &mut Writer<W>, layer: &Layer) -> ExportResult<()> {
    writer.write_event(Event::Start(BytesStart::new("Folder")))?;
    text_element(writer, "name", &layer.name)?;
    for feature in &layer.features {
        write_placemark(writer, feature)?;
    }
    writer.write_event(Event::End(BytesEnd::new("Folder")))?;
    Ok(())
}

fn write_placemark<W: Write>(writer: &mut Writer<W>, feature: &LineFeature) -> ExportResult<()> {
    writer.write_event(Event::Start(BytesStart::new("Placemark")))?;
    text_element(writer, "name", &feature.name)?;
    // HTML 作为转义文本写入，由查看器反转义后渲染
    text_element(writer, "description", &feature.description)?;

    writer.write_event(Event::Start(BytesStart::new("Style")))?;
    writer.write_event(Event::Start(BytesStart::new("LineStyle")))?;
    text_element(writer, "color", feature.color.as_str())?;
    text_element(writer, "width", &feature.width.to_string())?;
    writer.write_event(Event::End(BytesEnd::new("LineStyle")))?;
    writer.write_event(Event::End(BytesEnd::new("Style")))?;

    let coordinates = feature
        .points
        .iter()
        .map(|p| p.to_kml_tuple())
        .collect::<Vec<_>>()
        .join(" ");

    writer.write_event(Event::Start(BytesStart::new("LineString")))?;
    text_element(writer, "altitudeMode", &feature.altitude_mode.to_string())?;
    text_element(writer, "coordinates", &coordinates)?;
    writer.write_event(Event::End(BytesEnd::new("LineString")))?;

    writer.write_event(Event::End(BytesEnd::new("Placemark")))?;
    Ok(())
}

fn text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> ExportResult<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
