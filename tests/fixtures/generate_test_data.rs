// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成链路测试数据集 CSV 文件
// 输出: tests/fixtures/datasets/*.csv
// ==========================================

use chrono::{Duration, Local};
use csv::Writer;
use std::error::Error;
use std::fs::{self, File};

// CSV 表头（源表列名）
const CSV_HEADER: &[&str] = &[
    "Nr_pozw/dec",
    "Operator",
    "Data_ważn_pozw/dec",
    "f [GHz]",
    "Przepływność [Mb/s]",
    "Szer_kan [MHz]",
    "Rodz_modu-lacji",
    "EIRP [dBm]",
    "Miejscowość Tx",
    "Ulica Tx",
    "Sz_geo_Tx",
    "Dl_geo_Tx",
    "H_t_Tx [m npm]",
    "Prod_ant_Tx",
    "Typ_ant_Tx",
    "Zysk_ant_Tx [dBi]",
    "H_ant_Tx [m npt]",
    "Miejscowość Rx",
    "Ulica Rx",
    "Sz_geo_Rx",
    "Dl_geo_Rx",
    "H_t_Rx [m npm]",
    "Prod_ant_Rx",
    "Typ_ant_Rx",
    "Zysk_ant_Rx [dBi]",
    "H_ant_Rx [m npt]",
];

const OPERATORS: &[&str] = &[
    "P4 Sp. z o.o.",
    "T-Mobile Polska S.A.",
    "ORANGE POLSKA S.A.",
    "Towerlink Poland Sp. z o.o.",
    "Polkomtel Sp. z o.o.",
];

const TOWNS: &[&str] = &["Warszawa", "Radom", "Łódź", "Kielce", "Lublin", "Płock"];

/// DMS 文本，形如 52N13'34''
fn dms(degrees: u32, hemisphere: char, minutes: u32, seconds: f64) -> String {
    format!("{:02}{}{:02}'{:.1}''", degrees, hemisphere, minutes, seconds)
}

// 生成正常链路记录
fn generate_normal_record(index: usize) -> Vec<String> {
    let valid_until = Local::now().date_naive() + Duration::days(365 + (index % 700) as i64);
    let tx_town = TOWNS[index % TOWNS.len()];
    let rx_town = TOWNS[(index + 1) % TOWNS.len()];

    vec![
        format!("{:05}/PtP/{}", index + 1, 2020 + index % 5),
        OPERATORS[index % OPERATORS.len()].to_string(),
        valid_until.format("%Y-%m-%d").to_string(),
        ["18", "23", "38", "80"][index % 4].to_string(),
        format!("{}", 100 * (1 + index % 10)),
        ["28", "56", "112"][index % 3].to_string(),
        ["QPSK", "QAM64", "QAM256", "QAM1024"][index % 4].to_string(),
        format!("{}", 40 + index % 20),
        tx_town.to_string(),
        format!("ul. Testowa {}", index + 1),
        dms(50 + (index % 4) as u32, 'N', (index * 7 % 60) as u32, (index % 60) as f64),
        dms(19 + (index % 4) as u32, 'E', (index * 11 % 60) as u32, 12.5),
        format!("{}", 100 + index % 150),
        ["Ericsson", "Huawei", "Nokia"][index % 3].to_string(),
        format!("ANT-{}", index % 9),
        format!("{:.1}", 38.0 + (index % 8) as f64 * 0.5),
        format!("{}", 20 + index % 40),
        rx_town.to_string(),
        String::new(),
        dms(50 + ((index + 1) % 4) as u32, 'N', (index * 5 % 60) as u32, 3.0),
        dms(19 + ((index + 1) % 4) as u32, 'E', (index * 13 % 60) as u32, 44.0),
        format!("{}", 90 + index % 150),
        ["Ericsson", "Huawei", "Nokia"][(index + 1) % 3].to_string(),
        format!("ANT-{}", (index + 4) % 9),
        format!("{:.1}", 38.0 + (index % 6) as f64 * 0.5),
        format!("{}", 25 + index % 40),
    ]
}

fn write_dataset(path: &str, rows: &[Vec<String>]) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    println!("✓ {} ({} 行)", path, rows.len());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");
    fs::create_dir_all("tests/fixtures/datasets")?;

    // 1. 正常数据 (100条)
    let normal: Vec<Vec<String>> = (0..100).map(generate_normal_record).collect();
    write_dataset("tests/fixtures/datasets/01_normal_data.csv", &normal)?;

    // 2. 重复许可证号（每 10 行复制一次前一行的编号）
    let duplicates: Vec<Vec<String>> = (0..50)
        .map(|i| {
            let mut row = generate_normal_record(i);
            if i % 10 == 9 {
                row[0] = generate_normal_record(i - 1)[0].clone();
            }
            row
        })
        .collect();
    write_dataset("tests/fixtures/datasets/02_duplicate_ids.csv", &duplicates)?;

    // 3. 坐标不可解析 / 缺失
    let bad_coordinates: Vec<Vec<String>> = (0..30)
        .map(|i| {
            let mut row = generate_normal_record(i);
            match i % 3 {
                0 => row[10] = "52.2297".to_string(), // 十进制度，不支持
                1 => row[20] = String::new(),
                _ => {}
            }
            row
        })
        .collect();
    write_dataset("tests/fixtures/datasets/03_bad_coordinates.csv", &bad_coordinates)?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}
