//! # 表写出
//!
//! 把累积的行表拼接成单表并序列化为 CSV 文件。
//! 带表头行，无行索引列。
//!
//! ## 依赖关系
//! - 被 `commands/harvest.rs` 调用
//! - 使用 `table/mod.rs` 的行类型
//! - 使用 `csv` 库写入 CSV 文件

use std::path::{Path, PathBuf};

use crate::error::{HarvestError, Result};
use crate::table::{LabelRow, SpectrumRow};

/// 拼接并写出两张表，任一累积器为空则整体失败且不产生文件
pub fn write_tables(
    label_tables: &[Vec<LabelRow>],
    spectrum_tables: &[Vec<SpectrumRow>],
    out_prefix: &str,
) -> Result<(PathBuf, PathBuf)> {
    // 两个累积器都要先检查，失败的运行不留下半成品文件
    if label_tables.is_empty() {
        return Err(HarvestError::EmptyTable {
            table: "label".to_string(),
        });
    }
    if spectrum_tables.is_empty() {
        return Err(HarvestError::EmptyTable {
            table: "spectrum".to_string(),
        });
    }

    let labels_path = PathBuf::from(format!("{}_labels.csv", out_prefix));
    let spectra_path = PathBuf::from(format!("{}_spectra.csv", out_prefix));

    write_label_tables(label_tables, &labels_path)?;
    write_spectrum_tables(spectrum_tables, &spectra_path)?;

    Ok((labels_path, spectra_path))
}

/// 写出标签表
pub fn write_label_tables(tables: &[Vec<LabelRow>], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(|e| HarvestError::CsvError(e))?;

    wtr.write_record(&["symbol", "size", "element", "id"])
        .map_err(|e| HarvestError::CsvError(e))?;

    for row in tables.iter().flatten() {
        wtr.write_record(&[
            row.symbol.clone(),
            row.size.to_string(),
            row.element.clone(),
            row.id.clone(),
        ])
        .map_err(|e| HarvestError::CsvError(e))?;
    }

    wtr.flush().map_err(|e| HarvestError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 写出光谱表
pub fn write_spectrum_tables(tables: &[Vec<SpectrumRow>], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(|e| HarvestError::CsvError(e))?;

    wtr.write_record(&["element", "x", "y", "id"])
        .map_err(|e| HarvestError::CsvError(e))?;

    for row in tables.iter().flatten() {
        wtr.write_record(&[
            row.element.clone(),
            row.x.to_string(),
            row.y.to_string(),
            row.id.clone(),
        ])
        .map_err(|e| HarvestError::CsvError(e))?;
    }

    wtr.flush().map_err(|e| HarvestError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn label_row(id: &str) -> LabelRow {
        LabelRow {
            symbol: "O:6".to_string(),
            size: 1.0,
            element: "Fe".to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_empty_label_accumulator_is_fatal() {
        let spectra = vec![vec![SpectrumRow {
            element: "Fe".to_string(),
            x: 7100.0,
            y: 0.5,
            id: "mp-1".to_string(),
        }]];
        let err = write_tables(&[], &spectra, "out").unwrap_err();
        assert!(err.to_string().contains("label"));
    }

    #[test]
    fn test_empty_spectrum_accumulator_is_fatal() {
        let labels = vec![vec![label_row("mp-1")]];
        let err = write_tables(&labels, &[], "out").unwrap_err();
        assert!(err.to_string().contains("spectrum"));
    }

    #[test]
    fn test_written_csv_has_header_and_concatenated_rows() {
        let dir = std::env::temp_dir().join("mpharvest_write_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("labels.csv");

        let tables = vec![vec![label_row("mp-1")], vec![label_row("mp-2")]];
        write_label_tables(&tables, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "symbol,size,element,id");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "O:6,1,Fe,mp-1");
        assert_eq!(lines[2], "O:6,1,Fe,mp-2");

        fs::remove_file(&path).ok();
    }
}
