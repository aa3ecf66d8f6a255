//! # harvest 命令实现 — 摄取循环
//!
//! 对标准输入的每个材料 id 依次执行：结构下载、逐元素光谱下载、
//! 条件配位环境标注，把成功记录的行累积起来，最后一次性写出
//! 标签表和光谱表。单条记录的失败只产生诊断，不中止整个运行。
//!
//! ## 失败策略
//! - 结构下载失败：整条记录作废，跳到下一个 id
//! - 任一元素的光谱下载/校验失败：丢弃该 id 已缓冲的光谱行
//!   （按 id 全有或全无），并跳过标注
//! - 标注失败：不产生标签行，已追加的光谱行不受影响
//! - 唯一的致命错误在写出阶段：任一累积器为空
//!
//! ## 依赖关系
//! - 使用 `cli/harvest.rs` 定义的参数
//! - 使用 `mp/` 抓取、`chemenv/` 标注、`table/` 投影与写出
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use std::io::{self, BufRead};

use indicatif::ProgressBar;

use crate::chemenv;
use crate::cli::harvest::HarvestArgs;
use crate::error::{HarvestError, Result};
use crate::mp::{MaterialsDatabase, MpClient};
use crate::table::{self, LabelRow, SpectrumRow};
use crate::utils::{output, progress};

/// 执行 harvest 命令
pub fn execute(args: HarvestArgs) -> Result<()> {
    output::print_header("Harvesting Structures and XAS Spectra");

    let client = MpClient::new(&args.api_key, args.timeout)?;

    let stdin = io::stdin();
    let material_ids = read_material_ids(stdin.lock())?;
    output::print_info(&format!(
        "Read {} material ids from stdin",
        material_ids.len()
    ));

    let pb = progress::create_progress_bar(material_ids.len() as u64, "Downloading");
    let (label_tables, spectrum_tables) =
        ingest(&client, &material_ids, args.dedup_elements, &pb);
    pb.finish_and_clear();

    let (labels_path, spectra_path) =
        table::write::write_tables(&label_tables, &spectrum_tables, &args.out_prefix)?;

    output::print_done(&format!("Wrote label table to '{}'", labels_path.display()));
    output::print_done(&format!(
        "Wrote spectrum table to '{}'",
        spectra_path.display()
    ));

    Ok(())
}

/// 从输入流逐行读取材料 id，仅剥除首尾空白，空行不过滤
pub(crate) fn read_material_ids<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| HarvestError::InputReadError { source: e })?;
        ids.push(line.trim().to_string());
    }
    Ok(ids)
}

/// 摄取循环：逐 id 处理并填充两个累积器
pub(crate) fn ingest<D: MaterialsDatabase>(
    db: &D,
    material_ids: &[String],
    dedup_elements: bool,
    pb: &ProgressBar,
) -> (Vec<Vec<LabelRow>>, Vec<Vec<SpectrumRow>>) {
    let mut label_tables: Vec<Vec<LabelRow>> = Vec::new();
    let mut spectrum_tables: Vec<Vec<SpectrumRow>> = Vec::new();

    for material_id in material_ids {
        harvest_one(
            db,
            material_id,
            dedup_elements,
            pb,
            &mut label_tables,
            &mut spectrum_tables,
        );
        pb.inc(1);
    }

    (label_tables, spectrum_tables)
}

/// 处理单个材料 id
fn harvest_one<D: MaterialsDatabase>(
    db: &D,
    material_id: &str,
    dedup_elements: bool,
    pb: &ProgressBar,
    label_tables: &mut Vec<Vec<LabelRow>>,
    spectrum_tables: &mut Vec<Vec<SpectrumRow>>,
) {
    // 结构下载失败时整条记录作废，决不退回上一条的旧结构
    let mut structure = match db.structure(material_id) {
        Ok(structure) => structure,
        Err(e) => {
            pb.suspend(|| {
                output::print_warning(&format!(
                    "Could not retrieve a structure for {} from database: {}",
                    material_id, e
                ));
            });
            return;
        }
    };

    let mut elements = structure.species_symbols();
    if dedup_elements {
        dedup_preserving_order(&mut elements);
    }

    // 光谱按 id 全有或全无：任一元素失败则丢弃已缓冲的行
    let mut spectrum_buffer: Vec<SpectrumRow> = Vec::new();
    let mut spectra_ok = true;
    for element in &elements {
        let record = match db.xas_record(material_id, element) {
            Ok(record) => record,
            Err(e) => {
                pb.suspend(|| {
                    output::print_warning(&format!(
                        "Could not retrieve an XAS spectrum for {} element {} from database: {}",
                        material_id, element, e
                    ));
                });
                spectra_ok = false;
                break;
            }
        };

        let spectrum = match record.into_spectrum() {
            Ok(spectrum) => spectrum,
            Err(e) => {
                pb.suspend(|| {
                    output::print_warning(&format!(
                        "Spectrum for {} element {} is invalid: {}",
                        material_id, element, e
                    ));
                });
                spectra_ok = false;
                break;
            }
        };

        spectrum_buffer.extend(table::spectrum_rows(&spectrum, material_id));
    }

    if !spectra_ok {
        return;
    }
    spectrum_tables.push(spectrum_buffer);

    // 配位环境标注耗时，只对光谱齐全的记录执行
    if !chemenv::annotate_structure(&mut structure) {
        pb.suspend(|| {
            output::print_warning(&format!(
                "Could not calculate coordination environments for {}",
                material_id
            ));
        });
        return;
    }

    match table::structure_rows(&structure, material_id) {
        Ok(rows) => label_tables.push(rows),
        Err(e) => {
            pb.suspend(|| {
                output::print_warning(&format!(
                    "Could not project labels for {}: {}",
                    material_id, e
                ));
            });
        }
    }
}

/// 去重并保持首次出现顺序
fn dedup_preserving_order(elements: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    elements.retain(|element| seen.insert(element.clone()));
}
