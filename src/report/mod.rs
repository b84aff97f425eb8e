//! 报告模块 - 查找代价对比的落盘输出
//!
//! 输出两个文本文件：逐条查找结果与汇总统计。未命中在
//! 报告里沿用 -1 表示，这只是输出格式的约定，表内部的
//! 未命中始终是独立的枚举变体。

use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    error::TableError,
    types::{LookupResult, Record},
};

/// 逐条结果文件名
pub const RESULT_FILE: &str = "result.txt";
/// 汇总统计文件名
pub const STATISTICS_FILE: &str = "statistics.txt";

/// 单次抽样查找的结果
///
/// `original_position` 是该记录在生成序列里的下标，相当于
/// 在未索引的线性结构中找到它要走的步数，作为对比基线。
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub record: Record,
    pub original_position: usize,
    pub result: LookupResult,
}

impl SearchOutcome {
    /// 报告用的带符号代价，未命中记 -1
    pub fn iterations_signed(&self) -> i64 {
        match self.result {
            LookupResult::Found(n) => n as i64,
            LookupResult::NotFound => -1,
        }
    }

    /// 逐条结果行
    pub fn to_result_line(&self) -> String {
        format!(
            "{}, {}\t - original position: {} / hash table: {} iterations.",
            self.record.key,
            self.record.label,
            self.original_position,
            self.iterations_signed()
        )
    }
}

/// 抽样查找的汇总统计
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatistics {
    pub search_count: usize,
    pub table_iterations_total: i64,
    pub baseline_iterations_total: i64,
    pub table_iterations_avg: f64,
    pub baseline_iterations_avg: f64,
    pub improvement_percent: f64,
}

impl SearchStatistics {
    /// 由逐条结果汇总
    ///
    /// 基线总步数是抽中下标之和，表侧总步数把未命中按 -1
    /// 计入。空输入产生全零统计。
    pub fn from_outcomes(outcomes: &[SearchOutcome]) -> Self {
        let search_count = outcomes.len();
        let table_total: i64 = outcomes.iter().map(|o| o.iterations_signed()).sum();
        let baseline_total: i64 = outcomes.iter().map(|o| o.original_position as i64).sum();

        let (table_avg, baseline_avg) = if search_count == 0 {
            (0.0, 0.0)
        } else {
            (
                table_total as f64 / search_count as f64,
                baseline_total as f64 / search_count as f64,
            )
        };
        let improvement = if baseline_total == 0 {
            0.0
        } else {
            100.0 * (baseline_total - table_total) as f64 / baseline_total as f64
        };

        Self {
            search_count,
            table_iterations_total: table_total,
            baseline_iterations_total: baseline_total,
            table_iterations_avg: table_avg,
            baseline_iterations_avg: baseline_avg,
            improvement_percent: improvement,
        }
    }

    /// 汇总文件的六行正文
    pub fn to_report_lines(&self) -> Vec<String> {
        vec![
            format!("Search Statistics for {} persons:", self.search_count),
            format!("Total hash table iterations: {}", self.table_iterations_total),
            format!(
                "Total original structure iterations: {}",
                self.baseline_iterations_total
            ),
            format!(
                "Average hash table iterations: {:.2}",
                self.table_iterations_avg
            ),
            format!(
                "Average original structure iterations: {:.2}",
                self.baseline_iterations_avg
            ),
            format!(
                "Improvement: {:.2}% fewer iterations",
                self.improvement_percent
            ),
        ]
    }
}

/// 报告写入器
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    /// 指定输出目录创建
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// 写逐条结果文件，返回写入路径
    pub fn write_results(&self, outcomes: &[SearchOutcome]) -> Result<PathBuf, TableError> {
        let path = self.dir.join(RESULT_FILE);
        let body: Vec<String> = outcomes.iter().map(|o| o.to_result_line()).collect();
        fs::write(&path, body.join("\n"))?;
        log_info!("results written to {}", path.display());
        Ok(path)
    }

    /// 写汇总统计文件，返回写入路径
    pub fn write_statistics(&self, stats: &SearchStatistics) -> Result<PathBuf, TableError> {
        let path = self.dir.join(STATISTICS_FILE);
        fs::write(&path, stats.to_report_lines().join("\n"))?;
        log_info!("statistics written to {}", path.display());
        Ok(path)
    }
}
