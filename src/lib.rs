//! 链式哈希表库 - 以查找代价为核心度量
//!
//! 固定桶数的拉链法哈希表，键是任意精度非负整数（如13位身份编号），
//! 查找返回从 1 起计的探查次数。附带人员数据生成器与检索代价对比
//! 报告，用于复现线性查找与哈希查找的开销差异。
//!
//! ## 主要特性
//! - 桶定位在大整数域内取模，键超过 64 位也不丢精度
//! - 未命中是独立结果变体，与探查代价永不混淆
//! - 负载因子增量维护，查询 O(1)
//! - 分桶加锁的并行批量装载
//! - 操作统计与Prometheus格式导出
//!
//! ## 快速开始
//!
//! ```rust
//! use chained_hashtable::*;
//!
//! let mut table = ChainedHashTable::with_defaults();
//! let key = RecordKey::parse("1940214338186")?;
//! table.insert(Record::new(key.clone(), "Andrei Tudor Ionescu"));
//!
//! match table.lookup(&key) {
//!     LookupResult::Found(probes) => println!("found after {probes} probes"),
//!     LookupResult::NotFound => println!("missing"),
//! }
//! println!("load factor: {:.2}", table.load_factor());
//! # Ok::<(), TableError>(())
//! ```

#![warn(clippy::all)]

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}

// 核心模块导出
pub mod error;
pub mod hash;
pub mod person;
pub mod report;
pub mod stats;
pub mod table;
pub mod types;

// 公共接口导出
pub use crate::{
    error::TableError,
    hash::{bucket_index_for, ModuloHasher},
    person::{CnpComponents, PersonGenerator},
    report::{ReportWriter, SearchOutcome, SearchStatistics, RESULT_FILE, STATISTICS_FILE},
    stats::{
        export_prometheus, operation_snapshot, record_lookup, record_operation, reset_stats,
        OperationStatsSnapshot, StatsRecorder, StatsRecorderFactory,
    },
    table::{
        Bucket, ChainedHashTable, ChainedTableConfig, ParallelLoader, TableStats,
        DEFAULT_BUCKET_COUNT, DEFAULT_CONFIG,
    },
    types::{LookupResult, OperationType, Record, RecordKey},
};

// 便捷功能函数

/// 批量插入
///
/// 逐条追加，返回插入条数。插入永不失败，计数只是方便
/// 调用方核对。
pub fn bulk_insert(
    table: &mut ChainedHashTable,
    records: impl IntoIterator<Item = Record>,
) -> usize {
    let mut count = 0;
    for record in records {
        table.insert(record);
        count += 1;
    }
    count
}

/// 批量查找
///
/// 结果顺序与键顺序一一对应。
pub fn bulk_lookup<'a>(
    table: &ChainedHashTable,
    keys: impl IntoIterator<Item = &'a RecordKey>,
) -> Vec<LookupResult> {
    keys.into_iter().map(|key| table.lookup(key)).collect()
}
