// src/table/bucket.rs
//! 桶实现 - 保序追加的记录链与探查计数扫描

use std::fmt;

use crate::types::{LookupResult, Record, RecordKey};

/// 单个桶 - 落入同一索引的记录按插入顺序排列
///
/// 桶只追加不删除，重复键合法，扫描在第一个匹配处停止。
#[derive(Clone, Default)]
pub struct Bucket {
    entries: Vec<Record>,
}

impl fmt::Debug for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bucket(entries: {})", self.entries.len())
    }
}

impl Bucket {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 追加记录到链尾
    pub fn push(&mut self, record: Record) {
        self.entries.push(record);
    }

    /// 按键扫描桶，返回 1 起始的探查次数或未命中
    ///
    /// 链首即命中记 1 次探查。重复键返回最早插入者的代价。
    pub fn scan(&self, key: &RecordKey) -> LookupResult {
        for (offset, record) in self.entries.iter().enumerate() {
            if &record.key == key {
                return LookupResult::Found(offset + 1);
            }
        }
        LookupResult::NotFound
    }

    /// 桶内记录数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按插入顺序访问桶内记录
    pub fn records(&self) -> &[Record] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter()
    }
}

impl From<Vec<Record>> for Bucket {
    fn from(entries: Vec<Record>) -> Self {
        Self { entries }
    }
}
