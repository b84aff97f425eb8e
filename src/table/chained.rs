//! 链式哈希表核心实现
//!
//! 桶数组在构造时定容，永不扩缩。插入把记录追加到
//! `键 mod 桶数` 对应的桶尾，查找沿桶做线性扫描并统计
//! 探查次数，作为本结构的核心度量。

use std::{fmt, sync::Arc};

use crate::{
    error::TableError,
    hash::ModuloHasher,
    stats::recorder::StatsRecorder,
    table::{bucket::Bucket, DEFAULT_CONFIG},
    types::{LookupResult, OperationType, Record, RecordKey},
};

/// 哈希表配置
#[derive(Clone, Debug)]
pub struct ChainedTableConfig {
    /// 桶数量，构造时固定，之后任何操作都不会调整
    pub bucket_count: usize,
}

impl Default for ChainedTableConfig {
    fn default() -> Self {
        Self {
            bucket_count: super::DEFAULT_BUCKET_COUNT,
        }
    }
}

impl ChainedTableConfig {
    /// 指定桶数构造配置
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        Self { bucket_count }
    }

    /// 校验配置合法性
    pub fn validate(&self) -> Result<(), TableError> {
        if self.bucket_count == 0 {
            return Err(TableError::InvalidConfig {
                reason: "bucket_count 必须至少为 1".into(),
            });
        }
        Ok(())
    }
}

/// 哈希表统计信息
#[derive(Debug, Default, Clone)]
pub struct TableStats {
    pub len: usize,
    pub bucket_count: usize,
    pub load_factor: f64,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
    pub insert_count: u64,
    pub lookup_count: u64,
    pub hit_count: u64,
    pub miss_count: u64,
}

/// 链式哈希表
///
/// 单线程构建与查询。构建阶段与查询阶段只是使用惯例，
/// 任何调用顺序都合法，查询后继续插入不会破坏不变量。
pub struct ChainedHashTable {
    buckets: Vec<Bucket>,
    hasher: ModuloHasher,
    config: ChainedTableConfig,
    stats_recorder: Arc<dyn StatsRecorder>,
    len: usize,
}

impl fmt::Debug for ChainedHashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChainedHashTable(buckets: {}, len: {})",
            self.buckets.len(),
            self.len
        )
    }
}

impl ChainedHashTable {
    /// 创建新哈希表
    pub fn new(
        config: ChainedTableConfig,
        stats_recorder: Arc<dyn StatsRecorder>,
    ) -> Result<Self, TableError> {
        config.validate()?;
        let hasher = ModuloHasher::new(config.bucket_count)?;
        let buckets = vec![Bucket::new(); config.bucket_count];
        log_debug!("created table with {} buckets", config.bucket_count);

        Ok(Self {
            buckets,
            hasher,
            config,
            stats_recorder,
            len: 0,
        })
    }

    /// 使用全局默认配置和全局统计记录器创建
    pub fn with_defaults() -> Self {
        let recorder = crate::stats::StatsRecorderFactory::create_default();
        Self::new(DEFAULT_CONFIG.clone(), recorder).expect("默认配置必然合法")
    }

    /// 由并行装载器的分片直接组装成表
    pub(crate) fn from_parts(
        buckets: Vec<Bucket>,
        hasher: ModuloHasher,
        config: ChainedTableConfig,
        stats_recorder: Arc<dyn StatsRecorder>,
        len: usize,
    ) -> Self {
        debug_assert_eq!(buckets.len(), config.bucket_count);
        Self {
            buckets,
            hasher,
            config,
            stats_recorder,
            len,
        }
    }

    /// 插入记录
    ///
    /// 追加到 `键 mod 桶数` 所在桶的链尾。重复键合法，表满
    /// 不存在，插入永不失败。均摊 O(1)。
    pub fn insert(&mut self, record: Record) {
        let index = self.hasher.bucket_index(&record.key);
        self.buckets[index].push(record);
        self.len += 1;
        self.stats_recorder.record_operation(OperationType::Insert);
    }

    /// 按键查找，返回探查代价
    ///
    /// 命中返回 1 起始的探查次数，未命中返回
    /// [`LookupResult::NotFound`]。只读操作，可任意重复。
    pub fn lookup(&self, key: &RecordKey) -> LookupResult {
        let index = self.hasher.bucket_index(key);
        let result = self.buckets[index].scan(key);
        // log_debug!("lookup key={} bucket={} result={:?}", key, index, result);
        self.stats_recorder.record_lookup(&result);
        result
    }

    /// 负载因子 = 记录总数 / 桶数
    ///
    /// 由增量计数直接算出，O(1)，不遍历桶数组。
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.config.bucket_count as f64
    }

    /// 记录总数
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 桶数量
    pub fn bucket_count(&self) -> usize {
        self.config.bucket_count
    }

    /// 查看指定桶的记录，索引越界返回 None
    pub fn bucket(&self, index: usize) -> Option<&[Record]> {
        self.buckets.get(index).map(|b| b.records())
    }

    /// 遍历全部记录，桶序加桶内插入序
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.buckets.iter().flat_map(|b| b.iter())
    }

    /// 汇总统计信息
    pub fn stats(&self) -> TableStats {
        let mut occupied_buckets = 0;
        let mut longest_chain = 0;
        for bucket in &self.buckets {
            if !bucket.is_empty() {
                occupied_buckets += 1;
            }
            longest_chain = longest_chain.max(bucket.len());
        }

        let ops = self.stats_recorder.operation_stats();
        TableStats {
            len: self.len,
            bucket_count: self.config.bucket_count,
            load_factor: self.load_factor(),
            occupied_buckets,
            longest_chain,
            insert_count: ops.insert_count,
            lookup_count: ops.lookup_count,
            hit_count: ops.hit_count,
            miss_count: ops.miss_count,
        }
    }

    /// 导出Prometheus格式指标
    pub fn export_prometheus(&self) -> String {
        self.stats_recorder.export_prometheus()
    }
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}
