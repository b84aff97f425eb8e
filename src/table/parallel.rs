//! 并行批量装载 - 分桶加锁的多线程建表
//!
//! 同步粒度是单个桶：插入只锁目标桶，桶与桶之间互不阻塞，
//! 不存在全表大锁。装载完成后冻结成普通的单线程表。

use std::sync::Arc;

use parking_lot::Mutex;
use rayon::prelude::*;

use crate::{
    error::TableError,
    hash::ModuloHasher,
    stats::recorder::StatsRecorder,
    table::chained::{ChainedHashTable, ChainedTableConfig},
    table::bucket::Bucket,
    types::Record,
};

/// 并行装载器
///
/// 与单线程建表相比，每个桶最终收到的记录集合完全相同，
/// 桶内顺序是并发追加的某个串行化。两条记录若由同一线程
/// 先后插入同一桶，先插入者仍排在前面。
pub struct ParallelLoader {
    shards: Vec<Mutex<Vec<Record>>>,
    hasher: ModuloHasher,
    config: ChainedTableConfig,
}

impl ParallelLoader {
    /// 创建新装载器
    pub fn new(config: ChainedTableConfig) -> Result<Self, TableError> {
        config.validate()?;
        let hasher = ModuloHasher::new(config.bucket_count)?;
        let shards = (0..config.bucket_count)
            .map(|_| Mutex::new(Vec::new()))
            .collect();
        Ok(Self {
            shards,
            hasher,
            config,
        })
    }

    /// 插入一条记录，可从任意线程并发调用
    pub fn insert(&self, record: Record) {
        let index = self.hasher.bucket_index(&record.key);
        self.shards[index].lock().push(record);
    }

    /// 用 rayon 并行插入一整批记录
    pub fn extend_par(&self, records: Vec<Record>) {
        records
            .into_par_iter()
            .for_each(|record| self.insert(record));
    }

    /// 已暂存的记录总数
    pub fn staged_len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    /// 冻结成哈希表
    ///
    /// 消耗装载器，拆掉所有锁，之后的查询走普通只读路径。
    pub fn into_table(self, stats_recorder: Arc<dyn StatsRecorder>) -> ChainedHashTable {
        let Self {
            shards,
            hasher,
            config,
        } = self;

        let mut len = 0;
        let buckets: Vec<Bucket> = shards
            .into_iter()
            .map(|shard| {
                let entries = shard.into_inner();
                len += entries.len();
                Bucket::from(entries)
            })
            .collect();
        log_debug!(
            "parallel load frozen: {} records in {} buckets",
            len,
            buckets.len()
        );
        ChainedHashTable::from_parts(buckets, hasher, config, stats_recorder, len)
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatsRecorderFactory;
    use crate::types::RecordKey;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const SEED: u64 = 42;

    fn generate_records(count: usize) -> Vec<Record> {
        let mut rng = StdRng::seed_from_u64(SEED);
        (0..count)
            .map(|i| {
                let key: u64 = rng.gen_range(0..1_000_000);
                Record::new(RecordKey::from(key), format!("record-{i}"))
            })
            .collect()
    }

    fn keys_per_bucket(table: &ChainedHashTable) -> Vec<Vec<String>> {
        (0..table.bucket_count())
            .map(|i| {
                let mut keys: Vec<String> = table
                    .bucket(i)
                    .unwrap()
                    .iter()
                    .map(|r| r.key.to_string())
                    .collect();
                keys.sort();
                keys
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential_placement() {
        let records = generate_records(5_000);
        let config = ChainedTableConfig::with_bucket_count(97);

        let mut sequential =
            ChainedHashTable::new(config.clone(), StatsRecorderFactory::create_disabled())
                .unwrap();
        for record in records.clone() {
            sequential.insert(record);
        }

        let loader = ParallelLoader::new(config).unwrap();
        loader.extend_par(records);
        let parallel = loader.into_table(StatsRecorderFactory::create_disabled());

        assert_eq!(parallel.len(), sequential.len());
        assert_eq!(
            keys_per_bucket(&parallel),
            keys_per_bucket(&sequential),
            "并行装载的桶内容与单线程不一致"
        );
    }

    #[test]
    fn test_inserts_from_plain_threads() {
        let loader = Arc::new(ParallelLoader::new(ChainedTableConfig::with_bucket_count(13)).unwrap());
        let mut handles = Vec::new();
        for t in 0..4u64 {
            let loader = Arc::clone(&loader);
            handles.push(std::thread::spawn(move || {
                for i in 0..250u64 {
                    loader.insert(Record::new(RecordKey::from(t * 1000 + i), "x"));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let loader = Arc::try_unwrap(loader).ok().unwrap();
        assert_eq!(loader.staged_len(), 1000);
        let table = loader.into_table(StatsRecorderFactory::create_disabled());
        assert_eq!(table.len(), 1000);
    }

    #[test]
    fn test_same_thread_order_survives() {
        // 单线程经由装载器插入同一桶，顺序必须保持
        let loader = ParallelLoader::new(ChainedTableConfig::with_bucket_count(5)).unwrap();
        for key in [5u64, 10, 15] {
            loader.insert(Record::new(RecordKey::from(key), "x"));
        }
        let table = loader.into_table(StatsRecorderFactory::create_disabled());
        assert_eq!(
            table.lookup(&RecordKey::from(15u64)),
            crate::types::LookupResult::Found(3)
        );
    }
}
