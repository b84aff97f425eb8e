//! 哈希表核心模块 - 实现链式哈希表及其组件

pub mod bucket;
pub mod chained;
pub mod parallel;

pub use bucket::Bucket;
pub use chained::{ChainedHashTable, ChainedTableConfig, TableStats};
pub use parallel::ParallelLoader;

use once_cell::sync::Lazy;

/// 默认桶数 - 质数，模运算下键分布更均匀
pub const DEFAULT_BUCKET_COUNT: usize = 997;

/// 全局默认配置
pub static DEFAULT_CONFIG: Lazy<ChainedTableConfig> = Lazy::new(ChainedTableConfig::default);
