//! 哈希模块 - 统一管理桶定位功能

pub mod modulo;

pub use modulo::ModuloHasher;

use crate::{error::TableError, types::RecordKey};

/// 哈希工具函数 - 一次性计算桶索引
///
/// 反复定位请持有 [`ModuloHasher`]，避免每次重建模数。
pub fn bucket_index_for(key: &RecordKey, bucket_count: usize) -> Result<usize, TableError> {
    Ok(ModuloHasher::new(bucket_count)?.bucket_index(key))
}
