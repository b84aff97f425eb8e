//! 取模定位 - 键对桶数取余得到桶索引

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::{error::TableError, types::RecordKey};

/// 取模定位器
///
/// 桶索引 = 键 mod 桶数。求余在大整数域内完成，键不会先被
/// 收窄成机器字长再取模，宽键的定位因此保持精确。
#[derive(Debug, Clone)]
pub struct ModuloHasher {
    bucket_count: usize,
    modulus: BigUint,
}

impl ModuloHasher {
    /// 创建新定位器
    pub fn new(bucket_count: usize) -> Result<Self, TableError> {
        if bucket_count == 0 {
            return Err(TableError::InvalidConfig {
                reason: "bucket_count 必须至少为 1".into(),
            });
        }
        Ok(Self {
            bucket_count,
            modulus: BigUint::from(bucket_count),
        })
    }

    /// 桶数
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// 计算键所属的桶索引，结果落在 [0, bucket_count)
    pub fn bucket_index(&self, key: &RecordKey) -> usize {
        let remainder = key.as_biguint() % &self.modulus;
        // 余数严格小于桶数，桶数本身是 usize
        remainder.to_usize().expect("余数必然在 usize 范围内")
    }
}
