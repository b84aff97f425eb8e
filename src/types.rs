//! 核心类型定义 - 记录、键与查找结果

use core::fmt;
use std::fmt::{Debug, Display};

use num_bigint::BigUint;

use crate::error::TableError;

/// 记录键 - 任意精度非负整数
///
/// 键可能超过 64 位（例如超长身份编号），所有运算都在
/// [`BigUint`] 上进行，禁止在取模之前收窄到机器字长。
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey(BigUint);

impl RecordKey {
    /// 从十进制文本解析键
    ///
    /// 输入必须是非空的 ASCII 数字串。符号、空白、小数点等
    /// 一律在此边界立即拒绝，不做任何截断或取整。
    pub fn parse(text: &str) -> Result<Self, TableError> {
        if text.is_empty() {
            return Err(TableError::invalid_key(text, "空键"));
        }
        if let Some(bad) = text.bytes().find(|b| !b.is_ascii_digit()) {
            let reason = match bad {
                b'+' | b'-' => "不允许符号",
                b'.' | b',' => "不允许小数",
                _ => "含非数字字符",
            };
            return Err(TableError::invalid_key(text, reason));
        }
        let value = BigUint::parse_bytes(text.as_bytes(), 10)
            .ok_or_else(|| TableError::invalid_key(text, "十进制解析失败"))?;
        Ok(Self(value))
    }

    /// 获取内部大整数
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// 十进制位数（无前导零，"0" 记 1 位）
    pub fn digit_count(&self) -> usize {
        self.0.to_str_radix(10).len()
    }
}

impl From<u64> for RecordKey {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for RecordKey {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for RecordKey {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordKey({})", self.0)
    }
}

/// 表中存储的记录 - 键加不透明标签
///
/// 标签对表完全不透明，不参与哈希也不参与相等判断。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: RecordKey,
    pub label: String,
}

impl Record {
    /// 创建新记录
    pub fn new(key: RecordKey, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }
}

/// 查找结果 - 命中代价或未命中
///
/// 命中代价从 1 开始计数（目标在桶首即为 1），因此未命中
/// 必须是独立变体而不是 0 或 -1 之类的哨兵值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupResult {
    /// 命中，携带本次扫描的探查次数
    Found(usize),
    /// 桶内扫描完毕仍未命中
    NotFound,
}

impl LookupResult {
    /// 是否命中
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// 命中时的探查次数
    pub fn probes(&self) -> Option<usize> {
        match self {
            Self::Found(n) => Some(*n),
            Self::NotFound => None,
        }
    }
}

/// 操作类型 - 统计层的分类标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// 插入操作
    Insert,
    /// 查找操作
    Lookup,
}

impl OperationType {
    /// 全部操作类型，供统计导出遍历
    pub const ALL: [OperationType; 2] = [OperationType::Insert, OperationType::Lookup];

    /// 判断是否为读操作
    pub fn is_read(&self) -> bool {
        matches!(self, OperationType::Lookup)
    }

    /// 判断是否为写操作
    pub fn is_write(&self) -> bool {
        matches!(self, OperationType::Insert)
    }

    /// 转换为字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Insert => "insert",
            OperationType::Lookup => "lookup",
        }
    }
}
