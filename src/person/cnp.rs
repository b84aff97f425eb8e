//! CNP生成 - 13位身份编号的字段构成与随机生成

use rand::Rng;

use crate::types::RecordKey;

/// CNP字段 - 位布局 s aa ll zz jj nnn c，补零后恰好13位
///
/// 首位 s 取 1..=8，编号因此不含前导零，数值与数字串一一对应。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CnpComponents {
    /// 性别与世纪位，1..=8，奇数为男性
    pub sex_digit: u8,
    /// 出生年后两位，0..=99
    pub year: u8,
    /// 月，1..=12
    pub month: u8,
    /// 日，1..=31
    pub day: u8,
    /// 县编号，1..=48
    pub county: u8,
    /// 顺序号，1..=999
    pub sequence: u16,
    /// 校验位，0..=9
    pub control: u8,
}

impl CnpComponents {
    /// 随机生成一组字段
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            sex_digit: rng.gen_range(1..=8),
            year: rng.gen_range(0..=99),
            month: rng.gen_range(1..=12),
            day: rng.gen_range(1..=31),
            county: rng.gen_range(1..=48),
            sequence: rng.gen_range(1..=999),
            control: rng.gen_range(0..=9),
        }
    }

    /// 首位为奇数即男性
    pub fn is_male(&self) -> bool {
        self.sex_digit % 2 == 1
    }

    /// 13位数字串
    pub fn digits(&self) -> String {
        format!(
            "{}{:02}{:02}{:02}{:02}{:03}{}",
            self.sex_digit, self.year, self.month, self.day, self.county, self.sequence,
            self.control
        )
    }

    /// 组装成记录键
    ///
    /// 直接按位权拼数，13位最大值 8999999999999 在 u64 之内，
    /// 不经过文本解析。
    pub fn to_key(&self) -> RecordKey {
        let value = u64::from(self.sex_digit) * 1_000_000_000_000
            + u64::from(self.year) * 10_000_000_000
            + u64::from(self.month) * 100_000_000
            + u64::from(self.day) * 1_000_000
            + u64::from(self.county) * 10_000
            + u64::from(self.sequence) * 10
            + u64::from(self.control);
        RecordKey::from(value)
    }
}
