//! 人员生成模块 - 批量制造带CNP键与姓名标签的记录

pub mod cnp;
pub mod names;

pub use cnp::CnpComponents;
pub use names::{FEMALE_FIRST_NAMES, LAST_NAMES, MALE_FIRST_NAMES};

use rand::{rngs::StdRng, SeedableRng};

use crate::types::Record;

/// 人员生成器
///
/// 键是随机CNP，标签是按首位性别抽取的"名 名 姓"全名。
/// 不保证键唯一，重复键对表而言是合法输入。
pub struct PersonGenerator {
    rng: StdRng,
}

impl PersonGenerator {
    /// 熵源播种，每次运行产生不同人群
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// 固定种子，测试与基准用
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// 生成下一条人员记录
    pub fn next_person(&mut self) -> Record {
        let components = CnpComponents::random(&mut self.rng);
        let label = names::full_name(&mut self.rng, components.is_male());
        Record::new(components.to_key(), label)
    }

    /// 批量生成
    pub fn generate(&mut self, count: usize) -> Vec<Record> {
        (0..count).map(|_| self.next_person()).collect()
    }
}

impl Default for PersonGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_record_shape() {
        let mut generator = PersonGenerator::with_seed(42);
        for _ in 0..200 {
            let record = generator.next_person();
            assert_eq!(record.key.digit_count(), 13);
            assert_eq!(record.label.split(' ').count(), 3);
        }
    }

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let a: Vec<Record> = PersonGenerator::with_seed(42).generate(50);
        let b: Vec<Record> = PersonGenerator::with_seed(42).generate(50);
        assert_eq!(a, b, "相同种子应产生相同序列");
    }

    #[test]
    fn test_gender_matches_name_pool() {
        let mut generator = PersonGenerator::with_seed(77);
        for _ in 0..200 {
            let record = generator.next_person();
            let first_digit = record.key.to_string().as_bytes()[0] - b'0';
            let first_name = record.label.split(' ').next().unwrap().to_string();
            if first_digit % 2 == 1 {
                assert!(MALE_FIRST_NAMES.contains(&first_name.as_str()));
            } else {
                assert!(FEMALE_FIRST_NAMES.contains(&first_name.as_str()));
            }
        }
    }

    #[test]
    fn test_generate_count() {
        let records = PersonGenerator::with_seed(1).generate(1234);
        assert_eq!(records.len(), 1234);
    }
}
