// src/stats/operation.rs
//! 操作统计 - 跟踪插入、查找与探查代价

use crate::types::OperationType;
use std::sync::atomic::{AtomicU64, Ordering};

/// 操作统计接口
pub trait OperationRecorder: Send + Sync {
    /// 记录一次操作
    fn record(&self, op_type: OperationType);

    /// 记录一次查找的探查结果
    ///
    /// 命中传入 1 起始的探查次数，未命中传 `None`。
    fn record_probes(&self, probes: Option<u64>);

    /// 获取操作统计快照
    fn snapshot(&self) -> OperationStatsSnapshot;

    /// 重置统计
    fn reset(&self);

    /// 导出Prometheus格式指标
    fn export_prometheus(&self) -> String;
}

/// 操作统计快照
#[derive(Debug, Default, Clone)]
pub struct OperationStatsSnapshot {
    pub insert_count: u64,
    pub lookup_count: u64,
    pub hit_count: u64,
    pub miss_count: u64,
    /// 命中查找的探查次数总和
    pub probe_total: u64,
    /// 单次命中的最大探查次数
    pub probe_max: u64,
}

impl OperationStatsSnapshot {
    /// 命中查找的平均探查次数，无命中时为 0
    pub fn mean_probes(&self) -> f64 {
        if self.hit_count == 0 {
            0.0
        } else {
            self.probe_total as f64 / self.hit_count as f64
        }
    }

    /// 命中率，无查找时为 0
    pub fn hit_rate(&self) -> f64 {
        if self.lookup_count == 0 {
            0.0
        } else {
            self.hit_count as f64 / self.lookup_count as f64
        }
    }
}

/// 原子操作统计
#[derive(Debug, Default)]
pub struct AtomicOperationStats {
    insert_count: AtomicU64,
    lookup_count: AtomicU64,
    hit_count: AtomicU64,
    miss_count: AtomicU64,
    probe_total: AtomicU64,
    probe_max: AtomicU64,
}

impl AtomicOperationStats {
    /// 创建新统计
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperationRecorder for AtomicOperationStats {
    fn record(&self, op_type: OperationType) {
        match op_type {
            OperationType::Insert => self.insert_count.fetch_add(1, Ordering::Relaxed),
            OperationType::Lookup => self.lookup_count.fetch_add(1, Ordering::Relaxed),
        };
    }

    fn record_probes(&self, probes: Option<u64>) {
        match probes {
            Some(n) => {
                self.hit_count.fetch_add(1, Ordering::Relaxed);
                self.probe_total.fetch_add(n, Ordering::Relaxed);
                self.probe_max.fetch_max(n, Ordering::Relaxed);
            }
            None => {
                self.miss_count.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn snapshot(&self) -> OperationStatsSnapshot {
        OperationStatsSnapshot {
            insert_count: self.insert_count.load(Ordering::Relaxed),
            lookup_count: self.lookup_count.load(Ordering::Relaxed),
            hit_count: self.hit_count.load(Ordering::Relaxed),
            miss_count: self.miss_count.load(Ordering::Relaxed),
            probe_total: self.probe_total.load(Ordering::Relaxed),
            probe_max: self.probe_max.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        self.insert_count.store(0, Ordering::Relaxed);
        self.lookup_count.store(0, Ordering::Relaxed);
        self.hit_count.store(0, Ordering::Relaxed);
        self.miss_count.store(0, Ordering::Relaxed);
        self.probe_total.store(0, Ordering::Relaxed);
        self.probe_max.store(0, Ordering::Relaxed);
    }

    fn export_prometheus(&self) -> String {
        let mut output = String::new();

        for op in OperationType::ALL {
            let count = match op {
                OperationType::Insert => self.insert_count.load(Ordering::Relaxed),
                OperationType::Lookup => self.lookup_count.load(Ordering::Relaxed),
            };

            output.push_str(&format!(
                "# HELP chained_operation_{}_count Total {} operations\n",
                op.as_str(),
                op.as_str()
            ));
            output.push_str(&format!(
                "# TYPE chained_operation_{}_count counter\n",
                op.as_str()
            ));
            output.push_str(&format!(
                "chained_operation_{}_count {}\n",
                op.as_str(),
                count
            ));
        }

        // 命中、未命中与探查代价
        output.push_str("# HELP chained_lookup_hit_count Total lookup hits\n");
        output.push_str("# TYPE chained_lookup_hit_count counter\n");
        output.push_str(&format!(
            "chained_lookup_hit_count {}\n",
            self.hit_count.load(Ordering::Relaxed)
        ));

        output.push_str("# HELP chained_lookup_miss_count Total lookup misses\n");
        output.push_str("# TYPE chained_lookup_miss_count counter\n");
        output.push_str(&format!(
            "chained_lookup_miss_count {}\n",
            self.miss_count.load(Ordering::Relaxed)
        ));

        output.push_str("# HELP chained_lookup_probe_total Total probes over all hits\n");
        output.push_str("# TYPE chained_lookup_probe_total counter\n");
        output.push_str(&format!(
            "chained_lookup_probe_total {}\n",
            self.probe_total.load(Ordering::Relaxed)
        ));

        output.push_str("# HELP chained_lookup_probe_max Max probes of a single hit\n");
        output.push_str("# TYPE chained_lookup_probe_max gauge\n");
        output.push_str(&format!(
            "chained_lookup_probe_max {}\n",
            self.probe_max.load(Ordering::Relaxed)
        ));

        output
    }
}

/// 禁用操作统计实现
#[derive(Default)]
pub struct DisabledOperationRecorder;

impl OperationRecorder for DisabledOperationRecorder {
    fn record(&self, _op_type: OperationType) {}
    fn record_probes(&self, _probes: Option<u64>) {}
    fn snapshot(&self) -> OperationStatsSnapshot {
        OperationStatsSnapshot::default()
    }
    fn reset(&self) {}
    fn export_prometheus(&self) -> String {
        String::new()
    }
}
