// src/stats/recorder.rs
//! 统计记录器接口 - 定义统一统计API

use std::sync::Arc;

use crate::{
    stats::operation::{
        AtomicOperationStats, DisabledOperationRecorder, OperationRecorder,
        OperationStatsSnapshot,
    },
    types::{LookupResult, OperationType},
};

/// 统计记录器特征
pub trait StatsRecorder: Send + Sync {
    /// 记录操作计数
    fn record_operation(&self, op_type: OperationType);

    /// 记录一次查找及其探查代价
    fn record_lookup(&self, result: &LookupResult);

    /// 获取操作统计接口
    fn operation_recorder(&self) -> &dyn OperationRecorder;

    /// 获取操作统计快照
    fn operation_stats(&self) -> OperationStatsSnapshot;

    /// 重置所有统计
    fn reset(&self);

    /// 导出Prometheus格式指标
    fn export_prometheus(&self) -> String;
}

/// 全局统计记录器实现
#[derive(Default)]
pub struct GlobalStatsRecorder {
    operation: AtomicOperationStats,
}

impl GlobalStatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsRecorder for GlobalStatsRecorder {
    fn record_operation(&self, op_type: OperationType) {
        self.operation.record(op_type);
    }

    fn record_lookup(&self, result: &LookupResult) {
        self.operation.record(OperationType::Lookup);
        self.operation
            .record_probes(result.probes().map(|n| n as u64));
    }

    fn operation_recorder(&self) -> &dyn OperationRecorder {
        &self.operation
    }

    fn operation_stats(&self) -> OperationStatsSnapshot {
        self.operation.snapshot()
    }

    fn reset(&self) {
        self.operation.reset();
    }

    fn export_prometheus(&self) -> String {
        self.operation.export_prometheus()
    }
}

/// 禁用统计的记录器
pub struct DisabledStatsRecorder;

impl StatsRecorder for DisabledStatsRecorder {
    fn record_operation(&self, _op_type: OperationType) {}
    fn record_lookup(&self, _result: &LookupResult) {}
    fn operation_recorder(&self) -> &dyn OperationRecorder {
        &DisabledOperationRecorder
    }
    fn operation_stats(&self) -> OperationStatsSnapshot {
        OperationStatsSnapshot::default()
    }
    fn reset(&self) {}
    fn export_prometheus(&self) -> String {
        String::new()
    }
}

/// 自定义统计记录器
struct CustomStatsRecorder {
    operation: Box<dyn OperationRecorder>,
}

impl StatsRecorder for CustomStatsRecorder {
    fn record_operation(&self, op_type: OperationType) {
        self.operation.record(op_type);
    }

    fn record_lookup(&self, result: &LookupResult) {
        self.operation.record(OperationType::Lookup);
        self.operation
            .record_probes(result.probes().map(|n| n as u64));
    }

    fn operation_recorder(&self) -> &dyn OperationRecorder {
        self.operation.as_ref()
    }

    fn operation_stats(&self) -> OperationStatsSnapshot {
        self.operation.snapshot()
    }

    fn reset(&self) {
        self.operation.reset();
    }

    fn export_prometheus(&self) -> String {
        self.operation.export_prometheus()
    }
}

/// 统计记录器工厂
pub struct StatsRecorderFactory;

impl StatsRecorderFactory {
    /// 创建默认记录器
    pub fn create_default() -> Arc<dyn StatsRecorder> {
        Arc::new(GlobalStatsRecorder::new())
    }

    /// 创建禁用统计的记录器
    pub fn create_disabled() -> Arc<dyn StatsRecorder> {
        Arc::new(DisabledStatsRecorder)
    }

    /// 创建带自定义操作统计的记录器
    pub fn create_custom(operation: impl OperationRecorder + 'static) -> Arc<dyn StatsRecorder> {
        Arc::new(CustomStatsRecorder {
            operation: Box::new(operation),
        })
    }
}
