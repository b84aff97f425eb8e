//! 统一错误处理 - 键校验、配置校验与报告输出错误

/// 链式哈希表可能发生的错误
///
/// 查找未命中不是错误，由 [`crate::types::LookupResult`] 表达。
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("无效键文本: {text:?} ({reason})")]
    InvalidKey { text: String, reason: &'static str },

    #[error("无效配置: {reason}")]
    InvalidConfig { reason: String },

    #[error("报告写入失败: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    /// 构造键校验错误，截断过长的输入避免日志爆炸
    pub(crate) fn invalid_key(text: &str, reason: &'static str) -> Self {
        const MAX_ECHO: usize = 40;
        let mut echo = String::with_capacity(text.len().min(MAX_ECHO));
        for (i, ch) in text.chars().enumerate() {
            if i >= MAX_ECHO {
                echo.push_str("...");
                break;
            }
            echo.push(ch);
        }
        Self::InvalidKey { text: echo, reason }
    }

    /// 获取错误恢复建议
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidKey { .. } => Some("检查键是否为非空的十进制数字串"),
            Self::InvalidConfig { .. } => Some("检查配置参数"),
            Self::Io(_) => Some("检查输出目录权限与磁盘空间"),
        }
    }

    /// 判断错误是否可恢复
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidConfig { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_truncates_long_input() {
        let long = "9".repeat(200);
        let err = TableError::invalid_key(&long, "太长");
        match err {
            TableError::InvalidKey { text, .. } => {
                assert!(text.len() < 60, "错误消息应截断长输入");
                assert!(text.ends_with("..."));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_recovery_suggestions_exist() {
        let err = TableError::InvalidConfig {
            reason: "bucket_count 为 0".into(),
        };
        assert!(err.recovery_suggestion().is_some());
        assert!(!err.is_recoverable());
    }
}
