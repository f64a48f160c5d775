// ==========================================
// 欧盟家电市场分析 - 报告层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 报告层错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("图表序列化失败: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("报告写入失败 (path={path}): {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result 类型别名
pub type ReportResult<T> = Result<T, ReportError>;
