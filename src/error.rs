// ==========================================
// 欧盟家电市场分析 - 统一错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约束: 数据源错误致命,向上传播至进程退出
// ==========================================

use crate::report::error::ReportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 流水线错误类型
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("数据访问失败: {0}")]
    Repository(#[from] RepositoryError),

    #[error("报告生成失败: {0}")]
    Report(#[from] ReportError),
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Report(ReportError::SerializationError(err))
    }
}

/// Result 类型别名
pub type AnalysisResult<T> = Result<T, AnalysisError>;
