// ==========================================
// 欧盟家电市场分析 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约束: 数据源不可达 / 表缺失 / 列缺失 均视为契约违反,不可静默吞掉
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 连接错误 =====
    #[error("数据源不存在: {0}")]
    StoreNotFound(String),

    #[error("数据库连接失败: {0}")]
    DatabaseConnectionError(String),

    // ===== Schema 契约错误 =====
    #[error("数据表缺失: store={store}, table={table}")]
    MissingTable { store: String, table: String },

    #[error("数据列缺失: table={table}, column={column}")]
    MissingColumn { table: String, column: String },

    // ===== 查询错误 =====
    #[error("数据库查询失败: {0}")]
    DatabaseQueryError(String),

    #[error("字段值错误 (field={field}): {message}")]
    FieldValueError { field: String, message: String },
}

// 实现 From<rusqlite::Error>
impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, msg)
                if e.code == rusqlite::ErrorCode::CannotOpen =>
            {
                RepositoryError::DatabaseConnectionError(
                    msg.unwrap_or_else(|| e.to_string()),
                )
            }
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                RepositoryError::DatabaseQueryError(msg)
            }
            rusqlite::Error::InvalidColumnType(idx, name, ty) => {
                RepositoryError::FieldValueError {
                    field: name,
                    message: format!("列 {} 类型不符: {}", idx, ty),
                }
            }
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
