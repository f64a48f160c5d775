// ==========================================
// 欧盟家电市场分析 - 源库打开与 Schema 契约校验
// ==========================================
// 职责: 以只读方式打开源库,查询前确认期望的表与列存在
// 说明: 缺文件/缺表/缺列直接返回错误,不做降级
// ==========================================

use crate::db::{open_readonly_connection, table_exists, table_has_column};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::Connection;
use std::path::Path;

/// 打开只读源库
///
/// # 返回
/// - Ok(Connection): 只读连接
/// - Err(StoreNotFound): 文件不存在
/// - Err: 连接失败
pub fn open_store(db_path: &Path) -> RepositoryResult<Connection> {
    if !db_path.is_file() {
        return Err(RepositoryError::StoreNotFound(db_path.display().to_string()));
    }
    let conn = open_readonly_connection(db_path)?;
    tracing::debug!(path = %db_path.display(), "源库已打开 (只读)");
    Ok(conn)
}

/// 期望存在的表及其列
pub struct TableContract {
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

/// 逐表逐列校验 schema 契约
///
/// # 参数
/// - conn: 数据库连接
/// - store: 数据源标识 (仅用于错误信息)
/// - contracts: 期望的表与列
pub fn verify_contracts(
    conn: &Connection,
    store: &str,
    contracts: &[TableContract],
) -> RepositoryResult<()> {
    for contract in contracts {
        if !table_exists(conn, contract.table)? {
            return Err(RepositoryError::MissingTable {
                store: store.to_string(),
                table: contract.table.to_string(),
            });
        }
        for column in contract.columns {
            if !table_has_column(conn, contract.table, column)? {
                return Err(RepositoryError::MissingColumn {
                    table: contract.table.to_string(),
                    column: column.to_string(),
                });
            }
        }
    }
    Ok(())
}
