// ==========================================
// 欧盟家电市场分析 - SQLite 连接初始化
// ==========================================
// 目标:
// - 两个数据源统一以只读方式打开,分析过程不写源库
// - 统一 busy_timeout,避免源库被其他进程占用时直接失败
// - 提供表/列存在性检查,供仓储层做 schema 契约校验
// ==========================================

use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::Path;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置 SQLite 连接的统一 PRAGMA
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 以只读方式打开 SQLite 连接并应用统一配置
///
/// 说明：只读模式下文件不存在会直接报错（不会创建空库）
pub fn open_readonly_connection(db_path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 检查表是否存在
pub fn table_exists(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    let found: Option<i32> = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?1 LIMIT 1",
            rusqlite::params![table],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// 检查表是否存在指定列
///
/// # 说明
/// - 使用 `pragma_table_info` 查询表结构
/// - 表名来自内部常量,转义后内联;列名参数化
pub fn table_has_column(conn: &Connection, table: &str, col: &str) -> rusqlite::Result<bool> {
    if table.trim().is_empty() || col.trim().is_empty() {
        return Ok(false);
    }
    let table_escaped = table.replace('\'', "''");
    let sql = format!(
        "SELECT COUNT(*) FROM pragma_table_info('{}') WHERE name = ?1",
        table_escaped
    );
    let count: i32 = conn.query_row(&sql, rusqlite::params![col], |row| row.get(0))?;
    Ok(count > 0)
}
