// ==========================================
// 欧盟家电市场分析 - 贸易统计仓储
// ==========================================
// 数据源: data/database.db (规范化 schema)
// 查询: records ↔ trade_types ↔ products ↔ product_groups 四表连接
//       并按 (报告国, 年份, 产品组, 流向, 贸易类型) 预汇总
// ==========================================

use crate::domain::trade::TradeRecord;
use crate::domain::types::{FlowDirection, TradeScope};
use crate::repository::error::RepositoryResult;
use crate::repository::store::{open_store, verify_contracts, TableContract};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::path::Path;

const TRADE_CONTRACTS: &[TableContract] = &[
    TableContract {
        table: "records",
        columns: &[
            "reporter_id",
            "period",
            "flow_id",
            "trade_type_id",
            "product_id",
            "value_in_eur",
        ],
    },
    TableContract {
        table: "trade_types",
        columns: &["id", "name"],
    },
    TableContract {
        table: "products",
        columns: &["id", "product_group_id"],
    },
    TableContract {
        table: "product_groups",
        columns: &["id", "name"],
    },
];

// ==========================================
// TradeRepository - 贸易统计仓储
// ==========================================
pub struct TradeRepository {
    conn: Connection,
}

impl TradeRepository {
    /// 打开贸易统计库并校验 schema
    pub fn open(db_path: &Path) -> RepositoryResult<Self> {
        let conn = open_store(db_path)?;
        Self::from_connection(conn)
    }

    /// 从已有连接创建仓储实例 (同样校验 schema)
    pub fn from_connection(conn: Connection) -> RepositoryResult<Self> {
        verify_contracts(&conn, "comext", TRADE_CONTRACTS)?;
        Ok(Self { conn })
    }

    /// 读取预汇总的贸易记录
    ///
    /// # 参数
    /// - min_year: 起始年份 (含)
    ///
    /// # 返回
    /// - Ok(Vec<TradeRecord>): 每个 (报告国, 年份, 产品组, 流向, 贸易类型) 一行
    /// - Err: 数据库错误
    ///
    /// # 说明
    /// - 未知 flow_id 的行丢弃
    /// - 汇总金额为 NULL 的组丢弃
    /// - 两个贸易类型标签可能落入同一范围,这里不合并 (由引擎层求和)
    pub fn load_trade(&self, min_year: i32) -> RepositoryResult<Vec<TradeRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT
                CAST(r.reporter_id AS TEXT) AS reporter,
                CAST(r.period AS INTEGER) AS year,
                pg.name AS group_name,
                CAST(r.flow_id AS INTEGER) AS flow_id,
                t.name AS trade_type,
                SUM(r.value_in_eur) AS t_val
            FROM records r
            JOIN trade_types t ON r.trade_type_id = t.id
            JOIN products p ON r.product_id = p.id
            JOIN product_groups pg ON p.product_group_id = pg.id
            WHERE CAST(r.period AS INTEGER) >= ?1
            GROUP BY reporter, year, group_name, flow_id, trade_type
            ORDER BY reporter, year, group_name, flow_id, trade_type
            "#,
        )?;

        let raw_rows = stmt
            .query_map(params![min_year], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i32>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, Option<f64>>(5)?,
                ))
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        let total = raw_rows.len();
        let records: Vec<TradeRecord> = raw_rows
            .into_iter()
            .filter_map(|(region, year, product_group, flow_id, trade_type, amount)| {
                let flow = FlowDirection::from_flow_id(flow_id)?;
                let amount = amount?;
                Some(TradeRecord {
                    region,
                    year,
                    product_group,
                    flow,
                    scope: TradeScope::from_trade_type_label(&trade_type),
                    amount,
                })
            })
            .collect();

        if records.len() < total {
            tracing::debug!(
                dropped = total - records.len(),
                "贸易记录: 未知流向或空金额的分组已丢弃"
            );
        }
        tracing::info!(rows = records.len(), min_year, "贸易统计读取完成");
        Ok(records)
    }
}
