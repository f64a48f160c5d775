// ==========================================
// 欧盟家电市场分析 - 生产统计仓储
// ==========================================
// 数据源: eurostat_prodcom.db / home_appliances_clean
// 红线: Repository 不含业务逻辑 (品类映射在引擎层)
// ==========================================

use crate::domain::production::ProductionRecord;
use crate::domain::types::IndicatorKind;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::store::{open_store, verify_contracts, TableContract};
use rusqlite::{Connection, Result as SqliteResult};
use std::path::Path;

/// 生产统计表名
pub const PRODUCTION_TABLE: &str = "home_appliances_clean";

/// 指标列名 (源表列名中含反斜杠)
pub const INDICATOR_COLUMN: &str = r"indicators\TIME_PERIOD";

const PRODUCTION_CONTRACTS: &[TableContract] = &[TableContract {
    table: PRODUCTION_TABLE,
    columns: &["reporter", "year", "product", INDICATOR_COLUMN, "value"],
}];

// ==========================================
// ProductionRepository - 生产统计仓储
// ==========================================

/// 生产统计仓储
/// 职责: 读取 home_appliances_clean 表,返回扁平记录
pub struct ProductionRepository {
    conn: Connection,
}

impl ProductionRepository {
    /// 打开生产统计库并校验 schema
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    ///
    /// # 返回
    /// - Ok(ProductionRepository): 仓储实例
    /// - Err: 文件不存在 / 连接失败 / 表或列缺失
    pub fn open(db_path: &Path) -> RepositoryResult<Self> {
        let conn = open_store(db_path)?;
        Self::from_connection(conn)
    }

    /// 从已有连接创建仓储实例 (同样校验 schema)
    pub fn from_connection(conn: Connection) -> RepositoryResult<Self> {
        verify_contracts(&conn, "prodcom", PRODUCTION_CONTRACTS)?;
        Ok(Self { conn })
    }

    /// 读取生产统计记录
    ///
    /// # 参数
    /// - min_year: 起始年份 (含)
    /// - indicators: 需要的指标类型 (依存度分析只取产值)
    ///
    /// # 返回
    /// - Ok(Vec<ProductionRecord>): 按 (报告国, 年份, 产品) 排序
    /// - Err: 数据库错误
    ///
    /// # 说明
    /// - value / reporter / product 为 NULL 的行直接过滤
    /// - year 在源表中可能为文本,统一 CAST 为整数比较
    pub fn load_production(
        &self,
        min_year: i32,
        indicators: &[IndicatorKind],
    ) -> RepositoryResult<Vec<ProductionRecord>> {
        if indicators.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = indicators.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
        let sql = format!(
            r#"
            SELECT
                CAST(reporter AS TEXT),
                CAST(year AS INTEGER),
                CAST(product AS TEXT),
                "{indicator}",
                CAST(value AS REAL)
            FROM {table}
            WHERE "{indicator}" IN ({placeholders})
              AND CAST(year AS INTEGER) >= ?
              AND value IS NOT NULL
              AND reporter IS NOT NULL
              AND product IS NOT NULL
            ORDER BY reporter, CAST(year AS INTEGER), product
            "#,
            indicator = INDICATOR_COLUMN,
            table = PRODUCTION_TABLE,
            placeholders = placeholders,
        );

        let mut params: Vec<Box<dyn rusqlite::ToSql>> = indicators
            .iter()
            .map(|k| Box::new(k.db_code().to_string()) as Box<dyn rusqlite::ToSql>)
            .collect();
        params.push(Box::new(min_year));

        let mut stmt = self.conn.prepare(&sql)?;
        let raw_rows = stmt
            .query_map(rusqlite::params_from_iter(params), |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i32>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, f64>(4)?,
                ))
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        let mut records = Vec::with_capacity(raw_rows.len());
        for (region, year, product_code, indicator_code, amount) in raw_rows {
            let indicator = IndicatorKind::from_db_code(&indicator_code).ok_or_else(|| {
                RepositoryError::FieldValueError {
                    field: INDICATOR_COLUMN.to_string(),
                    message: format!("未知指标编码: {}", indicator_code),
                }
            })?;
            records.push(ProductionRecord {
                region,
                year,
                product_code,
                indicator,
                amount,
            });
        }

        tracing::info!(
            rows = records.len(),
            min_year,
            "生产统计读取完成"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE home_appliances_clean (
                reporter TEXT, year TEXT, product TEXT, "indicators\TIME_PERIOD" TEXT, value REAL
            );
            INSERT INTO home_appliances_clean VALUES
                ('DE', '2013', '27511110', 'PRODVAL', 1.0),
                ('DE', '2014', '27511110', 'PRODVAL', 100.0),
                ('DE', '2014', '27511110', 'PRODQNT', 10.0),
                ('DE', '2015', '27511110', 'PRODVAL', NULL),
                ('FR', '2015', '27511350', 'PRODVAL', 50.0),
                ('FR', '2015', '27511350', 'EXPVAL', 5.0);
            "#,
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_load_value_only() {
        let repo = ProductionRepository::from_connection(setup_conn()).unwrap();
        let rows = repo.load_production(2014, &[IndicatorKind::Value]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            ProductionRecord::new("DE", 2014, "27511110", IndicatorKind::Value, 100.0)
        );
        assert_eq!(rows[1].region, "FR");
    }

    #[test]
    fn test_load_value_and_quantity() {
        let repo = ProductionRepository::from_connection(setup_conn()).unwrap();
        let rows = repo
            .load_production(2014, &[IndicatorKind::Value, IndicatorKind::Quantity])
            .unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.year >= 2014));
        assert!(rows.iter().any(|r| r.indicator == IndicatorKind::Quantity));
    }

    #[test]
    fn test_rows_with_null_keys_are_skipped() {
        let conn = setup_conn();
        conn.execute_batch(
            r#"
            INSERT INTO home_appliances_clean VALUES
                (NULL, '2014', '27511110', 'PRODVAL', 7.0),
                ('IT', '2014', NULL, 'PRODVAL', 8.0);
            "#,
        )
        .unwrap();
        let repo = ProductionRepository::from_connection(conn).unwrap();
        let rows = repo.load_production(2014, &[IndicatorKind::Value]).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.region != "IT"));
    }

    #[test]
    fn test_missing_indicator_column_fails() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE home_appliances_clean \
             (reporter TEXT, year TEXT, product TEXT, value REAL);",
        )
        .unwrap();
        let err = ProductionRepository::from_connection(conn).err().unwrap();
        assert!(matches!(err, RepositoryError::MissingColumn { .. }));
    }
}
