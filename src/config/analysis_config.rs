// ==========================================
// 欧盟家电市场分析 - 运行配置
// ==========================================
// 职责: 数据库路径、起始年份、输出文件、默认视图
// 约束: 无环境变量,路径相对调用目录解析
// ==========================================

use crate::domain::types::Category;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ==========================================
// 默认常量
// ==========================================
pub mod defaults {
    /// 生产统计库文件名 (相对基准目录)
    pub const PRODCOM_DB_FILE: &str = "eurostat_prodcom.db";

    /// 贸易统计库文件 (相对基准目录)
    pub const COMEXT_DB_FILE: &str = "data/database.db";

    /// 起始年份 (含)
    pub const MIN_YEAR: i32 = 2014;

    /// 依存度看板输出文件
    pub const MARKET_OUTPUT_FILE: &str = "index.html";

    /// 产量趋势看板输出文件
    pub const TRENDS_OUTPUT_FILE: &str = "prodcom_trends.html";

    /// 虚拟联盟区域代码
    pub const UNION_REGION_CODE: &str = "EU27_2020";

    /// 联盟成员国 (27 个)
    pub const UNION_MEMBERS: [&str; 27] = [
        "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GR", "HR", "HU",
        "IE", "IT", "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK",
    ];

    /// Plotly 脚本地址
    pub const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
}

// ==========================================
// AnalysisConfig - 分析运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    // ===== 数据源 =====
    pub prodcom_db_path: PathBuf,
    pub comext_db_path: PathBuf,
    pub min_year: i32,

    // ===== 输出 =====
    pub output_dir: PathBuf,
    pub market_output_file: String,
    pub trends_output_file: String,
    pub plotly_js_url: String,

    // ===== 联盟重构 =====
    pub union_region_code: String,
    pub union_members: Vec<String>,

    // ===== 默认视图 =====
    pub default_region: String,
    pub default_category: Category,
}

impl AnalysisConfig {
    /// 以指定目录为基准构建配置
    ///
    /// # 参数
    /// - base_dir: 数据库与输出文件的基准目录
    pub fn from_base_dir(base_dir: impl AsRef<Path>) -> Self {
        let base = base_dir.as_ref();
        Self {
            prodcom_db_path: base.join(defaults::PRODCOM_DB_FILE),
            comext_db_path: base.join(defaults::COMEXT_DB_FILE),
            min_year: defaults::MIN_YEAR,
            output_dir: base.to_path_buf(),
            market_output_file: defaults::MARKET_OUTPUT_FILE.to_string(),
            trends_output_file: defaults::TRENDS_OUTPUT_FILE.to_string(),
            plotly_js_url: defaults::PLOTLY_JS_URL.to_string(),
            union_region_code: defaults::UNION_REGION_CODE.to_string(),
            union_members: defaults::UNION_MEMBERS.iter().map(|s| s.to_string()).collect(),
            default_region: defaults::UNION_REGION_CODE.to_string(),
            default_category: Category::Refrigerators,
        }
    }

    /// 以当前调用目录为基准构建配置
    pub fn for_invocation_dir() -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::from_base_dir(cwd))
    }

    /// 依存度看板输出路径
    pub fn market_output_path(&self) -> PathBuf {
        self.output_dir.join(&self.market_output_file)
    }

    /// 产量趋势看板输出路径
    pub fn trends_output_path(&self) -> PathBuf {
        self.output_dir.join(&self.trends_output_file)
    }

    /// 获取当前配置的快照（JSON格式）
    ///
    /// 用途: 运行开始时写入日志,便于复核输入
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
