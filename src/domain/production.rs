// ==========================================
// 欧盟家电市场分析 - 生产统计领域模型
// ==========================================
// 来源: 生产统计库 home_appliances_clean 表
// 约束: 读取后不可变,仅在单次运行内存活
// ==========================================

use crate::domain::types::IndicatorKind;
use serde::{Deserialize, Serialize};

// ==========================================
// ProductionRecord - 生产统计记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub region: String,            // 报告国代码
    pub year: i32,                 // 年份
    pub product_code: String,      // 产品编码 (PRODCOM)
    pub indicator: IndicatorKind,  // 指标类型
    pub amount: f64,               // 数值
}

impl ProductionRecord {
    pub fn new(
        region: impl Into<String>,
        year: i32,
        product_code: impl Into<String>,
        indicator: IndicatorKind,
        amount: f64,
    ) -> Self {
        Self {
            region: region.into(),
            year,
            product_code: product_code.into(),
            indicator,
            amount,
        }
    }
}
