// ==========================================
// 欧盟家电市场分析 - 分析结果模型
// ==========================================
// DependencyRow: 进口依存度分析 (报告国, 年份, 品类) 粒度
// TrendRow: 产量趋势分析 (年份, 品类) 粒度
// ==========================================

use crate::domain::types::Category;
use serde::{Deserialize, Serialize};

// ==========================================
// DependencyRow - 依存度聚合行
// ==========================================
// 约束: 每个 (region, year, category) 至多一行
// 约束: 所有数值字段均为有限值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyRow {
    // ===== 主键 =====
    pub region: String,
    pub year: i32,
    pub category: Category,

    // ===== 原始量 (EUR) =====
    pub production_value: f64,
    pub import_intra: f64,
    pub import_extra: f64,
    pub export_intra: f64,
    pub export_extra: f64,

    // ===== 派生量 =====
    pub total_imports: f64,
    pub dependency: f64,       // 进口依存度 (%)
    pub dependency_index: f64, // 依存度指数 (首年 = 100)
}

// ==========================================
// TrendRow - 产量趋势行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRow {
    pub year: i32,
    pub category: Category,

    pub production_value: f64,
    pub production_quantity: f64,
    pub unit_price: f64,

    pub value_index: f64,
    pub quantity_index: f64,
    pub price_index: f64,
}
