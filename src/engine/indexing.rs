// ==========================================
// 欧盟家电市场分析 - 分组指数计算
// ==========================================
// 流程: 按键分组 → 组内按年份排序 → 以首行值为基准 → 逐行输出指数
// 基准: 取排序后首行,而非固定年份 (缺 2014 时以组内最早年份为 100)
// ==========================================

use std::collections::BTreeMap;

/// 指数基准值
pub const INDEX_BASE: f64 = 100.0;

// ==========================================
// BaselineGuard - 基准值保护
// ==========================================
// 基准值不大于阈值时,整组指数恒为 100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineGuard {
    pub threshold: f64,
}

impl BaselineGuard {
    /// 基准值必须严格大于 threshold
    pub const fn above(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn accepts(&self, baseline: f64) -> bool {
        baseline > self.threshold
    }
}

/// 依存度指数: 近零基准保护 (0.1)
pub const DEPENDENCY_GUARD: BaselineGuard = BaselineGuard::above(0.1);

/// 产值/产量/单价指数: 仅防除零
pub const TREND_GUARD: BaselineGuard = BaselineGuard::above(0.0);

/// 按键分组并在组内按年份升序排序
pub fn partition_by_year<T, K, FK, FY>(rows: Vec<T>, key_fn: FK, year_fn: FY) -> BTreeMap<K, Vec<T>>
where
    K: Ord,
    FK: Fn(&T) -> K,
    FY: Fn(&T) -> i32,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for row in rows {
        groups.entry(key_fn(&row)).or_default().push(row);
    }
    for group in groups.values_mut() {
        group.sort_by_key(|row| year_fn(row));
    }
    groups
}

/// 已排序序列的指数
///
/// # 返回
/// - 与输入等长; 基准被保护拒绝时全部为 100
pub fn index_series(values: &[f64], guard: BaselineGuard) -> Vec<f64> {
    let Some(&baseline) = values.first() else {
        return Vec::new();
    };

    if !guard.accepts(baseline) {
        return vec![INDEX_BASE; values.len()];
    }

    values
        .iter()
        .map(|v| {
            let idx = v / baseline * INDEX_BASE;
            if idx.is_finite() {
                idx
            } else {
                INDEX_BASE
            }
        })
        .collect()
}
