// ==========================================
// 欧盟家电市场分析 - 产量趋势看板图表
// ==========================================
// 每个品类三条指数折线: 产值 / 产量 / 隐含单价
// ==========================================

use crate::domain::market::TrendRow;
use crate::report::figure::{
    resolve_default, Axis, Button, Figure, Layout, LineStyle, Shape, Trace, UpdateMenu,
};

/// 构建产量趋势看板
///
/// # 参数
/// - rows: 趋势行
/// - default_category: 默认显示的品类 (不存在时回退到第一个)
pub fn build_trend_figure(rows: &[TrendRow], default_category: &str) -> Option<Figure> {
    let mut categories: Vec<String> = rows
        .iter()
        .map(|r| r.category.display_name().to_string())
        .collect();
    categories.sort();
    categories.dedup();

    let (active, default_category) = resolve_default(&categories, default_category)?;

    let mut data = Vec::new();
    for category in &categories {
        let mut group: Vec<&TrendRow> = rows
            .iter()
            .filter(|r| r.category.display_name() == category)
            .collect();
        group.sort_by_key(|r| r.year);

        let is_visible = category == default_category;
        let years: Vec<i32> = group.iter().map(|r| r.year).collect();
        let value_idx: Vec<f64> = group.iter().map(|r| r.value_index).collect();
        let quantity_idx: Vec<f64> = group.iter().map(|r| r.quantity_index).collect();
        let price_idx: Vec<f64> = group.iter().map(|r| r.price_index).collect();

        data.push(
            Trace::line("Production Value Index", years.clone(), &value_idx, category)
                .with_line(LineStyle::solid("#2ecc71", 2.0))
                .visible(is_visible),
        );
        data.push(
            Trace::line("Production Quantity Index", years.clone(), &quantity_idx, category)
                .with_line(LineStyle::solid("#3498db", 2.0))
                .visible(is_visible),
        );
        data.push(
            Trace::line("Unit Price Index", years, &price_idx, category)
                .with_line(LineStyle::dashed("#e74c3c", 4.0, "dot"))
                .visible(is_visible),
        );
    }

    let mut figure = Figure {
        data,
        layout: Layout::white("Manufacturing Evolution: Value, Quantity and Unit Price"),
    };

    let buttons: Vec<Button> = categories
        .iter()
        .map(|c| {
            Button::update(
                c.as_str(),
                figure.visibility_for(c),
                format!("EU Manufacturing Dynamics: {} (Index 2014=100)", c),
            )
        })
        .collect();

    figure.layout.updatemenus = vec![UpdateMenu {
        buttons,
        x: 0.0,
        y: 1.2,
        xanchor: "left",
        active,
    }];
    figure.layout.xaxis.dtick = Some(1.0);
    figure.layout.yaxis = Axis::titled("Index (2014 = 100)");
    figure.layout.shapes = vec![Shape::hline(
        100.0,
        "y",
        LineStyle::dashed("black", 1.0, "dash"),
    )];

    tracing::debug!(
        traces = figure.data.len(),
        categories = categories.len(),
        "产量趋势图表已构建"
    );
    Some(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Category;

    fn row(year: i32, category: Category) -> TrendRow {
        TrendRow {
            year,
            category,
            production_value: 100.0,
            production_quantity: 10.0,
            unit_price: 10.0,
            value_index: 100.0,
            quantity_index: 100.0,
            price_index: 100.0,
        }
    }

    #[test]
    fn test_three_traces_per_category() {
        let rows = vec![
            row(2014, Category::Refrigerators),
            row(2015, Category::Refrigerators),
            row(2014, Category::Dishwashers),
        ];
        let figure = build_trend_figure(&rows, "Refrigerators").unwrap();
        assert_eq!(figure.data.len(), 6);
        assert_eq!(figure.visible_tags(), vec!["Refrigerators"]);
        assert_eq!(figure.layout.updatemenus[0].active, 1);
        assert_eq!(figure.data[3].x, vec![2014, 2015]);
    }

    #[test]
    fn test_default_category_fallback() {
        let rows = vec![row(2014, Category::Ovens)];
        let figure = build_trend_figure(&rows, "Refrigerators").unwrap();
        assert_eq!(figure.visible_tags(), vec!["Ovens"]);
    }

    #[test]
    fn test_price_trace_is_dotted() {
        let figure = build_trend_figure(&[row(2014, Category::Ovens)], "Ovens").unwrap();
        assert_eq!(figure.data[2].name, "Unit Price Index");
        assert_eq!(figure.data[2].line.dash.as_deref(), Some("dot"));
        assert_eq!(figure.data[2].line.width, 4.0);
    }
}
