// ==========================================
// 依存度看板流水线 端到端测试
// ==========================================
// 测试范围:
// 1. 两个临时源库 → 依存度表 (含虚拟联盟区域)
// 2. HTML 文档写出
// 3. 无数据 / 缺源库 / 缺表
// ==========================================


use eu_appliance_market::repository::{ProductionRepository, TradeRepository};
use eu_appliance_market::{
    logging, AnalysisConfig, AnalysisError, Category, MarketIntegrator, PipelineOutcome,
    RepositoryError,
};
use test_helpers::{create_base_dir, create_comext_db, create_prodcom_db, ProdRow, TradeRow};

const PROD_ROWS: &[ProdRow<'static>] = &[
    ("DE", "2014", "27511110", "PRODVAL", 800.0),
    ("DE", "2015", "27511110", "PRODVAL", 600.0),
    ("FR", "2014", "27511110", "PRODVAL", 400.0),
    ("FR", "2015", "27511150", "PRODVAL", 300.0),
    ("FR", "2015", "27511150", "PRODQNT", 30.0),
    ("DE", "2013", "27511110", "PRODVAL", 1.0),
    ("DE", "2014", "99999999", "PRODVAL", 1.0),
];

const TRADE_ROWS: &[TradeRow<'static>] = &[
    ("DE", "2014", "Refrigerators", 1, "Intra-EU", 150.0),
    ("DE", "2014", "Refrigerators", 1, "Extra-EU", 50.0),
    ("DE", "2015", "Refrigerators", 1, "Intra-EU", 400.0),
    ("FR", "2014", "Refrigerators", 1, "Extra-EU", 100.0),
    ("FR", "2015", "Refrigerators", 1, "Extra-EU", 100.0),
    ("FR", "2015", "Refrigerators", 2, "Extra-EU", 70.0),
    // 官方发布的聚合值,应被重构值覆盖
    ("EU27_2020", "2014", "Refrigerators", 1, "Intra-EU", 99999.0),
    ("DE", "2014", "Freezers", 1, "Intra-EU", 5.0),
];

fn setup(prod: &[ProdRow<'_>], trade: &[TradeRow<'_>]) -> (tempfile::TempDir, AnalysisConfig) {
    let dir = create_base_dir().expect("无法创建临时目录");
    let config = AnalysisConfig::from_base_dir(dir.path());
    create_prodcom_db(&config.prodcom_db_path, prod).expect("无法创建生产统计库");
    create_comext_db(&config.comext_db_path, trade).expect("无法创建贸易统计库");
    (dir, config)
}

#[test]
fn test_one_row_per_region_year_plus_union_rows() {
    logging::init_test();
    let (_dir, config) = setup(PROD_ROWS, TRADE_ROWS);

    let production = ProductionRepository::open(&config.prodcom_db_path).unwrap();
    let trade = TradeRepository::open(&config.comext_db_path).unwrap();
    let rows = MarketIntegrator::new(config).compute(&production, &trade).unwrap();

    let keys: Vec<(String, i32)> = rows.iter().map(|r| (r.region.clone(), r.year)).collect();
    assert_eq!(
        keys,
        vec![
            ("DE".to_string(), 2014),
            ("DE".to_string(), 2015),
            ("EU27_2020".to_string(), 2014),
            ("EU27_2020".to_string(), 2015),
            ("FR".to_string(), 2014),
            ("FR".to_string(), 2015),
        ]
    );
    assert!(rows.iter().all(|r| r.category == Category::Refrigerators));

    // 虚拟区域: 成员国进口之和,官方值 99999 被覆盖
    let eu_2014 = rows.iter().find(|r| r.region == "EU27_2020" && r.year == 2014).unwrap();
    assert_eq!(eu_2014.import_intra, 150.0);
    assert_eq!(eu_2014.import_extra, 150.0);
    assert_eq!(eu_2014.production_value, 0.0);
    assert_eq!(eu_2014.dependency, 100.0);

    // DE 2014: 200 / (800 + 200) = 20%, 2015: 400 / (600 + 400) = 40%
    let de: Vec<_> = rows.iter().filter(|r| r.region == "DE").collect();
    assert!((de[0].dependency - 20.0).abs() < 1e-9);
    assert!((de[1].dependency - 40.0).abs() < 1e-9);
    assert!((de[0].dependency_index - 100.0).abs() < 1e-9);
    assert!((de[1].dependency_index - 200.0).abs() < 1e-9);

    // FR 2015: 出口不计入进口
    let fr_2015 = rows.iter().find(|r| r.region == "FR" && r.year == 2015).unwrap();
    assert_eq!(fr_2015.total_imports, 100.0);
    assert_eq!(fr_2015.export_extra, 70.0);

    assert!(rows
        .iter()
        .all(|r| r.dependency.is_finite() && r.dependency_index.is_finite()));
}

#[test]
fn test_run_writes_dashboard() {
    logging::init_test();
    let (_dir, config) = setup(PROD_ROWS, TRADE_ROWS);
    let output_path = config.market_output_path();

    let outcome = MarketIntegrator::new(config).run().unwrap();
    let PipelineOutcome::Written(report) = outcome else {
        panic!("应该写出文档");
    };

    assert_eq!(report.output_path, output_path);
    assert_eq!(report.rows, 6);
    assert_eq!(report.groups, 3);
    assert_eq!(report.traces, 12);

    let html = std::fs::read_to_string(&output_path).unwrap();
    assert!(html.contains("Plotly.newPlot"));
    assert!(html.contains("Refrigerators Market Analysis in EU27_2020"));
    assert!(html.contains("\"meta\":\"Refrigerators|EU27_2020\""));
    assert!(html.contains("2014 Baseline"));
    assert!(!html.contains("NaN"));
}

#[test]
fn test_no_data_does_not_write_file() {
    logging::init_test();
    let (_dir, config) = setup(&[("DE", "2010", "27511110", "PRODVAL", 1.0)], &[]);
    let output_path = config.market_output_path();

    let outcome = MarketIntegrator::new(config).run().unwrap();
    assert!(matches!(outcome, PipelineOutcome::NoData));
    assert!(!output_path.exists());
}

#[test]
fn test_missing_trade_store_is_fatal() {
    let dir = create_base_dir().unwrap();
    let config = AnalysisConfig::from_base_dir(dir.path());
    create_prodcom_db(&config.prodcom_db_path, PROD_ROWS).unwrap();

    let err = MarketIntegrator::new(config).run().unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Repository(RepositoryError::StoreNotFound(_))
    ));
}

#[test]
fn test_missing_production_table_is_fatal() {
    let dir = create_base_dir().unwrap();
    let config = AnalysisConfig::from_base_dir(dir.path());
    rusqlite::Connection::open(&config.prodcom_db_path)
        .unwrap()
        .execute_batch("CREATE TABLE other (x INTEGER);")
        .unwrap();
    create_comext_db(&config.comext_db_path, TRADE_ROWS).unwrap();

    let err = MarketIntegrator::new(config).run().unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Repository(RepositoryError::MissingTable { .. })
    ));
}
