// ==========================================
// 产量趋势流水线 端到端测试
// ==========================================


use eu_appliance_market::repository::ProductionRepository;
use eu_appliance_market::{logging, AnalysisConfig, Category, PipelineOutcome, ProdcomTrends};
use test_helpers::{create_base_dir, create_prodcom_db, ProdRow};

const PROD_ROWS: &[ProdRow<'static>] = &[
    ("DE", "2014", "27511110", "PRODVAL", 600.0),
    ("DE", "2014", "27511110", "PRODQNT", 60.0),
    ("FR", "2014", "27511150", "PRODVAL", 400.0),
    ("FR", "2014", "27511150", "PRODQNT", 40.0),
    ("DE", "2015", "27511110", "PRODVAL", 1100.0),
    ("DE", "2015", "27511110", "PRODQNT", 100.0),
    // 缺产量,整行丢弃
    ("IT", "2015", "27511110", "PRODVAL", 5000.0),
    ("DE", "2014", "27512400", "PRODVAL", 50.0),
    ("DE", "2014", "27512400", "PRODQNT", 5.0),
];

fn setup(rows: &[ProdRow<'_>]) -> (tempfile::TempDir, AnalysisConfig) {
    let dir = create_base_dir().expect("无法创建临时目录");
    let config = AnalysisConfig::from_base_dir(dir.path());
    create_prodcom_db(&config.prodcom_db_path, rows).expect("无法创建生产统计库");
    (dir, config)
}

#[test]
fn test_trend_rows_and_price_index() {
    logging::init_test();
    let (_dir, config) = setup(PROD_ROWS);
    let repo = ProductionRepository::open(&config.prodcom_db_path).unwrap();
    let rows = ProdcomTrends::new(config).compute(&repo).unwrap();

    let fridges: Vec<_> = rows
        .iter()
        .filter(|r| r.category == Category::Refrigerators)
        .collect();
    assert_eq!(fridges.len(), 2);

    // 2014: 1000 / 100 = 10, 2015: 1100 / 100 = 11
    assert_eq!(fridges[0].production_value, 1000.0);
    assert!((fridges[0].unit_price - 10.0).abs() < 1e-9);
    assert!((fridges[1].unit_price - 11.0).abs() < 1e-9);
    assert!((fridges[1].price_index - 110.0).abs() < 1e-9);
    assert!((fridges[1].quantity_index - 100.0).abs() < 1e-9);

    assert!(rows.iter().any(|r| r.category == Category::Ovens));
}

#[test]
fn test_run_writes_trends_document() {
    logging::init_test();
    let (_dir, config) = setup(PROD_ROWS);
    let output_path = config.trends_output_path();

    let PipelineOutcome::Written(report) = ProdcomTrends::new(config).run().unwrap() else {
        panic!("应该写出文档");
    };
    assert_eq!(report.traces, 6);
    assert_eq!(report.groups, 2);

    let html = std::fs::read_to_string(&output_path).unwrap();
    assert!(html.contains("Manufacturing Evolution: Value, Quantity and Unit Price"));
    assert!(html.contains("EU Manufacturing Dynamics: Ovens (Index 2014=100)"));
    assert!(html.contains("\"name\":\"Unit Price Index\""));
}

#[test]
fn test_no_computable_rows_is_no_data() {
    logging::init_test();
    let (_dir, config) = setup(&[
        ("DE", "2014", "27511110", "PRODVAL", 10.0),
        ("DE", "2014", "27511110", "PRODQNT", 0.0),
    ]);
    let output_path = config.trends_output_path();

    let outcome = ProdcomTrends::new(config).run().unwrap();
    assert!(!outcome.is_written());
    assert!(!output_path.exists());
}
