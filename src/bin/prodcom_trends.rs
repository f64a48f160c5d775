// 产量趋势看板: 读取调用目录下的 eurostat_prodcom.db,生成 prodcom_trends.html。
//
// Usage:
//   cargo run --bin prodcom_trends

use anyhow::Context;
use eu_appliance_market::{logging, AnalysisConfig, PipelineOutcome, ProdcomTrends};

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = AnalysisConfig::for_invocation_dir().context("无法确定当前目录")?;
    let outcome = ProdcomTrends::new(config)
        .run()
        .context("产量趋势看板生成失败")?;

    match outcome {
        PipelineOutcome::Written(report) => {
            println!("Success: {} generated.", report.output_path.display());
        }
        PipelineOutcome::NoData => {
            println!("Error: No production data found.");
        }
    }
    Ok(())
}
