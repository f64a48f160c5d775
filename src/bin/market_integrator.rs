// 依存度看板: 读取调用目录下的 eurostat_prodcom.db 与 data/database.db,
// 生成 index.html。
//
// Usage:
//   cargo run --bin market_integrator

use anyhow::Context;
use eu_appliance_market::{logging, AnalysisConfig, MarketIntegrator, PipelineOutcome};

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = AnalysisConfig::for_invocation_dir().context("无法确定当前目录")?;
    let outcome = MarketIntegrator::new(config)
        .run()
        .context("依存度看板生成失败")?;

    match outcome {
        PipelineOutcome::Written(report) => {
            println!(
                "Dashboard generated successfully as {}",
                report.output_path.display()
            );
        }
        PipelineOutcome::NoData => {
            println!("Error: No data found after integration.");
        }
    }
    Ok(())
}
