//! 生產模擬命令列工具

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use prodsim::{
    load_sample_data, logging, CatalogDocument, InvalidLinePolicy, InventoryStore,
    ProductionSimulator, SimulationConfig, SimulationReport,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// 依現有庫存估算可生產數量與產值
#[derive(Debug, Parser)]
#[command(name = "prodsim", version, about)]
struct Cli {
    /// 目錄 JSON 檔（原物料、產品、BOM）
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// 載入範例資料（未指定目錄時預設載入）
    #[arg(long)]
    seed: bool,

    /// 並行計算各產品
    #[arg(long)]
    parallel: bool,

    /// 無效 BOM 行處理方式：skip 或 block
    #[arg(long, default_value = "skip")]
    invalid_lines: InvalidLinePolicy,

    /// 輸出格式
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let store = InventoryStore::new();
    if let Some(path) = &cli.catalog {
        let file = std::fs::File::open(path)
            .with_context(|| format!("無法開啟目錄檔 {}", path.display()))?;
        let document = CatalogDocument::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("無法解析目錄檔 {}", path.display()))?;
        store
            .import_document(&document)
            .context("匯入目錄失敗")?;
    }
    if cli.seed || cli.catalog.is_none() {
        load_sample_data(&store).context("載入範例資料失敗")?;
    }

    let config = SimulationConfig::new()
        .with_invalid_line_policy(cli.invalid_lines)
        .with_parallel(cli.parallel);
    let report = ProductionSimulator::new(config)
        .simulate(&store)
        .context("生產模擬失敗")?;

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report.estimates)?;
            println!("{}", json);
        }
        OutputFormat::Table => print_table(&report)?,
    }

    Ok(())
}

fn print_table(report: &SimulationReport) -> Result<()> {
    let total = report.total_value().context("無法計算可生產總值")?;

    println!("{:<28} {:>10} {:>14}", "Product", "Quantity", "Total Value");
    for estimate in &report.estimates {
        println!(
            "{:<28} {:>10} {:>14}",
            estimate.product_name, estimate.quantity_possible, estimate.total_value
        );
    }
    println!("{:<28} {:>10} {:>14}", "", "", total);

    if !report.excluded.is_empty() {
        println!("\nExcluded:");
        for record in &report.excluded {
            println!("  - {} ({:?})", record.product_name, record.reason);
        }
    }

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!(
                "  [{:?}] {}: {}",
                warning.severity, warning.product_name, warning.message
            );
        }
    }

    Ok(())
}
