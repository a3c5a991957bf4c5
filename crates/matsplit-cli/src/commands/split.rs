use crate::cli::Cli;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use matsplit::engine::config::{SplitConfig, SplitConfigBuilder};
use matsplit::engine::progress::ProgressReporter;
use matsplit::workflows;
use matsplit::workflows::split::SplitReport;
use tracing::info;

pub fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Starting stratified split...");
    info!("Invoking the core split workflow...");

    let report = workflows::split::run(&config, &reporter)?;

    info!(
        "Workflow finished: {} input record(s), {} after filters.",
        report.input_rows, report.rows_after_filters
    );
    print_summary(&report);

    Ok(())
}

fn build_config(cli: &Cli) -> Result<SplitConfig> {
    let mut builder = SplitConfigBuilder::new()
        .input_path(cli.input.clone())
        .output_dir(cli.output_dir.clone())
        .stratify_by(cli.stratify_by.clone())
        .val_size(cli.val_size)
        .seed(cli.seed);

    if let Some(max) = cli.max_num_sites {
        builder = builder.max_num_sites(max as f64);
    }
    if let Some(max) = cli.energy_above_hull_max {
        builder = builder.energy_above_hull_max(max);
    }

    Ok(builder.build()?)
}

fn print_summary(report: &SplitReport) {
    for warning in &report.warnings {
        println!("⚠ {}", warning);
    }
    println!(
        "✓ train: {} record(s) written to: {}",
        report.train_rows,
        report.train_path.display()
    );
    println!(
        "✓ val:   {} record(s) written to: {}",
        report.val_rows,
        report.val_path.display()
    );
}
