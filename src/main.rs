use std::{env, io, process::ExitCode};

use anyhow::{Context, Result};
use log::info;

use library_batch::{
    config::ReportConfig,
    item::text::TextItemWriterBuilder,
    library::load_visitors,
    report::run_report_job,
};

fn run(config: &ReportConfig) -> Result<()> {
    let visitors = load_visitors(config).with_context(|| {
        format!(
            "unable to load visitors from {}",
            config.get_input_path().display()
        )
    })?;

    let writer = TextItemWriterBuilder::new().from_writer(io::stdout().lock());
    let execution = run_report_job(&visitors, &writer, config).context("report job failed")?;

    info!("Report printed in {:?}", execution.duration);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = ReportConfig::default();
    if let Some(path) = env::args_os().nth(1) {
        config = config.input_path(path);
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}
