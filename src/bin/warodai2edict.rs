//! warodai2edict - Warodai to EDICT converter
//!
//! Usage:
//!   warodai2edict                          - download, extract and convert into ./output.txt
//!   warodai2edict --skip-download -i FILE  - convert an already extracted source file

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use warodai_edict::builder::{ConverterConfig, EdictBuilder};
use warodai_edict::utils::io_utils::{archive_file_name, extract_archive};
use warodai_edict::utils::progress_report::ProgressState;
use warodai_edict::Result;

#[derive(Parser)]
#[command(name = "warodai2edict")]
#[command(author, version, about = "Convert the Warodai Japanese-Russian dictionary to EDICT")]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source archive URL
    #[arg(long)]
    url: Option<String>,

    /// Directory to download and extract the source in
    #[arg(short, long)]
    work_dir: Option<String>,

    /// Source file name inside the work directory
    #[arg(short, long)]
    input: Option<String>,

    /// EDICT file to write
    #[arg(short, long)]
    output: Option<String>,

    /// Encoding of the source file
    #[arg(short, long)]
    encoding: Option<String>,

    /// Convert an existing source file without downloading or extracting
    #[arg(long)]
    skip_download: bool,
}

impl Cli {
    fn load_config(&self) -> Result<ConverterConfig> {
        let mut config = match &self.config {
            Some(path) => ConverterConfig::from_json_file(path)?,
            None => ConverterConfig::default(),
        };
        if let Some(url) = &self.url {
            config.source_url = url.clone();
        }
        if let Some(work_dir) = &self.work_dir {
            config.work_dir = work_dir.clone();
        }
        if let Some(input) = &self.input {
            config.input_file = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_file = output.clone();
        }
        if let Some(encoding) = &self.encoding {
            config.input_encoding = encoding.clone();
        }
        Ok(config)
    }
}

fn report_progress(state: &mut ProgressState) -> bool {
    info!("{}: {}/{} records", state.state_id, state.current + 1, state.total);
    false
}

#[cfg(feature = "download")]
fn ensure_archive(url: &str, archive_path: &Path) -> Result<()> {
    warodai_edict::utils::io_utils::download_file_if_not_exists(url, archive_path)
}

#[cfg(not(feature = "download"))]
fn ensure_archive(_url: &str, archive_path: &Path) -> Result<()> {
    if archive_path.is_file() {
        return Ok(());
    }
    Err(warodai_edict::ConvertError::invalid_parameter(format!(
        "{} not found and downloading is disabled",
        archive_path.display()
    )))
}

fn fetch_source(config: &ConverterConfig) -> Result<()> {
    let archive_path = Path::new(&config.work_dir).join(archive_file_name(&config.source_url)?);
    ensure_archive(&config.source_url, &archive_path)?;
    extract_archive(&archive_path, &config.work_dir)
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.load_config()?;
    if !cli.skip_download {
        fetch_source(&config)?;
    }
    let stats = EdictBuilder::build_with_config(&config, chrono::Local::now().date_naive(), Some(report_progress))?;
    info!("Done. {} records, {} entries", stats.records, stats.entries);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
