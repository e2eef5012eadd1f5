use anyhow::{Context, Result};
use bomscan_core::{scan_and_write, ScanOptions};
use clap::{Parser, Subcommand};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "bomscan", version, about = "Report files that start with a UTF-8 or UTF-16 byte-order mark")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 递归扫描目录，打印带 BOM 的文件
    Scan {
        /// 扫描根目录
        #[arg(long, default_value = ".")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // 日志写到 stderr，stdout 只保留扫描结果
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { input } => {
            info!(?input, "starting scan");

            let opts = ScanOptions::new(input);
            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let stats = scan_and_write(&opts, &mut out)
                .with_context(|| format!("scan {} failed", opts.root.display()))?;
            out.flush().context("flush stdout")?;

            info!(
                files_scanned = stats.files_scanned,
                files_skipped = stats.files_skipped,
                boms_found = stats.boms_found,
                "scan finished"
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
