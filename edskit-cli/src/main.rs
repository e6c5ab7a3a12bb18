use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use edskit::Error;
use edskit::unpack::EdsOperations;

#[derive(Parser)]
#[command(name = "edskit")]
#[command(version)]
#[command(about = "Batch-unpack EDS capture archives", long_about = None)]
struct Cli {
    /// Directory containing .eds source archives
    input: PathBuf,

    /// Directory that receives the unpacked contents
    output: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    tracing::debug!("input: {}, output: {}", cli.input.display(), cli.output.display());

    println!("Unpacking {:?} to {:?}", cli.input, cli.output);

    let report = match EdsOperations::unpack(&cli.input, &cli.output) {
        Ok(report) => report,
        Err(Error::InputPathMissing { .. }) => {
            eprintln!("Input path does not exist");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    for line in report.messages() {
        println!("{line}");
    }

    if report.has_failures() {
        let failed = report.staged.fail_count + report.extracted.fail_count;
        eprintln!("✗ {failed} file(s) failed");
        return Ok(ExitCode::FAILURE);
    }

    println!("✓ Unpacked {} archive(s)", report.extracted.success_count);
    Ok(ExitCode::SUCCESS)
}
