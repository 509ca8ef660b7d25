use log::error;
use mdpdf::executor::ExecutorImpl;
use mdpdf::{resolve_inputs, run_batch, ConverterConfig};
use std::env;
use std::path::Path;
use std::process::ExitCode;

/// Converts a Markdown file, or every Markdown file under a directory, to PDF.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let Some(input) = args.get(1) else {
        let program = args.first().map(String::as_str).unwrap_or("mdpdf");
        eprintln!("Converts Markdown files to PDF.");
        eprintln!();
        eprintln!("Usage: {} <file.md | directory>", program);
        return ExitCode::from(1);
    };

    let inputs = match resolve_inputs(Path::new(input)) {
        Ok(inputs) => inputs,
        Err(err) => {
            error!("{}", err);
            return ExitCode::from(1);
        }
    };

    let report = run_batch(inputs, &ConverterConfig::default(), &ExecutorImpl::default());
    log::debug!(
        "{} converted, {} failed",
        report.converted.len(),
        report.failed.len()
    );
    println!("All conversions completed.");
    ExitCode::SUCCESS
}
