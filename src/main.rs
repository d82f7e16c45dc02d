use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};

use renum::{
    RenameConfig, RenameResult, UndoLog, apply_with_progress, build_plan, list_dir_files, revert,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("✗ Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse(env::args().skip(1))?;

    println!("Renum - Sequential File Renamer");
    println!("===============================");

    let mut paths: Vec<PathBuf> = Vec::new();
    for input in &args.inputs {
        if input.is_dir() {
            let listed = list_dir_files(input)
                .with_context(|| format!("failed to read directory '{}'", input.display()))?;
            paths.extend(listed);
        } else {
            paths.push(input.clone());
        }
    }

    let plan = build_plan(&paths);
    if plan.is_empty() {
        println!("\nNo files to rename.");
        return Ok(());
    }

    let mut config = RenameConfig::new(args.digits);
    if let Some(prefix) = args.prefix {
        config = config.with_prefix(prefix);
    }
    if let Some(suffix) = args.suffix {
        config = config.with_suffix(suffix);
    }

    println!("\nProcessing {} file(s)...\n", plan.len());

    let total = plan.len();
    let (result, log) = apply_with_progress(&plan, &config, |entry, new_path, error| {
        let old_name = entry.path.file_name().unwrap_or_default().to_string_lossy();
        match error {
            None => {
                let new_name = new_path.file_name().unwrap_or_default().to_string_lossy();
                println!("  ✓ {old_name} -> {new_name}");
            }
            Some(reason) => println!("  ✗ {old_name}: {reason}"),
        }
    })?;

    print_summary(&result, total);

    if !log.is_empty() {
        offer_undo(log)?;
    }

    Ok(())
}

fn print_summary(result: &RenameResult, total: usize) {
    println!("\n===============================");
    println!("Summary: {} of {} files renamed", result.succeeded, total);

    if result.all_succeeded() && result.succeeded > 0 {
        println!("✓ All files renamed successfully!");
    } else if result.succeeded > 0 {
        println!("⚠ Some files were renamed, but there were errors with others.");
    } else {
        println!("✗ No files were renamed.");
    }
}

/// One-shot in-process undo. The log lives only for this run, so this prompt
/// is the last chance to revert the batch.
fn offer_undo(log: UndoLog) -> Result<()> {
    println!("\nPress 'u' then Enter to undo this batch, or just Enter to keep it...");

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    if !line.trim().eq_ignore_ascii_case("u") {
        return Ok(());
    }

    let result = revert(log);
    println!(
        "Undo: {} restored, {} already gone, {} failed",
        result.succeeded,
        result.skipped,
        result.failed.len()
    );
    for failure in &result.failed {
        println!("  ✗ {}: {}", failure.path.display(), failure.reason);
    }

    Ok(())
}

struct CliArgs {
    digits: usize,
    prefix: Option<String>,
    suffix: Option<String>,
    inputs: Vec<PathBuf>,
}

impl CliArgs {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut digits: Option<usize> = None;
        let mut prefix: Option<String> = None;
        let mut suffix: Option<String> = None;
        let mut inputs: Vec<PathBuf> = Vec::new();

        let mut args = args;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--digits" | "-d" => {
                    let value = args.next().context("--digits requires a value")?;
                    digits = Some(
                        value
                            .parse()
                            .with_context(|| format!("invalid digit count '{value}'"))?,
                    );
                }
                "--prefix" | "-p" => {
                    prefix = Some(args.next().context("--prefix requires a value")?);
                }
                "--suffix" | "-s" => {
                    suffix = Some(args.next().context("--suffix requires a value")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    process::exit(0);
                }
                _ => inputs.push(PathBuf::from(arg)),
            }
        }

        let Some(digits) = digits else {
            print_usage();
            bail!("--digits is required");
        };
        if inputs.is_empty() {
            print_usage();
            bail!("no files or directories given");
        }

        Ok(Self {
            digits,
            prefix,
            suffix,
            inputs,
        })
    }
}

fn print_usage() {
    println!("Usage: renum --digits N [--prefix STR] [--suffix STR] <file-or-dir>...");
    println!();
    println!("Renames the given files (directories expand to the files inside them,");
    println!("non-recursively) to a zero-padded sequence ordered by the first number");
    println!("found in each filename, e.g. img_001.png, img_002.png, ...");
    println!();
    println!("Options:");
    println!("  -d, --digits N    minimum digits in the sequence number (required)");
    println!("  -p, --prefix STR  text placed before the number");
    println!("  -s, --suffix STR  text placed after the number, before the extension");
    println!("  -h, --help        show this help");
}
