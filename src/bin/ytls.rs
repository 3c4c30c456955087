//! ytls - YAML command line tools.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use ytls::codec::{self, Action};
use ytls::convert::{self, Format};
use ytls::diff::{self, CompareOptions, NumberEquality, OutputFormat};
use ytls::{document, logging, prettify, validate};

#[derive(Parser)]
#[command(
    name = "ytls",
    about = "ytls: A one-stop shop of YAML-related CLI tools.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log diagnostics to stderr (YTLS_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two YAML files and report differences
    Compare(CompareArgs),
    /// Convert YAML to JSON or XML
    Convert(ConvertArgs),
    /// URL-encode or decode a YAML file
    Url(UrlArgs),
    /// Base64-encode or decode a YAML file
    Base64(Base64Args),
    /// Check that a file is valid YAML
    Validate(ValidateArgs),
    /// Rewrite a YAML file in canonical block style
    Prettify(PrettifyArgs),
}

#[derive(Args)]
struct CompareArgs {
    /// Path to the first YAML file
    file1: PathBuf,
    /// Path to the second YAML file
    file2: PathBuf,
    /// Ignore the order of list items
    #[arg(short, long)]
    ignore_order: bool,
    /// Treat integers and floats as never equal
    #[arg(long)]
    strict_numbers: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args)]
struct ConvertArgs {
    /// Path to the YAML file
    input_file: PathBuf,
    /// Path to the output file ('-' for stdout)
    output_file: PathBuf,
    /// Target format
    #[arg(short = 't', long = "to", value_enum)]
    to: Format,
}

#[derive(Args)]
struct UrlArgs {
    #[arg(value_enum)]
    action: Action,
    input_file: PathBuf,
    /// Path to the output file ('-' for stdout)
    output_file: PathBuf,
}

#[derive(Args)]
struct Base64Args {
    #[arg(value_enum)]
    action: Action,
    input_file: PathBuf,
    /// Path to the output file ('-' for stdout)
    output_file: PathBuf,
    /// Encode every N input bytes on a separate line
    #[arg(short, long, value_name = "N")]
    split: Option<usize>,
}

#[derive(Args)]
struct ValidateArgs {
    input_file: PathBuf,
}

#[derive(Args)]
struct PrettifyArgs {
    input_file: PathBuf,
    /// Path to the output file ('-' for stdout)
    output_file: PathBuf,
    /// Keep the original key order instead of sorting
    #[arg(long)]
    keep_order: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> ytls::Result<ExitCode> {
    match command {
        Command::Compare(args) => run_compare(args)?,
        Command::Convert(args) => {
            convert::convert_file(&args.input_file, &args.output_file, args.to)?;
            status(
                &args.output_file,
                format!("Conversion successful! {} written to '{}'.", args.to, args.output_file.display()),
            );
        }
        Command::Url(args) => {
            codec::url_file(args.action, &args.input_file, &args.output_file)?;
            status(
                &args.output_file,
                format!("{} successful! URL written to '{}'.", args.action, args.output_file.display()),
            );
        }
        Command::Base64(args) => {
            if args.split.is_some() && args.action == Action::Decode {
                tracing::warn!("--split is ignored when decoding");
            }
            codec::base64_file(args.action, &args.input_file, &args.output_file, args.split)?;
            status(
                &args.output_file,
                format!("{} successful! base64 written to '{}'.", args.action, args.output_file.display()),
            );
        }
        Command::Validate(args) => return Ok(run_validate(&args.input_file)),
        Command::Prettify(args) => {
            prettify::prettify_file(&args.input_file, &args.output_file, args.keep_order)?;
            status(
                &args.output_file,
                format!("Prettified YAML written to '{}'.", args.output_file.display()),
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_compare(args: CompareArgs) -> ytls::Result<()> {
    let left = document::load(&args.file1)?;
    let right = document::load(&args.file2)?;

    let numbers = if args.strict_numbers {
        NumberEquality::Strict
    } else {
        NumberEquality::Lenient
    };
    let options = CompareOptions::new()
        .ignore_order(args.ignore_order)
        .numbers(numbers);

    let report = diff::compare(&left, &right, &options);
    println!("{}", diff::render(&report, args.format)?);
    Ok(())
}

fn run_validate(path: &Path) -> ExitCode {
    match validate::validate_file(path) {
        Ok(()) => {
            println!("'{}' is valid YAML syntax.", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            println!("'{}' is invalid YAML.", path.display());
            ExitCode::FAILURE
        }
    }
}

/// Prints a status line, keeping stdout clean when it carries the output.
fn status(output: &Path, message: String) {
    if document::is_stdout(output) {
        eprintln!("{}", message);
    } else {
        println!("{}", message);
    }
}
