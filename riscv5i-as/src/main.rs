mod args;

use std::io::{self, Read};
use std::path::PathBuf;

use bumpalo::Bump;
use clap::Parser;
use colored::Colorize;

use riscv5i_core::error::AssemblerError;
use riscv5i_core::session::Session;
use riscv5i_core::{assemble, AssemblerContext, OutputFormat};

use args::Cli;

fn main() {
    let args = Cli::parse();

    let format = match OutputFormat::parse(&args.format) {
        Some(format) => format,
        None => {
            print_error(&format!(
                "`{}` is not a recognized output format (expected binary/bin/hex/hexadecimal)",
                args.format
            ));
            std::process::exit(1);
        }
    };

    let ctx = match AssemblerContext::new(args.start_of_memory, format) {
        Ok(ctx) => ctx.with_verbose(args.verbose),
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let raw_source = match read_input(args.input_filename.as_deref()) {
        Ok(contents) => contents,
        Err(e) => {
            print_error(&format!("failed to read input: {}", e));
            std::process::exit(1);
        }
    };

    // The bump arena owns the source buffer for the lifetime of assembly.
    let bump = Bump::new();
    let session = Session::new(&bump);
    let source = session.add_src(raw_source);

    let output_path = resolve_output_path(args.input_filename.as_deref(), args.output_filename.as_deref(), ctx.format);

    let mut bytes = Vec::new();
    let word_count = match assemble(source, &ctx, &mut bytes) {
        Ok(word_count) => word_count,
        Err(err) => {
            report_assembler_error(&err);
            std::process::exit(1);
        }
    };

    if let Err(e) = std::fs::write(&output_path, &bytes) {
        print_error(&format!("failed to write {:?}: {}", output_path, e));
        std::process::exit(1);
    }

    if args.verbose {
        eprintln!(
            "{} wrote {} instruction word(s) to {:?}",
            "verbose:".cyan().bold(),
            word_count,
            output_path
        );
    }
    println!("{} {:?}", "assembled".green().bold(), output_path);
}

fn read_input(path: Option<&std::path::Path>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn resolve_output_path(
    input_path: Option<&std::path::Path>,
    explicit_output: Option<&std::path::Path>,
    format: OutputFormat,
) -> PathBuf {
    if let Some(path) = explicit_output {
        return path.to_path_buf();
    }

    let stem = input_path
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("a");

    PathBuf::from(format!("{stem}.{}", format.default_extension()))
}

fn report_assembler_error(err: &AssemblerError) {
    match err {
        AssemblerError::Source(line_err) => {
            print_error(&format!("line {}: {}", line_err.line, line_err.kind));
        }
        AssemblerError::Io(io_err) => {
            print_error(&format!("i/o error while writing output: {}", io_err));
        }
    }
}

fn print_error(message: &str) {
    let title = "error:".red().bold();
    eprintln!("{} {}", title, message);
}
