//! rplint CLI binary entry point.
//! Resolves configuration, runs the lint engine and maps the report to an
//! exit status: 0 clean, 1 failed checks, 2 unusable input.

use clap::Parser;
use rplint::cli::{Cli, Commands};
use rplint::lint::Linter;
use rplint::{config, output, utils};

fn main() {
    let cli = Cli::parse();
    cli.init_logging();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Lint {
            project,
            config: config_file,
            output: output_mode,
            strict,
        } => {
            let eff = match config::resolve_effective(
                project.as_deref(),
                config_file.as_deref(),
                output_mode.as_deref(),
                if strict { Some(true) } else { None },
            ) {
                Ok(eff) => eff,
                Err(e) => fail(e),
            };
            if eff.output != "json" {
                match &eff.config_path {
                    Some(path) => eprintln!(
                        "{} Using config {}",
                        utils::info_prefix(),
                        path.display()
                    ),
                    None => eprintln!(
                        "{} No rplint.toml found; using default conventions.",
                        utils::note_prefix()
                    ),
                }
            }
            let mut linter = match Linter::with_conventions(&eff.project, &eff.conventions) {
                Ok(l) => l,
                Err(e) => fail(e),
            };
            if let Err(e) = linter.lint_rproject() {
                fail(e);
            }
            output::print_report(&eff.project, &linter.report, &eff.output);
            if !linter.report.is_success(eff.strict) {
                std::process::exit(1);
            }
        }
        Commands::Conventions {
            project,
            config: config_file,
        } => {
            let eff = match config::resolve_effective(
                project.as_deref(),
                config_file.as_deref(),
                None,
                None,
            ) {
                Ok(eff) => eff,
                Err(e) => fail(e),
            };
            if let Err(e) = eff.conventions.compile() {
                fail(e);
            }
            match toml::to_string_pretty(&eff.conventions) {
                Ok(s) => print!("{}", s),
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            }
        }
    }
}

fn fail(e: rplint::error::LintError) -> ! {
    eprintln!("{} {}", utils::error_prefix(), e);
    std::process::exit(2);
}
