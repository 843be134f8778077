use anyhow::Context;
use clap::Parser;
use small_calc::config::{Command, OutputFormat};
use small_calc::core::runner::CaseOutcome;
use small_calc::core::{Evaluation, Operation};
use small_calc::utils::{logger, validation::Validate};
use small_calc::{CalcError, CaseSource, CheckConfig, CheckReport, CheckRunner, CliConfig};
use std::path::Path;

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let outcome = match &config.command {
        Command::Check {
            config: path,
            dry_run,
        } => run_check(path.as_deref(), *dry_run, config.format),
        command => command
            .operation()
            .map_or(Ok(()), |operation| evaluate(operation, config.format)),
    };

    if let Err(e) = outcome {
        let calc_error = e.downcast_ref::<CalcError>();
        if let Some(err) = calc_error {
            tracing::debug!(
                "Command failed: {} (Category: {:?}, Severity: {:?})",
                err,
                err.category(),
                err.severity()
            );
        }

        match config.format {
            // a failed check run has already printed its report
            OutputFormat::Json if matches!(calc_error, Some(CalcError::CheckFailed { .. })) => {}
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "error": format!("{:#}", e) }));
            }
            OutputFormat::Text => {
                // keep anyhow context such as the check file path
                let message = match calc_error {
                    Some(err) if e.to_string() == err.to_string() => err.user_friendly_message(),
                    _ => format!("{:#}", e),
                };
                eprintln!("❌ {}", message);
                if let Some(err) = calc_error {
                    eprintln!("💡 {}", err.recovery_suggestion());
                }
            }
        }

        std::process::exit(calc_error.map(CalcError::exit_code).unwrap_or(1));
    }
}

fn evaluate(operation: Operation, format: OutputFormat) -> anyhow::Result<()> {
    let result = operation.evaluate()?;
    tracing::debug!("{} = {}", operation, result);

    match format {
        OutputFormat::Text => println!("{}", result),
        OutputFormat::Json => {
            let evaluation = Evaluation { operation, result };
            println!("{}", serde_json::to_string(&evaluation).map_err(CalcError::from)?);
        }
    }
    Ok(())
}

fn load_suite(path: Option<&Path>) -> anyhow::Result<CheckConfig> {
    let suite = match path {
        Some(path) => {
            tracing::info!("📁 Loading check file: {}", path.display());
            CheckConfig::from_file(path)
                .with_context(|| format!("Failed to load check file '{}'", path.display()))?
        }
        None => CheckConfig::builtin(),
    };
    suite.validate()?;
    Ok(suite)
}

fn run_check(path: Option<&Path>, dry_run: bool, format: OutputFormat) -> anyhow::Result<()> {
    let suite = load_suite(path)?;

    if dry_run {
        tracing::info!("🔍 Dry run, nothing will be evaluated");
        for case in suite.cases() {
            println!("{}: {}", case.name, case.operation);
        }
        return Ok(());
    }

    let report = CheckRunner::new(suite).run();
    print_report(&report, format)?;
    report.into_result()?;
    Ok(())
}

fn print_report(report: &CheckReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report).map_err(CalcError::from)?);
        }
        OutputFormat::Text => {
            for case in &report.cases {
                let mark = if case.passed() { "✅" } else { "❌" };
                println!("{} {} ({})", mark, case.name, case.operation);
            }
            for case in report.failures() {
                if let CaseOutcome::Failed { reason } = &case.outcome {
                    println!("   {}: {}", case.name, reason);
                }
            }
            println!(
                "{}: {} passed, {} failed",
                report.suite,
                report.passed(),
                report.failed()
            );
        }
    }
    Ok(())
}
