//! Application entry point and dispatch.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use fftmul_bigfft::{default_parallelism, MulOptions};
use fftmul_cli::output::{format_number, read_digits, write_digits};
use fftmul_cli::presenter::CLIResultPresenter;
use fftmul_cli::report::{AlgorithmReport, RunReport};
use fftmul_cli::ui::{print_error, print_header, print_step, print_success};
use fftmul_core::constants::{FIRST_OPERAND_FILE, RESULT_FILE, SECOND_OPERAND_FILE};
use fftmul_core::multiplier::{CoreError, Multiplier, ReferenceMultiplier};
use fftmul_core::options::{parse_memory_limit, Options};
use fftmul_core::registry::DefaultFactory;
use fftmul_core::{generate_random, seeded_rng, Digits};
use fftmul_orchestration::interfaces::ResultPresenter;
use fftmul_orchestration::multiplier_selection::get_multipliers_to_run;
use fftmul_orchestration::orchestrator::{
    analyze_comparison_results, execute_multiplications,
};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fftmul_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.validate {
        return run_validate(config);
    }

    run_multiply(config)
}

/// Build normalized options from the command line.
pub fn build_options(config: &AppConfig) -> Result<Options, CoreError> {
    let memory_limit = parse_memory_limit(&config.memory_limit).map_err(CoreError::Config)?;

    let mut mul = MulOptions {
        threads: config.threads,
        executor: config.executor.into(),
        ..MulOptions::default()
    };
    if let Some(limit) = config.max_residual {
        if !(limit > 0.0 && limit < 0.5) {
            return Err(CoreError::Config(format!(
                "max residual must be in (0, 0.5), got {limit}"
            )));
        }
        mul.max_residual = limit;
    }

    Ok(Options {
        mul,
        memory_limit,
        allow_beyond_ceiling: config.allow_beyond_ceiling,
    }
    .normalize())
}

fn run_multiply(config: &AppConfig) -> Result<()> {
    let text = !config.quiet && !config.json;

    if config.digits == 0 {
        return Err(CoreError::Config("digit count must be at least 1".into()).into());
    }
    let opts = build_options(config)?;
    opts.check_budget(config.digits, config.digits)?;

    if text {
        print_header("FFT multiplication");
        println!("Detected CPU cores: {}", default_parallelism());
        if config.verbose {
            println!(
                "Worker threads: {} ({} executor)",
                opts.mul.threads, opts.mul.executor
            );
        }
        print_step("Generating random numbers...");
    }

    let mut rng = seeded_rng(config.seed);
    let a = Digits::from_le_digits(generate_random(config.digits, &mut rng))?;
    let b = Digits::from_le_digits(generate_random(config.digits, &mut rng))?;
    info!(digits = config.digits, seed = ?config.seed, "operands generated");

    if !config.no_save {
        fs::create_dir_all(&config.output_dir)
            .with_context(|| format!("creating {}", config.output_dir.display()))?;
        save(&config.output_dir, FIRST_OPERAND_FILE, &a)?;
        save(&config.output_dir, SECOND_OPERAND_FILE, &b)?;
    }

    let factory = DefaultFactory::new(opts.mul.clone());
    let multipliers = get_multipliers_to_run(&config.algo, &factory)?;
    let results = execute_multiplications(&multipliers, &a, &b);

    let consistent = (results.len() > 1).then(|| analyze_comparison_results(&results));

    if config.json {
        let report = RunReport {
            threads: opts.mul.threads,
            executor: opts.mul.executor.to_string(),
            digits_a: a.len(),
            digits_b: b.len(),
            results: results.iter().map(AlgorithmReport::from_result).collect(),
            consistent: consistent.as_ref().map(Result::is_ok),
        };
        println!("{}", report.to_json()?);
    } else {
        let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
        let mut shown = false;
        for result in &results {
            match &result.outcome {
                // Quiet output is the product alone, printed once.
                Ok(_) if config.quiet && shown => {}
                Ok(value) => {
                    presenter.present_result(result, value);
                    shown = true;
                }
                Err(e) => presenter.present_error(&format!("{}: {e}", result.algorithm)),
            }
        }
        if results.len() > 1 {
            presenter.present_comparison(&results);
        }
    }

    if let Some(Err(e)) = consistent {
        return Err(e.into());
    }

    let Some(product) = results.iter().find_map(|r| r.value()) else {
        // Every multiplier failed; report the first failure.
        return match results.into_iter().find_map(|r| r.outcome.err()) {
            Some(e) => Err(e.into()),
            None => Err(CoreError::Config("no multiplier ran".into()).into()),
        };
    };

    if !config.no_save {
        save(&config.output_dir, RESULT_FILE, product)?;
        if text {
            println!("Numbers saved to {FIRST_OPERAND_FILE}, {SECOND_OPERAND_FILE}");
            println!("Result saved to {RESULT_FILE}");
        }
    }

    if text {
        println!("Product digits: {}", format_number(product.len()));
    }
    Ok(())
}

fn run_validate(config: &AppConfig) -> Result<()> {
    let dir = &config.output_dir;
    let a = load(dir, FIRST_OPERAND_FILE, config.quiet)?;
    let b = load(dir, SECOND_OPERAND_FILE, config.quiet)?;
    let stored = load(dir, RESULT_FILE, config.quiet)?;

    if !config.quiet {
        print_step("Calculating num1 * num2 with num-bigint...");
    }
    let expected = ReferenceMultiplier::new().multiply(&a, &b)?;

    if expected == stored {
        if !config.quiet {
            print_success("Success: The result is correct!");
        }
        Ok(())
    } else {
        print_error("Error: The result does NOT match!");
        Err(CoreError::Mismatch.into())
    }
}

fn save(dir: &Path, name: &str, value: &Digits) -> Result<()> {
    let path = dir.join(name);
    write_digits(&path, value).with_context(|| format!("writing {}", path.display()))
}

fn load(dir: &Path, name: &str, quiet: bool) -> Result<Digits> {
    let path = dir.join(name);
    if !quiet {
        print_step(&format!("Reading {}...", path.display()));
    }
    read_digits(&path).with_context(|| format!("reading {}", path.display()))
}
