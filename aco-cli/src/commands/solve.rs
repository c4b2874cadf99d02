#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use aco_cli::extensions::import::import_problem;
use aco_cli::extensions::solve::config::*;
use aco_cli::extensions::solve::formats::{write_history_csv, write_route_csv, write_solution_json};
use aco_core::prelude::*;
use clap::{Arg, ArgAction, Command};
use std::io::BufReader;
use std::sync::Arc;

const FORMAT_ARG_NAME: &str = "FORMAT";
const PROBLEM_ARG_NAME: &str = "PROBLEM";
const ANTS_ARG_NAME: &str = "ants";
const ALPHA_ARG_NAME: &str = "alpha";
const BETA_ARG_NAME: &str = "beta";
const RHO_ARG_NAME: &str = "rho";
const DEPOSIT_ARG_NAME: &str = "q";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const ITERATIONS_ARG_NAME: &str = "iterations";
const PARALLEL_ARG_NAME: &str = "parallel";

const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_HISTORY_ARG_NAME: &str = "out-history";
const OUT_ROUTE_ARG_NAME: &str = "out-route";
const LOG_ARG_NAME: &str = "log";

const DEFAULT_ITERATIONS: usize = 100;

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Finds a short closed tour visiting every location once")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the problem type")
                .required(true)
                .value_parser(["csv", "json", "literal", "locations"])
                .index(1),
        )
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Sets the problem file to use (or the matrix itself for the literal type)")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new(ANTS_ARG_NAME)
                .help("Specifies amount of ants per iteration")
                .long(ANTS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ALPHA_ARG_NAME)
                .help("Specifies pheromone influence")
                .long(ALPHA_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(BETA_ARG_NAME)
                .help("Specifies distance influence")
                .long(BETA_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RHO_ARG_NAME)
                .help("Specifies evaporation rate in (0, 1)")
                .long(RHO_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(DEPOSIT_ARG_NAME)
                .help("Specifies pheromone deposit constant")
                .long(DEPOSIT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies amount of iterations, default is 100")
                .short('n')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PARALLEL_ARG_NAME)
                .help("Specifies whether ants of one iteration are run in parallel")
                .long(PARALLEL_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_HISTORY_ARG_NAME)
                .help("Specifies path to file for convergence history output in csv format")
                .long(OUT_HISTORY_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_ROUTE_ARG_NAME)
                .help("Specifies path to file for route details output in csv format")
                .long(OUT_ROUTE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether iteration logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solve command.
pub fn run_solve<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), GenericError>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    // required
    let problem_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("format is not specified")?;
    let problem_arg = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem is not specified")?;

    let input = if problem_format == "literal" {
        import_problem(problem_format, BufReader::new(problem_arg.as_bytes()))
    } else {
        import_problem(problem_format, BufReader::new(open_file(problem_arg, "problem")?))
    }
    .map_err(|err| format!("cannot read {problem_format} problem from '{problem_arg}': '{err}'"))?;

    // optional
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    let params = get_params(matches, &config)?;
    let iterations = parse_int_value::<usize>(matches, ITERATIONS_ARG_NAME, "iterations")?
        .or_else(|| get_max_iterations(&config))
        .unwrap_or(DEFAULT_ITERATIONS);
    let telemetry = get_telemetry_mode(matches, &config);

    let mut optimizer = AcoOptimizer::new(input.distances.as_slice(), params)
        .map_err(|err| format!("cannot create optimizer: '{err}'"))?
        .with_telemetry(telemetry);

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_history = matches.get_one::<String>(OUT_HISTORY_ARG_NAME).map(|path| create_file(path, "out history"));
    let out_route = matches.get_one::<String>(OUT_ROUTE_ARG_NAME).map(|path| create_file(path, "out route"));

    let solution = optimizer.run(iterations);
    let stops = input.stops.as_deref();

    write_solution_json(out_writer_func(out_result.transpose()?), &solution, stops)?;

    if let Some(out_history) = out_history.transpose()? {
        write_history_csv(create_write_buffer(Some(out_history)), solution.history.as_slice())?;
    }

    if let Some(out_route) = out_route.transpose()? {
        write_route_csv(create_write_buffer(Some(out_route)), &solution, optimizer.distances(), stops)?;
    }

    Ok(())
}

/// Applies command line overrides on top of parameters from config.
fn get_params(matches: &ArgMatches, config: &Config) -> Result<AcoParams, GenericError> {
    let params = create_params_from_config(config);

    Ok(AcoParams {
        ant_count: parse_int_value(matches, ANTS_ARG_NAME, "ant count")?.unwrap_or(params.ant_count),
        alpha: parse_float_value(matches, ALPHA_ARG_NAME, "alpha")?.unwrap_or(params.alpha),
        beta: parse_float_value(matches, BETA_ARG_NAME, "beta")?.unwrap_or(params.beta),
        rho: parse_float_value(matches, RHO_ARG_NAME, "rho")?.unwrap_or(params.rho),
        q: parse_float_value(matches, DEPOSIT_ARG_NAME, "q")?.unwrap_or(params.q),
        seed: parse_int_value(matches, RANDOM_SEED_ARG_NAME, "seed")?.or(params.seed),
        parallel: matches.get_flag(PARALLEL_ARG_NAME) || params.parallel,
    })
}

fn get_telemetry_mode(matches: &ArgMatches, config: &Config) -> TelemetryMode {
    let logger: InfoLogger = Arc::new(|msg: &str| eprintln!("{msg}"));

    match create_telemetry_mode(config, logger.clone()) {
        TelemetryMode::None if matches.get_flag(LOG_ARG_NAME) => {
            TelemetryMode::OnlyLogging { logger, log_every: get_log_every(config) }
        }
        mode => mode,
    }
}
