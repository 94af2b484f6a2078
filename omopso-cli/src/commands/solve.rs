#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction, Command};
use omopso_cli::extensions::solve::config::*;
use omopso_cli::extensions::solve::result::write_result;
use omopso_cli::omopso::prelude::*;
use omopso_cli::omopso::problems::get_problem_by_name;
use std::io::BufReader;
use std::sync::Arc;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const VARIABLES_ARG_NAME: &str = "variables";
const CONFIG_ARG_NAME: &str = "config";
const ITERATIONS_ARG_NAME: &str = "max-iterations";
const EVALUATIONS_ARG_NAME: &str = "max-evaluations";
const TIME_ARG_NAME: &str = "max-time";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const PARALLEL_ARG_NAME: &str = "parallel";
const LOG_ARG_NAME: &str = "log";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves a multi-objective benchmark problem")
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Specifies the problem to solve")
                .required(true)
                .value_parser(["zdt1", "zdt2", "schaffer"])
                .index(1),
        )
        .arg(
            Arg::new(VARIABLES_ARG_NAME)
                .help("Specifies amount of decision variables of scalable problems")
                .long(VARIABLES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to optimizer configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies maximum number of iterations")
                .short('n')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(EVALUATIONS_ARG_NAME)
                .help("Specifies maximum number of objective evaluations")
                .short('e')
                .long(EVALUATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time optimizer runs in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PARALLEL_ARG_NAME)
                .help("Specifies whether particles are evaluated in parallel")
                .long(PARALLEL_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

/// Runs solve command.
pub fn run_solve<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), GenericError>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let problem_name = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem is not specified")?;
    let variables = parse_int_value::<usize>(matches, VARIABLES_ARG_NAME, "variables")?;

    let mut config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();
    override_config(&mut config, matches)?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_result = out_result.transpose()?;

    let problem = get_problem_by_name(problem_name, variables)?;
    let environment = Arc::new(create_environment_from_config(&config, Arc::new(|msg: &str| println!("{msg}"))));
    let omopso_config = create_builder_from_config(&config, environment.logger.clone()).build(problem.as_ref())?;
    let termination = create_termination_from_config(&config, omopso_config.max_iterations());

    let result = Omopso::new(problem.clone(), omopso_config, environment)?
        .solve(&termination)
        .map_err(|err| format!("cannot solve '{problem_name}': '{err}'"))?;

    write_result(out_writer_func(out_result), problem.name(), &result)
}

/// Applies command line arguments on top of the config.
fn override_config(config: &mut Config, matches: &ArgMatches) -> Result<(), GenericError> {
    let max_iterations = parse_int_value::<usize>(matches, ITERATIONS_ARG_NAME, "max iterations")?;
    let max_evaluations = parse_int_value::<usize>(matches, EVALUATIONS_ARG_NAME, "max evaluations")?;
    let max_time = parse_float_value::<f64>(matches, TIME_ARG_NAME, "max time")?;
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")?;

    if max_iterations.is_some() || max_evaluations.is_some() || max_time.is_some() {
        let termination = config.termination.get_or_insert_with(TerminationConfig::default);
        termination.max_iterations = max_iterations.or(termination.max_iterations);
        termination.max_evaluations = max_evaluations.or(termination.max_evaluations);
        termination.max_time = max_time.or(termination.max_time);
    }

    if seed.is_some() || matches.get_flag(PARALLEL_ARG_NAME) {
        let environment = config.environment.get_or_insert_with(EnvironmentConfig::default);
        environment.seed = seed.or(environment.seed);
        environment.parallel = matches.get_flag(PARALLEL_ARG_NAME).then_some(true).or(environment.parallel);
    }

    if matches.get_flag(LOG_ARG_NAME) {
        let telemetry = config.telemetry.get_or_insert_with(TelemetryConfig::default);
        let logging = telemetry.logging.get_or_insert_with(LoggingConfig::default);
        logging.enabled = true;
    }

    Ok(())
}
