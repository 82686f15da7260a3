#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use pathga_cli::extensions::solve::config::*;
use pathga_cli::extensions::solve::formats::*;
use pathga_cli::extensions::solve::interruption::create_interruption_quota;
use pathga_core::prelude::*;
use pathga_core::utils::get_cpus;
use std::io::BufReader;
use std::sync::Arc;

const FORMAT_ARG_NAME: &str = "FORMAT";
const LOCATIONS_ARG_NAME: &str = "LOCATIONS";
const MATRIX_ARG_NAME: &str = "matrix";
const GAZETTEER_ARG_NAME: &str = "gazetteer";
const METRIC_ARG_NAME: &str = "metric";
const GENERATIONS_ARG_NAME: &str = "max-generations";
const POPULATION_ARG_NAME: &str = "population-size";
const TIME_ARG_NAME: &str = "max-time";
const TOP_ARG_NAME: &str = "top";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";
const SYMMETRIC_ARG_NAME: &str = "symmetric";
const RANDOM_SEED_ARG_NAME: &str = "seed";

type LocationReader = fn(BufReader<File>) -> Result<Vec<LocationRecord>, GenericError>;

fn get_location_reader(format: &str) -> Result<LocationReader, GenericError> {
    match format {
        "json" => Ok(read_json_locations),
        #[cfg(feature = "csv-format")]
        "csv" => Ok(read_csv_locations),
        _ => Err(format!("unknown format: '{format}'").into()),
    }
}

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Finds a short open path over given locations")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the locations file format")
                .required(true)
                .value_parser(["json", "csv"])
                .index(1),
        )
        .arg(Arg::new(LOCATIONS_ARG_NAME).help("Sets the locations file to use").required(true).index(2))
        .arg(
            Arg::new(MATRIX_ARG_NAME)
                .help("Specifies path to file with routing matrix")
                .short('m')
                .long(MATRIX_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GAZETTEER_ARG_NAME)
                .help("Specifies path to file with known locations used to resolve ids without coordinates")
                .short('g')
                .long(GAZETTEER_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(METRIC_ARG_NAME)
                .help("Specifies metric used to compute travel cost when no routing matrix is set")
                .long(METRIC_ARG_NAME)
                .required(false)
                .value_parser(["euclidean", "haversine"]),
        )
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies maximum number of generations")
                .short('n')
                .long(GENERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(POPULATION_ARG_NAME)
                .help("Specifies amount of paths in each generation")
                .short('p')
                .long(POPULATION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TOP_ARG_NAME)
                .help("Specifies how many best paths are written")
                .long(TOP_ARG_NAME)
                .required(false),
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
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(SYMMETRIC_ARG_NAME)
                .help("Specifies whether travel cost is the same in both directions")
                .long(SYMMETRIC_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
}

/// Runs solver commands.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), GenericError> {
    // required
    let format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("no format is set")?;
    let locations_path = matches.get_one::<String>(LOCATIONS_ARG_NAME).ok_or("no locations file is set")?;

    // optional
    let max_generations = parse_int_value::<usize>(matches, GENERATIONS_ARG_NAME, "max generations")?;
    let population_size = parse_int_value::<usize>(matches, POPULATION_ARG_NAME, "population size")?;
    let max_time = parse_float_value::<f64>(matches, TIME_ARG_NAME, "max time")?;
    let top = parse_int_value::<usize>(matches, TOP_ARG_NAME, "top paths")?;
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "random seed")?;
    let is_logging = matches.get_flag(LOG_ARG_NAME);
    let is_symmetric = matches.get_flag(SYMMETRIC_ARG_NAME);

    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };

    let mut routing = config.routing.take().unwrap_or_default();
    if let Some(metric) = matches.get_one::<String>(METRIC_ARG_NAME) {
        routing.metric = Some(MetricType::try_from(metric.as_str())?);
    }
    if is_symmetric {
        routing.symmetric = Some(true);
    }
    config.routing = Some(routing);

    let environment = Arc::new(create_environment(&config, seed, is_logging)?);

    let location_reader = get_location_reader(format)?;
    let records = location_reader(BufReader::new(open_file(locations_path, "locations")?))?;
    let gazetteer = matches
        .get_one::<String>(GAZETTEER_ARG_NAME)
        .map(|path| open_file(path, "gazetteer").and_then(|file| read_gazetteer(BufReader::new(file))))
        .transpose()?;
    let locations = resolve_locations(records, gazetteer, &environment.logger)?;

    let matrix = matches
        .get_one::<String>(MATRIX_ARG_NAME)
        .map(|path| open_file(path, "routing matrix").and_then(|file| read_routing_matrix(BufReader::new(file))))
        .transpose()?;
    let service = create_travel_cost_service(config.routing.as_ref(), matrix)?;

    let mut builder = create_builder_from_config(locations, service, environment, &config);
    if max_generations.is_some() {
        builder = builder.with_max_generations(max_generations);
    }
    if max_time.is_some() {
        builder = builder.with_max_time(max_time);
    }
    if let Some(population_size) = population_size {
        builder = builder.with_population_size(population_size);
    }

    let solver = builder.build()?;
    let locations = solver.locations().clone();
    let solution = solver.solve()?;

    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    write_solution(out_writer_func(out_file), &locations, &solution, top)
}

fn create_environment(config: &Config, seed: Option<u64>, is_logging: bool) -> Result<Environment, GenericError> {
    let environment_config = config.environment.as_ref();

    let random: Arc<dyn Random + Send + Sync> =
        match seed.or_else(|| environment_config.and_then(|environment| environment.seed)) {
            Some(seed) => Arc::new(DefaultRandom::new_with_seed(seed)),
            None => Arc::new(DefaultRandom::default()),
        };
    let parallelism = environment_config.and_then(|environment| environment.parallelism).unwrap_or_else(get_cpus);
    let logger: InfoLogger = if is_logging { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_: &str| {}) };
    let quota = create_interruption_quota()?;

    Ok(Environment::new(random, Some(quota), parallelism, logger))
}
