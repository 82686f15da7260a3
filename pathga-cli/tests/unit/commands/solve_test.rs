use super::*;
use std::fs;
use tempfile::TempDir;

const ABCD_LOCATIONS_PATH: &str = "../data/json/abcd.locations.json";
const ABCD_MATRIX_PATH: &str = "../data/json/abcd.matrix.json";
const GRID_LOCATIONS_PATH: &str = "../data/csv/grid.locations.csv";
const POSTAL_IDS_PATH: &str = "../data/json/postal.ids.json";
const POSTAL_GAZETTEER_PATH: &str = "../data/json/postal.gazetteer.json";
const FULL_CONFIG_PATH: &str = "../data/config/config.full.json";

struct DummyWrite {}

impl Write for DummyWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn create_dummy_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    match out_file {
        Some(out_file) => BufWriter::new(Box::new(out_file)),
        None => BufWriter::new(Box::new(DummyWrite {})),
    }
}

fn get_matches(args: &[&str]) -> ArgMatches {
    get_solve_app().try_get_matches_from([&["solve"], args].concat()).unwrap()
}

fn run_solve_with_out_file(args: &[&str]) -> serde_json::Value {
    let tmp_dir = TempDir::new().unwrap();
    let out_path = tmp_dir.path().join("result.json");
    let out_path = out_path.to_str().unwrap();

    run_solve(&get_matches(&[args, &["-o", out_path]].concat()), create_dummy_buffer).unwrap();

    serde_json::from_str(fs::read_to_string(out_path).unwrap().as_str()).unwrap()
}

fn get_indices(path: &serde_json::Value) -> Vec<u64> {
    path["indices"].as_array().unwrap().iter().map(|idx| idx.as_u64().unwrap()).collect()
}

#[test]
fn can_solve_json_locations_with_routing_matrix() {
    let args = ["json", ABCD_LOCATIONS_PATH, "-m", ABCD_MATRIX_PATH, "-n", "100", "-p", "50", "-s", "1"];

    let output = run_solve_with_out_file(&args);

    let paths = output["paths"].as_array().unwrap();
    assert_eq!(paths.len(), 50);
    assert!(paths.iter().all(|path| get_indices(path)[0] == 0));
    assert!(paths.iter().all(|path| path["fitness"].as_f64().unwrap() >= 3.));
    assert_eq!(output["statistics"]["generations"], 100);
    assert!(output["statistics"]["serviceCalls"].as_u64().unwrap() <= 9);
}

#[cfg(feature = "csv-format")]
#[test]
fn can_solve_csv_locations_with_top_limit() {
    let args =
        ["csv", GRID_LOCATIONS_PATH, "--metric", "euclidean", "--symmetric", "--top", "3", "-n", "20", "-s", "3"];

    let output = run_solve_with_out_file(&args);

    let paths = output["paths"].as_array().unwrap();
    assert_eq!(paths.len(), 3);
    assert_eq!(paths.iter().map(|path| path["rank"].as_u64().unwrap()).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(paths[0]["ids"][0], "depot");
}

#[test]
fn can_solve_postal_codes_with_gazetteer() {
    let args =
        ["json", POSTAL_IDS_PATH, "-g", POSTAL_GAZETTEER_PATH, "--metric", "haversine", "-n", "10", "--top", "1"];

    let output = run_solve_with_out_file(&args);

    let ids = output["paths"][0]["ids"].as_array().unwrap();
    assert_eq!(ids.len(), 5);
    assert_eq!(ids[0], "75001");
    assert!(!ids.iter().any(|id| id == "99999"));
}

#[test]
fn can_override_config_with_arguments() {
    let args = ["csv", GRID_LOCATIONS_PATH, "-c", FULL_CONFIG_PATH, "-n", "5", "-p", "8"];

    let output = run_solve_with_out_file(&args);

    assert_eq!(output["paths"].as_array().unwrap().len(), 8);
    assert_eq!(output["statistics"]["generations"], 5);
}

#[test]
fn can_reproduce_result_with_same_seed() {
    let args = ["json", ABCD_LOCATIONS_PATH, "-m", ABCD_MATRIX_PATH, "-n", "20", "-p", "10", "-s", "7"];

    let first = run_solve_with_out_file(&args);
    let second = run_solve_with_out_file(&args);

    assert_eq!(first["paths"], second["paths"]);
}

#[test]
fn can_write_to_out_writer_without_out_file() {
    let matches = get_matches(&["json", ABCD_LOCATIONS_PATH, "-n", "1", "-p", "4"]);

    run_solve(&matches, create_dummy_buffer).unwrap();
}

#[test]
fn can_require_locations_path() {
    for format in &["json", "csv"] {
        get_solve_app().try_get_matches_from(vec!["solve", format]).unwrap_err();
    }
}

#[test]
fn can_reject_unknown_format_and_metric() {
    get_solve_app().try_get_matches_from(vec!["solve", "xml", ABCD_LOCATIONS_PATH]).unwrap_err();
    get_solve_app()
        .try_get_matches_from(vec!["solve", "json", ABCD_LOCATIONS_PATH, "--metric", "manhattan"])
        .unwrap_err();
}

#[test]
fn can_report_invalid_arguments() {
    for &(args, expected) in &[
        (&["json", "../data/json/unknown.json"][..], "cannot open locations file"),
        (&["json", ABCD_LOCATIONS_PATH, "-n", "many"][..], "cannot get integer value"),
        (&["json", ABCD_LOCATIONS_PATH, "-t", "soon"][..], "cannot get float value"),
        (&["json", POSTAL_IDS_PATH][..], "InsufficientLocations"),
        (&["json", ABCD_LOCATIONS_PATH, "-p", "1"][..], "InvalidConfiguration"),
        (&["json", ABCD_LOCATIONS_PATH, "-m", ABCD_LOCATIONS_PATH][..], "cannot deserialize routing matrix"),
    ] {
        let result = run_solve(&get_matches(args), create_dummy_buffer);

        let err = result.expect_err("should fail").to_string();
        assert!(err.contains(expected), "'{err}' does not contain '{expected}'");
    }
}
