#![allow(non_snake_case)]

use fastKneedle::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

const TOLERANCE: f64 = 1e-5;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    params: Params,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expected: Option<Vec<[f64; 2]>>,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    points: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    sensitivity: f64,
    smoothing_window: usize,
    find_elbows: bool,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    points: Vec<[f64; 2]>,
    indices: Vec<usize>,
    candidates: Vec<usize>,
    passed: Option<bool>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let input_dir = root.join("../data");
    let output_dir = root.join("../output/fastKneedle");

    if !input_dir.exists() {
        eprintln!("Input directory {:?} does not exist.", input_dir);
        return Ok(());
    }

    fs::create_dir_all(&output_dir)?;

    let mut paths: Vec<PathBuf> = fs::read_dir(&input_dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    paths.retain(|p| p.extension().and_then(|s| s.to_str()) == Some("json"));
    paths.sort();

    let mut failures = Vec::new();
    for path in &paths {
        let data = process_file(path, &output_dir)?;
        let status = match data.result.passed {
            Some(true) => "PASS",
            Some(false) => {
                failures.push(data.name.clone());
                "FAIL"
            }
            None => "DONE",
        };
        println!(
            "{:<28} {:>4}  confirmed={:?}",
            data.name, status, data.result.indices
        );
    }

    if failures.is_empty() {
        println!("{} case(s) processed", paths.len());
        Ok(())
    } else {
        Err(format!("mismatched cases: {}", failures.join(", ")).into())
    }
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<ValidationData, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let detector = Kneedle::new()
        .sensitivity(data.params.sensitivity)
        .smoothing_window(data.params.smoothing_window)
        .find_elbows(data.params.find_elbows)
        .parallel(true)
        .build()?;

    let result = detector.fit(&data.input.points)?;

    data.result.points = result.points.iter().map(|p| p.coords()).collect();
    data.result.indices = result.indices;
    data.result.candidates = result.candidates;
    data.result.passed = data
        .expected
        .as_ref()
        .map(|expected| matches_expected(&data.result.points, expected));

    let file_name = input_path
        .file_name()
        .ok_or_else(|| format!("no file name in {:?}", input_path))?;
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_dir.join(file_name), output_json)?;

    Ok(data)
}

fn matches_expected(actual: &[[f64; 2]], expected: &[[f64; 2]]) -> bool {
    actual.len() == expected.len()
        && actual.iter().zip(expected).all(|(a, e)| {
            (a[0] - e[0]).abs() <= TOLERANCE && (a[1] - e[1]).abs() <= TOLERANCE
        })
}
