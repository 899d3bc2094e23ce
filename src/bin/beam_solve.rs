//! Beam solver CLI: reads a JSON beam definition, prints JSON results
//!
//! Usage: `beam-solve <beam.json | ->`. Set `RUST_LOG=debug` to trace the solve.

use std::collections::BTreeMap;
use std::io::Read;

use anyhow::{Context, Result};
use serde::Serialize;

use beam_deflection::prelude::*;

#[derive(Debug, Serialize)]
struct SolveResponse<'a> {
    solution: BTreeMap<String, f64>,
    summary: AnalysisSummary,
    grid: &'a [FieldPoint],
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("reading beam definition from stdin")?;
        Ok(json)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {path}"))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: beam-solve <beam.json | ->")?;
    let json = read_input(&path)?;

    let definition =
        BeamDefinition::from_json(&json).with_context(|| format!("parsing {path}"))?;
    let beam = definition.to_beam().context("invalid beam definition")?;

    log::info!(
        "solving {} m beam ({} / {}) with {} point loads and {} pins",
        beam.length(),
        beam.anchor_left(),
        beam.anchor_right(),
        beam.point_loads().count(),
        beam.pins().count()
    );

    let result = beam.solve(&definition.options).context("analysis failed")?;

    let response = SolveResponse {
        solution: result.solution.to_map(),
        summary: result.summary(),
        grid: &result.grid,
    };
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
