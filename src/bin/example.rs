//! Beam Solver Example - reference load cases

use beam_deflection::prelude::*;

fn print_summary(title: &str, result: &BeamSolution) {
    println!("=== {title} ===");

    println!("Unknowns:");
    for (unknown, value) in result.solution.iter() {
        println!("  {unknown:>6} = {value:12.4}");
    }

    let summary = result.summary();
    println!("Summary:");
    println!("  Max shear:      {:10.4} at x = {:.3}", summary.max_shear, summary.max_shear_x);
    println!("  Max moment:     {:10.4} at x = {:.3}", summary.max_moment, summary.max_moment_x);
    println!(
        "  Max deflection: {:10.6} at x = {:.3}",
        summary.max_deflection, summary.max_deflection_x
    );
    println!("  Grid points: {}, unknowns: {}\n", summary.num_grid_points, summary.num_unknowns);
}

fn main() -> BeamResult<()> {
    env_logger::init();
    let options = AnalysisOptions::with_grid_points(100);

    // Uniform load on two pins
    //
    //   ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓
    //   ===============
    //   ^             ^
    let mut simple = Beam::new(5.0, 10.0, 60.0)?;
    simple.set_continuous_load(ContinuousLoad::uniform(-4.0));
    simple.add_pin(0.0)?;
    simple.add_pin(5.0)?;
    let result = simple.solve(&options)?;
    print_summary("Uniform load, pin-pin (L = 5, EI = 600, w = -4)", &result);
    if let Some(y) = result.deflection_at(2.5) {
        println!("Deflection at midspan: {y:.6}\n");
    }

    // Cantilever with a point load at midspan
    //
    //   |        ↓
    //   |=================
    //   |
    let mut cantilever = Beam::new(10.0, 1.0, 100.0)?.with_anchors(Anchor::Fixed, Anchor::Free);
    cantilever.add_point_load(5.0, 100.0)?;
    print_summary("Cantilever, P = 100 at x = 5", &cantilever.solve(&options)?);

    // Point load between two pins
    let mut two_pin = Beam::new(10.0, 1.0, 100.0)?;
    two_pin.add_pin(0.0)?;
    two_pin.add_pin(10.0)?;
    two_pin.add_point_load(4.0, 100.0)?;
    print_summary("Two pins, P = 100 at x = 4", &two_pin.solve(&options)?);

    // An unsupported beam cannot be solved
    let mut floating = Beam::new(10.0, 1.0, 100.0)?;
    floating.add_point_load(5.0, 1.0)?;
    match floating.solve(&options) {
        Ok(_) => println!("Unexpectedly solved a floating beam"),
        Err(err) => println!("Floating beam: {err}"),
    }

    Ok(())
}
