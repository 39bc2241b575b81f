use life_engine::{patterns, Grid, Simulation, SimulationConfig};
use std::env;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // The pattern to draw, by name, as the first argument
    let name = env::args().nth(1).unwrap_or_else(|| "glider".to_string());
    let pattern = match patterns::find(&name) {
        Some(pattern) => pattern,
        None => panic!("Unknown pattern: {}", name),
    };

    let mut grid = match Grid::new(12, 24) {
        Ok(grid) => grid,
        Err(e) => panic!("Could not create grid: {}", e),
    };
    grid.place(pattern, 4, 10);

    let mut simulation = Simulation::new(grid, SimulationConfig::default());
    simulation.start();

    if let Err(e) = simulation.draw() {
        panic!("Could not draw simulation: {}", e);
    }
}
