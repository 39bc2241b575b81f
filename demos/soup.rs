use life_engine::{Simulation, SimulationConfig};
use std::{env, fs};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // An optional JSON config file as the first argument
    let config = match env::args().nth(1) {
        Some(path) => match fs::read_to_string(&path) {
            Ok(contents) => match SimulationConfig::from_json(&contents) {
                Ok(config) => config,
                Err(e) => panic!("Invalid config file {}: {}", path, e),
            },
            Err(e) => panic!("Error reading config file {}: {}", path, e),
        },
        None => SimulationConfig {
            max_generations: 200,
            seed: 42,
            ..SimulationConfig::default()
        },
    };

    let mut simulation = match Simulation::random(32, 64, config) {
        Ok(simulation) => simulation,
        Err(e) => panic!("Could not create simulation: {}", e),
    };

    let state = match simulation.run() {
        Ok(state) => state,
        Err(e) => panic!("Simulation failed: {}", e),
    };

    print!("{}", simulation.grid());
    println!(
        "\nSimulation finished after {} generations due to: {:?}",
        state.generation, state.finished_reason
    );
}
