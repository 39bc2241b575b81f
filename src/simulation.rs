use crate::config::SimulationConfig;
use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crossterm::{
    cursor::Hide,
    execute,
    terminal::{Clear, ClearType},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::stdout;
use tracing::{debug, info};
use uuid::Uuid;

/// A run of the Game of Life.
/// Main entry point for driving a grid through successive generations.
pub struct Simulation {
    id: String,
    initial_grid: Grid,
    grid: Grid,
    config: SimulationConfig,
    generation: usize,
    started: bool,
    finished: bool,
    finished_reason: Option<FinishedReason>,
}

/// Represents the state of the simulation after a generation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    /// The current generation, 0 being the initial configuration.
    pub generation: usize,
    /// The number of live cells.
    pub population: usize,
    /// The coordinates of every live cell, in row-major order.
    pub live_cells: Vec<(usize, usize)>,
    /// Whether the simulation has finished.
    pub finished: bool,
    /// The reason the simulation finished. `None` if it has not finished.
    pub finished_reason: Option<FinishedReason>,
}

/// Represents the reason the simulation finished.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FinishedReason {
    /// Every cell is dead.
    Extinct,
    /// The last generation was identical to the one before it.
    StillLife,
    /// The maximum number of generations was reached.
    GenerationLimitReached,
}

impl Simulation {
    /// Creates a new simulation.
    ///
    /// # Arguments
    /// * `grid` - The initial configuration.
    /// * `config` - The settings for the run.
    pub fn new(grid: Grid, config: SimulationConfig) -> Simulation {
        Simulation {
            id: Uuid::new_v4().to_string(),
            initial_grid: grid.clone(),
            grid,
            config,
            generation: 0,
            started: false,
            finished: false,
            finished_reason: None,
        }
    }

    /// Creates a new simulation on a randomly seeded grid.
    ///
    /// The grid is seeded from `config.seed` with `config.density`.
    pub fn random(rows: usize, cols: usize, config: SimulationConfig) -> Result<Simulation> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let grid = Grid::random(rows, cols, config.density, &mut rng)?;
        Ok(Simulation::new(grid, config))
    }

    /// Starts the simulation from its initial configuration.
    ///
    /// Must be called once before updating. Calling it again restarts the run.
    /// With `max_generations` set to 0 the run is finished right away.
    pub fn start(&mut self) -> SimulationState {
        self.generation = 0;
        self.started = true;
        self.finished = false;
        self.finished_reason = None;
        self.grid = self.initial_grid.clone();

        info!(
            id = %self.id,
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            population = self.grid.population(),
            "Starting simulation"
        );

        if self.config.max_generations == 0 {
            self.finished = true;
            self.finished_reason = Some(FinishedReason::GenerationLimitReached);
            self.finish();
        }

        self.state()
    }

    /// Advances the simulation by one generation.
    pub fn update(&mut self) -> Result<SimulationState> {
        if !self.started {
            return Err(LifeError::NotStarted);
        }

        if self.finished {
            return Err(LifeError::AlreadyFinished);
        }

        let previous = self.grid.clone();
        self.grid.update();
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "Computed generation"
        );

        self.check_for_end(&previous);

        if self.finished {
            self.finish();
        }

        Ok(self.state())
    }

    /// Starts the simulation and updates it until it finishes.
    pub fn run(&mut self) -> Result<SimulationState> {
        let mut state = self.start();
        while !state.finished {
            state = self.update()?;
        }
        Ok(state)
    }

    /// Draws the current generation to the console.
    pub fn draw(&self) -> Result<()> {
        let mut stdout = stdout();
        execute!(stdout, Clear(ClearType::All), Hide)?;
        self.grid.draw(&mut stdout, self.generation)?;
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn state(&self) -> SimulationState {
        SimulationState {
            generation: self.generation,
            population: self.grid.population(),
            live_cells: self.grid.live_cells(),
            finished: self.finished,
            finished_reason: self.finished_reason.clone(),
        }
    }
}

impl Simulation {
    fn check_for_end(&mut self, previous: &Grid) {
        let reason = if self.grid.population() == 0 {
            Some(FinishedReason::Extinct)
        } else if self.config.stop_when_stable && self.grid == *previous {
            Some(FinishedReason::StillLife)
        } else if self.generation >= self.config.max_generations {
            Some(FinishedReason::GenerationLimitReached)
        } else {
            None
        };

        if reason.is_some() {
            self.finished = true;
            self.finished_reason = reason;
        }
    }

    fn finish(&self) {
        info!(
            id = %self.id,
            generation = self.generation,
            reason = ?self.finished_reason,
            "Simulation finished"
        );
    }
}
