#[cfg(test)]
#[path = "../../tests/unit/solver/optimizer_test.rs"]
mod optimizer_test;

use super::*;
use crate::algorithms::statistics::get_mean_iter;
use crate::models::{DistanceMatrix, IterationRecord, PheromoneMatrix, Solution, Tour};
use crate::utils::{DefaultRandom, Float, InvalidParameterError, compare_floats_refs, parallel_into_collect};

/// Specifies a state of the optimizer run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// No run has been started yet.
    NotStarted,
    /// A run is in progress, the value is the number of the last finished iteration.
    Running(usize),
    /// The last run is completed.
    Completed,
}

/// An Ant System optimizer which searches for a short closed tour through all locations.
///
/// The optimizer owns a copy of the distance matrix, its pheromone matrix and its random
/// generator. Pheromone persists across runs of the same instance: only a new instance starts
/// from the uniform initial level.
pub struct AcoOptimizer {
    distances: DistanceMatrix,
    pheromone: PheromoneMatrix,
    params: AcoParams,
    random: DefaultRandom,
    telemetry: Telemetry,
    state: RunState,
    best: Option<Tour>,
    history: Vec<IterationRecord>,
}

impl AcoOptimizer {
    /// Creates a new optimizer copying given distance matrix rows.
    pub fn new(distances: &[Vec<Float>], params: AcoParams) -> Result<Self, InvalidParameterError> {
        Self::from_matrix(DistanceMatrix::new(distances)?, params)
    }

    /// Creates a new optimizer using the distance matrix.
    pub fn from_matrix(distances: DistanceMatrix, params: AcoParams) -> Result<Self, InvalidParameterError> {
        params.validate()?;

        Ok(Self {
            pheromone: PheromoneMatrix::new(distances.size()),
            random: DefaultRandom::new(params.seed),
            telemetry: Telemetry::new(TelemetryMode::None),
            state: RunState::NotStarted,
            best: None,
            history: vec![],
            distances,
            params,
        })
    }

    /// Sets telemetry mode.
    pub fn with_telemetry(mut self, mode: TelemetryMode) -> Self {
        self.telemetry = Telemetry::new(mode);
        self
    }

    /// Starts a new run and performs given amount of iterations. Returns the best tour found,
    /// its length and per iteration statistics.
    ///
    /// With zero iterations, the returned tour is empty and its length is infinite.
    pub fn run(&mut self, iterations: usize) -> Solution {
        self.start(Some(iterations));

        for _ in 0..iterations {
            self.iterate();
        }

        self.finish()
    }

    /// Performs one iteration of the current run, starting a new run if none is in progress.
    /// Every ant builds a tour, the best-so-far tour is updated, then pheromone is updated
    /// from all tours of the iteration.
    pub fn iterate(&mut self) -> IterationRecord {
        let iteration = match self.state {
            RunState::Running(last) => last + 1,
            RunState::NotStarted | RunState::Completed => {
                self.start(None);
                1
            }
        };

        let constructed = self.construct_tours();
        let fallbacks = constructed.iter().map(|constructed| constructed.fallbacks).sum::<usize>();
        let tours = constructed.into_iter().map(|constructed| constructed.tour).collect::<Vec<_>>();

        for tour in tours.iter() {
            if self.best.as_ref().is_none_or(|best| tour.length() < best.length()) {
                self.best = Some(tour.clone());
            }
        }

        update_pheromone(&mut self.pheromone, tours.iter(), self.params.rho, self.params.q);

        let record = IterationRecord {
            iteration,
            best_distance: self.best.as_ref().map_or(Float::INFINITY, Tour::length),
            average_distance: get_mean_iter(tours.iter().map(Tour::length)),
            worst_distance: tours.iter().map(Tour::length).max_by(compare_floats_refs).unwrap_or(Float::INFINITY),
        };

        self.history.push(record);
        self.state = RunState::Running(iteration);
        self.telemetry.on_iteration(&record, fallbacks);

        record
    }

    /// Completes the current run and returns its result.
    pub fn finish(&mut self) -> Solution {
        let solution = Solution {
            tour: self.best.as_ref().map(|best| best.nodes().to_vec()).unwrap_or_default(),
            length: self.best.as_ref().map_or(Float::INFINITY, Tour::length),
            history: self.history.clone(),
        };

        self.state = RunState::Completed;
        self.telemetry.on_finish(&solution);

        solution
    }

    /// Returns the state of the run.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Returns the best tour found within the current or last run.
    pub fn best(&self) -> Option<&Tour> {
        self.best.as_ref()
    }

    /// Returns statistics of the current or last run.
    pub fn history(&self) -> &[IterationRecord] {
        self.history.as_slice()
    }

    /// Returns the distance matrix used by optimizer.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Returns current pheromone levels.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// Returns algorithm parameters.
    pub fn params(&self) -> &AcoParams {
        &self.params
    }

    /// Returns telemetry metrics of the current or last run.
    pub fn metrics(&self) -> &TelemetryMetrics {
        self.telemetry.metrics()
    }

    fn start(&mut self, iterations: Option<usize>) {
        self.best = None;
        self.history.clear();
        self.state = RunState::Running(0);
        self.telemetry.on_start(self.distances.size(), &self.params, iterations);
    }

    /// Builds one tour per ant. Each ant gets its own generator forked from the optimizer's one
    /// in ant order, so the result does not depend on whether ants are built in parallel.
    fn construct_tours(&mut self) -> Vec<ConstructedTour> {
        let randoms = (0..self.params.ant_count).map(|_| self.random.fork()).collect::<Vec<_>>();

        let ctx = SelectionContext {
            distances: &self.distances,
            pheromone: &self.pheromone,
            alpha: self.params.alpha,
            beta: self.params.beta,
        };

        if self.params.parallel {
            parallel_into_collect(randoms, |mut random| construct_tour(&ctx, &mut random))
        } else {
            randoms.into_iter().map(|mut random| construct_tour(&ctx, &mut random)).collect()
        }
    }
}
