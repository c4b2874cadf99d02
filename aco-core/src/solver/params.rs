#[cfg(test)]
#[path = "../../tests/unit/solver/params_test.rs"]
mod params_test;

use crate::utils::{Float, InvalidParameterError};

/// Parameters of the Ant System algorithm.
#[derive(Clone, Debug, PartialEq)]
pub struct AcoParams {
    /// Amount of ants constructing a tour on each iteration.
    pub ant_count: usize,
    /// Pheromone influence exponent (α).
    pub alpha: Float,
    /// Heuristic (inverse distance) influence exponent (β).
    pub beta: Float,
    /// Evaporation rate (ρ), in (0, 1) range.
    pub rho: Float,
    /// Deposit constant (Q): a tour of length `L` deposits `Q / L` on its edges.
    pub q: Float,
    /// Random seed which makes runs reproducible.
    pub seed: Option<u64>,
    /// Constructs ants of one iteration in parallel. Results do not depend on this flag.
    pub parallel: bool,
}

impl Default for AcoParams {
    fn default() -> Self {
        Self { ant_count: 10, alpha: 1., beta: 3., rho: 0.3, q: 100., seed: None, parallel: false }
    }
}

impl AcoParams {
    /// Sets amount of ants.
    pub fn with_ant_count(mut self, ant_count: usize) -> Self {
        self.ant_count = ant_count;
        self
    }

    /// Sets pheromone influence exponent (α).
    pub fn with_alpha(mut self, alpha: Float) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets heuristic influence exponent (β).
    pub fn with_beta(mut self, beta: Float) -> Self {
        self.beta = beta;
        self
    }

    /// Sets evaporation rate (ρ).
    pub fn with_rho(mut self, rho: Float) -> Self {
        self.rho = rho;
        self
    }

    /// Sets deposit constant (Q).
    pub fn with_q(mut self, q: Float) -> Self {
        self.q = q;
        self
    }

    /// Sets random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel tour construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks that parameters are within their domains.
    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        if self.ant_count < 1 {
            return Err(InvalidParameterError::AntCount(self.ant_count));
        }

        // NOTE negated comparison rejects NaN as well
        if !(self.rho > 0. && self.rho < 1.) {
            return Err(InvalidParameterError::EvaporationRate(self.rho));
        }

        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !value.is_finite() || value < 0. {
                return Err(InvalidParameterError::Exponent { name, value });
            }
        }

        if !self.q.is_finite() || self.q <= 0. {
            return Err(InvalidParameterError::DepositConstant(self.q));
        }

        Ok(())
    }
}
