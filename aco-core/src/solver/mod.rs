//! The ant colony optimizer: tour construction, pheromone update and the iteration loop.

mod construction;
pub use self::construction::*;

mod optimizer;
pub use self::optimizer::*;

mod params;
pub use self::params::*;

mod pheromone;
pub use self::pheromone::*;

mod selection;
pub use self::selection::*;

mod telemetry;
pub use self::telemetry::*;
