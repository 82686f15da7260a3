//! Contains genetic operators and the generation loop which drives them.

mod config;
pub use self::config::*;

mod crossover;
pub use self::crossover::*;

mod driver;
pub use self::driver::*;

mod fitness;
pub use self::fitness::*;

mod initial;
pub use self::initial::*;

mod mutation;
pub use self::mutation::*;

mod selection;
pub use self::selection::*;

mod telemetry;
pub use self::telemetry::*;

mod termination;
pub use self::termination::*;
