//! Distance, mean speed and calorie reports for running, sports walking and
//! swimming sensor packages.

pub mod cli;
pub mod error;
pub mod input;
pub mod package;
pub mod report;
pub mod training;
pub mod types;
pub mod utils;

pub use error::{WorkoutError, WorkoutResult};
pub use input::Package;
pub use package::read_package;
pub use training::{Running, Session, SportsWalking, Swimming, Training};
pub use types::{InfoMessage, WorkoutKind};
