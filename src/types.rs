use crate::error::WorkoutError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The three workout types a sensor package can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Short type code sent by the sensor.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Label used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Reading names in the order a package carries them.
    pub const fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::Running => &["action", "duration", "weight"],
            Self::SportsWalking => &["action", "duration", "weight", "height"],
            Self::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
        }
    }

    pub const fn arity(self) -> usize {
        self.field_names().len()
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType(code.to_string()))
    }
}

/// Summary of one workout, ready to be reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: WorkoutKind,
    /// Hours.
    pub duration: f64,
    /// Kilometres.
    pub distance: f64,
    /// km/h.
    pub speed: f64,
    /// kcal.
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            training_type,
            duration,
            distance,
            speed,
            calories,
        } = self;
        write!(
            f,
            "Workout type: {training_type}; \
             Duration: {duration:.3} h.; \
             Distance: {distance:.3} km; \
             Mean speed: {speed:.3} km/h; \
             Calories burned: {calories:.3}."
        )
    }
}
