use crate::types::{InfoMessage, WorkoutKind};

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;
/// Stride length for land workouts, in metres.
pub const LEN_STEP: f64 = 0.65;

/// Readings shared by every workout type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Steps or strokes counted by the sensor.
    pub action: u32,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl Session {
    pub const fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// A workout that can report distance, speed and energy spent.
///
/// `spent_calories` has no default: each workout type brings its own model.
pub trait Training: Send + Sync {
    /// Tag used to label reports.
    fn kind(&self) -> WorkoutKind;

    /// Readings shared by every workout type.
    fn session(&self) -> &Session;

    /// Metres covered by one action.
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km.
    fn distance_km(&self) -> f64 {
        f64::from(self.session().action) * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration
    }

    /// Energy spent in kcal.
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind(),
            duration: self.session().duration,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub const fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let Session {
            duration, weight, ..
        } = self.session;
        (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed_kmh() - Self::CALORIES_SPEED_SHIFT)
            * weight
            / M_IN_KM
            * duration
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    session: Session,
    /// Centimetres.
    height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub const fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
            height,
        }
    }

    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let Session {
            duration, weight, ..
        } = self.session;
        // Floor division: the speed/height term is discretised.
        let speed_term = self.mean_speed_kmh().powi(2).div_euclid(self.height);
        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_term * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * duration
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    session: Session,
    /// Metres.
    length_pool: f64,
    /// Laps.
    count_pool: f64,
}

impl Swimming {
    /// Stroke length in metres.
    pub const LEN_STEP: f64 = 1.38;
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub const fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            session: Session::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }

    pub const fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub const fn count_pool(&self) -> f64 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    /// Derived from pool geometry, not from the stroke count.
    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.session.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight
    }
}
