use crate::dlog;
use crate::error::{WorkoutError, WorkoutResult};
use crate::training::{Running, SportsWalking, Swimming, Training};
use crate::types::WorkoutKind;

/// Build the workout a sensor package describes.
///
/// `data` is bound positionally to the workout's readings
/// (see [`WorkoutKind::field_names`]); its length must match exactly.
pub fn read_package(workout_type: &str, data: &[f64]) -> WorkoutResult<Box<dyn Training>> {
    let kind: WorkoutKind = workout_type.parse()?;
    let training: Box<dyn Training> = match kind {
        WorkoutKind::Running => Box::new(parse_running(data)?),
        WorkoutKind::SportsWalking => Box::new(parse_sports_walking(data)?),
        WorkoutKind::Swimming => Box::new(parse_swimming(data)?),
    };
    dlog!("package_read type={workout_type} kind={kind} readings={data:?}");
    Ok(training)
}

fn parse_running(data: &[f64]) -> WorkoutResult<Running> {
    let &[action, duration, weight] = data else {
        return Err(arity(WorkoutKind::Running, data));
    };
    Ok(Running::new(
        action_count(action)?,
        positive("duration", duration)?,
        non_negative("weight", weight)?,
    ))
}

fn parse_sports_walking(data: &[f64]) -> WorkoutResult<SportsWalking> {
    let &[action, duration, weight, height] = data else {
        return Err(arity(WorkoutKind::SportsWalking, data));
    };
    Ok(SportsWalking::new(
        action_count(action)?,
        positive("duration", duration)?,
        non_negative("weight", weight)?,
        positive("height", height)?,
    ))
}

fn parse_swimming(data: &[f64]) -> WorkoutResult<Swimming> {
    let &[action, duration, weight, length_pool, count_pool] = data else {
        return Err(arity(WorkoutKind::Swimming, data));
    };
    Ok(Swimming::new(
        action_count(action)?,
        positive("duration", duration)?,
        non_negative("weight", weight)?,
        positive("length_pool", length_pool)?,
        non_negative("count_pool", count_pool)?,
    ))
}

const fn arity(kind: WorkoutKind, data: &[f64]) -> WorkoutError {
    WorkoutError::ArityMismatch {
        kind,
        expected: kind.arity(),
        actual: data.len(),
    }
}

fn finite(field: &'static str, value: f64) -> WorkoutResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidReading {
            field,
            value,
            reason: "not a finite number",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> WorkoutResult<f64> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(WorkoutError::InvalidReading {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}

fn positive(field: &'static str, value: f64) -> WorkoutResult<f64> {
    let value = finite(field, value)?;
    if value <= 0.0 {
        return Err(WorkoutError::InvalidReading {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn action_count(value: f64) -> WorkoutResult<u32> {
    let value = non_negative("action", value)?;
    if value.fract() != 0.0 {
        return Err(WorkoutError::InvalidReading {
            field: "action",
            value,
            reason: "must be a whole number",
        });
    }
    if value > f64::from(u32::MAX) {
        return Err(WorkoutError::InvalidReading {
            field: "action",
            value,
            reason: "out of range",
        });
    }
    // Whole, non-negative and within range: the cast is exact.
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_codes_to_variants() {
        let cases: [(&str, &[f64], WorkoutKind); 3] = [
            ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0], WorkoutKind::Swimming),
            ("RUN", &[1500.0, 1.0, 75.0], WorkoutKind::Running),
            ("WLK", &[9000.0, 1.0, 75.0, 180.0], WorkoutKind::SportsWalking),
        ];
        for (code, data, kind) in cases {
            let w = read_package(code, data).unwrap();
            assert_eq!(w.kind(), kind);
            assert_eq!(w.show_training_info().training_type, kind);
        }
    }

    #[test]
    fn binds_readings_in_declaration_order() {
        let w = read_package("SWM", &[720.0, 2.0, 80.0, 25.0, 40.0]).unwrap();
        let s = w.session();
        assert_eq!(s.action, 720);
        assert_eq!(s.duration, 2.0);
        assert_eq!(s.weight, 80.0);
        assert!((w.mean_speed_kmh() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn unknown_code_is_rejected() {
        for code in ["XYZ", "", "run", "SWIM"] {
            assert_eq!(
                read_package(code, &[1.0, 1.0, 1.0]).err(),
                Some(WorkoutError::UnknownWorkoutType(code.to_string()))
            );
        }
    }

    #[test]
    fn too_few_readings_never_default() {
        assert_eq!(
            read_package("RUN", &[1.0, 2.0]).err(),
            Some(WorkoutError::ArityMismatch {
                kind: WorkoutKind::Running,
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn too_many_readings_are_rejected() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]).err();
        assert!(matches!(
            err,
            Some(WorkoutError::ArityMismatch {
                expected: 4,
                actual: 5,
                ..
            })
        ));
    }

    #[test]
    fn duration_must_be_positive() {
        for duration in [0.0, -1.0] {
            let err = read_package("RUN", &[1500.0, duration, 75.0]).err();
            assert!(matches!(
                err,
                Some(WorkoutError::InvalidReading {
                    field: "duration",
                    ..
                })
            ));
        }
    }

    #[test]
    fn rejects_unusable_numbers() {
        let bad: [(&str, &[f64], &str); 6] = [
            ("RUN", &[f64::NAN, 1.0, 75.0], "action"),
            ("RUN", &[1500.5, 1.0, 75.0], "action"),
            ("RUN", &[-3.0, 1.0, 75.0], "action"),
            ("RUN", &[1500.0, 1.0, f64::INFINITY], "weight"),
            ("WLK", &[9000.0, 1.0, 75.0, 0.0], "height"),
            ("SWM", &[720.0, 1.0, 80.0, -25.0, 40.0], "length_pool"),
        ];
        for (code, data, expected) in bad {
            match read_package(code, data) {
                Err(WorkoutError::InvalidReading { field, .. }) => assert_eq!(field, expected),
                Err(other) => panic!("{code} {data:?}: unexpected error {other}"),
                Ok(_) => panic!("{code} {data:?}: accepted"),
            }
        }
    }

    #[test]
    fn action_count_bounds() {
        assert_eq!(action_count(0.0), Ok(0));
        assert_eq!(action_count(f64::from(u32::MAX)), Ok(u32::MAX));
        assert!(action_count(f64::from(u32::MAX) + 1.0).is_err());
    }
}
