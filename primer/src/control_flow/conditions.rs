//! Decision kernels from the conditions exercises.

use serde::Serialize;

use super::arithmetic::divide;
use super::branching::branching;
use crate::error::ExerciseError;

pub const PARKING_FIRST_HOUR: f64 = 2.0;
pub const PARKING_EXTRA_HOUR: f64 = 1.50;

/// Divisible by 400, or divisible by 4 and not by 100.
pub fn is_leap_year(year: i64) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuadraticRoots {
    Two { x1: f64, x2: f64, discriminant: f64 },
    Double { x: f64 },
    Complex { discriminant: f64 },
}

/// Real roots of `a x^2 + b x + c = 0`, selected by the sign of the
/// discriminant `b^2 - 4ac`.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<QuadraticRoots, ExerciseError> {
    if a == 0.0 {
        return Err(ExerciseError::NotQuadratic);
    }
    let discriminant = b * b - 4.0 * a * c;
    let roots = if discriminant > 0.0 {
        let root = discriminant.sqrt();
        QuadraticRoots::Two {
            x1: (-b + root) / (2.0 * a),
            x2: (-b - root) / (2.0 * a),
            discriminant,
        }
    } else if discriminant == 0.0 {
        QuadraticRoots::Double { x: -b / (2.0 * a) }
    } else {
        QuadraticRoots::Complex { discriminant }
    };
    Ok(roots)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

/// `weight / height^2`; both measurements must be positive.
pub fn bmi(weight_kg: f64, height_m: f64) -> Result<f64, ExerciseError> {
    if weight_kg.is_nan() || weight_kg <= 0.0 {
        return Err(ExerciseError::InvalidMeasurement { name: "weight", value: weight_kg });
    }
    if height_m.is_nan() || height_m <= 0.0 {
        return Err(ExerciseError::InvalidMeasurement { name: "height", value: height_m });
    }
    Ok(weight_kg / (height_m * height_m))
}

/// Four-function calculator keyed on the operator character.
pub fn calculate(a: f64, op: char, b: f64) -> Result<f64, ExerciseError> {
    match op {
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        '*' => Ok(a * b),
        '/' => divide(a, b),
        other => Err(ExerciseError::UnknownOperator(other)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParkingCharge {
    pub hours: u32,
    pub cost: f64,
}

/// Billed hours round up; the first hour costs [`PARKING_FIRST_HOUR`] and
/// each further hour [`PARKING_EXTRA_HOUR`].
pub fn parking_fee(minutes: u32) -> ParkingCharge {
    let hours = minutes.div_ceil(60);
    let cost = branching(
        hours,
        |&h| h <= 1,
        |_| PARKING_FIRST_HOUR,
        |h| PARKING_FIRST_HOUR + f64::from(h - 1) * PARKING_EXTRA_HOUR,
    );
    ParkingCharge { hours, cost }
}
