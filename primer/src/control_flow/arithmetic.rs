//! Straight-line arithmetic from the variables exercises.

use serde::Serialize;

use super::sequential::sequential;
use crate::error::ExerciseError;

pub const SECONDS_PER_HOUR: u64 = 3600;
pub const SECONDS_PER_MINUTE: u64 = 60;

pub const RATE_DAY: f64 = 0.076;
pub const NIGHT_DISCOUNT: f64 = 0.30;
pub const FIXED_CHARGE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Duration3 {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

pub fn split_seconds(total: u64) -> Duration3 {
    let remaining = total % SECONDS_PER_HOUR;
    Duration3 {
        hours: total / SECONDS_PER_HOUR,
        minutes: remaining / SECONDS_PER_MINUTE,
        seconds: remaining % SECONDS_PER_MINUTE,
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    sequential(celsius, [(|c: f64| c * 9.0 / 5.0) as fn(f64) -> f64, |x: f64| x + 32.0])
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    sequential(fahrenheit, [(|f: f64| f - 32.0) as fn(f64) -> f64, |x: f64| x * 5.0 / 9.0])
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bill {
    pub day: f64,
    pub night: f64,
    pub fixed: f64,
    pub total: f64,
}

/// Day consumption at [`RATE_DAY`], night at the discounted rate, plus the
/// monthly [`FIXED_CHARGE`].
pub fn electricity_bill(kwh_day: f64, kwh_night: f64) -> Bill {
    let day = kwh_day * RATE_DAY;
    let night = kwh_night * RATE_DAY * (1.0 - NIGHT_DISCOUNT);
    Bill { day, night, fixed: FIXED_CHARGE, total: day + night + FIXED_CHARGE }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub area: f64,
    pub circumference: f64,
}

pub fn circle(radius: f64) -> Result<Circle, ExerciseError> {
    if radius.is_nan() || radius < 0.0 {
        return Err(ExerciseError::InvalidMeasurement { name: "radius", value: radius });
    }
    Ok(Circle {
        area: std::f64::consts::PI * radius * radius,
        circumference: 2.0 * std::f64::consts::PI * radius,
    })
}

pub fn divide(a: f64, b: f64) -> Result<f64, ExerciseError> {
    if b == 0.0 {
        return Err(ExerciseError::DivisionByZero);
    }
    Ok(a / b)
}
