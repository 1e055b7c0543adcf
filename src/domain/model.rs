use crate::domain::ports::Describe;
use crate::utils::error::DemoError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedRecord {
    pub title: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

/// Base vehicle data. `Car` holds one by composition instead of inheriting from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,
    pub year: u32,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: u32) -> Self {
        Self {
            make: make.into(),
            year,
        }
    }
}

impl Describe for Vehicle {
    fn info(&self) -> String {
        format!("Vehicle: {} ({})", self.make, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub vehicle: Vehicle,
    pub model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: u32, model: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }
}

impl Describe for Car {
    fn info(&self) -> String {
        format!("Model: {}", self.model)
    }
}

/// A value that is either textual or numeric. Nothing else is representable,
/// so matches over it need no fallback arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Number(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];
}

// Raw indices show up at the boundary (flags, JSON numbers); conversion is the
// one place a non-enumerated day can appear, so it is fallible.
impl TryFrom<u8> for Day {
    type Error = DemoError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Day::Monday),
            1 => Ok(Day::Tuesday),
            2 => Ok(Day::Wednesday),
            3 => Ok(Day::Thursday),
            4 => Ok(Day::Friday),
            5 => Ok(Day::Saturday),
            6 => Ok(Day::Sunday),
            _ => Err(DemoError::UnknownDayError { index }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
        }
    }
}
