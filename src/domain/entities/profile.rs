//! Profiler attributes derived automatically for each dog.
//!
//! Every attribute is an optional categorical value plus an optional
//! confidence score. Consumers must go through [`ProfilerAttribute::visible`],
//! which applies the single display gate used across the crate.

use serde::{Deserialize, Serialize};

/// Confidence scores at or below this value hide the attribute.
pub const CONFIDENCE_THRESHOLD: f64 = 0.5;

/// A categorical value that carries its own "unknown" variant.
pub trait ProfileValue: Sized {
    /// Parses the storage label (e.g. `"first_time_ok"`).
    fn from_label(label: &str) -> Option<Self>;

    fn is_unknown(&self) -> bool;
}

/// An automatically derived attribute with an optional confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilerAttribute<T> {
    pub value: Option<T>,
    pub confidence: Option<f64>,
}

impl<T> Default for ProfilerAttribute<T> {
    fn default() -> Self {
        Self {
            value: None,
            confidence: None,
        }
    }
}

impl<T: ProfileValue> ProfilerAttribute<T> {
    pub fn new(value: Option<T>, confidence: Option<f64>) -> Self {
        Self { value, confidence }
    }

    /// Builds an attribute from a raw storage label.
    ///
    /// Unrecognized labels are treated as absent.
    pub fn from_label(label: Option<&str>, confidence: Option<f64>) -> Self {
        let value = label.map(str::trim).and_then(T::from_label);
        Self { value, confidence }
    }

    /// Returns the value only when it may be shown.
    ///
    /// The value must be present and not `unknown`, and the confidence, when
    /// present, must be strictly greater than [`CONFIDENCE_THRESHOLD`].
    /// NaN confidences never pass.
    pub fn visible(&self) -> Option<&T> {
        let value = self.value.as_ref()?;
        if value.is_unknown() {
            return None;
        }
        match self.confidence {
            None => Some(value),
            Some(score) if score > CONFIDENCE_THRESHOLD => Some(value),
            Some(_) => None,
        }
    }
}

/// Compatibility with children, dogs or cats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compatibility {
    Yes,
    No,
    Maybe,
    Unknown,
}

impl ProfileValue for Compatibility {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            "maybe" => Some(Self::Maybe),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
    VeryHigh,
    Unknown,
}

impl ProfileValue for EnergyLevel {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "very_high" => Some(Self::VeryHigh),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    FirstTimeOk,
    SomeExperience,
    Experienced,
    Unknown,
}

impl ProfileValue for ExperienceLevel {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "first_time_ok" => Some(Self::FirstTimeOk),
            "some_experience" => Some(Self::SomeExperience),
            "experienced" => Some(Self::Experienced),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeType {
    ApartmentOk,
    HousePreferred,
    HouseRequired,
    Unknown,
}

impl ProfileValue for HomeType {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "apartment_ok" => Some(Self::ApartmentOk),
            "house_preferred" => Some(Self::HousePreferred),
            "house_required" => Some(Self::HouseRequired),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// The full set of profiler attributes attached to a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DogProfile {
    pub good_with_children: ProfilerAttribute<Compatibility>,
    pub good_with_dogs: ProfilerAttribute<Compatibility>,
    pub good_with_cats: ProfilerAttribute<Compatibility>,
    pub energy_level: ProfilerAttribute<EnergyLevel>,
    pub experience_level: ProfilerAttribute<ExperienceLevel>,
    pub home_type: ProfilerAttribute<HomeType>,
}
