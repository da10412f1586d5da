use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Age as accepted at the boundary.
///
/// Free text is converted once, here, so the rule passes never look at raw
/// strings. A life-stage keyword wins over any number in the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetAge {
    /// Text contains "puppy" or "kitten", matched case-sensitively.
    Juvenile,
    /// Leading whole number of years, read leniently: "1.5 years" is 1.
    Years(i64),
    /// Anything else. Resolves to the adult tier.
    Unspecified(String),
}

impl PetAge {
    pub fn parse(input: &str) -> Self {
        if input.contains("puppy") || input.contains("kitten") {
            return PetAge::Juvenile;
        }

        match leading_integer(input) {
            Some(years) => PetAge::Years(years),
            None => PetAge::Unspecified(input.to_string()),
        }
    }

    pub fn tier(&self) -> AgeTier {
        match self {
            PetAge::Juvenile => AgeTier::Young,
            PetAge::Years(years) if *years < 1 => AgeTier::Young,
            PetAge::Years(years) if *years > 7 => AgeTier::Senior,
            PetAge::Years(_) | PetAge::Unspecified(_) => AgeTier::Adult,
        }
    }
}

impl From<&str> for PetAge {
    fn from(value: &str) -> Self {
        PetAge::parse(value)
    }
}

/// Optional sign followed by at least one digit, after leading whitespace.
/// Values beyond `i64` saturate instead of being rejected.
fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().unwrap_or(i64::MAX);

    Some(if negative { -value } else { value })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AgeTier {
    Young,
    Adult,
    Senior,
}

/// Health or body-state category driving the condition pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Normal,
    Overweight,
    Underweight,
    Allergies,
    Diabetes,
    KidneyDisease,
    /// Kept verbatim so callers can report it; the rules ignore it.
    Unrecognized(String),
}

impl Condition {
    pub fn parse(input: &str) -> Self {
        // Surrounding whitespace is not stripped: " diabetes " is unrecognized.
        match input.to_lowercase().as_str() {
            "normal" => Condition::Normal,
            "overweight" => Condition::Overweight,
            "underweight" => Condition::Underweight,
            "allergies" => Condition::Allergies,
            "diabetes" => Condition::Diabetes,
            "kidney disease" | "kidney-disease" | "kidney_disease" => Condition::KidneyDisease,
            _ => Condition::Unrecognized(input.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Condition::Unrecognized(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Condition::Normal => "normal",
            Condition::Overweight => "overweight",
            Condition::Underweight => "underweight",
            Condition::Allergies => "allergies",
            Condition::Diabetes => "diabetes",
            Condition::KidneyDisease => "kidney-disease",
            Condition::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Condition::parse(value)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Breed families with their own feeding advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreedGroup {
    Retriever,
    Feline,
    Other,
}

impl BreedGroup {
    /// Retriever is checked first, so "Labrador cat" is a retriever.
    pub fn classify(breed: &str) -> Self {
        let breed = breed.to_lowercase();
        if breed.contains("retriever") || breed.contains("labrador") {
            BreedGroup::Retriever
        } else if breed.contains("persian") || breed.contains("cat") {
            BreedGroup::Feline
        } else {
            BreedGroup::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetProfile {
    pub name: String,
    pub age: PetAge,
    pub breed: String,
    pub condition: Condition,
}

impl PetProfile {
    pub fn new(name: &str, age: &str, breed: &str, condition: &str) -> Self {
        Self {
            name: name.to_string(),
            age: PetAge::parse(age),
            breed: breed.to_string(),
            condition: Condition::parse(condition),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateDietPlanInput {
    pub pet_name: String,
    pub age: String,
    pub breed: String,
    pub condition: String,
}

#[derive(Debug, Clone)]
pub struct SaveDietPlanInput {
    pub owner_id: Uuid,
    pub pet_name: String,
    pub age: String,
    pub breed: String,
    pub condition: String,
}

#[derive(Debug, Clone, Default)]
pub struct GetDietPlansFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>, // e.g. "-created_at" or "pet_name"
}
