//! ActivityCategory enum: the five activity tables tracked per site.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::EmissionType;
use crate::domain::foundation::ValidationError;

/// The activity tables a site records monthly quantities in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Water,
    Energy,
    Waste,
    Transport,
    Refrigerants,
}

const WATER_TYPES: &[&str] = &[EmissionType::WATER, EmissionType::WASTEWATER];

const ENERGY_TYPES: &[&str] = &[
    EmissionType::ELECTRICITY,
    EmissionType::NATURAL_GAS,
    EmissionType::DIESEL,
];

const WASTE_TYPES: &[&str] = &[EmissionType::WASTE, EmissionType::WASTE_RECYCLED];

const TRANSPORT_TYPES: &[&str] = &[
    EmissionType::TRANSPORT_PETROL,
    EmissionType::TRANSPORT_DIESEL,
    EmissionType::TRANSPORT_ELECTRIC,
    EmissionType::FLIGHTS_SHORT,
    EmissionType::FLIGHTS_MEDIUM,
    EmissionType::FLIGHTS_LONG,
];

const REFRIGERANT_TYPES: &[&str] = &[
    EmissionType::REFRIGERANT_R410A,
    EmissionType::REFRIGERANT_R134A,
    EmissionType::REFRIGERANT_R32,
];

impl ActivityCategory {
    /// Returns all categories in canonical order.
    pub fn all() -> &'static [ActivityCategory] {
        &[
            ActivityCategory::Water,
            ActivityCategory::Energy,
            ActivityCategory::Waste,
            ActivityCategory::Transport,
            ActivityCategory::Refrigerants,
        ]
    }

    /// Emission-type keys selectable for rows of this category.
    ///
    /// The first entry is the category default.
    pub fn emission_types(&self) -> &'static [&'static str] {
        match self {
            ActivityCategory::Water => WATER_TYPES,
            ActivityCategory::Energy => ENERGY_TYPES,
            ActivityCategory::Waste => WASTE_TYPES,
            ActivityCategory::Transport => TRANSPORT_TYPES,
            ActivityCategory::Refrigerants => REFRIGERANT_TYPES,
        }
    }

    /// The type applied to rows whose emission type was never set.
    pub fn default_emission_type(&self) -> EmissionType {
        EmissionType::new(self.emission_types()[0])
    }

    /// Returns true if `key` may be selected for this category.
    pub fn accepts(&self, key: &str) -> bool {
        self.emission_types().contains(&key)
    }

    /// Every key declared by any category, in canonical order.
    ///
    /// A factor table must resolve all of these to be accepted.
    pub fn declared_emission_types() -> impl Iterator<Item = &'static str> {
        Self::all()
            .iter()
            .flat_map(|category| category.emission_types().iter().copied())
    }

    /// Unit in which quantities of this category are recorded.
    pub fn unit(&self) -> &'static str {
        match self {
            ActivityCategory::Water => "m³",
            ActivityCategory::Energy => "kWh",
            ActivityCategory::Waste => "tonnes",
            ActivityCategory::Transport => "km",
            ActivityCategory::Refrigerants => "kg",
        }
    }

    /// Lower-case identifier used in stored data and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Water => "water",
            ActivityCategory::Energy => "energy",
            ActivityCategory::Waste => "waste",
            ActivityCategory::Transport => "transport",
            ActivityCategory::Refrigerants => "refrigerants",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_format("category", format!("unknown category '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_declares_at_least_one_type() {
        for category in ActivityCategory::all() {
            assert!(!category.emission_types().is_empty(), "{} has no types", category);
        }
    }

    #[test]
    fn default_type_is_first_declared() {
        assert_eq!(ActivityCategory::Water.default_emission_type(), "water");
        assert_eq!(ActivityCategory::Energy.default_emission_type(), "electricity");
        assert_eq!(ActivityCategory::Waste.default_emission_type(), "waste");
        assert_eq!(
            ActivityCategory::Transport.default_emission_type(),
            "transport_petrol"
        );
        assert_eq!(
            ActivityCategory::Refrigerants.default_emission_type(),
            "refrigerant_R410A"
        );
    }

    #[test]
    fn transport_allows_vehicle_and_flight_bands() {
        let transport = ActivityCategory::Transport;
        assert!(transport.accepts("transport_electric"));
        assert!(transport.accepts("flights_long"));
        assert!(!transport.accepts("electricity"));
    }

    #[test]
    fn declared_types_cover_all_categories() {
        let declared: Vec<_> = ActivityCategory::declared_emission_types().collect();
        assert_eq!(declared.len(), 16);
        assert!(declared.contains(&"wastewater"));
        assert!(declared.contains(&"diesel"));
    }

    #[test]
    fn parses_from_lower_and_mixed_case() {
        assert_eq!("energy".parse::<ActivityCategory>().unwrap(), ActivityCategory::Energy);
        assert_eq!(
            "Refrigerants".parse::<ActivityCategory>().unwrap(),
            ActivityCategory::Refrigerants
        );
        assert!("fuel".parse::<ActivityCategory>().is_err());
    }

    #[test]
    fn serializes_to_lowercase() {
        let json = serde_json::to_string(&ActivityCategory::Transport).unwrap();
        assert_eq!(json, "\"transport\"");
    }
}
