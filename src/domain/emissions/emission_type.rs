//! Emission-type keys: the identifiers that link activity rows to factors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of an emission factor, e.g. `electricity` or `refrigerant_R410A`.
///
/// Open set: stored rows may carry keys that the active factor table does
/// not know. Lookups against such keys fail with `UnknownFactor`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmissionType(String);

impl EmissionType {
    pub const WATER: &'static str = "water";
    pub const WASTEWATER: &'static str = "wastewater";
    pub const ELECTRICITY: &'static str = "electricity";
    pub const NATURAL_GAS: &'static str = "naturalGas";
    pub const DIESEL: &'static str = "diesel";
    pub const WASTE: &'static str = "waste";
    pub const WASTE_RECYCLED: &'static str = "wasteRecycled";
    pub const TRANSPORT_PETROL: &'static str = "transport_petrol";
    pub const TRANSPORT_DIESEL: &'static str = "transport_diesel";
    pub const TRANSPORT_ELECTRIC: &'static str = "transport_electric";
    pub const FLIGHTS_SHORT: &'static str = "flights_short";
    pub const FLIGHTS_MEDIUM: &'static str = "flights_medium";
    pub const FLIGHTS_LONG: &'static str = "flights_long";
    pub const REFRIGERANT_R410A: &'static str = "refrigerant_R410A";
    pub const REFRIGERANT_R134A: &'static str = "refrigerant_R134a";
    pub const REFRIGERANT_R32: &'static str = "refrigerant_R32";

    /// Prefix shared by every refrigerant key.
    pub const REFRIGERANT_PREFIX: &'static str = "refrigerant_";

    /// Wraps a key without checking it against any catalogue.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for refrigerant leakage keys (`refrigerant_*`).
    pub fn is_refrigerant(&self) -> bool {
        self.0.starts_with(Self::REFRIGERANT_PREFIX)
    }
}

impl fmt::Display for EmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EmissionType {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl PartialEq<str> for EmissionType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EmissionType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
