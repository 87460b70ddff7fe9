//! Activity rows and the per-site collection of rows by category.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::{ActivityCategory, EmissionType, EmissionsError};
use crate::domain::foundation::{DomainError, ErrorCode, ReportingYear};

/// Number of monthly buckets in a row (index 0 = January).
pub const MONTHS_PER_YEAR: usize = 12;

/// One logged entry of monthly quantities for an emission type and year.
///
/// Fields are private so that every mutation goes through a validating
/// setter. Deserialization accepts whatever was stored; values that would be
/// rejected at input are read as zero during aggregation (see [`quantity`]).
///
/// [`quantity`]: ActivityRow::quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRow {
    #[serde(default)]
    emission_type: Option<EmissionType>,
    #[serde(default)]
    description: String,
    year: i32,
    months: [f64; MONTHS_PER_YEAR],
}

impl ActivityRow {
    /// Creates an empty row for `category` in the given year.
    pub fn new(category: ActivityCategory, year: ReportingYear) -> Self {
        Self {
            emission_type: Some(category.default_emission_type()),
            description: String::new(),
            year: year.value(),
            months: [0.0; MONTHS_PER_YEAR],
        }
    }

    /// Creates an empty row for the current calendar year.
    pub fn for_current_year(category: ActivityCategory) -> Self {
        Self::new(category, ReportingYear::clamped(Utc::now().year()))
    }

    /// Builds a fully specified row, validating every field.
    pub fn from_parts(
        category: ActivityCategory,
        emission_type: &str,
        description: impl Into<String>,
        year: i32,
        months: [f64; MONTHS_PER_YEAR],
    ) -> Result<Self, EmissionsError> {
        let mut row = Self::new(category, validate_year(year)?);
        row.set_emission_type(category, emission_type)?;
        row.set_months(months)?;
        row.description = description.into();
        Ok(row)
    }

    pub fn emission_type(&self) -> Option<&EmissionType> {
        self.emission_type.as_ref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Raw stored quantities, including any legacy invalid values.
    pub fn months(&self) -> &[f64; MONTHS_PER_YEAR] {
        &self.months
    }

    /// The emission type used for calculation.
    ///
    /// Rows whose type was never set fall back to the category default.
    pub fn effective_emission_type(&self, category: ActivityCategory) -> EmissionType {
        self.emission_type
            .clone()
            .unwrap_or_else(|| category.default_emission_type())
    }

    /// Quantity for `month`, read defensively.
    ///
    /// Non-finite or negative stored values count as zero; indexes past
    /// December are zero as well.
    pub fn quantity(&self, month: usize) -> f64 {
        match self.months.get(month) {
            Some(value) if value.is_finite() && *value > 0.0 => *value,
            _ => 0.0,
        }
    }

    /// Sets the emission type, which must be declared by `category`.
    pub fn set_emission_type(
        &mut self,
        category: ActivityCategory,
        key: &str,
    ) -> Result<(), EmissionsError> {
        if !category.accepts(key) {
            return Err(EmissionsError::InvalidEmissionType {
                category,
                key: key.to_string(),
            });
        }
        self.emission_type = Some(EmissionType::new(key));
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Sets the reporting year; years outside 2020-2030 are rejected.
    pub fn set_year(&mut self, year: i32) -> Result<(), EmissionsError> {
        self.year = validate_year(year)?.value();
        Ok(())
    }

    /// Sets one month's quantity.
    pub fn set_month(&mut self, month: usize, value: f64) -> Result<(), EmissionsError> {
        if month >= MONTHS_PER_YEAR {
            return Err(EmissionsError::InvalidMonth(month));
        }
        self.months[month] = validate_quantity(month, value)?;
        Ok(())
    }

    /// Replaces all twelve quantities. Nothing is written if any is invalid.
    pub fn set_months(&mut self, months: [f64; MONTHS_PER_YEAR]) -> Result<(), EmissionsError> {
        for (month, value) in months.iter().enumerate() {
            validate_quantity(month, *value)?;
        }
        self.months = months;
        Ok(())
    }

    /// Checks stored values against the input rules without modifying them.
    pub fn validate(&self, category: ActivityCategory) -> Result<(), EmissionsError> {
        if let Some(key) = &self.emission_type {
            if !category.accepts(key.as_str()) {
                return Err(EmissionsError::InvalidEmissionType {
                    category,
                    key: key.to_string(),
                });
            }
        }
        validate_year(self.year)?;
        for (month, value) in self.months.iter().enumerate() {
            validate_quantity(month, *value)?;
        }
        Ok(())
    }
}

fn validate_year(year: i32) -> Result<ReportingYear, EmissionsError> {
    ReportingYear::try_new(year).map_err(|_| EmissionsError::InvalidYear(year))
}

fn validate_quantity(month: usize, value: f64) -> Result<f64, EmissionsError> {
    if !value.is_finite() || value < 0.0 {
        return Err(EmissionsError::InvalidQuantity { month, value });
    }
    Ok(value)
}

/// A stored row that fails input validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowIssue {
    pub category: ActivityCategory,
    pub index: usize,
    pub message: String,
}

/// All activity rows of one site, one list per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryRows {
    #[serde(default)]
    pub water: Vec<ActivityRow>,
    #[serde(default)]
    pub energy: Vec<ActivityRow>,
    #[serde(default)]
    pub waste: Vec<ActivityRow>,
    #[serde(default)]
    pub transport: Vec<ActivityRow>,
    #[serde(default)]
    pub refrigerants: Vec<ActivityRow>,
}

impl CategoryRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows recorded under `category`.
    pub fn rows(&self, category: ActivityCategory) -> &[ActivityRow] {
        match category {
            ActivityCategory::Water => &self.water,
            ActivityCategory::Energy => &self.energy,
            ActivityCategory::Waste => &self.waste,
            ActivityCategory::Transport => &self.transport,
            ActivityCategory::Refrigerants => &self.refrigerants,
        }
    }

    pub fn rows_mut(&mut self, category: ActivityCategory) -> &mut Vec<ActivityRow> {
        match category {
            ActivityCategory::Water => &mut self.water,
            ActivityCategory::Energy => &mut self.energy,
            ActivityCategory::Waste => &mut self.waste,
            ActivityCategory::Transport => &mut self.transport,
            ActivityCategory::Refrigerants => &mut self.refrigerants,
        }
    }

    /// Appends a default row to `category` and returns it for editing.
    pub fn add_row(&mut self, category: ActivityCategory) -> &mut ActivityRow {
        let rows = self.rows_mut(category);
        rows.push(ActivityRow::for_current_year(category));
        let last = rows.len() - 1;
        &mut rows[last]
    }

    /// Removes the row at `index`, returning it if it existed.
    pub fn remove_row(&mut self, category: ActivityCategory, index: usize) -> Option<ActivityRow> {
        let rows = self.rows_mut(category);
        (index < rows.len()).then(|| rows.remove(index))
    }

    pub fn row_mut(&mut self, category: ActivityCategory, index: usize) -> Option<&mut ActivityRow> {
        self.rows_mut(category).get_mut(index)
    }

    /// Every row paired with its category, in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (ActivityCategory, &ActivityRow)> + '_ {
        ActivityCategory::all()
            .iter()
            .flat_map(move |category| self.rows(*category).iter().map(move |row| (*category, row)))
    }

    pub fn row_count(&self) -> usize {
        ActivityCategory::all()
            .iter()
            .map(|category| self.rows(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Lists every stored row that would be rejected at input.
    pub fn validate(&self) -> Vec<RowIssue> {
        ActivityCategory::all()
            .iter()
            .flat_map(|category| {
                self.rows(*category)
                    .iter()
                    .enumerate()
                    .filter_map(move |(index, row)| {
                        row.validate(*category).err().map(|err| RowIssue {
                            category: *category,
                            index,
                            message: err.to_string(),
                        })
                    })
            })
            .collect()
    }

    /// Fails with `ValidationFailed` naming the first rejected row.
    pub fn ensure_valid(&self) -> Result<(), DomainError> {
        let issues = self.validate();
        match issues.first() {
            None => Ok(()),
            Some(first) => Err(DomainError::new(ErrorCode::ValidationFailed, first.message.clone())
                .with_detail("category", first.category.as_str())
                .with_detail("row", first.index.to_string())
                .with_detail("issues", issues.len().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(value: i32) -> ReportingYear {
        ReportingYear::try_new(value).unwrap()
    }

    #[test]
    fn new_row_uses_category_defaults() {
        let row = ActivityRow::new(ActivityCategory::Transport, year(2025));
        assert_eq!(row.emission_type().unwrap(), "transport_petrol");
        assert_eq!(row.year(), 2025);
        assert_eq!(row.months(), &[0.0; 12]);
        assert!(row.description().is_empty());
    }

    #[test]
    fn current_year_row_is_within_range() {
        let row = ActivityRow::for_current_year(ActivityCategory::Water);
        assert!(ReportingYear::contains(row.year()));
    }

    #[test]
    fn set_year_rejects_out_of_range_and_keeps_old_value() {
        let mut row = ActivityRow::new(ActivityCategory::Water, year(2024));
        assert_eq!(row.set_year(2031), Err(EmissionsError::InvalidYear(2031)));
        assert_eq!(row.set_year(2019), Err(EmissionsError::InvalidYear(2019)));
        assert_eq!(row.year(), 2024);
        row.set_year(2030).unwrap();
        assert_eq!(row.year(), 2030);
    }

    #[test]
    fn set_month_rejects_negative_and_nan() {
        let mut row = ActivityRow::new(ActivityCategory::Energy, year(2025));
        assert!(matches!(
            row.set_month(3, -1.0),
            Err(EmissionsError::InvalidQuantity { month: 3, .. })
        ));
        assert!(row.set_month(3, f64::NAN).is_err());
        assert!(row.set_month(3, f64::INFINITY).is_err());
        assert_eq!(row.set_month(12, 1.0), Err(EmissionsError::InvalidMonth(12)));
        assert_eq!(row.months()[3], 0.0);

        row.set_month(3, 42.5).unwrap();
        assert_eq!(row.quantity(3), 42.5);
    }

    #[test]
    fn set_months_is_all_or_nothing() {
        let mut row = ActivityRow::new(ActivityCategory::Waste, year(2025));
        let mut months = [1.0; 12];
        months[11] = -5.0;
        assert!(row.set_months(months).is_err());
        assert_eq!(row.months(), &[0.0; 12]);
    }

    #[test]
    fn set_emission_type_enforces_category() {
        let mut row = ActivityRow::new(ActivityCategory::Energy, year(2025));
        let err = row.set_emission_type(ActivityCategory::Energy, "flights_long");
        assert!(matches!(err, Err(EmissionsError::InvalidEmissionType { .. })));
        assert_eq!(row.emission_type().unwrap(), "electricity");

        row.set_emission_type(ActivityCategory::Energy, "naturalGas").unwrap();
        assert_eq!(row.emission_type().unwrap(), "naturalGas");
    }

    #[test]
    fn legacy_invalid_quantities_read_as_zero() {
        let json = r#"{
            "emissionType": "water",
            "description": "legacy",
            "year": 2024,
            "months": [1, -3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 4]
        }"#;
        let row: ActivityRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.quantity(0), 1.0);
        assert_eq!(row.quantity(1), 0.0);
        assert_eq!(row.quantity(11), 4.0);
        assert_eq!(row.quantity(12), 0.0);
        assert!(row.validate(ActivityCategory::Water).is_err());
    }

    #[test]
    fn missing_emission_type_falls_back_to_category_default() {
        let json = r#"{"emissionType": null, "year": 2025, "months": [0,0,0,0,0,0,0,0,0,0,0,0]}"#;
        let row: ActivityRow = serde_json::from_str(json).unwrap();
        assert!(row.emission_type().is_none());
        assert_eq!(
            row.effective_emission_type(ActivityCategory::Refrigerants),
            "refrigerant_R410A"
        );
    }

    #[test]
    fn row_serializes_with_camel_case_keys() {
        let row = ActivityRow::from_parts(
            ActivityCategory::Energy,
            "naturalGas",
            "Boiler",
            2025,
            [1.0; 12],
        )
        .unwrap();
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["emissionType"], "naturalGas");
        assert_eq!(value["year"], 2025);
        assert_eq!(value["months"].as_array().unwrap().len(), 12);
    }

    #[test]
    fn category_rows_add_and_remove() {
        let mut rows = CategoryRows::new();
        rows.add_row(ActivityCategory::Water).set_month(0, 5.0).unwrap();
        rows.add_row(ActivityCategory::Water);
        rows.add_row(ActivityCategory::Energy);
        assert_eq!(rows.row_count(), 3);

        let removed = rows.remove_row(ActivityCategory::Water, 0).unwrap();
        assert_eq!(removed.quantity(0), 5.0);
        assert!(rows.remove_row(ActivityCategory::Water, 5).is_none());
        assert_eq!(rows.rows(ActivityCategory::Water).len(), 1);
    }

    #[test]
    fn iter_visits_categories_in_canonical_order() {
        let mut rows = CategoryRows::new();
        rows.add_row(ActivityCategory::Refrigerants);
        rows.add_row(ActivityCategory::Water);
        let categories: Vec<_> = rows.iter().map(|(category, _)| category).collect();
        assert_eq!(
            categories,
            vec![ActivityCategory::Water, ActivityCategory::Refrigerants]
        );
    }

    #[test]
    fn validate_reports_each_offending_row() {
        let json = r#"{
            "water": [{"emissionType": "water", "year": 2035, "months": [0,0,0,0,0,0,0,0,0,0,0,0]}],
            "energy": [
                {"emissionType": "electricity", "year": 2025, "months": [0,0,0,0,0,0,0,0,0,0,0,0]},
                {"emissionType": "water", "year": 2025, "months": [0,0,0,0,0,0,0,0,0,0,0,0]}
            ]
        }"#;
        let rows: CategoryRows = serde_json::from_str(json).unwrap();
        let issues = rows.validate();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].category, ActivityCategory::Water);
        assert_eq!(issues[1].category, ActivityCategory::Energy);
        assert_eq!(issues[1].index, 1);
    }

    #[test]
    fn ensure_valid_names_first_offending_row() {
        let json = r#"{"energy": [
            {"emissionType": "electricity", "year": 2025, "months": [0,0,0,0,0,0,0,0,0,0,0,0]},
            {"emissionType": "electricity", "year": 2025, "months": [-4,0,0,0,0,0,0,0,0,0,0,0]}
        ]}"#;
        let rows: CategoryRows = serde_json::from_str(json).unwrap();

        let err = rows.ensure_valid().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("category"), Some(&"energy".to_string()));
        assert_eq!(err.details.get("row"), Some(&"1".to_string()));
        assert!(CategoryRows::new().ensure_valid().is_ok());
    }
}
