//! End-to-end calculation scenarios.
//!
//! These tests drive the public API the way the server does:
//! 1. Rows entered on a site produce the expected totals per country
//! 2. Year comparison padding and scope breakdown hold across a full report
//! 3. Sites and factor files survive a trip through the file adapters

use std::sync::Arc;

use carbon_ledger::adapters::{FileFactorSource, FileSiteRepository};
use carbon_ledger::application::{CalculationService, RefreshFactorTablesHandler};
use carbon_ledger::domain::emissions::{
    ActivityCategory, ActivityRow, CategoryRows, ClassificationMode, EmissionsAggregator, EmissionsError,
    Scope,
};
use carbon_ledger::domain::foundation::CountryCode;
use carbon_ledger::domain::site::Site;
use carbon_ledger::ports::SiteRepository;
use tokio::sync::RwLock;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn water_rows() -> CategoryRows {
    let mut data = CategoryRows::new();
    data.water
        .push(ActivityRow::from_parts(ActivityCategory::Water, "water", "Mains", 2025, [10.0; 12]).unwrap());
    data
}

fn mixed_rows() -> CategoryRows {
    let mut data = water_rows();
    data.energy.push(
        ActivityRow::from_parts(ActivityCategory::Energy, "electricity", "Grid", 2025, [500.0; 12]).unwrap(),
    );
    data.energy.push(
        ActivityRow::from_parts(ActivityCategory::Energy, "naturalGas", "Boiler", 2024, [300.0; 12]).unwrap(),
    );
    data.transport.push(
        ActivityRow::from_parts(ActivityCategory::Transport, "flights_long", "Sales trip", 2025, [0.0; 12])
            .unwrap(),
    );
    let mut leak = [0.0; 12];
    leak[3] = 0.5;
    data.refrigerants.push(
        ActivityRow::from_parts(ActivityCategory::Refrigerants, "refrigerant_R32", "AC unit", 2025, leak).unwrap(),
    );
    data
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn water_row_under_uk_factors() {
    let service = CalculationService::default();
    let data = water_rows();

    assert_eq!(EmissionsAggregator::row_total(&data.water[0]), 120.0);
    let co2e = service.row_co2e(ActivityCategory::Water, &data.water[0]).unwrap();
    assert!(close(co2e, 0.04128));
    assert!(close(service.calculate_all_totals(&data).unwrap(), 0.04128));
}

#[test]
fn switching_to_brazil_changes_result_without_touching_rows() {
    let mut service = CalculationService::default();
    let data = water_rows();
    let before = serde_json::to_string(&data).unwrap();

    service.set_country(CountryCode::brazil()).unwrap();
    let co2e = service.row_co2e(ActivityCategory::Water, &data.water[0]).unwrap();

    assert!(close(co2e, 0.05052));
    assert_eq!(serde_json::to_string(&data).unwrap(), before);
}

#[test]
fn empty_site_has_three_zero_years() {
    let service = CalculationService::default();
    let report = service.report_at(&CategoryRows::new(), 2026).unwrap();

    assert_eq!(report.grand_total, 0.0);
    let entries: Vec<_> = report.year_comparison.iter().collect();
    assert_eq!(entries, vec![(2024, 0.0), (2025, 0.0), (2026, 0.0)]);
}

#[test]
fn year_comparison_synthesises_two_leading_years() {
    let mut service = CalculationService::default();
    let mut table = service.factor_table(&CountryCode::uk()).unwrap().clone();
    table.insert("transport_petrol", 1000.0);
    service.replace_factor_table(CountryCode::uk(), table).unwrap();

    let mut data = CategoryRows::new();
    let mut january = [0.0; 12];
    january[0] = 1.0;
    data.transport
        .push(ActivityRow::from_parts(ActivityCategory::Transport, "transport_petrol", "", 2024, january).unwrap());
    january[0] = 2.0;
    data.transport
        .push(ActivityRow::from_parts(ActivityCategory::Transport, "transport_petrol", "", 2025, january).unwrap());

    let comparison = service.year_comparison_at(&data, 2026).unwrap();
    let entries: Vec<_> = comparison.iter().collect();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0], (2022, 0.0));
    assert_eq!(entries[1], (2023, 0.0));
    assert!(close(entries[2].1, 1.0) && entries[2].0 == 2024);
    assert!(close(entries[3].1, 2.0) && entries[3].0 == 2025);
}

#[test]
fn scopes_sum_to_grand_total_in_both_modes() {
    let data = mixed_rows();
    for mode in [ClassificationMode::EmissionType, ClassificationMode::CategoryCompat] {
        let service = CalculationService::default().with_classification(mode);
        let report = service.report_at(&data, 2026).unwrap();
        assert!(
            close(report.scope_breakdown.total(), report.grand_total),
            "{:?}: {} != {}",
            mode,
            report.scope_breakdown.total(),
            report.grand_total
        );
    }
}

#[test]
fn natural_gas_is_scope_one_but_energy_compat_is_scope_two() {
    let mut data = CategoryRows::new();
    data.energy.push(
        ActivityRow::from_parts(ActivityCategory::Energy, "naturalGas", "Boiler", 2025, [100.0; 12]).unwrap(),
    );

    let precise = CalculationService::default().scope_breakdown(&data).unwrap();
    let compat = CalculationService::default()
        .with_classification(ClassificationMode::CategoryCompat)
        .scope_breakdown(&data)
        .unwrap();

    assert!(precise.get(Scope::Scope1) > 0.0);
    assert_eq!(precise.get(Scope::Scope2), 0.0);
    assert_eq!(compat.get(Scope::Scope1), 0.0);
    assert!(close(compat.get(Scope::Scope2), precise.get(Scope::Scope1)));
}

#[test]
fn json_round_trip_preserves_totals() {
    let service = CalculationService::default();
    let data = mixed_rows();

    let json = serde_json::to_string(&data).unwrap();
    let restored: CategoryRows = serde_json::from_str(&json).unwrap();

    assert_eq!(
        service.category_totals(&restored).unwrap(),
        service.category_totals(&data).unwrap()
    );
}

#[test]
fn unknown_emission_type_in_stored_data_aborts_the_pass() {
    let json = r#"{"energy": [{"emissionType": "steam", "year": 2025, "months": [1,1,1,1,1,1,1,1,1,1,1,1]}]}"#;
    let data: CategoryRows = serde_json::from_str(json).unwrap();

    let err = CalculationService::default().report(&data).unwrap_err();
    assert!(matches!(
        err,
        EmissionsError::UnknownFactor { .. } | EmissionsError::UnclassifiedEmissionType(_)
    ));
}

// =============================================================================
// File adapters
// =============================================================================

#[tokio::test]
async fn stored_site_reproduces_report() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileSiteRepository::new(dir.path());

    let mut site = Site::new("Plant").unwrap();
    *site.data_mut() = mixed_rows();
    repository.save(&site).await.unwrap();

    let reopened = FileSiteRepository::new(dir.path());
    let loaded = reopened.find_by_id(site.id()).await.unwrap().unwrap();

    let service = CalculationService::default();
    assert_eq!(
        service.report_at(loaded.data(), 2026).unwrap().grand_total,
        service.report_at(site.data(), 2026).unwrap().grand_total
    );
}

#[tokio::test]
async fn factor_file_overrides_builtin_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("factors.yaml");

    let service = CalculationService::default();
    let mut table = service.factor_table(&CountryCode::uk()).unwrap().clone();
    table.insert("water", 1.0);
    let yaml = serde_yaml::to_string(&std::collections::BTreeMap::from([("UK", table)])).unwrap();
    std::fs::write(&path, yaml).unwrap();

    let shared = Arc::new(RwLock::new(service));
    let result = RefreshFactorTablesHandler::new(Arc::new(FileFactorSource::new(&path)), shared.clone())
        .handle()
        .await
        .unwrap();

    assert_eq!(result.installed, vec![CountryCode::uk()]);
    let total = shared.read().await.calculate_all_totals(&water_rows()).unwrap();
    assert!(close(total, 0.12));
}
