//! Property-based tests for the allocation, salary and scoring rules.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use staffing_engine::calculation::{
    allocate_matricule, calculate_starting_salary, score_performance,
};
use staffing_engine::config::{CompanyConfig, ConfigLoader};
use staffing_engine::error::EngineError;
use staffing_engine::ledger::InMemoryLedger;
use staffing_engine::models::{
    EducationLevel, Employee, MAX_MATRICULE_SUFFIX, Matricule, PartTimeRatio, Role,
};

fn config() -> CompanyConfig {
    ConfigLoader::load("./config/default")
        .expect("Failed to load config")
        .into_config()
}

fn role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

fn education_level() -> impl Strategy<Value = EducationLevel> {
    prop::sample::select(EducationLevel::ALL.to_vec())
}

/// Ratios from 0.01 to 1.00.
fn part_time_ratio() -> impl Strategy<Value = PartTimeRatio> {
    (1i64..=100)
        .prop_map(|hundredths| PartTimeRatio::new(Decimal::new(hundredths, 2)).unwrap())
}

fn ledger_holding(role: Role, suffix: u32) -> InMemoryLedger {
    InMemoryLedger::with_employees([Employee {
        matricule: Matricule::new(role, suffix).unwrap(),
        last_name: "Seed".to_string(),
        first_name: "Employee".to_string(),
        education_level: EducationLevel::Baccalaureate,
        hire_date: NaiveDate::from_ymd_opt(2019, 3, 4).unwrap(),
        part_time_ratio: None,
        salary: Decimal::new(167334, 2),
        performance: 1,
    }])
}

// Property test: the counter is global and advances by one
proptest! {
    #[test]
    fn test_allocation_follows_highest_suffix(
        existing_role in role(),
        new_role in role(),
        highest in 1u32..MAX_MATRICULE_SUFFIX,
    ) {
        let ledger = ledger_holding(existing_role, highest);

        let matricule = allocate_matricule(&ledger, new_role).unwrap();

        prop_assert_eq!(matricule.role(), new_role);
        prop_assert_eq!(matricule.suffix(), highest + 1);
        prop_assert_eq!(matricule.to_string().len(), 6);
        prop_assert!(matricule.to_string().starts_with(new_role.prefix()));
    }
}

// Property test: no role can allocate past the last suffix
proptest! {
    #[test]
    fn test_allocation_exhausted_for_every_role(existing_role in role(), new_role in role()) {
        let ledger = ledger_holding(existing_role, MAX_MATRICULE_SUFFIX);

        let result = allocate_matricule(&ledger, new_role);

        prop_assert!(matches!(result, Err(EngineError::AllocationExhausted)));
    }
}

// Property test: an absent ratio is paid as full time
proptest! {
    #[test]
    fn test_absent_ratio_pays_full_time(role in role(), level in education_level()) {
        let config = config();

        let absent = calculate_starting_salary(role, level, None, &config);
        let full_time =
            calculate_starting_salary(role, level, Some(PartTimeRatio::FULL_TIME), &config);

        prop_assert_eq!(absent.salary, full_time.salary);
    }
}

// Property test: salaries carry cents only and never exceed full time
proptest! {
    #[test]
    fn test_salary_is_rounded_and_bounded(
        role in role(),
        level in education_level(),
        ratio in part_time_ratio(),
    ) {
        let config = config();

        let part_time = calculate_starting_salary(role, level, Some(ratio), &config);
        let full_time = calculate_starting_salary(role, level, None, &config);

        prop_assert!(part_time.salary.scale() <= 2);
        prop_assert!(part_time.salary > Decimal::ZERO);
        prop_assert!(part_time.salary <= full_time.salary);
        prop_assert_eq!(
            part_time.salary,
            calculate_starting_salary(role, level, Some(ratio), &config).salary
        );
    }
}

// Property test: ratings only take the tier values
proptest! {
    #[test]
    fn test_performance_takes_tier_values(
        processed in 0i64..10_000_000,
        target in 0i64..10_000_000,
        average in prop::option::of(0.0f64..20.0),
    ) {
        let score = score_performance(
            Decimal::new(processed, 2),
            Decimal::new(target, 2),
            average,
            &config(),
        );

        prop_assert!([1, 2, 3, 5, 6].contains(&score.performance));
        if target > 0 && processed <= target {
            prop_assert_eq!(score.performance, 1);
        }
    }
}
