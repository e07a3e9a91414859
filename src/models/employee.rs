//! Employee model and related types.
//!
//! This module defines the [`Employee`] record persisted by the ledger and
//! the [`PartTimeRatio`] type bounding part-time work to (0, 1].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::InvalidInputReason;

use super::{EducationLevel, Matricule, Role};

/// Fraction of a full-time schedule an employee works.
///
/// Always within (0, 1]; construction rejects anything else.
///
/// # Examples
///
/// ```
/// use staffing_engine::models::PartTimeRatio;
/// use rust_decimal::Decimal;
///
/// let half = PartTimeRatio::new(Decimal::new(5, 1)).unwrap();
/// assert_eq!(half.value(), Decimal::new(5, 1));
/// assert!(PartTimeRatio::new(Decimal::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct PartTimeRatio(Decimal);

impl PartTimeRatio {
    /// A full-time schedule.
    pub const FULL_TIME: PartTimeRatio = PartTimeRatio(Decimal::ONE);

    /// Creates a ratio, rejecting values outside (0, 1].
    pub fn new(value: Decimal) -> Result<Self, InvalidInputReason> {
        if value > Decimal::ZERO && value <= Decimal::ONE {
            Ok(Self(value))
        } else {
            Err(InvalidInputReason::PartTimeRatio)
        }
    }

    /// Returns the underlying fraction.
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for PartTimeRatio {
    type Error = InvalidInputReason;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PartTimeRatio> for Decimal {
    fn from(ratio: PartTimeRatio) -> Self {
        ratio.0
    }
}

/// An employee record as stored in the ledger.
///
/// The role is not stored separately: it is read from the matricule prefix,
/// so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Unique identifier, immutable after hiring.
    pub matricule: Matricule,
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Highest diploma held.
    pub education_level: EducationLevel,
    /// Date of hiring, immutable.
    pub hire_date: NaiveDate,
    /// Part-time ratio as recorded at hiring. `None` means not recorded,
    /// which the salary formula reads as full time.
    pub part_time_ratio: Option<PartTimeRatio>,
    /// Starting salary, rounded to the cent.
    pub salary: Decimal,
    /// Performance rating.
    pub performance: u32,
}

/// Wire form of [`Employee`], carrying the role explicitly.
#[derive(Serialize, Deserialize)]
struct EmployeeRecord {
    matricule: Matricule,
    last_name: String,
    first_name: String,
    role: Role,
    education_level: EducationLevel,
    hire_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    part_time_ratio: Option<PartTimeRatio>,
    salary: Decimal,
    performance: u32,
}

impl EmployeeRecord {
    fn from_employee(employee: &Employee) -> Self {
        Self {
            matricule: employee.matricule,
            last_name: employee.last_name.clone(),
            first_name: employee.first_name.clone(),
            role: employee.role(),
            education_level: employee.education_level,
            hire_date: employee.hire_date,
            part_time_ratio: employee.part_time_ratio,
            salary: employee.salary,
            performance: employee.performance,
        }
    }

    fn into_employee(self) -> Result<Employee, String> {
        if self.matricule.role() != self.role {
            return Err(format!(
                "matricule {} does not match role {:?}",
                self.matricule, self.role
            ));
        }

        Ok(Employee {
            matricule: self.matricule,
            last_name: self.last_name,
            first_name: self.first_name,
            education_level: self.education_level,
            hire_date: self.hire_date,
            part_time_ratio: self.part_time_ratio,
            salary: self.salary,
            performance: self.performance,
        })
    }
}

impl Serialize for Employee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EmployeeRecord::from_employee(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Employee {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        EmployeeRecord::deserialize(deserializer)?
            .into_employee()
            .map_err(de::Error::custom)
    }
}

impl Employee {
    /// Returns the position held, as encoded in the matricule.
    pub fn role(&self) -> Role {
        self.matricule.role()
    }

    /// Returns the number of whole years between the hire date and `on`.
    ///
    /// Dates before the hire date yield zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffing_engine::models::{Employee, EducationLevel, Matricule, Role};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     matricule: Matricule::new(Role::Technician, 1).unwrap(),
    ///     last_name: "Doe".to_string(),
    ///     first_name: "John".to_string(),
        ///     education_level: EducationLevel::Vocational,
    ///     hire_date: NaiveDate::from_ymd_opt(2020, 3, 15).unwrap(),
    ///     part_time_ratio: None,
    ///     salary: Decimal::new(182546, 2),
    ///     performance: 1,
    /// };
    /// let on = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
    /// assert_eq!(employee.years_of_service(on), 5);
    /// ```
    pub fn years_of_service(&self, on: NaiveDate) -> u32 {
        on.years_since(self.hire_date).unwrap_or(0)
    }
}
