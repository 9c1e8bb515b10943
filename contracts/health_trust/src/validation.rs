//! Closed enumerations describing an anonymized dataset, and the checks
//! applied to submissions before anything is written to storage.
//!
//! Codes travel through the contract interface as plain `u32` values so an
//! out-of-range code surfaces as `ContractError::InvalidArgument` rather than
//! a host decoding failure.

use soroban_sdk::{String, Vec};

use crate::ContractError;

/// Upper bound on the number of codes in a single dataset list.
pub const MAX_CODES_PER_LIST: u32 = 16;

/// Upper bound on the length of a content locator.
pub const MAX_IPFS_HASH_LEN: u32 = 128;

/// Upper bound on the number of datasets returned by one paged listing.
pub const MAX_PAGE_SIZE: u64 = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gender {
    Male = 0,
    Female = 1,
    Other = 2,
}

impl Gender {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Gender::Male),
            1 => Some(Gender::Female),
            2 => Some(Gender::Other),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AgeRange {
    From18To23 = 0,
    From24To29 = 1,
    From30To39 = 2,
    From40To49 = 3,
    From50To59 = 4,
    Over60 = 5,
}

impl AgeRange {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(AgeRange::From18To23),
            1 => Some(AgeRange::From24To29),
            2 => Some(AgeRange::From30To39),
            3 => Some(AgeRange::From40To49),
            4 => Some(AgeRange::From50To59),
            5 => Some(AgeRange::Over60),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BmiCategory {
    Underweight = 0,
    Normal = 1,
    Overweight = 2,
    Obese = 3,
}

impl BmiCategory {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(BmiCategory::Underweight),
            1 => Some(BmiCategory::Normal),
            2 => Some(BmiCategory::Overweight),
            3 => Some(BmiCategory::Obese),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChronicCondition {
    Diabetes = 0,
    Hypertension = 1,
    Asthma = 2,
    HeartDisease = 3,
    KidneyDisease = 4,
    Other = 5,
}

impl ChronicCondition {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(ChronicCondition::Diabetes),
            1 => Some(ChronicCondition::Hypertension),
            2 => Some(ChronicCondition::Asthma),
            3 => Some(ChronicCondition::HeartDisease),
            4 => Some(ChronicCondition::KidneyDisease),
            5 => Some(ChronicCondition::Other),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HealthMetricType {
    BloodOxygen = 0,
    HeartRate = 1,
    RespiratoryRate = 2,
    BodyTemperature = 3,
    BloodPressure = 4,
    SleepDuration = 5,
}

impl HealthMetricType {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(HealthMetricType::BloodOxygen),
            1 => Some(HealthMetricType::HeartRate),
            2 => Some(HealthMetricType::RespiratoryRate),
            3 => Some(HealthMetricType::BodyTemperature),
            4 => Some(HealthMetricType::BloodPressure),
            5 => Some(HealthMetricType::SleepDuration),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

// ── Submission checks ────────────────────────────────────────────────────────

pub fn validate_ipfs_hash(ipfs_hash: &String) -> Result<(), ContractError> {
    if ipfs_hash.is_empty() || ipfs_hash.len() > MAX_IPFS_HASH_LEN {
        return Err(ContractError::InvalidArgument);
    }
    Ok(())
}

pub fn validate_gender(code: u32) -> Result<Gender, ContractError> {
    Gender::from_code(code).ok_or(ContractError::InvalidArgument)
}

pub fn validate_age_range(code: u32) -> Result<AgeRange, ContractError> {
    AgeRange::from_code(code).ok_or(ContractError::InvalidArgument)
}

pub fn validate_bmi_category(code: u32) -> Result<BmiCategory, ContractError> {
    BmiCategory::from_code(code).ok_or(ContractError::InvalidArgument)
}

/// Every entry must be a known chronic condition; order and duplicates are kept.
pub fn validate_chronic_conditions(codes: &Vec<u32>) -> Result<(), ContractError> {
    validate_code_list(codes, |c| ChronicCondition::from_code(c).is_some())
}

/// Every entry must be a known health metric; order and duplicates are kept.
pub fn validate_health_metric_types(codes: &Vec<u32>) -> Result<(), ContractError> {
    validate_code_list(codes, |c| HealthMetricType::from_code(c).is_some())
}

fn validate_code_list(codes: &Vec<u32>, known: impl Fn(u32) -> bool) -> Result<(), ContractError> {
    if codes.len() > MAX_CODES_PER_LIST {
        return Err(ContractError::InvalidArgument);
    }
    if codes.iter().all(known) {
        Ok(())
    } else {
        Err(ContractError::InvalidArgument)
    }
}

/// Order amounts are denominated in token base units and must be positive.
pub fn validate_amount(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidArgument);
    }
    Ok(())
}

pub fn validate_page_limit(limit: u64) -> Result<(), ContractError> {
    if limit == 0 || limit > MAX_PAGE_SIZE {
        return Err(ContractError::InvalidArgument);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use soroban_sdk::{vec, Env};

    #[test]
    fn gender_codes_are_closed() {
        assert_eq!(Gender::from_code(0), Some(Gender::Male));
        assert_eq!(Gender::from_code(2), Some(Gender::Other));
        assert_eq!(Gender::from_code(3), None);
        assert_eq!(validate_gender(99), Err(ContractError::InvalidArgument));
    }

    #[test]
    fn enumeration_codes_match_discriminants() {
        assert_eq!(AgeRange::From24To29.code(), 1);
        assert_eq!(BmiCategory::Normal.code(), 1);
        assert_eq!(ChronicCondition::Hypertension.code(), 1);
        assert_eq!(HealthMetricType::RespiratoryRate.code(), 2);
        assert_eq!(AgeRange::from_code(6), None);
        assert_eq!(BmiCategory::from_code(4), None);
    }

    #[test]
    fn code_lists_keep_duplicates_but_reject_unknown_codes() {
        let env = Env::default();

        assert!(validate_chronic_conditions(&vec![&env, 0u32, 1, 1, 0]).is_ok());
        assert!(validate_chronic_conditions(&Vec::new(&env)).is_ok());
        assert_eq!(
            validate_health_metric_types(&vec![&env, 1u32, 42]),
            Err(ContractError::InvalidArgument)
        );
    }

    #[test]
    fn code_lists_are_bounded() {
        let env = Env::default();
        let mut codes = Vec::new(&env);
        for _ in 0..=MAX_CODES_PER_LIST {
            codes.push_back(0u32);
        }
        assert_eq!(
            validate_chronic_conditions(&codes),
            Err(ContractError::InvalidArgument)
        );
    }

    #[test]
    fn ipfs_hash_must_be_non_empty() {
        let env = Env::default();
        assert!(validate_ipfs_hash(&String::from_str(&env, "QmTest123")).is_ok());
        assert_eq!(
            validate_ipfs_hash(&String::from_str(&env, "")),
            Err(ContractError::InvalidArgument)
        );
    }

    #[test]
    fn page_limit_is_bounded() {
        assert!(validate_page_limit(1).is_ok());
        assert!(validate_page_limit(MAX_PAGE_SIZE).is_ok());
        assert_eq!(validate_page_limit(0), Err(ContractError::InvalidArgument));
        assert_eq!(
            validate_page_limit(MAX_PAGE_SIZE + 1),
            Err(ContractError::InvalidArgument)
        );
    }

    #[test]
    fn amount_must_be_positive() {
        assert!(validate_amount(1).is_ok());
        assert_eq!(validate_amount(0), Err(ContractError::InvalidArgument));
        assert_eq!(validate_amount(-5), Err(ContractError::InvalidArgument));
    }
}
