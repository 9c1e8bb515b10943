//! Dataset registry: the authoritative store of dataset descriptors and the
//! single source of truth for provider ownership.
//!
//! Datasets live in persistent storage under `(DATASET, id)`. Ids are handed
//! out sequentially from zero by an instance-storage counter and are never
//! reused; datasets are soft-deactivated, never removed.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

use crate::validation::{self, AgeRange, BmiCategory, Gender};
use crate::{events, ContractError, TTL_EXTEND_TO, TTL_THRESHOLD};

const DATASET: Symbol = symbol_short!("DATASET");
const DATASET_COUNT: Symbol = symbol_short!("DS_CNT");

/// An anonymized health-data descriptor registered by a provider.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dataset {
    pub id: u64,
    pub ipfs_hash: String,
    pub gender: u32,
    pub age_range: u32,
    pub bmi_category: u32,
    pub chronic_conditions: Vec<u32>,
    pub health_metric_types: Vec<u32>,
    pub owner: Address,
    pub is_active: bool,
    pub created_at: u64,
}

/// Submission payload, bundled so the registry can validate it as a unit.
#[derive(Clone, Debug)]
pub struct DatasetInput {
    pub ipfs_hash: String,
    pub gender: u32,
    pub age_range: u32,
    pub bmi_category: u32,
    pub chronic_conditions: Vec<u32>,
    pub health_metric_types: Vec<u32>,
}

impl DatasetInput {
    /// Checks every field against its closed set and returns the decoded
    /// demographic profile. Nothing is written on failure.
    pub fn validate(&self) -> Result<(Gender, AgeRange, BmiCategory), ContractError> {
        validation::validate_ipfs_hash(&self.ipfs_hash)?;
        let gender = validation::validate_gender(self.gender)?;
        let age_range = validation::validate_age_range(self.age_range)?;
        let bmi_category = validation::validate_bmi_category(self.bmi_category)?;
        validation::validate_chronic_conditions(&self.chronic_conditions)?;
        validation::validate_health_metric_types(&self.health_metric_types)?;
        Ok((gender, age_range, bmi_category))
    }
}

pub(crate) fn dataset_key(id: u64) -> (Symbol, u64) {
    (DATASET, id)
}

pub fn dataset_count(env: &Env) -> u64 {
    env.storage().instance().get(&DATASET_COUNT).unwrap_or(0)
}

pub fn load_dataset(env: &Env, id: u64) -> Result<Dataset, ContractError> {
    env.storage()
        .persistent()
        .get(&dataset_key(id))
        .ok_or(ContractError::NotFound)
}

/// Keeps a dataset alive while orders against it are being placed or settled.
pub(crate) fn touch_dataset(env: &Env, id: u64) {
    env.storage()
        .persistent()
        .extend_ttl(&dataset_key(id), TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn store_dataset(env: &Env, dataset: &Dataset) {
    env.storage()
        .persistent()
        .set(&dataset_key(dataset.id), dataset);
    touch_dataset(env, dataset.id);
}

/// Validates and appends a dataset owned by `owner`, returning its id.
pub fn submit(env: &Env, owner: Address, input: DatasetInput) -> Result<u64, ContractError> {
    let (gender, age_range, bmi_category) = input.validate()?;

    let id = dataset_count(env);
    let dataset = Dataset {
        id,
        ipfs_hash: input.ipfs_hash,
        gender: gender.code(),
        age_range: age_range.code(),
        bmi_category: bmi_category.code(),
        chronic_conditions: input.chronic_conditions,
        health_metric_types: input.health_metric_types,
        owner: owner.clone(),
        is_active: true,
        created_at: env.ledger().timestamp(),
    };

    store_dataset(env, &dataset);
    env.storage()
        .instance()
        .set(&DATASET_COUNT, &id.saturating_add(1));

    events::publish_dataset_submitted(env, id, owner);

    Ok(id)
}

/// Flips the active flag. Only the owner may do so; setting the current
/// value again is accepted and still reported.
pub fn set_active(
    env: &Env,
    caller: &Address,
    id: u64,
    active: bool,
) -> Result<(), ContractError> {
    let mut dataset = load_dataset(env, id)?;
    if dataset.owner != *caller {
        return Err(ContractError::Unauthorized);
    }

    dataset.is_active = active;
    store_dataset(env, &dataset);

    events::publish_dataset_status(env, id, dataset.owner, active);

    Ok(())
}

pub fn all_datasets(env: &Env) -> Result<Vec<Dataset>, ContractError> {
    datasets_page(env, 0, dataset_count(env))
}

/// Datasets with ids in `[offset, offset + limit)`, clipped to the registry.
pub fn datasets_page(
    env: &Env,
    offset: u64,
    limit: u64,
) -> Result<Vec<Dataset>, ContractError> {
    let end = offset.saturating_add(limit).min(dataset_count(env));
    let mut out = Vec::new(env);
    for id in offset..end {
        out.push_back(load_dataset(env, id)?);
    }
    Ok(out)
}

pub fn datasets_by_owner(env: &Env, owner: &Address) -> Result<Vec<u64>, ContractError> {
    let mut out = Vec::new(env);
    for id in 0..dataset_count(env) {
        if load_dataset(env, id)?.owner == *owner {
            out.push_back(id);
        }
    }
    Ok(out)
}
