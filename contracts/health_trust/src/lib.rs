#![no_std]

pub mod errors;
pub mod events;
pub mod orders;
pub mod registry;
pub mod validation;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol, Vec};

pub use errors::{ContractError, ErrorCategory, ErrorContext, ErrorSeverity};
pub use orders::Order;
pub use registry::{Dataset, DatasetInput};
pub use validation::{AgeRange, BmiCategory, ChronicCondition, Gender, HealthMetricType};

// ── Storage key constants ────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
const PAUSED: Symbol = symbol_short!("PAUSED");

pub(crate) const TTL_THRESHOLD: u32 = 5184000;
pub(crate) const TTL_EXTEND_TO: u32 = 10368000;

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct HealthTrustContract;

#[contractimpl]
impl HealthTrustContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the marketplace with the address allowed to pause it.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        Self::extend_instance_ttl(&env);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    // ── Circuit breaker ─────────────────────────────────────────────────────

    /// Halt every state-changing marketplace call. Reads keep working.
    pub fn pause(env: Env, admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        admin.require_auth();
        Self::require_admin(&env, &admin)?;

        env.storage().instance().set(&PAUSED, &true);
        Self::extend_instance_ttl(&env);

        events::publish_paused(&env, admin);

        Ok(())
    }

    pub fn unpause(env: Env, admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        admin.require_auth();
        Self::require_admin(&env, &admin)?;

        env.storage().instance().set(&PAUSED, &false);
        Self::extend_instance_ttl(&env);

        events::publish_resumed(&env, admin);

        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        env.storage().instance().get(&PAUSED).unwrap_or(false)
    }

    // ── Dataset registry ────────────────────────────────────────────────────

    /// Register a dataset descriptor owned by `provider` and return its id.
    ///
    /// Fails with `InvalidArgument` when the content locator is empty or any
    /// enumeration code falls outside its closed set.
    #[allow(clippy::too_many_arguments)]
    pub fn submit_dataset(
        env: Env,
        provider: Address,
        ipfs_hash: String,
        gender: u32,
        age_range: u32,
        bmi_category: u32,
        chronic_conditions: Vec<u32>,
        health_metric_types: Vec<u32>,
    ) -> Result<u64, ContractError> {
        Self::require_writable(&env)?;
        provider.require_auth();

        let input = DatasetInput {
            ipfs_hash,
            gender,
            age_range,
            bmi_category,
            chronic_conditions,
            health_metric_types,
        };
        let id = registry::submit(&env, provider, input)?;

        Self::extend_instance_ttl(&env);
        Ok(id)
    }

    pub fn get_dataset(env: Env, id: u64) -> Result<Dataset, ContractError> {
        registry::load_dataset(&env, id)
    }

    pub fn get_dataset_hash(env: Env, id: u64) -> Result<String, ContractError> {
        registry::load_dataset(&env, id).map(|d| d.ipfs_hash)
    }

    /// Every registered dataset, in id order.
    pub fn get_all_datasets(env: Env) -> Result<Vec<Dataset>, ContractError> {
        registry::all_datasets(&env)
    }

    /// At most `limit` datasets starting at id `offset`. `limit` must be in
    /// `1..=MAX_PAGE_SIZE`; an offset past the end yields an empty page.
    pub fn get_datasets_page(
        env: Env,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Dataset>, ContractError> {
        validation::validate_page_limit(limit)?;
        registry::datasets_page(&env, offset, limit)
    }

    /// Ids of the datasets registered by `owner`, in id order.
    pub fn get_datasets_by_owner(env: Env, owner: Address) -> Result<Vec<u64>, ContractError> {
        registry::datasets_by_owner(&env, &owner)
    }

    pub fn dataset_count(env: Env) -> u64 {
        registry::dataset_count(&env)
    }

    /// Owner-only toggle. An inactive dataset rejects new orders but pending
    /// orders against it can still be completed.
    pub fn set_dataset_active(
        env: Env,
        provider: Address,
        id: u64,
        active: bool,
    ) -> Result<(), ContractError> {
        Self::require_writable(&env)?;
        provider.require_auth();

        registry::set_active(&env, &provider, id, active)?;

        Self::extend_instance_ttl(&env);
        Ok(())
    }

    // ── Order ledger ────────────────────────────────────────────────────────

    /// Record `researcher`'s request to access `dataset_id` for `amount` of
    /// `token`. Returns the order's index within the dataset.
    ///
    /// Payment is pulled at completion time, so the researcher must approve
    /// this contract as spender before the provider completes the order.
    pub fn order_request(
        env: Env,
        researcher: Address,
        dataset_id: u64,
        amount: i128,
        token: Address,
    ) -> Result<u64, ContractError> {
        Self::require_writable(&env)?;
        researcher.require_auth();

        let index = orders::request(&env, researcher, dataset_id, amount, token)?;

        Self::extend_instance_ttl(&env);
        Ok(index)
    }

    pub fn get_order(
        env: Env,
        dataset_id: u64,
        order_index: u64,
    ) -> Result<Order, ContractError> {
        orders::load_order(&env, dataset_id, order_index)
    }

    pub fn order_count(env: Env, dataset_id: u64) -> u64 {
        orders::order_count(&env, dataset_id)
    }

    /// Return the order after confirming the caller is its requester and the
    /// recorded payer and amount match the expected terms.
    pub fn validate_order(
        env: Env,
        researcher: Address,
        dataset_id: u64,
        order_index: u64,
        expected_from: Address,
        expected_amount: i128,
    ) -> Result<Order, ContractError> {
        researcher.require_auth();
        orders::validate(
            &env,
            &researcher,
            dataset_id,
            order_index,
            &expected_from,
            expected_amount,
        )
    }

    /// Settle a pending order. Only the dataset owner may call this.
    ///
    /// Fails with `TransferFailed` when the requester's allowance or balance
    /// does not cover the amount; the order then stays pending and can be
    /// completed after the requester tops up.
    pub fn complete_order(
        env: Env,
        provider: Address,
        dataset_id: u64,
        order_index: u64,
    ) -> Result<(), ContractError> {
        Self::require_writable(&env)?;
        provider.require_auth();

        orders::complete(&env, &provider, dataset_id, order_index)?;

        Self::extend_instance_ttl(&env);
        Ok(())
    }

    // ── Diagnostics ─────────────────────────────────────────────────────────

    /// Category, severity, message and retry hint for a contract error code.
    pub fn describe_error(env: Env, error_code: u32) -> Option<ErrorContext> {
        errors::describe_error(&env, error_code)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard for every state-changing marketplace call.
    fn require_writable(env: &Env) -> Result<(), ContractError> {
        Self::require_initialized(env)?;
        if env.storage().instance().get(&PAUSED).unwrap_or(false) {
            return Err(ContractError::Paused);
        }
        Ok(())
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
