#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Fired when a provider registers a new dataset.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DatasetSubmittedEvent {
    pub dataset_id: u64,
    pub owner: Address,
    pub timestamp: u64,
}

/// Fired when a provider toggles whether a dataset accepts new orders.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DatasetStatusEvent {
    pub dataset_id: u64,
    pub owner: Address,
    pub is_active: bool,
    pub timestamp: u64,
}

/// Fired when a researcher records an access order against a dataset.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderCreatedEvent {
    pub dataset_id: u64,
    pub order_id: u64,
    pub researcher: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when an order settles and payment reaches the provider.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderCompletedEvent {
    pub dataset_id: u64,
    pub order_id: u64,
    pub provider: Address,
    pub token: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the circuit breaker is engaged or released.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseEvent {
    pub admin: Address,
    pub paused: bool,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_dataset_submitted(env: &Env, dataset_id: u64, owner: Address) {
    env.events().publish(
        (symbol_short!("DS_SUBMIT"), dataset_id, owner.clone()),
        DatasetSubmittedEvent {
            dataset_id,
            owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_dataset_status(env: &Env, dataset_id: u64, owner: Address, is_active: bool) {
    env.events().publish(
        (symbol_short!("DS_STATUS"), dataset_id),
        DatasetStatusEvent {
            dataset_id,
            owner,
            is_active,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_order_created(
    env: &Env,
    dataset_id: u64,
    order_id: u64,
    researcher: Address,
    amount: i128,
) {
    env.events().publish(
        (symbol_short!("ORD_NEW"), dataset_id, order_id),
        OrderCreatedEvent {
            dataset_id,
            order_id,
            researcher,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_order_completed(
    env: &Env,
    dataset_id: u64,
    order_id: u64,
    provider: Address,
    token: Address,
    amount: i128,
) {
    env.events().publish(
        (symbol_short!("ORD_DONE"), dataset_id, order_id),
        OrderCompletedEvent {
            dataset_id,
            order_id,
            provider,
            token,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_paused(env: &Env, admin: Address) {
    env.events().publish(
        (symbol_short!("PAUSED"), admin.clone()),
        PauseEvent {
            admin,
            paused: true,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_resumed(env: &Env, admin: Address) {
    env.events().publish(
        (symbol_short!("RESUMED"), admin.clone()),
        PauseEvent {
            admin,
            paused: false,
            timestamp: env.ledger().timestamp(),
        },
    );
}
