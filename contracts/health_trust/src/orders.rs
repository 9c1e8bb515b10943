//! Order ledger: per-dataset, append-only sequences of access orders and the
//! `Pending -> Completed` settlement that moves payment to the provider.
//!
//! Orders are stored under `(ORDER, dataset_id, index)` with a per-dataset
//! length counter, so indices are stable and independent across datasets.

use soroban_sdk::{contracttype, symbol_short, token, Address, Env, Symbol};

use crate::registry::{self, Dataset};
use crate::{events, validation, ContractError, TTL_EXTEND_TO, TTL_THRESHOLD};

const ORDER: Symbol = symbol_short!("ORDER");
const ORDER_COUNT: Symbol = symbol_short!("ORD_CNT");

/// A researcher's paid request for access to a dataset.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Order {
    pub id: u64,
    pub dataset_id: u64,
    pub from: Address,
    pub to: Address,
    pub amount: i128,
    pub token: Address,
    pub created_at: u64,
    pub completed: bool,
}

pub(crate) fn order_key(dataset_id: u64, index: u64) -> (Symbol, u64, u64) {
    (ORDER, dataset_id, index)
}

fn count_key(dataset_id: u64) -> (Symbol, u64) {
    (ORDER_COUNT, dataset_id)
}

pub fn order_count(env: &Env, dataset_id: u64) -> u64 {
    env.storage()
        .persistent()
        .get(&count_key(dataset_id))
        .unwrap_or(0)
}

pub fn load_order(env: &Env, dataset_id: u64, index: u64) -> Result<Order, ContractError> {
    env.storage()
        .persistent()
        .get(&order_key(dataset_id, index))
        .ok_or(ContractError::NotFound)
}

fn store_order(env: &Env, order: &Order) {
    let key = order_key(order.dataset_id, order.id);
    env.storage().persistent().set(&key, order);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Records `researcher`'s intent to pay `amount` of `token` for the dataset.
/// No funds move here; the allowance is only consulted at completion.
pub fn request(
    env: &Env,
    researcher: Address,
    dataset_id: u64,
    amount: i128,
    token: Address,
) -> Result<u64, ContractError> {
    validation::validate_amount(amount)?;

    let dataset = registry::load_dataset(env, dataset_id)?;
    if !dataset.is_active {
        return Err(ContractError::DatasetInactive);
    }
    registry::touch_dataset(env, dataset_id);

    let index = order_count(env, dataset_id);
    let order = Order {
        id: index,
        dataset_id,
        from: researcher.clone(),
        to: dataset.owner,
        amount,
        token,
        created_at: env.ledger().timestamp(),
        completed: false,
    };
    store_order(env, &order);

    let ck = count_key(dataset_id);
    env.storage().persistent().set(&ck, &index.saturating_add(1));
    env.storage()
        .persistent()
        .extend_ttl(&ck, TTL_THRESHOLD, TTL_EXTEND_TO);

    events::publish_order_created(env, dataset_id, index, researcher, amount);

    Ok(index)
}

/// Confirms that `caller` placed the order and that its recorded terms match
/// what the caller expects.
pub fn validate(
    env: &Env,
    caller: &Address,
    dataset_id: u64,
    index: u64,
    expected_from: &Address,
    expected_amount: i128,
) -> Result<Order, ContractError> {
    let order = load_order(env, dataset_id, index)?;
    if order.from != *caller {
        return Err(ContractError::Unauthorized);
    }
    if order.from != *expected_from || order.amount != expected_amount {
        return Err(ContractError::OrderMismatch);
    }
    Ok(order)
}

/// Settles a pending order: pulls `amount` from the requester to the dataset
/// owner using the allowance granted to this contract, then marks the order
/// completed. The flag is written only after the transfer succeeds.
pub fn complete(
    env: &Env,
    caller: &Address,
    dataset_id: u64,
    index: u64,
) -> Result<(), ContractError> {
    let dataset: Dataset = registry::load_dataset(env, dataset_id)?;
    if dataset.owner != *caller {
        return Err(ContractError::Unauthorized);
    }
    registry::touch_dataset(env, dataset_id);

    let mut order = load_order(env, dataset_id, index)?;
    if order.completed {
        return Err(ContractError::AlreadyCompleted);
    }

    settle(env, &order, &dataset.owner)?;

    order.completed = true;
    store_order(env, &order);

    events::publish_order_completed(
        env,
        dataset_id,
        index,
        dataset.owner,
        order.token,
        order.amount,
    );

    Ok(())
}

/// Moves the order amount from the requester to `payee`.
///
/// Every token call goes through the fallible client so a rejection, or a
/// `token` address that is not a token at all, surfaces as `TransferFailed`.
fn settle(env: &Env, order: &Order, payee: &Address) -> Result<(), ContractError> {
    let spender = env.current_contract_address();
    let client = token::Client::new(env, &order.token);

    let allowance = match client.try_allowance(&order.from, &spender) {
        Ok(Ok(allowance)) => allowance,
        _ => return Err(ContractError::TransferFailed),
    };
    let balance = match client.try_balance(&order.from) {
        Ok(Ok(balance)) => balance,
        _ => return Err(ContractError::TransferFailed),
    };
    if allowance < order.amount || balance < order.amount {
        return Err(ContractError::TransferFailed);
    }

    match client.try_transfer_from(&spender, &order.from, payee, &order.amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}
