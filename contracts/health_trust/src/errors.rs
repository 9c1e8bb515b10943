use soroban_sdk::{contracttype, Env, String};

/// Error categories for classifying marketplace failures
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Invalid input parameters or lifecycle misuse
    Validation = 1,
    /// Caller lacks the role required for the operation
    Authorization = 2,
    /// Referenced dataset or order does not exist
    NotFound = 3,
    /// Operation conflicts with the current state of a dataset or order
    StateConflict = 4,
    /// Token movement during settlement was rejected
    Settlement = 5,
    /// Contract-level conditions such as the circuit breaker
    System = 6,
}

/// Error severity levels indicating the impact and urgency of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

/// Classification snapshot for a single error, suitable for off-chain reporting.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorContext {
    pub error_code: u32,
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub message: String,
    pub retryable: bool,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidArgument = 4,
    NotFound = 5,
    AlreadyCompleted = 6,
    TransferFailed = 7,
    DatasetInactive = 8,
    OrderMismatch = 9,
    Paused = 10,
}

impl ContractError {
    pub const ALL: [ContractError; 10] = [
        ContractError::NotInitialized,
        ContractError::AlreadyInitialized,
        ContractError::Unauthorized,
        ContractError::InvalidArgument,
        ContractError::NotFound,
        ContractError::AlreadyCompleted,
        ContractError::TransferFailed,
        ContractError::DatasetInactive,
        ContractError::OrderMismatch,
        ContractError::Paused,
    ];

    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::InvalidArgument
            | ContractError::OrderMismatch => ErrorCategory::Validation,
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::NotFound => ErrorCategory::NotFound,
            ContractError::AlreadyCompleted | ContractError::DatasetInactive => {
                ErrorCategory::StateConflict
            }
            ContractError::TransferFailed => ErrorCategory::Settlement,
            ContractError::Paused => ErrorCategory::System,
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::InvalidArgument
            | ContractError::NotFound
            | ContractError::DatasetInactive => ErrorSeverity::Low,
            ContractError::Unauthorized
            | ContractError::AlreadyCompleted
            | ContractError::OrderMismatch => ErrorSeverity::Medium,
            ContractError::TransferFailed => ErrorSeverity::High,
            ContractError::Paused => ErrorSeverity::Critical,
        }
    }

    /// Returns whether the caller may succeed by retrying after fixing
    /// external conditions (e.g. re-approving a token allowance).
    pub fn retryable(&self) -> bool {
        matches!(self, ContractError::TransferFailed)
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller is not authorized for this operation",
            ContractError::InvalidArgument => "Invalid argument",
            ContractError::NotFound => "Dataset or order not found",
            ContractError::AlreadyCompleted => "Order has already been completed",
            ContractError::TransferFailed => "Token transfer was rejected",
            ContractError::DatasetInactive => "Dataset is not accepting new orders",
            ContractError::OrderMismatch => "Order does not match the expected terms",
            ContractError::Paused => "Contract operations are currently paused",
        }
    }
}

/// Builds the reporting context for an error code.
/// Returns `None` for codes outside the contract's error range.
pub fn describe_error(env: &Env, error_code: u32) -> Option<ErrorContext> {
    let error = ContractError::ALL
        .iter()
        .find(|e| **e as u32 == error_code)
        .copied()?;

    Some(ErrorContext {
        error_code,
        category: error.category(),
        severity: error.severity(),
        message: String::from_str(env, error.message()),
        retryable: error.retryable(),
    })
}
