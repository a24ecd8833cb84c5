//! Unified error types for the waste-bank service.
//!
//! Validation variants are user-correctable and abort the operation with no
//! partial write. Lookup variants signal a missing referenced row on a write
//! path; read-time aggregation over dangling references never errors (the
//! record simply contributes zero). `Database` wraps any SeaORM failure and
//! is the retryable infrastructure case.

use thiserror::Error;

/// All errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Withdrawal or deposit amount is zero, negative, or otherwise unusable
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// Bottle count must be a positive integer
    #[error("Invalid bottle count: {count}")]
    InvalidBottleCount {
        /// The rejected count
        count: i64,
    },

    /// Trashbag withdrawal amount must be a positive integer
    #[error("Invalid withdrawal amount: {amount}")]
    InvalidWithdrawalAmount {
        /// The rejected amount
        amount: i64,
    },

    /// Conversion rate must be at least one bottle per trashbag
    #[error("Invalid conversion rate: {rate} (must be >= 1)")]
    InvalidRate {
        /// The rejected rate
        rate: i64,
    },

    /// Requested more trashbags than the student has available
    #[error("Insufficient trashbags: {available} available, {requested} requested")]
    InsufficientTrashbags {
        /// Trashbags currently available for withdrawal
        available: i64,
        /// Trashbags requested
        requested: i64,
    },

    /// Requested more Rupiah than the legacy savings balance holds
    #[error("Insufficient balance: Rp {balance} available, Rp {requested} requested")]
    InsufficientBalance {
        /// Current savings balance
        balance: f64,
        /// Amount requested
        requested: f64,
    },

    /// Withdrawal description is empty after trimming whitespace
    #[error("Withdrawal description must not be empty")]
    EmptyDescription,

    /// A required text field is empty after trimming whitespace
    #[error("Field '{field}' must not be empty")]
    EmptyField {
        /// Name of the offending field
        field: String,
    },

    /// Status change not permitted by the withdrawal state machine
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status
        from: String,
        /// Requested status
        to: String,
    },

    /// Import batch is missing a required column
    #[error("Import is missing required column '{column}'")]
    MissingColumn {
        /// Logical name of the missing column
        column: String,
    },

    /// Import row carries a non-numeric NIS
    #[error("Row {row}: NIS '{nis}' is not numeric")]
    InvalidNis {
        /// 1-based data row number
        row: usize,
        /// The offending NIS value
        nis: String,
    },

    /// The same NIS appears more than once within an import batch
    #[error("Row {row}: duplicate NIS '{nis}' in import batch")]
    DuplicateNis {
        /// 1-based data row number of the second occurrence
        row: usize,
        /// The duplicated NIS value
        nis: String,
    },

    /// A student with this NIS already exists
    #[error("Student with NIS '{nis}' already exists")]
    DuplicateStudent {
        /// The conflicting NIS
        nis: String,
    },

    /// Referenced student does not exist
    #[error("Student not found: {id}")]
    StudentNotFound {
        /// Student id or NIS used in the lookup
        id: String,
    },

    /// Referenced waste type does not exist
    #[error("Waste type not found: {id}")]
    WasteTypeNotFound {
        /// Waste type id used in the lookup
        id: i64,
    },

    /// Referenced withdrawal request does not exist
    #[error("Withdrawal request not found: {id}")]
    WithdrawalNotFound {
        /// Withdrawal id used in the lookup
        id: i64,
    },

    /// Referenced class does not exist
    #[error("Class not found: {id}")]
    ClassNotFound {
        /// Class id used in the lookup
        id: i64,
    },

    /// Waste type has no legacy price and cannot value a weight deposit
    #[error("Waste type '{waste_type}' has no price per kg configured")]
    MissingPrice {
        /// Name of the waste type
        waste_type: String,
    },

    /// Configuration problem (file missing, malformed, bad value)
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// Database error from the persistence layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
