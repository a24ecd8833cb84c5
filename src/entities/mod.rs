//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod class;
pub mod deposit;
pub mod savings;
pub mod student;
pub mod trashbag_withdrawal;
pub mod waste_type;
pub mod withdrawal;

// Re-export specific types to avoid conflicts
pub use class::{Column as ClassColumn, Entity as Class, Model as ClassModel};
pub use deposit::{Column as DepositColumn, Entity as Deposit, Model as DepositModel};
pub use savings::{Column as SavingsColumn, Entity as Savings, Model as SavingsModel};
pub use student::{Column as StudentColumn, Entity as Student, Model as StudentModel};
pub use trashbag_withdrawal::{
    Column as TrashbagWithdrawalColumn, Entity as TrashbagWithdrawal,
    Model as TrashbagWithdrawalModel,
};
pub use waste_type::{Column as WasteTypeColumn, Entity as WasteType, Model as WasteTypeModel};
pub use withdrawal::{Column as WithdrawalColumn, Entity as Withdrawal, Model as WithdrawalModel};
