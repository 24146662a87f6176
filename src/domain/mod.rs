//! Domain layer: models, the state engine, and the session that composes
//! them.

pub mod allowance;
pub mod ledger;
pub mod models;
pub mod reminder;
pub mod session;
pub mod task_board;

pub use ledger::LedgerError;
pub use session::{CheckInItem, Session};
