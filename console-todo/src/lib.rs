//! Single-session, in-memory todo list.
//!
//! [`store::TaskStore`] is the core: it owns the task collection,
//! assigns ids, and guards the validation invariants. [`shell::Shell`]
//! is the console front end that drives a store through a menu loop.
//! Nothing is persisted; state lives for one run of the process.

pub mod config;
pub mod shell;
pub mod store;
pub mod task;

pub use shell::Shell;
pub use store::{TaskStore, ValidationError};
pub use task::Task;
