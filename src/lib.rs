//! Userland demonstrations of the Unix process lifecycle.
//!
//! This crate wraps the primitives the demo binaries chain together --
//! duplication (`fork`), program-image replacement (`exec`), child reaping
//! (`wait`), and standard-input rebinding -- behind safe interfaces, and
//! keeps the console reporting injectable so tests can pin down per-branch
//! output without depending on cross-branch interleaving.
//!
//! Unix only: everything here bottoms out in libc process calls.

pub mod io;
pub mod process;

pub use process::{fork, wait_any, wait_pid, Command, ForkResult, ProcessId, WaitStatus};
