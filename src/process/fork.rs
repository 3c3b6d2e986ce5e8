//! fork() wrapper
//!
//! Duplication produces two concurrently-running copies of the caller
//! sharing only state captured at the instant of the call. Each copy
//! learns its role from the return value: the child sees zero, the parent
//! sees the child's pid. On failure no child exists at all; there is no
//! partially-created state to clean up.

use std::io;

use thiserror::Error;

use super::ProcessId;

/// Which side of a successful duplication the caller is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkResult {
    /// The original process; `child` names the new copy.
    Parent { child: ProcessId },
    /// The new copy.
    Child,
}

/// The kernel refused to duplicate the caller (resource exhaustion).
#[derive(Debug, Error)]
#[error("fork failed")]
pub struct ForkError(#[from] io::Error);

/// Duplicate the calling process.
///
/// Returns [`ForkResult::Child`] in the new process and
/// [`ForkResult::Parent`] in the original. On error the caller should
/// abort; no child was created.
pub fn fork() -> Result<ForkResult, ForkError> {
    // SAFETY: the demos fork from a single-threaded state, and forked
    // children here only write, exec, or _exit, which is all POSIX
    // promises to the copy of a possibly-threaded process.
    let rc = unsafe { libc::fork() };
    match rc {
        -1 => Err(ForkError(io::Error::last_os_error())),
        0 => Ok(ForkResult::Child),
        pid => {
            log::debug!("fork: parent {} created child {}", ProcessId::current(), pid);
            Ok(ForkResult::Parent {
                child: ProcessId::new(pid),
            })
        }
    }
}
