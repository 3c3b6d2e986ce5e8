//! Child reaping
//!
//! A terminated child stays a zombie, with its exit status held by the
//! kernel, until its parent reaps it. Every expected child therefore gets
//! exactly one wait call. Waiting with no children left returns
//! [`WaitError::NoChildren`] immediately instead of blocking forever.

use std::io;

use thiserror::Error;

use super::ProcessId;

/// Nothing was reaped.
#[derive(Debug, Error)]
pub enum WaitError {
    /// The caller has no remaining children (ECHILD). Returned without
    /// blocking.
    #[error("no children to wait for")]
    NoChildren,
    #[error("wait failed")]
    Os(#[source] io::Error),
}

/// Exit information for one reaped child.
#[derive(Debug, Clone, Copy)]
pub struct WaitStatus {
    pid: ProcessId,
    raw: libc::c_int,
}

impl WaitStatus {
    /// Identity of the child this status belongs to.
    pub fn pid(&self) -> ProcessId {
        self.pid
    }

    /// Exit code, if the child terminated normally.
    pub fn exit_code(&self) -> Option<i32> {
        if libc::WIFEXITED(self.raw) {
            Some(libc::WEXITSTATUS(self.raw))
        } else {
            None
        }
    }

    /// Signal number, if the child was killed by a signal.
    pub fn signal(&self) -> Option<i32> {
        if libc::WIFSIGNALED(self.raw) {
            Some(libc::WTERMSIG(self.raw))
        } else {
            None
        }
    }
}

/// Block until any direct child terminates, then reap it.
pub fn wait_any() -> Result<WaitStatus, WaitError> {
    wait_impl(-1)
}

/// Block until one specific child terminates, then reap it.
pub fn wait_pid(pid: ProcessId) -> Result<WaitStatus, WaitError> {
    wait_impl(pid.as_raw())
}

fn wait_impl(pid: libc::pid_t) -> Result<WaitStatus, WaitError> {
    let mut raw: libc::c_int = 0;
    // SAFETY: `raw` is a valid out-pointer for the status word.
    let rc = unsafe { libc::waitpid(pid, &mut raw, 0) };
    if rc == -1 {
        let err = io::Error::last_os_error();
        return Err(match err.raw_os_error() {
            Some(libc::ECHILD) => WaitError::NoChildren,
            _ => WaitError::Os(err),
        });
    }
    let status = WaitStatus {
        pid: ProcessId::new(rc),
        raw,
    };
    log::debug!(
        "wait: reaped child {} (exit_code={:?}, signal={:?})",
        status.pid,
        status.exit_code(),
        status.signal()
    );
    Ok(status)
}
