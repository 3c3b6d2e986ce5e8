//! Process lifecycle primitives
//!
//! This module handles process duplication, program-image replacement, and
//! child reaping. A process is identified by an opaque pid assigned by the
//! kernel at duplication time; the pid picks the parent/child control path
//! and lets the parent wait on a specific child.

use std::fmt;

pub mod exec;
pub mod fork;
pub mod wait;

pub use exec::{Command, ExecError};
pub use fork::{fork, ForkError, ForkResult};
pub use wait::{wait_any, wait_pid, WaitError, WaitStatus};

/// Process identifier assigned by the kernel at duplication time.
///
/// Valid only for the lifetime of the process it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessId(libc::pid_t);

impl ProcessId {
    pub(crate) fn new(raw: libc::pid_t) -> Self {
        ProcessId(raw)
    }

    /// Identity of the calling process.
    pub fn current() -> Self {
        // SAFETY: getpid has no preconditions and cannot fail.
        ProcessId(unsafe { libc::getpid() })
    }

    /// The raw pid value.
    pub fn as_raw(self) -> libc::pid_t {
        self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminate the calling process immediately.
///
/// Bypasses destructors, atexit handlers, and stream flushing: anything
/// still sitting in a userspace buffer is discarded with the image. The
/// buffering demonstration depends on exactly that.
pub fn exit_immediately(code: i32) -> ! {
    // SAFETY: _exit terminates the calling process and nothing else.
    unsafe { libc::_exit(code) }
}
