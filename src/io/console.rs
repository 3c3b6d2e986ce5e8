//! Role-tagged console lines
//!
//! Both sides of a fork write to the shared console with no coordination,
//! so cross-branch interleaving is non-deterministic by design. Reporting
//! goes through an injectable writer so tests can assert per-branch
//! content and intra-branch ordering without betting on the interleaving.

use std::fs::File;
use std::io::{self, Write};
use std::os::fd::FromRawFd;

use crate::process::ProcessId;

/// Which control path is speaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Before duplication.
    Initial,
    /// The duplicated copy.
    Child,
    /// The original, after duplication.
    Parent,
}

impl Role {
    fn label(self) -> &'static str {
        match self {
            Role::Initial => "hello",
            Role::Child => "child",
            Role::Parent => "parent",
        }
    }
}

/// Write one role line in the `label (pid:N)` shape the demos share.
pub fn announce<W: Write>(out: &mut W, role: Role, pid: ProcessId) -> io::Result<()> {
    writeln!(out, "{} (pid:{})", role.label(), pid)
}

/// A second handle on the stdout descriptor.
///
/// Wrapping this in a `BufWriter` puts the buffer under the program's
/// control, which is what the buffering demo needs: Rust's own stdout is
/// line-buffered and would push `"Hello, world!\n"` out on the spot.
pub fn raw_stdout() -> io::Result<File> {
    // SAFETY: dup on the stdout slot has no memory preconditions.
    let fd = unsafe { libc::dup(libc::STDOUT_FILENO) };
    if fd == -1 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: dup returned a fresh descriptor owned exclusively by the
    // new File, which takes over closing it.
    Ok(unsafe { File::from_raw_fd(fd) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announce_is_label_then_pid() {
        let mut buf = Vec::new();
        announce(&mut buf, Role::Child, ProcessId::current()).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.starts_with("child (pid:"));
        assert!(line.ends_with(")\n"));
    }

    #[test]
    fn roles_have_distinct_labels() {
        assert_ne!(Role::Initial.label(), Role::Child.label());
        assert_ne!(Role::Child.label(), Role::Parent.label());
    }
}
