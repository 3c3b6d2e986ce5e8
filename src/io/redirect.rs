//! Standard-input rebinding
//!
//! The classic form of this demonstration closes descriptor 0 and
//! immediately opens the target file, relying on the kernel handing out
//! the lowest free slot. That protocol is order-fragile: any descriptor
//! operation between the close and the open binds the file to the wrong
//! slot, and nothing validates the outcome. The rebinding here installs
//! the file onto the stdin slot with an explicit dup2 instead, which pins
//! the binding regardless of ordering. The observable contract is the
//! same either way: the next program image reads the file where it
//! expects the console.

use std::fs::File;
use std::io;
use std::os::fd::AsRawFd;
use std::path::Path;

use thiserror::Error;

/// The stdin slot still holds its previous binding.
#[derive(Debug, Error)]
pub enum RedirectError {
    #[error("cannot open `{path}` for stdin")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot install `{path}` onto the stdin slot")]
    Install {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Rebind the standard-input slot to `path`.
///
/// Destructive: the previous stdin binding is discarded and cannot be
/// recovered within this process. Meant for a forked child about to
/// replace its image.
pub fn redirect_stdin(path: &Path) -> Result<(), RedirectError> {
    let file = File::open(path).map_err(|source| RedirectError::Open {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!(
        "redirect_stdin: binding {} onto fd {}",
        path.display(),
        libc::STDIN_FILENO
    );
    // SAFETY: both descriptors are open and owned by this process; dup2
    // atomically discards the old stdin and installs the file there.
    let rc = unsafe { libc::dup2(file.as_raw_fd(), libc::STDIN_FILENO) };
    if rc == -1 {
        return Err(RedirectError::Install {
            path: path.display().to_string(),
            source: io::Error::last_os_error(),
        });
    }
    // `file` closes here; the stdin slot keeps its own reference.
    Ok(())
}
