//! Program-image replacement
//!
//! [`Command`] owns an argument vector of C strings terminated by the null
//! sentinel and hands it to execvp, which searches PATH and, on success,
//! discards the caller's code, data, and stack in place. Open descriptors
//! and the process identity survive the replacement; userspace stream
//! buffers do not, because they belong to the discarded image.
//!
//! Success never returns, and the signature says so: the Ok variant is
//! [`Infallible`], so any code written after a successful call is provably
//! unreachable. Only the failure path (program not found or not
//! executable) hands control back.

use std::convert::Infallible;
use std::ffi::{CString, NulError};
use std::io;

use thiserror::Error;

/// Replacement did not happen.
#[derive(Debug, Error)]
pub enum ExecError {
    /// An argument held an interior NUL and cannot cross the C boundary.
    #[error("argument is not representable as a C string")]
    BadArgument(#[from] NulError),
    /// The PATH search failed or the target was not executable; control
    /// returned to the caller.
    #[error("exec of `{program}` failed")]
    ReplacementFailed {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// An argument vector for program-image replacement.
///
/// The first token names the program to search for. The vector is never
/// mutated after construction and is consumed by [`Command::exec`].
pub struct Command {
    argv: Vec<CString>,
}

impl Command {
    /// Start a vector whose first token is the program name.
    pub fn new(program: &str) -> Result<Self, ExecError> {
        Ok(Command {
            argv: vec![CString::new(program)?],
        })
    }

    /// Append one argument token.
    pub fn arg(mut self, arg: &str) -> Result<Self, ExecError> {
        self.argv.push(CString::new(arg)?);
        Ok(self)
    }

    /// Pointers into the owned strings, plus the terminating null sentinel
    /// execvp requires.
    fn raw_argv(&self) -> Vec<*const libc::c_char> {
        let mut raw: Vec<*const libc::c_char> = self.argv.iter().map(|s| s.as_ptr()).collect();
        raw.push(std::ptr::null());
        raw
    }

    /// Replace the current program image with this command.
    ///
    /// On success the new image starts running and this call never
    /// returns; the process keeps its pid and open descriptors. On failure
    /// control comes back with the OS error, and the caller must report it
    /// rather than fall through silently.
    pub fn exec(self) -> Result<Infallible, ExecError> {
        let raw = self.raw_argv();
        log::debug!(
            "exec: replacing image with {:?} ({} argument tokens)",
            self.argv[0],
            self.argv.len()
        );
        // SAFETY: `raw` points into `self.argv`, which outlives the call,
        // and ends with the null sentinel.
        unsafe { libc::execvp(self.argv[0].as_ptr(), raw.as_ptr()) };

        // Only the failure path reaches this point.
        let source = io::Error::last_os_error();
        let program = self.argv[0].to_string_lossy().into_owned();
        log::error!("exec: replacement failed for `{}`: {}", program, source);
        Err(ExecError::ReplacementFailed { program, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_ends_with_null_sentinel() {
        let cmd = Command::new("wc").unwrap().arg("notes.txt").unwrap();
        let raw = cmd.raw_argv();
        assert_eq!(raw.len(), 3);
        assert!(!raw[0].is_null());
        assert!(!raw[1].is_null());
        assert!(raw[2].is_null());
    }

    #[test]
    fn interior_nul_is_rejected() {
        assert!(matches!(
            Command::new("w\0c"),
            Err(ExecError::BadArgument(_))
        ));
    }
}
