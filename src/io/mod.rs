//! Descriptor and console plumbing for the demos.

pub mod console;
pub mod redirect;

pub use console::{announce, raw_stdout, Role};
pub use redirect::{redirect_stdin, RedirectError};
