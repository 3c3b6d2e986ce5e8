//! Variant 3: one buffered line, fork, abrupt child exit.
//!
//! `"Hello, world!\n"` is sitting in a userspace buffer when the process
//! forks, so both copies hold it. The child's immediate `_exit` discards
//! its copy unflushed; only the parent's flush at normal termination puts
//! the line on the console, so it appears exactly once.

use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use proclab::io::console::raw_stdout;
use proclab::process::{self, fork, wait_any, ForkResult};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut out = BufWriter::new(raw_stdout()?);
    out.write_all(b"Hello, world!\n")?; // buffered, not yet written

    match fork().context("fork failed")? {
        ForkResult::Child => {
            // Skips destructors: the child's copy of the buffer dies here.
            process::exit_immediately(0);
        }
        ForkResult::Parent { .. } => {
            wait_any().context("wait failed")?;
        }
    }
    // `out` drops here and flushes the parent's copy.
    Ok(())
}
