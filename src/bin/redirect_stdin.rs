//! Variant 2: rebind the child's stdin to a file, then exec `wc` bare.
//!
//! `wc` gets no filename argument, so it reads whatever the stdin slot
//! points at. After the rebinding that is this demo's own source file,
//! and the counts come out identical to naming the file explicitly.

use std::path::Path;

use anyhow::{Context, Result};
use proclab::io::redirect::redirect_stdin;
use proclab::process::{self, fork, wait_any, Command, ForkResult};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match fork().context("fork failed")? {
        ForkResult::Child => {
            redirect_stdin(Path::new(file!()))?;
            let err = match Command::new("wc")?.exec() {
                Err(err) => err,
                Ok(done) => match done {},
            };
            eprintln!("child: {err}");
            process::exit_immediately(127);
        }
        ForkResult::Parent { .. } => {
            wait_any().context("wait failed")?;
        }
    }
    Ok(())
}
