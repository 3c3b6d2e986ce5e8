//! Variant 1: fork, exec `wc` in the child, wait in the parent.
//!
//! The child replaces its image with a word count of this demo's own
//! source file; the parent blocks until the child terminates and reports
//! the reaped pid alongside its own.

use std::io::{stdout, Write};

use anyhow::{Context, Result};
use proclab::io::console::{announce, Role};
use proclab::process::{self, fork, wait_any, Command, ForkResult, ProcessId};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut out = stdout();
    announce(&mut out, Role::Initial, ProcessId::current())?;

    match fork().context("fork failed")? {
        ForkResult::Child => {
            announce(&mut out, Role::Child, ProcessId::current())?;
            let cmd = Command::new("wc")?.arg(file!())?;
            // Successful replacement never returns, so only the failure
            // path can bind here.
            let err = match cmd.exec() {
                Err(err) => err,
                Ok(done) => match done {},
            };
            eprintln!("child: {err}");
            process::exit_immediately(127);
        }
        ForkResult::Parent { child } => {
            let status = wait_any().context("wait failed")?;
            writeln!(
                out,
                "parent of {} (rc_wait:{}) (pid:{})",
                child,
                status.pid(),
                ProcessId::current()
            )?;
        }
    }
    Ok(())
}
