//! # Interrupt handling for fast cancellation.
//!
//! When [`Config::abort_on_interrupt`](crate::Config::abort_on_interrupt)
//! is set, the runner installs a trap that terminates the whole process the
//! moment an interrupt signal arrives — no finish-phase flush, no partial
//! report. Fast interactive cancellation is the point; graceful unwinding
//! is explicitly not.
//!
//! ## Signals
//! **Unix platforms:**
//! - `SIGINT` (Ctrl-C in terminal)
//! - `SIGTERM` (default kill signal)
//!
//! **Windows platforms:**
//! - `Ctrl-C` via [`tokio::signal::ctrl_c`]

use tokio::task::JoinHandle;

/// Waits for an interrupt signal.
///
/// Each call creates independent signal listeners. Returns `Ok(())` when a
/// signal is received, or `Err` if listener registration fails.
#[cfg(unix)]
async fn wait_for_interrupt() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {},
        _ = sigint.recv() => {},
        _ = sigterm.recv() => {},
    }
    Ok(())
}

/// Waits for an interrupt signal.
///
/// Each call creates independent signal listeners. Returns `Ok(())` when a
/// signal is received, or `Err` if listener registration fails.
#[cfg(not(unix))]
async fn wait_for_interrupt() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

/// Spawns the abort trap: on interrupt, announce and exit immediately with
/// status 1. The returned handle should be aborted once the run completes
/// normally.
pub(crate) fn install_abort_trap() -> JoinHandle<()> {
    tokio::spawn(async {
        match wait_for_interrupt().await {
            Ok(()) => {
                println!("\nProcess aborted!");
                std::process::exit(1);
            }
            Err(err) => {
                tracing::warn!("cannot install interrupt trap: {err}");
            }
        }
    })
}
