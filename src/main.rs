//! Admin backend: HTTP service exposing a liveness probe.
//! Used by: binary entrypoint.

use std::process::ExitCode;

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();
    ExitCode::from(exit_status(run().await))
}

async fn run() -> error::Result<()> {
    let config = config::Config::from_env()?;
    tracing::debug!(addr = %config.bind_addr(), "binding listener");

    let listener = server::bind(&config).await?;
    server::serve(listener).await
}

/// Logs a fatal error once and maps the outcome to a process exit status.
fn exit_status(result: error::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "admin backend exited with error");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_shutdown_exits_zero() {
        assert_eq!(exit_status(Ok(())), 0);
    }

    #[test]
    fn startup_failure_exits_nonzero() {
        let err = error::Error::InvalidPort("abc".into());
        assert_eq!(exit_status(Err(err)), 1);
    }
}
