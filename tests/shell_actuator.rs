// tests/shell_actuator.rs

#![cfg(unix)]

use std::error::Error;
use std::path::Path;
use std::time::Duration;

use scd_notify::notify::{NotificationBackend, NotifyContext, ShellActuator};
use scd_notify::types::WaitTime;
use scd_notify_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

/// Poll until `path` has non-empty contents.
async fn wait_for_contents(path: &Path) -> String {
    loop {
        if let Ok(s) = tokio::fs::read_to_string(path).await {
            if !s.is_empty() {
                return s;
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

#[tokio::test]
async fn show_runs_the_rendered_template() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let out = dir.path().join("show.txt");
    let template = format!(
        "printf '%s' '$description/${{wait_time}}/$unknown' > '{}'",
        out.display()
    );
    let mut actuator = ShellActuator::new(template, "true");

    let ctx = NotifyContext {
        description: "signing".to_string(),
        wait_time: WaitTime::Fractional(1.5),
    };
    actuator.show(&ctx).await?;

    let contents = with_timeout(wait_for_contents(&out)).await;
    assert_eq!(contents, "signing/1.5/$unknown");
    Ok(())
}

#[tokio::test]
async fn cancel_runs_its_command() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let out = dir.path().join("cancel.txt");
    let mut actuator = ShellActuator::new("true", format!("echo cancelled > '{}'", out.display()));

    actuator.cancel().await?;

    let contents = with_timeout(wait_for_contents(&out)).await;
    assert_eq!(contents, "cancelled\n");
    Ok(())
}

#[tokio::test]
async fn failing_command_is_not_an_error() -> TestResult {
    init_tracing();

    let mut actuator = ShellActuator::new("exit 3", "false");
    let ctx = NotifyContext {
        description: "authentication".to_string(),
        wait_time: WaitTime::Whole(1),
    };

    actuator.show(&ctx).await?;
    actuator.cancel().await?;
    Ok(())
}
