// tests/processor_scenarios.rs
//
// Event-processor behaviour end to end, with a recording backend and Tokio's
// paused clock so debounce waits elapse instantly and deterministically.

use std::error::Error;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep, Instant};

use scd_notify::engine::{EventProcessor, NotifierCore, OperationTable, ProxyEvent, Source};
use scd_notify_test_utils::builders::ConfigFileBuilder;
use scd_notify_test_utils::recording_actuator::{Action, RecordingActuator};
use scd_notify_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

const MARKER: &str = "S PINCACHE_PUT 1/D2760001240103040006123456780000/OPENPGP.1\n";

/// auth waits 1s, sign 2s, decrypt 3s.
fn processor(
    actuator: RecordingActuator,
    rx: mpsc::UnboundedReceiver<ProxyEvent>,
) -> EventProcessor<RecordingActuator> {
    let cfg = ConfigFileBuilder::new()
        .auth_wait_time(1.0)
        .sign_wait_time(2.0)
        .decrypt_wait_time(3.0)
        .build();
    let core = NotifierCore::new(OperationTable::from_config(&cfg));
    EventProcessor::new(core, rx, actuator)
}

fn inbound(line: &str) -> ProxyEvent {
    ProxyEvent::line(Source::Inbound, line)
}

fn outbound(line: &str) -> ProxyEvent {
    ProxyEvent::line(Source::Outbound, line)
}

fn show(description: &str, wait_time: f64) -> Action {
    Action::Show {
        description: description.to_string(),
        wait_time,
    }
}

#[tokio::test(start_paused = true)]
async fn sign_followed_by_silence_notifies_then_restart_cancels() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::unbounded_channel();
    let actuator = RecordingActuator::new();
    let actions = actuator.actions();

    tx.send(inbound("PKSIGN --hash=sha256 OPENPGP.1\n"))?;
    tx.send(outbound(MARKER))?;
    let handle = tokio::spawn(processor(actuator, rx).run());

    sleep(Duration::from_millis(2500)).await;
    assert_eq!(RecordingActuator::snapshot(&actions), vec![show("signing", 2.0)]);

    tx.send(inbound("RESTART\n"))?;
    // The operation was reset, so a later marker followed by silence is
    // ignored.
    tx.send(outbound(MARKER))?;
    sleep(Duration::from_secs(5)).await;

    tx.send(ProxyEvent::closed(Source::Inbound))?;
    with_timeout(handle).await?;

    assert_eq!(
        RecordingActuator::snapshot(&actions),
        vec![show("signing", 2.0), Action::Cancel]
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn traffic_right_behind_the_marker_suppresses_notification() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::unbounded_channel();
    let actuator = RecordingActuator::new();
    let actions = actuator.actions();

    tx.send(inbound("PKAUTH OPENPGP.3\n"))?;
    tx.send(outbound(MARKER))?;
    tx.send(outbound("D \x01\x02\x03\n"))?;
    tx.send(ProxyEvent::closed(Source::Outbound))?;

    let start = Instant::now();
    with_timeout(processor(actuator, rx).run()).await;

    assert!(RecordingActuator::snapshot(&actions).is_empty());
    assert!(start.elapsed() < Duration::from_secs(1), "processor should not have waited");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn traffic_during_the_wait_suppresses_notification() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::unbounded_channel();
    let actuator = RecordingActuator::new();
    let actions = actuator.actions();

    tx.send(inbound("PKAUTH OPENPGP.3\n"))?;
    tx.send(outbound(MARKER))?;
    let handle = tokio::spawn(processor(actuator, rx).run());

    sleep(Duration::from_millis(500)).await;
    tx.send(outbound("OK\n"))?;
    sleep(Duration::from_secs(3)).await;

    tx.send(ProxyEvent::closed(Source::Inbound))?;
    with_timeout(handle).await?;

    assert!(RecordingActuator::snapshot(&actions).is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn marker_without_pending_operation_is_ignored() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::unbounded_channel();
    let actuator = RecordingActuator::new();
    let actions = actuator.actions();

    tx.send(outbound(MARKER))?;
    let start = Instant::now();
    let handle = tokio::spawn(processor(actuator, rx).run());

    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
    tx.send(ProxyEvent::closed(Source::Outbound))?;
    with_timeout(handle).await?;

    assert!(RecordingActuator::snapshot(&actions).is_empty());
    assert!(start.elapsed() < Duration::from_secs(1), "processor should not have waited");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn end_of_stream_while_notified_exits_without_cancel() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::unbounded_channel();
    let actuator = RecordingActuator::new();
    let actions = actuator.actions();

    tx.send(inbound("PKDECRYPT OPENPGP.2\n"))?;
    tx.send(outbound(MARKER))?;
    let handle = tokio::spawn(processor(actuator, rx).run());

    sleep(Duration::from_millis(3500)).await;
    assert_eq!(RecordingActuator::snapshot(&actions), vec![show("encryption", 3.0)]);

    tx.send(ProxyEvent::closed(Source::Inbound))?;
    with_timeout(handle).await?;

    assert_eq!(RecordingActuator::snapshot(&actions), vec![show("encryption", 3.0)]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn end_marker_arriving_mid_wait_counts_as_traffic() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::unbounded_channel();
    let actuator = RecordingActuator::new();
    let actions = actuator.actions();

    tx.send(inbound("PKSIGN\n"))?;
    tx.send(outbound(MARKER))?;
    let handle = tokio::spawn(processor(actuator, rx).run());

    sleep(Duration::from_millis(500)).await;
    tx.send(ProxyEvent::closed(Source::Outbound))?;
    with_timeout(handle).await?;

    assert!(RecordingActuator::snapshot(&actions).is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn any_outbound_line_after_the_notification_cancels_it() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::unbounded_channel();
    let actuator = RecordingActuator::new();
    let actions = actuator.actions();

    tx.send(inbound("PKAUTH OPENPGP.3\n"))?;
    tx.send(outbound(MARKER))?;
    let handle = tokio::spawn(processor(actuator, rx).run());

    sleep(Duration::from_millis(1500)).await;
    tx.send(outbound("D \x30\x31\n"))?;
    tx.send(outbound("OK\n"))?;
    tx.send(ProxyEvent::closed(Source::Outbound))?;
    with_timeout(handle).await?;

    assert_eq!(
        RecordingActuator::snapshot(&actions),
        vec![show("authentication", 1.0), Action::Cancel]
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn failed_show_is_swallowed_and_never_cancelled() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::unbounded_channel();
    let actuator = RecordingActuator::failing_show();
    let actions = actuator.actions();

    tx.send(inbound("PKSIGN\n"))?;
    tx.send(outbound(MARKER))?;
    let handle = tokio::spawn(processor(actuator, rx).run());

    sleep(Duration::from_millis(2500)).await;
    tx.send(inbound("RESTART\n"))?;
    tx.send(ProxyEvent::closed(Source::Inbound))?;
    with_timeout(handle).await?;

    assert_eq!(RecordingActuator::snapshot(&actions), vec![show("signing", 2.0)]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn repeated_markers_pair_each_show_with_one_cancel() -> TestResult {
    init_tracing();

    let (tx, rx) = mpsc::unbounded_channel();
    let actuator = RecordingActuator::new();
    let actions = actuator.actions();

    tx.send(inbound("PKSIGN\n"))?;
    tx.send(outbound(MARKER))?;
    let handle = tokio::spawn(processor(actuator, rx).run());

    sleep(Duration::from_millis(2500)).await;
    tx.send(inbound("PKSIGN\n"))?;
    tx.send(outbound(MARKER))?;
    sleep(Duration::from_millis(2500)).await;
    tx.send(outbound("OK\n"))?;
    tx.send(ProxyEvent::closed(Source::Outbound))?;
    with_timeout(handle).await?;

    assert_eq!(
        RecordingActuator::snapshot(&actions),
        vec![
            show("signing", 2.0),
            Action::Cancel,
            show("signing", 2.0),
            Action::Cancel,
        ]
    );
    Ok(())
}

#[tokio::test]
async fn dropped_senders_end_the_processor() {
    init_tracing();

    let (tx, rx) = mpsc::unbounded_channel::<ProxyEvent>();
    drop(tx);
    with_timeout(processor(RecordingActuator::new(), rx).run()).await;
}
