use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use scd_notify::errors::{Result, ScdNotifyError};
use scd_notify::notify::{NotificationBackend, NotifyContext};

/// What the processor asked the backend to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Show { description: String, wait_time: f64 },
    Cancel,
}

/// A fake notification backend that:
/// - records every show/cancel request in order
/// - optionally reports `show` as failed to launch.
#[derive(Debug, Clone, Default)]
pub struct RecordingActuator {
    actions: Arc<Mutex<Vec<Action>>>,
    fail_show: bool,
}

impl RecordingActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose `show` always errors (the attempt is still recorded).
    pub fn failing_show() -> Self {
        Self {
            fail_show: true,
            ..Self::default()
        }
    }

    /// Shared handle to the recorded actions; stays valid after the actuator
    /// has been moved into a processor.
    pub fn actions(&self) -> Arc<Mutex<Vec<Action>>> {
        Arc::clone(&self.actions)
    }

    pub fn snapshot(actions: &Arc<Mutex<Vec<Action>>>) -> Vec<Action> {
        actions.lock().unwrap().clone()
    }
}

impl NotificationBackend for RecordingActuator {
    fn show<'a>(
        &'a mut self,
        ctx: &'a NotifyContext,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.actions.lock().unwrap().push(Action::Show {
                description: ctx.description.clone(),
                wait_time: ctx.wait_time.as_secs_f64(),
            });

            if self.fail_show {
                return Err(ScdNotifyError::Other(anyhow!("show disabled for this test")));
            }
            Ok(())
        })
    }

    fn cancel(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            self.actions.lock().unwrap().push(Action::Cancel);
            Ok(())
        })
    }
}
