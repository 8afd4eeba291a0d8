//! Cancellation and deadlines for API calls.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::ClientError;

/// Carries cancellation and an optional deadline into every API call.
///
/// A [Transport](crate::Transport) checks the context before it sends a request
/// and bounds the request by whatever time is left until the deadline.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use glesys::Context;
///
/// let ctx = Context::with_timeout(Duration::from_secs(30));
/// let handle = ctx.cancel_handle();
///
/// assert!(ctx.check().is_ok());
/// handle.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Context {
    /// A context with no deadline, only cancelled through a [CancelHandle].
    pub fn background() -> Self {
        Self::default()
    }

    /// A context whose deadline is `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context with the given deadline.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancelled: Arc::default(),
            deadline: Some(deadline),
        }
    }

    /// Returns a handle that cancels this context, and all of its clones, from anywhere.
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            cancelled: self.cancelled.clone(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the deadline, saturating at zero.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Fails if the context was cancelled or its deadline has passed.
    pub fn check(&self) -> Result<(), ClientError> {
        if self.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        if self.remaining().is_some_and(|left| left.is_zero()) {
            return Err(ClientError::DeadlineExceeded);
        }
        Ok(())
    }
}

/// Cancels the [Context] it was taken from.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}
