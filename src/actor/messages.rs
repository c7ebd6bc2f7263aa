//! Message types for the scheduler and its consumer.
//!
//! These define the protocol between producers, the worker thread and the
//! frame consumer.

use crate::op::Operation;
use crossbeam_channel::Sender;
use std::sync::Arc;

/// Messages on the scheduler queue.
#[derive(Debug)]
pub(crate) enum Message {
    /// Apply an operation.
    Apply(Operation),
    /// Drain the queue and terminate.
    Stop,
}

/// Lifecycle of a [`Scheduler`](super::Scheduler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopState {
    /// Created; operations may be queued but nothing runs yet.
    NotStarted,
    /// The worker is applying operations.
    Running,
    /// A stop was requested; the worker is emptying the queue.
    Draining,
    /// The worker has exited.
    Stopped,
}

/// A published surface.
///
/// The consumer may keep the frame as long as it likes. Once the scheduler
/// needs that surface again (two commits later) it copies it first, so a
/// retained frame goes stale but is never overwritten.
pub struct Frame<S> {
    number: u64,
    surface: Arc<S>,
}

impl<S> Frame<S> {
    pub(crate) const fn new(number: u64, surface: Arc<S>) -> Self {
        Self { number, surface }
    }

    /// Sequence number, starting at 1 for the first commit.
    #[inline]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// The rendered surface.
    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The shared handle to the rendered surface.
    #[inline]
    pub const fn shared(&self) -> &Arc<S> {
        &self.surface
    }

    /// Address of the surface, for identity checks.
    #[inline]
    pub fn as_ptr(&self) -> *const S {
        Arc::as_ptr(&self.surface)
    }
}

impl<S> Clone for Frame<S> {
    fn clone(&self) -> Self {
        Self {
            number: self.number,
            surface: Arc::clone(&self.surface),
        }
    }
}

impl<S> std::ops::Deref for Frame<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.surface
    }
}

impl<S> std::fmt::Debug for Frame<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("number", &self.number)
            .field("surface", &self.as_ptr())
            .finish()
    }
}

/// The consumer of published frames.
///
/// Called on the worker thread for every commit; it must return promptly,
/// since the next operation waits for it.
pub trait FrameReceiver<S>: Send + Sync {
    /// Take delivery of a freshly committed frame.
    fn update(&self, frame: Frame<S>);
}

impl<S: Send + Sync> FrameReceiver<S> for Sender<Frame<S>> {
    fn update(&self, frame: Frame<S>) {
        if self.send(frame).is_err() {
            log::debug!("Scheduler: frame receiver disconnected, dropping frame");
        }
    }
}
