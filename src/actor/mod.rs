//! Actor Model: The render loop and the threads that feed it.
//!
//! A [`Scheduler`] owns one worker thread. Any number of producers submit
//! [`Operation`](crate::op::Operation)s through a crossbeam channel; the
//! worker applies them one at a time, in arrival order, and on every commit
//! publishes a [`Frame`] to a single [`FrameReceiver`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Animator   │ ──┐
//! └──────────────┘   │   Operation    ┌──────────────┐    Frame     ┌───────────────┐
//! ┌──────────────┐   ├──────────────▶ │    Worker    │ ───────────▶ │ FrameReceiver │
//! │ScriptHandler │ ──┤    (queue)     │ (one thread) │              └───────────────┘
//! └──────────────┘   │                └──────────────┘
//! ┌──────────────┐   │
//! │    Viewer    │ ──┘
//! └──────────────┘
//! ```

mod animator;
mod messages;
mod scene;
mod scheduler;

pub use animator::{Animator, Bounce};
pub use messages::{Frame, FrameReceiver, LoopState};
pub use scene::Scene;
pub use scheduler::{LoopError, Scheduler, Submitter};
