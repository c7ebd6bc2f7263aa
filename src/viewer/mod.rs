//! Viewer: The on-screen consumer of published frames.
//!
//! ```text
//! ┌──────────────┐   Frame<Canvas>   ┌──────────────┐  ANSI  ┌──────────┐
//! │  Scheduler   │ ────────────────▶ │  Visualizer  │ ─────▶ │ Terminal │
//! └──────────────┘                   └──────────────┘        └──────────┘
//!        ▲                                  │ click
//!        └──── Reposition + Commit ─────────┘
//! ```
//!
//! Until the first frame arrives the visualizer draws its own fallback
//! scene with the half-mark renderer.

mod ansi;
mod terminal;

pub use ansi::{encode_canvas, OutputBuffer};
pub use terminal::{cell_to_surface, TerminalSession, ViewerEvent};

use crate::actor::{Frame, FrameReceiver};
use crate::config;
use crate::geometry::{Point, Size};
use crate::op::{draw_fallback_scene, Operation, OperationSink};
use crate::surface::{Canvas, SurfaceError};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::{Mutex, MutexGuard, PoisonError};

struct ViewState {
    /// Latest published frame.
    current: Option<Frame<Canvas>>,
    /// Where the fallback scene draws its figure.
    figure: Point,
    /// Fallback scene, rendered at surface size.
    scratch: Canvas,
}

/// Keeps the latest frame and composes what should be on screen.
pub struct Visualizer {
    state: Mutex<ViewState>,
    wake_tx: Sender<u64>,
    wake_rx: Receiver<u64>,
}

impl Visualizer {
    /// Create a visualizer for frames of `surface_size`.
    pub fn new(surface_size: Size) -> Result<Self, SurfaceError> {
        // One pending wake-up is enough; further frames coalesce into it.
        let (wake_tx, wake_rx) = bounded(1);
        Ok(Self {
            state: Mutex::new(ViewState {
                current: None,
                figure: surface_size.center(),
                scratch: Canvas::try_new(surface_size)?,
            }),
            wake_tx,
            wake_rx,
        })
    }

    /// Receives the number of the latest frame whenever one arrives.
    pub const fn updates(&self) -> &Receiver<u64> {
        &self.wake_rx
    }

    /// The latest published frame.
    pub fn current(&self) -> Option<Frame<Canvas>> {
        self.lock().current.clone()
    }

    /// Where the fallback figure is drawn.
    pub fn figure_position(&self) -> Point {
        self.lock().figure
    }

    /// Handle a click at `point` (surface coordinates): move the fallback
    /// figure and ask the scheduler to move every shape there and commit.
    pub fn click<K: OperationSink + ?Sized>(&self, point: Point, sink: &K) {
        self.lock().figure = point;
        sink.submit(Operation::Reposition { position: point });
        sink.submit(Operation::Commit);
    }

    /// Draw the current frame, or the fallback scene if nothing has been
    /// published yet, scaled onto `target`.
    pub fn present(&self, target: &mut Canvas) {
        let mut state = self.lock();
        if let Some(frame) = &state.current {
            target.scale_from(frame.surface());
            return;
        }
        let figure = state.figure;
        draw_fallback_scene(&mut state.scratch, figure, config::SEED_FIGURE_SIZE);
        target.scale_from(&state.scratch);
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FrameReceiver<Canvas> for Visualizer {
    fn update(&self, frame: Frame<Canvas>) {
        log::debug!("Visualizer: received frame {}", frame.number());
        let number = frame.number();
        self.lock().current = Some(frame);
        // A full channel already holds a pending wake-up.
        let _ = self.wake_tx.try_send(number);
    }
}

impl std::fmt::Debug for Visualizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("Visualizer")
            .field("current", &state.current)
            .field("figure", &state.figure)
            .finish_non_exhaustive()
    }
}
