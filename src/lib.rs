//! # Painter
//!
//! A single-threaded render loop fed by many producers.
//!
//! Drawing requests arrive as [`Operation`]s, from scripts compiled by
//! [`lang`], from a periodic [`Animator`], or from clicks on the
//! [`viewer`]. One worker thread applies them in order onto an off-screen
//! [`Canvas`] and, on every commit, hands the finished frame to whoever
//! displays it while it goes on drawing into a second surface.
//!
//! ## Core Concepts
//!
//! - **One consumer**: operations never run concurrently with each other
//! - **Double buffering**: a published frame is never drawn into again
//! - **Small command language**: `white`, `bgrect`, `figure`, `move`, `update`
//!
//! ## Example
//!
//! ```rust,ignore
//! use painter::{compile, LoopConfig, Scheduler, CanvasFactory};
//! use std::sync::Arc;
//!
//! let (tx, rx) = crossbeam_channel::unbounded();
//! let mut scheduler = Scheduler::new(LoopConfig::default(), Arc::new(tx));
//! scheduler.start(&CanvasFactory)?;
//! for op in compile("white\nfigure 0.5 0.5\nupdate")? {
//!     scheduler.submit(op);
//! }
//! let frame = rx.recv()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod config;
pub mod geometry;
pub mod lang;
pub mod op;
pub mod surface;
pub mod viewer;

// Re-exports for convenience
pub use actor::{Animator, Frame, FrameReceiver, LoopError, LoopState, Scheduler, Submitter};
pub use config::LoopConfig;
pub use geometry::{Point, Rect, Size};
pub use lang::{compile, CompileError, ScriptHandler, ScriptRequest, Status};
pub use op::{Operation, OperationSink};
pub use surface::{Canvas, CanvasFactory, Rgb, Surface, SurfaceError, SurfaceFactory};
pub use viewer::Visualizer;
