//! Animator: Periodically moves every shape along a bouncing path.
//!
//! Each tick produces two scripts, `move x y` and `update`, and feeds them
//! through a [`ScriptHandler`] exactly as a remote client would. Ticks come
//! from a crossbeam `tick` channel, which skips ticks the thread was too busy
//! to take instead of letting them pile up.

use crate::config;
use crate::geometry::Point;
use crate::lang::{ScriptHandler, ScriptRequest, Status};
use crate::op::OperationSink;
use crossbeam_channel::{bounded, select, tick, Receiver, Sender};
use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A point bouncing inside `[0, extent]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounce {
    /// Current position.
    pub position: Point,
    /// Per-step displacement.
    pub velocity: Point,
    /// Upper bound for both coordinates.
    pub extent: i32,
}

impl Bounce {
    /// Start at (100, 100) moving by (10, 15) inside the canvas.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new() -> Self {
        Self {
            position: Point::new(100, 100),
            velocity: Point::new(10, 15),
            extent: config::CANVAS_EXTENT as i32,
        }
    }

    /// Return the current position, then advance one step. A velocity
    /// component flips once its coordinate has left the range.
    pub fn step(&mut self) -> Point {
        let current = self.position;
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        if self.position.x < 0 || self.position.x > self.extent {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0 || self.position.y > self.extent {
            self.velocity.y = -self.velocity.y;
        }
        current
    }
}

impl Default for Bounce {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread that submits one bounce step per tick.
pub struct Animator {
    handle: Option<JoinHandle<()>>,
    shutdown_tx: Sender<()>,
}

impl Animator {
    /// Spawn an animator stepping every `interval`.
    pub fn spawn<K>(interval: Duration, handler: ScriptHandler<K>) -> io::Result<Self>
    where
        K: OperationSink + Send + 'static,
    {
        let (shutdown_tx, shutdown_rx) = bounded(1);

        let handle = thread::Builder::new()
            .name("painter-animator".to_string())
            .spawn(move || Self::run_loop(interval, &handler, &shutdown_rx))?;

        Ok(Self {
            handle: Some(handle),
            shutdown_tx,
        })
    }

    /// Signal the animator to stop.
    pub fn shutdown(&self) {
        // A full channel already carries the request.
        let _ = self.shutdown_tx.try_send(());
    }

    /// Stop and wait for the animator thread.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Animator: thread panicked");
            }
        }
    }

    fn run_loop<K: OperationSink>(
        interval: Duration,
        handler: &ScriptHandler<K>,
        shutdown: &Receiver<()>,
    ) {
        let ticks = tick(interval);
        let mut path = Bounce::new();
        let mut steps = 0u64;
        loop {
            select! {
                recv(ticks) -> _ => {
                    let Point { x, y } = path.step();
                    let cmd = format!("move {x} {y}");
                    for cmd in [cmd.as_str(), "update"] {
                        if handler.handle(ScriptRequest::Get { cmd }) != Status::Ok {
                            log::error!("Animator: script rejected on step {steps}: {cmd}");
                        }
                    }
                    steps += 1;
                }
                recv(shutdown) -> _ => break,
            }
        }
        log::debug!("Animator: stopped after {steps} steps");
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::Operation;
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    #[derive(Default)]
    struct RecordingSink {
        ops: Arc<Mutex<Vec<Operation>>>,
    }

    impl OperationSink for RecordingSink {
        fn submit(&self, op: Operation) {
            self.ops.lock().unwrap().push(op);
        }
    }

    #[test]
    fn test_bounce_path() {
        let mut path = Bounce::new();
        assert_eq!(path.step(), Point::new(100, 100));
        assert_eq!(path.step(), Point::new(110, 115));
        assert_eq!(path.step(), Point::new(120, 130));
    }

    #[test]
    fn test_bounce_reflects() {
        let mut path = Bounce {
            position: Point::new(795, 400),
            velocity: Point::new(10, 0),
            extent: 800,
        };
        assert_eq!(path.step(), Point::new(795, 400));
        // 805 is out of range, so the velocity flips.
        assert_eq!(path.step(), Point::new(805, 400));
        assert_eq!(path.step(), Point::new(795, 400));
    }

    #[test]
    fn test_bounce_stays_near_canvas() {
        let mut path = Bounce::new();
        for _ in 0..1000 {
            let p = path.step();
            assert!((-15..=815).contains(&p.x));
            assert!((-15..=815).contains(&p.y));
        }
    }

    #[test]
    fn test_animator_submits_move_then_commit() {
        let sink = RecordingSink::default();
        let ops = Arc::clone(&sink.ops);
        let animator = Animator::spawn(Duration::from_millis(5), ScriptHandler::new(sink)).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while ops.lock().unwrap().len() < 4 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        animator.join();

        let ops = ops.lock().unwrap();
        assert!(ops.len() >= 4);
        assert_eq!(
            ops[0],
            Operation::Reposition {
                position: Point::new(100, 100)
            }
        );
        assert_eq!(ops[1], Operation::Commit);
        assert_eq!(
            ops[2],
            Operation::Reposition {
                position: Point::new(110, 115)
            }
        );
    }

    #[test]
    fn test_animator_stops_promptly() {
        let sink = RecordingSink::default();
        let ops = Arc::clone(&sink.ops);
        let animator = Animator::spawn(Duration::from_secs(60), ScriptHandler::new(sink)).unwrap();

        let started = Instant::now();
        animator.join();
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(ops.lock().unwrap().is_empty());
    }
}
