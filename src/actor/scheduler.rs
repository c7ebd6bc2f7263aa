//! Scheduler: Dedicated worker thread applying queued operations.
//!
//! The worker owns the two frame surfaces. Producers on any thread queue
//! operations through [`Scheduler::submit`] or a [`Submitter`]; the worker
//! applies them one at a time to the shared [`Scene`], and on every commit
//! renders the scene onto the `next` surface, publishes it and swaps.

use super::messages::{Frame, FrameReceiver, LoopState, Message};
use super::scene::Scene;
use crate::config::LoopConfig;
use crate::op::{Operation, OperationSink, Shape};
use crate::surface::{Canvas, Surface, SurfaceError, SurfaceFactory};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use thiserror::Error;

/// Errors from starting or stopping the scheduler.
#[derive(Debug, Error)]
pub enum LoopError {
    /// `start` was called outside the `NotStarted` state.
    #[error("scheduler already started")]
    AlreadyStarted,

    /// A frame surface could not be allocated.
    #[error("failed to create frame surface: {0}")]
    Surface(#[from] SurfaceError),

    /// The worker thread could not be spawned.
    #[error("failed to spawn scheduler thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// The worker thread panicked (typically inside a custom callback).
    #[error("scheduler thread panicked")]
    WorkerPanicked,
}

/// State shared between the handle and the worker.
struct Shared {
    scene: Mutex<Scene>,
    state: Mutex<LoopState>,
    frames: AtomicU64,
    applied: AtomicU64,
}

/// Lock ignoring poisoning: a panicking callback leaves the scene as a
/// plain value that is still safe to read.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The operation scheduler.
///
/// ```rust,ignore
/// use painter::{CanvasFactory, LoopConfig, Operation, Scheduler};
///
/// let (tx, frames) = crossbeam_channel::unbounded();
/// let mut scheduler = Scheduler::new(LoopConfig::default(), Arc::new(tx));
/// scheduler.start(&CanvasFactory)?;
/// scheduler.submit(Operation::Commit);
/// let frame = frames.recv()?;
/// scheduler.stop()?;
/// ```
pub struct Scheduler<S: Surface + Clone + 'static = Canvas> {
    /// Configuration.
    config: LoopConfig,
    /// Queue sender.
    tx: Sender<Message>,
    /// Queue receiver, handed to the worker on start.
    rx: Option<Receiver<Message>>,
    /// Scene, lifecycle state and counters.
    shared: Arc<Shared>,
    /// Frame consumer.
    receiver: Arc<dyn FrameReceiver<S>>,
    /// Worker thread handle.
    handle: Option<JoinHandle<()>>,
}

impl<S: Surface + Clone + 'static> Scheduler<S> {
    /// Create a scheduler publishing to `receiver`. Nothing runs until
    /// [`Scheduler::start`].
    pub fn new(config: LoopConfig, receiver: Arc<dyn FrameReceiver<S>>) -> Self {
        let (tx, rx) = unbounded();
        Self {
            config,
            tx,
            rx: Some(rx),
            shared: Arc::new(Shared {
                scene: Mutex::new(Scene::default()),
                state: Mutex::new(LoopState::NotStarted),
                frames: AtomicU64::new(0),
                applied: AtomicU64::new(0),
            }),
            receiver,
            handle: None,
        }
    }

    /// Allocate both surfaces, seed the scene and spawn the worker.
    ///
    /// Operations queued before this call are applied after seeding.
    pub fn start<F>(&mut self, factory: &F) -> Result<(), LoopError>
    where
        F: SurfaceFactory<Surface = S>,
    {
        if self.state() != LoopState::NotStarted {
            return Err(LoopError::AlreadyStarted);
        }
        let Some(rx) = self.rx.take() else {
            return Err(LoopError::AlreadyStarted);
        };

        let size = self.config.surface_size;
        let next = match factory.create(size) {
            Ok(surface) => surface,
            Err(e) => {
                self.rx = Some(rx);
                return Err(e.into());
            }
        };
        let prev = match factory.create(size) {
            Ok(surface) => surface,
            Err(e) => {
                self.rx = Some(rx);
                return Err(e.into());
            }
        };

        *lock(&self.shared.scene) = Scene::seeded(self.config.seed_position());

        let worker = Worker {
            shared: Arc::clone(&self.shared),
            receiver: Arc::clone(&self.receiver),
            next: Arc::new(next),
            prev: Arc::new(prev),
        };

        self.set_state(LoopState::Running);
        let spawned = thread::Builder::new()
            .name(self.config.thread_name.clone())
            .spawn(move || worker.run(&rx));

        match spawned {
            Ok(handle) => {
                self.handle = Some(handle);
                log::info!("Scheduler: started with {:?} surfaces", size);
                Ok(())
            }
            Err(e) => {
                self.set_state(LoopState::Stopped);
                log::error!("Scheduler: failed to spawn worker: {e}");
                Err(LoopError::Spawn(e))
            }
        }
    }

    /// Queue an operation. Never blocks.
    ///
    /// Operations queued after the worker has exited are dropped with a
    /// warning.
    pub fn submit(&self, op: Operation) {
        send(&self.tx, &self.shared, op);
    }

    /// A cloneable handle for submitting from other threads.
    pub fn submitter(&self) -> Submitter {
        Submitter {
            tx: self.tx.clone(),
            shared: Arc::clone(&self.shared),
        }
    }

    /// Request a stop and block until the queue is drained and the worker
    /// has exited.
    ///
    /// Operations submitted while draining are still applied. Calling this
    /// again after it returned is a no-op.
    pub fn stop(&mut self) -> Result<(), LoopError> {
        let Some(handle) = self.handle.take() else {
            let mut state = lock(&self.shared.state);
            if *state == LoopState::NotStarted {
                log::warn!("Scheduler: stopped before start, discarding queued operations");
                *state = LoopState::Stopped;
                self.rx = None;
            }
            return Ok(());
        };

        self.set_state(LoopState::Draining);
        log::info!("Scheduler: draining");
        if self.tx.send(Message::Stop).is_err() {
            log::warn!("Scheduler: worker exited before stop request");
        }

        let joined = handle.join();
        self.set_state(LoopState::Stopped);
        log::info!(
            "Scheduler: stopped after {} operations, {} frames",
            self.operations_applied(),
            self.frames_published()
        );
        joined.map_err(|_| LoopError::WorkerPanicked)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoopState {
        *lock(&self.shared.state)
    }

    /// A snapshot of the current scene.
    pub fn scene(&self) -> Scene {
        lock(&self.shared.scene).clone()
    }

    /// The tracked shapes.
    pub fn shapes(&self) -> Vec<Shape> {
        lock(&self.shared.scene).shapes.clone()
    }

    /// Number of commits published so far.
    pub fn frames_published(&self) -> u64 {
        self.shared.frames.load(Ordering::Acquire)
    }

    /// Number of submitted operations applied so far. A composite counts once.
    pub fn operations_applied(&self) -> u64 {
        self.shared.applied.load(Ordering::Acquire)
    }

    /// Get the configuration.
    pub const fn config(&self) -> &LoopConfig {
        &self.config
    }

    fn set_state(&self, state: LoopState) {
        *lock(&self.shared.state) = state;
    }
}

impl<S: Surface + Clone + 'static> OperationSink for Scheduler<S> {
    fn submit(&self, op: Operation) {
        Self::submit(self, op);
    }
}

impl<S: Surface + Clone + 'static> Drop for Scheduler<S> {
    fn drop(&mut self) {
        if self.handle.is_some() {
            if let Err(e) = self.stop() {
                log::error!("Scheduler: {e}");
            }
        }
    }
}

impl<S: Surface + Clone + 'static> std::fmt::Debug for Scheduler<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("state", &self.state())
            .field("frames", &self.frames_published())
            .finish_non_exhaustive()
    }
}

/// Cloneable submission handle.
#[derive(Clone)]
pub struct Submitter {
    tx: Sender<Message>,
    shared: Arc<Shared>,
}

impl OperationSink for Submitter {
    fn submit(&self, op: Operation) {
        send(&self.tx, &self.shared, op);
    }
}

impl std::fmt::Debug for Submitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submitter").finish_non_exhaustive()
    }
}

/// Queue `op` unless the worker has finished draining.
///
/// The state lock is held across the send so the worker cannot declare the
/// queue finished between the check and the enqueue.
fn send(tx: &Sender<Message>, shared: &Shared, op: Operation) {
    let state = lock(&shared.state);
    let rejected = if *state == LoopState::Stopped {
        Some(op)
    } else {
        match tx.send(Message::Apply(op)) {
            Ok(()) => None,
            Err(e) => match e.into_inner() {
                Message::Apply(op) => Some(op),
                Message::Stop => None,
            },
        }
    };
    drop(state);
    if let Some(op) = rejected {
        log::warn!("Scheduler: dropping {} submitted after stop", op.kind());
    }
}

/// The worker-side half: owns the surfaces.
struct Worker<S> {
    shared: Arc<Shared>,
    receiver: Arc<dyn FrameReceiver<S>>,
    /// Target of the next render.
    next: Arc<S>,
    /// Last published surface.
    prev: Arc<S>,
}

impl<S: Surface + Clone> Worker<S> {
    fn run(mut self, rx: &Receiver<Message>) {
        loop {
            match rx.recv() {
                Ok(Message::Apply(op)) => self.handle(op),
                Ok(Message::Stop) => {
                    self.drain(rx);
                    break;
                }
                // Every sender is gone; nothing more can arrive.
                Err(_) => {
                    *lock(&self.shared.state) = LoopState::Stopped;
                    break;
                }
            }
        }
        log::debug!("Scheduler: worker exiting");
    }

    /// Apply everything still queued, including operations submitted while
    /// draining, then mark the loop stopped.
    fn drain(&mut self, rx: &Receiver<Message>) {
        loop {
            while let Ok(message) = rx.try_recv() {
                if let Message::Apply(op) = message {
                    self.handle(op);
                }
            }
            // Senders enqueue under the state lock, so an empty queue seen
            // here stays empty once the state reads Stopped.
            let shared = Arc::clone(&self.shared);
            let mut state = lock(&shared.state);
            if rx.is_empty() {
                *state = LoopState::Stopped;
                return;
            }
        }
    }

    fn handle(&mut self, op: Operation) {
        log::debug!("Scheduler: handling {}: {:?}", op.kind(), op);
        let shared = Arc::clone(&self.shared);
        let mut scene = lock(&shared.scene);
        self.apply(&mut scene, op);
        shared.applied.fetch_add(1, Ordering::AcqRel);
    }

    fn apply(&mut self, scene: &mut Scene, op: Operation) {
        match op {
            Operation::FillBackground { color } => {
                scene.background = color;
                log::debug!("Scheduler: background color changed to {color:?}");
            }
            Operation::BoundedRegionFill { rect } => scene.region = Some(rect),
            Operation::Shape(shape) => scene.shapes.push(shape),
            Operation::Reposition { position } => scene.reposition(position),
            Operation::Border(border) => scene.border = Some(border),
            Operation::Reset => scene.reset(),
            Operation::Composite(ops) => {
                for op in ops {
                    self.apply(scene, op);
                }
            }
            Operation::Commit => self.commit(scene),
            op @ Operation::Custom(_) => {
                op.apply(self.live_surface());
            }
        }
    }

    /// The surface operations draw onto, copied first if the consumer still
    /// holds it from an earlier publish.
    fn live_surface(&mut self) -> &mut S {
        if Arc::strong_count(&self.next) > 1 {
            log::debug!("Scheduler: consumer still holds the reclaimed surface, copying");
        }
        Arc::make_mut(&mut self.next)
    }

    fn commit(&mut self, scene: &Scene) {
        scene.render(self.live_surface());

        let number = self.shared.frames.fetch_add(1, Ordering::AcqRel) + 1;
        log::debug!("Scheduler: publishing frame {number}");
        self.receiver.update(Frame::new(number, Arc::clone(&self.next)));

        std::mem::swap(&mut self.next, &mut self.prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect};
    use crate::op::BorderSpec;
    use crate::surface::{CanvasFactory, Rgb};
    use std::time::Duration;
    use test_log::test;

    /// Keeps every frame it receives.
    #[derive(Default)]
    struct Recorder {
        frames: Mutex<Vec<Frame<Canvas>>>,
    }

    impl FrameReceiver<Canvas> for Recorder {
        fn update(&self, frame: Frame<Canvas>) {
            self.frames.lock().unwrap().push(frame);
        }
    }

    impl Recorder {
        fn last(&self) -> Option<Frame<Canvas>> {
            self.frames.lock().unwrap().last().cloned()
        }
    }

    /// Remembers only surface addresses, dropping frames immediately.
    #[derive(Default)]
    struct AddressLog {
        addrs: Mutex<Vec<usize>>,
    }

    impl FrameReceiver<Canvas> for AddressLog {
        fn update(&self, frame: Frame<Canvas>) {
            self.addrs.lock().unwrap().push(frame.as_ptr() as usize);
        }
    }

    fn started<R: FrameReceiver<Canvas> + 'static>(receiver: &Arc<R>) -> Scheduler {
        let receiver: Arc<dyn FrameReceiver<Canvas>> = Arc::<R>::clone(receiver);
        let mut scheduler = Scheduler::new(LoopConfig::default(), receiver);
        scheduler.start(&CanvasFactory).unwrap();
        scheduler
    }

    fn surface_addr(surface: &mut dyn Surface) -> usize {
        std::ptr::from_ref(&*surface).cast::<()>() as usize
    }

    #[test]
    fn test_post_and_publish() {
        let recorder = Arc::new(Recorder::default());
        let mut scheduler = started(&recorder);
        let order = Arc::new(Mutex::new(Vec::new()));

        scheduler.submit(Operation::FillBackground { color: Rgb::WHITE });
        scheduler.submit(Operation::FillBackground { color: Rgb::GREEN });
        scheduler.submit(Operation::Commit);

        let producers: Vec<_> = (0..3)
            .map(|_| {
                let submitter = scheduler.submitter();
                thread::spawn(move || {
                    submitter.submit(Operation::FillBackground { color: Rgb::GREEN });
                })
            })
            .collect();
        for producer in producers {
            producer.join().unwrap();
        }

        let log = Arc::clone(&order);
        scheduler.submit(Operation::custom(move |_| {
            log.lock().unwrap().push("op 1");
            log.lock().unwrap().push("op 2");
        }));
        let log = Arc::clone(&order);
        scheduler.submit(Operation::custom(move |_| log.lock().unwrap().push("op 3")));

        scheduler.stop().unwrap();

        let frame = recorder.last().expect("texture was not updated");
        assert_eq!(frame.number(), 1);
        assert_eq!(frame.get(5, 5), Some(Rgb::GREEN));
        // Seeded shape at the center.
        assert_eq!(frame.get(400, 400), Some(Rgb::YELLOW));
        assert_eq!(*order.lock().unwrap(), vec!["op 1", "op 2", "op 3"]);
        assert_eq!(scheduler.operations_applied(), 8);
    }

    #[test]
    fn test_figure_reposition() {
        let recorder = Arc::new(Recorder::default());
        let mut scheduler = started(&recorder);

        scheduler.submit(Operation::Reset);
        scheduler.submit(Operation::Commit);
        scheduler.submit(Operation::Shape(Shape::new(100, 150, 50, Rgb::RED)));
        scheduler.submit(Operation::Reposition {
            position: Point::new(300, 400),
        });
        scheduler.submit(Operation::Commit);
        scheduler.stop().unwrap();

        let shapes = scheduler.shapes();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].center(), Point::new(300, 400));

        let frame = recorder.last().unwrap();
        assert_eq!(frame.number(), 2);
        assert_eq!(frame.get(300, 400), Some(Rgb::RED));
        assert_eq!(frame.get(100, 150), Some(Rgb::GREEN));
    }

    #[test]
    fn test_reposition_moves_group() {
        let recorder = Arc::new(Recorder::default());
        let mut scheduler = started(&recorder);

        scheduler.submit(Operation::Shape(Shape::figure(10, 10)));
        scheduler.submit(Operation::Shape(Shape::figure(700, 50)));
        scheduler.submit(Operation::Reposition {
            position: Point::new(123, 456),
        });
        scheduler.stop().unwrap();

        let shapes = scheduler.shapes();
        assert_eq!(shapes.len(), 3);
        assert!(shapes.iter().all(|s| s.center() == Point::new(123, 456)));
    }

    #[test]
    fn test_commit_renders_all_layers() {
        let recorder = Arc::new(Recorder::default());
        let mut scheduler = started(&recorder);

        scheduler.submit(Operation::Composite(vec![
            Operation::Reset,
            Operation::FillBackground { color: Rgb::WHITE },
            Operation::BoundedRegionFill {
                rect: Rect::new(0, 0, 200, 200),
            },
            Operation::Shape(Shape::figure(100, 100)),
            Operation::Border(BorderSpec::new(10, Rgb::RED)),
            Operation::Commit,
        ]));
        scheduler.stop().unwrap();

        let frame = recorder.last().unwrap();
        assert_eq!(frame.get(600, 600), Some(Rgb::WHITE));
        assert_eq!(frame.get(30, 150), Some(Rgb::BLACK));
        assert_eq!(frame.get(100, 100), Some(Rgb::YELLOW));
        assert_eq!(frame.get(5, 5), Some(Rgb::RED));
        assert_eq!(frame.get(794, 400), Some(Rgb::RED));
    }

    #[test]
    fn test_published_surface_not_mutated_next() {
        let recorder = Arc::new(Recorder::default());
        let mut scheduler = started(&recorder);
        let targets = Arc::new(Mutex::new(Vec::new()));

        for _ in 0..3 {
            scheduler.submit(Operation::Commit);
            let targets = Arc::clone(&targets);
            scheduler.submit(Operation::custom(move |surface| {
                targets.lock().unwrap().push(surface_addr(surface));
            }));
        }
        scheduler.stop().unwrap();

        let frames = recorder.frames.lock().unwrap();
        let targets = targets.lock().unwrap();
        assert_eq!(frames.len(), 3);
        for (frame, target) in frames.iter().zip(targets.iter()) {
            assert_ne!(frame.as_ptr() as usize, *target);
        }
        assert_ne!(frames[0].as_ptr(), frames[1].as_ptr());
    }

    #[test]
    fn test_surfaces_alternate() {
        let log = Arc::new(AddressLog::default());
        let mut scheduler = started(&log);

        for _ in 0..4 {
            scheduler.submit(Operation::Commit);
        }
        scheduler.stop().unwrap();

        let addrs = log.addrs.lock().unwrap();
        assert_eq!(addrs.len(), 4);
        assert_ne!(addrs[0], addrs[1]);
        assert_eq!(addrs[0], addrs[2]);
        assert_eq!(addrs[1], addrs[3]);
    }

    #[test]
    fn test_retained_frame_is_not_overwritten() {
        let recorder = Arc::new(Recorder::default());
        let mut scheduler = started(&recorder);

        scheduler.submit(Operation::FillBackground { color: Rgb::WHITE });
        scheduler.submit(Operation::Commit);
        scheduler.submit(Operation::Commit);
        scheduler.submit(Operation::FillBackground { color: Rgb::RED });
        scheduler.submit(Operation::Commit);
        scheduler.stop().unwrap();

        let frames = recorder.frames.lock().unwrap();
        assert_eq!(frames[0].get(5, 5), Some(Rgb::WHITE));
        assert_eq!(frames[2].get(5, 5), Some(Rgb::RED));
    }

    #[test]
    fn test_composites_are_indivisible() {
        let recorder = Arc::new(Recorder::default());
        let mut scheduler = started(&recorder);
        let log = Arc::new(Mutex::new(Vec::new()));

        let producers: Vec<_> = (0..4)
            .map(|id| {
                let submitter = scheduler.submitter();
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    for round in 0..25 {
                        let steps = (0..3)
                            .map(|step| {
                                let log = Arc::clone(&log);
                                Operation::custom(move |_| {
                                    log.lock().unwrap().push((id, round, step));
                                })
                            })
                            .collect();
                        submitter.submit(Operation::Composite(steps));
                    }
                })
            })
            .collect();
        for producer in producers {
            producer.join().unwrap();
        }
        scheduler.stop().unwrap();

        let log = log.lock().unwrap();
        assert_eq!(log.len(), 4 * 25 * 3);
        for group in log.chunks(3) {
            let (id, round, _) = group[0];
            let steps: Vec<_> = group.iter().map(|&(i, r, s)| (i == id && r == round, s)).collect();
            assert_eq!(steps, vec![(true, 0), (true, 1), (true, 2)]);
        }
    }

    #[test]
    fn test_stop_drains_queue() {
        let recorder = Arc::new(Recorder::default());
        let mut scheduler = started(&recorder);
        let slow = Operation::custom(|_| thread::sleep(Duration::from_millis(20)));

        scheduler.submit(slow);
        for i in 0..100 {
            scheduler.submit(Operation::Shape(Shape::figure(i, i)));
        }
        scheduler.stop().unwrap();

        assert_eq!(scheduler.state(), LoopState::Stopped);
        assert_eq!(scheduler.shapes().len(), 101);
        assert_eq!(scheduler.operations_applied(), 101);
    }

    #[test]
    fn test_submissions_while_draining_are_applied() {
        let recorder = Arc::new(Recorder::default());
        let mut scheduler = started(&recorder);
        let submitter = scheduler.submitter();

        // Runs after the stop request is queued and submits behind it.
        scheduler.submit(Operation::custom(move |_| {
            thread::sleep(Duration::from_millis(20));
            submitter.submit(Operation::Shape(Shape::figure(10, 20)));
        }));
        scheduler.stop().unwrap();

        assert_eq!(scheduler.state(), LoopState::Stopped);
        assert_eq!(scheduler.operations_applied(), 2);
        assert_eq!(scheduler.shapes().last(), Some(&Shape::figure(10, 20)));
    }

    #[test]
    fn test_submissions_after_stop_are_dropped() {
        let recorder = Arc::new(Recorder::default());
        let mut scheduler = started(&recorder);
        let submitter = scheduler.submitter();
        scheduler.stop().unwrap();

        submitter.submit(Operation::Shape(Shape::figure(10, 20)));
        scheduler.submit(Operation::Commit);
        assert_eq!(scheduler.operations_applied(), 0);
        assert_eq!(scheduler.shapes().len(), 1);
        assert_eq!(scheduler.frames_published(), 0);
    }

    #[test]
    fn test_coordinates_at_i32_limits_do_not_kill_worker() {
        let recorder = Arc::new(Recorder::default());
        let mut scheduler = started(&recorder);

        let ops = crate::lang::compile("figure 2147483647 5\nupdate\nwhite").unwrap();
        assert_eq!(ops.len(), 3);
        for op in ops {
            scheduler.submit(op);
        }
        scheduler.stop().unwrap();

        assert_eq!(scheduler.operations_applied(), 3);
        assert_eq!(scheduler.frames_published(), 1);
        assert_eq!(scheduler.scene().background, Rgb::WHITE);
    }

    #[test]
    fn test_submit_before_start_runs_after_seed() {
        let recorder = Arc::new(Recorder::default());
        let receiver: Arc<dyn FrameReceiver<Canvas>> = recorder.clone();
        let mut scheduler = Scheduler::new(LoopConfig::default(), receiver);

        scheduler.submit(Operation::Reset);
        assert_eq!(scheduler.state(), LoopState::NotStarted);

        scheduler.start(&CanvasFactory).unwrap();
        scheduler.stop().unwrap();
        assert!(scheduler.shapes().is_empty());
    }

    #[test]
    fn test_state_transitions() {
        let recorder = Arc::new(Recorder::default());
        let receiver: Arc<dyn FrameReceiver<Canvas>> = recorder.clone();
        let mut scheduler = Scheduler::new(LoopConfig::default(), receiver);
        assert_eq!(scheduler.state(), LoopState::NotStarted);

        scheduler.start(&CanvasFactory).unwrap();
        assert_eq!(scheduler.state(), LoopState::Running);
        assert!(matches!(
            scheduler.start(&CanvasFactory),
            Err(LoopError::AlreadyStarted)
        ));

        scheduler.stop().unwrap();
        assert_eq!(scheduler.state(), LoopState::Stopped);

        // Second stop is harmless, later submissions are dropped.
        scheduler.stop().unwrap();
        scheduler.submit(Operation::Commit);
        assert_eq!(scheduler.frames_published(), 0);
    }

    #[test]
    fn test_start_rejects_zero_surface() {
        let recorder = Arc::new(Recorder::default());
        let receiver: Arc<dyn FrameReceiver<Canvas>> = recorder.clone();
        let config = LoopConfig {
            surface_size: crate::geometry::Size::new(0, 0),
            ..LoopConfig::default()
        };
        let mut scheduler = Scheduler::new(config, receiver);

        assert!(matches!(
            scheduler.start(&CanvasFactory),
            Err(LoopError::Surface(SurfaceError::ZeroSize(_)))
        ));
        assert_eq!(scheduler.state(), LoopState::NotStarted);
    }

    #[test]
    fn test_channel_consumer() {
        let (tx, frames) = unbounded::<Frame<Canvas>>();
        let mut scheduler: Scheduler = Scheduler::new(LoopConfig::default(), Arc::new(tx));
        scheduler.start(&CanvasFactory).unwrap();

        scheduler.submit(Operation::FillBackground { color: Rgb::WHITE });
        scheduler.submit(Operation::Commit);

        let frame = frames.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(frame.get(1, 1), Some(Rgb::WHITE));
        scheduler.stop().unwrap();
    }
}
