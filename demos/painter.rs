//! Painter Demo: The render loop shown in the terminal.
//!
//! Usage: `cargo run --example painter [SCRIPT] [--animate]`
//!
//! SCRIPT is a file of drawing commands compiled and submitted at start-up.
//! `--animate` bounces every shape around the canvas once a second.
//! Click anywhere to move the shapes there. Press 'q' or Escape to quit.
//!
//! Logs go to stderr; set `RUST_LOG=debug` and redirect stderr to a file to
//! watch the worker.

use painter::actor::Animator;
use painter::config::{LoopConfig, SURFACE_SIZE};
use painter::lang::{compile_reader, ScriptHandler};
use painter::viewer::{cell_to_surface, encode_canvas, OutputBuffer, TerminalSession, ViewerEvent};
use painter::{Canvas, CanvasFactory, FrameReceiver, Scheduler, Visualizer};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use std::time::Duration;

fn view_canvas(cols: u16, rows: u16) -> Canvas {
    Canvas::new(cols.max(1), rows.max(1).saturating_mul(2))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut script = None;
    let mut animate = false;
    for arg in std::env::args().skip(1) {
        if arg == "--animate" {
            animate = true;
        } else {
            script = Some(arg);
        }
    }

    let visualizer = Arc::new(Visualizer::new(SURFACE_SIZE)?);
    let receiver: Arc<dyn FrameReceiver<Canvas>> = visualizer.clone();
    let mut scheduler: Scheduler = Scheduler::new(LoopConfig::default(), receiver);
    scheduler.start(&CanvasFactory)?;

    if let Some(path) = script {
        let ops = compile_reader(BufReader::new(File::open(&path)?))?;
        log::info!("Painter: submitting {} operations from {path}", ops.len());
        for op in ops {
            scheduler.submit(op);
        }
    }

    let animator = if animate {
        Some(Animator::spawn(
            Duration::from_secs(1),
            ScriptHandler::new(scheduler.submitter()),
        )?)
    } else {
        None
    };

    let mut session = TerminalSession::enter()?;
    let (mut cols, mut rows) = session.size()?;
    let mut view = view_canvas(cols, rows);
    let mut out = OutputBuffer::new();
    let mut dirty = true;

    loop {
        if visualizer.updates().try_recv().is_ok() {
            dirty = true;
        }

        if dirty {
            visualizer.present(&mut view);
            out.clear();
            encode_canvas(&view, &mut out);
            session.draw(&out)?;
            dirty = false;
        }

        match session.poll_event(Duration::from_millis(16))? {
            Some(ViewerEvent::Quit) => break,
            Some(ViewerEvent::Click { col, row }) => {
                let point = cell_to_surface(col, row, cols, rows, SURFACE_SIZE);
                visualizer.click(point, &scheduler);
                dirty = true;
            }
            Some(ViewerEvent::Resize { cols: c, rows: r }) => {
                (cols, rows) = (c, r);
                view = view_canvas(cols, rows);
                dirty = true;
            }
            None => {}
        }
    }

    drop(session);
    if let Some(animator) = animator {
        animator.join();
    }
    scheduler.stop()?;

    println!(
        "Painter: {} frames published, {} operations applied",
        scheduler.frames_published(),
        scheduler.operations_applied()
    );
    Ok(())
}
