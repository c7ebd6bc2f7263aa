//! Command language: Compiles line-oriented scripts into operations.
//!
//! | command  | arguments              | operation                      |
//! |----------|------------------------|--------------------------------|
//! | `white`  | –                      | white background               |
//! | `green`  | –                      | green background               |
//! | `update` | –                      | commit                         |
//! | `bgrect` | `x1 y1 x2 y2` (floats) | region fill, scaled by 800     |
//! | `figure` | `x y` (integers)       | yellow shape of size 100       |
//! | `move`   | `x y` (integers)       | move every shape               |
//! | `border` | `[green\|white\|red]`  | border of thickness 10         |
//! | `reset`  | –                      | reset                          |
//!
//! Keywords are case-insensitive. Blank lines and lines starting with `#`
//! are skipped.

mod error;
mod handler;
mod parser;

pub use error::CompileError;
pub use handler::{ScriptHandler, ScriptRequest, Status};
pub use parser::{compile, compile_reader};
