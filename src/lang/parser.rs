//! Line-oriented command parser.
//!
//! ```text
//! # comment
//! white
//! bgrect 0.25 0.25 0.75 0.75
//! figure 200 200
//! move 400 400
//! border red
//! update
//! ```

use super::error::CompileError;
use crate::config;
use crate::geometry::{Point, Rect};
use crate::op::{BorderSpec, Operation, Shape};
use std::io::BufRead;

/// Compile a script into operations.
///
/// All-or-nothing: the first bad line aborts and nothing is returned.
pub fn compile(text: &str) -> Result<Vec<Operation>, CompileError> {
    let mut ops = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(op) = compile_line(idx + 1, line)? {
            ops.push(op);
        }
    }
    Ok(ops)
}

/// Compile a script read from `reader`.
pub fn compile_reader<R: BufRead>(reader: R) -> Result<Vec<Operation>, CompileError> {
    let mut ops = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        if let Some(op) = compile_line(idx + 1, &line?)? {
            ops.push(op);
        }
    }
    Ok(ops)
}

/// Compile one line. Blank and comment lines yield `None`.
fn compile_line(line_no: usize, line: &str) -> Result<Option<Operation>, CompileError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    log::trace!("Compiler: line {line_no}: {line}");

    let mut fields = line.split_whitespace();
    let Some(head) = fields.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = fields.collect();
    let command = head.to_lowercase();

    let op = match command.as_str() {
        "white" => Operation::FillBackground {
            color: config::WHITE_BACKGROUND,
        },
        "green" => Operation::FillBackground {
            color: config::GREEN_BACKGROUND,
        },
        "update" => Operation::Commit,
        "reset" => Operation::Reset,
        "bgrect" => {
            expect_args(line_no, "bgrect", &args, 4)?;
            let mut coords = [0i32; 4];
            for (slot, arg) in coords.iter_mut().zip(&args) {
                *slot = scale(parse_float(line_no, arg)?);
            }
            let [x1, y1, x2, y2] = coords;
            Operation::BoundedRegionFill {
                rect: Rect::new(x1, y1, x2, y2),
            }
        }
        "figure" => {
            expect_args(line_no, "figure", &args, 2)?;
            let (x, y) = parse_pair(line_no, &args)?;
            Operation::Shape(Shape::figure(x, y))
        }
        "move" => {
            expect_args(line_no, "move", &args, 2)?;
            let (x, y) = parse_pair(line_no, &args)?;
            Operation::Reposition {
                position: Point::new(x, y),
            }
        }
        "border" => {
            // Extra arguments past the color are ignored.
            let color = args
                .first()
                .map_or(config::DEFAULT_BORDER_COLOR, |name| config::border_color(name));
            Operation::Border(BorderSpec::with_color(color))
        }
        _ => {
            return Err(CompileError::UnknownCommand {
                line: line_no,
                command,
            })
        }
    };

    Ok(Some(op))
}

fn expect_args(
    line: usize,
    command: &'static str,
    args: &[&str],
    expected: usize,
) -> Result<(), CompileError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CompileError::ArgumentCount {
            line,
            command,
            expected,
            found: args.len(),
        })
    }
}

fn parse_float(line: usize, arg: &str) -> Result<f64, CompileError> {
    arg.parse().map_err(|source| CompileError::InvalidFloat {
        line,
        argument: arg.to_string(),
        source,
    })
}

fn parse_int(line: usize, arg: &str) -> Result<i32, CompileError> {
    arg.parse().map_err(|source| CompileError::InvalidInteger {
        line,
        argument: arg.to_string(),
        source,
    })
}

fn parse_pair(line: usize, args: &[&str]) -> Result<(i32, i32), CompileError> {
    Ok((parse_int(line, args[0])?, parse_int(line, args[1])?))
}

/// Scale a fraction of the canvas to pixels, truncating toward zero.
#[allow(clippy::cast_possible_truncation)]
fn scale(fraction: f64) -> i32 {
    (fraction * config::CANVAS_EXTENT) as i32
}
