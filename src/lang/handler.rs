//! Transport-agnostic handling of submitted scripts.
//!
//! A transport (HTTP server, socket, stdin reader) turns its request into a
//! [`ScriptRequest`] and maps the returned [`Status`] back onto its own
//! success / bad-request responses.

use super::parser::compile;
use crate::op::OperationSink;

/// A script as delivered by a transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptRequest<'a> {
    /// Script carried in a request body.
    Post {
        /// Full request body.
        body: &'a str,
    },
    /// Script carried in the (already decoded) `cmd` query parameter.
    Get {
        /// Value of the `cmd` parameter.
        cmd: &'a str,
    },
}

impl<'a> ScriptRequest<'a> {
    /// The script text.
    pub const fn script(&self) -> &'a str {
        match *self {
            Self::Post { body } | Self::Get { cmd: body } => body,
        }
    }
}

/// Outcome reported back to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The script compiled and was queued. It may not have run yet.
    Ok,
    /// The script was malformed; nothing was queued.
    BadRequest,
}

impl Status {
    /// The matching HTTP status code.
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
        }
    }
}

/// Compiles scripts and feeds the resulting operations to a sink.
#[derive(Debug, Clone)]
pub struct ScriptHandler<K> {
    sink: K,
}

impl<K: OperationSink> ScriptHandler<K> {
    /// Create a handler submitting to `sink`.
    pub const fn new(sink: K) -> Self {
        Self { sink }
    }

    /// Get a reference to the sink.
    pub const fn sink(&self) -> &K {
        &self.sink
    }

    /// Compile and enqueue a script.
    ///
    /// Returns as soon as the operations are queued.
    pub fn handle(&self, request: ScriptRequest<'_>) -> Status {
        match compile(request.script()) {
            Ok(ops) => {
                log::debug!("ScriptHandler: queueing {} operations", ops.len());
                for op in ops {
                    self.sink.submit(op);
                }
                Status::Ok
            }
            Err(e) => {
                log::warn!("ScriptHandler: Bad script: {e}");
                Status::BadRequest
            }
        }
    }
}
