//! Supervision of the external sign-recognition process.
//!
//! The recognition model and camera pipeline live in an external script;
//! this module owns its lifecycle and turns its line-oriented stdout into
//! UI events:
//!
//! 1. `supervisor` spawns the script with stdout piped and stderr dropped,
//!    and runs a dedicated reader thread plus an exit-monitor thread.
//! 2. `protocol` parses each `KEY:VALUE` line and dispatches frame,
//!    prediction and translation updates through the event emitter.
//! 3. Teardown is cooperative: an intentional-shutdown flag suppresses all
//!    error reporting, then the process is terminated gracefully with a
//!    bounded timeout and a forced kill as fallback.

mod protocol;
mod supervisor;

pub use protocol::{decode_frame, dispatch, parse_line, FrameDecodeError, OutputMessage};
pub use supervisor::{
    RecognitionConfig, RecognitionError, RecognitionManager, RecognitionSession,
};
