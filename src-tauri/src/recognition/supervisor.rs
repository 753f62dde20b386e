//! Recognition process supervision
//!
//! Spawns the external recognition script as a child process and manages
//! its lifecycle: a dedicated reader thread streams `KEY:VALUE` lines from
//! stdout, an exit monitor watches for unexpected termination, and
//! `stop()` tears everything down with a bounded graceful-then-forced
//! termination sequence. The intentional-shutdown flag, once set,
//! suppresses all further user-facing error reporting.

use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use thiserror::Error;

use super::protocol;
use crate::events::{RecognitionErrorPayload, RecognitionEventEmitter};

/// Default interpreter used to launch the recognition script
pub const DEFAULT_COMMAND: &str = "python";

/// Default script path, relative to the app's working directory
pub const DEFAULT_SCRIPT_PATH: &str = "scripts/asl_recognition.py";

/// Errors that can occur during recognition session management
#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("Failed to launch recognition process: {0}")]
    SpawnFailed(#[from] std::io::Error),

    #[error("Recognition process has no readable output handle")]
    MissingStdout,
}

/// Configuration for a recognition session
#[derive(Debug, Clone)]
pub struct RecognitionConfig {
    /// Command used to launch the recognition script
    pub command: String,
    /// Path to the recognition script
    pub script_path: PathBuf,
    /// How long `stop()` waits for a graceful exit before forcing a kill
    pub graceful_timeout: Duration,
    /// Poll interval for the exit monitor and the termination wait loop
    pub poll_interval: Duration,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            script_path: PathBuf::from(DEFAULT_SCRIPT_PATH),
            graceful_timeout: Duration::from_secs(1),
            poll_interval: Duration::from_millis(50),
        }
    }
}

/// Handle to one running recognition process
///
/// Owns the child process, the intentional-shutdown flag shared with the
/// background threads, and the reader/monitor thread handles. At most one
/// session is active per `RecognitionManager`.
pub struct RecognitionSession {
    child: Arc<Mutex<Child>>,
    shutting_down: Arc<AtomicBool>,
    reader: Option<JoinHandle<()>>,
    monitor: Option<JoinHandle<()>>,
    config: RecognitionConfig,
}

impl RecognitionSession {
    /// Spawn the recognition process and its reader/monitor threads
    fn spawn(
        config: RecognitionConfig,
        emitter: Arc<dyn RecognitionEventEmitter>,
    ) -> Result<Self, RecognitionError> {
        let mut child = Command::new(&config.command)
            .arg(&config.script_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            // Diagnostics on the script's stderr are dropped entirely
            .stderr(Stdio::null())
            .spawn()?;

        crate::info!(
            "Recognition process started with PID {} ({} {:?})",
            child.id(),
            config.command,
            config.script_path
        );

        let stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(RecognitionError::MissingStdout);
            }
        };

        // Fresh flag per session: false until stop() is called
        let shutting_down = Arc::new(AtomicBool::new(false));
        let child = Arc::new(Mutex::new(child));

        let reader = {
            let shutting_down = shutting_down.clone();
            let emitter = emitter.clone();
            thread::spawn(move || {
                let mut lines = BufReader::new(stdout);
                let mut line = String::new();
                loop {
                    if shutting_down.load(Ordering::SeqCst) {
                        break;
                    }
                    line.clear();
                    match lines.read_line(&mut line) {
                        Ok(0) => break,
                        Ok(_) => {
                            if let Some(msg) = protocol::parse_line(&line) {
                                protocol::dispatch(&msg, emitter.as_ref(), &shutting_down);
                            }
                        }
                        Err(e) => {
                            if !shutting_down.load(Ordering::SeqCst) {
                                emitter.emit_recognition_error(RecognitionErrorPayload {
                                    title: "Error Reading Recognition Output".to_string(),
                                    message: format!("Failed to read data from script: {}", e),
                                });
                            }
                            break;
                        }
                    }
                }
                // stdout handle is dropped here, closing the pipe
            })
        };

        let monitor = {
            let shutting_down = shutting_down.clone();
            let child = child.clone();
            let emitter = emitter.clone();
            let poll = config.poll_interval;
            thread::spawn(move || loop {
                if shutting_down.load(Ordering::SeqCst) {
                    return;
                }
                // Lock only for the non-blocking status check; never across
                // a blocking wait, so stop() can always acquire the child
                let status = match child.lock() {
                    Ok(mut guard) => guard.try_wait(),
                    Err(_) => return,
                };
                match status {
                    Ok(Some(status)) => {
                        if !status.success() && !shutting_down.load(Ordering::SeqCst) {
                            let code = status
                                .code()
                                .map(|c| c.to_string())
                                .unwrap_or_else(|| "killed by signal".to_string());
                            emitter.emit_recognition_error(RecognitionErrorPayload {
                                title: "Recognition Script Error".to_string(),
                                message: format!(
                                    "Script terminated unexpectedly (code: {})",
                                    code
                                ),
                            });
                        }
                        return;
                    }
                    Ok(None) => thread::sleep(poll),
                    Err(e) => {
                        if !shutting_down.load(Ordering::SeqCst) {
                            emitter.emit_recognition_error(RecognitionErrorPayload {
                                title: "Process Monitoring Error".to_string(),
                                message: format!("Unexpected error waiting for script: {}", e),
                            });
                        }
                        return;
                    }
                }
            })
        };

        Ok(Self {
            child,
            shutting_down,
            reader: Some(reader),
            monitor: Some(monitor),
            config,
        })
    }

    /// Stop the session
    ///
    /// Sets the intentional-shutdown flag (suppressing all further error
    /// reporting), terminates the process gracefully with a bounded
    /// timeout and a forced kill as fallback, then joins the monitor and
    /// reader threads. Safe to call more than once; only the first call
    /// has any effect.
    pub fn stop(&mut self) {
        if self.shutting_down.swap(true, Ordering::SeqCst) {
            return;
        }

        terminate(
            &self.child,
            self.config.graceful_timeout,
            self.config.poll_interval,
        );

        // Monitor observes the flag within one poll interval; killing the
        // child closed the reader's pipe, so both joins are bounded
        if let Some(monitor) = self.monitor.take() {
            let _ = monitor.join();
        }
        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
    }

    /// Check if the recognition process is still running
    pub fn is_running(&self) -> bool {
        match self.child.lock() {
            Ok(mut guard) => matches!(guard.try_wait(), Ok(None)),
            Err(_) => false,
        }
    }
}

impl Drop for RecognitionSession {
    fn drop(&mut self) {
        if !self.shutting_down.load(Ordering::SeqCst) {
            crate::warn!("RecognitionSession dropped without explicit stop, killing process");
        }
        self.stop();
    }
}

/// Terminate the child: graceful first (SIGTERM on Unix), forced after the timeout
fn terminate(child: &Mutex<Child>, timeout: Duration, poll: Duration) {
    let mut guard = match child.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    if matches!(guard.try_wait(), Ok(Some(_))) {
        return;
    }

    #[cfg(unix)]
    unsafe {
        libc::kill(guard.id() as i32, libc::SIGTERM);
    }

    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if matches!(guard.try_wait(), Ok(Some(_))) {
            crate::debug!("Recognition process stopped gracefully");
            return;
        }
        thread::sleep(poll);
    }

    crate::warn!("Recognition process didn't stop gracefully, forcing kill");
    let _ = guard.kill();
    let _ = guard.wait();
}

/// Owner of the at-most-one active recognition session
pub struct RecognitionManager {
    config: RecognitionConfig,
    session: Option<RecognitionSession>,
}

impl RecognitionManager {
    /// Create a manager with the default configuration
    pub fn new() -> Self {
        Self::with_config(RecognitionConfig::default())
    }

    /// Create a manager with a custom configuration
    pub fn with_config(config: RecognitionConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Start a fresh session
    ///
    /// An already-active session is stopped first, so re-entering the
    /// camera view always yields a clean process. Spawn failure emits
    /// exactly one startup-error notification, creates no background
    /// threads and leaves no session behind; there is no retry.
    pub fn start(
        &mut self,
        emitter: Arc<dyn RecognitionEventEmitter>,
    ) -> Result<(), RecognitionError> {
        self.stop();

        match RecognitionSession::spawn(self.config.clone(), emitter.clone()) {
            Ok(session) => {
                self.session = Some(session);
                Ok(())
            }
            Err(e) => {
                emitter.emit_recognition_error(RecognitionErrorPayload {
                    title: "Recognition Startup Error".to_string(),
                    message: format!("Could not start script: {}", e),
                });
                Err(e)
            }
        }
    }

    /// Stop the active session, if any. Idempotent.
    pub fn stop(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.stop();
        }
    }

    /// Whether a session exists and its process is still running
    pub fn is_active(&self) -> bool {
        self.session
            .as_ref()
            .map(|session| session.is_running())
            .unwrap_or(false)
    }

    /// The configuration sessions are started with
    pub fn config(&self) -> &RecognitionConfig {
        &self.config
    }
}

impl Default for RecognitionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "supervisor_test.rs"]
mod tests;
