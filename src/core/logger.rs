//=========================================================================
// Game Logger
//=========================================================================
//
// Append-only text journal mirrored to the console.
//
// Lifecycle:
//   Logger::new() → init(path) → write()* → close()
//
// The logger is an explicit value passed by reference, not a global.
// Dropping it closes the file, so the journal lives exactly as long as
// the `Game` that owns it. Every line is written straight to the file
// handle (no userspace buffering) so the journal survives a crash.
//
// Misuse never fails hard: writing before init or after close, double
// init, and I/O errors are reported on the console and swallowed.
//
// The console is stdout by default. Any `Write` can stand in for it, in
// which case it receives both the mirrored lines and the diagnostics.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use crossterm::style::{StyledContent, Stylize};

//=== Internal Dependencies ===============================================

use crate::core::error::LogError;

//=== LogLevel ============================================================

/// Severity of a journal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Detailed diagnostics.
    Debug,
    /// Normal progress messages.
    Info,
    /// Something unusual but harmless.
    Warning,
    /// Something went wrong and was recovered.
    Error,
}

impl LogLevel {
    /// Tag printed between brackets in each line.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

//=== Console =============================================================

/// Destination of mirrored lines and of the logger's own diagnostics.
enum Console {
    /// Lines and diagnostics on stdout.
    Stdout,
    /// No mirroring. Diagnostics still reach stdout.
    Quiet,
    /// Lines and diagnostics on a caller-supplied writer.
    Sink(RefCell<Box<dyn Write>>),
}

//=== Logger ==============================================================

/// File + console journal with an explicit init/close lifecycle.
///
/// # Examples
///
/// ```no_run
/// use skirmish::core::logger::{Logger, LogLevel};
///
/// let mut logger = Logger::new();
/// logger.init("logs_jeu.txt").ok();
/// logger.write("Game started", LogLevel::Info);
/// logger.warn("Nothing to resume");
/// // file closed when `logger` goes out of scope
/// ```
pub struct Logger {
    file: Option<File>,
    path: Option<PathBuf>,
    console: Console,
}

impl Logger {
    //--- Construction -----------------------------------------------------

    /// Creates an uninitialized logger. Writes are dropped until [`init`](Self::init).
    pub fn new() -> Self {
        Self {
            file: None,
            path: None,
            console: Console::Stdout,
        }
    }

    /// Enables or disables mirroring of journal lines to stdout.
    ///
    /// Logger diagnostics (misuse, I/O failures) are always printed.
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console = if enabled { Console::Stdout } else { Console::Quiet };
        self
    }

    /// Mirrors journal lines and diagnostics to `sink` instead of stdout.
    pub fn with_console_sink(mut self, sink: impl Write + 'static) -> Self {
        self.console = Console::Sink(RefCell::new(Box::new(sink)));
        self
    }

    //--- Lifecycle --------------------------------------------------------

    /// Opens `path` for truncating write.
    ///
    /// A second call on an initialized logger is a no-op: the existing file
    /// is left untouched and a warning is printed.
    pub fn init(&mut self, path: impl AsRef<Path>) -> Result<(), LogError> {
        if self.is_initialized() {
            self.report(&LogError::AlreadyInitialized);
            return Err(LogError::AlreadyInitialized);
        }

        let path = path.as_ref();
        let file = match File::create(path) {
            Ok(file) => file,
            Err(source) => {
                let err = LogError::Open {
                    path: path.to_path_buf(),
                    source,
                };
                self.report(&err);
                return Err(err);
            }
        };

        self.file = Some(file);
        self.path = Some(path.to_path_buf());

        self.info("Logger initialized");
        let full = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.info(&format!("Log file: {}", full.display()));
        Ok(())
    }

    /// Flushes and releases the file. No-op when not initialized.
    pub fn close(&mut self) {
        if !self.is_initialized() {
            return;
        }

        self.info("Closing log");

        if let Some(file) = self.file.take() {
            if let Err(e) = file.sync_all() {
                self.report(&LogError::Close(e));
            }
        }
        self.path = None;
    }

    /// Whether a log file is currently open.
    pub fn is_initialized(&self) -> bool {
        self.file.is_some()
    }

    /// Path of the open log file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    //--- Writing ----------------------------------------------------------

    /// Writes one line. Failures are reported on the console only.
    pub fn write(&self, message: &str, level: LogLevel) {
        if let Err(e) = self.try_write(message, level) {
            self.report(&e);
        }
    }

    /// Writes one line and returns the failure instead of reporting it.
    ///
    /// The console mirror is printed even if the file write then fails.
    pub fn try_write(&self, message: &str, level: LogLevel) -> Result<(), LogError> {
        let Some(file) = &self.file else {
            return Err(LogError::NotInitialized);
        };

        let line = format_line(&timestamp(), level, message);
        self.mirror(&line, level);

        let mut sink: &File = file;
        writeln!(sink, "{line}").map_err(LogError::Write)
    }

    pub fn debug(&self, message: &str) {
        self.write(message, LogLevel::Debug);
    }

    pub fn info(&self, message: &str) {
        self.write(message, LogLevel::Info);
    }

    pub fn warn(&self, message: &str) {
        self.write(message, LogLevel::Warning);
    }

    pub fn error(&self, message: &str) {
        self.write(message, LogLevel::Error);
    }

    //--- Internal Helpers -------------------------------------------------

    fn mirror(&self, line: &str, level: LogLevel) {
        match &self.console {
            Console::Stdout => emit(&mut io::stdout().lock(), line, level),
            Console::Quiet => {}
            Console::Sink(sink) => emit(&mut **sink.borrow_mut(), line, level),
        }
    }

    /// Console-only report for the logger's own problems.
    fn report(&self, err: &LogError) {
        let level = match err {
            LogError::AlreadyInitialized | LogError::NotInitialized => LogLevel::Warning,
            _ => LogLevel::Error,
        };
        let line = format!("[{}] {err}", level.tag());

        match &self.console {
            Console::Stdout | Console::Quiet => emit(&mut io::stdout().lock(), &line, level),
            Console::Sink(sink) => emit(&mut **sink.borrow_mut(), &line, level),
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let console = match self.console {
            Console::Stdout => "stdout",
            Console::Quiet => "quiet",
            Console::Sink(_) => "sink",
        };
        f.debug_struct("Logger")
            .field("path", &self.path)
            .field("console", &console)
            .finish()
    }
}

//=== Helpers =============================================================

/// `[HH:MM:SS] [LEVEL] message`
fn format_line(stamp: &str, level: LogLevel, message: &str) -> String {
    format!("[{stamp}] [{}] {message}", level.tag())
}

/// Local wall-clock time of day as `HH:MM:SS`.
fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Debug gray, Info white, Warning yellow, Error red.
fn styled(line: &str, level: LogLevel) -> StyledContent<&str> {
    match level {
        LogLevel::Debug => line.grey(),
        LogLevel::Info => line.white(),
        LogLevel::Warning => line.yellow(),
        LogLevel::Error => line.red(),
    }
}

/// Prints one colored line. A console that refuses the write is ignored.
fn emit(out: &mut dyn Write, line: &str, level: LogLevel) {
    let _ = writeln!(out, "{}", styled(line, level));
}

//=========================================================================
// Unit Tests
//=========================================================================
