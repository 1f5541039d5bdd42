//! External markup conversion
//!
//! The JIRA ⇄ Markdown grammar is not implemented here. [`MarkupConverter`] is the
//! seam where a real converter plugs in, and [`PandocConverter`] is the one we ship:
//! it shells out to `pandoc`, which reads and writes both dialects.
//!
//! The pandoc binary is resolved in this order:
//!
//! 1. An explicit path given with [`PandocConverter::with_binary`]
//! 2. The `JMD_PANDOC_BIN` environment variable
//! 3. `pandoc` on the `PATH`

use crate::error::FormatError;
use crate::format::Format;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

/// Environment variable that overrides the pandoc binary location.
pub const PANDOC_BIN_ENV: &str = "JMD_PANDOC_BIN";

/// Converts text from one markup dialect into another.
pub trait MarkupConverter {
    fn convert(&self, source: &str, from: &dyn Format, to: &dyn Format)
        -> Result<String, FormatError>;
}

/// Converter that pipes documents through a `pandoc` process.
#[derive(Debug, Clone, Default)]
pub struct PandocConverter {
    binary: Option<PathBuf>,
    extra_args: Vec<String>,
}

impl PandocConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this binary instead of searching for one.
    pub fn with_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.binary = Some(path.into());
        self
    }

    /// Arguments appended after the `-f`/`-t` pair on every invocation.
    pub fn with_extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }

    fn resolve_binary(&self) -> Result<PathBuf, FormatError> {
        if let Some(path) = &self.binary {
            return Ok(path.clone());
        }

        if let Some(path) = env::var_os(PANDOC_BIN_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        search_path()
    }
}

#[cfg(feature = "native-convert")]
fn search_path() -> Result<PathBuf, FormatError> {
    which::which("pandoc").map_err(|_| {
        FormatError::ConverterUnavailable(format!(
            "Unable to locate a pandoc binary. Install pandoc or set {PANDOC_BIN_ENV}."
        ))
    })
}

#[cfg(not(feature = "native-convert"))]
fn search_path() -> Result<PathBuf, FormatError> {
    Ok(PathBuf::from("pandoc"))
}

impl MarkupConverter for PandocConverter {
    fn convert(
        &self,
        source: &str,
        from: &dyn Format,
        to: &dyn Format,
    ) -> Result<String, FormatError> {
        let binary = self.resolve_binary()?;
        log::debug!(
            "running {} -f {} -t {}",
            binary.display(),
            from.converter_name(),
            to.converter_name()
        );

        let mut child = Command::new(&binary)
            .arg("-f")
            .arg(from.converter_name())
            .arg("-t")
            .arg(to.converter_name())
            .args(&self.extra_args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                FormatError::ConversionError(format!(
                    "Failed to launch pandoc ({}): {e}",
                    binary.display()
                ))
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            FormatError::ConversionError("Failed to open pandoc stdin".to_string())
        })?;
        // Feed stdin from its own thread so a large document cannot fill both pipes.
        let input = source.to_owned();
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child
            .wait_with_output()
            .map_err(|e| FormatError::ConversionError(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FormatError::ConversionError(format!(
                "pandoc exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        writer
            .join()
            .map_err(|_| FormatError::ConversionError("pandoc input writer panicked".to_string()))?
            .map_err(|e| FormatError::ConversionError(format!("Failed to write to pandoc: {e}")))?;

        String::from_utf8(output.stdout).map_err(|_| {
            FormatError::ConversionError("pandoc produced non UTF-8 output".to_string())
        })
    }
}
