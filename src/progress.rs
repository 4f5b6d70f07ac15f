// src/progress.rs

//! Stage messages for the spinner shown while git runs.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "progress")]
use std::time::Duration;

/// Receives one message per download stage and a final outcome.
///
/// git reports no byte-level progress through the runner, so there is no
/// position or length, only messages.
///
/// # Examples
///
/// ```
/// use ghfd::progress::ProgressReporter;
/// use std::sync::Mutex;
///
/// /// Keeps every stage message, for a plain log view.
/// struct StageLog(Mutex<Vec<String>>);
///
/// impl ProgressReporter for StageLog {
///     fn set_message(&self, msg: String) {
///         self.0.lock().unwrap().push(msg);
///     }
///     fn finish(&self) {}
///     fn finish_with_message(&self, msg: String) {
///         self.0.lock().unwrap().push(msg);
///     }
/// }
///
/// let stages = StageLog(Mutex::new(Vec::new()));
/// stages.set_message("Cloning user/repo...".to_string());
/// stages.finish_with_message("Downloaded to /tmp/src".to_string());
/// assert_eq!(stages.0.lock().unwrap().len(), 2);
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Describes the stage now running (e.g., "Cloning user/repo...").
    fn set_message(&self, msg: String);
    /// The download failed or was interrupted; hide the indicator.
    fn finish(&self);
    /// The download succeeded; leave `msg` in place of the indicator.
    fn finish_with_message(&self, msg: String);
}

/// A stderr spinner driven by stage messages.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    spinner: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_message(&self, msg: String) {
        self.spinner.set_message(msg);
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    fn finish_with_message(&self, msg: String) {
        self.spinner.finish_with_message(msg);
    }
}
