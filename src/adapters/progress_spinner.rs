use std::cell::RefCell;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ports::ProgressReporter;

const TICK: Duration = Duration::from_millis(80);

/// Terminal spinner backed by `indicatif`, drawn on stderr.
#[derive(Default)]
pub struct SpinnerProgress {
    active: RefCell<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn take(&self) -> Option<ProgressBar> {
        self.active.borrow_mut().take()
    }
}

impl ProgressReporter for SpinnerProgress {
    fn start(&self, message: &str) {
        if let Some(previous) = self.take() {
            previous.finish_and_clear();
        }

        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let spinner =
            ProgressBar::new_spinner().with_style(style).with_message(message.to_string());
        spinner.enable_steady_tick(TICK);
        *self.active.borrow_mut() = Some(spinner);
    }

    fn succeed(&self, message: &str) {
        if let Some(spinner) = self.take() {
            spinner.finish_and_clear();
        }
        eprintln!("✅ {}", message);
    }

    fn fail(&self, message: &str) {
        if let Some(spinner) = self.take() {
            spinner.finish_and_clear();
        }
        eprintln!("❌ {}", message);
    }

    fn clear(&self) {
        if let Some(spinner) = self.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for SpinnerProgress {
    fn drop(&mut self) {
        self.clear();
    }
}
