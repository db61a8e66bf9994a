use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Loading state owned by the session, optionally mirrored by a terminal spinner.
pub struct LoadingIndicator {
    active: bool,
    visible: bool,
    bar: Option<ProgressBar>,
}

impl LoadingIndicator {
    /// An indicator that renders a spinner on stderr while active.
    pub fn visible() -> Self {
        Self { active: false, visible: true, bar: None }
    }

    /// An indicator that only tracks the flag.
    pub fn hidden() -> Self {
        Self { active: false, visible: false, bar: None }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn begin(&mut self, message: &str) {
        self.end();
        self.active = true;
        if !self.visible {
            return;
        }
        let pb = ProgressBar::new_spinner();
        match ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            Ok(style) => pb.set_style(style),
            Err(e) => tracing::debug!(%e, "invalid spinner template, using default"),
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(pb);
    }

    pub fn end(&mut self) {
        self.active = false;
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
        }
    }
}
