// file: src/ui/spinner.rs
// description: busy indicator shown while a backend call is in flight
// reference: uses indicatif spinners; hidden automatically when stderr is not a terminal

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(message: &str, colored: bool) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style(colored));
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.finish();
    }
}

fn spinner_style(colored: bool) -> ProgressStyle {
    let template = if colored {
        "{spinner:.green} {msg} [{elapsed}]"
    } else {
        "{spinner} {msg} [{elapsed}]"
    };

    ProgressStyle::default_spinner()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
