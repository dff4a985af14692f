//! Human-readable status dumps.
//!
//! `render_*` build the text; the `show*` methods send it line by line to
//! the log at info level.

use std::fmt::Write;

use qa_core::tracing::events;
use qa_core::{Detector, EventSpecie, Task};

use crate::layout::Stage;
use crate::registry::QaStatus;
use crate::word::StatusWord;

/// Label used for a stage with no bit raised.
pub const OK_LABEL: &str = "OK";

fn write_stage_line(
    out: &mut String,
    detector: Detector,
    specie: EventSpecie,
    stage: Stage,
    word: StatusWord,
) {
    let bits: Vec<&str> = word.raised_bits(stage).map(|bit| bit.name()).collect();
    let bits = if bits.is_empty() {
        OK_LABEL.to_string()
    } else {
        bits.join("|")
    };
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{:<7} {:<17} {:<19} {}",
        detector.name(),
        specie.name(),
        stage.to_string(),
        bits
    );
}

impl QaStatus {
    /// Status of `detector` under `specie`, one line per stage. With `task`
    /// given, only that task's stages are listed.
    pub fn render_status(
        &self,
        detector: Detector,
        task: Option<Task>,
        specie: EventSpecie,
    ) -> String {
        let word = self.status(detector, specie);
        let mut out = String::new();
        match task {
            Some(task) => {
                for stage in Stage::of(task) {
                    write_stage_line(&mut out, detector, specie, stage, word);
                }
            }
            None => {
                for stage in Stage::ALL {
                    write_stage_line(&mut out, detector, specie, stage, word);
                }
            }
        }
        out
    }

    /// Status of `detector` for every specie seen in the run or carrying a
    /// raised bit. A detector with nothing to show yields a single summary line.
    pub fn render_detector(&self, detector: Detector) -> String {
        let mut out = String::new();
        for &specie in EventSpecie::ALL {
            if self.is_event_specie_set(specie) || self.is_set_any(detector, specie) {
                out.push_str(&self.render_status(detector, None, specie));
            }
        }
        if out.is_empty() {
            let _ = writeln!(out, "{:<7} {}", detector.name(), OK_LABEL);
        }
        out
    }

    /// Status of every detector.
    pub fn render_all(&self) -> String {
        Detector::ALL
            .iter()
            .map(|&detector| self.render_detector(detector))
            .collect()
    }

    /// Log [`render_status`](Self::render_status).
    pub fn show_status(&self, detector: Detector, task: Option<Task>, specie: EventSpecie) {
        log_lines(&self.render_status(detector, task, specie));
    }

    /// Log [`render_detector`](Self::render_detector).
    pub fn show(&self, detector: Detector) {
        log_lines(&self.render_detector(detector));
    }

    /// Log [`render_all`](Self::render_all).
    pub fn show_all(&self) {
        log_lines(&self.render_all());
    }
}

fn log_lines(text: &str) {
    for line in text.lines() {
        events::status_line(line);
    }
}
