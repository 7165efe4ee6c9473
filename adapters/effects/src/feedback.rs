//! Player feedback submission.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use color_alchemy_core::Mode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::EffectError;

/// Satisfaction score on a zero to five scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Highest accepted rating.
    pub const MAX: u8 = 5;

    /// Validates a raw rating.
    pub fn new(value: u8) -> Result<Self, EffectError> {
        if value > Self::MAX {
            return Err(EffectError::InvalidRating(value));
        }
        Ok(Self(value))
    }

    /// Raw score.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = EffectError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A single feedback submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Free-form comment.
    pub free_text: String,
    /// Submission time.
    pub timestamp: DateTime<Utc>,
    /// Mode the player was in when submitting.
    pub mode: Mode,
    /// Satisfaction score.
    pub rating: Rating,
}

/// Destination for feedback submissions.
pub trait FeedbackSink {
    /// Delivers one submission.
    fn send(&mut self, feedback: &Feedback) -> Result<(), EffectError>;
}

/// Submits feedback, returning whether the sink accepted it.
pub fn submit_feedback(sink: &mut impl FeedbackSink, feedback: &Feedback) -> bool {
    match sink.send(feedback) {
        Ok(()) => {
            debug!(mode = %feedback.mode, rating = feedback.rating.get(), "feedback submitted");
            true
        }
        Err(error) => {
            warn!(%error, "feedback submission failed");
            false
        }
    }
}

/// Sink appending one JSON document per line to a file.
#[derive(Clone, Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
}

impl JsonLinesSink {
    /// Appends to the file at `path`, creating it on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File receiving submissions.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedbackSink for JsonLinesSink {
    fn send(&mut self, feedback: &Feedback) -> Result<(), EffectError> {
        let line = serde_json::to_string(feedback)?;
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use color_alchemy_core::LevelId;

    fn feedback(text: &str, rating: u8) -> Feedback {
        Feedback {
            free_text: text.to_owned(),
            timestamp: Utc
                .with_ymd_and_hms(2026, 10, 19, 8, 30, 0)
                .single()
                .expect("valid timestamp"),
            mode: Mode::Level(LevelId::new(2)),
            rating: Rating::new(rating).expect("valid rating"),
        }
    }

    struct Rejecting;

    impl FeedbackSink for Rejecting {
        fn send(&mut self, _feedback: &Feedback) -> Result<(), EffectError> {
            Err(EffectError::Io(std::io::Error::other("offline")))
        }
    }

    #[test]
    fn rating_scale_is_zero_to_five() {
        assert_eq!(Rating::new(0).map(Rating::get).ok(), Some(0));
        assert_eq!(Rating::new(5).map(Rating::get).ok(), Some(5));
        assert!(matches!(Rating::new(6), Err(EffectError::InvalidRating(6))));
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn json_lines_sink_appends_documents() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut sink = JsonLinesSink::new(dir.path().join("feedback.jsonl"));

        assert!(submit_feedback(&mut sink, &feedback("too easy", 4)));
        assert!(submit_feedback(&mut sink, &feedback("purple is hard", 2)));

        let contents = fs::read_to_string(sink.path()).expect("read sink");
        let lines: Vec<Feedback> = contents
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(lines, vec![feedback("too easy", 4), feedback("purple is hard", 2)]);

        let raw: serde_json::Value =
            serde_json::from_str(contents.lines().next().expect("first line")).expect("json");
        assert_eq!(raw["rating"], 4);
        assert_eq!(raw["timestamp"], "2026-10-19T08:30:00Z");
    }

    #[test]
    fn failed_submission_reports_false() {
        assert!(!submit_feedback(&mut Rejecting, &feedback("lost", 1)));
    }
}
