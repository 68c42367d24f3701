use crate::error::PlaybackError;
use std::collections::HashSet;

/// Ordered candidate sources, each tried at most once per session.
#[derive(Debug, Clone)]
pub struct SourceFallback {
    candidates: Vec<String>,
    tried: HashSet<String>,
}

impl SourceFallback {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
            tried: HashSet::new(),
        }
    }

    /// Record `failed` as tried and claim the first untried candidate.
    pub fn next_after_failure(&mut self, failed: Option<&str>) -> Result<String, PlaybackError> {
        if let Some(failed) = failed.filter(|src| !src.is_empty()) {
            self.tried.insert(failed.to_string());
        }

        let next = self
            .candidates
            .iter()
            .find(|candidate| !self.tried.contains(candidate.as_str()))
            .cloned()
            .ok_or(PlaybackError::SourcesExhausted {
                tried: self.tried.len(),
            })?;
        self.tried.insert(next.clone());
        Ok(next)
    }

    #[cfg(test)]
    pub fn is_exhausted(&self) -> bool {
        self.candidates
            .iter()
            .all(|candidate| self.tried.contains(candidate.as_str()))
    }
}
