/// Path used after an image fails to load: the same file without the
/// leading `./`.
pub fn alternate_path(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

/// Last path segment, used to match rendered images to a preloaded one.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Whether a rendered image source refers to the file behind `path`.
pub fn refers_to(rendered_src: &str, path: &str) -> bool {
    let name = file_name(path);
    !name.is_empty() && rendered_src.contains(name)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloadOutcome {
    Loaded,
    LoadedAlternate,
    Failed,
}

/// Counts settled preloads so the last one can report a summary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PreloadTally {
    pub total: usize,
    pub loaded: usize,
    pub alternate: usize,
    pub failed: usize,
}

impl PreloadTally {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Record one outcome. Returns `true` when every image has settled.
    pub fn record(&mut self, outcome: PreloadOutcome) -> bool {
        match outcome {
            PreloadOutcome::Loaded => self.loaded += 1,
            PreloadOutcome::LoadedAlternate => self.alternate += 1,
            PreloadOutcome::Failed => self.failed += 1,
        }
        self.settled() == self.total
    }

    pub fn settled(&self) -> usize {
        self.loaded + self.alternate + self.failed
    }
}
