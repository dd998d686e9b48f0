// ===== prolom/src/reports/mod.rs =====
use crate::error::ProlomResult;
use crate::optimizer::runner::SearchResult;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Receives finished search results. Implementations own all display and
/// storage side effects; the search engine never sees this trait.
pub trait ReportSink {
    fn persist_plaintext(&mut self, result: &SearchResult) -> ProlomResult<()>;
    fn display_trajectory(&mut self, trajectory: &[f32]) -> ProlomResult<()>;
}

/// Writes the decrypted text and a JSON trajectory dump into a directory.
pub struct FileReporter {
    dir: PathBuf,
}

impl FileReporter {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn plaintext_path(&self) -> PathBuf {
        self.dir.join("plaintext.txt")
    }

    pub fn trajectory_path(&self) -> PathBuf {
        self.dir.join("trajectory.json")
    }
}

impl ReportSink for FileReporter {
    fn persist_plaintext(&mut self, result: &SearchResult) -> ProlomResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.plaintext_path(), &result.plaintext)?;
        Ok(())
    }

    fn display_trajectory(&mut self, trajectory: &[f32]) -> ProlomResult<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string(trajectory)?;
        fs::write(self.trajectory_path(), json)?;
        Ok(())
    }
}

/// Logs a short summary instead of touching the filesystem.
pub struct LogReporter;

impl ReportSink for LogReporter {
    fn persist_plaintext(&mut self, result: &SearchResult) -> ProlomResult<()> {
        info!(
            key = %result.key,
            score = result.score,
            "Best decryption: {}",
            result.plaintext
        );
        Ok(())
    }

    fn display_trajectory(&mut self, trajectory: &[f32]) -> ProlomResult<()> {
        let first = trajectory.first().copied().unwrap_or(0.0);
        let last = trajectory.last().copied().unwrap_or(0.0);
        info!(points = trajectory.len(), first, last, "Score trajectory");
        Ok(())
    }
}
