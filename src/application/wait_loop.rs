//! The wait loop

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::evaluator::Evaluator;
use super::event::WaitEvent;
use crate::config::{Strategy, WaitConfig};
use crate::domain::{
    GroupDirectory, MetadataSource, WaitOutcome, WaitSource, WaitSourceKind, WatchFactory,
};
use crate::error::{WaitResult, WatchSetupError};
use crate::infrastructure::PollSource;

/// Summary of a successful wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitReport {
    /// Source that was driving the loop when the predicate held
    pub strategy: WaitSourceKind,
    /// Number of predicate evaluations, including the satisfying one
    pub evaluations: u64,
    pub elapsed: Duration,
}

/// Blocks until the evaluator is satisfied or reports a fatal error.
///
/// A watch on the parent directory is tried first; any failure to install it
/// degrades to polling instead of failing the wait. The loop body is written
/// once against [`WaitSource`], and the source is dropped (releasing any
/// watch) on every return path.
pub struct WaitLoop<M, G, F> {
    evaluator: Evaluator<M, G>,
    factory: F,
    config: WaitConfig,
}

impl<M, G, F> WaitLoop<M, G, F>
where
    M: MetadataSource,
    G: GroupDirectory,
    F: WatchFactory,
{
    pub fn new(evaluator: Evaluator<M, G>, factory: F, config: WaitConfig) -> Self {
        Self {
            evaluator,
            factory,
            config,
        }
    }

    pub fn run(&self, path: &Path, on_event: impl Fn(WaitEvent)) -> WaitResult<WaitReport> {
        let started = Instant::now();

        // Installed before the first evaluation so a file created in between
        // still produces an event.
        let mut source = self.select_source(path, &on_event);

        on_event(WaitEvent::WaitStarted {
            path: path.display().to_string(),
            user: self.evaluator.identity().username.clone(),
            request: *self.evaluator.request(),
            strategy: source.kind(),
        });

        let mut evaluations: u64 = 0;
        loop {
            evaluations += 1;
            match self.evaluator.evaluate(path) {
                WaitOutcome::Satisfied => {
                    let report = WaitReport {
                        strategy: source.kind(),
                        evaluations,
                        elapsed: started.elapsed(),
                    };
                    on_event(WaitEvent::Satisfied {
                        path: path.display().to_string(),
                        evaluations,
                        elapsed_ms: u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
                    });
                    return Ok(report);
                }
                WaitOutcome::Fatal(err) => {
                    on_event(WaitEvent::Error {
                        message: err.to_string(),
                    });
                    return Err(err);
                }
                WaitOutcome::NotYetSatisfied => {
                    debug!(evaluations, "not yet satisfied");
                }
            }

            if let Err(err) = source.wait_for_change() {
                on_event(WaitEvent::Error {
                    message: err.to_string(),
                });
                return Err(err);
            }

            on_event(WaitEvent::Recheck {
                evaluations: evaluations + 1,
                strategy: source.kind(),
            });
        }
    }

    fn select_source(&self, path: &Path, on_event: &impl Fn(WaitEvent)) -> Box<dyn WaitSource> {
        let poll = || -> Box<dyn WaitSource> { Box::new(PollSource::new(self.config.poll_interval)) };

        if self.config.strategy == Strategy::Poll {
            return poll();
        }

        let attempt = parent_dir(path)
            .ok_or_else(|| WatchSetupError::NoParent {
                path: path.to_path_buf(),
            })
            .and_then(|dir| self.factory.open(&dir));

        match attempt {
            Ok(source) => source,
            Err(err) => {
                if err.is_silent() {
                    debug!("{err}; polling instead");
                } else {
                    warn!("{err} (falling back to poll mechanism)");
                }
                on_event(WaitEvent::Fallback {
                    reason: err.to_string(),
                });
                poll()
            }
        }
    }
}

/// Directory to watch for `path`, following `dirname(3)`.
///
/// A bare file name lives in `.`, and the root is its own parent.
pub fn parent_dir(path: &Path) -> Option<PathBuf> {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Some(PathBuf::from(".")),
        Some(parent) => Some(parent.to_path_buf()),
        None if path.has_root() => Some(path.to_path_buf()),
        None => None,
    }
}
