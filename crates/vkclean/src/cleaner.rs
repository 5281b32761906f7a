//! The cleanup run: authenticate, list, confirm, leave, tally.

use tracing::{debug, error, info, warn};

use vkclean_core::{Credentials, GroupRecord, Service, UserId};

use crate::auth::authenticate;
use crate::config::CleanupConfig;
use crate::console::{CONFIRM_QUESTION, Console, is_affirmative};
use crate::error::CleanupError;
use crate::groups::list_groups;
use crate::remover::Remover;

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Authenticating,
    Listing,
    AwaitingConfirmation,
    Processing,
    Done,
}

/// Per-group tally of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub succeeded: usize,
    pub failed: usize,
}

impl RunOutcome {
    pub fn record(&mut self, success: bool) {
        if success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Groups processed so far.
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum RunEnd {
    /// The user is in no groups.
    NothingToDo,
    /// Every group was processed.
    Completed(RunOutcome),
    /// The run stopped before processing.
    Aborted(CleanupError),
}

/// Result of [`Cleaner::run`].
#[derive(Debug)]
pub struct Report {
    /// Identity the run authenticated as, if it got that far.
    pub user_id: Option<UserId>,
    pub dry_run: bool,
    pub end: RunEnd,
}

/// Drives one cleanup run against a service.
pub struct Cleaner<S, C> {
    service: S,
    credentials: Option<Credentials>,
    config: CleanupConfig,
    console: C,
    stage: Stage,
}

impl<S: Service, C: Console> Cleaner<S, C> {
    pub fn new(
        service: S,
        credentials: Option<Credentials>,
        config: CleanupConfig,
        console: C,
    ) -> Self {
        Self {
            service,
            credentials,
            config,
            console,
            stage: Stage::Idle,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run the whole workflow. Never fails: every problem ends up in the
    /// returned [`Report`] and in the logs.
    pub async fn run(&mut self) -> Report {
        self.enter(Stage::Authenticating);
        let auth = match authenticate(&self.service, self.credentials.as_ref()).await {
            Ok(auth) => auth,
            Err(e) => {
                error!("Authentication failed. Cannot proceed.");
                return self.finish(None, RunEnd::Aborted(e));
            }
        };
        let user_id = Some(auth.user_id);

        self.enter(Stage::Listing);
        let groups = match list_groups(&auth.session).await {
            Ok(groups) => groups,
            Err(e) => return self.finish(user_id, RunEnd::Aborted(e)),
        };

        self.enter(Stage::AwaitingConfirmation);
        if groups.is_empty() {
            info!("No groups found, nothing to do.");
            return self.finish(user_id, RunEnd::NothingToDo);
        }

        info!("Found {} groups to process", groups.len());
        self.console.show_groups(&groups);

        if let Err(e) = self.confirm(groups.len()) {
            info!("Operation cancelled by user.");
            return self.finish(user_id, RunEnd::Aborted(e));
        }

        self.enter(Stage::Processing);
        let outcome = self.process(&auth.session, &groups).await;

        info!("Operation completed!");
        info!("Successfully processed: {}", outcome.succeeded);
        info!("Failed: {}", outcome.failed);
        if self.config.dry_run {
            info!("This was a dry run - no actual changes were made.");
            info!("Disable dry run to actually leave the groups.");
        }

        self.finish(user_id, RunEnd::Completed(outcome))
    }

    /// Gate processing on the operator's answer when confirmation is on.
    fn confirm(&mut self, count: usize) -> Result<(), CleanupError> {
        if !self.config.require_confirmation {
            debug!("Confirmation disabled, proceeding");
            return Ok(());
        }

        self.console.show_mode(self.config.dry_run, count);

        match self.console.ask(CONFIRM_QUESTION) {
            Ok(answer) if is_affirmative(&answer) => Ok(()),
            Ok(_) => Err(CleanupError::Cancelled),
            Err(e) => {
                warn!(error = %e, "Could not read confirmation");
                Err(CleanupError::Cancelled)
            }
        }
    }

    async fn process(&self, session: &S::Session, groups: &[GroupRecord]) -> RunOutcome {
        let remover = Remover::new(session, self.config.dry_run);
        let total = groups.len();
        let mut outcome = RunOutcome::default();

        for (index, group) in groups.iter().enumerate() {
            info!("Processing {}/{}: {}", index + 1, total, group.name);
            outcome.record(remover.leave(group.id, &group.name).await);

            // Pace requests, but not after the last one
            if index + 1 < total {
                tokio::time::sleep(self.config.delay).await;
            }
        }

        outcome
    }

    fn enter(&mut self, stage: Stage) {
        debug!(from = ?self.stage, to = ?stage, "Stage transition");
        self.stage = stage;
    }

    fn finish(&mut self, user_id: Option<UserId>, end: RunEnd) -> Report {
        self.enter(Stage::Done);
        Report {
            user_id,
            dry_run: self.config.dry_run,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_tally() {
        let mut outcome = RunOutcome::default();
        outcome.record(true);
        outcome.record(false);
        outcome.record(true);
        assert_eq!(outcome.succeeded, 2);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.total(), 3);
    }
}
