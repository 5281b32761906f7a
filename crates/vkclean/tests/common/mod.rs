//! In-memory service, session and console used by the workflow tests.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use vkclean::Console;
use vkclean_core::error::{ApiError, AuthError};
use vkclean_core::{
    AccessToken, Credentials, GroupId, GroupKind, GroupList, GroupRecord, Result,
    Service, Session, UserId,
};

/// A call observed by the fake service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Open(&'static str),
    CurrentUser,
    ListGroups,
    Leave(i64),
}

/// Scripted behavior of the fake service.
#[derive(Debug, Clone)]
pub struct Script {
    pub user_id: i64,
    pub reject_credentials: bool,
    /// `None` makes the listing call fail.
    pub groups: Option<Vec<GroupRecord>>,
    pub failing_leaves: Vec<i64>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            user_id: 12345,
            reject_credentials: false,
            groups: Some(Vec::new()),
            failing_leaves: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FakeService {
    script: Arc<Script>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeService {
    pub fn new(script: Script) -> Self {
        Self {
            script: Arc::new(script),
            calls: Arc::default(),
        }
    }

    pub fn with_groups(groups: Vec<GroupRecord>) -> Self {
        Self::new(Script {
            groups: Some(groups),
            ..Script::default()
        })
    }

    /// Handle for inspecting calls after the service has been moved.
    pub fn calls(&self) -> Arc<Mutex<Vec<Call>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn leaves(calls: &Arc<Mutex<Vec<Call>>>) -> Vec<i64> {
    calls
        .lock()
        .unwrap()
        .iter()
        .filter_map(|call| match call {
            Call::Leave(id) => Some(*id),
            _ => None,
        })
        .collect()
}

#[async_trait]
impl Service for FakeService {
    type Session = FakeSession;

    async fn open(&self, credentials: &Credentials) -> Result<FakeSession> {
        self.record(Call::Open(credentials.method()));

        if self.script.reject_credentials {
            return Err(AuthError::Rejected {
                error: "invalid_client".to_string(),
                description: "Username or password is incorrect".to_string(),
            }
            .into());
        }

        let token = match credentials {
            Credentials::AccessToken(token) => token.clone(),
            Credentials::Password { .. } => AccessToken::new("issued-token"),
        };

        Ok(FakeSession {
            service: self.clone(),
            token,
        })
    }
}

#[derive(Debug)]
pub struct FakeSession {
    service: FakeService,
    token: AccessToken,
}

#[async_trait]
impl Session for FakeSession {
    fn access_token(&self) -> AccessToken {
        self.token.clone()
    }

    async fn current_user(&self) -> Result<UserId> {
        self.service.record(Call::CurrentUser);
        Ok(UserId::new(self.service.script.user_id))
    }

    async fn list_groups(&self) -> Result<GroupList> {
        self.service.record(Call::ListGroups);
        match &self.service.script.groups {
            Some(items) => Ok(GroupList {
                count: items.len() as u64,
                items: items.clone(),
            }),
            None => Err(ApiError::new(10, "Internal server error").into()),
        }
    }

    async fn leave_group(&self, group: GroupId) -> Result<()> {
        self.service.record(Call::Leave(group.get()));
        if self.service.script.failing_leaves.contains(&group.get()) {
            Err(ApiError::new(15, "Access denied").into())
        } else {
            Ok(())
        }
    }
}

/// Console that answers with a fixed reply and remembers what it showed.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    /// `None` simulates a closed stdin.
    pub answer: Option<String>,
    pub shown: Vec<GroupRecord>,
    pub mode: Option<(bool, usize)>,
    pub questions: Vec<String>,
}

impl ScriptedConsole {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            ..Self::default()
        }
    }
}

impl Console for ScriptedConsole {
    fn show_groups(&mut self, groups: &[GroupRecord]) {
        self.shown.extend_from_slice(groups);
    }

    fn show_mode(&mut self, dry_run: bool, count: usize) {
        self.mode = Some((dry_run, count));
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.questions.push(question.to_string());
        self.answer
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
    }
}

pub fn token(value: &str) -> Option<Credentials> {
    Credentials::resolve(Some(value.to_string()), None, None)
}

pub fn sample_groups(count: i64) -> Vec<GroupRecord> {
    (1..=count)
        .map(|id| {
            let kind = if id % 2 == 0 {
                GroupKind::Community
            } else {
                GroupKind::Group
            };
            GroupRecord::new(id, format!("G{}", id), kind)
        })
        .collect()
}
