//! Group membership records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GroupId;

/// Kind of a membership as shown to the operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// A regular group (also used for events).
    Group,
    /// A public page.
    Community,
}

impl GroupKind {
    /// Map the remote `type` field. Only `"page"` is a community.
    pub fn from_api(kind: &str) -> Self {
        if kind == "page" {
            GroupKind::Community
        } else {
            GroupKind::Group
        }
    }

    /// Human label.
    pub fn label(self) -> &'static str {
        match self {
            GroupKind::Group => "Group",
            GroupKind::Community => "Community",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A snapshot of one group the user belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub id: GroupId,
    pub name: String,
    pub kind: GroupKind,
    /// The user administers this group.
    pub is_admin: bool,
    /// Membership flag as reported by the API, when it was reported.
    pub is_member: Option<bool>,
}

impl GroupRecord {
    /// Create a record for a plain group with no admin rights.
    pub fn new(id: i64, name: impl Into<String>, kind: GroupKind) -> Self {
        Self {
            id: GroupId::new(id),
            name: name.into(),
            kind,
            is_admin: false,
            is_member: None,
        }
    }

    /// Builder-style admin flag.
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}

/// Output of one enumeration call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupList {
    /// Total count as reported by the server.
    pub count: u64,
    /// Items, in server order.
    pub items: Vec<GroupRecord>,
}
