//! VK endpoint definitions and request/response types.

use serde::{Deserialize, Deserializer, Serialize};

use vkclean_core::{GroupId, GroupKind, GroupRecord};

// ============================================================================
// Method Names
// ============================================================================

/// users.get
pub const USERS_GET: &str = "users.get";

/// groups.get
pub const GROUPS_GET: &str = "groups.get";

/// groups.leave
pub const GROUPS_LEAVE: &str = "groups.leave";

/// OAuth token endpoint, relative to the OAuth base.
pub const OAUTH_TOKEN: &str = "token";

/// Extended fields requested from groups.get.
pub const GROUP_FIELDS: &str = "name,type,is_admin,is_member";

// ============================================================================
// Envelope
// ============================================================================

/// Every API method answers with either `response` or `error`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<R> {
    pub response: Option<R>,
    pub error: Option<ApiErrorBody>,
}

/// Body of an API error.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error_code: i64,
    #[serde(default)]
    pub error_msg: String,
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for users.get (the current user needs none).
#[derive(Debug, Serialize)]
pub struct UsersGetQuery {}

/// One entry of the users.get response.
#[derive(Debug, Deserialize)]
pub struct UserEntry {
    pub id: i64,
}

/// Query parameters for groups.get.
#[derive(Debug, Serialize)]
pub struct GroupsGetQuery<'a> {
    pub extended: u8,
    pub fields: &'a str,
}

/// Response from groups.get with `extended=1`.
#[derive(Debug, Deserialize)]
pub struct GroupsGetResponse {
    pub count: u64,
    #[serde(default)]
    pub items: Vec<GroupItem>,
}

/// A single group from groups.get.
#[derive(Debug, Deserialize)]
pub struct GroupItem {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, deserialize_with = "flag")]
    pub is_admin: bool,
    #[serde(default, deserialize_with = "optional_flag")]
    pub is_member: Option<bool>,
}

impl From<GroupItem> for GroupRecord {
    fn from(item: GroupItem) -> Self {
        GroupRecord {
            id: GroupId::new(item.id),
            name: item.name,
            kind: GroupKind::from_api(&item.kind),
            is_admin: item.is_admin,
            is_member: item.is_member,
        }
    }
}

/// Query parameters for groups.leave.
#[derive(Debug, Serialize)]
pub struct GroupsLeaveQuery {
    pub group_id: i64,
}

/// Query parameters for the OAuth password grant.
#[derive(Serialize)]
pub struct PasswordGrantQuery<'a> {
    pub grant_type: &'static str,
    pub client_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<&'a str>,
    pub username: &'a str,
    pub password: &'a str,
    pub scope: &'static str,
    #[serde(rename = "2fa_supported")]
    pub two_factor_supported: u8,
    pub v: &'a str,
}

/// Response of the OAuth token endpoint, success or failure.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub user_id: Option<i64>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

// ============================================================================
// Flag decoding
// ============================================================================

/// VK encodes flags as 0/1; accept booleans too.
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

impl From<Flag> for bool {
    fn from(flag: Flag) -> Self {
        match flag {
            Flag::Bool(b) => b,
            Flag::Int(n) => n != 0,
        }
    }
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Flag::deserialize(deserializer)?.into())
}

fn optional_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(Option::<Flag>::deserialize(deserializer)?.map(Into::into))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn group_item_decodes_integer_flags() {
        let item: GroupItem = serde_json::from_value(json!({
            "id": 7,
            "name": "Rustaceans",
            "type": "page",
            "is_admin": 1,
            "is_member": 0
        }))
        .unwrap();

        let record = GroupRecord::from(item);
        assert_eq!(record.id.get(), 7);
        assert_eq!(record.kind, GroupKind::Community);
        assert!(record.is_admin);
        assert_eq!(record.is_member, Some(false));
    }

    #[test]
    fn group_item_defaults_missing_fields() {
        let item: GroupItem = serde_json::from_value(json!({"id": 1, "name": "G1"})).unwrap();
        let record = GroupRecord::from(item);
        assert_eq!(record.kind, GroupKind::Group);
        assert!(!record.is_admin);
        assert_eq!(record.is_member, None);
    }

    #[test]
    fn group_item_accepts_boolean_flags() {
        let item: GroupItem =
            serde_json::from_value(json!({"id": 2, "name": "G2", "is_admin": true})).unwrap();
        assert!(item.is_admin);
    }

    #[test]
    fn error_envelope() {
        let envelope: ApiEnvelope<u8> = serde_json::from_value(json!({
            "error": {"error_code": 5, "error_msg": "User authorization failed"}
        }))
        .unwrap();
        assert!(envelope.response.is_none());
        assert_eq!(envelope.error.unwrap().error_code, 5);
    }

    #[test]
    fn password_grant_query_omits_missing_secret() {
        let query = PasswordGrantQuery {
            grant_type: "password",
            client_id: "6222115",
            client_secret: None,
            username: "alice",
            password: "pw",
            scope: "groups",
            two_factor_supported: 1,
            v: "5.199",
        };
        let value = serde_json::to_value(&query).unwrap();
        assert!(value.get("client_secret").is_none());
        assert_eq!(value["2fa_supported"], 1);
    }
}
