//! Request and response bodies, as they travel on the wire.

use crate::models::{QuestionAnswer, Ticket, User};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "userId", default, deserialize_with = "string_or_number")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub adm: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateServiceRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub register: String,
    pub id_attendant: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateServiceResponse {
    pub service: CreatedService,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedService {
    #[serde(deserialize_with = "id_string_or_number")]
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRatingRequest {
    pub id_service: i64,
    pub questions: Vec<QuestionAnswer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServicesResponse {
    #[serde(default)]
    pub services: Vec<Ticket>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub user: UserDetail,
}

/// `GET /user/:id`: the user plus the tickets they attended.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub services: Vec<Ticket>,
}

/// `userId` is a string in storage but may be a number in the response.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn id_string_or_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| serde::de::Error::custom(format!("invalid id {n}"))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid id '{s}'"))),
        other => Err(serde::de::Error::custom(format!("invalid id {other}"))),
    }
}

/// Administrator flag: `true` or `"true"`; anything else is false.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}
