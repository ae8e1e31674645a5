use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::AppError;

pub const RESUME_MIME: &str = "application/pdf";
pub const BASE64_DATA_PREFIX: &str = "base64-data=";

/// A field counts as filled when it is present, not null and not an empty string.
fn is_filled(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Collects the names of every unfilled field in one pass.
fn missing_fields(fields: &[(&'static str, &Option<Value>)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| !is_filled(value))
        .map(|(name, _)| *name)
        .collect()
}

/// Takes a field that [`missing_fields`] already accepted.
fn take(value: Option<Value>) -> Value {
    value.unwrap_or(Value::Null)
}

/// Reads a request from a JSON object body, picking fields by name only.
///
/// Anything other than an object (arrays included) never reaches this point,
/// and an absent body reads as an object with no fields.
pub fn from_object<T: DeserializeOwned + Default>(body: Option<Map<String, Value>>) -> T {
    body.and_then(|object| serde_json::from_value(Value::Object(object)).ok())
        .unwrap_or_default()
}

// Inbound bodies keep raw JSON values so nothing is coerced on the way through.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub mobile: Option<Value>,
    pub position_applied: Option<Value>,
    pub source: Option<Value>,
}

impl RegisterRequest {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing_fields(&[
            ("name", &self.name),
            ("email", &self.email),
            ("mobile", &self.mobile),
            ("positionApplied", &self.position_applied),
            ("source", &self.source),
        ])
    }

    pub fn into_payload(self) -> Result<RegisterPayload, AppError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        Ok(RegisterPayload {
            name: take(self.name),
            email: take(self.email),
            mobile: take(self.mobile),
            position_applied: take(self.position_applied),
            source: take(self.source),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub proposed_date: Option<Value>,
    pub proposed_time: Option<Value>,
    pub online: Option<Value>,
}

impl ScheduleRequest {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing_fields(&[
            ("proposedDate", &self.proposed_date),
            ("proposedTime", &self.proposed_time),
            ("online", &self.online),
        ])
    }

    pub fn into_payload(self) -> Result<SchedulePayload, AppError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        Ok(SchedulePayload {
            proposed_date: take(self.proposed_date),
            proposed_time: take(self.proposed_time),
            online: take(self.online),
        })
    }
}

// Upstream bodies

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterPayload {
    pub name: Value,
    pub email: Value,
    pub mobile: Value,
    pub position_applied: Value,
    pub source: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchedulePayload {
    pub proposed_date: Value,
    pub proposed_time: Value,
    pub online: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadPayload {
    pub file: FilePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilePayload {
    pub mime: String,
    pub data: String,
}

impl UploadPayload {
    /// Wraps already-encoded resume contents the way the upstream expects them.
    pub fn resume(base64: &str) -> Self {
        Self {
            file: FilePayload {
                mime: RESUME_MIME.to_string(),
                data: format!("{}{}", BASE64_DATA_PREFIX, base64),
            },
        }
    }
}
