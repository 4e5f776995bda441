use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Field name -> message, reported back to clients on 400
pub type ValidationErrors = HashMap<String, String>;

/// Stored content record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Media source locator handed to players
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewContent {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub src: Option<String>,
}

/// Update payload; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub src: Option<String>,
}

impl NewContent {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_text(&mut errors, "name", Some(&self.name));
        require_text(&mut errors, "type", Some(&self.kind));
        finish(errors)
    }

    pub fn into_content(self) -> Content {
        let now = Utc::now();
        Content {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            kind: self.kind.trim().to_string(),
            src: self.src,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ContentPatch {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.is_some() {
            require_text(&mut errors, "name", self.name.as_deref());
        }
        if self.kind.is_some() {
            require_text(&mut errors, "type", self.kind.as_deref());
        }
        finish(errors)
    }

    pub fn apply(self, content: &mut Content) {
        if let Some(name) = self.name {
            content.name = name.trim().to_string();
        }
        if let Some(kind) = self.kind {
            content.kind = kind.trim().to_string();
        }
        if let Some(src) = self.src {
            content.src = Some(src);
        }
        content.updated_at = Utc::now();
    }
}

fn require_text(errors: &mut ValidationErrors, field: &str, value: Option<&str>) {
    if value.map_or(true, |v| v.trim().is_empty()) {
        errors.insert(field.to_string(), "This field is required".to_string());
    }
}

fn finish(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
