// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    SubEditor,
    Assistant,
    Author,
    VolumeEditor,
    Reader,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::SubEditor => "sub_editor",
            Role::Assistant => "assistant",
            Role::Author => "author",
            Role::VolumeEditor => "volume_editor",
            Role::Reader => "reader",
        }
    }

    /// Numeric role id stored with user groups.
    pub fn id(&self) -> i64 {
        match self {
            Role::Manager => 0x10,
            Role::SubEditor => 0x11,
            Role::Assistant => 0x1001,
            Role::Author => 0x10000,
            Role::VolumeEditor => 0x10001,
            Role::Reader => 0x100000,
        }
    }

    pub fn from_id(id: i64) -> DomainResult<Self> {
        match id {
            0x10 => Ok(Role::Manager),
            0x11 => Ok(Role::SubEditor),
            0x1001 => Ok(Role::Assistant),
            0x10000 => Ok(Role::Author),
            0x10001 => Ok(Role::VolumeEditor),
            0x100000 => Ok(Role::Reader),
            other => Err(DomainError::Validation(format!("unknown role id {other}"))),
        }
    }

    /// Roles whose members are credited in the author string.
    pub fn is_credited(&self) -> bool {
        matches!(self, Role::Author | Role::VolumeEditor)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(Role::Manager),
            "sub_editor" => Ok(Role::SubEditor),
            "assistant" => Ok(Role::Assistant),
            "author" => Ok(Role::Author),
            "volume_editor" => Ok(Role::VolumeEditor),
            "reader" => Ok(Role::Reader),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}
