//! Viewer roles.

use serde::{Deserialize, Serialize};

/// Permission level of whoever is using the hub.
///
/// Serialized as lowercase strings, which is also the form kept in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Read and submit testimonies only.
    #[default]
    Guest,
    /// May edit the hero message and the link list. Shown as "Joel", the
    /// person who keeps the hub's content; stores that saved `"joel"` still
    /// load.
    #[serde(alias = "joel")]
    Editor,
    /// Everything an editor can do, plus moderation of testimonies.
    Admin,
}

impl Role {
    /// All roles in the order they are offered in the sign-in form.
    pub const ALL: [Self; 3] = [Self::Guest, Self::Editor, Self::Admin];

    /// Whether this role may change the hero message and links.
    #[must_use]
    pub const fn can_edit_content(self) -> bool {
        matches!(self, Self::Editor | Self::Admin)
    }

    /// Whether this role may approve or reject pending testimonies.
    #[must_use]
    pub const fn can_moderate(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether a passcode is needed to switch to this role.
    #[must_use]
    pub const fn requires_passcode(self) -> bool {
        !matches!(self, Self::Guest)
    }

    /// Stable machine name (`guest`, `editor`, `admin`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Editor => "editor",
            Self::Admin => "admin",
        }
    }

    /// Capitalized name for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Guest => "Guest",
            Self::Editor => "Joel",
            Self::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Self::Guest),
            "editor" | "joel" => Ok(Self::Editor),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
