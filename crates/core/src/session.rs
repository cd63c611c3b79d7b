//! Session role model.
//!
//! The hub has exactly one current [`Role`]. Switching to a privileged role
//! needs that role's passcode; the passcodes are fixed per installation and
//! are a convenience lock, not access control.

use secrecy::{ExposeSecret, SecretString};

use crate::error::AuthError;
use crate::types::Role;

/// Default passcode for [`Role::Editor`].
pub const DEFAULT_EDITOR_PASSCODE: &str = "joel123";

/// Default passcode for [`Role::Admin`].
pub const DEFAULT_ADMIN_PASSCODE: &str = "admin123";

/// Per-role passcodes.
///
/// Implements `Debug` manually to redact the secrets.
#[derive(Clone)]
pub struct Passcodes {
    editor: SecretString,
    admin: SecretString,
}

impl Passcodes {
    /// Create a passcode set.
    #[must_use]
    pub fn new(editor: SecretString, admin: SecretString) -> Self {
        Self { editor, admin }
    }

    /// Whether `candidate` unlocks `role`. Guest needs no passcode.
    #[must_use]
    pub fn verify(&self, role: Role, candidate: &str) -> bool {
        match role {
            Role::Guest => true,
            Role::Editor => self.editor.expose_secret() == candidate,
            Role::Admin => self.admin.expose_secret() == candidate,
        }
    }
}

impl Default for Passcodes {
    fn default() -> Self {
        Self::new(
            SecretString::from(DEFAULT_EDITOR_PASSCODE),
            SecretString::from(DEFAULT_ADMIN_PASSCODE),
        )
    }
}

impl std::fmt::Debug for Passcodes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Passcodes")
            .field("editor", &"[REDACTED]")
            .field("admin", &"[REDACTED]")
            .finish()
    }
}

/// Proof that a role was unlocked, either as the current session role or by
/// presenting its passcode through [`Session::authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grant(Role);

impl Grant {
    /// The unlocked role.
    #[must_use]
    pub const fn role(self) -> Role {
        self.0
    }
}

/// The current viewer's role.
#[derive(Debug, Clone)]
pub struct Session {
    role: Role,
    passcodes: Passcodes,
}

impl Session {
    /// Create a session starting at `role`.
    #[must_use]
    pub fn new(role: Role, passcodes: Passcodes) -> Self {
        Self { role, passcodes }
    }

    /// The current role.
    #[must_use]
    pub const fn current_role(&self) -> Role {
        self.role
    }

    /// Grant for the current role.
    #[must_use]
    pub const fn grant(&self) -> Grant {
        Grant(self.role)
    }

    /// Switch to `candidate`.
    ///
    /// Guest always succeeds. Other roles succeed only on an exact passcode
    /// match; on failure the current role is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidPasscode`] if the passcode does not match.
    pub fn set_role(&mut self, candidate: Role, passcode: &str) -> Result<Role, AuthError> {
        let grant = self.authorize(candidate, passcode)?;
        self.role = grant.role();
        Ok(self.role)
    }

    /// Check a passcode without changing the current role.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidPasscode`] if the passcode does not match.
    pub fn authorize(&self, candidate: Role, passcode: &str) -> Result<Grant, AuthError> {
        if self.passcodes.verify(candidate, passcode) {
            Ok(Grant(candidate))
        } else {
            Err(AuthError::InvalidPasscode)
        }
    }

    /// Reset to guest.
    pub fn sign_out(&mut self) -> Role {
        self.role = Role::Guest;
        self.role
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn guest_session() -> Session {
        Session::new(Role::Guest, Passcodes::default())
    }

    #[test]
    fn test_admin_with_correct_passcode() {
        let mut session = guest_session();
        assert_eq!(session.set_role(Role::Admin, "admin123"), Ok(Role::Admin));
        assert_eq!(session.current_role(), Role::Admin);
    }

    #[test]
    fn test_wrong_passcode_keeps_role() {
        let mut session = guest_session();
        session.set_role(Role::Editor, "joel123").unwrap();

        assert_eq!(
            session.set_role(Role::Admin, "wrong"),
            Err(AuthError::InvalidPasscode)
        );
        assert_eq!(session.current_role(), Role::Editor);
    }

    #[test]
    fn test_passcodes_are_per_role() {
        let mut session = guest_session();
        assert!(session.set_role(Role::Admin, "joel123").is_err());
        assert!(session.set_role(Role::Editor, "admin123").is_err());
        assert_eq!(session.current_role(), Role::Guest);
    }

    #[test]
    fn test_passcode_match_is_exact() {
        let mut session = guest_session();
        assert!(session.set_role(Role::Admin, " admin123").is_err());
        assert!(session.set_role(Role::Admin, "ADMIN123").is_err());
    }

    #[test]
    fn test_guest_needs_no_passcode() {
        let mut session = Session::new(Role::Admin, Passcodes::default());
        assert_eq!(session.set_role(Role::Guest, "anything"), Ok(Role::Guest));
        assert_eq!(session.current_role(), Role::Guest);
    }

    #[test]
    fn test_sign_out() {
        let mut session = Session::new(Role::Editor, Passcodes::default());
        assert_eq!(session.sign_out(), Role::Guest);
        assert_eq!(session.sign_out(), Role::Guest);
    }

    #[test]
    fn test_authorize_does_not_switch() {
        let session = guest_session();
        let grant = session.authorize(Role::Admin, "admin123").unwrap();
        assert_eq!(grant.role(), Role::Admin);
        assert_eq!(session.current_role(), Role::Guest);
    }

    #[test]
    fn test_custom_passcodes() {
        let passcodes = Passcodes::new(SecretString::from("ed"), SecretString::from("ad"));
        let mut session = Session::new(Role::Guest, passcodes);
        assert!(session.set_role(Role::Admin, "admin123").is_err());
        assert_eq!(session.set_role(Role::Admin, "ad"), Ok(Role::Admin));
    }

    #[test]
    fn test_debug_redacts_passcodes() {
        let debug_output = format!("{:?}", Passcodes::default());
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("admin123"));
        assert!(!debug_output.contains("joel123"));
    }
}
