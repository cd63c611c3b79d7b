//! Application state.
//!
//! [`Hub`] owns the store and every component. All mutation goes through its
//! methods, which check the session role first and write the affected keys
//! back to the store afterwards.

use crate::error::HubError;
use crate::hero::HeroMessage;
use crate::links::LinkList;
use crate::moderation::StoryBoard;
use crate::seed;
use crate::session::{Grant, Passcodes, Session};
use crate::store::{self, KeyValueStore, keys};
use crate::types::{Link, LinkId, Role, Testimony, TestimonyId};

/// Testimony Hub state bound to a key-value store.
pub struct Hub {
    store: Box<dyn KeyValueStore>,
    session: Session,
    board: StoryBoard,
    links: LinkList,
    hero: HeroMessage,
    site_url: String,
}

impl std::fmt::Debug for Hub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hub")
            .field("session", &self.session)
            .field("board", &self.board)
            .field("links", &self.links)
            .field("hero", &self.hero)
            .field("site_url", &self.site_url)
            .finish_non_exhaustive()
    }
}

impl Hub {
    /// Load every key from `store`, seeding the ones that are missing or
    /// unreadable.
    pub fn open(store: impl KeyValueStore + 'static, passcodes: Passcodes) -> Self {
        let mut store: Box<dyn KeyValueStore> = Box::new(store);

        let role: Role = store::load_or_seed(&mut *store, keys::CURRENT_ROLE, Role::default);
        let hero = store::load_or_seed(&mut *store, keys::MAIN_MESSAGE, || {
            seed::HERO_MESSAGE.to_owned()
        });
        let links = store::load_or_seed(&mut *store, keys::RESOURCE_LINKS, seed::links);
        let published = store::load_or_seed(&mut *store, keys::STORIES_PUBLISHED, seed::published);
        let pending = store::load_or_seed(&mut *store, keys::STORIES_PENDING, Vec::new);
        let site_url = store::load_or_seed(&mut *store, keys::SITE_URL, String::new);

        tracing::debug!(
            %role,
            links = links.len(),
            published = published.len(),
            pending = pending.len(),
            "Hub loaded"
        );

        Self {
            store,
            session: Session::new(role, passcodes),
            board: StoryBoard::new(published, pending),
            links: LinkList::new(links),
            hero: HeroMessage::new(hero),
            site_url,
        }
    }

    /// Overwrite every key with seed content and sign out.
    pub fn reset(&mut self) {
        self.session.sign_out();
        self.board = StoryBoard::new(seed::published(), Vec::new());
        self.links = LinkList::new(seed::links());
        self.hero = HeroMessage::new(seed::HERO_MESSAGE.to_owned());
        self.site_url.clear();

        self.persist_role();
        self.persist_board();
        self.persist_links();
        store::persist(&mut *self.store, keys::MAIN_MESSAGE, self.hero.message());
        store::persist(&mut *self.store, keys::SITE_URL, &self.site_url);
        tracing::info!("Hub reset to seed content");
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    /// The current role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.session.current_role()
    }

    /// Switch roles.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Auth`] on a wrong passcode; the role is unchanged.
    pub fn set_role(&mut self, candidate: Role, passcode: &str) -> Result<Role, HubError> {
        match self.session.set_role(candidate, passcode) {
            Ok(role) => {
                self.persist_role();
                tracing::info!(%role, "Role changed");
                Ok(role)
            }
            Err(e) => {
                tracing::info!(candidate = %candidate, "Rejected passcode");
                Err(e.into())
            }
        }
    }

    /// Check a passcode without switching roles.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Auth`] on a wrong passcode.
    pub fn authorize(&self, candidate: Role, passcode: &str) -> Result<Grant, HubError> {
        Ok(self.session.authorize(candidate, passcode)?)
    }

    /// Reset to guest.
    pub fn sign_out(&mut self) -> Role {
        let role = self.session.sign_out();
        self.persist_role();
        tracing::info!("Signed out");
        role
    }

    // -------------------------------------------------------------------------
    // Testimonies
    // -------------------------------------------------------------------------

    /// Published testimonies, most recently approved first.
    #[must_use]
    pub fn published(&self) -> &[Testimony] {
        self.board.published()
    }

    /// Every pending testimony, regardless of role.
    #[must_use]
    pub fn pending(&self) -> &[Testimony] {
        self.board.pending()
    }

    /// Pending testimonies if the current role may moderate them.
    #[must_use]
    pub fn visible_pending(&self) -> Option<&[Testimony]> {
        self.role().can_moderate().then(|| self.board.pending())
    }

    /// Submit a testimony for moderation. Open to every role.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] if the text is blank.
    pub fn submit_testimony(&mut self, name: &str, text: &str) -> Result<Testimony, HubError> {
        let testimony = self.board.submit(name, text)?;
        store::persist(&mut *self.store, keys::STORIES_PENDING, self.board.pending());
        tracing::info!(id = %testimony.id, "Testimony submitted");
        Ok(testimony)
    }

    /// Approve a pending testimony as the current role.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Forbidden`] unless the role is admin, or
    /// [`HubError::Moderation`] if `id` is not pending.
    pub fn approve(&mut self, id: TestimonyId) -> Result<(), HubError> {
        self.approve_with(self.session.grant(), id)
    }

    /// Approve a pending testimony under an explicit grant.
    ///
    /// # Errors
    ///
    /// See [`Hub::approve`].
    pub fn approve_with(&mut self, grant: Grant, id: TestimonyId) -> Result<(), HubError> {
        require(grant.role(), Role::can_moderate, "approve testimonies")?;
        self.board.approve(id)?;
        self.persist_board();
        tracing::info!(%id, "Testimony approved");
        Ok(())
    }

    /// Reject a pending testimony as the current role.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Forbidden`] unless the role is admin, or
    /// [`HubError::Moderation`] if `id` is not pending.
    pub fn reject(&mut self, id: TestimonyId) -> Result<(), HubError> {
        self.reject_with(self.session.grant(), id)
    }

    /// Reject a pending testimony under an explicit grant.
    ///
    /// # Errors
    ///
    /// See [`Hub::reject`].
    pub fn reject_with(&mut self, grant: Grant, id: TestimonyId) -> Result<(), HubError> {
        require(grant.role(), Role::can_moderate, "reject testimonies")?;
        self.board.reject(id)?;
        store::persist(&mut *self.store, keys::STORIES_PENDING, self.board.pending());
        tracing::info!(%id, "Testimony rejected");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Links
    // -------------------------------------------------------------------------

    /// Links, newest first.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        self.links.links()
    }

    /// Add a link.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Forbidden`] for guests, or
    /// [`HubError::Validation`] if the title or url is blank.
    pub fn add_link(&mut self, title: &str, url: &str) -> Result<Link, HubError> {
        require(self.role(), Role::can_edit_content, "edit links")?;
        let link = self.links.add(title, url)?;
        self.persist_links();
        tracing::info!(id = %link.id, url = %link.url, "Link added");
        Ok(link)
    }

    /// Remove a link. Returns `false` if there was no such link.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Forbidden`] for guests.
    pub fn remove_link(&mut self, id: LinkId) -> Result<bool, HubError> {
        require(self.role(), Role::can_edit_content, "edit links")?;
        let removed = self.links.remove(id);
        if removed {
            self.persist_links();
            tracing::info!(%id, "Link removed");
        }
        Ok(removed)
    }

    // -------------------------------------------------------------------------
    // Hero message
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn hero_message(&self) -> &str {
        self.hero.message()
    }

    /// Replace the hero message; a blank draft keeps the current one.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Forbidden`] for guests.
    pub fn set_hero_message(&mut self, draft: &str) -> Result<&str, HubError> {
        require(self.role(), Role::can_edit_content, "edit the main message")?;
        self.hero.set(draft);
        store::persist(&mut *self.store, keys::MAIN_MESSAGE, self.hero.message());
        Ok(self.hero.message())
    }

    // -------------------------------------------------------------------------
    // Site URL
    // -------------------------------------------------------------------------

    /// Saved canonical site URL, if one is set.
    #[must_use]
    pub fn saved_site_url(&self) -> Option<&str> {
        let url = self.site_url.trim();
        (!url.is_empty()).then_some(url)
    }

    /// Save (or with `None`, clear) the canonical site URL.
    pub fn set_site_url(&mut self, url: Option<&str>) {
        self.site_url = url.map(str::trim).unwrap_or_default().to_owned();
        store::persist(&mut *self.store, keys::SITE_URL, &self.site_url);
        tracing::info!(site_url = %self.site_url, "Site URL saved");
    }

    /// Pick up a site URL saved by another process sharing the store.
    ///
    /// An unreadable value keeps the one already loaded.
    pub fn reload_site_url(&mut self) {
        if let Ok(Some(url)) = store::read::<String>(&*self.store, keys::SITE_URL) {
            self.site_url = url;
        }
    }

    /// URL the QR code should encode, falling back to `base_url`.
    #[must_use]
    pub fn qr_site_url<'a>(&'a self, base_url: &'a str) -> &'a str {
        crate::qr::site_url(&self.site_url, base_url)
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    fn persist_role(&mut self) {
        let role = self.session.current_role();
        store::persist(&mut *self.store, keys::CURRENT_ROLE, &role);
    }

    fn persist_board(&mut self) {
        store::persist(&mut *self.store, keys::STORIES_PENDING, self.board.pending());
        store::persist(&mut *self.store, keys::STORIES_PUBLISHED, self.board.published());
    }

    fn persist_links(&mut self) {
        store::persist(&mut *self.store, keys::RESOURCE_LINKS, self.links.links());
    }
}

fn require(role: Role, allowed: fn(Role) -> bool, action: &'static str) -> Result<(), HubError> {
    if allowed(role) {
        Ok(())
    } else {
        tracing::warn!(%role, action, "Forbidden");
        Err(HubError::Forbidden { role, action })
    }
}
