use std::collections::HashSet;

use crate::aggregate::{self, DashboardSnapshot};
use crate::domain::{
    allocate_id, EntityId, Mirror, NewExpense, NewSubscription, NewUser, RecurringExpense,
    Subscription, User,
};
use crate::errors::{EntityKind, SyncError};
use crate::remote::{probe, RemoteStore};
use crate::store::{LocalStore, SessionStore};

use super::Mode;

/// Routes each create/delete to the remote API or the session store, keeps
/// the in-memory mirror consistent with whichever is authoritative, and
/// degrades to local handling when the remote fails mid-session.
///
/// Mutations never surface an error to the caller: remote failures are
/// absorbed by the fallback policy and session-store write failures are
/// logged and tolerated.
pub struct Orchestrator<R: RemoteStore, S: SessionStore> {
    remote: R,
    local: LocalStore<S>,
    mirror: Mirror,
    mode: Mode,
}

impl<R: RemoteStore, S: SessionStore> Orchestrator<R, S> {
    /// Probes the remote exactly once, fixes the session mode, and loads
    /// the initial mirror. Runs before first render.
    pub fn start(remote: R, session: S) -> Self {
        let mode = if probe(&remote) {
            Mode::Remote
        } else {
            Mode::Local
        };
        let mut orchestrator = Self {
            remote,
            local: LocalStore::new(session),
            mirror: Mirror::default(),
            mode,
        };
        orchestrator.load_initial();
        orchestrator
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn mirror(&self) -> &Mirror {
        &self.mirror
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn session(&self) -> &S {
        self.local.session()
    }

    /// View for the presentation sink: the three sequences plus the
    /// aggregate values, recomputed from the current mirror.
    pub fn snapshot(&self) -> DashboardSnapshot<'_> {
        aggregate::snapshot(&self.mirror)
    }

    /// Rebuilds the mirror wholesale. In remote mode a failure of any of
    /// the three list calls abandons the remote snapshot entirely and
    /// reads the whole mirror from the session store instead; the mode
    /// flag is left untouched.
    fn load_initial(&mut self) {
        if self.mode.is_remote() {
            match self.fetch_remote_mirror() {
                Ok(mirror) => {
                    self.mirror = mirror;
                    return;
                }
                Err(err) => {
                    tracing::warn!(%err, "initial remote load failed, reading session store");
                }
            }
        }
        self.mirror = self.local.load_all();
    }

    fn fetch_remote_mirror(&self) -> crate::errors::Result<Mirror> {
        Ok(Mirror {
            users: self.remote.list_users()?,
            subscriptions: self.remote.list_subscriptions()?,
            expenses: self.remote.list_expenses()?,
        })
    }

    pub fn create_user(&mut self, data: NewUser) -> User {
        if self.mode.is_remote() {
            match self.remote.create_user(&data) {
                Ok(user) => {
                    self.mirror.users.push(user.clone());
                    return user;
                }
                Err(err) => self.degrade(EntityKind::User, err),
            }
        }
        let id = self.free_id(self.mirror.users.iter().map(|u| u.id));
        let user = User::synthesized(id, data);
        self.mirror.users.push(user.clone());
        self.persist();
        user
    }

    pub fn create_subscription(&mut self, data: NewSubscription) -> Subscription {
        if self.mode.is_remote() {
            match self.remote.create_subscription(&data) {
                Ok(subscription) => {
                    self.mirror.subscriptions.push(subscription.clone());
                    return subscription;
                }
                Err(err) => self.degrade(EntityKind::Subscription, err),
            }
        }
        let id = self.free_id(self.mirror.subscriptions.iter().map(|s| s.id));
        let subscription = Subscription::synthesized(id, data);
        self.mirror.subscriptions.push(subscription.clone());
        self.persist();
        subscription
    }

    pub fn create_expense(&mut self, data: NewExpense) -> RecurringExpense {
        if self.mode.is_remote() {
            match self.remote.create_expense(&data) {
                Ok(expense) => {
                    self.mirror.expenses.push(expense.clone());
                    return expense;
                }
                Err(err) => self.degrade(EntityKind::Expense, err),
            }
        }
        let id = self.free_id(self.mirror.expenses.iter().map(|e| e.id));
        let expense = RecurringExpense::synthesized(id, data);
        self.mirror.expenses.push(expense.clone());
        self.persist();
        expense
    }

    /// Deleting a user leaves orphaned subscription/expense references;
    /// they resolve to the "User not found" sentinel at render time.
    ///
    /// Confirmation is the caller's concern; no gating happens here.
    pub fn delete_user(&mut self, id: EntityId) {
        if self.mode.is_remote() {
            match self.remote.delete_user(id) {
                Ok(()) => {
                    self.mirror.users.retain(|u| u.id != id);
                    return;
                }
                // Delete failures are tolerated without a mode change;
                // only create failures flip the session to local.
                Err(err) => {
                    tracing::warn!(%err, id, "remote delete failed, removing locally");
                }
            }
        }
        self.mirror.users.retain(|u| u.id != id);
        self.persist();
    }

    pub fn delete_subscription(&mut self, id: EntityId) {
        if self.mode.is_remote() {
            match self.remote.delete_subscription(id) {
                Ok(()) => {
                    self.mirror.subscriptions.retain(|s| s.id != id);
                    return;
                }
                Err(err) => {
                    tracing::warn!(%err, id, "remote delete failed, removing locally");
                }
            }
        }
        self.mirror.subscriptions.retain(|s| s.id != id);
        self.persist();
    }

    pub fn delete_expense(&mut self, id: EntityId) {
        if self.mode.is_remote() {
            match self.remote.delete_expense(id) {
                Ok(()) => {
                    self.mirror.expenses.retain(|e| e.id != id);
                    return;
                }
                Err(err) => {
                    tracing::warn!(%err, id, "remote delete failed, removing locally");
                }
            }
        }
        self.mirror.expenses.retain(|e| e.id != id);
        self.persist();
    }

    fn free_id(&self, existing: impl Iterator<Item = EntityId>) -> EntityId {
        let taken: HashSet<EntityId> = existing.collect();
        allocate_id(&taken)
    }

    /// One-way REMOTE -> LOCAL transition; the current operation completes
    /// against the session store and all later ones stay local.
    fn degrade(&mut self, kind: EntityKind, err: SyncError) {
        tracing::warn!(%err, %kind, "remote create failed, switching to local mode");
        self.mode = Mode::Local;
    }

    fn persist(&mut self) {
        if let Err(err) = self.local.save_all(&self.mirror) {
            tracing::warn!(%err, "failed to persist mirror to session store");
        }
    }
}
