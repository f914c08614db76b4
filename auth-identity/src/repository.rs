use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::{error::*, models::*};

pub trait AccountRepository: Send + Sync {
    /// Insert a new account; fails if the username is already taken
    fn create_account(&self, account: StaffAccount) -> Result<StaffAccount>;
    fn find_by_username(&self, username: &str) -> Option<StaffAccount>;
    fn list_accounts(&self) -> Vec<StaffAccount>;
}

/// In-memory account storage. Usernames are compared case-insensitively.
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<DashMap<String, StaffAccount>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(username: &str) -> String {
        username.to_ascii_lowercase()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn create_account(&self, account: StaffAccount) -> Result<StaffAccount> {
        match self.accounts.entry(Self::key(&account.username)) {
            Entry::Occupied(_) => Err(IdentityError::UsernameTaken(account.username)),
            Entry::Vacant(slot) => {
                slot.insert(account.clone());
                Ok(account)
            }
        }
    }

    fn find_by_username(&self, username: &str) -> Option<StaffAccount> {
        self.accounts
            .get(&Self::key(username))
            .map(|entry| entry.value().clone())
    }

    fn list_accounts(&self) -> Vec<StaffAccount> {
        let mut accounts: Vec<StaffAccount> =
            self.accounts.iter().map(|entry| entry.value().clone()).collect();
        accounts.sort_by_key(|a| Self::key(&a.username));
        accounts
    }
}
