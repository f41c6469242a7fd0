//! In-memory implementation of the store port.
//!
//! Accounts live in a concurrent map keyed by ID with a secondary email
//! index; the ledger is a head-insert vector guarded by a lock. Commits are
//! serialized per account through the map's entry lock, which is held across
//! the ledger append so the account write and the record are observed
//! together or not at all.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::RwLock;

use stridebank_core::account::UserAccount;
use stridebank_core::ledger::TransactionRecord;
use stridebank_core::store::Store;
use stridebank_shared::types::UserId;
use stridebank_shared::{AppError, AppResult};

/// In-memory account map plus append-only ledger.
///
/// Suitable for the demo deployment and for tests; a durable multi-client
/// store can replace it behind the same [`Store`] contract.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: DashMap<UserId, UserAccount>,
    emails: DashMap<String, UserId>,
    ledger: RwLock<Vec<TransactionRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn ledger_read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Vec<TransactionRecord>>> {
        self.ledger
            .read()
            .map_err(|_| AppError::Internal("ledger lock poisoned".to_string()))
    }

    fn ledger_write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, Vec<TransactionRecord>>> {
        self.ledger
            .write()
            .map_err(|_| AppError::Internal("ledger lock poisoned".to_string()))
    }

    fn insert_new(
        &self,
        account: UserAccount,
        record: Option<TransactionRecord>,
    ) -> AppResult<()> {
        match self.emails.entry(account.email.to_lowercase()) {
            Entry::Occupied(_) => Err(AppError::Conflict(format!(
                "email {} already registered",
                account.email
            ))),
            Entry::Vacant(email_slot) => match self.accounts.entry(account.id) {
                Entry::Occupied(_) => {
                    Err(AppError::Conflict(format!("account {} already exists", account.id)))
                }
                Entry::Vacant(slot) => {
                    // Lock order: email index, account map, ledger. The
                    // ledger guard is acquired before any write so a failure
                    // leaves nothing inserted.
                    let mut ledger = self.ledger_write()?;
                    email_slot.insert(account.id);
                    slot.insert(account);
                    if let Some(record) = record {
                        ledger.insert(0, record);
                    }
                    Ok(())
                }
            },
        }
    }
}

impl Store for MemoryStore {
    fn account(&self, id: UserId) -> AppResult<UserAccount> {
        self.accounts
            .get(&id)
            .map(|a| a.clone())
            .ok_or_else(|| AppError::NotFound(format!("account {id}")))
    }

    fn find_by_email(&self, email: &str) -> AppResult<Option<UserAccount>> {
        let Some(id) = self.emails.get(&email.to_lowercase()).map(|e| *e) else {
            return Ok(None);
        };
        Ok(self.accounts.get(&id).map(|a| a.clone()))
    }

    fn accounts(&self) -> AppResult<Vec<UserAccount>> {
        Ok(self.accounts.iter().map(|a| a.clone()).collect())
    }

    fn insert_account(&self, account: UserAccount) -> AppResult<()> {
        self.insert_new(account, None)
    }

    fn open(&self, account: UserAccount, record: TransactionRecord) -> AppResult<()> {
        self.insert_new(account, Some(record))
    }

    fn commit(
        &self,
        account: UserAccount,
        record: Option<TransactionRecord>,
    ) -> AppResult<UserAccount> {
        // The entry guard serializes writers on this account and is held
        // across the ledger append, making both writes one atomic unit.
        let mut entry = self
            .accounts
            .get_mut(&account.id)
            .ok_or_else(|| AppError::NotFound(format!("account {}", account.id)))?;

        if entry.version != account.version {
            return Err(AppError::Conflict(format!(
                "account {} was modified concurrently (expected version {}, found {})",
                account.id, account.version, entry.version
            )));
        }

        let mut stored = account;
        stored.version += 1;

        if let Some(record) = record {
            self.ledger_write()?.insert(0, record);
        }

        *entry = stored.clone();
        Ok(stored)
    }

    fn entries(&self) -> AppResult<Vec<TransactionRecord>> {
        Ok(self.ledger_read()?.clone())
    }

    fn entries_for(&self, user: UserId) -> AppResult<Vec<TransactionRecord>> {
        Ok(self
            .ledger_read()?
            .iter()
            .filter(|r| r.user_id == user)
            .cloned()
            .collect())
    }
}
