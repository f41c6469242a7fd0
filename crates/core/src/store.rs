//! Repository port for accounts and the transaction ledger.
//!
//! The core never touches persistence directly; it reads and writes through
//! this trait. The in-memory implementation lives in the store crate, and a
//! durable multi-client implementation can be swapped in behind the same
//! contract.

use stridebank_shared::AppResult;
use stridebank_shared::types::UserId;

use crate::account::UserAccount;
use crate::ledger::TransactionRecord;

/// Durable map of accounts plus the append-only ledger, acting as one
/// serializable unit.
///
/// # Concurrency contract
///
/// [`Store::commit`] is a version-checked write: the stored account's
/// `version` must equal the submitted account's `version`, otherwise the
/// commit fails with `Conflict` and neither the account nor the ledger is
/// touched. On success the account write and the ledger append are observed
/// together or not at all by any other reader, and `version` is bumped.
pub trait Store: Send + Sync {
    /// Fetches one account. Fails with `NotFound` for an unknown ID.
    fn account(&self, id: UserId) -> AppResult<UserAccount>;

    /// Looks an account up by email.
    fn find_by_email(&self, email: &str) -> AppResult<Option<UserAccount>>;

    /// Returns all accounts.
    fn accounts(&self) -> AppResult<Vec<UserAccount>>;

    /// Inserts a freshly opened account. Fails with `Conflict` if the ID or
    /// email is already taken.
    fn insert_account(&self, account: UserAccount) -> AppResult<()>;

    /// Atomically inserts a freshly opened account together with its opening
    /// ledger record. Fails with `Conflict` if the ID or email is already
    /// taken, in which case neither the account nor the record is written.
    fn open(&self, account: UserAccount, record: TransactionRecord) -> AppResult<()>;

    /// Atomically writes an account and appends an optional ledger record.
    ///
    /// Returns the stored account with its bumped version.
    fn commit(
        &self,
        account: UserAccount,
        record: Option<TransactionRecord>,
    ) -> AppResult<UserAccount>;

    /// Returns the full ledger, newest first.
    fn entries(&self) -> AppResult<Vec<TransactionRecord>>;

    /// Returns one account's ledger records, newest first.
    fn entries_for(&self, user: UserId) -> AppResult<Vec<TransactionRecord>>;
}
