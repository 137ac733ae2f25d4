use std::ops::{Deref, DerefMut};

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, info};

use super::{Database, Product, ProductPatch};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("unsupported database: {0}")]
    UnsupportedBackend(String),
    #[error("database not configured")]
    BackendNotConfigured,
}

/// Per-database product collections plus the selector that routes every data operation.
///
/// Selector and collections share one lock, so reading the selector and touching the
/// selected collection happen as a single step even when the store is shared.
#[derive(Debug, Default)]
pub struct Store {
    state: Mutex<StoreState>,
}

#[derive(Debug, Default)]
struct StoreState {
    current: Option<Database>,
    mysql: Vec<Product>,
    oracle: Vec<Product>,
}

impl StoreState {
    fn products(&self, db: Database) -> &Vec<Product> {
        match db {
            Database::MySql => &self.mysql,
            Database::Oracle => &self.oracle,
        }
    }

    fn products_mut(&mut self, db: Database) -> &mut Vec<Product> {
        match db {
            Database::MySql => &mut self.mysql,
            Database::Oracle => &mut self.oracle,
        }
    }
}

/// Read-only view of the selected database's products. Holds the store lock while alive.
#[derive(Debug)]
pub struct ProductsRef<'a>(MappedMutexGuard<'a, Vec<Product>>);

/// Mutable view of the selected database's products. Changes land directly in the store.
#[derive(Debug)]
pub struct ProductsMut<'a>(MappedMutexGuard<'a, Vec<Product>>);

impl Deref for ProductsRef<'_> {
    type Target = [Product];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for ProductsMut<'_> {
    type Target = Vec<Product>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ProductsMut<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    pub fn list_databases(&self) -> Vec<&'static str> {
        Database::ALL.iter().map(|db| db.name()).collect()
    }

    /// Selects the database later operations apply to. Collections are left untouched.
    pub fn configure(&self, name: &str) -> Result<Database, StoreError> {
        let db =
            Database::lookup(name).ok_or_else(|| StoreError::UnsupportedBackend(name.to_string()))?;
        let previous = self.state.lock().current.replace(db);
        info!("database switched from {:?} to {}", previous, db);
        Ok(db)
    }

    pub fn current(&self) -> Option<Database> {
        self.state.lock().current
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.with_current(|_, products| products.clear())
    }

    /// Appends as-is; no id generation and no uniqueness check.
    pub fn add(&self, product: Product) -> Result<(), StoreError> {
        self.with_current(|_, products| products.push(product))
    }

    /// Live view of the selected database. The store stays locked until the view is
    /// dropped; calling any other `Store` method on this thread before then deadlocks.
    pub fn list(&self) -> Result<ProductsRef<'_>, StoreError> {
        self.lock_current().map(ProductsRef)
    }

    /// Like [`Store::list`], but writable. Same locking rule: drop the view before
    /// calling back into the store.
    pub fn list_mut(&self) -> Result<ProductsMut<'_>, StoreError> {
        self.lock_current().map(ProductsMut)
    }

    /// Overwrites name and price of every product with `id`. Returns how many matched.
    pub fn update(&self, id: i64, patch: &ProductPatch) -> Result<usize, StoreError> {
        self.with_current(|_, products| {
            products
                .iter_mut()
                .filter(|p| p.id == id)
                .fold(0, |n, p| {
                    p.apply(patch);
                    n + 1
                })
        })
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        self.with_current(|_, products| products.iter().find(|p| p.id == id).cloned())
    }

    pub fn delete_all(&self) -> Result<(), StoreError> {
        self.with_current(|db, products| {
            debug!("deleting {} products from {}", products.len(), db);
            products.clear()
        })
    }

    pub fn delete_by_id(&self, id: i64) -> Result<usize, StoreError> {
        self.remove_where(|p| p.id == id)
    }

    /// Drops every product missing a name or a price.
    pub fn purge_incomplete(&self) -> Result<usize, StoreError> {
        self.remove_where(|p| !p.is_complete())
    }

    /// Copy of one database's products, independent of the selector.
    pub fn snapshot(&self, db: Database) -> Vec<Product> {
        self.state.lock().products(db).clone()
    }

    fn with_current<R>(
        &self,
        f: impl FnOnce(Database, &mut Vec<Product>) -> R,
    ) -> Result<R, StoreError> {
        let mut state = self.state.lock();
        let db = state.current.ok_or(StoreError::BackendNotConfigured)?;
        Ok(f(db, state.products_mut(db)))
    }

    fn lock_current(&self) -> Result<MappedMutexGuard<'_, Vec<Product>>, StoreError> {
        let state = self.state.lock();
        let db = state.current.ok_or(StoreError::BackendNotConfigured)?;
        Ok(MutexGuard::map(state, |state| state.products_mut(db)))
    }

    fn remove_where(&self, pred: impl Fn(&Product) -> bool) -> Result<usize, StoreError> {
        self.with_current(|db, products| {
            let before = products.len();
            products.retain(|p| !pred(p));
            let removed = before - products.len();
            debug!("removed {} products from {}", removed, db);
            removed
        })
    }
}
