mod database;
mod product;
mod store;

use std::{ops::Deref, sync::Arc};

pub use database::Database;
pub use product::{Product, ProductPatch};
pub use store::*;

/// Shared handle to a [`Store`]; clones point at the same databases and selector.
#[derive(Debug, Clone)]
pub struct Backend(Arc<Store>);

impl Deref for Backend {
    type Target = Store;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self(Arc::new(Store::default()))
    }
}

impl Backend {
    pub fn new() -> Self {
        Backend::default()
    }
}
