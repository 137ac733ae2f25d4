use std::fmt;

/// The closed set of simulated databases a store can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Database {
    MySql,
    Oracle,
}

impl Database {
    /// Every supported database, in the order they are advertised.
    pub const ALL: [Database; 2] = [Database::MySql, Database::Oracle];

    pub fn name(self) -> &'static str {
        match self {
            Database::MySql => "MySQL",
            Database::Oracle => "Oracle",
        }
    }

    /// Case-insensitive lookup against the canonical names.
    pub fn lookup(name: &str) -> Option<Database> {
        Self::ALL
            .into_iter()
            .find(|db| db.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
