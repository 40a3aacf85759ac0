//! Interpolated versus parameterized SQL.
//!
//! [`UserDirectory`] wraps an in-memory SQLite database with a small `users`
//! table and exposes the same lookup twice: [`query_unsafe`] pastes the
//! caller's text into the statement, [`query_safe`] binds it as a parameter.
//! Feeding both `2 OR 1=1 --` shows the difference: the first returns every
//! row, the second returns none.
//!
//! [`query_unsafe`]: UserDirectory::query_unsafe
//! [`query_safe`]: UserDirectory::query_safe

use std::fmt;

use rusqlite::{params, Connection, Row};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    username TEXT NOT NULL,
    email TEXT
)";

const INSERT_USER: &str = "INSERT INTO users (id, username, email) VALUES (?1, ?2, ?3)";

const SELECT_BY_ID: &str = "SELECT username, email FROM users WHERE id = ?1";

const DEMO_USERS: [(i64, &str, &str); 3] = [
    (1, "theo_zel", "tbr@corp.com"),
    (2, "john_bri", "jb@corp.com"),
    (3, "data_base", "db@corp.com"),
];

/// Error returned by [`UserDirectory`] operations.
#[derive(Debug)]
pub struct QueryError {
    source: rusqlite::Error,
}

impl QueryError {
    /// Returns the underlying SQLite error.
    pub fn sqlite(&self) -> &rusqlite::Error {
        &self.source
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "database error: {}", self.source)
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<rusqlite::Error> for QueryError {
    fn from(source: rusqlite::Error) -> Self {
        Self { source }
    }
}

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Login name.
    pub username: String,
    /// Contact address, if any.
    pub email: Option<String>,
}

impl User {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            username: row.get(0)?,
            email: row.get(1)?,
        })
    }
}

/// An in-memory user table for demonstrating SQL injection.
///
/// # Examples
///
/// ```
/// use secure_patterns::UserDirectory;
///
/// let directory = UserDirectory::open_demo().unwrap();
///
/// let rows = directory.query_safe("3").unwrap();
/// assert_eq!(rows[0].username, "data_base");
///
/// let payload = "2 OR 1=1 --";
/// assert!(directory.query_safe(payload).unwrap().is_empty());
/// assert_eq!(directory.query_unsafe(payload).unwrap().len(), 3);
/// ```
#[derive(Debug)]
pub struct UserDirectory {
    conn: Connection,
}

impl UserDirectory {
    /// Opens an empty in-memory database with the `users` table.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if SQLite cannot open the database or create
    /// the table.
    pub fn open_in_memory() -> Result<Self, QueryError> {
        let conn = Connection::open_in_memory()?;
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    /// Opens an in-memory database seeded with the three demo users.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if opening or seeding fails.
    pub fn open_demo() -> Result<Self, QueryError> {
        let mut directory = Self::open_in_memory()?;
        directory.seed_demo_users()?;
        Ok(directory)
    }

    /// Inserts the demo users in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if an id is already taken.
    pub fn seed_demo_users(&mut self) -> Result<(), QueryError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(INSERT_USER)?;
            for (id, username, email) in DEMO_USERS {
                stmt.execute(params![id, username, email])?;
            }
        }
        tx.commit()?;
        tracing::info!(count = DEMO_USERS.len(), "seeded demo users");
        Ok(())
    }

    /// Inserts a single user.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the id is already taken.
    pub fn insert_user(
        &self,
        id: i64,
        username: &str,
        email: Option<&str>,
    ) -> Result<(), QueryError> {
        self.conn.execute(INSERT_USER, params![id, username, email])?;
        Ok(())
    }

    /// Returns the number of rows in `users`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the table is missing.
    pub fn count_users(&self) -> Result<usize, QueryError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Looks up users by splicing `id_text` into the SQL text.
    ///
    /// VULNERABLE (CWE-89): the input becomes part of the statement, so
    /// `2 OR 1=1 --` rewrites the `WHERE` clause. Kept for contrast with
    /// [`query_safe`](Self::query_safe).
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when the spliced statement is not valid SQL.
    pub fn query_unsafe(&self, id_text: &str) -> Result<Vec<User>, QueryError> {
        let sql = format!("SELECT username, email FROM users WHERE id = {}", id_text);
        tracing::warn!(sql = %sql.escape_debug(), "executing interpolated SQL");

        self.run(&sql, params![]).map_err(|err| {
            tracing::error!(error = %err, "interpolated query failed");
            err
        })
    }

    /// Looks up users with `id_text` bound as the `?1` parameter.
    ///
    /// The statement text is fixed; the input is only ever compared as a
    /// value, so an injection payload simply matches no rows.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if SQLite fails to run the statement.
    pub fn query_safe(&self, id_text: &str) -> Result<Vec<User>, QueryError> {
        tracing::debug!(id = %id_text.escape_debug(), "executing parameterized query");
        self.run(SELECT_BY_ID, params![id_text])
    }

    fn run(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<User>, QueryError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, User::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(rows = rows.len(), "query returned");
        Ok(rows)
    }

    /// Closes the connection.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if SQLite reports an error while closing.
    pub fn close(self) -> Result<(), QueryError> {
        self.conn.close().map_err(|(_, err)| QueryError::from(err))
    }
}
