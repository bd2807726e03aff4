// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite persistence for the staffdesk roster.
//!
//! `Persistence` owns one Diesel `SqliteConnection` and implements the
//! `staffdesk::Store` contract on top of it:
//!
//! - `read` runs in a deferred transaction
//! - `write` runs in an immediate transaction, taking the database write
//!   lock before the first statement, so a handler's checks and its write
//!   are atomic with respect to other writers
//!
//! The unique index on `(user_id, department_id)` backs the assignment
//! invariant even if two processes share a file database.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` opens an isolated shared-cache in-memory
//! database per call, so tests never see each other's rows.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::prelude::*;
use diesel::SqliteConnection;
use staffdesk::{Repository, Store, StoreError};
use staffdesk_domain::{DepartmentId, User, UserId, validate_department_fields};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod repository;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use backend::PersistenceBackend;
use repository::DieselRepository;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Departments created by `seed_default_departments`, with descriptions.
pub const DEFAULT_DEPARTMENTS: [(&str, &str); 6] = [
    ("Nomina", "Departamento de nómina"),
    ("Facturacion", "Departamento de facturación"),
    ("ServicioCliente", "Servicio al cliente"),
    ("IT", "Departamento de tecnología"),
    ("RecursosHumanos", "Recursos humanos"),
    ("Contabilidad", "Departamento contable"),
];

/// The roster database.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:memdb_staffdesk_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Administrative path
    // ========================================================================

    /// Creates an active department.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidDepartment` if the fields fail
    /// validation, `PersistenceError::UniqueViolation` if the name is taken,
    /// or another error if the insert fails.
    pub fn create_department(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<DepartmentId, PersistenceError> {
        let name: &str = name.trim();
        validate_department_fields(name, description)
            .map_err(PersistenceError::InvalidDepartment)?;
        mutations::departments::insert_department(&mut self.conn, name, description)
    }

    /// Opens or closes a department. Closed departments disappear from the
    /// department listing and refuse new assignments.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the department does not exist.
    pub fn set_department_active(
        &mut self,
        department_id: DepartmentId,
        is_active: bool,
    ) -> Result<(), PersistenceError> {
        mutations::departments::set_department_active(&mut self.conn, department_id, is_active)
    }

    /// Inserts `DEFAULT_DEPARTMENTS` if the database has no departments yet.
    ///
    /// # Returns
    ///
    /// The number of departments inserted, zero if any already existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed transaction fails.
    pub fn seed_default_departments(&mut self) -> Result<usize, PersistenceError> {
        let inserted: usize = self.conn.immediate_transaction(|conn| {
            if queries::departments::count_departments(conn)? > 0 {
                return Ok::<usize, PersistenceError>(0);
            }
            for (name, description) in DEFAULT_DEPARTMENTS {
                mutations::departments::insert_department(conn, name, Some(description))?;
            }
            Ok(DEFAULT_DEPARTMENTS.len())
        })?;

        if inserted > 0 {
            info!(inserted, "Seeded default departments");
        }
        Ok(inserted)
    }

    /// Checks storage directly for an assignment row, whatever the state of
    /// the user or department.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn assignment_exists(
        &mut self,
        user_id: UserId,
        department_id: DepartmentId,
    ) -> Result<bool, PersistenceError> {
        queries::assignments::assignment_exists(&mut self.conn, user_id, department_id)
    }

    /// Reads a user row directly, including soft-deleted users.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_user(&mut self, user_id: UserId) -> Result<Option<User>, PersistenceError> {
        Ok(self.read(|repo| repo.find_user(user_id))?)
    }
}

impl Store for Persistence {
    fn read<T, F>(&mut self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T, StoreError>,
    {
        self.conn
            .transaction::<T, PersistenceError, _>(|conn| {
                let repo: &mut dyn Repository = &mut DieselRepository::new(conn);
                Ok(work(repo)?)
            })
            .map_err(StoreError::from)
    }

    fn write<T, F>(&mut self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T, StoreError>,
    {
        self.conn
            .immediate_transaction::<T, PersistenceError, _>(|conn| {
                let repo: &mut dyn Repository = &mut DieselRepository::new(conn);
                Ok(work(repo)?)
            })
            .map_err(StoreError::from)
    }
}
