//! Pet repository
//!
//! - list: LIMIT/OFFSET window, storage-defined order (no ORDER BY)
//! - create: INSERT then read back the generated rowid
//! - update/delete: rows_affected == 0 maps to NotFound

use sqlx::SqlitePool;

use crate::models::{ListWindow, Pet};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    fn pet_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "pet",
            id: id.to_string(),
        }
    }
}

/// Pet repository
pub struct PetRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PetRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List pets within the given window, in storage order.
    pub async fn list(&self, window: ListWindow) -> Result<Vec<Pet>, DbError> {
        let pets = sqlx::query_as::<_, Pet>("SELECT id, name FROM pets LIMIT ? OFFSET ?")
            .bind(window.limit())
            .bind(window.offset())
            .fetch_all(self.pool)
            .await?;
        Ok(pets)
    }

    /// Look up a pet by id.
    pub async fn get(&self, id: i64) -> Result<Pet, DbError> {
        sqlx::query_as::<_, Pet>("SELECT id, name FROM pets WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::pet_not_found(id))
    }

    /// Insert a pet and return it with the database-assigned id.
    pub async fn create(&self, name: &str) -> Result<Pet, DbError> {
        let result = sqlx::query("INSERT INTO pets (name) VALUES (?)")
            .bind(name)
            .execute(self.pool)
            .await?;

        Ok(Pet {
            id: result.last_insert_rowid(),
            name: name.to_owned(),
        })
    }

    /// Rename the pet with the given id.
    pub async fn update(&self, pet: &Pet) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE pets SET name = ? WHERE id = ?")
            .bind(&pet.name)
            .bind(pet.id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::pet_not_found(pet.id));
        }
        Ok(())
    }

    /// Delete the pet with the given id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM pets WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::pet_not_found(id));
        }
        Ok(())
    }
}
