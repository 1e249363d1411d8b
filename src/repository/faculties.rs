//! Faculties repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::faculty::Faculty};

#[derive(Clone)]
pub struct FacultiesRepository {
    pool: Pool<Postgres>,
}

impl FacultiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Faculty>> {
        let faculty = sqlx::query_as::<_, Faculty>(
            "SELECT id, name, address, building_name, latitude, longitude FROM faculties WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(faculty)
    }

    /// Faculties with both coordinates set
    pub async fn list_located(&self) -> AppResult<Vec<Faculty>> {
        let rows = sqlx::query_as::<_, Faculty>(
            r#"
            SELECT id, name, address, building_name, latitude, longitude
            FROM faculties
            WHERE latitude IS NOT NULL AND longitude IS NOT NULL
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
