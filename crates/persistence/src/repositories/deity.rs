//! Deity repository for database operations.

use domain::models::CreateDeityRequest;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::DeityEntity;
use crate::metrics::QueryTimer;

const DEITY_COLUMNS: &str = "id, name, description, sanskrit_name, day_of_week, color, gemstone, \
     metal, element, direction, image_url, is_active, created_at";

/// Optional field set for a partial deity update.
#[derive(Debug, Clone, Default)]
pub struct DeityUpdate<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub sanskrit_name: Option<&'a str>,
    pub day_of_week: Option<&'a str>,
    pub color: Option<&'a str>,
    pub gemstone: Option<&'a str>,
    pub metal: Option<&'a str>,
    pub element: Option<&'a str>,
    pub direction: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub is_active: Option<bool>,
}

/// Repository for deity-related database operations.
#[derive(Clone)]
pub struct DeityRepository {
    pool: PgPool,
}

impl DeityRepository {
    /// Creates a new DeityRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateDeityRequest) -> Result<DeityEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_deity");
        let result = Self::insert(&self.pool, request).await;
        timer.record();
        result
    }

    async fn insert<'e, E>(executor: E, request: &CreateDeityRequest) -> Result<DeityEntity, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query_as::<_, DeityEntity>(&format!(
            r#"
            INSERT INTO deities (name, description, sanskrit_name, day_of_week, color, gemstone,
                                 metal, element, direction, image_url, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {DEITY_COLUMNS}
            "#
        ))
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.sanskrit_name)
        .bind(&request.day_of_week)
        .bind(&request.color)
        .bind(&request.gemstone)
        .bind(&request.metal)
        .bind(&request.element)
        .bind(&request.direction)
        .bind(&request.image_url)
        .bind(request.is_active)
        .fetch_one(executor)
        .await
    }

    /// Inserts all deities in one transaction; nothing is written if any
    /// insert fails.
    pub async fn insert_many(
        &self,
        requests: &[CreateDeityRequest],
    ) -> Result<Vec<DeityEntity>, sqlx::Error> {
        let timer = QueryTimer::new("insert_many_deities");
        let mut tx = self.pool.begin().await?;

        let mut created = Vec::with_capacity(requests.len());
        for request in requests {
            created.push(Self::insert(&mut *tx, request).await?);
        }

        tx.commit().await?;
        timer.record();
        Ok(created)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<DeityEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_deity_by_id");
        let result = sqlx::query_as::<_, DeityEntity>(&format!(
            "SELECT {DEITY_COLUMNS} FROM deities WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All deities, active or not, ordered by name.
    pub async fn list(&self) -> Result<Vec<DeityEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_deities");
        let result = sqlx::query_as::<_, DeityEntity>(&format!(
            "SELECT {DEITY_COLUMNS} FROM deities ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Active deities ordered by name.
    pub async fn list_active(&self) -> Result<Vec<DeityEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_active_deities");
        let result = sqlx::query_as::<_, DeityEntity>(&format!(
            "SELECT {DEITY_COLUMNS} FROM deities WHERE is_active = true ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: Uuid,
        update: &DeityUpdate<'_>,
    ) -> Result<Option<DeityEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_deity");
        let result = sqlx::query_as::<_, DeityEntity>(&format!(
            r#"
            UPDATE deities
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                sanskrit_name = COALESCE($4, sanskrit_name),
                day_of_week = COALESCE($5, day_of_week),
                color = COALESCE($6, color),
                gemstone = COALESCE($7, gemstone),
                metal = COALESCE($8, metal),
                element = COALESCE($9, element),
                direction = COALESCE($10, direction),
                image_url = COALESCE($11, image_url),
                is_active = COALESCE($12, is_active)
            WHERE id = $1
            RETURNING {DEITY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(update.name)
        .bind(update.description)
        .bind(update.sanskrit_name)
        .bind(update.day_of_week)
        .bind(update.color)
        .bind(update.gemstone)
        .bind(update.metal)
        .bind(update.element)
        .bind(update.direction)
        .bind(update.image_url)
        .bind(update.is_active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_deity");
        let result = sqlx::query("DELETE FROM deities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        result.map(|r| r.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_deities");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM deities")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Names of active deities matching an already-escaped ILIKE pattern.
    pub async fn find_names_by_prefix(
        &self,
        pattern: &str,
        limit: i64,
    ) -> Result<Vec<String>, sqlx::Error> {
        let timer = QueryTimer::new("find_deity_names_by_prefix");
        let result = sqlx::query_scalar::<_, String>(
            r#"
            SELECT name
            FROM deities
            WHERE is_active = true AND name ILIKE $1
            ORDER BY name
            LIMIT $2
            "#,
        )
        .bind(pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Counts deities whose name is one of `names`.
    pub async fn count_named(&self, names: &[&str]) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_deities_named");
        let result = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM deities WHERE name = ANY($1)",
        )
        .bind(names)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
