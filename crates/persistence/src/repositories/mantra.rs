//! Mantra repository for database operations.

use domain::models::MantraFilters;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{
    MantraEntity, MantraWithRelationsEntity, PopularMantraEntity, RelatedMantraEntity,
};
use crate::metrics::QueryTimer;

const MANTRA_COLUMNS: &str = "id, title, text, category_id, deity_id, count_id, time_id, \
     kalam_id, range_id, view_count, created_at, updated_at";

const SELECT_WITH_RELATIONS: &str = r#"
    SELECT
        m.id, m.title, m.text, m.category_id, m.deity_id, m.count_id, m.time_id,
        m.kalam_id, m.range_id, m.view_count, m.created_at, m.updated_at,
        d.name AS deity_name, d.description AS deity_description,
        c.name AS category_name, c.description AS category_description,
        rc.count_value, rc.description AS count_description,
        rt.name AS time_name, rt.description AS time_description,
        k.name AS kalam_name, k.description AS kalam_description,
        k.is_auspicious AS kalam_is_auspicious,
        tr.start_time AS range_start_time, tr.end_time AS range_end_time,
        tr.description AS range_description
    FROM mantras m
    LEFT JOIN deities d ON d.id = m.deity_id
    LEFT JOIN categories c ON c.id = m.category_id
    LEFT JOIN recitation_counts rc ON rc.id = m.count_id
    LEFT JOIN recitation_times rt ON rt.id = m.time_id
    LEFT JOIN kalams k ON k.id = m.kalam_id
    LEFT JOIN time_ranges tr ON tr.id = m.range_id
"#;

/// Input for inserting a mantra.
#[derive(Debug, Clone)]
pub struct MantraInput<'a> {
    pub title: &'a str,
    pub text: &'a str,
    pub category_id: Option<Uuid>,
    pub deity_id: Option<Uuid>,
    pub count_id: Option<Uuid>,
    pub time_id: Option<Uuid>,
    pub kalam_id: Option<Uuid>,
    pub range_id: Option<Uuid>,
}

/// Partial mantra update.
///
/// For references, `None` keeps the stored value and `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct MantraUpdate<'a> {
    pub title: Option<&'a str>,
    pub text: Option<&'a str>,
    pub category_id: Option<Option<Uuid>>,
    pub deity_id: Option<Option<Uuid>>,
    pub count_id: Option<Option<Uuid>>,
    pub time_id: Option<Option<Uuid>>,
    pub kalam_id: Option<Option<Uuid>>,
    pub range_id: Option<Option<Uuid>>,
}

/// Repository for mantra-related database operations.
#[derive(Clone)]
pub struct MantraRepository {
    pool: PgPool,
}

impl MantraRepository {
    /// Creates a new MantraRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Filtered listing, optionally restricted by a full-text query.
    ///
    /// Most viewed first; newest first among equal view counts.
    pub async fn search(
        &self,
        filters: &MantraFilters,
        text: Option<&str>,
        limit: i64,
    ) -> Result<Vec<MantraWithRelationsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("search_mantras");
        let result = sqlx::query_as::<_, MantraWithRelationsEntity>(&format!(
            r#"
            {SELECT_WITH_RELATIONS}
            WHERE ($1::UUID IS NULL OR m.category_id = $1)
              AND ($2::UUID IS NULL OR m.deity_id = $2)
              AND ($3::UUID IS NULL OR m.time_id = $3)
              AND ($4::UUID IS NULL OR m.kalam_id = $4)
              AND ($5::TEXT IS NULL OR m.search_vector @@ websearch_to_tsquery('english', $5))
            ORDER BY m.view_count DESC, m.created_at DESC
            LIMIT $6
            "#
        ))
        .bind(filters.category_id)
        .bind(filters.deity_id)
        .bind(filters.time_id)
        .bind(filters.kalam_id)
        .bind(text)
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_with_relations(
        &self,
        id: Uuid,
    ) -> Result<Option<MantraWithRelationsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_mantra_with_relations");
        let result = sqlx::query_as::<_, MantraWithRelationsEntity>(&format!(
            "{SELECT_WITH_RELATIONS} WHERE m.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MantraEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_mantra_by_id");
        let result = sqlx::query_as::<_, MantraEntity>(&format!(
            "SELECT {MANTRA_COLUMNS} FROM mantras WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Mantras sharing the deity or the category, excluding `id` itself.
    pub async fn find_related(
        &self,
        id: Uuid,
        deity_id: Option<Uuid>,
        category_id: Option<Uuid>,
        limit: i64,
    ) -> Result<Vec<RelatedMantraEntity>, sqlx::Error> {
        if deity_id.is_none() && category_id.is_none() {
            return Ok(Vec::new());
        }

        let timer = QueryTimer::new("find_related_mantras");
        let result = sqlx::query_as::<_, RelatedMantraEntity>(
            r#"
            SELECT m.id, m.title, m.view_count, d.name AS deity_name, c.name AS category_name
            FROM mantras m
            LEFT JOIN deities d ON d.id = m.deity_id
            LEFT JOIN categories c ON c.id = m.category_id
            WHERE m.id <> $1
              AND (m.deity_id = $2 OR m.category_id = $3)
            ORDER BY m.view_count DESC, m.created_at DESC
            LIMIT $4
            "#,
        )
        .bind(id)
        .bind(deity_id)
        .bind(category_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn trending(
        &self,
        limit: i64,
    ) -> Result<Vec<MantraWithRelationsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("trending_mantras");
        let result = sqlx::query_as::<_, MantraWithRelationsEntity>(&format!(
            r#"
            {SELECT_WITH_RELATIONS}
            ORDER BY m.view_count DESC, m.created_at DESC
            LIMIT $1
            "#
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Newest first, for the admin table.
    pub async fn list_admin(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MantraWithRelationsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_admin_mantras");
        let result = sqlx::query_as::<_, MantraWithRelationsEntity>(&format!(
            r#"
            {SELECT_WITH_RELATIONS}
            ORDER BY m.created_at DESC, m.id
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Titles matching an already-escaped ILIKE pattern.
    pub async fn find_titles_by_prefix(
        &self,
        pattern: &str,
        limit: i64,
    ) -> Result<Vec<String>, sqlx::Error> {
        let timer = QueryTimer::new("find_mantra_titles_by_prefix");
        let result = sqlx::query_scalar::<_, String>(
            r#"
            SELECT title
            FROM mantras
            WHERE title ILIKE $1
            ORDER BY view_count DESC, title
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

    pub async fn create(&self, input: &MantraInput<'_>) -> Result<MantraEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_mantra");
        let result = sqlx::query_as::<_, MantraEntity>(&format!(
            r#"
            INSERT INTO mantras (title, text, category_id, deity_id, count_id, time_id, kalam_id, range_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {MANTRA_COLUMNS}
            "#
        ))
        .bind(input.title)
        .bind(input.text)
        .bind(input.category_id)
        .bind(input.deity_id)
        .bind(input.count_id)
        .bind(input.time_id)
        .bind(input.kalam_id)
        .bind(input.range_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: Uuid,
        update: &MantraUpdate<'_>,
    ) -> Result<Option<MantraEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_mantra");
        let result = sqlx::query_as::<_, MantraEntity>(&format!(
            r#"
            UPDATE mantras
            SET
                title = COALESCE($2, title),
                text = COALESCE($3, text),
                category_id = CASE WHEN $4 THEN $5 ELSE category_id END,
                deity_id = CASE WHEN $6 THEN $7 ELSE deity_id END,
                count_id = CASE WHEN $8 THEN $9 ELSE count_id END,
                time_id = CASE WHEN $10 THEN $11 ELSE time_id END,
                kalam_id = CASE WHEN $12 THEN $13 ELSE kalam_id END,
                range_id = CASE WHEN $14 THEN $15 ELSE range_id END
            WHERE id = $1
            RETURNING {MANTRA_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(update.title)
        .bind(update.text)
        .bind(update.category_id.is_some())
        .bind(update.category_id.flatten())
        .bind(update.deity_id.is_some())
        .bind(update.deity_id.flatten())
        .bind(update.count_id.is_some())
        .bind(update.count_id.flatten())
        .bind(update.time_id.is_some())
        .bind(update.time_id.flatten())
        .bind(update.kalam_id.is_some())
        .bind(update.kalam_id.flatten())
        .bind(update.range_id.is_some())
        .bind(update.range_id.flatten())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Deletes the mantra and, by cascade, its translations.
    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_mantra");
        let result = sqlx::query("DELETE FROM mantras WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        result.map(|r| r.rows_affected())
    }

    /// Atomically bumps the view counter. Returns the new count, or `None`
    /// when the mantra does not exist.
    pub async fn increment_view_count(&self, id: Uuid) -> Result<Option<i64>, sqlx::Error> {
        let timer = QueryTimer::new("increment_mantra_view_count");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE mantras
            SET view_count = view_count + 1
            WHERE id = $1
            RETURNING view_count
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_mantras");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM mantras")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn total_views(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("total_mantra_views");
        let result =
            sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(view_count), 0)::BIGINT FROM mantras")
                .fetch_one(&self.pool)
                .await;
        timer.record();
        result
    }

    pub async fn most_viewed(&self, limit: i64) -> Result<Vec<PopularMantraEntity>, sqlx::Error> {
        let timer = QueryTimer::new("most_viewed_mantras");
        let result = sqlx::query_as::<_, PopularMantraEntity>(
            r#"
            SELECT id, title, view_count
            FROM mantras
            ORDER BY view_count DESC, created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
