//! SeaORM implementation of MovieRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};

use crate::domain::{DomainError, DomainResult, Movie, MovieRepository};
use crate::infrastructure::database::entities::movie;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

fn entity_to_domain(m: movie::Model) -> Movie {
    Movie {
        id: m.id,
        name: m.name,
        date: m.date,
        score: m.score,
        genre: m.genre,
        overview: m.overview,
        crew: m.crew,
        orig_title: m.orig_title,
        status: m.status,
        orig_lang: m.orig_lang,
        budget: m.budget,
        revenue: m.revenue,
        country: m.country,
    }
}

// ── SeaOrmMovieRepository ───────────────────────────────────────

pub struct SeaOrmMovieRepository {
    db: DatabaseConnection,
}

impl SeaOrmMovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for SeaOrmMovieRepository {
    async fn count_all(&self) -> DomainResult<u64> {
        movie::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn fetch_page(&self, offset: u64, limit: u64) -> DomainResult<Vec<Movie>> {
        let models = movie::Entity::find()
            .order_by_asc(movie::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn fetch_by_id(&self, id: i32) -> DomainResult<Option<Movie>> {
        let model = movie::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }
}
