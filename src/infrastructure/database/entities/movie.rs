//! Movie entity

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Movie row - one record per catalog title
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    /// Unique movie ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name
    pub name: String,

    /// Release date
    pub date: NaiveDate,

    /// Aggregate rating score
    pub score: f64,

    /// Genre label
    pub genre: String,

    /// Free-text synopsis
    pub overview: String,

    /// Crew listing
    pub crew: String,

    /// Title in the original language
    pub orig_title: String,

    /// Release status (e.g. "Released", "Post Production")
    pub status: String,

    /// Original-language code
    pub orig_lang: String,

    /// Production budget
    pub budget: f64,

    /// Gross revenue
    pub revenue: f64,

    /// Production country label
    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
