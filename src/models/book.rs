//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A catalogued book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub category: String,
    /// False while an active loan references this book
    pub available: bool,
}

impl Book {
    /// Case-insensitive match of `needle` (already lowercased) against title or author
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.matches_title(needle) || self.matches_author(needle)
    }

    pub(crate) fn matches_title(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }

    pub(crate) fn matches_author(&self, needle: &str) -> bool {
        self.author.to_lowercase().contains(needle)
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(custom(function = "crate::models::not_blank", message = "Title is required"))]
    pub title: String,
    #[validate(custom(function = "crate::models::not_blank", message = "Author is required"))]
    pub author: String,
    #[validate(custom(function = "crate::models::not_blank", message = "Category is required"))]
    pub category: String,
}

/// Book search query
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Keyword matched against title or author
    pub q: Option<String>,
    /// Keyword matched against title only
    pub title: Option<String>,
    /// Keyword matched against author only
    pub author: Option<String>,
}
