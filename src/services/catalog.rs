//! Book catalogue service

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, CreateBook},
};

use super::SharedLedger;

#[derive(Clone)]
pub struct CatalogService {
    ledger: SharedLedger,
}

impl CatalogService {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    /// Search books. `q` matches title or author; `title` and `author`
    /// narrow to a single field. All given filters must match.
    pub async fn search_books(&self, query: &BookQuery) -> Vec<Book> {
        let ledger = self.ledger.read().await;
        let mut books = ledger.list_books(query.q.as_deref());

        if let Some(title) = query.title.as_deref() {
            let ids: Vec<i32> = ledger.search_books_by_title(title).iter().map(|b| b.id).collect();
            books.retain(|b| ids.contains(&b.id));
        }
        if let Some(author) = query.author.as_deref() {
            let ids: Vec<i32> = ledger.search_books_by_author(author).iter().map(|b| b.id).collect();
            books.retain(|b| ids.contains(&b.id));
        }

        books
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.ledger.read().await.get_book(id)
    }

    /// Add a book to the catalogue
    pub async fn create_book(&self, book: CreateBook) -> Book {
        let created = self
            .ledger
            .write()
            .await
            .add_book(&book.title, &book.author, &book.category);
        tracing::info!(book_id = created.id, title = %created.title, "Book added");
        created
    }
}
