//! Book operations on the ledger

use super::{needle, Ledger};
use crate::{
    error::{AppError, AppResult},
    models::Book,
};

impl Ledger {
    /// Add a book to the catalogue. It starts out available.
    pub fn add_book(&mut self, title: &str, author: &str, category: &str) -> Book {
        let book = self.insert_book(title, author, category);
        self.record(format!("Added new book: \"{}\" by {}", book.title, book.author));
        book
    }

    pub(super) fn insert_book(&mut self, title: &str, author: &str, category: &str) -> Book {
        let book = Book {
            id: self.next_book_id,
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            available: true,
        };
        self.next_book_id += 1;
        self.books.push(book.clone());
        book
    }

    /// Get book by ID
    pub fn get_book(&self, id: i32) -> AppResult<Book> {
        self.book(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Books in insertion order, optionally filtered by title or author
    pub fn list_books(&self, keyword: Option<&str>) -> Vec<Book> {
        self.filter_books(keyword, Book::matches)
    }

    pub fn search_books_by_title(&self, keyword: &str) -> Vec<Book> {
        self.filter_books(Some(keyword), Book::matches_title)
    }

    pub fn search_books_by_author(&self, keyword: &str) -> Vec<Book> {
        self.filter_books(Some(keyword), Book::matches_author)
    }

    fn filter_books(&self, keyword: Option<&str>, pred: fn(&Book, &str) -> bool) -> Vec<Book> {
        match needle(keyword) {
            Some(needle) => self
                .books
                .iter()
                .filter(|b| pred(b, needle.as_str()))
                .cloned()
                .collect(),
            None => self.books.clone(),
        }
    }

    pub(super) fn book(&self, id: i32) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub(super) fn book_mut(&mut self, id: i32) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }
}
