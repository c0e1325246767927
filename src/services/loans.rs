//! Loan management service

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, Loan, LoanQuery},
};

use super::SharedLedger;

#[derive(Clone)]
pub struct LoansService {
    ledger: SharedLedger,
}

impl LoansService {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    pub async fn list_loans(&self, query: &LoanQuery) -> Vec<Loan> {
        self.ledger.read().await.list_loans(query.active_only)
    }

    /// Get loan by ID
    pub async fn get_loan(&self, id: i32) -> AppResult<Loan> {
        self.ledger.read().await.get_loan(id)
    }

    /// Issue a book to a member
    pub async fn create_loan(&self, loan: CreateLoan) -> AppResult<Loan> {
        let result = self.ledger.write().await.issue_book(loan.book_id, loan.member_id);
        match &result {
            Ok(created) => tracing::info!(
                loan_id = created.id,
                book_id = created.book_id,
                member_id = created.member_id,
                due_date = %created.due_date,
                "Book issued"
            ),
            Err(e) => tracing::warn!(
                book_id = loan.book_id,
                member_id = loan.member_id,
                "Issue refused: {}",
                e
            ),
        }
        result
    }

    /// Return a borrowed book
    pub async fn return_loan(&self, loan_id: i32) -> AppResult<Loan> {
        let result = self.ledger.write().await.return_book(loan_id);
        match &result {
            Ok(loan) => tracing::info!(loan_id, book_id = loan.book_id, "Book returned"),
            Err(e) => tracing::warn!(loan_id, "Return refused: {}", e),
        }
        result
    }
}
