//! Issuing and returning books

use chrono::Duration;

use super::{Ledger, LOAN_PERIOD_DAYS};
use crate::{
    error::{AppError, AppResult},
    models::Loan,
};

impl Ledger {
    /// Lend a book to a member.
    ///
    /// Both records must exist and the book must be available. On success
    /// the book becomes unavailable and the loan is due `LOAN_PERIOD_DAYS`
    /// after today's local date.
    pub fn issue_book(&mut self, book_id: i32, member_id: i32) -> AppResult<Loan> {
        let book = self
            .book(book_id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))?;
        let member = self
            .member(member_id)
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", member_id)))?;

        if !book.available {
            return Err(AppError::AlreadyIssued(format!(
                "Book \"{}\" is already issued",
                book.title
            )));
        }

        let issue_date = self.clock.now().date_naive();
        let loan = Loan {
            id: self.next_loan_id,
            book_id: book.id,
            book_title: book.title.clone(),
            member_id: member.id,
            member_name: member.name.clone(),
            issue_date,
            due_date: issue_date + Duration::days(LOAN_PERIOD_DAYS),
            returned: false,
        };

        self.next_loan_id += 1;
        self.loans.push(loan.clone());
        if let Some(book) = self.book_mut(book_id) {
            book.available = false;
        }
        self.record(format!("Issued \"{}\" to {}", loan.book_title, loan.member_name));

        Ok(loan)
    }

    /// Close an active loan and make its book available again
    pub fn return_book(&mut self, loan_id: i32) -> AppResult<Loan> {
        let loan = self
            .loans
            .iter_mut()
            .find(|l| l.id == loan_id)
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", loan_id)))?;

        if loan.returned {
            return Err(AppError::AlreadyReturned(format!(
                "Loan {} is already returned",
                loan_id
            )));
        }

        loan.returned = true;
        let loan = loan.clone();

        // A dangling book id is tolerated.
        if let Some(book) = self.book_mut(loan.book_id) {
            book.available = true;
        }
        self.record(format!("Returned \"{}\" from {}", loan.book_title, loan.member_name));

        Ok(loan)
    }

    /// Get loan by ID
    pub fn get_loan(&self, id: i32) -> AppResult<Loan> {
        self.loans
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// Loans in issue order, optionally restricted to those not yet returned
    pub fn list_loans(&self, active_only: bool) -> Vec<Loan> {
        self.loans
            .iter()
            .filter(|l| !active_only || !l.returned)
            .cloned()
            .collect()
    }
}
