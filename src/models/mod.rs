//! Data models for the library ledger

pub mod activity;
pub mod book;
pub mod loan;
pub mod member;
pub mod stats;

use validator::ValidationError;

// Re-export commonly used types
pub use activity::Activity;
pub use book::{Book, BookQuery, CreateBook};
pub use loan::{CreateLoan, Loan, LoanQuery};
pub use member::{CreateMember, Member, MemberQuery};
pub use stats::DashboardCounts;

/// Presence check for required text fields: whitespace alone does not count
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
