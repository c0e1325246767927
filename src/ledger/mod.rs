//! In-memory library ledger
//!
//! The ledger owns every book, member and loan plus the recent activity
//! feed. All operations are synchronous and run to completion; callers that
//! share a ledger across tasks go through [`crate::services`], which wraps it
//! in a lock.

mod activity;
mod books;
mod loans;
mod members;

use chrono::{DateTime, Local};

use crate::models::{Book, DashboardCounts, Loan, Member};

pub use activity::ActivityLog;

/// Number of days between issue date and due date
pub const LOAN_PERIOD_DAYS: i64 = 14;

/// Maximum number of entries kept in the activity feed
pub const ACTIVITY_LOG_CAPACITY: usize = 5;

/// Source of the current local time
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

pub struct Ledger {
    books: Vec<Book>,
    members: Vec<Member>,
    loans: Vec<Loan>,
    activity: ActivityLog,
    next_book_id: i32,
    next_member_id: i32,
    next_loan_id: i32,
    clock: Box<dyn Clock>,
}

impl Ledger {
    /// Create an empty ledger reading time from `clock`
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            books: Vec::new(),
            members: Vec::new(),
            loans: Vec::new(),
            activity: ActivityLog::new(ACTIVITY_LOG_CAPACITY),
            next_book_id: 1,
            next_member_id: 1,
            next_loan_id: 1,
            clock: Box::new(clock),
        }
    }

    /// Create a ledger holding the sample catalogue.
    ///
    /// Sample records consume ids but leave the activity feed empty.
    pub fn seeded(clock: impl Clock + 'static) -> Self {
        let mut ledger = Self::new(clock);

        ledger.insert_book("The Alchemist", "Paulo Coelho", "Fiction");
        ledger.insert_book("Clean Code", "Robert C. Martin", "Programming");
        ledger.insert_book("Introduction to Algorithms", "Cormen", "Education");

        ledger.insert_member("Rahul", "rahul@example.com", "9876543210");
        ledger.insert_member("Priya", "priya@example.com", "9123456780");

        ledger
    }

    /// Dashboard counters computed from current state
    pub fn dashboard_counts(&self) -> DashboardCounts {
        DashboardCounts {
            total_books: self.books.len(),
            total_members: self.members.len(),
            active_loans: self.loans.iter().filter(|l| !l.returned).count(),
            available_books: self.books.iter().filter(|b| b.available).count(),
        }
    }

    fn record(&mut self, message: String) {
        let now = self.clock.now();
        self.activity.push(message, now);
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("books", &self.books.len())
            .field("members", &self.members.len())
            .field("loans", &self.loans.len())
            .finish_non_exhaustive()
    }
}

/// Lowercased search needle, or `None` when the keyword is empty
fn needle(keyword: Option<&str>) -> Option<String> {
    keyword.filter(|k| !k.is_empty()).map(str::to_lowercase)
}
