//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{activity, books, health, loans, members, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Ledger API",
        version = "1.0.0",
        description = "In-memory library ledger: books, members and loans"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        health::health_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        // Members
        members::list_members,
        members::get_member,
        members::create_member,
        // Loans
        loans::list_loans,
        loans::get_loan,
        loans::create_loan,
        loans::return_loan,
        // Dashboard
        stats::get_stats,
        activity::recent_activity,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::member::Member,
            crate::models::member::CreateMember,
            crate::models::loan::Loan,
            crate::models::loan::CreateLoan,
            loans::ReturnResponse,
            crate::models::stats::DashboardCounts,
            crate::models::activity::Activity,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalogue"),
        (name = "members", description = "Member registry"),
        (name = "loans", description = "Issuing and returning books"),
        (name = "stats", description = "Dashboard counters"),
        (name = "activity", description = "Recent activity feed")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
