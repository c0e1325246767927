//! Member endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member, MemberQuery},
    AppState,
};

use super::ApiJson;

/// List members, optionally filtered by name or email
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    params(MemberQuery),
    responses(
        (status = 200, description = "Members in registration order", body = Vec<Member>)
    )
)]
pub async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<MemberQuery>,
) -> Json<Vec<Member>> {
    Json(state.services.members.search_members(&query).await)
}

/// Get member details by ID
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member details", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Member>> {
    let member = state.services.members.get_member(id).await?;
    Ok(Json(member))
}

/// Register a new member
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created", body = Member),
        (status = 400, description = "Missing name")
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateMember>,
) -> AppResult<(StatusCode, Json<Member>)> {
    request.validate()?;

    let created = state.services.members.create_member(request).await;
    Ok((StatusCode::CREATED, Json(created)))
}
