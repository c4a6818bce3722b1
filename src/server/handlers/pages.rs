use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    Form,
};
use log::error;
use serde::{Deserialize, Serialize};

use crate::pages::{FragmentKind, PageError};
use crate::server::types::AppState;

/// Body of the create request
#[derive(Debug, Deserialize)]
pub struct CreatePageForm {
    #[serde(rename = "pageSlug")]
    pub page_slug: String,
}

/// Query string of the link update request
#[derive(Debug, Deserialize)]
pub struct LinkQuery {
    #[serde(rename = "novoLink")]
    pub new_link: Option<String>,
}

/// Response body of the slug listing
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlugList {
    pub slugs: Vec<String>,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let PageError::Io(ref err) = self {
            error!("Page file error: {}", err);
        }

        let message = match self {
            PageError::AlreadyExists(_) => "This page already exists.",
            PageError::NotFound(_) => "This page does not exist.",
            PageError::Io(_) => "Failed to read or write the page.",
        };
        (status, message).into_response()
    }
}

/// Create a page and send the client to it
pub async fn create_page(
    State(state): State<AppState>,
    Form(form): Form<CreatePageForm>,
) -> Result<Redirect, PageError> {
    state.repository.create(&form.page_slug)?;
    Ok(Redirect::to(&format!("/{}", urlencoding::encode(&form.page_slug))))
}

pub async fn set_button_text(
    State(state): State<AppState>,
    Path((slug, text)): Path<(String, String)>,
) -> Result<&'static str, PageError> {
    mutate(&state, &slug, FragmentKind::ButtonText, &text)
}

pub async fn set_body_text(
    State(state): State<AppState>,
    Path((slug, text)): Path<(String, String)>,
) -> Result<&'static str, PageError> {
    mutate(&state, &slug, FragmentKind::BodyText, &text)
}

pub async fn set_description(
    State(state): State<AppState>,
    Path((slug, text)): Path<(String, String)>,
) -> Result<&'static str, PageError> {
    mutate(&state, &slug, FragmentKind::DescriptionText, &text)
}

/// Point every page button at a new target
pub async fn set_link(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LinkQuery>,
) -> Response {
    let Some(link) = query.new_link else {
        return (StatusCode::BAD_REQUEST, "Missing novoLink query parameter.").into_response();
    };

    match mutate(&state, &slug, FragmentKind::LinkHref, &link) {
        Ok(message) => message.into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<&'static str, PageError> {
    state.repository.delete(&slug)?;
    Ok("Page deleted.")
}

pub async fn list_slugs(State(state): State<AppState>) -> Json<SlugList> {
    Json(SlugList {
        slugs: state.repository.list(),
    })
}

fn mutate(
    state: &AppState,
    slug: &str,
    kind: FragmentKind,
    value: &str,
) -> Result<&'static str, PageError> {
    state.repository.mutate_fragment(slug, kind, value)?;
    Ok(match kind {
        FragmentKind::ButtonText => "Button text updated.",
        FragmentKind::BodyText => "Text updated.",
        FragmentKind::DescriptionText => "Description updated.",
        FragmentKind::LinkHref => "Link updated.",
    })
}
