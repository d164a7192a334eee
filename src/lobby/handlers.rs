//! Handlers for the lobby-facing pages: the index (lobby entry) page, lobby
//! creation and the lobby page itself.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::handler::Handler;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::{Deserialize, Serialize};
use tower::util::BoxCloneSyncService;
use uuid::Uuid;

use crate::pages::{BasePageConfig, PageContext};
use crate::routing::LobbyHandlers;
use crate::translations::Translation;

const MAX_LOBBY_NAME_LENGTH: usize = 30;

/// Bundle the lobby page handlers for injection into the route composer.
pub fn lobby_handlers(pages: Arc<PageContext>) -> LobbyHandlers {
    LobbyHandlers {
        index_page: BoxCloneSyncService::new(index_page.with_state(pages.clone())),
        enter_lobby: BoxCloneSyncService::new(ssr_enter_lobby.with_state(pages.clone())),
        create_lobby: BoxCloneSyncService::new(ssr_create_lobby.with_state(pages)),
    }
}

#[derive(Serialize)]
struct IndexPageData<'a> {
    #[serde(flatten)]
    base: &'a BasePageConfig,
    translation: &'a Translation,
    locale: &'a str,
}

#[derive(Serialize)]
struct LobbyPageData<'a> {
    #[serde(flatten)]
    base: &'a BasePageConfig,
    translation: &'a Translation,
    locale: &'a str,
    lobby_id: &'a str,
}

/// Form body of a lobby creation request.
#[derive(Debug, Deserialize)]
pub struct CreateLobbyRequest {
    #[serde(default)]
    pub lobby_name: String,
}

async fn index_page(State(pages): State<Arc<PageContext>>) -> Response {
    let data = IndexPageData {
        base: &pages.base,
        translation: &pages.translation,
        locale: &pages.locale,
    };
    render_page(&pages, "index", &data)
}

async fn ssr_create_lobby(
    State(pages): State<Arc<PageContext>>,
    Form(request): Form<CreateLobbyRequest>,
) -> Response {
    let name = request.lobby_name.trim();
    if name.is_empty() || name.chars().count() > MAX_LOBBY_NAME_LENGTH {
        return pages
            .user_facing_error("the lobby name must be between 1 and 30 characters")
            .into_response();
    }

    let lobby_id = Uuid::new_v4();
    tracing::info!(%lobby_id, lobby_name = %name, "lobby created");

    Redirect::to(&format!(
        "{}/ssrEnterLobby/{}",
        pages.base.root_path, lobby_id
    ))
    .into_response()
}

async fn ssr_enter_lobby(
    State(pages): State<Arc<PageContext>>,
    Path(lobby_id): Path<String>,
) -> Response {
    if Uuid::parse_str(&lobby_id).is_err() {
        return pages
            .user_facing_error("the entered lobby id is invalid")
            .into_response();
    }

    let data = LobbyPageData {
        base: &pages.base,
        translation: &pages.translation,
        locale: &pages.locale,
        lobby_id: &lobby_id,
    };
    render_page(&pages, "lobby", &data)
}

fn render_page(pages: &PageContext, name: &str, data: &impl Serialize) -> Response {
    match pages.templates.render(name, data) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(template = name, error = %err, "page rendering failed");
            pages
                .user_facing_error("the page could not be rendered")
                .into_response()
        }
    }
}
