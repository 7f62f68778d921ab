use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::library::Library;
use crate::session::{get_cursor, store_cursor};
use crate::templates_structs::ApiDeckState;
use crate::viewer::{NavAction, Viewer};

async fn step(
    library: &Library,
    session: &Session,
    id: &str,
    action: NavAction,
) -> Result<HttpResponse, AppError> {
    let loaded = library.open(id).await?;
    let mut viewer = Viewer::restore(
        loaded.deck.clone(),
        loaded.templates.clone(),
        get_cursor(session, id),
    );
    let transition = action.apply(&mut viewer);
    store_cursor(session, id, viewer.cursor())?;
    Ok(HttpResponse::Ok().json(ApiDeckState::new(&loaded, &viewer, Some(transition))))
}

/// GET /api/v1/decks/{id} - Current slide, controls and overview for this session.
pub async fn read(
    library: web::Data<Library>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let loaded = library.open(&id).await?;
    let viewer = Viewer::restore(
        loaded.deck.clone(),
        loaded.templates.clone(),
        get_cursor(&session, &id),
    );
    Ok(HttpResponse::Ok().json(ApiDeckState::new(&loaded, &viewer, None)))
}

/// POST /api/v1/decks/{id}/advance - Reveal the next item or move to the next slide.
pub async fn advance(
    library: web::Data<Library>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    step(&library, &session, &path.into_inner(), NavAction::Advance).await
}

/// POST /api/v1/decks/{id}/retreat - Hide the last revealed item or move back a slide.
pub async fn retreat(
    library: web::Data<Library>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    step(&library, &session, &path.into_inner(), NavAction::Retreat).await
}

/// POST /api/v1/decks/{id}/jump/{index} - Go straight to a slide, nothing revealed.
pub async fn jump(
    library: web::Data<Library>,
    session: Session,
    path: web::Path<(String, usize)>,
) -> Result<HttpResponse, AppError> {
    let (id, index) = path.into_inner();
    let loaded = library.open(&id).await?;
    let mut viewer = Viewer::new(loaded.deck.clone(), loaded.templates.clone());
    let transition = viewer.jump_to(index).ok_or(AppError::NotFound)?;
    store_cursor(&session, &id, viewer.cursor())?;
    Ok(HttpResponse::Ok().json(ApiDeckState::new(&loaded, &viewer, Some(transition))))
}
