use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::{AppError, LOAD_FAILED_MESSAGE, MISSING_ID_MESSAGE, render};
use crate::library::Library;
use crate::session::{get_cursor, store_cursor};
use crate::templates_structs::ViewerTemplate;
use crate::viewer::{NavAction, Viewer};

#[derive(Debug, Deserialize)]
pub struct ViewerQuery {
    pub id: Option<String>,
    pub overview: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NavForm {
    pub id: String,
    pub action: Option<String>,
    pub key: Option<String>,
    /// Set while the overview grid is showing.
    pub overview: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JumpForm {
    pub id: String,
    pub index: usize,
}

/// Viewer page location for a deck, optionally with the overview open.
pub fn viewer_location(deck_id: &str, overview_open: bool) -> String {
    let query = serde_urlencoded::to_string(&[("id", deck_id)]).unwrap_or_default();
    if overview_open {
        format!("/?{query}&overview=1")
    } else {
        format!("/?{query}")
    }
}

fn flag_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty() && v != "0")
}

fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// GET /: the viewer page for `?id=<deck>`.
pub async fn index(
    library: web::Data<Library>,
    session: Session,
    query: web::Query<ViewerQuery>,
) -> Result<HttpResponse, AppError> {
    let Some(id) = query.id.as_deref().filter(|id| !id.is_empty()) else {
        return render(ViewerTemplate::notice("", MISSING_ID_MESSAGE));
    };

    let loaded = match library.open(id).await {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("Failed to initialize viewer: {e}");
            return render(ViewerTemplate::notice(id, LOAD_FAILED_MESSAGE));
        }
    };

    let viewer = Viewer::restore(
        loaded.deck.clone(),
        loaded.templates.clone(),
        get_cursor(&session, id),
    );
    let overview_open = flag_set(query.overview.as_deref());
    render(ViewerTemplate::for_viewer(&loaded, &viewer, overview_open))
}

/// POST /nav: previous/next buttons, overview toggles and key presses.
pub async fn nav(
    library: web::Data<Library>,
    session: Session,
    form: web::Form<NavForm>,
) -> Result<HttpResponse, AppError> {
    let action = form
        .action
        .as_deref()
        .and_then(NavAction::from_name)
        .or_else(|| form.key.as_deref().and_then(NavAction::from_key));

    let was_open = flag_set(form.overview.as_deref());
    let Some(action) = action else {
        return Ok(see_other(viewer_location(&form.id, was_open)));
    };

    // A deck that fails to load is reported by the viewer page itself.
    if let Ok(loaded) = library.open(&form.id).await {
        let mut viewer = Viewer::restore(
            loaded.deck.clone(),
            loaded.templates.clone(),
            get_cursor(&session, &form.id),
        );
        let transition = action.apply(&mut viewer);
        log::debug!("{action:?} on {}: {transition:?}", form.id);
        store_cursor(&session, &form.id, viewer.cursor())?;
    }

    Ok(see_other(viewer_location(&form.id, action.overview_after(was_open))))
}

/// POST /jump: pick a slide from the overview grid.
pub async fn jump(
    library: web::Data<Library>,
    session: Session,
    form: web::Form<JumpForm>,
) -> Result<HttpResponse, AppError> {
    if let Ok(loaded) = library.open(&form.id).await {
        let mut viewer = Viewer::new(loaded.deck.clone(), loaded.templates.clone());
        viewer.jump_to(form.index).ok_or(AppError::NotFound)?;
        store_cursor(&session, &form.id, viewer.cursor())?;
    }

    Ok(see_other(viewer_location(&form.id, false)))
}
