use crate::errors::AppError;
use crate::models::{Catalog, MessageBody, ParticipantForm, SignupQuery};
use crate::state::AppState;
use crate::storage::persist_catalog;
use crate::ui::render_index;
use crate::view::ViewModel;
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use tracing::info;

const INDEX_PATH: &str = "/static/index.html";

pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let catalog = state.catalog.lock().await;
    Html(render_index(&ViewModel::from_catalog(&catalog)))
}

pub async fn get_activities(State(state): State<AppState>) -> Json<Catalog> {
    let catalog = state.catalog.lock().await;
    Json(catalog.clone())
}

pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
) -> Result<Json<MessageBody>, AppError> {
    let message = add_participant(&state, &activity_name, &query.email).await?;
    Ok(Json(MessageBody { message }))
}

pub async fn remove_participant(
    State(state): State<AppState>,
    Path((activity_name, email)): Path<(String, String)>,
) -> Result<Json<MessageBody>, AppError> {
    let message = drop_participant(&state, &activity_name, &email).await?;
    Ok(Json(MessageBody { message }))
}

pub async fn signup_form(
    State(state): State<AppState>,
    Form(form): Form<ParticipantForm>,
) -> Result<Redirect, AppError> {
    let email = form.email.trim();
    if email.is_empty() || form.activity.is_empty() {
        return Err(AppError::bad_request("Please provide an email and select an activity"));
    }
    add_participant(&state, &form.activity, email).await?;
    Ok(Redirect::to(INDEX_PATH))
}

pub async fn remove_form(
    State(state): State<AppState>,
    Form(form): Form<ParticipantForm>,
) -> Result<Redirect, AppError> {
    drop_participant(&state, &form.activity, &form.email).await?;
    Ok(Redirect::to(INDEX_PATH))
}

async fn add_participant(
    state: &AppState,
    activity_name: &str,
    email: &str,
) -> Result<String, AppError> {
    commit(state, |catalog| {
        let activity = catalog
            .get_mut(activity_name)
            .ok_or_else(|| AppError::not_found("Activity not found"))?;
        if activity.participants.iter().any(|p| p == email) {
            return Err(AppError::bad_request("Student is already signed up"));
        }
        activity.participants.push(email.to_string());
        Ok(())
    })
    .await?;

    info!(activity = %activity_name, %email, "signup");
    Ok(format!("Signed up {email} for {activity_name}"))
}

async fn drop_participant(
    state: &AppState,
    activity_name: &str,
    email: &str,
) -> Result<String, AppError> {
    commit(state, |catalog| {
        let activity = catalog
            .get_mut(activity_name)
            .ok_or_else(|| AppError::not_found("Activity not found"))?;
        let index = activity
            .participants
            .iter()
            .position(|participant| participant == email)
            .ok_or_else(|| AppError::not_found("Student is not signed up for this activity"))?;
        activity.participants.remove(index);
        Ok(())
    })
    .await?;

    info!(activity = %activity_name, %email, "participant removed");
    Ok(format!("Removed {email} from {activity_name}"))
}

/// Applies `change` to a copy of the catalog and installs it only once it has
/// been written out, so a failed write leaves the served catalog untouched.
async fn commit(
    state: &AppState,
    change: impl FnOnce(&mut Catalog) -> Result<(), AppError>,
) -> Result<(), AppError> {
    let mut catalog = state.catalog.lock().await;
    let mut next = catalog.clone();
    change(&mut next)?;
    if let Some(path) = &state.data_path {
        persist_catalog(path, &next).await?;
    }
    *catalog = next;
    Ok(())
}
