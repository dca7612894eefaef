//! Keeps the rendered activity list in step with the backend.
//!
//! Network calls run without holding the projection lock, so a slow signup
//! does not block a removal on another card. Each patch re-projects only the
//! card named by its own event.

use crate::banner::{Severity, StatusBanner};
use crate::client::ActivityApi;
use crate::render::{render_activities, render_card};
use crate::surface::{CardAction, ControlTarget, Surface};
use crate::view::{ViewEvent, ViewModel, reduce};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

pub const LOAD_FAILED: &str = "Could not load activities";
pub const MISSING_FIELDS: &str = "Please provide an email and select an activity";
pub const SIGNUP_FAILED: &str = "Signup failed";
pub const REMOVE_FAILED: &str = "Failed to remove participant";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server confirmed and the view was patched.
    Applied,
    /// The request failed; the view is unchanged.
    Failed,
    /// Local validation stopped the request before it was sent.
    Invalid,
    /// Nothing to do for this activation.
    Ignored,
}

struct Projection<S> {
    view: ViewModel,
    surface: S,
}

pub struct Synchronizer<A, S> {
    api: A,
    banner: StatusBanner,
    projection: Mutex<Projection<S>>,
}

impl<A: ActivityApi, S: Surface> Synchronizer<A, S> {
    pub fn new(api: A, surface: S, banner: StatusBanner) -> Self {
        Self {
            api,
            banner,
            projection: Mutex::new(Projection {
                view: ViewModel::default(),
                surface,
            }),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn banner(&self) -> &StatusBanner {
        &self.banner
    }

    pub async fn view(&self) -> ViewModel {
        self.projection.lock().await.view.clone()
    }

    pub async fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.projection.lock().await.surface)
    }

    /// Fetches the catalog once and renders it. No retry on failure.
    pub async fn load(&self) -> Outcome {
        match self.api.fetch_catalog().await {
            Ok(catalog) => {
                let view = ViewModel::from_catalog(&catalog);
                let mut projection = self.projection.lock().await;
                projection.surface.replace_activities(render_activities(&view));
                projection.surface.set_activity_options(&view.activity_names());
                projection.view = view;
                info!(activities = catalog.len(), "catalog loaded");
                Outcome::Applied
            }
            Err(err) => {
                error!("failed to load activities: {err}");
                let mut projection = self.projection.lock().await;
                projection.view = ViewModel::default();
                projection.surface.replace_activities(Vec::new());
                drop(projection);
                self.banner.show(LOAD_FAILED, Severity::Error).await;
                Outcome::Failed
            }
        }
    }

    pub async fn submit_signup(&self) -> Outcome {
        let form = self.projection.lock().await.surface.signup_form();
        let email = form.trimmed_email().to_string();
        let activity = form.activity;
        if email.is_empty() || activity.is_empty() {
            self.banner.show(MISSING_FIELDS, Severity::Error).await;
            return Outcome::Invalid;
        }

        let ticket = self.banner.ticket().await;
        match self.api.signup(&activity, &email).await {
            Ok(message) => {
                self.banner.show_for(ticket, message, Severity::Success).await;
                let mut projection = self.projection.lock().await;
                patch(
                    &mut *projection,
                    ViewEvent::ParticipantAdded {
                        activity: activity.clone(),
                        email: email.clone(),
                    },
                );
                projection.surface.reset_form();
                info!(%activity, %email, "participant signed up");
                Outcome::Applied
            }
            Err(err) => {
                warn!(%activity, %email, "signup failed: {err}");
                self.banner
                    .show_for(ticket, err.user_message(SIGNUP_FAILED), Severity::Error)
                    .await;
                Outcome::Failed
            }
        }
    }

    pub async fn remove_participant(&self, activity: &str, email: &str) -> Outcome {
        let ticket = self.banner.ticket().await;
        match self.api.remove_participant(activity, email).await {
            Ok(()) => {
                {
                    let mut projection = self.projection.lock().await;
                    patch(
                        &mut *projection,
                        ViewEvent::ParticipantRemoved {
                            activity: activity.to_string(),
                            email: email.to_string(),
                        },
                    );
                }
                self.banner
                    .show_for(
                        ticket,
                        format!("Removed {email} from {activity}"),
                        Severity::Success,
                    )
                    .await;
                info!(%activity, %email, "participant removed");
                Outcome::Applied
            }
            Err(err) => {
                warn!(%activity, %email, "removal failed: {err}");
                self.banner
                    .show_for(ticket, err.user_message(REMOVE_FAILED), Severity::Error)
                    .await;
                Outcome::Failed
            }
        }
    }

    /// Delegated click handler for a card: the participant is read from the
    /// control's attributes rather than captured per row.
    pub async fn activate(&self, card: &str, target: &ControlTarget) -> Outcome {
        match CardAction::from_target(target) {
            Some(CardAction::RemoveParticipant { email }) => {
                self.remove_participant(card, &email).await
            }
            None => Outcome::Ignored,
        }
    }
}

fn patch<S: Surface>(projection: &mut Projection<S>, event: ViewEvent) {
    let view = std::mem::take(&mut projection.view);
    projection.view = reduce(view, &event);
    if let Some(card) = projection.view.card(event.activity()) {
        projection.surface.replace_card(render_card(card));
    }
}
