//! The host page as seen by the synchronizer.
//!
//! Element contract: `activities-list` holds the cards, `activity` is the
//! selector, `signup-form` with its `email` input is the form, `message` is the
//! status banner.

use crate::render::{RenderedCard, render_options};

pub const ACTIVITIES_LIST_ID: &str = "activities-list";
pub const ACTIVITY_SELECT_ID: &str = "activity";
pub const SIGNUP_FORM_ID: &str = "signup-form";
pub const EMAIL_INPUT_ID: &str = "email";
pub const MESSAGE_ID: &str = "message";
pub const DELETE_CONTROL_CLASS: &str = "delete-participant";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    pub fn trimmed_email(&self) -> &str {
        self.email.trim()
    }
}

pub trait Surface: Send {
    /// Replaces everything under the activities list.
    fn replace_activities(&mut self, cards: Vec<RenderedCard>);

    /// Swaps the card with the same key in place. Unknown keys are ignored.
    fn replace_card(&mut self, card: RenderedCard);

    fn set_activity_options(&mut self, names: &[String]);

    fn signup_form(&self) -> SignupForm;

    fn reset_form(&mut self);
}

/// The element a click landed on inside a card, described by its attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlTarget {
    pub class_name: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    RemoveParticipant { email: String },
}

impl CardAction {
    pub fn from_target(target: &ControlTarget) -> Option<Self> {
        let is_delete = target
            .class_name
            .split_whitespace()
            .any(|class| class == DELETE_CONTROL_CLASS);
        match (&target.email, is_delete) {
            (Some(email), true) => Some(CardAction::RemoveParticipant {
                email: email.clone(),
            }),
            _ => None,
        }
    }
}

/// In-memory document holding what the synchronizer last projected.
#[derive(Debug, Clone, Default)]
pub struct Page {
    cards: Vec<RenderedCard>,
    options: Vec<String>,
    form: SignupForm,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[RenderedCard] {
        &self.cards
    }

    pub fn card(&self, key: &str) -> Option<&RenderedCard> {
        self.cards.iter().find(|card| card.key == key)
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn activities_markup(&self) -> String {
        self.cards.iter().map(|card| card.markup.as_str()).collect()
    }

    pub fn options_markup(&self) -> String {
        render_options(&self.options)
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    pub fn select_activity(&mut self, activity: impl Into<String>) {
        self.form.activity = activity.into();
    }
}

impl Surface for Page {
    fn replace_activities(&mut self, cards: Vec<RenderedCard>) {
        self.cards = cards;
    }

    fn replace_card(&mut self, card: RenderedCard) {
        if let Some(slot) = self.cards.iter_mut().find(|slot| slot.key == card.key) {
            *slot = card;
        }
    }

    fn set_activity_options(&mut self, names: &[String]) {
        self.options = names.to_vec();
    }

    fn signup_form(&self) -> SignupForm {
        self.form.clone()
    }

    fn reset_form(&mut self) {
        self.form = SignupForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegation_only_reacts_to_delete_controls() {
        let target = ControlTarget {
            class_name: "delete-participant".into(),
            email: Some("a@b.com".into()),
        };
        assert_eq!(
            CardAction::from_target(&target),
            Some(CardAction::RemoveParticipant {
                email: "a@b.com".into()
            })
        );

        let heading = ControlTarget {
            class_name: "participants-section".into(),
            email: None,
        };
        assert_eq!(CardAction::from_target(&heading), None);

        let missing_email = ControlTarget {
            class_name: "delete-participant".into(),
            email: None,
        };
        assert_eq!(CardAction::from_target(&missing_email), None);
    }

    #[test]
    fn page_replaces_card_in_place() {
        let mut page = Page::new();
        page.replace_activities(vec![
            RenderedCard {
                key: "A".into(),
                markup: "<a/>".into(),
            },
            RenderedCard {
                key: "B".into(),
                markup: "<b/>".into(),
            },
        ]);
        page.replace_card(RenderedCard {
            key: "A".into(),
            markup: "<a2/>".into(),
        });
        page.replace_card(RenderedCard {
            key: "Z".into(),
            markup: "<z/>".into(),
        });
        assert_eq!(page.activities_markup(), "<a2/><b/>");
    }

    #[test]
    fn reset_clears_form_fields() {
        let mut page = Page::new();
        page.set_email("  a@b.com ");
        page.select_activity("Chess Club");
        assert_eq!(page.signup_form().trimmed_email(), "a@b.com");
        page.reset_form();
        assert_eq!(page.signup_form(), SignupForm::default());
    }
}
