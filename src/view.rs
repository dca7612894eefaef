//! View model for the rendered activity list and the reducer that keeps it in
//! step with server-confirmed mutations.

use crate::models::{Activity, Catalog};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// What the participants section of a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roster<'a> {
    List(&'a [String]),
    Placeholder,
}

impl CardView {
    pub fn from_activity(name: &str, activity: &Activity) -> Self {
        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity.participants.clone(),
        }
    }

    pub fn roster(&self) -> Roster<'_> {
        if self.participants.is_empty() {
            Roster::Placeholder
        } else {
            Roster::List(&self.participants)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    pub cards: Vec<CardView>,
}

impl ViewModel {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            cards: catalog
                .iter()
                .map(|(name, activity)| CardView::from_activity(name, activity))
                .collect(),
        }
    }

    pub fn card(&self, activity: &str) -> Option<&CardView> {
        self.cards.iter().find(|card| card.name == activity)
    }

    /// Options for the activity selector. Taken once at load; mutations never
    /// add or remove activities.
    pub fn activity_names(&self) -> Vec<String> {
        self.cards.iter().map(|card| card.name.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    ParticipantAdded { activity: String, email: String },
    ParticipantRemoved { activity: String, email: String },
}

impl ViewEvent {
    pub fn activity(&self) -> &str {
        match self {
            ViewEvent::ParticipantAdded { activity, .. }
            | ViewEvent::ParticipantRemoved { activity, .. } => activity,
        }
    }
}

/// Applies one confirmed mutation. Unknown activities and unknown
/// participants leave the model as it was.
pub fn reduce(mut view: ViewModel, event: &ViewEvent) -> ViewModel {
    let Some(card) = view
        .cards
        .iter_mut()
        .find(|card| card.name == event.activity())
    else {
        return view;
    };

    match event {
        ViewEvent::ParticipantAdded { email, .. } => {
            card.participants.push(email.clone());
        }
        ViewEvent::ParticipantRemoved { email, .. } => {
            if let Some(index) = card.participants.iter().position(|p| p == email) {
                card.participants.remove(index);
            }
        }
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ViewModel {
        ViewModel {
            cards: vec![
                CardView {
                    name: "Chess Club".into(),
                    description: "Learn strategies".into(),
                    schedule: "Fridays".into(),
                    max_participants: 12,
                    participants: vec![],
                },
                CardView {
                    name: "Drama Club".into(),
                    description: "Acting".into(),
                    schedule: "Wednesdays".into(),
                    max_participants: 30,
                    participants: vec!["ava@mergington.edu".into()],
                },
            ],
        }
    }

    fn added(activity: &str, email: &str) -> ViewEvent {
        ViewEvent::ParticipantAdded {
            activity: activity.into(),
            email: email.into(),
        }
    }

    fn removed(activity: &str, email: &str) -> ViewEvent {
        ViewEvent::ParticipantRemoved {
            activity: activity.into(),
            email: email.into(),
        }
    }

    #[test]
    fn signup_replaces_placeholder_with_list() {
        let view = sample();
        assert_eq!(view.card("Chess Club").unwrap().roster(), Roster::Placeholder);

        let view = reduce(view, &added("Chess Club", "a@b.com"));
        let card = view.card("Chess Club").unwrap();
        assert_eq!(card.roster(), Roster::List(&["a@b.com".to_string()]));
    }

    #[test]
    fn removing_last_participant_restores_placeholder() {
        let view = reduce(sample(), &removed("Drama Club", "ava@mergington.edu"));
        assert_eq!(view.card("Drama Club").unwrap().roster(), Roster::Placeholder);
    }

    #[test]
    fn removal_drops_only_one_matching_row() {
        let view = reduce(sample(), &added("Drama Club", "ava@mergington.edu"));
        let view = reduce(view, &removed("Drama Club", "ava@mergington.edu"));
        assert_eq!(
            view.card("Drama Club").unwrap().participants,
            vec!["ava@mergington.edu".to_string()]
        );
    }

    #[test]
    fn unknown_targets_leave_model_untouched() {
        let before = sample();
        let after = reduce(before.clone(), &added("Robotics Club", "x@y.z"));
        assert_eq!(before, after);
        let after = reduce(before.clone(), &removed("Drama Club", "nobody@x.y"));
        assert_eq!(before, after);
    }

    #[test]
    fn activity_names_follow_card_order() {
        assert_eq!(sample().activity_names(), vec!["Chess Club", "Drama Club"]);
    }
}
