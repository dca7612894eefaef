use crate::view::{CardView, Roster, ViewModel};

pub const PLACEHOLDER_TEXT: &str = "No participants yet";
pub const SELECT_PROMPT: &str = "-- Select an activity --";
pub const SIGNUP_ACTION: &str = "/signup";
pub const REMOVE_ACTION: &str = "/remove";

/// Markup for one activity card, keyed by the activity name it was rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub key: String,
    pub markup: String,
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    escape_html(value)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn render_card(card: &CardView) -> RenderedCard {
    let key = escape_attr(&card.name);
    let mut markup = format!(
        r#"<div class="activity-card" data-activity="{key}"><h4>{title}</h4><p>{description}</p><p><strong>When:</strong> {schedule}</p><p><strong>Max participants:</strong> {max}</p><div class="participants-section"><h5>Participants</h5>"#,
        title = escape_html(&card.name),
        description = escape_html(&card.description),
        schedule = escape_html(&card.schedule),
        max = escape_html(&card.max_participants.to_string()),
    );

    match card.roster() {
        Roster::List(participants) => {
            markup.push_str(r#"<ul class="participants-list">"#);
            for email in participants {
                // Each removal control is also a plain form so the page works without a script.
                markup.push_str(&format!(
                    r#"<li><span>{text}</span><form method="post" action="{REMOVE_ACTION}"><input type="hidden" name="activity" value="{key}" /><input type="hidden" name="email" value="{attr}" /><button type="submit" class="delete-participant" title="Remove participant" data-email="{attr}">&times;</button></form></li>"#,
                    text = escape_html(email),
                    attr = escape_attr(email),
                ));
            }
            markup.push_str("</ul>");
        }
        Roster::Placeholder => {
            markup.push_str(r#"<p class="no-participants info">"#);
            markup.push_str(PLACEHOLDER_TEXT);
            markup.push_str("</p>");
        }
    }

    markup.push_str("</div></div>");
    RenderedCard {
        key: card.name.clone(),
        markup,
    }
}

/// Full projection of the list; rendering the same model twice yields the same cards.
pub fn render_activities(view: &ViewModel) -> Vec<RenderedCard> {
    view.cards.iter().map(render_card).collect()
}

pub fn render_options(names: &[String]) -> String {
    let mut markup = format!(r#"<option value="" disabled selected>{SELECT_PROMPT}</option>"#);
    for name in names {
        markup.push_str(&format!(
            r#"<option value="{value}">{label}</option>"#,
            value = escape_attr(name),
            label = escape_html(name),
        ));
    }
    markup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{ViewEvent, reduce};

    fn card(schedule: &str, participants: &[&str]) -> CardView {
        CardView {
            name: "Chess Club".into(),
            description: "Learn strategies".into(),
            schedule: schedule.into(),
            max_participants: 12,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape_html("a & <b>"), "a &amp; &lt;b&gt;");
        assert_eq!(escape_html(r#"say "hi""#), r#"say "hi""#);
        assert_eq!(escape_attr(r#"x"y'z"#), "x&quot;y&#39;z");
    }

    #[test]
    fn schedule_is_not_executable() {
        let rendered = render_card(&card("<script>", &[]));
        assert!(rendered.markup.contains("<strong>When:</strong> &lt;script&gt;"));
        assert!(!rendered.markup.contains("<script>"));
    }

    #[test]
    fn empty_roster_shows_placeholder_only() {
        let rendered = render_card(&card("Fridays", &[]));
        assert!(rendered.markup.contains(r#"<p class="no-participants info">No participants yet</p>"#));
        assert!(!rendered.markup.contains("participants-list"));
    }

    #[test]
    fn participants_render_with_removal_controls() {
        let rendered = render_card(&card("Fridays", &["a@b.com", "c@d.com"]));
        assert_eq!(rendered.key, "Chess Club");
        assert!(rendered.markup.contains(r#"data-activity="Chess Club""#));
        assert_eq!(rendered.markup.matches("<li>").count(), 2);
        assert_eq!(rendered.markup.matches("delete-participant").count(), 2);
        assert!(rendered.markup.contains(r#"data-email="a@b.com""#));
        assert!(!rendered.markup.contains("no-participants"));
    }

    #[test]
    fn removal_control_posts_activity_and_email() {
        let mut quoted = card("Fridays", &[r#"o"brien@x.com"#]);
        quoted.name = "Art & Design".into();
        let markup = render_card(&quoted).markup;
        assert_eq!(markup.matches(r#"<form method="post" action="/remove">"#).count(), 1);
        assert!(markup.contains(r#"<input type="hidden" name="activity" value="Art &amp; Design" />"#));
        assert!(markup.contains(r#"<input type="hidden" name="email" value="o&quot;brien@x.com" />"#));
    }

    #[test]
    fn rendering_is_idempotent() {
        let view = ViewModel {
            cards: vec![card("Fridays", &["a@b.com"]), {
                let mut other = card("Mondays", &[]);
                other.name = "Debate Team".into();
                other
            }],
        };
        let first = render_activities(&view);
        let second = render_activities(&view);
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(first[1].key, "Debate Team");
    }

    #[test]
    fn signup_then_removal_toggles_placeholder() {
        let view = ViewModel {
            cards: vec![card("Fridays", &[])],
        };
        let view = reduce(
            view,
            &ViewEvent::ParticipantAdded {
                activity: "Chess Club".into(),
                email: "a@b.com".into(),
            },
        );
        let markup = render_card(&view.cards[0]).markup;
        assert!(markup.contains("<span>a@b.com</span>"));
        assert!(!markup.contains("no-participants"));

        let view = reduce(
            view,
            &ViewEvent::ParticipantRemoved {
                activity: "Chess Club".into(),
                email: "a@b.com".into(),
            },
        );
        let markup = render_card(&view.cards[0]).markup;
        assert!(markup.contains("no-participants"));
        assert!(!markup.contains("participants-list"));
    }

    #[test]
    fn options_follow_given_order() {
        let markup = render_options(&["B & C".to_string(), "A".to_string()]);
        let b = markup.find(r#"value="B &amp; C""#).unwrap();
        let a = markup.find(r#"value="A""#).unwrap();
        assert!(markup.starts_with(r#"<option value="" disabled selected>"#));
        assert!(b < a);
    }
}
