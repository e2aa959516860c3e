use crate::domain::UserId;
use crate::texts;

/// Message author as seen by the transport, reduced to the fields the bot
/// cares about.
#[derive(Clone, Debug)]
pub struct Sender {
    pub user_id: UserId,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// One submitted questionnaire.
///
/// Lives only for the handler invocation that relays it to the administrator;
/// nothing is persisted.
#[derive(Clone, Debug)]
pub struct Application {
    pub user_id: UserId,
    pub username: Option<String>,
    pub full_name: String,
    pub raw_answers: String,
}

/// Outcome of checking a candidate submission.
#[derive(Clone, Debug)]
pub enum Submission {
    Accepted(Application),
    InvalidFormat,
}

const ANSWER_MARKERS: [&str; 5] = ["1.", "2.", "3.", "4.", "5."];

/// Crude presence check: each of `1.` through `5.` must appear somewhere in
/// the text. Order and surrounding content are unconstrained.
pub fn has_all_answer_markers(text: &str) -> bool {
    ANSWER_MARKERS.iter().all(|m| text.contains(m))
}

/// An `Application` is only ever built from text that passed the marker
/// check; everything else is `InvalidFormat`.
pub fn evaluate_submission(sender: &Sender, text: &str) -> Submission {
    if !has_all_answer_markers(text) {
        return Submission::InvalidFormat;
    }
    Submission::Accepted(Application::new(sender, text))
}

impl Application {
    fn new(sender: &Sender, raw_answers: &str) -> Self {
        let first = sender.first_name.as_deref().unwrap_or("");
        let last = sender.last_name.as_deref().unwrap_or("");
        let full_name = format!("{first} {last}").trim().to_string();

        Self {
            user_id: sender.user_id,
            username: sender.username.clone(),
            full_name,
            raw_answers: raw_answers.to_string(),
        }
    }

    /// Notification text delivered to the administrator chat.
    pub fn admin_notification(&self) -> String {
        format!(
            "📝 New Application Received:\n\nUser ID: {}\nUsername: @{}\nName: {}\n\nAnswers:\n{}",
            self.user_id.0,
            self.username.as_deref().unwrap_or(texts::NO_USERNAME),
            self.full_name,
            self.raw_answers,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> Sender {
        Sender {
            user_id: UserId(42),
            username: Some("widget_guy".to_string()),
            first_name: Some("Alex".to_string()),
            last_name: None,
        }
    }

    #[test]
    fn markers_in_any_order_pass() {
        assert!(has_all_answer_markers("1. a 2. b 3. c 4. d 5. e"));
        assert!(has_all_answer_markers("5. e 3. c 1. a 4. d 2. b"));
        assert!(has_all_answer_markers("intro 1.a\n2.b\n3.c\n4.d\n5.e outro"));
    }

    #[test]
    fn missing_marker_fails() {
        assert!(!has_all_answer_markers("my answers are here"));
        assert!(!has_all_answer_markers("1. a 2. b 3. c 4. d"));
        assert!(!has_all_answer_markers(""));
    }

    #[test]
    fn accepted_submission_builds_application() {
        let text = "1. I sell widgets 2. growth 3. marketing 4. ok 5. Alex";
        let Submission::Accepted(app) = evaluate_submission(&sender(), text) else {
            panic!("expected accepted submission");
        };
        assert_eq!(app.user_id, UserId(42));
        assert_eq!(app.full_name, "Alex");
        assert_eq!(app.raw_answers, text);
    }

    #[test]
    fn invalid_submission_builds_nothing() {
        assert!(matches!(
            evaluate_submission(&sender(), "my answers are here"),
            Submission::InvalidFormat
        ));
    }

    #[test]
    fn notification_embeds_identity_and_answers() {
        let text = "1. I sell widgets 2. growth 3. marketing 4. ok 5. Alex";
        let Submission::Accepted(app) = evaluate_submission(&sender(), text) else {
            panic!("expected accepted submission");
        };
        let note = app.admin_notification();
        assert!(note.contains("User ID: 42"));
        assert!(note.contains("@widget_guy"));
        assert!(note.contains("Name: Alex"));
        assert!(note.contains(text));
    }

    #[test]
    fn anonymous_sender_gets_placeholder_and_empty_name() {
        let anon = Sender {
            user_id: UserId(7),
            username: None,
            first_name: None,
            last_name: None,
        };
        let Submission::Accepted(app) = evaluate_submission(&anon, "1.2.3.4.5.") else {
            panic!("expected accepted submission");
        };
        assert_eq!(app.full_name, "");
        let note = app.admin_notification();
        assert!(note.contains("@no_username"));
        assert!(note.contains("Name: \n"));
    }

    #[test]
    fn full_name_joins_and_trims() {
        let both = Sender {
            user_id: UserId(1),
            username: None,
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
        };
        let Submission::Accepted(app) = evaluate_submission(&both, "1. 2. 3. 4. 5.") else {
            panic!("expected accepted submission");
        };
        assert_eq!(app.full_name, "Ada Lovelace");
    }
}
