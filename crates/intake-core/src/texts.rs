//! Canned reply texts sent by the bot.

/// Greeting + questionnaire instructions sent on the start trigger.
pub const WELCOME: &str = r#"Hello! You're in the Engine of Progress Application Bot.

Before we begin, you need to answer five questions in one message:

1. "What do you do and what do you think of your business?" (if it is)
2. "What are you looking for here and what is your question?"
3. "In which direction you want to work/improve your skills/achieve anything :)"
4. "What life are you in?" (this is what you would call it)
5. "Your name is?"

Please reply with one message containing all answers, numbering each response."#;

/// Sent to the applicant once their answers have been relayed.
pub const CONFIRMATION: &str = r#"Thank you! I've forwarded your answers to the manager. They will contact you soon.
(Please don't forget to adjust your privacy settings to allow anyone to send you messages!)"#;

/// Re-prompt sent while a submission is missing one of the five markers.
pub const INVALID_FORMAT: &str = "Please send your answers in the correct format:\n\n1. Your answer to question 1\n2. Your answer to question 2\n3. Your answer to question 3\n4. Your answer to question 4\n5. Your answer to question 5";

/// Generic reply when relaying an application fails unexpectedly.
pub const PROCESSING_ERROR: &str = "⚠️ Error processing your request";

/// Placeholder shown to the administrator when the sender has no username.
pub const NO_USERNAME: &str = "no_username";
