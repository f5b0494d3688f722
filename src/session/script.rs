//! Canned assistant lines, in the canonical language.
//!
//! The engine translates these to the candidate's preferred language before
//! emitting them, so the texts here stay English-only.

/// Phrases that end the conversation from any stage past the greeting.
pub const EXIT_PHRASES: &[&str] = &[
    "bye", "goodbye", "exit", "quit", "end", "thank you", "thanks",
];

/// Clarification lines for the defensive fallback path.
pub const FALLBACK_REPLIES: &[&str] = &[
    "I'm not sure I understand. Could you please rephrase that?",
    "I didn't quite catch that. Can you elaborate?",
    "I'm having trouble following. Could you clarify what you mean?",
    "I'm sorry, I didn't understand. Let's try a different approach.",
    "I may have missed something. Could you provide more details?",
];

/// Case-insensitive substring match against the exit-phrase set.
pub fn contains_exit_phrase(text: &str) -> bool {
    let lower = text.to_lowercase();
    EXIT_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

pub fn greeting() -> String {
    "👋 Hello! I'm the Screen Assist interviewer.\n\n\
     I'll be helping you through the initial screening process for your job application. \
     I'll ask you a series of questions to learn more about you and your technical skills.\n\n\
     Let's get started! How are you doing today?"
        .to_string()
}

pub fn ask_name() -> String {
    "First, could you please tell me your full name?".to_string()
}

pub fn ask_email(name: &str) -> String {
    format!("Nice to meet you, {name}! Could you please provide your email address?")
}

pub fn ask_phone() -> String {
    "Great! Now, could you share your phone number?".to_string()
}

pub fn ask_experience() -> String {
    "How many years of experience do you have in your field?".to_string()
}

pub fn ask_position() -> String {
    "Thanks! What position(s) are you interested in applying for?".to_string()
}

pub fn ask_location() -> String {
    "What is your current location?".to_string()
}

pub fn ask_tech_stack() -> String {
    "Please list the technologies you're proficient in, separated by commas \
     (e.g., Python, JavaScript, React, MongoDB)."
        .to_string()
}

/// Frame a question with its technology, e.g. `About Python: …`.
pub fn tech_question(tech: &str, question: &str) -> String {
    format!("About {}: {question}", capitalize(tech))
}

pub fn unknown_tech_notice() -> String {
    "I don't have specific technical questions for the technologies you've mentioned. \
     Let's have a more general discussion about your skills."
        .to_string()
}

pub fn general_question() -> String {
    "Can you describe your technical background and the projects you've worked on?".to_string()
}

pub fn wrap_up(name: &str) -> String {
    format!(
        "Thank you for answering the technical questions, {name}!\n\n\
         Based on our conversation, I have a good understanding of your background \
         and technical skills.\n\n\
         Is there anything else you'd like to share about yourself or do you have \
         any questions about the position?"
    )
}

pub fn farewell(name: &str, email: &str, phone: &str) -> String {
    format!(
        "Thank you for taking the time to chat with me today, {name}!\n\n\
         Our team will review your profile, and we'll be in touch via email ({email}) \
         or phone ({phone}) within the next 3-5 business days.\n\n\
         Have a great day!"
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_phrase_detection() {
        assert!(contains_exit_phrase("thanks, bye!"));
        assert!(contains_exit_phrase("GOODBYE"));
        assert!(contains_exit_phrase("I want to quit now"));
        assert!(contains_exit_phrase("Thank you so much"));
        assert!(!contains_exit_phrase("my name is Alice"));
    }

    #[test]
    fn exit_detection_is_substring_based() {
        // "friend" contains "end" — matches, same as the original behavior.
        assert!(contains_exit_phrase("my friend recommended this role"));
    }

    #[test]
    fn tech_question_capitalizes() {
        assert_eq!(
            tech_question("python", "What is a tuple?"),
            "About Python: What is a tuple?"
        );
        assert_eq!(tech_question("sql", "Why?"), "About Sql: Why?");
    }

    #[test]
    fn farewell_contains_contact_details() {
        let text = farewell("Alice", "a@example.com", "555-0100");
        assert!(text.contains("Alice"));
        assert!(text.contains("a@example.com"));
        assert!(text.contains("555-0100"));
    }

    #[test]
    fn capitalize_handles_empty() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("go"), "Go");
    }
}
