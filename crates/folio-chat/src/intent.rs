//! Keyword-driven intent classification.
//!
//! Classification is an ordered chain of checks over a lowercased
//! utterance; the first matching rule wins. The order is load-bearing:
//! employer names must be tested before the generic experience keywords
//! they would otherwise be shadowed by, and greetings before everything
//! that could match inside a pleasantry.

use std::sync::LazyLock;

use regex::Regex;

use crate::knowledge::KnowledgeBase;

/// An utterance shorter than this (in characters, trimmed) counts as a
/// low-effort "yes" when a topic is pending.
pub const AFFIRMATIVE_MAX_LEN: usize = 10;

/// An utterance shorter than this that contains a greeting word is treated
/// as a greeting even when it is not one on its own.
pub const SHORT_GREETING_MAX_LEN: usize = 15;

/// Whole-string greeting pattern.
static GREETING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(hi|hello|hey|greetings|good morning|good evening|howdy)[\s!?.]*$")
        .expect("Invalid greeting regex")
});

static GREETING_WORDS: &[&str] = &["hi", "hello", "hey"];

static GRATITUDE_WORDS: &[&str] = &["thank", "appreciate"];

static AFFIRMATIVE_PHRASES: &[&str] = &[
    "yes",
    "yeah",
    "yep",
    "yup",
    "sure",
    "ok",
    "okay",
    "please",
    "go ahead",
    "tell me",
    "absolutely",
    "definitely",
    "of course",
    "why not",
    "sounds good",
    "i would",
    "i'd like",
    "interested",
    "curious",
];

static ELABORATION_WORDS: &[&str] = &["more", "detail", "elaborate", "explain"];

static PROJECT_WORDS: &[&str] = &[
    "project", "built", "created", "developed", "portfolio", "made", "build",
];

static EXPERIENCE_WORDS: &[&str] = &[
    "experience",
    "job",
    "company",
    "career",
    "work history",
    "employment",
];

static SKILL_WORDS: &[&str] = &[
    "skill",
    "technology",
    "tech stack",
    "programming",
    "language",
    "expertise",
    "know",
    "proficient",
];

static EDUCATION_WORDS: &[&str] = &[
    "education",
    "study",
    "college",
    "university",
    "degree",
    "iit",
    "school",
    "graduate",
];

static CONTACT_WORDS: &[&str] = &[
    "contact",
    "reach",
    "email",
    "phone",
    "connect",
    "get in touch",
    "talk to",
];

static LOCATION_WORDS: &[&str] = &["where", "location", "based", "live", "city", "country"];

static SECURITY_WORDS: &[&str] = &[
    "security", "waf", "ddos", "firewall", "protect", "cyber", "threat",
];

static BACKEND_WORDS: &[&str] = &[
    "backend",
    "api",
    "microservice",
    "server",
    "scalable",
    "architecture",
];

static ACHIEVEMENT_WORDS: &[&str] = &[
    "achievement",
    "award",
    "accomplish",
    "proud",
    "olympiad",
];

static AVAILABILITY_WORDS: &[&str] = &[
    "freelance",
    "hire",
    "cost",
    "rate",
    "available",
    "opportunity",
    "open to",
];

/// The rule category a free-text utterance falls into, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Gratitude,
    CurrentEmployer,
    PreviousEmployer,
    Projects,
    Experience,
    Skills,
    Education,
    Contact,
    Location,
    Security,
    Backend,
    Achievements,
    Availability,
    About,
    CurrentWork,
    Unknown,
}

/// Classifies utterances against the fixed rule order.
pub struct IntentClassifier {
    current_org: String,
    previous_org: String,
}

impl IntentClassifier {
    pub fn new(kb: &KnowledgeBase) -> Self {
        Self {
            current_org: kb.current.organization.to_lowercase(),
            previous_org: kb.previous.organization.to_lowercase(),
        }
    }

    /// Classify a lowercased utterance. Total: unmatched input is `Unknown`.
    ///
    /// The check order here is the observable contract; do not reorder.
    pub fn classify(&self, msg: &str) -> Intent {
        if is_greeting(msg) {
            return Intent::Greeting;
        }
        if matches_any(msg, GRATITUDE_WORDS) {
            return Intent::Gratitude;
        }
        // Named employers before the generic experience rule that shares
        // their vocabulary.
        if msg.contains(self.current_org.as_str()) {
            return Intent::CurrentEmployer;
        }
        if msg.contains(self.previous_org.as_str()) {
            return Intent::PreviousEmployer;
        }
        // Projects before experience: "what has he built" is about output,
        // not employment history.
        if matches_any(msg, PROJECT_WORDS) {
            return Intent::Projects;
        }
        if matches_any(msg, EXPERIENCE_WORDS) {
            return Intent::Experience;
        }
        if matches_any(msg, SKILL_WORDS) {
            return Intent::Skills;
        }
        if matches_any(msg, EDUCATION_WORDS) {
            return Intent::Education;
        }
        if matches_any(msg, CONTACT_WORDS) {
            return Intent::Contact;
        }
        if matches_any(msg, LOCATION_WORDS) {
            return Intent::Location;
        }
        if matches_any(msg, SECURITY_WORDS) {
            return Intent::Security;
        }
        if matches_any(msg, BACKEND_WORDS) {
            return Intent::Backend;
        }
        if matches_any(msg, ACHIEVEMENT_WORDS) {
            return Intent::Achievements;
        }
        if matches_any(msg, AVAILABILITY_WORDS) {
            return Intent::Availability;
        }
        if is_about(msg) {
            return Intent::About;
        }
        if is_current_work(msg) {
            return Intent::CurrentWork;
        }
        Intent::Unknown
    }
}

/// Substring match against a fixed keyword set.
fn matches_any(msg: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| msg.contains(k))
}

/// Strict whole-string greeting, or a short utterance containing one.
pub fn is_greeting(msg: &str) -> bool {
    GREETING_RE.is_match(msg)
        || (msg.chars().count() < SHORT_GREETING_MAX_LEN && matches_any(msg, GREETING_WORDS))
}

/// Affirmative phrases, or anything short enough to read as a nod.
pub fn is_affirmative(msg: &str) -> bool {
    let msg = msg.trim();
    matches_any(msg, AFFIRMATIVE_PHRASES) || msg.chars().count() < AFFIRMATIVE_MAX_LEN
}

/// Requests to expand on the pending topic.
pub fn wants_elaboration(msg: &str) -> bool {
    matches_any(msg, ELABORATION_WORDS)
}

fn is_about(msg: &str) -> bool {
    msg.contains("who is bhavy")
        || msg.contains("about bhavy")
        || msg.contains("introduce")
        || (msg.contains("who") && msg.contains("he"))
        || msg == "about"
}

fn is_current_work(msg: &str) -> bool {
    (msg.contains("current") || msg.contains("doing") || msg.contains("now"))
        && (msg.contains("role")
            || msg.contains("work")
            || msg.contains("job")
            || msg.contains("he"))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new(&KnowledgeBase::builtin())
    }

    // ---- Greetings ----

    #[test]
    fn test_strict_greetings() {
        for msg in ["hi", "hello", "hey", "greetings", "good morning", "good evening", "howdy"] {
            assert!(is_greeting(msg), "{} should greet", msg);
        }
    }

    #[test]
    fn test_greeting_with_trailing_punctuation() {
        assert!(is_greeting("hello!"));
        assert!(is_greeting("hi there")); // short + contains "hi"
        assert!(is_greeting("hey?!"));
    }

    #[test]
    fn test_short_utterance_containing_greeting_word() {
        // Substring semantics: "this" contains "hi". Original-compatible.
        assert!(is_greeting("this"));
        assert!(is_greeting("hey you"));
    }

    #[test]
    fn test_long_utterance_with_greeting_word_is_not_greeting() {
        assert!(!is_greeting("hello, can you tell me about his security work"));
    }

    #[test]
    fn test_greeting_classified_first() {
        assert_eq!(classifier().classify("hello"), Intent::Greeting);
    }

    // ---- Affirmatives ----

    #[test]
    fn test_affirmative_phrases() {
        for msg in ["yes", "yeah", "sure thing", "okay", "sounds good", "of course", "i'd like that"] {
            assert!(is_affirmative(msg), "{} should be affirmative", msg);
        }
    }

    #[test]
    fn test_short_utterance_is_affirmative() {
        assert!(is_affirmative("go on"));
        assert!(is_affirmative("hm"));
    }

    #[test]
    fn test_long_non_affirmative() {
        assert!(!is_affirmative("what projects has this person worked on"));
    }

    #[test]
    fn test_elaboration_words() {
        assert!(wants_elaboration("tell me more"));
        assert!(wants_elaboration("more details please"));
        assert!(wants_elaboration("can you elaborate"));
        assert!(wants_elaboration("explain that"));
        assert!(!wants_elaboration("what about his education"));
    }

    // ---- Employers before generic experience ----

    #[test]
    fn test_employer_beats_experience_keyword() {
        let c = classifier();
        assert_eq!(
            c.classify("tell me about his experience at clickpost"),
            Intent::CurrentEmployer
        );
        assert_eq!(
            c.classify("what was his job at wijungle"),
            Intent::PreviousEmployer
        );
    }

    #[test]
    fn test_employer_names() {
        let c = classifier();
        assert_eq!(c.classify("tell me about clickpost"), Intent::CurrentEmployer);
        assert_eq!(c.classify("what about wijungle"), Intent::PreviousEmployer);
    }

    // ---- General categories ----

    #[test]
    fn test_projects_before_experience() {
        assert_eq!(
            classifier().classify("what projects shaped his career"),
            Intent::Projects
        );
    }

    #[test]
    fn test_category_keywords() {
        let c = classifier();
        assert_eq!(c.classify("what is his work history"), Intent::Experience);
        assert_eq!(c.classify("which technologies does he use"), Intent::Skills);
        assert_eq!(c.classify("where did he study"), Intent::Education);
        assert_eq!(c.classify("how can i get in touch"), Intent::Contact);
        assert_eq!(c.classify("which city is he based in"), Intent::Location);
        assert_eq!(c.classify("has he done ddos mitigation"), Intent::Security);
        assert_eq!(c.classify("does he design microservice systems"), Intent::Backend);
        assert_eq!(c.classify("any awards"), Intent::Achievements);
        assert_eq!(c.classify("is he open to freelance gigs"), Intent::Availability);
    }

    #[test]
    fn test_education_beats_location_for_where_study() {
        // "where did he study" contains both "where" and "study"; education
        // is checked first.
        assert_eq!(classifier().classify("where did he study"), Intent::Education);
    }

    #[test]
    fn test_security_vs_backend_order() {
        // "server" (backend) and "protect" (security) both present: security
        // is the earlier rule.
        assert_eq!(
            classifier().classify("does his server protect against attacks"),
            Intent::Security
        );
    }

    // ---- Loose about / current-work heuristics ----

    #[test]
    fn test_about_detection() {
        let c = classifier();
        assert_eq!(c.classify("who is bhavy?"), Intent::About);
        assert_eq!(c.classify("please introduce him"), Intent::About);
        assert_eq!(c.classify("about"), Intent::About);
        assert_eq!(c.classify("who is he exactly"), Intent::About);
    }

    #[test]
    fn test_current_work_detection() {
        let c = classifier();
        assert_eq!(c.classify("what is he doing these days for his role"), Intent::CurrentWork);
        // "what is his current role" hits "current" + "role" but also no
        // earlier keyword.
        assert_eq!(c.classify("his current role"), Intent::CurrentWork);
    }

    // ---- Fallback ----

    #[test]
    fn test_unknown() {
        assert_eq!(classifier().classify("xyz123 unrelated gibberish"), Intent::Unknown);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let c = classifier();
        let msg = "tell me about clickpost";
        let first = c.classify(msg);
        for _ in 0..5 {
            assert_eq!(c.classify(msg), first);
        }
    }

    // ---- Gratitude ----

    #[test]
    fn test_gratitude() {
        let c = classifier();
        assert_eq!(c.classify("thanks a lot for everything you shared"), Intent::Gratitude);
        assert_eq!(c.classify("i really appreciate the detailed answer"), Intent::Gratitude);
    }
}
