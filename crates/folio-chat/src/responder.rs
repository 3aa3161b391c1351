//! The response engine.
//!
//! Given the session state and a new utterance, produces the reply text
//! and the next pending topic. Total over its inputs: every utterance
//! gets a non-empty reply, unmatched input included.

use tracing::debug;

use crate::chooser::Chooser;
use crate::intent::{is_affirmative, wants_elaboration, Intent, IntentClassifier};
use crate::knowledge::KnowledgeBase;
use crate::session::ConversationState;
use crate::topic::{CardSection, Topic, TopicCard};

/// Greeting variants, chosen uniformly.
pub static GREETINGS: &[&str] = &[
    "Hello! I'm Bhavy's AI assistant. How can I help you today? Feel free to ask about his skills, experience, or projects!",
    "Hey there! Great to meet you. I can tell you all about Bhavy's work in backend development and security. What interests you?",
    "Hi! Welcome to Bhavy's portfolio. Would you like to know about his skills, projects, or how to get in touch?",
];

/// Closing remark for thanks.
pub static GRATITUDE_REPLY: &str = "You're welcome! If you have any more questions about Bhavy \
    or want to discuss a potential project, feel free to ask. You can also reach out directly \
    using the contact form!";

/// Menu-style help variants for unmatched input, chosen uniformly.
pub static FALLBACKS: &[&str] = &[
    "I can help you learn about Bhavy! Try asking:\n\n- \"What projects has he built?\"\n- \"Tell me about Clickpost\" or \"Tell me about WiJungle\"\n- \"What are his skills?\"\n- \"How can I contact him?\"\n\nWhat interests you?",
    "Here's what I can tell you about:\n\n- **Projects** - Systems he's built at Clickpost & WiJungle\n- **Skills** - Go, Java, Python, Security\n- **Experience** - His professional journey\n- **Contact** - How to reach him\n\nJust ask!",
    "I'd be happy to help! You can ask about:\n\n- His work at **Clickpost** (current) or **WiJungle** (previous)\n- **Technical skills** and expertise\n- **Projects** with real impact metrics\n- How to **contact** him\n\nWhat would you like to know?",
];

/// The outcome of one `respond` call: the reply text and the topic the
/// session should carry as pending.
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub next_topic: Option<Topic>,
}

/// Rule-based response engine over an immutable knowledge base.
pub struct Responder {
    kb: KnowledgeBase,
    classifier: IntentClassifier,
}

impl Responder {
    pub fn new(kb: KnowledgeBase) -> Self {
        let classifier = IntentClassifier::new(&kb);
        Self { kb, classifier }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Produce a reply for `utterance` given the current state.
    ///
    /// Branch order is the contract (see `IntentClassifier::classify`):
    /// pending-topic continuation runs before any classification, so a
    /// short "yes" always consumes the outstanding suggestion.
    pub fn respond(
        &self,
        state: &ConversationState,
        utterance: &str,
        chooser: &mut dyn Chooser,
    ) -> Reply {
        let msg = utterance.to_lowercase();

        if let Some(topic) = state.pending_topic {
            if is_affirmative(&msg) || wants_elaboration(&msg) {
                debug!(topic = ?topic, "continuing pending topic");
                return self.topic_reply(topic);
            }
        }

        match self.classifier.classify(&msg) {
            Intent::Greeting => Reply {
                text: GREETINGS[chooser.choose(GREETINGS.len())].to_string(),
                next_topic: None,
            },
            Intent::Gratitude => Reply {
                text: GRATITUDE_REPLY.to_string(),
                next_topic: None,
            },
            Intent::CurrentEmployer => self.topic_reply(Topic::CurrentRole),
            Intent::PreviousEmployer => self.topic_reply(Topic::PreviousRole),
            Intent::Projects => self.topic_reply(Topic::Projects),
            Intent::Experience => card_reply(self.experience_card()),
            Intent::Skills => self.topic_reply(Topic::Skills),
            Intent::Education => self.topic_reply(Topic::Education),
            Intent::Contact => self.topic_reply(Topic::Contact),
            Intent::Location => card_reply(self.location_card()),
            Intent::Security => card_reply(self.security_card()),
            Intent::Backend => card_reply(self.backend_card()),
            Intent::Achievements => self.topic_reply(Topic::Achievements),
            Intent::Availability => card_reply(self.availability_card()),
            Intent::About => card_reply(self.about_card()),
            Intent::CurrentWork => card_reply(self.current_work_card()),
            Intent::Unknown => {
                debug!("no rule matched, using fallback menu");
                Reply {
                    text: FALLBACKS[chooser.choose(FALLBACKS.len())].to_string(),
                    next_topic: None,
                }
            }
        }
    }

    /// The canned body for a topic, advancing to its successor.
    pub fn topic_reply(&self, topic: Topic) -> Reply {
        card_reply(TopicCard::for_topic(topic, &self.kb))
    }

    // -----------------------------------------------------------------
    // Rule responses that are not topic cards
    // -----------------------------------------------------------------

    fn experience_card(&self) -> TopicCard {
        let cur = &self.kb.current;
        let prev = &self.kb.previous;
        let mut highlights = prev.leadership.clone();
        highlights.push("Systems handling 100,000+ daily requests".to_string());
        TopicCard {
            lead: "Bhavy has 2+ years of professional experience:".to_string(),
            sections: vec![
                CardSection {
                    heading: format!(
                        "**Current: {}** ({})\n{} {}.",
                        cur.organization, cur.period, cur.role, cur.tagline
                    ),
                    bullets: vec![],
                },
                CardSection {
                    heading: format!(
                        "**Previous: {}** ({})\n{} {}.",
                        prev.organization, prev.period, prev.role, prev.tagline
                    ),
                    bullets: vec![],
                },
                CardSection {
                    heading: "**Highlights:**".to_string(),
                    bullets: highlights,
                },
            ],
            prompt: format!(
                "Want to know more about his current role at {}?",
                cur.organization
            ),
            successor: Some(Topic::CurrentRole),
        }
    }

    fn location_card(&self) -> TopicCard {
        TopicCard {
            lead: format!(
                "Bhavy is based in **{}**. He works remotely at {} and is open to both remote and on-site opportunities.",
                self.kb.location, self.kb.current.organization
            ),
            sections: vec![],
            prompt: "Want his contact info?".to_string(),
            successor: Some(Topic::Contact),
        }
    }

    fn security_card(&self) -> TopicCard {
        let prev = &self.kb.previous;
        TopicCard {
            lead: "Bhavy has deep expertise in **cybersecurity**:".to_string(),
            sections: vec![
                CardSection {
                    heading: format!("**Projects at {}:**", prev.organization),
                    bullets: prev
                        .projects
                        .iter()
                        .map(|p| format!("**{}** - {}", p.name, p.details.join(", ")))
                        .collect(),
                },
                CardSection {
                    heading: format!("**Skills:** {}", self.kb.skills.security.join(", ")),
                    bullets: vec![],
                },
            ],
            prompt: format!("Want to learn more about his time at {}?", prev.organization),
            successor: Some(Topic::PreviousRole),
        }
    }

    fn backend_card(&self) -> TopicCard {
        let s = &self.kb.skills;
        let line = |label: &str, items: &[String]| CardSection {
            heading: format!("**{}:** {}", label, items.join(", ")),
            bullets: vec![],
        };
        TopicCard {
            lead: "Bhavy specializes in **backend development**:".to_string(),
            sections: vec![
                line("Languages", &s.languages),
                line("Architecture", &s.backend),
                line("Databases", &s.databases),
                line("Protocols", &s.protocols),
            ],
            prompt: format!(
                "Want to know what he's building at {}?",
                self.kb.current.organization
            ),
            successor: Some(Topic::CurrentRole),
        }
    }

    fn availability_card(&self) -> TopicCard {
        TopicCard {
            lead: format!("Bhavy is currently {}!", self.kb.availability),
            sections: vec![
                CardSection {
                    heading: "**Freelance Projects:**".to_string(),
                    bullets: vec![
                        "Backend development (Go, Java, Python)".to_string(),
                        "Security systems & audits".to_string(),
                        "API development & integration".to_string(),
                        "Microservices architecture".to_string(),
                    ],
                },
                CardSection {
                    heading: "**Full-time Opportunities:**".to_string(),
                    bullets: vec![
                        "SDE roles in backend/security".to_string(),
                        "Team lead positions".to_string(),
                    ],
                },
            ],
            prompt: "Want his contact info?".to_string(),
            successor: Some(Topic::Contact),
        }
    }

    fn about_card(&self) -> TopicCard {
        let kb = &self.kb;
        TopicCard {
            lead: format!(
                "**{}** is a {} at {}.",
                kb.name, kb.title, kb.current.organization
            ),
            sections: vec![
                CardSection {
                    heading: "**Background:**".to_string(),
                    bullets: vec![
                        format!("{} graduate (B.Tech)", kb.education.institution),
                        "2+ years in backend & security".to_string(),
                        format!("Currently {}", kb.current.tagline),
                    ],
                },
                CardSection {
                    heading: "**Expertise:**".to_string(),
                    bullets: vec![
                        kb.skills.languages.join(", "),
                        "Security systems (WAF, DDoS protection)".to_string(),
                        "Microservices & distributed systems".to_string(),
                    ],
                },
            ],
            prompt: "Want to know more about his current work?".to_string(),
            successor: Some(Topic::CurrentRole),
        }
    }

    fn current_work_card(&self) -> TopicCard {
        let cur = &self.kb.current;
        TopicCard {
            lead: format!(
                "Bhavy is currently working as a **{} at {}** ({}).",
                cur.role, cur.organization, cur.period
            ),
            sections: vec![
                CardSection {
                    heading: "**What he's building:**".to_string(),
                    bullets: cur
                        .projects
                        .iter()
                        .map(|p| format!("{} - {}", p.name, p.details[0]))
                        .collect(),
                },
                CardSection {
                    heading: "**Tech Stack:** Java, PostgreSQL, Kafka, Microservices".to_string(),
                    bullets: vec![],
                },
            ],
            prompt: format!(
                "Want to know about his previous role at {}?",
                self.kb.previous.organization
            ),
            successor: Some(Topic::PreviousRole),
        }
    }
}

fn card_reply(card: TopicCard) -> Reply {
    let next_topic = card.successor;
    Reply {
        text: card.render(),
        next_topic,
    }
}

// =============================================================================
// Tests
// =============================================================================
