//! Conversational topics and their canned response cards.
//!
//! Every topic renders to one [`TopicCard`], a structured record of
//! lead-in, sections, and closing prompt, through a single generic
//! renderer. Each card names exactly one successor topic, forming the
//! suggestion chain the engine walks when the visitor keeps saying "yes".

use serde::{Deserialize, Serialize};

use crate::knowledge::{Employment, KnowledgeBase};

/// A conversational subject that can be suggested to the visitor and
/// consumed by an affirmative follow-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    CurrentRole,
    PreviousRole,
    Skills,
    Projects,
    Contact,
    Education,
    Achievements,
}

impl Topic {
    /// The topic suggested after this one's card has been shown.
    ///
    /// The chain converges on `Contact`, which terminates it.
    pub fn successor(&self) -> Option<Topic> {
        match self {
            Topic::CurrentRole => Some(Topic::PreviousRole),
            Topic::PreviousRole => Some(Topic::Skills),
            Topic::Skills => Some(Topic::Projects),
            Topic::Projects => Some(Topic::Contact),
            Topic::Contact => None,
            Topic::Education => Some(Topic::Achievements),
            Topic::Achievements => Some(Topic::Contact),
        }
    }
}

// =============================================================================
// TopicCard
// =============================================================================

/// One block of a card: an optional bold heading plus bullet lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSection {
    pub heading: String,
    pub bullets: Vec<String>,
}

impl CardSection {
    fn heading_only(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            bullets: vec![],
        }
    }

    fn new(heading: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            bullets,
        }
    }
}

/// A canned multi-section response body.
///
/// Rendering is uniform across all topics: lead paragraph, sections
/// separated by blank lines, closing prompt suggesting the successor.
#[derive(Debug, Clone)]
pub struct TopicCard {
    pub lead: String,
    pub sections: Vec<CardSection>,
    pub prompt: String,
    pub successor: Option<Topic>,
}

impl TopicCard {
    /// Render the card to the markdown-like text the UI formats.
    pub fn render(&self) -> String {
        let mut paragraphs: Vec<String> = vec![self.lead.clone()];
        for section in &self.sections {
            let mut block = section.heading.clone();
            for bullet in &section.bullets {
                if !block.is_empty() {
                    block.push('\n');
                }
                block.push_str("- ");
                block.push_str(bullet);
            }
            paragraphs.push(block);
        }
        if !self.prompt.is_empty() {
            paragraphs.push(self.prompt.clone());
        }
        paragraphs.join("\n\n")
    }

    /// Build the card for a topic from the knowledge base.
    pub fn for_topic(topic: Topic, kb: &KnowledgeBase) -> TopicCard {
        match topic {
            Topic::CurrentRole => employer_card(
                &kb.current,
                "works as a",
                format!(
                    "Want to know about his previous role at {}?",
                    kb.previous.organization
                ),
                Topic::CurrentRole,
            ),
            Topic::PreviousRole => employer_card(
                &kb.previous,
                "was an",
                "Want to know about his technical skills?".to_string(),
                Topic::PreviousRole,
            ),
            Topic::Skills => skills_card(kb),
            Topic::Projects => projects_card(kb),
            Topic::Contact => contact_card(kb),
            Topic::Education => education_card(kb),
            Topic::Achievements => achievements_card(kb),
        }
    }
}

// =============================================================================
// Card builders
// =============================================================================

fn employer_card(job: &Employment, verb: &str, prompt: String, topic: Topic) -> TopicCard {
    let mut sections = vec![CardSection::heading_only("**Key Projects:**")];
    for (i, project) in job.projects.iter().enumerate() {
        sections.push(CardSection::new(
            format!("**{}. {}**", i + 1, project.name),
            project.details.clone(),
        ));
    }
    if !job.leadership.is_empty() {
        sections.push(CardSection::heading_only(format!(
            "**Leadership:** {}",
            job.leadership.join(", ")
        )));
    }
    TopicCard {
        lead: format!(
            "At **{}** ({}), Bhavy {} {} {}:",
            job.organization, job.period, verb, job.role, job.tagline
        ),
        sections,
        prompt,
        successor: topic.successor(),
    }
}

fn skills_card(kb: &KnowledgeBase) -> TopicCard {
    let s = &kb.skills;
    let category = |label: &str, items: &[String]| {
        CardSection::heading_only(format!("**{}:** {}", label, items.join(", ")))
    };
    TopicCard {
        lead: "Bhavy's technical skills:".to_string(),
        sections: vec![
            category("Languages", &s.languages),
            category("Backend", &s.backend),
            category("Databases", &s.databases),
            category("Security", &s.security),
            category("Protocols", &s.protocols),
        ],
        prompt: "Want to see the projects he's built with these skills?".to_string(),
        successor: Topic::Skills.successor(),
    }
}

fn projects_card(kb: &KnowledgeBase) -> TopicCard {
    let summarize = |job: &Employment| -> Vec<String> {
        job.projects
            .iter()
            .map(|p| format!("**{}** - {}", p.name, p.details[0]))
            .collect()
    };
    TopicCard {
        lead: "Here are notable projects Bhavy has built:".to_string(),
        sections: vec![
            CardSection::new(
                format!("**At {} (Security):**", kb.previous.organization),
                summarize(&kb.previous),
            ),
            CardSection::new(
                format!("**At {} (Logistics):**", kb.current.organization),
                summarize(&kb.current),
            ),
        ],
        prompt: "Want to get in touch with him?".to_string(),
        successor: Topic::Projects.successor(),
    }
}

fn contact_card(kb: &KnowledgeBase) -> TopicCard {
    let c = &kb.contact;
    TopicCard {
        lead: "Here's how to reach Bhavy:".to_string(),
        sections: vec![CardSection::heading_only(format!(
            "**Email:** {}\n**Phone:** {}\n**LinkedIn:** {}\n**GitHub:** {}\n**Twitter:** {}",
            c.email, c.phone, c.linkedin, c.github, c.twitter
        ))],
        prompt: "You can also use the **Contact form** below to send a message directly. \
                 He typically responds within 24 hours!"
            .to_string(),
        successor: Topic::Contact.successor(),
    }
}

fn education_card(kb: &KnowledgeBase) -> TopicCard {
    let e = &kb.education;
    TopicCard {
        lead: format!(
            "Bhavy graduated from **{}** with a {} ({}).",
            e.institution, e.degree, e.years
        ),
        sections: vec![CardSection::new(
            "**Highlights:**".to_string(),
            e.highlights.clone(),
        )],
        prompt: "Want to know about his achievements and awards?".to_string(),
        successor: Topic::Education.successor(),
    }
}

fn achievements_card(kb: &KnowledgeBase) -> TopicCard {
    TopicCard {
        lead: "Bhavy's notable achievements:".to_string(),
        sections: vec![CardSection::new(
            "**Highlights:**".to_string(),
            kb.achievements.clone(),
        )],
        prompt: "Want to get in touch?".to_string(),
        successor: Topic::Achievements.successor(),
    }
}

// =============================================================================
// Tests
// =============================================================================
