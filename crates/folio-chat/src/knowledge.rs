//! The static profile the assistant answers from.
//!
//! All facts live here, separate from the response templates that render
//! them. The structure is immutable for the process lifetime: it is built
//! once by [`KnowledgeBase::builtin`] and only ever read.

/// Contact details for the portfolio owner.
#[derive(Debug, Clone)]
pub struct ContactCard {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
}

/// Education record with ordered highlight strings.
#[derive(Debug, Clone)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub years: String,
    pub highlights: Vec<String>,
}

/// Skills grouped by category. Each list is ordered as it should render.
#[derive(Debug, Clone)]
pub struct SkillSet {
    pub languages: Vec<String>,
    pub backend: Vec<String>,
    pub databases: Vec<String>,
    pub security: Vec<String>,
    pub protocols: Vec<String>,
}

/// A single project within an employment, with its headline metrics.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub details: Vec<String>,
}

/// One employment record.
#[derive(Debug, Clone)]
pub struct Employment {
    pub organization: String,
    pub role: String,
    pub period: String,
    /// Short phrase describing the kind of work, e.g. "building logistics
    /// solutions". Rendered into the employer detail block's opening line.
    pub tagline: String,
    pub projects: Vec<Project>,
    /// Leadership notes; empty when there are none to show.
    pub leadership: Vec<String>,
}

/// Read-only facts about the portfolio owner.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    pub name: String,
    pub title: String,
    pub location: String,
    pub contact: ContactCard,
    pub education: Education,
    pub skills: SkillSet,
    pub current: Employment,
    pub previous: Employment,
    pub achievements: Vec<String>,
    pub availability: String,
}

impl KnowledgeBase {
    /// The built-in profile.
    pub fn builtin() -> Self {
        let strs = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            name: "Bhavy Yadav".to_string(),
            title: "Software Development Engineer".to_string(),
            location: "Delhi, India".to_string(),
            contact: ContactCard {
                email: "yadavbhavy25@gmail.com".to_string(),
                phone: "+91 7303345356".to_string(),
                linkedin: "linkedin.com/in/yadavbhavy".to_string(),
                github: "github.com/Bhavyyadav25".to_string(),
                twitter: "x.com/bhavy_yadav".to_string(),
            },
            education: Education {
                institution: "IIT Delhi".to_string(),
                degree: "B.Tech in Fiber Science & Nanotechnology".to_string(),
                years: "2019-2023".to_string(),
                highlights: strs(&[
                    "Captain of Badminton Team (State Gold Medal winner!)",
                    "Coordinator at Rendezvous (led team of 35)",
                    "Academic Mentor for engineering drawing",
                ]),
            },
            skills: SkillSet {
                languages: strs(&["Go", "Java", "Python", "C++"]),
                backend: strs(&["Microservices", "RESTful APIs", "Kafka", "NGINX", "Docker"]),
                databases: strs(&["PostgreSQL", "ScyllaDB", "Manticore", "Redis"]),
                security: strs(&["ModSecurity", "WAF", "DDoS Protection", "Anti-APT"]),
                protocols: strs(&["GraphQL", "WebSockets", "Unix Sockets", "MQTT", "ICAP"]),
            },
            current: Employment {
                organization: "Clickpost".to_string(),
                role: "Software Development Engineer".to_string(),
                period: "Sep 2025 - Present".to_string(),
                tagline: "building logistics solutions".to_string(),
                projects: vec![
                    Project {
                        name: "Store Master System".to_string(),
                        details: strs(&[
                            "Backend for managing 1000+ stores",
                            "Geolocation validation & real-time updates",
                            "Tech: Java, PostgreSQL",
                        ]),
                    },
                    Project {
                        name: "Serviceability Dashboard".to_string(),
                        details: strs(&[
                            "RESTful APIs for delivery configurations",
                            "Pincode-based serviceability checks",
                        ]),
                    },
                    Project {
                        name: "Shipment Analytics Pipeline".to_string(),
                        details: strs(&[
                            "High-throughput bulk data processing",
                            "Kafka consumers for real-time analytics",
                        ]),
                    },
                    Project {
                        name: "PLP Delivery Options API".to_string(),
                        details: strs(&[
                            "Real-time delivery estimates for e-commerce",
                            "Integration with platforms like ARVIND",
                        ]),
                    },
                ],
                leadership: vec![],
            },
            previous: Employment {
                organization: "WiJungle".to_string(),
                role: "SDE".to_string(),
                period: "Jul 2023 - Apr 2025".to_string(),
                tagline: "building enterprise security solutions".to_string(),
                projects: vec![
                    Project {
                        name: "DDoS Protection System".to_string(),
                        details: strs(&[
                            "35% faster attack detection",
                            "60% reduction in downtime",
                        ]),
                    },
                    Project {
                        name: "Web Application Firewall".to_string(),
                        details: strs(&[
                            "Protected 50+ client websites",
                            "25% fewer security breaches",
                        ]),
                    },
                    Project {
                        name: "Anti-APT System".to_string(),
                        details: strs(&[
                            "65% reduction in advanced threats",
                            "Real-time threat intelligence",
                        ]),
                    },
                    Project {
                        name: "ICAP Server".to_string(),
                        details: strs(&[
                            "Handles 100,000+ daily HTTP/HTTPS requests",
                            "Content filtering & malware scanning",
                        ]),
                    },
                    Project {
                        name: "GraphQL Parser".to_string(),
                        details: strs(&["C++ parser with 40% latency reduction"]),
                    },
                ],
                leadership: strs(&[
                    "Team Lead managing 3 engineers",
                    "Product Owner for WAF project (team of 7)",
                ]),
            },
            achievements: strs(&[
                "Team Lead at WiJungle - Managed 3 engineers",
                "Product Owner - Led WAF project with team of 7",
                "IIT Delhi Badminton Captain - State Gold Medal",
                "National Science Olympiad - Ranked 599 internationally",
                "International Mathematical Olympiad - Top 2.5%",
            ]),
            availability: "open to freelance projects and full-time opportunities".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_two_employments() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.current.organization, "Clickpost");
        assert_eq!(kb.previous.organization, "WiJungle");
    }

    #[test]
    fn test_builtin_projects_are_nonempty() {
        let kb = KnowledgeBase::builtin();
        assert!(!kb.current.projects.is_empty());
        assert!(!kb.previous.projects.is_empty());
        for p in kb.current.projects.iter().chain(kb.previous.projects.iter()) {
            assert!(!p.name.is_empty());
            assert!(!p.details.is_empty());
        }
    }

    #[test]
    fn test_builtin_skill_categories_populated() {
        let kb = KnowledgeBase::builtin();
        assert!(!kb.skills.languages.is_empty());
        assert!(!kb.skills.backend.is_empty());
        assert!(!kb.skills.databases.is_empty());
        assert!(!kb.skills.security.is_empty());
        assert!(!kb.skills.protocols.is_empty());
    }

    #[test]
    fn test_builtin_leadership_only_on_previous() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.current.leadership.is_empty());
        assert_eq!(kb.previous.leadership.len(), 2);
    }

    #[test]
    fn test_builtin_contact_fields() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.contact.email.contains('@'));
        assert!(kb.contact.github.starts_with("github.com/"));
    }
}
