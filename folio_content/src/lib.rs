//! Static site content: biography, stats, work history, skills and
//! testimonials rendered on the portfolio page.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub bio: Vec<&'static str>,
    pub stats: Vec<Stat>,
    pub experiences: Vec<Experience>,
    pub skill_categories: Vec<SkillCategory>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub value: u32,
    pub suffix: Option<&'static str>,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: Vec<Achievement>,
    pub highlights: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub impact: &'static str,
    pub metrics: Vec<&'static str>,
    pub tags: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub proficiency: Proficiency,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Expert,
    Advanced,
    Intermediate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub initials: String,
    pub role: &'static str,
    pub company: &'static str,
    pub relationship: Relationship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Manager,
    Report,
    Peer,
    Colleague,
}

/// Up to two uppercased initials, used as the avatar placeholder.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn stat(value: u32, suffix: Option<&'static str>, label: &'static str, description: &'static str) -> Stat {
    Stat { value, suffix, label, description }
}

fn skill(name: &'static str, proficiency: Proficiency, years: u32) -> Skill {
    Skill { name, proficiency, years }
}

pub fn profile() -> Profile {
    use Proficiency::{Advanced, Expert, Intermediate};

    Profile {
        name: "Robert Robinson",
        title: "Engineering Manager",
        tagline: "Building high-performing teams and delivering innovative solutions \
                  that drive business impact through technical excellence and strategic leadership.",
        description: "Engineering Manager specializing in React, TypeScript, and modern web \
                      technologies. Building scalable applications and leading high-performing teams.",
        email: "rrobinson022@gmail.com",
        bio: vec![
            "With over 16 years of experience in software engineering and technical leadership, \
             I specialize in building high-performing teams that deliver exceptional results. My \
             approach combines hands-on technical expertise with strategic thinking to drive \
             innovation and business impact.",
            "As an Engineering Manager, I've successfully led teams ranging from 8-10 engineers, \
             fostering a culture of growth and excellence. I'm particularly proud of achieving a \
             75% internal promotion rate while scaling our fraud prevention capabilities and \
             increasing feature delivery velocity by 83%.",
            "I believe in servant leadership, continuous learning, and creating environments \
             where engineers thrive. My focus is on empowering teams to take ownership, make \
             data-driven decisions, and deliver solutions that matter to our users and the \
             business.",
        ],
        stats: vec![
            stat(16, Some("+"), "Years Experience", "Software engineering and technical leadership"),
            stat(10, None, "Engineers Managed", "Building and mentoring high-performing teams"),
            stat(75, Some("%"), "Internal Promotions", "Team members promoted under my leadership"),
            stat(83, Some("%"), "Delivery Increase", "Feature delivery velocity improvement"),
            stat(40, Some("%"), "Fraud Reduction", "Reduced fraud through technical solutions"),
            stat(100, Some("%"), "Team Engagement", "Focused on creating thriving environments"),
        ],
        experiences: vec![
            Experience {
                company: "Stamps.com",
                role: "Engineering Manager",
                period: "2016 - 2025",
                location: "El Segundo, CA",
                description: "Led engineering teams in building scalable e-commerce and fraud \
                              prevention systems, driving significant business impact through \
                              technical excellence and team development.",
                achievements: vec![
                    Achievement {
                        title: "Fraud Prevention System Overhaul",
                        challenge: "Legacy fraud detection system was causing high false-positive \
                                    rates, leading to customer friction and revenue loss while \
                                    still missing sophisticated fraud patterns.",
                        solution: "Architected and led implementation of ML-based fraud detection \
                                   system with real-time risk scoring, integrated multiple data \
                                   sources, and built automated rule engine with A/B testing \
                                   framework.",
                        impact: "Reduced fraud by 40% while improving customer experience through \
                                 60% reduction in false positives. System processed 100K+ \
                                 transactions daily with <100ms latency.",
                        metrics: vec!["40% fraud reduction", "60% fewer false positives", "<100ms latency"],
                        tags: vec!["Machine Learning", "Architecture", "Real-time Systems"],
                    },
                    Achievement {
                        title: "Engineering Velocity Transformation",
                        challenge: "Team struggled with long release cycles (6-8 weeks), manual \
                                    testing bottlenecks, and frequent production incidents causing \
                                    customer impact.",
                        solution: "Implemented CI/CD pipeline, established automated testing \
                                   framework (unit, integration, E2E), introduced feature flags \
                                   for safer deployments, and created observability stack with \
                                   proactive monitoring.",
                        impact: "Increased feature delivery by 83%, reduced deployment time from \
                                 days to hours, decreased production incidents by 65% through \
                                 better quality gates.",
                        metrics: vec!["83% delivery increase", "6-8 weeks to hours", "65% fewer incidents"],
                        tags: vec!["DevOps", "CI/CD", "Quality Engineering"],
                    },
                    Achievement {
                        title: "High-Performing Team Development",
                        challenge: "Needed to scale team capabilities while maintaining quality, \
                                    with limited senior engineering talent in the market and high \
                                    cost of external hiring.",
                        solution: "Established comprehensive mentorship program, created career \
                                   development framework with clear progression paths, implemented \
                                   peer code review culture, and fostered psychological safety for \
                                   innovation.",
                        impact: "Achieved 75% internal promotion rate within team, reduced \
                                 time-to-productivity for new hires by 50%, maintained 90%+ team \
                                 retention over 3 years.",
                        metrics: vec!["75% promotion rate", "90%+ retention", "50% faster onboarding"],
                        tags: vec!["Leadership", "Mentorship", "Culture"],
                    },
                    Achievement {
                        title: "Legacy Platform Migration",
                        challenge: "Monolithic legacy system built on outdated technology stack \
                                    created bottlenecks for feature development and scalability, \
                                    with high maintenance costs.",
                        solution: "Led phased migration to microservices architecture, established \
                                   API-first design principles, implemented event-driven patterns \
                                   for system integration, zero-downtime deployment strategy.",
                        impact: "Reduced system coupling enabling 3x faster feature development, \
                                 improved system reliability to 99.9% uptime, decreased \
                                 infrastructure costs by 30% through better resource utilization.",
                        metrics: vec!["3x faster development", "99.9% uptime", "30% cost reduction"],
                        tags: vec!["Microservices", "Architecture", "Migration"],
                    },
                ],
                highlights: vec![],
            },
            Experience {
                company: "Stamps.com",
                role: "Senior Software Developer",
                period: "2009 - 2016",
                location: "El Segundo, CA",
                description: "Built and scaled core e-commerce platform features, focusing on \
                              payment systems, API integrations, and performance optimization.",
                achievements: vec![],
                highlights: vec![
                    "Architected and implemented RESTful API gateway serving 50M+ requests/day",
                    "Optimized database queries reducing page load times by 70%",
                    "Led integration with multiple shipping carrier APIs (USPS, UPS, FedEx)",
                    "Mentored 5+ junior developers through code reviews and pair programming",
                    "Contributed to migration from .NET Framework to modern cloud-native stack",
                ],
            },
            Experience {
                company: "Various Educational Institutions",
                role: "Computer Science Instructor",
                period: "2003 - 2009",
                location: "Southern California",
                description: "Taught programming fundamentals, web development, and database \
                              systems to college students. Developed curriculum and hands-on \
                              projects that prepared students for industry careers.",
                achievements: vec![],
                highlights: vec![
                    "Designed and delivered courses in Java, C++, Web Development, and Database Design",
                    "Maintained 4.5+ average instructor rating across 1000+ students",
                    "Created practical lab exercises bridging academic concepts with real-world applications",
                    "Developed passion for mentorship and technical communication",
                ],
            },
        ],
        skill_categories: vec![
            SkillCategory {
                title: "Leadership & Management",
                description: "Team building, mentorship, and organizational excellence",
                skills: vec![
                    skill("Engineering Leadership", Expert, 9),
                    skill("Team Building & Scaling", Expert, 9),
                    skill("Mentorship & Coaching", Expert, 16),
                    skill("Agile & Scrum", Expert, 12),
                    skill("Technical Strategy", Expert, 9),
                    skill("Project Management", Expert, 12),
                    skill("Stakeholder Communication", Expert, 9),
                    skill("Performance Management", Expert, 9),
                    skill("Hiring & Recruitment", Advanced, 9),
                    skill("Career Development", Expert, 9),
                ],
            },
            SkillCategory {
                title: "Frontend Technologies",
                description: "Modern web development frameworks and tools",
                skills: vec![
                    skill("React", Expert, 8),
                    skill("TypeScript", Expert, 7),
                    skill("JavaScript (ES6+)", Expert, 16),
                    skill("Next.js", Advanced, 3),
                    skill("HTML5 & CSS3", Expert, 16),
                    skill("Tailwind CSS", Advanced, 2),
                    skill("Redux & State Management", Expert, 6),
                    skill("Webpack & Build Tools", Advanced, 7),
                    skill("Responsive Design", Expert, 16),
                    skill("Web Accessibility (a11y)", Advanced, 10),
                ],
            },
            SkillCategory {
                title: "Backend & Architecture",
                description: "Server-side development and system design",
                skills: vec![
                    skill("C# / .NET", Expert, 16),
                    skill("Node.js", Advanced, 6),
                    skill("RESTful APIs", Expert, 12),
                    skill("Microservices Architecture", Expert, 6),
                    skill("SQL Server", Expert, 16),
                    skill("PostgreSQL", Advanced, 5),
                    skill("Redis & Caching", Advanced, 7),
                    skill("Message Queues (RabbitMQ)", Advanced, 5),
                    skill("GraphQL", Intermediate, 2),
                    skill("Entity Framework", Expert, 12),
                ],
            },
            SkillCategory {
                title: "DevOps & Infrastructure",
                description: "Cloud platforms, CI/CD, and deployment automation",
                skills: vec![
                    skill("Azure Cloud", Expert, 8),
                    skill("AWS", Advanced, 4),
                    skill("Docker & Containers", Advanced, 6),
                    skill("Kubernetes", Intermediate, 3),
                    skill("CI/CD Pipelines", Expert, 8),
                    skill("Azure DevOps", Expert, 8),
                    skill("GitHub Actions", Advanced, 3),
                    skill("Infrastructure as Code", Advanced, 5),
                    skill("Monitoring & Observability", Advanced, 7),
                    skill("Application Insights", Advanced, 6),
                ],
            },
            SkillCategory {
                title: "Tools & Platforms",
                description: "Development tools and productivity platforms",
                skills: vec![
                    skill("Git & GitHub", Expert, 12),
                    skill("Visual Studio", Expert, 16),
                    skill("VS Code", Expert, 8),
                    skill("Jira & Confluence", Expert, 10),
                    skill("Postman & API Testing", Expert, 10),
                    skill("ESLint & Code Quality", Advanced, 6),
                    skill("Jest & Testing Frameworks", Advanced, 6),
                    skill("Playwright / Selenium", Advanced, 5),
                    skill("New Relic / DataDog", Advanced, 5),
                    skill("Splunk", Intermediate, 4),
                ],
            },
            SkillCategory {
                title: "E-commerce & Integrations",
                description: "Payment systems and shipping integrations",
                skills: vec![
                    skill("Payment Gateway Integration", Expert, 12),
                    skill("USPS API", Expert, 16),
                    skill("UPS API", Expert, 12),
                    skill("FedEx API", Expert, 12),
                    skill("Fraud Detection Systems", Expert, 9),
                    skill("PCI Compliance", Advanced, 12),
                    skill("E-commerce Platforms", Expert, 16),
                    skill("Shipping Label Generation", Expert, 16),
                    skill("Rate Calculation Engines", Expert, 12),
                    skill("Order Management Systems", Expert, 16),
                ],
            },
        ],
        testimonials: [
            Testimonial {
                quote: "Working with Rob has been one of the most impactful experiences in my \
                        career. As a manager, Rob strikes the perfect balance between strategic \
                        leadership and genuine support. He has an incredible ability to create \
                        clarity in complex situations, communicate expectations effectively, and \
                        empower his team to take ownership. Rob leads with trust and transparency, \
                        which fosters a collaborative and psychologically safe environment. He \
                        doesn't just focus on delivering results; he also ensures his team members \
                        are learning, growing, and aligned with both personal and team goals. Any \
                        team would benefit from his guidance, and I feel fortunate to have had the \
                        chance to work with him.",
                author: "Jayakranthi Katam",
                initials: String::new(),
                role: "Sr. Software Engineer",
                company: "Stamps.com",
                relationship: Relationship::Report,
            },
            Testimonial {
                quote: "I appreciate Rob's ownership of projects and the respect he commands with \
                        his team. He is transparent about issues and communication and is able to \
                        juggle a lot of competing projects. He is always willing to step in and \
                        support for questions or issues. He has done an excellent job on \
                        incorporating the team priorities we set. He has a strong technical grasp \
                        of the platform and can investigate issues along side his team. His team \
                        appreciates his clarity of goals and expectations, providing knowledge and \
                        guidance, and always being a mentor for them and willing to roll up his \
                        sleeves and dive into details. He is patient and positive and brings out \
                        the best with the team.",
                author: "Andi Bunas",
                initials: String::new(),
                role: "Sr. Engineering Manager",
                company: "Stamps.com",
                relationship: Relationship::Manager,
            },
            Testimonial {
                quote: "As a manager, Rob was a strong but fair advocate for his team. He \
                        motivated the group to meet tough timelines, took ownership of multiple \
                        competing priorities, and balanced direction from leadership with the \
                        realities of execution. His communication skills were particularly \
                        effective: he has a talent for bringing together divergent perspectives, \
                        providing clear feedback, and helping teams reach consensus. These \
                        strengths were on full display during one of the largest redesigns Stamps \
                        had undertaken in a decade, where Rob helped align product, design, and \
                        engineering by framing challenges, proposing practical solutions, and \
                        doing so in a straightforward, empathetic way.",
                author: "Sameer Shamsuddin",
                initials: String::new(),
                role: "VP of Engineering",
                company: "Stamps.com",
                relationship: Relationship::Manager,
            },
            Testimonial {
                quote: "Robert consistently demonstrated strong leadership in daily scrums, \
                        helping the team identify and resolve blockers efficiently. His clear \
                        communication, forward-thinking mindset, and ability to keep everyone \
                        aligned on priorities contributed immensely to our project's success.",
                author: "Jakith Priyan",
                initials: String::new(),
                role: "Software Engineer",
                company: "Stamps.com",
                relationship: Relationship::Report,
            },
        ]
        .map(|t| Testimonial { initials: initials(t.author), ..t })
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_are_first_two_uppercased() {
        assert_eq!(initials("Jayakranthi Katam"), "JK");
        assert_eq!(initials("Sameer Shamsuddin"), "SS");
        assert_eq!(initials("prince rogers nelson"), "PR");
        assert_eq!(initials("Cher"), "C");
    }

    #[test]
    fn profile_is_complete() {
        let profile = profile();
        assert_eq!(profile.stats.len(), 6);
        assert_eq!(profile.experiences.len(), 3);
        assert_eq!(profile.skill_categories.len(), 6);
        assert_eq!(profile.testimonials.len(), 4);
        for category in &profile.skill_categories {
            assert_eq!(category.skills.len(), 10);
        }
        for testimonial in &profile.testimonials {
            assert!(!testimonial.initials.is_empty());
        }
    }
}
