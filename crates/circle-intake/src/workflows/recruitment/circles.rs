use serde::Serialize;

use super::applications::domain::{NonTechnicalCircle, Selectable, TechnicalCircle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleFamily {
    Technical,
    NonTechnical,
}

/// Public detail-page view of a circle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CircleProfile {
    pub slug: &'static str,
    pub name: &'static str,
    pub family: CircleFamily,
    pub summary: &'static str,
    pub question_count: usize,
}

impl TechnicalCircle {
    pub const fn slug(self) -> &'static str {
        match self {
            TechnicalCircle::UiUx => "uiux",
            TechnicalCircle::Frontend => "frontend",
            TechnicalCircle::Backend => "backend",
            TechnicalCircle::Flutter => "flutter",
            TechnicalCircle::DataScience => "data-science",
            TechnicalCircle::ComputerScience => "computer-science",
            TechnicalCircle::BusinessAnalysis => "business-analysis",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            TechnicalCircle::UiUx => {
                "User research, wireframing, and interface design in Figma, from first sketch to usability test."
            }
            TechnicalCircle::Frontend => {
                "Semantic HTML, modern CSS, JavaScript, and React for accessible, responsive web apps."
            }
            TechnicalCircle::Backend => {
                "REST APIs, relational databases, and authentication for the services behind our products."
            }
            TechnicalCircle::Flutter => {
                "Cross-platform mobile apps with Dart and Flutter, shipped with Firebase."
            }
            TechnicalCircle::DataScience => {
                "Python, statistics, and machine learning on real datasets, from cleaning to modelling."
            }
            TechnicalCircle::ComputerScience => {
                "Problem solving, data structures, and algorithms with weekly contest practice."
            }
            TechnicalCircle::BusinessAnalysis => {
                "Requirements, stakeholder workshops, and process modelling that turn ideas into specs."
            }
        }
    }
}

impl NonTechnicalCircle {
    pub const fn slug(self) -> &'static str {
        match self {
            NonTechnicalCircle::HumanResources => "human-resources",
            NonTechnicalCircle::PublicRelations => "pr-fr",
            NonTechnicalCircle::ResearchDevelopment => "research-development",
            NonTechnicalCircle::ProjectManagement => "project-management",
            NonTechnicalCircle::EventOrganizing => "event-organizing",
            NonTechnicalCircle::MediaGraphicDesign => "media-graphic-design",
            NonTechnicalCircle::MediaVideoEditing => "media-video-editing",
            NonTechnicalCircle::MediaPhotography => "media-photography",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            NonTechnicalCircle::HumanResources => {
                "Recruitment, member engagement, and keeping every circle motivated through the season."
            }
            NonTechnicalCircle::PublicRelations => {
                "Partnerships, sponsorships, and fundraising that keep our events running."
            }
            NonTechnicalCircle::ResearchDevelopment => {
                "Researching topics, speakers, and content for sessions and workshops."
            }
            NonTechnicalCircle::ProjectManagement => {
                "Planning, tracking, and unblocking the work of every circle."
            }
            NonTechnicalCircle::EventOrganizing => {
                "Venues, logistics, and on-the-day operations for every event."
            }
            NonTechnicalCircle::MediaGraphicDesign => {
                "Posters, social media visuals, and the organization's visual identity."
            }
            NonTechnicalCircle::MediaVideoEditing => {
                "Event recaps, promos, and podcast episodes from raw footage to final cut."
            }
            NonTechnicalCircle::MediaPhotography => {
                "Event coverage and portraits that tell our story."
            }
        }
    }
}

pub fn circle_profiles() -> Vec<CircleProfile> {
    let technical = TechnicalCircle::ALL.iter().map(|circle| CircleProfile {
        slug: circle.slug(),
        name: circle.label(),
        family: CircleFamily::Technical,
        summary: circle.summary(),
        question_count: circle.required_fields().len(),
    });
    let non_technical = NonTechnicalCircle::ALL.iter().map(|circle| CircleProfile {
        slug: circle.slug(),
        name: circle.label(),
        family: CircleFamily::NonTechnical,
        summary: circle.summary(),
        question_count: circle.required_fields().len(),
    });
    technical.chain(non_technical).collect()
}

pub fn find_circle(slug: &str) -> Option<CircleProfile> {
    circle_profiles()
        .into_iter()
        .find(|profile| profile.slug.eq_ignore_ascii_case(slug.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lists_every_circle_once() {
        let profiles = circle_profiles();
        assert_eq!(profiles.len(), 15);
        let slugs: HashSet<_> = profiles.iter().map(|profile| profile.slug).collect();
        assert_eq!(slugs.len(), 15);
    }

    #[test]
    fn finds_circle_by_slug() {
        let profile = find_circle("Frontend").expect("frontend circle");
        assert_eq!(profile.name, "Frontend");
        assert_eq!(profile.family, CircleFamily::Technical);
        assert_eq!(profile.question_count, 5);

        let profile = find_circle("human-resources").expect("hr circle");
        assert_eq!(profile.name, "HR - Human Resources");
        assert!(find_circle("marketing").is_none());
    }
}
