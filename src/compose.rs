//! Pure mapping from view state and content to what the page shows.
//!
//! Nothing here touches the DOM; the Leptos components in `app` render these
//! models as-is.

use rand::Rng;

use crate::content::{Portfolio, SkillCategory};
use crate::view_state::{PointerPosition, Section, ViewState};

pub const SPLASH_MESSAGE: &str = "Initializing Portfolio...";
pub const FOOTER_TAGLINE: &str = "Designed with ♥ and lots of code";

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Splash,
    Page(PageModel),
}

/// The parts of the page that don't depend on scroll or pointer state.
/// Navigation highlighting and the cursor follower are derived separately
/// with [`nav_entries`] and [`cursor_style`] so they can update on their own.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    pub particles: Vec<Particle>,
    pub skills: Vec<SkillBar>,
    pub projects: Vec<ProjectCard>,
    pub timeline: Vec<TimelineEntry>,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub section: Section,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBar {
    pub name: String,
    pub category: SkillCategory,
    pub percentage: String,
    pub width: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub label: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub role: String,
    pub heading: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub width: f64,
    pub height: f64,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            delay: rng.gen_range(0.0..5.0),
            width: rng.gen_range(2.0..12.0),
            height: rng.gen_range(2.0..12.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; width: {:.2}px; height: {:.2}px;",
            self.left, self.top, self.delay, self.width, self.height
        )
    }
}

pub fn compose<R: Rng>(
    state: &ViewState,
    portfolio: &Portfolio,
    year: i32,
    particle_count: usize,
    rng: &mut R,
) -> Screen {
    if !state.is_ready() {
        return Screen::Splash;
    }
    Screen::Page(PageModel {
        particles: (0..particle_count).map(|_| Particle::random(rng)).collect(),
        skills: skill_bars(portfolio),
        projects: project_cards(portfolio),
        timeline: timeline(portfolio),
        copyright: copyright(year),
    })
}

pub fn nav_entries(active: Section) -> Vec<NavEntry> {
    Section::ALL
        .into_iter()
        .map(|section| {
            let label = section.label();
            NavEntry {
                section,
                label,
                href: section.href(),
                active: active.matches(label),
            }
        })
        .collect()
}

pub fn progress_width(level: u8) -> String {
    format!("{}%", level.min(100))
}

pub fn skill_bars(portfolio: &Portfolio) -> Vec<SkillBar> {
    portfolio
        .skills
        .iter()
        .map(|skill| SkillBar {
            name: skill.name.clone(),
            category: skill.category,
            percentage: format!("{}%", skill.level),
            width: progress_width(skill.level),
        })
        .collect()
}

pub fn project_cards(portfolio: &Portfolio) -> Vec<ProjectCard> {
    portfolio
        .projects
        .iter()
        .map(|project| {
            let links = [
                ("GitHub", project.source_url.as_ref()),
                ("Live Demo", project.demo_url.as_ref()),
            ]
            .into_iter()
            .filter_map(|(label, href)| {
                href.map(|href| ProjectLink {
                    label,
                    href: href.clone(),
                })
            })
            .collect();
            ProjectCard {
                id: project.id,
                title: project.title.clone(),
                description: project.description.clone(),
                technologies: project.technologies.clone(),
                links,
            }
        })
        .collect()
}

pub fn timeline(portfolio: &Portfolio) -> Vec<TimelineEntry> {
    portfolio
        .experience
        .iter()
        .map(|exp| TimelineEntry {
            role: exp.role.clone(),
            heading: format!("{} | {}", exp.company, exp.period),
            bullets: exp.accomplishments.clone(),
        })
        .collect()
}

pub fn copyright(year: i32) -> String {
    format!("© {year} Developer Portfolio. All rights reserved.")
}

pub fn cursor_style(pointer: PointerPosition) -> String {
    format!("left: {}px; top: {}px;", pointer.x, pointer.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::content::{ExperienceRecord, ProjectRecord, SkillRecord};
    use crate::view_state::BootPhase;

    fn sample() -> Portfolio {
        Portfolio {
            skills: [0, 50, 100]
                .into_iter()
                .map(|level| SkillRecord {
                    name: format!("skill-{level}"),
                    level,
                    category: SkillCategory::Tools,
                })
                .collect(),
            projects: vec![
                ProjectRecord {
                    id: 7,
                    title: "Both".to_string(),
                    description: "has both links".to_string(),
                    technologies: vec!["Rust".to_string(), "Leptos".to_string()],
                    source_url: Some("https://example.com/src".to_string()),
                    demo_url: Some("https://example.com/demo".to_string()),
                },
                ProjectRecord {
                    id: 8,
                    title: "Demo only".to_string(),
                    description: "no source".to_string(),
                    technologies: vec![],
                    source_url: None,
                    demo_url: Some("#".to_string()),
                },
                ProjectRecord {
                    id: 9,
                    title: "Neither".to_string(),
                    description: "no links".to_string(),
                    technologies: vec![],
                    source_url: None,
                    demo_url: None,
                },
            ],
            experience: vec![
                ExperienceRecord {
                    company: "Later Co".to_string(),
                    role: "Lead".to_string(),
                    period: "2021 - Present".to_string(),
                    accomplishments: vec!["shipped".to_string()],
                },
                ExperienceRecord {
                    company: "Earlier Co".to_string(),
                    role: "Dev".to_string(),
                    period: "2018 - 2021".to_string(),
                    accomplishments: vec!["built".to_string(), "tested".to_string()],
                },
            ],
            ..Portfolio::default()
        }
    }

    fn ready() -> ViewState {
        ViewState {
            boot: BootPhase::Ready,
            ..ViewState::default()
        }
    }

    #[test]
    fn test_booting_renders_only_splash() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = ViewState {
            active_section: Section::Contact,
            pointer: PointerPosition::new(40.0, 50.0),
            boot: BootPhase::Booting,
        };
        assert_eq!(compose(&state, &sample(), 2026, 15, &mut rng), Screen::Splash);
    }

    #[test]
    fn test_ready_renders_page() {
        let mut rng = StdRng::seed_from_u64(1);
        let Screen::Page(page) = compose(&ready(), &sample(), 2026, 15, &mut rng) else {
            panic!("expected the page once ready");
        };
        assert_eq!(page.particles.len(), 15);
        assert_eq!(page.skills.len(), 3);
        assert_eq!(page.projects.len(), 3);
        assert_eq!(page.timeline.len(), 2);
        assert_eq!(page.copyright, "© 2026 Developer Portfolio. All rights reserved.");
    }

    #[test]
    fn test_nav_marks_exactly_one_entry() {
        for active in Section::ALL {
            let nav = nav_entries(active);
            let labels = nav.iter().map(|e| e.label).collect::<Vec<_>>();
            assert_eq!(
                labels,
                ["Home", "About", "Skills", "Projects", "Experience", "Contact"]
            );
            let marked = nav.iter().filter(|e| e.active).collect::<Vec<_>>();
            assert_eq!(marked.len(), 1);
            assert_eq!(marked[0].section, active);
            assert_eq!(marked[0].href, format!("#{}", active.id()));
        }
    }

    #[test]
    fn test_skill_width_matches_level() {
        let bars = skill_bars(&sample());
        let widths = bars.iter().map(|b| b.width.as_str()).collect::<Vec<_>>();
        assert_eq!(widths, ["0%", "50%", "100%"]);
        assert_eq!(bars[1].percentage, "50%");
    }

    #[test]
    fn test_project_links_only_when_present() {
        let cards = project_cards(&sample());
        let labels = |card: &ProjectCard| card.links.iter().map(|l| l.label).collect::<Vec<_>>();
        assert_eq!(labels(&cards[0]), ["GitHub", "Live Demo"]);
        assert_eq!(labels(&cards[1]), ["Live Demo"]);
        assert!(cards[2].links.is_empty());
        assert_eq!(cards[0].links[0].href, "https://example.com/src");
        assert_eq!(cards[0].technologies, ["Rust", "Leptos"]);
    }

    #[test]
    fn test_timeline_keeps_list_order() {
        let entries = timeline(&sample());
        assert_eq!(entries[0].role, "Lead");
        assert_eq!(entries[0].heading, "Later Co | 2021 - Present");
        assert_eq!(entries[1].heading, "Earlier Co | 2018 - 2021");
        assert_eq!(entries[1].bullets, ["built", "tested"]);
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let p = Particle::random(&mut rng);
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.0..5.0).contains(&p.delay));
            assert!((2.0..12.0).contains(&p.width));
            assert!((2.0..12.0).contains(&p.height));
            assert!(p.style().starts_with("left: "));
        }
    }

    #[test]
    fn test_cursor_style_is_unclamped() {
        assert_eq!(
            cursor_style(PointerPosition::new(-5.0, 1200.5)),
            "left: -5px; top: 1200.5px;"
        );
    }
}
