use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The named sections of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// Scan order for active-section detection. Earlier entries win ties.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Element id of the section in the rendered page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Case-insensitive comparison of a nav label against the section id.
    pub fn matches(self, label: &str) -> bool {
        label.eq_ignore_ascii_case(self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.matches(s))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a section element, half-open: `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// Source of section geometry. `None` means the element is not mounted.
pub trait SectionGeometry {
    fn extent(&self, section: Section) -> Option<SectionExtent>;
}

impl SectionGeometry for HashMap<Section, SectionExtent> {
    fn extent(&self, section: Section) -> Option<SectionExtent> {
        self.get(&section).copied()
    }
}

pub fn probe_position(scroll_y: f64, lookahead: f64) -> f64 {
    scroll_y + lookahead
}

/// First section in [`Section::ALL`] whose extent contains `probe`.
pub fn locate_section<G>(probe: f64, geometry: &G) -> Option<Section>
where
    G: SectionGeometry + ?Sized,
{
    Section::ALL.into_iter().find(|section| {
        geometry
            .extent(*section)
            .is_some_and(|extent| extent.contains(probe))
    })
}

/// Viewport-relative pointer coordinates, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootPhase {
    #[default]
    Booting,
    Ready,
}

/// Session-owned UI state. Each event source writes exactly one field:
/// the scroll tracker `active_section`, the pointer tracker `pointer`,
/// and the boot timer `boot`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewState {
    pub active_section: Section,
    pub pointer: PointerPosition,
    pub boot: BootPhase,
}

impl ViewState {
    pub fn is_ready(&self) -> bool {
        self.boot == BootPhase::Ready
    }

    /// Returns true when the active section changed. A probe outside every
    /// known extent leaves the previous section in place.
    pub fn track_scroll<G>(&mut self, probe: f64, geometry: &G) -> bool
    where
        G: SectionGeometry + ?Sized,
    {
        match locate_section(probe, geometry) {
            Some(section) if section != self.active_section => {
                log::trace!("active section {} -> {}", self.active_section, section);
                self.active_section = section;
                true
            }
            _ => false,
        }
    }

    pub fn track_pointer(&mut self, position: PointerPosition) -> bool {
        let changed = self.pointer != position;
        self.pointer = position;
        changed
    }

    /// The single Booting -> Ready edge. Returns false once already ready.
    pub fn finish_boot(&mut self) -> bool {
        match self.boot {
            BootPhase::Booting => {
                self.boot = BootPhase::Ready;
                true
            }
            BootPhase::Ready => false,
        }
    }
}
