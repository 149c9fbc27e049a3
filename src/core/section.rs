//! # Section Registry
//!
//! The fixed set of navigable sections, their nav links and the activation
//! table. Only the navigation controller mutates visibility.

use std::fmt;
use std::str::FromStr;

use crate::core::nav::NavigationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Certs,
    Contact,
}

/// Something to (re)start when a section becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    StatCounters,
    TerminalReplay,
    RadarChart,
    SkillBars,
    CertBars,
}

impl SectionId {
    /// Nav order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Certs,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Certs => "certs",
            SectionId::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Certs => "Certifications",
            SectionId::Contact => "Contact",
        }
    }

    /// Activations fired, in this order, whenever the section is shown.
    pub fn activations(self) -> &'static [Activation] {
        match self {
            SectionId::Hero => &[Activation::StatCounters],
            SectionId::About => &[Activation::TerminalReplay, Activation::RadarChart],
            SectionId::Skills => &[Activation::SkillBars],
            SectionId::Certs => &[Activation::CertBars],
            SectionId::Projects | SectionId::Contact => &[],
        }
    }

    pub fn position(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    pub fn next(self) -> SectionId {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> SectionId {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| NavigationError::UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub target: SectionId,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<Section>,
    links: Vec<NavLink>,
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRegistry {
    /// Every section hidden, every link inactive.
    pub fn new() -> Self {
        Self {
            sections: SectionId::ALL
                .into_iter()
                .map(|id| Section { id, visible: false })
                .collect(),
            links: SectionId::ALL
                .into_iter()
                .map(|target| NavLink {
                    target,
                    active: false,
                })
                .collect(),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn visible(&self) -> Option<SectionId> {
        self.sections.iter().find(|s| s.visible).map(|s| s.id)
    }

    pub fn visible_count(&self) -> usize {
        self.sections.iter().filter(|s| s.visible).count()
    }

    pub fn is_visible(&self, id: SectionId) -> bool {
        self.visible() == Some(id)
    }

    /// Show `id` and highlight its links; hide and unhighlight everything else.
    pub(crate) fn show(&mut self, id: SectionId) {
        for section in self.sections.iter_mut() {
            section.visible = section.id == id;
        }
        for link in self.links.iter_mut() {
            link.active = link.target == id;
        }
    }
}
