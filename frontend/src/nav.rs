use crate::config;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Waitlist,
    Features,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Waitlist, Section::Features, Section::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Section::Waitlist => "waitlist",
            Section::Features => "features",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Waitlist => "Get Early Access",
            Section::Features => "Features",
            Section::Contact => "Contact Us",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Scroll target for a section whose top edge sits at `section_top`.
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - config::HEADER_OFFSET
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navigator {
    drawer_open: bool,
    active: Option<Section>,
}

impl Navigator {
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn active(&self) -> Option<Section> {
        self.active
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Scrolls to `section` and closes the drawer. Returns false, changing
    /// nothing, when the section isn't on the page.
    pub fn go_to(&mut self, section: Section, viewport: &impl Viewport) -> bool {
        let Some(top) = viewport.section_top(section.id()) else {
            log::warn!("No element with id #{} to scroll to", section.id());
            return false;
        };

        self.active = Some(section);
        viewport.scroll_to(scroll_target(top));
        self.drawer_open = false;
        true
    }

    /// Body scrolling is frozen while the drawer covers the page.
    pub fn apply_scroll_lock(&self, viewport: &impl Viewport) {
        viewport.lock_scroll(self.drawer_open);
    }

    pub fn scroll_to_top(viewport: &impl Viewport) {
        viewport.scroll_to(0.0);
    }
}
