//! Navigation state: active section link, mobile menu, navbar elevation.

/// Sections start counting as active this far before their top edge
pub const ACTIVE_SECTION_BIAS_PX: f64 = 100.0;
/// Scroll offset past which the navbar is drawn elevated
pub const ELEVATION_THRESHOLD_PX: f64 = 100.0;

/// Vertical extent of one `section[id]`
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Section containing `scroll_y`. When ranges overlap the last one wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.top - ACTIVE_SECTION_BIAS_PX;
            scroll_y > top && scroll_y <= top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    menu_open: bool,
    active: Option<String>,
    elevated: bool,
}

impl NavState {
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a link always closes the menu
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active.as_deref() == Some(section_id)
    }

    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    /// Recompute scroll-derived state. With no matching section the
    /// previous link stays active.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) {
        self.elevated = scroll_y > ELEVATION_THRESHOLD_PX;
        if let Some(id) = active_section(scroll_y, sections) {
            if !self.is_active(id) {
                self.active = Some(id.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [("home", 0.0, 600.0), ("about", 600.0, 500.0), ("projects", 1100.0, 900.0)]
            .iter()
            .map(|(id, top, height)| SectionBounds { id: id.to_string(), top: *top, height: *height })
            .collect()
    }

    #[test]
    fn test_bias_triggers_early() {
        let s = sections();
        assert_eq!(active_section(450.0, &s), Some("home"));
        // 100px before "about" starts
        assert_eq!(active_section(501.0, &s), Some("about"));
        assert_eq!(active_section(1001.0, &s), Some("projects"));
    }

    #[test]
    fn test_outside_all_sections() {
        let s = sections();
        assert_eq!(active_section(5000.0, &s), None);
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn test_at_most_one_active_and_sticky() {
        let s = sections();
        let mut nav = NavState::default();
        nav.on_scroll(700.0, &s);
        let active: Vec<_> = s.iter().filter(|sec| nav.is_active(&sec.id)).collect();
        assert_eq!(active.len(), 1);
        assert!(nav.is_active("about"));

        nav.on_scroll(9000.0, &s);
        assert!(nav.is_active("about"));
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.close_menu();
        assert!(!nav.is_menu_open());
        nav.close_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_elevation() {
        let mut nav = NavState::default();
        nav.on_scroll(100.0, &[]);
        assert!(!nav.is_elevated());
        nav.on_scroll(101.0, &[]);
        assert!(nav.is_elevated());
    }
}
