use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Navigation pane bounds while expanded, in percent of the window width.
pub const NAV_MIN_SIZE: u16 = 15;
pub const NAV_MAX_SIZE: u16 = 20;
/// Ratio recorded for the navigation pane while collapsed.
pub const NAV_COLLAPSED_SIZE: u16 = 4;
/// Lower bounds for the other two panes, in percent.
pub const LIST_MIN_SIZE: u16 = 30;
pub const READER_MIN_SIZE: u16 = 20;
/// Columns the icon rail occupies on screen when collapsed.
pub const NAV_RAIL_WIDTH: u16 = 6;

pub const DEFAULT_RATIOS: [u16; 3] = [20, 32, 48];

/// Pane sizing and the collapse state machine.
///
/// The three ratios are percentages summing to 100. A resize event reporting
/// the navigation pane at the rail threshold sets `collapsed`; any enlarging
/// event clears it and lands inside the expanded bounds. The list/reader
/// split is kept as a fraction of the space right of the navigation pane, so
/// the layout after a run of navigation resizes depends only on the last one.
#[derive(Debug, Clone)]
pub struct PaneLayout {
    ratios: [u16; 3],
    collapsed: bool,
    collapsed_size: u16,
    list_share: f32,
}

impl PaneLayout {
    pub fn new(ratios: [u16; 3], collapsed: bool, collapsed_size: u16) -> Self {
        let ratios = if ratios.iter().sum::<u16>() == 100 {
            ratios
        } else {
            DEFAULT_RATIOS
        };
        let collapsed_size = collapsed_size.clamp(1, NAV_MIN_SIZE - 1);
        let rest = 100 - ratios[0];
        let mut layout = Self {
            ratios,
            collapsed,
            collapsed_size,
            list_share: ratios[1] as f32 / rest as f32,
        };

        // Normalize the stored ratios to the declared collapse state.
        if collapsed {
            layout.set_nav(collapsed_size);
        } else {
            layout.set_nav(ratios[0].clamp(NAV_MIN_SIZE, NAV_MAX_SIZE));
        }
        layout
    }

    pub fn ratios(&self) -> [u16; 3] {
        self.ratios
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Apply a navigation pane resize event.
    ///
    /// `target` is the reported pane size in percent. At or below the rail
    /// threshold the pane collapses; any larger target expands it, clamped
    /// inside [NAV_MIN_SIZE, NAV_MAX_SIZE]. The outcome depends only on
    /// `target`, so a run of events always ends in the state the last one
    /// dictates.
    pub fn resize_nav(&mut self, target: u16) {
        if target <= self.collapsed_size {
            self.collapsed = true;
            self.set_nav(self.collapsed_size);
        } else {
            self.collapsed = false;
            self.set_nav(target.clamp(NAV_MIN_SIZE, NAV_MAX_SIZE));
        }
    }

    /// Step the navigation pane one percent narrower. Shrinking past the
    /// expanded minimum snaps to the rail.
    pub fn shrink_nav(&mut self) {
        if self.collapsed {
            return;
        }
        if self.ratios[0] <= NAV_MIN_SIZE {
            self.resize_nav(self.collapsed_size);
        } else {
            self.resize_nav(self.ratios[0] - 1);
        }
    }

    /// Step the navigation pane one percent wider. Growing a collapsed
    /// rail expands it back to the minimum size.
    pub fn grow_nav(&mut self) {
        if self.collapsed {
            self.resize_nav(NAV_MIN_SIZE);
        } else {
            self.resize_nav(self.ratios[0] + 1);
        }
    }

    pub fn toggle_nav(&mut self) {
        if self.collapsed {
            self.resize_nav(NAV_MIN_SIZE);
        } else {
            self.resize_nav(self.collapsed_size);
        }
    }

    /// Move the list/reader boundary: `target` is the list size in percent.
    pub fn resize_list(&mut self, target: u16) {
        let rest = 100 - self.ratios[0];
        let list = target.clamp(LIST_MIN_SIZE, rest - READER_MIN_SIZE);
        self.list_share = list as f32 / rest as f32;
        self.ratios[1] = list;
        self.ratios[2] = rest - list;
    }

    pub fn shrink_list(&mut self) {
        self.resize_list(self.ratios[1].saturating_sub(1));
    }

    pub fn grow_list(&mut self) {
        self.resize_list(self.ratios[1] + 1);
    }

    /// Split the window into [nav, list, reader, status bar] rects.
    pub fn calculate_layout(&self, area: Rect) -> Vec<Rect> {
        // Reserve a single row for the status bar.
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let main_area = vertical_chunks[0];

        let nav_constraint = if self.collapsed {
            Constraint::Length(NAV_RAIL_WIDTH)
        } else {
            Constraint::Percentage(self.ratios[0])
        };

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                nav_constraint,
                Constraint::Percentage(self.ratios[1]),
                Constraint::Min(20),
            ])
            .split(main_area);

        let mut all_chunks = horizontal_chunks.to_vec();
        all_chunks.push(vertical_chunks[1]);
        all_chunks
    }

    /// Re-derive the remaining panes from [`Self::list_share`] after the
    /// navigation pane changed size.
    fn set_nav(&mut self, nav: u16) {
        self.ratios[0] = nav;
        let rest = 100 - nav;
        let list = ((rest as f32 * self.list_share).round() as u16)
            .clamp(LIST_MIN_SIZE, rest - READER_MIN_SIZE);
        self.ratios[1] = list;
        self.ratios[2] = rest - list;
    }
}

impl Default for PaneLayout {
    fn default() -> Self {
        Self::new(DEFAULT_RATIOS, false, NAV_COLLAPSED_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_ratios() {
        let layout = PaneLayout::default();
        assert_eq!(layout.ratios(), DEFAULT_RATIOS);
        assert!(!layout.is_collapsed());
    }

    #[test]
    fn test_new_rejects_ratios_not_summing_to_100() {
        let layout = PaneLayout::new([10, 10, 10], false, NAV_COLLAPSED_SIZE);
        assert_eq!(layout.ratios(), DEFAULT_RATIOS);
    }

    #[test]
    fn test_new_normalizes_inconsistent_collapse_flag() {
        let layout = PaneLayout::new([20, 32, 48], true, NAV_COLLAPSED_SIZE);
        assert!(layout.is_collapsed());
        assert_eq!(layout.ratios()[0], NAV_COLLAPSED_SIZE);
        assert_eq!(layout.ratios().iter().sum::<u16>(), 100);
    }

    #[test]
    fn test_calculate_layout_returns_four_rects() {
        let layout = PaneLayout::default();
        let chunks = layout.calculate_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(chunks.len(), 4);
        // Status bar occupies the final row.
        assert_eq!(chunks[3].height, 1);
        assert_eq!(chunks[3].y, 39);
    }

    #[test]
    fn test_collapsed_layout_uses_rail_width() {
        let mut layout = PaneLayout::default();
        layout.toggle_nav();
        let chunks = layout.calculate_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(chunks[0].width, NAV_RAIL_WIDTH);
    }
}
