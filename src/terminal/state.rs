use ratatui::widgets::ListState;

/// Compose field that currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeFocus {
    #[default]
    Recipients,
    Subject,
    Body,
}

impl ComposeFocus {
    pub fn next(self) -> Self {
        match self {
            ComposeFocus::Recipients => ComposeFocus::Subject,
            ComposeFocus::Subject => ComposeFocus::Body,
            ComposeFocus::Body => ComposeFocus::Recipients,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ComposeFocus::Recipients => ComposeFocus::Body,
            ComposeFocus::Subject => ComposeFocus::Recipients,
            ComposeFocus::Body => ComposeFocus::Subject,
        }
    }
}

/// Presentation-only state: cursor position in listings, detail scroll,
/// focused compose field. Owns no mail data.
#[derive(Debug, Default)]
pub struct TuiState {
    pub list_state: ListState,
    pub body_scroll: u16,
    pub focus: ComposeFocus,
}

impl TuiState {
    /// Called after the controller replaced the listing: select the first
    /// row (or nothing) and rewind scroll and focus.
    pub fn sync_after_dispatch(&mut self, listing_len: usize) {
        self.list_state
            .select(if listing_len == 0 { None } else { Some(0) });
        self.body_scroll = 0;
        self.focus = ComposeFocus::default();
    }

    pub fn move_selection(&mut self, listing_len: usize, delta: i32) {
        if listing_len == 0 {
            self.list_state.select(None);
            return;
        }
        let cur = self.list_state.selected().unwrap_or(0) as i32;
        let next = (cur + delta).clamp(0, listing_len as i32 - 1) as usize;
        self.list_state.select(Some(next));
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn scroll_body(&mut self, delta: i32) {
        if delta < 0 {
            self.body_scroll = self.body_scroll.saturating_sub((-delta) as u16);
        } else {
            self.body_scroll = self.body_scroll.saturating_add(delta as u16);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_clamps_to_listing_bounds() {
        let mut tui = TuiState::default();
        tui.sync_after_dispatch(3);
        assert_eq!(tui.selected(), Some(0));

        tui.move_selection(3, -1);
        assert_eq!(tui.selected(), Some(0));

        tui.move_selection(3, 10);
        assert_eq!(tui.selected(), Some(2));
    }

    #[test]
    fn empty_listing_clears_selection() {
        let mut tui = TuiState::default();
        tui.sync_after_dispatch(3);
        tui.sync_after_dispatch(0);
        assert_eq!(tui.selected(), None);

        tui.move_selection(0, 1);
        assert_eq!(tui.selected(), None);
    }

    #[test]
    fn focus_cycles_through_the_three_fields() {
        let f = ComposeFocus::default();
        assert_eq!(f.next().next().next(), f);
        assert_eq!(f.prev(), ComposeFocus::Body);
    }
}
