//! Right-click context menu for grid cells. Pure state; rendering and
//! event wiring live in `render` and `run`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    ApplyToAll,
    Delete,
}

impl MenuAction {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::ApplyToAll => "Apply to all categories",
            Self::Delete => "Delete category",
        }
    }
}

/// Hidden or visible at a screen position, capturing the cell it was
/// opened on. Opening overwrites any previous state; every close path
/// resets to the hidden default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ContextMenu {
    pub(crate) visible: bool,
    pub(crate) x: u16,
    pub(crate) y: u16,
    /// Target budget id; `None` only in the hidden state.
    pub(crate) row: Option<u64>,
    /// Empty for name cells: apply-to-all needs a month to write to.
    pub(crate) month: String,
    pub(crate) is_name_cell: bool,
    pub(crate) selected: usize,
}

impl ContextMenu {
    pub(crate) fn open(&mut self, x: u16, y: u16, row: u64, month: String, is_name_cell: bool) {
        *self = Self {
            visible: true,
            x,
            y,
            row: Some(row),
            month,
            is_name_cell,
            selected: 0,
        };
    }

    pub(crate) fn close(&mut self) {
        *self = Self::default();
    }

    /// Name cells only offer deletion; amount cells also offer the bulk
    /// apply.
    pub(crate) fn actions(&self) -> &'static [MenuAction] {
        if self.is_name_cell {
            &[MenuAction::Delete]
        } else {
            &[MenuAction::ApplyToAll, MenuAction::Delete]
        }
    }

    pub(crate) fn select_next(&mut self) {
        if self.selected + 1 < self.actions().len() {
            self.selected += 1;
        }
    }

    pub(crate) fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(crate) fn selected_action(&self) -> Option<MenuAction> {
        self.actions().get(self.selected).copied()
    }

    /// Popup size including the border.
    pub(crate) fn size(&self) -> (u16, u16) {
        let width = self
            .actions()
            .iter()
            .map(|a| a.label().len())
            .max()
            .unwrap_or(0) as u16
            + 4;
        let height = self.actions().len() as u16 + 2;
        (width, height)
    }

    pub(crate) fn contains(&self, x: u16, y: u16) -> bool {
        let (w, h) = self.size();
        self.visible && x >= self.x && x < self.x + w && y >= self.y && y < self.y + h
    }

    /// The action line under a screen coordinate, if any.
    pub(crate) fn action_at(&self, x: u16, y: u16) -> Option<MenuAction> {
        if !self.contains(x, y) || y == self.y {
            return None;
        }
        let line = (y - self.y - 1) as usize;
        self.actions().get(line).copied()
    }
}
