use std::str::FromStr;

use ratatui::layout::Rect;
use rust_decimal::Decimal;

use crate::grid::{filter_digits, GridNav, NavKey};
use crate::models::BudgetKind;
use crate::store::BudgetStore;
use crate::ui::menu::{ContextMenu, MenuAction};
use crate::ui::util::ensure_visible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Editing,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Editing => write!(f, "EDIT"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

/// One editable grid row, pointing back into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RowRef {
    pub(crate) id: u64,
    pub(crate) kind: BudgetKind,
    pub(crate) parent_id: Option<u64>,
}

impl RowRef {
    pub(crate) fn is_child(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Body lines of the sheet in display order. Only `Category` lines hold
/// editable cells; the rest are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DisplayRow {
    /// Index into `App::rows`.
    Category(usize),
    /// Root id; emitted after the children of roots that have any.
    SubTotal(u64),
    SectionTotal(BudgetKind),
    ProfitLoss,
    OpeningBalance,
    ClosingBalance,
}

/// Cell geometry of the last rendered frame. Col 0 is the frozen name
/// column; col n >= 1 is month n-1.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SheetLayout {
    /// Inner sheet area, inside the block border.
    pub(crate) area: Rect,
    pub(crate) name_width: u16,
    pub(crate) col_width: u16,
    pub(crate) first_line: usize,
    pub(crate) visible_lines: usize,
    pub(crate) first_month: usize,
    pub(crate) visible_months: usize,
}

impl SheetLayout {
    pub(crate) fn cell_rect(&self, line: usize, col: usize) -> Option<Rect> {
        if line < self.first_line || line >= self.first_line + self.visible_lines {
            return None;
        }
        let y = self.area.y + 1 + (line - self.first_line) as u16;

        if col == 0 {
            return Some(Rect::new(self.area.x, y, self.name_width, 1));
        }
        let month = col - 1;
        if month < self.first_month || month >= self.first_month + self.visible_months {
            return None;
        }
        let x = self.area.x + self.name_width + (month - self.first_month) as u16 * self.col_width;
        Some(Rect::new(x, y, self.col_width, 1))
    }

    /// Body line and grid column under a screen coordinate. The header
    /// line and anything outside the cell grid map to nothing.
    pub(crate) fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        if y <= self.area.y || x < self.area.x {
            return None;
        }
        let line_offset = (y - self.area.y - 1) as usize;
        if line_offset >= self.visible_lines {
            return None;
        }
        let line = self.first_line + line_offset;

        if x < self.area.x + self.name_width {
            return Some((line, 0));
        }
        let month_offset = ((x - self.area.x - self.name_width) / self.col_width.max(1)) as usize;
        if month_offset >= self.visible_months {
            return None;
        }
        Some((line, self.first_month + month_offset + 1))
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) store: BudgetStore,
    pub(crate) grid: GridNav,
    pub(crate) menu: ContextMenu,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) edit_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Derived from the store; rebuilt whenever its revision moves.
    pub(crate) months: Vec<String>,
    pub(crate) rows: Vec<RowRef>,
    pub(crate) display: Vec<DisplayRow>,

    // Viewport (updated each render frame)
    pub(crate) row_scroll: usize,
    pub(crate) col_scroll: usize,
    pub(crate) layout: SheetLayout,

    seen_revision: Option<u64>,
}

impl App {
    pub(crate) fn new() -> Self {
        let mut app = Self {
            running: true,
            store: BudgetStore::new(),
            grid: GridNav::new(),
            menu: ContextMenu::default(),
            input_mode: InputMode::Normal,
            command_input: String::new(),
            edit_input: String::new(),
            status_message: String::new(),
            show_help: false,
            months: Vec::new(),
            rows: Vec::new(),
            display: Vec::new(),
            row_scroll: 0,
            col_scroll: 0,
            layout: SheetLayout::default(),
            seen_revision: None,
        };
        app.sync();
        app
    }

    /// The store observer: when the revision moved, rebuild the derived
    /// month/row lists and tell the grid its shape changed (which also
    /// resolves a pending Enter continuation).
    pub(crate) fn sync(&mut self) {
        if self.seen_revision == Some(self.store.revision()) {
            return;
        }
        self.rebuild();
        self.grid.rows_changed(self.rows.len(), self.months.len() + 1);
        self.seen_revision = Some(self.store.revision());
    }

    fn rebuild(&mut self) {
        self.months = self.store.months();
        self.rows.clear();
        self.display.clear();

        let sections = [
            (BudgetKind::Income, self.store.income_budgets()),
            (BudgetKind::Expense, self.store.expense_budgets()),
        ];
        for (kind, roots) in sections {
            for root in roots {
                self.display.push(DisplayRow::Category(self.rows.len()));
                self.rows.push(RowRef {
                    id: root.id,
                    kind,
                    parent_id: None,
                });
                for child in &root.children {
                    self.display.push(DisplayRow::Category(self.rows.len()));
                    self.rows.push(RowRef {
                        id: child.id,
                        kind,
                        parent_id: Some(root.id),
                    });
                }
                if !root.children.is_empty() {
                    self.display.push(DisplayRow::SubTotal(root.id));
                }
            }
            self.display.push(DisplayRow::SectionTotal(kind));
        }
        self.display.push(DisplayRow::ProfitLoss);
        self.display.push(DisplayRow::OpeningBalance);
        self.display.push(DisplayRow::ClosingBalance);
    }

    /// Recompute the viewport for this frame and keep the focused cell in
    /// view. `area` is the sheet's outer rectangle including the border.
    pub(crate) fn update_layout(&mut self, area: Rect) {
        let inner = Rect::new(
            area.x + 1,
            area.y + 1,
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );
        let name_width = 20.min(inner.width);
        let col_width: u16 = 12;
        let visible_lines = inner.height.saturating_sub(1) as usize;
        let month_space = inner.width.saturating_sub(name_width);
        let visible_months = ((month_space / col_width) as usize).min(self.months.len());

        if let Some(pos) = self.grid.focus() {
            if let Some(line) = self.display_line_of(pos.row) {
                ensure_visible(&mut self.row_scroll, line, visible_lines);
            }
            if pos.col >= 1 {
                ensure_visible(&mut self.col_scroll, pos.col - 1, visible_months);
            }
        }
        self.row_scroll = self.row_scroll.min(self.display.len().saturating_sub(visible_lines));
        self.col_scroll = self.col_scroll.min(self.months.len().saturating_sub(visible_months));

        self.layout = SheetLayout {
            area: inner,
            name_width,
            col_width,
            first_line: self.row_scroll,
            visible_lines,
            first_month: self.col_scroll,
            visible_months,
        };
    }

    // ── Focus helpers ────────────────────────────────────────

    pub(crate) fn focused_row(&self) -> Option<RowRef> {
        self.grid.focus().and_then(|pos| self.rows.get(pos.row).copied())
    }

    pub(crate) fn focused_month(&self) -> Option<&str> {
        let pos = self.grid.focus()?;
        if pos.col == 0 {
            return None;
        }
        self.months.get(pos.col - 1).map(String::as_str)
    }

    pub(crate) fn display_line_of(&self, grid_row: usize) -> Option<usize> {
        self.display
            .iter()
            .position(|line| matches!(line, DisplayRow::Category(row) if *row == grid_row))
    }

    fn is_last_of_section(&self, row: usize) -> bool {
        match self.rows.get(row) {
            Some(current) => self
                .rows
                .get(row + 1)
                .is_none_or(|next| next.kind != current.kind),
            None => false,
        }
    }

    // ── Editing ──────────────────────────────────────────────

    /// Start editing the focused cell. A `seed` char starts a fresh value
    /// (spreadsheet-style typing); without one the cell's current content
    /// is loaded.
    pub(crate) fn begin_edit(&mut self, seed: Option<char>) {
        let Some(pos) = self.grid.focus() else { return };
        let Some(row) = self.rows.get(pos.row) else { return };
        let Some(budget) = self.store.find(row.id) else { return };

        self.edit_input = match (pos.col, seed) {
            (0, None) => budget.name.clone(),
            (0, Some(c)) => c.to_string(),
            (_, None) => self
                .months
                .get(pos.col - 1)
                .and_then(|m| budget.amounts.get(m))
                .map(|v| format!("{v:.0}"))
                .unwrap_or_default(),
            (_, Some(c)) => {
                let filtered = filter_digits(&c.to_string());
                if filtered.value.is_empty() {
                    return;
                }
                filtered.value
            }
        };
        self.input_mode = InputMode::Editing;
    }

    /// Feed one typed char into the edit buffer. Amount cells run through
    /// the digit filter: a stripped char changes nothing and the event
    /// goes no further.
    pub(crate) fn edit_char(&mut self, c: char) {
        let is_amount = self.grid.focus().is_some_and(|pos| pos.col > 0);
        if is_amount {
            let mut candidate = self.edit_input.clone();
            candidate.push(c);
            self.edit_input = filter_digits(&candidate).value;
        } else {
            self.edit_input.push(c);
        }
    }

    /// Write the edit buffer back into the store. An empty amount clears
    /// the month; a value the decimal type cannot hold leaves the cell
    /// untouched.
    pub(crate) fn commit_edit(&mut self) {
        if let Some(pos) = self.grid.focus() {
            if let Some(row) = self.rows.get(pos.row).copied() {
                if pos.col == 0 {
                    self.store.set_name(row.id, self.edit_input.trim());
                } else if let Some(month) = self.months.get(pos.col - 1).cloned() {
                    if self.edit_input.is_empty() {
                        self.store.set_amount(row.id, &month, None);
                    } else if let Ok(value) = Decimal::from_str(&self.edit_input) {
                        self.store.set_amount(row.id, &month, Some(value));
                    }
                }
            }
        }
        self.edit_input.clear();
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn cancel_edit(&mut self) {
        self.edit_input.clear();
        self.input_mode = InputMode::Normal;
    }

    // ── Navigation actions ───────────────────────────────────

    /// Enter on the last row of a section starts a new category there and
    /// defers the move until the inserted row exists; everywhere else it
    /// just moves down.
    pub(crate) fn enter_pressed(&mut self) {
        if let Some(pos) = self.grid.focus() {
            if self.is_last_of_section(pos.row) {
                let kind = self.rows[pos.row].kind;
                self.grid.arm_row_wait();
                self.store.add_budget(kind, None);
                return;
            }
        }
        self.grid.step(NavKey::Enter);
    }

    pub(crate) fn add_category(&mut self, kind: BudgetKind) {
        self.store.add_budget(kind, None);
        self.set_status(format!("Added {} category", kind.as_str().to_lowercase()));
    }

    /// Add a sub-category under the focused row's root.
    pub(crate) fn add_subcategory(&mut self) {
        let Some(row) = self.focused_row() else {
            self.set_status("No row selected");
            return;
        };
        let parent = row.parent_id.unwrap_or(row.id);
        self.store.add_budget(row.kind, Some(parent));
        self.set_status("Added sub-category");
    }

    // ── Context menu ─────────────────────────────────────────

    /// Open the menu just below the focused cell, capturing its row and
    /// month. Opening tears down a pending Enter continuation.
    pub(crate) fn open_menu_at_focus(&mut self) {
        let Some(pos) = self.grid.focus() else { return };
        let Some(row) = self.rows.get(pos.row).copied() else { return };
        let Some(line) = self.display_line_of(pos.row) else { return };
        let Some(rect) = self.layout.cell_rect(line, pos.col) else { return };

        let month = if pos.col == 0 {
            String::new()
        } else {
            self.months.get(pos.col - 1).cloned().unwrap_or_default()
        };
        self.grid.cancel_row_wait();
        self.menu
            .open(rect.x, rect.y + rect.height, row.id, month, pos.col == 0);

        // Keep the popup inside the sheet horizontally so its hit box
        // matches what gets drawn.
        let (width, _) = self.menu.size();
        let right_edge = (self.layout.area.x + self.layout.area.width).saturating_sub(width);
        self.menu.x = self.menu.x.min(right_edge);
    }

    /// Run a menu action against the captured cell. Missing row or month
    /// degrades to just closing the menu.
    pub(crate) fn menu_execute(&mut self, action: MenuAction) {
        match action {
            MenuAction::ApplyToAll => {
                if let Some(id) = self.menu.row {
                    if !self.menu.month.is_empty() {
                        let month = self.menu.month.clone();
                        self.store.apply_to_all(id, &month);
                    }
                }
            }
            MenuAction::Delete => {
                if let Some(id) = self.menu.row {
                    self.store.delete_budget(id);
                }
            }
        }
        self.menu.close();
    }

    /// Focus the category cell under a mouse position, if there is one.
    pub(crate) fn focus_cell_at(&mut self, x: u16, y: u16) -> bool {
        if let Some((line, col)) = self.layout.cell_at(x, y) {
            if let Some(DisplayRow::Category(row)) = self.display.get(line).copied() {
                self.grid.set_focus(row, col);
                return true;
            }
        }
        false
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
