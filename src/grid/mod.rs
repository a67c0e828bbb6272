//! Cell-to-cell navigation over the editable rows of the sheet, modeled as
//! a pure row-count x column-count grid so none of it touches the terminal.

mod filter;

pub(crate) use filter::filter_digits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GridPos {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Tab,
    Enter,
}

/// One-shot continuation for an Enter whose side effect inserts a row: the
/// target row is recomputed only after the row list has changed, against
/// the post-insertion list.
#[derive(Debug, Clone, Copy)]
struct PendingMove {
    from: GridPos,
}

#[derive(Debug)]
pub(crate) struct GridNav {
    rows: usize,
    cols: usize,
    focus: Option<GridPos>,
    pending: Option<PendingMove>,
}

impl GridNav {
    pub(crate) fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            focus: None,
            pending: None,
        }
    }

    pub(crate) fn focus(&self) -> Option<GridPos> {
        self.focus
    }

    /// Clamp into range; ignored on an empty grid.
    pub(crate) fn set_focus(&mut self, row: usize, col: usize) {
        if self.rows == 0 || self.cols == 0 {
            self.focus = None;
            return;
        }
        self.focus = Some(GridPos {
            row: row.min(self.rows - 1),
            col: col.min(self.cols - 1),
        });
    }

    /// Move one cell. Out-of-range moves are no-ops, except Tab/Right at
    /// the last column, which wrap to the first cell of the next row.
    /// Returns whether focus moved.
    pub(crate) fn step(&mut self, key: NavKey) -> bool {
        let Some(pos) = self.focus else {
            return false;
        };

        let target = match key {
            NavKey::Up => pos.row.checked_sub(1).map(|row| GridPos { row, col: pos.col }),
            NavKey::Down | NavKey::Enter => {
                (pos.row + 1 < self.rows).then(|| GridPos { row: pos.row + 1, col: pos.col })
            }
            NavKey::Left => pos.col.checked_sub(1).map(|col| GridPos { row: pos.row, col }),
            NavKey::Right | NavKey::Tab => {
                if pos.col + 1 < self.cols {
                    Some(GridPos { row: pos.row, col: pos.col + 1 })
                } else if pos.row + 1 < self.rows {
                    Some(GridPos { row: pos.row + 1, col: 0 })
                } else {
                    None
                }
            }
        };

        match target {
            Some(target) => {
                self.focus = Some(target);
                true
            }
            None => false,
        }
    }

    /// Arm the insertion continuation for the focused cell. The next
    /// `rows_changed` resolves it; anything else should `cancel_row_wait`.
    pub(crate) fn arm_row_wait(&mut self) {
        self.pending = self.focus.map(|from| PendingMove { from });
    }

    #[cfg(test)]
    pub(crate) fn row_wait_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn cancel_row_wait(&mut self) {
        self.pending = None;
    }

    /// The structural-change notification: adopt the new shape, resolve an
    /// armed continuation (once), and otherwise just keep focus in range.
    /// Returns whether focus moved to the continuation's target.
    pub(crate) fn rows_changed(&mut self, rows: usize, cols: usize) -> bool {
        self.rows = rows;
        self.cols = cols;

        if rows == 0 || cols == 0 {
            self.focus = None;
            self.pending = None;
            return false;
        }

        if let Some(pending) = self.pending.take() {
            let target = pending.from.row + 1;
            if target < rows {
                self.focus = Some(GridPos {
                    row: target,
                    col: pending.from.col.min(cols - 1),
                });
                return true;
            }
        }

        if let Some(pos) = self.focus {
            self.focus = Some(GridPos {
                row: pos.row.min(rows - 1),
                col: pos.col.min(cols - 1),
            });
        } else {
            self.focus = Some(GridPos { row: 0, col: 0 });
        }
        false
    }
}

#[cfg(test)]
mod tests;
