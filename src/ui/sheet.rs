use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::models::BudgetKind;
use crate::summary;
use crate::ui::app::{App, DisplayRow, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = match (app.months.first(), app.months.last()) {
        (Some(first), Some(last)) => format!(" Budget  {first} – {last} "),
        _ => " Budget  (empty range) ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(title, theme::header_style()));
    f.render_widget(block, area);

    let layout = app.layout;
    if layout.area.width == 0 || layout.area.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = vec![header_line(app)];
    for display in app
        .display
        .iter()
        .skip(layout.first_line)
        .take(layout.visible_lines)
    {
        lines.push(body_line(app, *display));
    }

    f.render_widget(Paragraph::new(lines), layout.area);
}

fn visible_months(app: &App) -> impl Iterator<Item = (usize, &String)> {
    app.months
        .iter()
        .enumerate()
        .skip(app.layout.first_month)
        .take(app.layout.visible_months)
}

fn header_line(app: &App) -> Line<'static> {
    let mut spans = vec![Span::styled(
        pad_name("Category", app.layout.name_width),
        theme::header_style(),
    )];
    for (_, month) in visible_months(app) {
        spans.push(Span::styled(
            pad_amount(month, app.layout.col_width),
            theme::header_style(),
        ));
    }
    Line::from(spans)
}

fn body_line(app: &App, display: DisplayRow) -> Line<'static> {
    match display {
        DisplayRow::Category(row) => category_line(app, row),
        DisplayRow::SubTotal(id) => subtotal_line(app, id),
        DisplayRow::SectionTotal(kind) => computed_line(
            app,
            &format!("{kind} total"),
            theme::total_style(section_color(kind)),
            |app, month, _| summary::total(&app.store, month, kind),
        ),
        DisplayRow::ProfitLoss => profit_loss_line(app),
        DisplayRow::OpeningBalance => computed_line(
            app,
            "Opening balance",
            theme::dim_style(),
            |app, month, index| summary::opening_balance(&app.store, month, index),
        ),
        DisplayRow::ClosingBalance => computed_line(
            app,
            "Closing balance",
            theme::header_style(),
            |app, month, index| summary::closing_balance(&app.store, month, index),
        ),
    }
    .unwrap_or_else(|| Line::from(Span::raw(String::new())))
}

fn category_line(app: &App, row_idx: usize) -> Option<Line<'static>> {
    let row = app.rows.get(row_idx)?;
    let budget = app.store.find(row.id)?;
    let focus = app.grid.focus();
    let editing = app.input_mode == InputMode::Editing;

    let name_focused = focus.is_some_and(|p| p.row == row_idx && p.col == 0);
    let name_text = if name_focused && editing {
        app.edit_input.clone()
    } else if row.is_child() {
        format!("  └ {}", budget.name)
    } else {
        budget.name.clone()
    };
    let name_style = if name_focused && editing {
        theme::editing_style()
    } else if name_focused {
        theme::selected_style()
    } else if budget.name.is_empty() {
        theme::dim_style()
    } else {
        theme::normal_style()
    };
    let shown = if name_text.is_empty() && !name_focused {
        "(unnamed)".to_string()
    } else {
        name_text
    };

    let mut spans = vec![Span::styled(pad_name(&shown, app.layout.name_width), name_style)];

    for (month_idx, month) in visible_months(app) {
        let col = month_idx + 1;
        let cell_focused = focus.is_some_and(|p| p.row == row_idx && p.col == col);

        let text = if cell_focused && editing {
            app.edit_input.clone()
        } else {
            budget
                .amounts
                .get(month)
                .map(|v| format_amount(*v))
                .unwrap_or_default()
        };
        let style = if cell_focused && editing {
            theme::editing_style()
        } else if cell_focused {
            theme::selected_style()
        } else {
            theme::normal_style()
        };
        spans.push(Span::styled(pad_amount(&text, app.layout.col_width), style));
    }

    Some(Line::from(spans))
}

fn subtotal_line(app: &App, id: u64) -> Option<Line<'static>> {
    let kind = app.store.find(id)?.kind;
    let mut spans = vec![Span::styled(
        pad_name("  └ subtotal", app.layout.name_width),
        theme::dim_style(),
    )];
    for (_, month) in visible_months(app) {
        let value = summary::sub_total(&app.store, month, kind, id);
        spans.push(Span::styled(
            pad_amount(&format_amount(value), app.layout.col_width),
            theme::dim_style(),
        ));
    }
    Some(Line::from(spans))
}

fn computed_line(
    app: &App,
    label: &str,
    style: Style,
    value: impl Fn(&App, &str, usize) -> Decimal,
) -> Option<Line<'static>> {
    let mut spans = vec![Span::styled(pad_name(label, app.layout.name_width), style)];
    for (month_idx, month) in visible_months(app) {
        let amount = value(app, month, month_idx);
        spans.push(Span::styled(
            pad_amount(&format_amount(amount), app.layout.col_width),
            style,
        ));
    }
    Some(Line::from(spans))
}

fn profit_loss_line(app: &App) -> Option<Line<'static>> {
    let mut spans = vec![Span::styled(
        pad_name("Profit / loss", app.layout.name_width),
        theme::header_style(),
    )];
    for (_, month) in visible_months(app) {
        let value = summary::profit_loss(&app.store, month);
        let style = if value < Decimal::ZERO {
            theme::expense_style()
        } else {
            theme::income_style()
        };
        spans.push(Span::styled(
            pad_amount(&format_amount(value), app.layout.col_width),
            style,
        ));
    }
    Some(Line::from(spans))
}

fn section_color(kind: BudgetKind) -> ratatui::style::Color {
    match kind {
        BudgetKind::Income => theme::GREEN,
        BudgetKind::Expense => theme::RED,
    }
}

fn pad_name(s: &str, width: u16) -> String {
    let width = width as usize;
    format!("{:<width$}", truncate(s, width.saturating_sub(1)))
}

fn pad_amount(s: &str, width: u16) -> String {
    let inner = (width as usize).saturating_sub(1);
    format!("{:>inner$} ", truncate(s, inner))
}
