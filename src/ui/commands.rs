use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::App;
use crate::models::BudgetKind;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit BudgetSheet", cmd_quit, r);
    register_command!("quit", "Quit BudgetSheet", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "period",
        "Set displayed range (e.g. :period 2024-01 2024-12)",
        cmd_period,
        r
    );
    register_command!("p", "Set displayed range", cmd_period, r);
    register_command!(
        "start",
        "Set start period (e.g. :start 2024-01)",
        cmd_start,
        r
    );
    register_command!("end", "Set end period (e.g. :end 2024-12)", cmd_end, r);
    register_command!(
        "add",
        "Add a category (e.g. :add income)",
        cmd_add,
        r
    );
    register_command!("a", "Add a category (e.g. :a expense)", cmd_add, r);
    register_command!(
        "sub",
        "Add a sub-category under the selected row",
        cmd_sub,
        r
    );
    register_command!("delete", "Delete the selected category", cmd_delete, r);
    register_command!(
        "apply",
        "Apply the selected cell to all categories",
        cmd_apply,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_period(args: &str, app: &mut App) -> anyhow::Result<()> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [start, end] = parts.as_slice() else {
        app.set_status("Usage: :period <start> <end> (e.g. :period 2024-01 2024-12)");
        return Ok(());
    };

    if app.store.set_period(start, end) {
        app.set_status(format!("Range set to {start} – {end}"));
    } else {
        app.set_status("Invalid period format. Use YYYY-MM (e.g. 2024-01)");
    }
    Ok(())
}

fn cmd_start(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :start <YYYY-MM>");
        return Ok(());
    }
    if app.store.set_start_period(args) {
        app.set_status(format!("Start period: {args}"));
    } else {
        app.set_status("Invalid period format. Use YYYY-MM (e.g. 2024-01)");
    }
    Ok(())
}

fn cmd_end(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :end <YYYY-MM>");
        return Ok(());
    }
    if app.store.set_end_period(args) {
        app.set_status(format!("End period: {args}"));
    } else {
        app.set_status("Invalid period format. Use YYYY-MM (e.g. 2024-12)");
    }
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    match BudgetKind::parse(args) {
        Some(kind) => app.add_category(kind),
        None => {
            let kinds: Vec<String> = BudgetKind::all()
                .iter()
                .map(|k| k.as_str().to_lowercase())
                .collect();
            app.set_status(format!("Usage: :add <kind>. Kinds: {}", kinds.join(", ")));
        }
    }
    Ok(())
}

fn cmd_sub(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.add_subcategory();
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App) -> anyhow::Result<()> {
    match app.focused_row() {
        Some(row) => {
            app.store.delete_budget(row.id);
            app.set_status("Category deleted");
        }
        None => app.set_status("No row selected"),
    }
    Ok(())
}

fn cmd_apply(_args: &str, app: &mut App) -> anyhow::Result<()> {
    let row = app.focused_row();
    let month = app.focused_month().map(str::to_string);
    match (row, month) {
        (Some(row), Some(month)) => {
            app.store.apply_to_all(row.id, &month);
            app.set_status(format!("Applied {month} value to all categories"));
        }
        _ => app.set_status("Select an amount cell first"),
    }
    Ok(())
}
