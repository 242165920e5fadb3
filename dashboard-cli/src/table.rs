//! Plain-text table output for the `list` command.

use dashboard_lib::format::renderers::{
    capitalized, compact, date, date_time, number, truncated, yes_no,
};
use dashboard_lib::format::truncate_text;
use dashboard_lib::model::{Resource, Row, Value};
use dashboard_lib::view::{Align, ColumnDescriptor, Direction, TableState};

const GAP: &str = "  ";

/// Columns shown for each resource, keyed on the shaped row fields.
pub fn columns(resource: Resource) -> Vec<ColumnDescriptor> {
    match resource {
        Resource::Users => vec![
            ColumnDescriptor::new("id", "ID").width(24),
            ColumnDescriptor::new("name", "Name").render(truncated(24)),
            ColumnDescriptor::new("email", "Email"),
            ColumnDescriptor::new("role", "Role").render(capitalized()),
            ColumnDescriptor::new("status", "Status").render(capitalized()),
            ColumnDescriptor::new("coins", "Coins")
                .align(Align::Right)
                .render(number()),
            ColumnDescriptor::new("joined_date", "Joined").render(date()),
        ],
        Resource::Posts => vec![
            ColumnDescriptor::new("id", "ID").width(24),
            ColumnDescriptor::new("owner", "Owner"),
            ColumnDescriptor::new("type", "Type").render(capitalized()),
            ColumnDescriptor::new("likes", "Likes")
                .align(Align::Right)
                .render(number()),
            ColumnDescriptor::new("comments", "Comments")
                .align(Align::Right)
                .render(number()),
            ColumnDescriptor::new("created_at", "Created").render(date()),
        ],
        Resource::Ads => vec![
            ColumnDescriptor::new("id", "ID").width(24),
            ColumnDescriptor::new("title", "Title").render(truncated(32)),
            ColumnDescriptor::new("creator", "Creator"),
            ColumnDescriptor::new("category", "Category"),
            ColumnDescriptor::new("type", "Type").render(capitalized()),
            ColumnDescriptor::new("coins_reward", "Reward")
                .align(Align::Right)
                .render(number()),
            ColumnDescriptor::new("views", "Views")
                .align(Align::Right)
                .render(compact()),
            ColumnDescriptor::new("status", "Status").render(capitalized()),
            ColumnDescriptor::new("created_at", "Created").render(date()),
        ],
        Resource::Vendors => vec![
            ColumnDescriptor::new("id", "ID").width(24),
            ColumnDescriptor::new("business", "Business"),
            ColumnDescriptor::new("username", "Username"),
            ColumnDescriptor::new("full_name", "Owner"),
            ColumnDescriptor::new("phone", "Phone"),
            ColumnDescriptor::new("validated", "Validated")
                .align(Align::Center)
                .render(yes_no()),
        ],
        Resource::AdComments => vec![
            ColumnDescriptor::new("id", "ID").width(24),
            ColumnDescriptor::new("username", "User"),
            ColumnDescriptor::new("text", "Comment").render(truncated(48)),
            ColumnDescriptor::new("created_at", "Posted").render(date_time()),
        ],
    }
}

/// Finds the column a `--sort` argument refers to, by key or title.
pub fn find_column<'a>(columns: &'a [ColumnDescriptor], name: &str) -> Option<&'a ColumnDescriptor> {
    let name = name.trim();
    columns
        .iter()
        .find(|column| column.key() == name || column.title().eq_ignore_ascii_case(name))
}

fn header(column: &ColumnDescriptor, state: &TableState) -> String {
    match state.sort().direction_for(column.key()) {
        Some(Direction::Asc) => format!("{} ^", column.title()),
        Some(Direction::Desc) => format!("{} v", column.title()),
        None => column.title().to_string(),
    }
}

fn cell(column: &ColumnDescriptor, row: &Row) -> String {
    let text = column.cell(row).as_str().to_string();
    match column.preferred_width() {
        Some(width) => truncate_text(&text, usize::from(width)),
        None => text,
    }
}

/// Renders the page `state` selects from `rows`.
///
/// An empty page renders as its empty-state message alone.
pub fn render(state: &TableState, rows: &[Row], columns: &[ColumnDescriptor]) -> String {
    let view = state.view(rows, columns);
    if let Some(empty) = state.empty_state(rows.len(), &view) {
        return state.empty_message(empty).to_string();
    }

    let headers: Vec<String> = columns.iter().map(|column| header(column, state)).collect();
    let cells: Vec<Vec<String>> = view
        .rows()
        .map(|row| columns.iter().map(|column| cell(column, row)).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, title)| {
            cells
                .iter()
                .map(|line| line[i].chars().count())
                .chain(std::iter::once(title.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let line = |texts: &[String]| -> String {
        texts
            .iter()
            .zip(columns)
            .zip(&widths)
            .map(|((text, column), width)| column.alignment().pad(text, *width))
            .collect::<Vec<_>>()
            .join(GAP)
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(cells.len() + 4);
    out.push(line(&headers));
    out.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join(GAP),
    );
    out.extend(cells.iter().map(|texts| line(texts)));

    if let Some(summary) = state.range_summary(&view) {
        out.push(String::new());
        out.push(format!(
            "{} (page {} of {})",
            summary,
            state.page(),
            view.total_pages
        ));
    }
    out.join("\n")
}

/// Renders one item as `key: value` lines, sorted by key.
pub fn render_item(row: &Row) -> String {
    let width = row.keys_sorted().iter().map(|key| key.chars().count()).max().unwrap_or(0);
    row.keys_sorted()
        .into_iter()
        .map(|key| {
            let value = match row.get(key) {
                Some(value @ (Value::Row(_) | Value::List(_))) => {
                    serde_json::to_string(value).unwrap_or_default()
                }
                Some(value) => value.to_string(),
                None => String::new(),
            };
            format!("{} {}", Align::Left.pad(&format!("{}:", key), width + 1), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
