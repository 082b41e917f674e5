//! Terminal rendering of the catalog page.
//!
//! Render policy: while the mount-time load is in flight, a loading
//! indicator is shown exclusively. Once an error message is set it replaces
//! the main content area exclusively. Otherwise the main area holds either
//! the add form or the product list, with the detail pane beside it showing
//! the selected product or nothing.

use crate::application::{App, FormField};
use crate::domain::value_text;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_content(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "prodcat - Product Management | {} product{}",
        app.products.len(),
        if app.products.len() == 1 { "" } else { "s" }
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_content(f: &mut Frame, app: &App, area: Rect) {
    if app.loading {
        let loading = Paragraph::new("Loading products...")
            .block(Block::default().borders(Borders::ALL).title("Products"));
        f.render_widget(loading, area);
        return;
    }

    if let Some(ref message) = app.error_message {
        let error = Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Red))
            .block(Block::default().borders(Borders::ALL).title("Error"));
        f.render_widget(error, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    if app.form_visible {
        render_form(f, app, columns[0]);
    } else {
        render_list(f, app, columns[0]);
    }
    render_detail(f, app, columns[1]);
}

fn render_list(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Name").style(Style::default().fg(Color::Yellow)),
        Cell::from("Price").style(Style::default().fg(Color::Yellow)),
        Cell::from("Id").style(Style::default().fg(Color::Yellow)),
    ])
    .height(1);

    let mut rows = vec![header];
    for (index, product) in app.products.iter().enumerate() {
        let style = if index == app.cursor {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        rows.push(
            Row::new(vec![
                Cell::from(product.name().to_string()),
                Cell::from(product.field_text("price").unwrap_or_default()),
                Cell::from(product.id.clone()),
            ])
            .style(style)
            .height(1),
        );
    }

    let widths = [
        Constraint::Percentage(50),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ];
    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title("Products"))
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let line = |label: &str, buffer: &str, field: FormField| {
        let marker = if app.form.focus == field { "> " } else { "  " };
        format!("{marker}{label}: {buffer}")
    };

    let text = [
        line("Name", &app.form.name, FormField::Name),
        line("Price", &app.form.price, FormField::Price),
        line("Description", &app.form.description, FormField::Description),
    ]
    .join("\n");

    let form = Paragraph::new(text)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title("New Product"));
    f.render_widget(form, area);
}

fn render_detail(f: &mut Frame, app: &App, area: Rect) {
    // No selection, no detail pane.
    let Some(product) = app.selected_product() else {
        return;
    };

    let mut lines = vec![format!("Id: {}", product.id)];
    for (key, value) in &product.fields {
        lines.push(format!("{}: {}", capitalize(key), value_text(value)));
    }

    let detail = Paragraph::new(lines.join("\n"))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Detail"));
    f.render_widget(detail, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.loading {
        ("Fetching catalog from the product service...".to_string(), Style::default())
    } else if app.form_visible {
        (
            "Tab: next field | Enter: submit | Esc: cancel".to_string(),
            Style::default().fg(Color::Green),
        )
    } else {
        (
            "↑↓/jk: move | Enter: view | d: delete | a: add product | q: quit".to_string(),
            Style::default(),
        )
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("price"), "Price");
        assert_eq!(capitalize("inStock"), "InStock");
        assert_eq!(capitalize(""), "");
    }
}
