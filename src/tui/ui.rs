use crate::route::Page;
use crate::tui::app::{App, Focus};
use crate::view::Action;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Page tabs
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status
        ])
        .split(f.area());

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(layout[1]);

    let right_col = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(content[1]);

    draw_tabs(f, layout[0], app);
    draw_preview(f, content[0], app);
    draw_search_bar(f, right_col[0], app);
    draw_list_panel(f, right_col[1], app);
    draw_status_bar(f, layout[2], app);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<String> = Page::ALL
        .iter()
        .map(|p| t!(p.label_key()).to_string())
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(t!("titles.app").to_string()))
        .select(app.screen.active().index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn draw_preview(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(t!("titles.preview").to_string());

    if app.is_loading {
        let loading = Paragraph::new(t!("status.loading").to_string())
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(loading, area);
        return;
    }

    let content = app.screen.active_content();
    let mut lines: Vec<Line> = Vec::new();
    for (i, text) in content.lines.iter().enumerate() {
        if i == 0 {
            lines.push(Line::from(Span::styled(
                text.clone(),
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )));
        } else {
            lines.push(Line::from(text.clone()));
        }
    }

    if let Some(row) = content.rows.get(app.get_selected_index())
        && let Some(poster) = &row.poster
    {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", t!("preview.poster")),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(poster.clone()),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    f.render_widget(paragraph, area);
}

fn draw_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let style = if app.focus == Focus::SearchBar {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let search = Paragraph::new(app.search_query.clone()).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(t!("titles.search").to_string()),
    );
    f.render_widget(search, area);
}

fn draw_list_panel(f: &mut Frame, area: Rect, app: &mut App) {
    let content = app.screen.active_content();

    let items: Vec<ListItem> = content
        .rows
        .iter()
        .map(|row| {
            let style = match row.action {
                // Section labels (schedule days) stand out, but are inert.
                Action::None => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                _ => Style::default(),
            };
            ListItem::new(row.text.clone()).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(t!(app.screen.active().label_key()).to_string()),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let text = match &app.status_message {
        Some(msg) => msg.clone(),
        None => t!("status.hints").to_string(),
    };
    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
