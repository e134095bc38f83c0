use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use alpinedesk_core::models::Mountain;
use alpinedesk_core::utils::PLACEHOLDER;

use crate::app::App;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_detail(frame, app.mountains.current.as_ref(), chunks[0]);
    render_groups(frame, app, chunks[1]);
}

fn field_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<9}", label), styles::highlight_style()),
        Span::raw(value),
    ])
}

fn render_detail(frame: &mut Frame, mountain: Option<&Mountain>, area: Rect) {
    let mut lines = match mountain {
        Some(m) => vec![
            field_line("Name:", m.name_display().to_string()),
            field_line("Height:", m.height_display()),
            field_line("Country:", m.country_display().to_string()),
            field_line("Region:", m.region_display().to_string()),
            Line::from(""),
        ],
        None => ["Name:", "Height:", "Country:", "Region:"]
            .iter()
            .map(|label| field_line(label, PLACEHOLDER.to_string()))
            .collect(),
    };

    if let Some(description) = mountain.map(Mountain::description_text).filter(|d| !d.is_empty()) {
        lines.extend(description.lines().map(|l| Line::from(l.to_string())));
    }

    let block = Block::default()
        .title(" Mountain ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_groups(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.mountains;
    let items: Vec<ListItem> = page
        .groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let style = if i == page.selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            let card = Text::from(vec![
                Line::from(Span::styled(group.title().to_string(), styles::title_style())),
                Line::from(group.meta_line()),
                Line::from(Span::styled(group.card_description(), styles::muted_style())),
                Line::from(""),
            ]);
            ListItem::new(card).style(style)
        })
        .collect();

    let block = Block::default()
        .title(format!(" Groups ({}) ", page.groups.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    if !page.groups.is_empty() {
        state.select(Some(page.selection));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
