//! Single-list pages: climbers, groups, ascents and stats.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Page};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.page {
        Page::Climbers => render_list(
            frame,
            area,
            "Climbers",
            app.climbers.lines(),
            app.climbers.selection,
        ),
        Page::Groups => render_list(frame, area, "Groups", app.groups.lines(), app.groups.selection),
        Page::Ascents => render_list(
            frame,
            area,
            "Ascents",
            app.ascents.lines(),
            app.ascents.selection,
        ),
        Page::Stats => render_stats(frame, app, area),
        Page::Mountains => {}
    }
}

fn render_list(frame: &mut Frame, area: Rect, title: &str, lines: Vec<String>, selection: usize) {
    let count = lines.len();
    let items: Vec<ListItem> = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            ListItem::new(Line::from(line)).style(style)
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ({}) ", title, count))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    if count > 0 {
        state.select(Some(selection));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Stats ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(app.stats.text())
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
