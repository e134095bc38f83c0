use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use alpinedesk_core::models::Group;

use crate::app::{App, AppState, Page};
use crate::forms::{FieldKind, Form};
use crate::pages::{Notice, Overlay};

use super::styles;
use super::views::{lists, mountains};

pub fn render(frame: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(app.sidebar_width()), Constraint::Min(20)])
        .split(frame.area());

    render_sidebar(frame, app, columns[0]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Page content
            Constraint::Length(1), // Status bar
        ])
        .split(columns[1]);

    render_header(frame, app, chunks[0]);
    render_main_content(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    // Render overlays, bottom of the stack first
    for overlay in &app.overlays {
        match overlay {
            Overlay::Notice(notice) => render_notice_overlay(frame, notice),
            Overlay::Form(form) => render_form_overlay(frame, form),
            Overlay::GroupDetail(group) => render_group_overlay(frame, group),
            Overlay::Members(names) => render_members_overlay(frame, names),
        }
    }

    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];
    for page in Page::ALL {
        let label = if app.sidebar_expanded {
            format!(" [{}] {}", page.shortcut(), page.title())
        } else {
            format!(" [{}]", page.shortcut())
        };
        let width = area.width.saturating_sub(1) as usize;
        lines.push(Line::from(Span::styled(
            format!("{:<width$}", label, width = width),
            styles::nav_style(app.page == page),
        )));
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.page == Page::Mountains && !app.selector.title.is_empty() {
        format!("  {}", app.selector.title)
    } else {
        format!("  {}", app.page.title())
    };

    let mut spans = vec![Span::styled(title.clone(), styles::title_style())];

    if app.has_selector() {
        let picker = format!("< {} >", app.selector.selected_label());
        let hint = "[,/.] ";
        let used = title.chars().count() + picker.chars().count() + hint.len() + 2;
        spans.push(Span::raw(" ".repeat((area.width as usize).saturating_sub(used))));
        spans.push(Span::styled(hint, styles::muted_style()));
        spans.push(Span::styled(picker, styles::highlight_style()));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.page {
        Page::Mountains => mountains::render(frame, app, area),
        _ => lists::render(frame, app, area),
    }
}

fn page_shortcuts(page: Page) -> &'static str {
    match page {
        Page::Mountains => "[a]dd | [e]dit | Enter group",
        Page::Climbers => "[f]ilter",
        Page::Groups => "[a]dd",
        Page::Ascents => "[f]ilter | [u]pcoming",
        Page::Stats => "",
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let busy = app.in_flight + app.pending().len();
    let left_text = if busy > 0 {
        format!(" Loading ({})... ", busy)
    } else {
        " Ready ".to_string()
    };

    let shortcuts = page_shortcuts(app.page);
    let right_text = if shortcuts.is_empty() {
        " [r]efresh | [?] help | [q]uit ".to_string()
    } else {
        format!(" {} | [r]efresh | [?] help | [q]uit ", shortcuts)
    };

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.chars().count());
    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn dialog_block(title: String) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default())
}

fn close_hint(action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  Press ", styles::muted_style()),
        Span::styled("Enter", styles::help_key_style()),
        Span::styled(" or ", styles::muted_style()),
        Span::styled("Esc", styles::help_key_style()),
        Span::styled(action, styles::muted_style()),
    ])
}

fn render_notice_overlay(frame: &mut Frame, notice: &Notice) {
    let area = centered_rect_fixed(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", notice.message),
            styles::notice_style(notice.level),
        )),
        Line::from(""),
        close_hint(" to close"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(dialog_block(notice.title().to_string()))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_form_overlay(frame: &mut Frame, form: &Form) {
    let height = form.fields.len() as u16 + 6;
    let area = centered_rect_fixed(60, height, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let value_style = if focused {
            styles::selected_style()
        } else {
            styles::list_item_style()
        };
        let value = match field.kind {
            FieldKind::Choice(_) => format!("< {} >", field.display()),
            _ if focused => format!("{}▌", field.display()),
            _ => field.display().to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<13}", field.label), styles::highlight_style()),
            Span::styled(value, value_style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Tab", styles::help_key_style()),
        Span::styled(" next  ", styles::muted_style()),
        Span::styled("←/→", styles::help_key_style()),
        Span::styled(" choose  ", styles::muted_style()),
        Span::styled("Enter", styles::help_key_style()),
        Span::styled(" submit  ", styles::muted_style()),
        Span::styled("Esc", styles::help_key_style()),
        Span::styled(" cancel", styles::muted_style()),
    ]));

    let paragraph = Paragraph::new(lines).block(dialog_block(form.title.to_string()));
    frame.render_widget(paragraph, area);
}

fn render_group_overlay(frame: &mut Frame, group: &Group) {
    let area = centered_rect_fixed(64, 16, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(format!("  {}", group.meta_line())),
        Line::from(vec![
            Span::styled("  Status: ", styles::highlight_style()),
            Span::raw(group.status_display().to_string()),
            Span::styled("   Members: ", styles::highlight_style()),
            Span::raw(group.members_display()),
        ]),
        Line::from(""),
    ];
    lines.extend(
        group
            .description
            .as_deref()
            .unwrap_or("")
            .lines()
            .map(|l| Line::from(format!("  {}", l))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  [m]", styles::help_key_style()),
        Span::styled(" View members   ", styles::muted_style()),
        Span::styled("[Esc]", styles::help_key_style()),
        Span::styled(" Close", styles::muted_style()),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(dialog_block(group.title().to_string()))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_members_overlay(frame: &mut Frame, names: &[String]) {
    let height = (names.len() as u16).clamp(1, 16) + 5;
    let area = centered_rect_fixed(44, height, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    if names.is_empty() {
        lines.push(Line::from(Span::styled("  No members", styles::muted_style())));
    }
    lines.extend(names.iter().map(|n| Line::from(format!("  {}", n))));
    lines.push(Line::from(""));
    lines.push(close_hint(" to close"));

    let paragraph = Paragraph::new(lines).block(dialog_block("Members".to_string()));
    frame.render_widget(paragraph, area);
}

fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, styles::help_key_style()),
        Span::styled(desc, styles::help_desc_style()),
    ])
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(52, 24, frame.area());
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        Line::from(Span::styled("  alpinedesk", styles::title_style())),
        Line::from(Span::styled(format!("  version {}", version), styles::muted_style())),
        Line::from(""),
        Line::from(Span::styled(" Navigation", styles::highlight_style())),
        help_line("  1-5       ", "Switch page"),
        help_line("  ←/→       ", "Previous/next page"),
        help_line("  ,/.       ", "Previous/next mountain"),
        help_line("  ↑/↓       ", "Navigate list"),
        help_line("  Enter     ", "Open group"),
        help_line("  s         ", "Collapse/expand sidebar"),
        help_line("  Esc       ", "Close dialog"),
        Line::from(""),
        Line::from(Span::styled(" Actions", styles::highlight_style())),
        help_line("  r         ", "Refresh page"),
        help_line("  a         ", "Add mountain/group"),
        help_line("  e         ", "Edit mountain"),
        help_line("  f         ", "Filter by date range"),
        help_line("  u         ", "Upcoming ascents"),
        help_line("  q         ", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let paragraph = Paragraph::new(help_text).block(dialog_block("Help".to_string()));
    frame.render_widget(paragraph, area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 7, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(dialog_block("Quit".to_string()));
    frame.render_widget(paragraph, area);
}
