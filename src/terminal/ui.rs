use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::controller::{Controller, View};
use crate::domain::email::{Email, Mailbox};
use crate::render::{self, DetailBackground, EmailRow};
use crate::terminal::state::{ComposeFocus, TuiState};

pub fn render(f: &mut Frame, controller: &Controller, tui: &mut TuiState) {
    match controller.view() {
        View::Mailbox(mailbox) => draw_mailbox(f, *mailbox, controller, tui),
        View::Detail(email) => draw_detail(f, email, tui),
        View::Compose => draw_compose(f, controller, tui),
    }
}

fn draw_mailbox(f: &mut Frame, mailbox: Mailbox, controller: &Controller, tui: &mut TuiState) {
    let [main, footer] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
        .margin(1)
        .areas(f.area());

    // The count indicator only exists while the inbox is on screen.
    let title = match (mailbox, controller.inbox_count()) {
        (Mailbox::Inbox, Some(count)) => {
            format!(" {} — Total emails in inbox: {} ", mailbox.title(), count)
        }
        _ => format!(" {} ", mailbox.title()),
    };

    let rows = render::mailbox_rows(mailbox, controller.emails());
    let items: Vec<ListItem> = rows.iter().map(list_item).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_symbol("➜ ")
        .highlight_style(Style::default().fg(Color::Green));

    f.render_stateful_widget(list, main, &mut tui.list_state);

    let action_hint = match mailbox {
        Mailbox::Inbox => Some(("e", "archive")),
        Mailbox::Archive => Some(("e", "unarchive")),
        Mailbox::Sent => None,
    };
    let mut hints = vec![("j/k", "move"), ("Enter", "open")];
    if let Some(hint) = action_hint {
        hints.push(hint);
    }
    hints.extend([("i/s/a", "mailboxes"), ("c", "compose"), ("q", "quit")]);
    draw_hints(f, footer, &hints);
}

/// Rows render uniformly: nothing here looks at the read flag.
fn list_item(row: &EmailRow) -> ListItem<'static> {
    let subject = Span::styled(
        row.subject.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    );
    let mut meta = vec![
        Span::styled(row.recipients.clone(), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(row.timestamp.clone(), Style::default().fg(Color::DarkGray)),
    ];
    if let Some(action) = row.action {
        meta.push(Span::raw("  "));
        meta.push(Span::styled(
            format!("[e] {}", action.label()),
            Style::default().fg(Color::Cyan),
        ));
    }
    ListItem::new(Text::from(vec![Line::from(subject), Line::from(meta)]))
}

fn draw_detail(f: &mut Frame, email: &Email, tui: &TuiState) {
    let detail = render::email_detail(email);
    let style = match detail.background {
        DetailBackground::White => Style::default().bg(Color::White).fg(Color::Black),
        DetailBackground::Gray => Style::default().bg(Color::Gray).fg(Color::Black),
    };
    let label = Style::default().add_modifier(Modifier::BOLD);

    let [header, body, footer] =
        Layout::vertical([Constraint::Length(6), Constraint::Fill(1), Constraint::Length(1)])
            .margin(1)
            .areas(f.area());

    let head = Text::from(vec![
        Line::from(vec![Span::styled("From: ", label), Span::raw(detail.sender)]),
        Line::from(vec![Span::styled("To: ", label), Span::raw(detail.recipients)]),
        Line::from(vec![Span::styled("Subject: ", label), Span::raw(detail.subject)]),
        Line::from(vec![
            Span::styled("Timestamp: ", label),
            Span::raw(detail.timestamp),
        ]),
    ]);
    f.render_widget(
        Paragraph::new(head)
            .style(style)
            .block(Block::default().borders(Borders::ALL)),
        header,
    );

    // Literal text: whatever the body holds is printed as-is.
    let paragraph = Paragraph::new(detail.body)
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((tui.body_scroll, 0))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, body);

    draw_hints(
        f,
        footer,
        &[
            ("r", "reply"),
            ("j/k", "scroll"),
            ("Esc", "inbox"),
            ("q", "quit"),
        ],
    );
}

fn draw_compose(f: &mut Frame, controller: &Controller, tui: &TuiState) {
    let form = controller.compose();
    let [to, subject, body, error, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .areas(f.area());

    draw_field(f, to, "To", &form.recipients, tui.focus == ComposeFocus::Recipients);
    draw_field(f, subject, "Subject", &form.subject, tui.focus == ComposeFocus::Subject);
    draw_field(f, body, "Body", &form.body, tui.focus == ComposeFocus::Body);

    if let Some(message) = controller.compose_error() {
        f.render_widget(
            Paragraph::new(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            )),
            error,
        );
    }

    draw_hints(
        f,
        footer,
        &[
            ("Tab", "field"),
            ("Ctrl-s", "send"),
            ("Esc", "inbox"),
        ],
    );
}

fn draw_field(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let paragraph = Paragraph::new(value.to_string())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(paragraph, area);
}

fn draw_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {action}  ")));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
