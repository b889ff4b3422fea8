use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::MailApi;
use crate::controller::{Controller, Event, View};
use crate::domain::email::{EmailId, Mailbox};
use crate::terminal::state::{ComposeFocus, TuiState};

/// Run one controller transition and re-seat the presentation cursor on
/// the (possibly replaced) listing.
pub(crate) fn dispatch(
    event: Event,
    controller: &mut Controller,
    tui: &mut TuiState,
    api: &dyn MailApi,
) {
    controller.handle(event, api);
    tui.sync_after_dispatch(controller.emails().len());
}

/// Map one key press onto controller events. Returns true to quit.
pub fn handle_key(
    key: KeyEvent,
    controller: &mut Controller,
    tui: &mut TuiState,
    api: &dyn MailApi,
) -> bool {
    // Compose captures plain typing, so it gets its own keymap.
    if matches!(controller.view(), View::Compose) {
        handle_compose_key(key, controller, tui, api);
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,

        KeyCode::Esc => {
            if matches!(controller.view(), View::Detail(_)) {
                dispatch(Event::SelectMailbox(Mailbox::Inbox), controller, tui, api);
                return false;
            }
            return true;
        }

        KeyCode::Char('i') => {
            dispatch(Event::SelectMailbox(Mailbox::Inbox), controller, tui, api);
            return false;
        }
        KeyCode::Char('s') => {
            dispatch(Event::SelectMailbox(Mailbox::Sent), controller, tui, api);
            return false;
        }
        KeyCode::Char('a') => {
            dispatch(Event::SelectMailbox(Mailbox::Archive), controller, tui, api);
            return false;
        }
        KeyCode::Char('c') => {
            dispatch(Event::SelectCompose, controller, tui, api);
            return false;
        }

        _ => {}
    }

    match controller.view() {
        View::Mailbox(mailbox) => {
            let mailbox = *mailbox;
            handle_list_key(key, mailbox, controller, tui, api);
        }
        View::Detail(_) => handle_detail_key(key, controller, tui, api),
        View::Compose => {}
    }
    false
}

fn selected_id(controller: &Controller, tui: &TuiState) -> Option<EmailId> {
    let idx = tui.selected()?;
    controller.emails().get(idx).map(|e| e.id)
}

fn handle_list_key(
    key: KeyEvent,
    mailbox: Mailbox,
    controller: &mut Controller,
    tui: &mut TuiState,
    api: &dyn MailApi,
) {
    let len = controller.emails().len();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => tui.move_selection(len, 1),
        KeyCode::Up | KeyCode::Char('k') => tui.move_selection(len, -1),
        KeyCode::Home => tui.list_state.select(if len == 0 { None } else { Some(0) }),
        KeyCode::End => {
            if len > 0 {
                tui.list_state.select(Some(len - 1));
            }
        }

        KeyCode::Enter => {
            if let Some(id) = selected_id(controller, tui) {
                dispatch(Event::OpenEmail(id), controller, tui, api);
            }
        }

        // The row's own action control: archive from the inbox,
        // unarchive from the archive, nothing from sent.
        KeyCode::Char('e') => {
            if let Some(id) = selected_id(controller, tui) {
                match mailbox {
                    Mailbox::Inbox => dispatch(Event::Archive(id), controller, tui, api),
                    Mailbox::Archive => dispatch(Event::Unarchive(id), controller, tui, api),
                    Mailbox::Sent => {}
                }
            }
        }

        _ => {}
    }
}

fn handle_detail_key(
    key: KeyEvent,
    controller: &mut Controller,
    tui: &mut TuiState,
    api: &dyn MailApi,
) {
    match key.code {
        KeyCode::Char('r') => dispatch(Event::Reply, controller, tui, api),
        KeyCode::Down | KeyCode::Char('j') => tui.scroll_body(1),
        KeyCode::Up | KeyCode::Char('k') => tui.scroll_body(-1),
        KeyCode::PageDown => tui.scroll_body(10),
        KeyCode::PageUp => tui.scroll_body(-10),
        KeyCode::Home => tui.body_scroll = 0,
        _ => {}
    }
}

fn handle_compose_key(
    key: KeyEvent,
    controller: &mut Controller,
    tui: &mut TuiState,
    api: &dyn MailApi,
) {
    // Ctrl-S submits; Esc abandons the draft back to the inbox.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('s') = key.code {
            dispatch(Event::Submit, controller, tui, api);
        }
        return;
    }

    match key.code {
        KeyCode::Esc => dispatch(Event::SelectMailbox(Mailbox::Inbox), controller, tui, api),

        KeyCode::Tab => tui.focus = tui.focus.next(),
        KeyCode::BackTab => tui.focus = tui.focus.prev(),

        KeyCode::Enter => {
            if tui.focus == ComposeFocus::Body {
                controller.compose_mut().body.push('\n');
            } else {
                tui.focus = tui.focus.next();
            }
        }

        KeyCode::Backspace => {
            field_mut(controller, tui.focus).pop();
        }
        KeyCode::Char(c) => field_mut(controller, tui.focus).push(c),

        _ => {}
    }
}

fn field_mut(controller: &mut Controller, focus: ComposeFocus) -> &mut String {
    let form = controller.compose_mut();
    match focus {
        ComposeFocus::Recipients => &mut form.recipients,
        ComposeFocus::Subject => &mut form.subject,
        ComposeFocus::Body => &mut form.body,
    }
}
