pub mod events;
pub mod state;
pub mod ui;

use color_eyre::eyre::Result;
use crossterm::event::{self, Event as TermEvent};
use ratatui::DefaultTerminal;

use crate::api::MailApi;
use crate::controller::{Controller, Event};
use crate::domain::email::Mailbox;
use crate::terminal::events::{dispatch, handle_key};
use crate::terminal::state::TuiState;

pub fn run_tui(api: &dyn MailApi) -> Result<()> {
    color_eyre::install()?;

    let mut controller = Controller::new();
    let mut tui = TuiState::default();

    // Startup lands in the inbox.
    dispatch(
        Event::SelectMailbox(Mailbox::Inbox),
        &mut controller,
        &mut tui,
        api,
    );

    let terminal = ratatui::init();
    let result = run(terminal, &mut controller, &mut tui, api);
    ratatui::restore();
    result
}

fn run(
    mut terminal: DefaultTerminal,
    controller: &mut Controller,
    tui: &mut TuiState,
    api: &dyn MailApi,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, controller, tui))?;
        if let TermEvent::Key(key) = event::read()? {
            if handle_key(key, controller, tui, api) {
                break;
            }
        }
    }
    Ok(())
}
