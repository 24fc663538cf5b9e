//! Terminal shardwalk runner (default binary).
//!
//! Input is blocking: the world only changes in response to a key, so the loop
//! renders, waits for the next event and applies it.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use shardwalk::config::Config;
use shardwalk::core::{Session, WorldSnapshot};
use shardwalk::input::{handle_key_event, should_quit};
use shardwalk::journal::Journal;
use shardwalk::term::{FrameBuffer, TerminalRenderer, Viewport, WorldView};

fn main() -> Result<()> {
    let config = Config::from_env();

    // Open before raw mode so a bad path is reported on a normal terminal.
    let mut journal = match &config.journal_path {
        Some(path) => Some(Journal::open(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, journal.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(err) = journal.as_ref().and_then(|j| j.failure()) {
        eprintln!("shardwalk: journal disabled after write error: {:#}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, mut journal: Option<&mut Journal>) -> Result<()> {
    let mut session = Session::new(config.session_options());
    let view = WorldView::new(config.view_width, config.view_height);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);
    let mut snap = WorldSnapshot::default();

    loop {
        session.snapshot_into(&mut snap);
        view.render_into(&snap, session.log(), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let events = session.apply_action(action);
                    if let Some(journal) = journal.as_deref_mut() {
                        journal.record_best_effort(session.player().steps(), action, &events);
                    }
                }
            }
            Event::Resize(w, h) => {
                viewport = Viewport::new(w, h);
                term.invalidate();
            }
            _ => {}
        }
    }
}
