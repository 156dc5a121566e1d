use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub enum TuiEvent {
    Key(KeyCode),
    Tick,
    Quit,
}

pub fn handle_input() -> Result<TuiEvent> {
    if event::poll(Duration::from_millis(16))?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(TuiEvent::Quit);
        }
        return Ok(TuiEvent::Key(key.code));
    }
    Ok(TuiEvent::Tick)
}
