//! Input pump: translates terminal events into engine commands.
//!
//! A blocking reader thread polls crossterm and forwards symbolic commands
//! over a bounded channel. The pump owns no game state; the driving loop is
//! the single consumer and the single writer of the board.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tokio::sync::mpsc;

const POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const CHANNEL_CAPACITY: usize = 256;

/// Commands the driving loop consumes, one at a time.
///
/// Mouse coordinates are raw terminal cells; the loop divides by
/// [`CELL_WIDTH`](crate::CELL_WIDTH) to get board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    TogglePause,
    Step,
    Clear,
    Randomize,
    NextTheme,
    NextPreset,
    InsertPreset,
    ToggleHelp,
    ToggleCell { column: u16, row: u16 },
    InsertAt { column: u16, row: u16 },
    Resize { width: u16, height: u16 },
}

/// Owns the reader thread and the receiving end of the command channel.
pub struct InputPump {
    rx: mpsc::Receiver<Command>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let join = tokio::task::spawn_blocking(move || pump_loop(&stop_flag, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    /// Next command, or `None` once the pump has shut down.
    pub async fn recv(&mut self) -> Option<Command> {
        self.rx.recv().await
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(join) = self.join.take() {
            join.abort();
        }
    }
}

fn pump_loop(stop: &AtomicBool, tx: &mpsc::Sender<Command>) {
    while !stop.load(Ordering::Relaxed) {
        match event::poll(POLL_TIMEOUT) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(err) => {
                tracing::warn!("input poll failed: {err}");
                return;
            }
        }
        let ev = match event::read() {
            Ok(ev) => ev,
            Err(err) => {
                tracing::warn!("input read failed: {err}");
                return;
            }
        };
        let Some(command) = translate(&ev) else {
            continue;
        };
        if tx.blocking_send(command).is_err() {
            return; // loop side hung up
        }
    }
}

fn translate(ev: &Event) -> Option<Command> {
    match ev {
        Event::Key(KeyEvent {
            kind: KeyEventKind::Press,
            code,
            modifiers,
            ..
        }) => match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
            KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char(' ') => Some(Command::TogglePause),
            KeyCode::Enter | KeyCode::Char('s') => Some(Command::Step),
            KeyCode::Char('c') => Some(Command::Clear),
            KeyCode::Char('r') => Some(Command::Randomize),
            KeyCode::Char('t') => Some(Command::NextTheme),
            KeyCode::Char('p') => Some(Command::NextPreset),
            KeyCode::Char('i') => Some(Command::InsertPreset),
            KeyCode::Char('h') => Some(Command::ToggleHelp),
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            ..
        }) => match kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Command::ToggleCell {
                column: *column,
                row: *row,
            }),
            MouseEventKind::Down(MouseButton::Right) => Some(Command::InsertAt {
                column: *column,
                row: *row,
            }),
            _ => None,
        },
        Event::Resize(width, height) => Some(Command::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    };

    use super::{Command, translate};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(translate(&key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(
            translate(&key(KeyCode::Char(' '))),
            Some(Command::TogglePause)
        );
        assert_eq!(translate(&key(KeyCode::Enter)), Some(Command::Step));
        assert_eq!(translate(&key(KeyCode::Char('c'))), Some(Command::Clear));
        assert_eq!(
            translate(&key(KeyCode::Char('r'))),
            Some(Command::Randomize)
        );
        assert_eq!(translate(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits_instead_of_clearing() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(&ev), Some(Command::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut ev = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        ev.kind = KeyEventKind::Release;
        assert_eq!(translate(&Event::Key(ev)), None);
    }

    #[test]
    fn mouse_buttons_carry_the_click_position() {
        let down = |button| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(button),
                column: 8,
                row: 3,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            translate(&down(MouseButton::Left)),
            Some(Command::ToggleCell { column: 8, row: 3 })
        );
        assert_eq!(
            translate(&down(MouseButton::Right)),
            Some(Command::InsertAt { column: 8, row: 3 })
        );
        assert_eq!(
            translate(&Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })),
            None
        );
    }

    #[test]
    fn resize_is_forwarded() {
        assert_eq!(
            translate(&Event::Resize(120, 40)),
            Some(Command::Resize {
                width: 120,
                height: 40
            })
        );
    }
}
