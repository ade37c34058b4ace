//! Keyboard handling: maps key events to controls and pumps them into the
//! game loop's channel from a dedicated thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Control;
use crate::types::{Direction, Spin};

/// How long the pump blocks waiting for a key before re-checking the stop
/// flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Map a key press to a control, if it is bound to one.
pub fn map_key(key: KeyEvent) -> Option<Control> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => {
            Some(Control::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            Some(Control::Move(Direction::Right))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => {
            Some(Control::Move(Direction::Down))
        }
        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('k') => Some(Control::Rotate(Spin::Cw)),
        KeyCode::Char('z') => Some(Control::Rotate(Spin::Ccw)),
        KeyCode::Char(' ') => Some(Control::HardDrop),
        _ => None,
    }
}

/// Whether this key ends the game session.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Spawn the input pump: reads terminal key events, forwards mapped controls
/// on `tx`, and raises `stop` on a quit key. The thread exits once `stop` is
/// set (by itself or anyone else) or the receiving side goes away.
pub fn spawn_input_thread(tx: Sender<Control>, stop: Arc<AtomicBool>) -> JoinHandle<()> {
    thread::spawn(move || {
        while !stop.load(Ordering::Relaxed) {
            match event::poll(POLL_INTERVAL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(_) => break,
            }
            let key = match event::read() {
                Ok(Event::Key(key)) => key,
                Ok(_) => continue,
                Err(_) => break,
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                stop.store(true, Ordering::Relaxed);
                break;
            }
            if let Some(control) = map_key(key) {
                if tx.send(control).is_err() {
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    #[test]
    fn movement_keys_map_to_moves() {
        assert_eq!(
            map_key(press(KeyCode::Left)),
            Some(Control::Move(Direction::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('j'))),
            Some(Control::Move(Direction::Down))
        );
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(Control::HardDrop));
        assert_eq!(map_key(press(KeyCode::Tab)), None);
    }

    #[test]
    fn quit_keys_are_recognized() {
        assert!(should_quit(press(KeyCode::Char('q'))));
        assert!(should_quit(press(KeyCode::Esc)));
        assert!(!should_quit(press(KeyCode::Char('c'))));
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        };
        assert!(should_quit(ctrl_c));
    }
}
