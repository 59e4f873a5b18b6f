// Raw mode / alternate screen lifecycle
//
// The guard restores the terminal on drop, including on early returns and draw errors, and a
// panic hook restores it before the panic message is printed.

use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::Show;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// Set while the terminal is in raw mode; the panic hook only restores when it is set.
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);
static ALT_SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);
static MOUSE_ACTIVE: AtomicBool = AtomicBool::new(false);

pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enters raw mode and, optionally, the alternate screen and mouse capture. On partial
    /// failure whatever was already enabled is undone.
    pub fn enter(mouse: bool, alt_screen: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);
        let guard = Self { _private: () };

        let mut stdout = io::stdout();
        if alt_screen {
            execute!(stdout, EnterAlternateScreen)?;
            ALT_SCREEN_ACTIVE.store(true, Ordering::SeqCst);
        }
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
            MOUSE_ACTIVE.store(true, Ordering::SeqCst);
        }

        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore();
            prev(info);
        }));

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

/// Best-effort restoration; safe to call more than once.
fn restore() {
    if !RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
        return;
    }
    let mut stdout = io::stdout();
    if MOUSE_ACTIVE.swap(false, Ordering::SeqCst) {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    if ALT_SCREEN_ACTIVE.swap(false, Ordering::SeqCst) {
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
    let _ = execute!(stdout, Show);
    let _ = disable_raw_mode();
}
