//! Terminal setup and restoration for the user screen.

use std::io::{self, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Enters raw mode, the alternate screen and mouse capture.
///
/// A panic hook is installed so the terminal is restored before the panic
/// message is printed.
pub fn setup() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    ACTIVE.store(true, Ordering::SeqCst);
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;

    let default_panic = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore();
        default_panic(panic_info);
    }));

    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restores the terminal. Safe to call more than once.
pub fn restore() {
    if !ACTIVE.swap(false, Ordering::SeqCst) {
        return;
    }
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableMouseCapture);
    let _ = disable_raw_mode();
    let _ = stdout.execute(LeaveAlternateScreen);
}
