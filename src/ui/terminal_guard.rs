use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

/// Puts the terminal back the way the carousel found it. Runs at most once,
/// from whichever comes first: [`Drop`] or the panic hook.
pub struct TerminalGuard {
    armed: Arc<Mutex<bool>>,
}

impl TerminalGuard {
    fn arm() -> Self {
        let guard = Self {
            armed: Arc::new(Mutex::new(true)),
        };

        let armed = Arc::clone(&guard.armed);
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            disarm(&armed);
            previous_hook(info);
        }));

        guard
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        disarm(&self.armed);
    }
}

fn disarm(armed: &Mutex<bool>) {
    let mut armed = armed.lock();
    if std::mem::take(&mut *armed) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableMouseCapture);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Raw mode, alternate screen, and mouse reporting for the carousel host.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::arm();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
