//! Terminal playback of recorded frames.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};
use life_core::DenseGrid;
use tracing::info;

use crate::{Animation, RenderResult};

/// Restores the terminal even if playback bails out early.
struct RawScreen;

impl RawScreen {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawScreen {
    fn drop(&mut self) {
        execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen).ok();
        terminal::disable_raw_mode().ok();
    }
}

/// Play `animation` in the terminal at its frame rate.
///
/// `q`, `Esc` or `Ctrl-C` stops playback. Returns the number of frames shown.
pub fn play(animation: &Animation) -> RenderResult<usize> {
    let frame_delay = Duration::from_secs(1) / animation.fps.max(1);
    let screen = RawScreen::enter()?;
    let mut stdout = io::stdout();
    let mut shown = 0;

    for (i, frame) in animation.frames.iter().enumerate() {
        let start = Instant::now();
        draw(&mut stdout, &animation.name, i, frame)?;
        shown += 1;

        if quit_requested(frame_delay.saturating_sub(start.elapsed()))? {
            break;
        }
    }

    drop(screen);
    info!(shown, total = animation.len(), "playback finished");
    Ok(shown)
}

fn draw<W: Write>(out: &mut W, name: &str, index: usize, frame: &DenseGrid) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        Print(format!("{name} - frame {index}\r\n"))
    )?;
    for row in frame.rows() {
        let line: String = row.iter().map(|&alive| if alive { '#' } else { ' ' }).collect();
        queue!(out, Print(line), Print("\r\n"))?;
    }
    out.flush()
}

/// Wait up to `timeout` for a quit key.
fn quit_requested(timeout: Duration) -> io::Result<bool> {
    let deadline = Instant::now() + timeout;

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !event::poll(remaining)? {
            return Ok(false);
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let ctrl_c =
                key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
            if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return Ok(true);
            }
        }
    }
}
