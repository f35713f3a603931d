//! Crossterm terminal front-end for the pathfinding visualizer.
//!
//! [`Terminal`] paints a [`Grid`] as coloured blocks, two columns per node so
//! squares look square, and polls the keyboard for a quit request. The
//! terminal is restored when the value is dropped.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{Grid, NodeState, Point};

/// Colour of a node in the given state.
pub fn state_color(state: NodeState) -> CtColor {
    match state {
        NodeState::Open => CtColor::Rgb {
            r: 255,
            g: 255,
            b: 255,
        },
        NodeState::Start => CtColor::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        NodeState::End => CtColor::Rgb {
            r: 64,
            g: 224,
            b: 208,
        },
        NodeState::Barrier => CtColor::Rgb { r: 0, g: 0, b: 0 },
        NodeState::Visited => CtColor::Rgb { r: 255, g: 0, b: 0 },
        NodeState::Frontier => CtColor::Rgb { r: 0, g: 255, b: 0 },
        NodeState::Path => CtColor::Rgb {
            r: 128,
            g: 0,
            b: 128,
        },
    }
}

/// What a key press asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    Other,
}

/// Maps a key event to an [`Input`]. `q`, `Esc` and `Ctrl-C` quit.
pub fn classify_key(key: KeyEvent) -> Input {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        _ => Input::Other,
    }
}

/// A terminal in raw mode on the alternate screen.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    /// Switch the terminal into drawing mode.
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    /// Paint every node of `grid` and a one-line `status` below it.
    pub fn draw(&mut self, grid: &Grid, status: &str) -> io::Result<()> {
        for y in 0..grid.rows() {
            queue!(self.out, cursor::MoveTo(0, y as u16))?;
            for x in 0..grid.rows() {
                let state = grid.state(Point::new(x, y));
                queue!(self.out, SetBackgroundColor(state_color(state)), Print("  "))?;
            }
            queue!(self.out, ResetColor)?;
        }
        queue!(
            self.out,
            cursor::MoveTo(0, grid.rows() as u16 + 1),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(CtColor::Reset),
            Print(status),
            ResetColor
        )?;
        self.out.flush()
    }

    /// Non-blocking check for a quit key.
    pub fn poll_quit(&mut self) -> io::Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && classify_key(key) == Input::Quit {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Block until any key is pressed.
    pub fn wait_key(&mut self) -> io::Result<Input> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(classify_key(key));
                }
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("failed to leave raw mode: {e}");
        }
    }
}
