use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode},
};
use ratatui::{backend::CrosstermBackend, Terminal, TerminalOptions, Viewport};
use rgb_tui_core::gradient::MIN_COLUMNS;
use rgb_tui_core::utils::debug::DebugTimer;
use rgb_tui_core::utils::logger;
use rgb_tui_core::{debug_module, InputController, PickerError, ResultExt, Rgb};

use crate::ui::events::{translate, AppEvent};
use crate::ui::view;

/// Owns the terminal for the lifetime of one picking session.
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    controller: InputController,
    max_width: u16,
}

impl TuiApp {
    pub fn new(initial: Rgb, gradient_rows: u16, max_width: u16) -> Result<Self> {
        let (width, _) = terminal::size().with_terminal_context("query terminal size")?;
        check_terminal_width(width)?;

        enable_raw_mode().with_terminal_context("enable raw mode")?;
        // Undo raw mode and mouse capture if setup fails halfway.
        let guard = RestoreGuard::new(restore_terminal);

        let mut stdout = io::stdout();
        execute!(stdout, EnableMouseCapture, EnableFocusChange)
            .with_terminal_context("enable mouse capture")?;

        let backend = CrosstermBackend::new(stdout);
        let viewport = Viewport::Inline(view::viewport_height(gradient_rows));
        let terminal = Terminal::with_options(backend, TerminalOptions { viewport })
            .with_terminal_context("create inline viewport")?;

        guard.disarm();
        Ok(Self {
            terminal,
            controller: InputController::new(initial, gradient_rows),
            max_width,
        })
    }

    /// Color currently selected
    pub fn rgb(&self) -> Rgb {
        self.controller.rgb()
    }

    /// Draw and dispatch events until a quit key arrives.
    pub fn run(&mut self) -> Result<()> {
        logger::info("picker started");

        loop {
            let max_width = self.max_width;
            let controller = &mut self.controller;
            let timer = DebugTimer::new("draw");
            self.terminal
                .draw(|frame| view::draw(frame, controller, max_width))
                .with_terminal_context("draw")?;
            timer.finish();

            let event = event::read().with_terminal_context("read event")?;
            match translate(&event) {
                AppEvent::Quit => break,
                AppEvent::Input(input) => {
                    let consumed = self.controller.handle_event(&input);
                    if !consumed {
                        debug_module!("TUI", "unconsumed {:?}", input);
                    }
                }
                AppEvent::Redraw => {
                    self.terminal.autoresize().with_terminal_context("resize")?;
                }
                AppEvent::Ignore => {}
            }
        }

        logger::info(&format!(
            "picker closed on {}",
            rgb_tui_core::format_hex(self.controller.rgb())
        ));
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = self.terminal.clear();
        restore_terminal();
    }
}

/// Narrowest terminal that still fits the window borders around a plane of
/// [`MIN_COLUMNS`] columns
pub const MIN_TERMINAL_WIDTH: u16 = MIN_COLUMNS + 2;

fn check_terminal_width(width: u16) -> Result<(), PickerError> {
    if width < MIN_TERMINAL_WIDTH {
        return Err(PickerError::Terminal(format!(
            "terminal is {} columns wide, need at least {}",
            width, MIN_TERMINAL_WIDTH
        )));
    }
    Ok(())
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture, DisableFocusChange, Show);
}

/// Runs `restore` on drop unless disarmed.
struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    fn disarm(mut self) {
        self.restore = None;
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}
