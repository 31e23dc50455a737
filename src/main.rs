//! Terminal entry point.
//!
//! Wires the library into a raw-mode terminal:
//!
//! 1. Parse `key=value` arguments into a [`Config`] and install tracing.
//! 2. Optionally prefetch the collection before the UI appears.
//! 3. Enter the alternate screen and run one select loop over key events,
//!    fetch responses, and the query debounce timer.
//! 4. Restore the terminal and abort any request still in flight.

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use dirbrowse::domain::InitialSnapshot;
use dirbrowse::observability::init_tracing;
use dirbrowse::source::{DirectorySource, HttpSource};
use dirbrowse::worker::{prefetch, FetchController};
use dirbrowse::{handle_event, initialize, Action, AppState, Config, Event, InputMode};
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Instant, Sleep};

/// Puts the terminal in raw mode on the alternate screen until dropped.
struct TerminalGuard {
    stdout: io::Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }

    fn draw(&mut self, frame: &str) -> io::Result<()> {
        self.stdout.write_all(frame.as_bytes())?;
        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.stdout, cursor::Show, LeaveAlternateScreen);
    }
}

/// Translates a key press into an application event for the current mode.
fn map_key(key: KeyEvent, mode: InputMode) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Event::Quit);
    }

    match mode {
        InputMode::Search => match key.code {
            KeyCode::Esc => Some(Event::ExitSearch),
            KeyCode::Enter => Some(Event::FocusResults),
            KeyCode::Backspace => Some(Event::Backspace),
            KeyCode::Char(c) => Some(Event::Char(c)),
            _ => None,
        },
        InputMode::Normal => match key.code {
            KeyCode::Char('/') => Some(Event::SearchMode),
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Esc => Some(Event::ExitSearch),
            KeyCode::Left | KeyCode::Char('h' | 'p') => Some(Event::PreviousPage),
            KeyCode::Right | KeyCode::Char('l' | 'n') => Some(Event::NextPage),
            KeyCode::Char(d @ '0'..='9') => d.to_digit(10).map(|n| Event::PageDigit(n as usize)),
            KeyCode::Char('r') => Some(Event::Retry),
            KeyCode::Char('R') => Some(Event::Refresh),
            _ => None,
        },
    }
}

/// What the event loop does with one read from the key channel.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Dispatch(Event),
    Resized { cols: usize, rows: usize },
    Ignore,
    /// The reader thread stopped; no further input can arrive.
    Closed,
}

fn classify(term_event: Option<TermEvent>, mode: InputMode) -> Input {
    match term_event {
        None => Input::Closed,
        Some(TermEvent::Key(key)) => map_key(key, mode).map_or(Input::Ignore, Input::Dispatch),
        Some(TermEvent::Resize(cols, rows)) => Input::Resized {
            cols: usize::from(cols),
            rows: usize::from(rows),
        },
        Some(_) => Input::Ignore,
    }
}

/// Reads terminal events on a blocking thread and forwards them to the loop.
fn spawn_key_reader() -> mpsc::UnboundedReceiver<TermEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "terminal event read failed");
                break;
            }
        }
    });
    rx
}

/// Event loop state that outlives a single iteration.
struct Session {
    state: AppState,
    controller: FetchController,
    terminal: TerminalGuard,
    rows: usize,
    cols: usize,
}

impl Session {
    /// Runs one event through the handler and executes its actions.
    ///
    /// Returns `Ok(false)` once the user asked to quit. A debounce request
    /// re-arms `commit_timer`.
    fn dispatch(&mut self, event: &Event, commit_timer: &mut std::pin::Pin<&mut Sleep>, armed: &mut bool) -> io::Result<bool> {
        let (should_render, actions) = handle_event(&mut self.state, event);

        for action in actions {
            match action {
                Action::Fetch => {
                    self.controller.start();
                }
                Action::ScheduleQueryCommit(delay) => {
                    commit_timer.as_mut().reset(Instant::now() + delay);
                    *armed = true;
                }
                Action::Quit => return Ok(false),
            }
        }

        if should_render {
            self.render()?;
        }
        Ok(true)
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = dirbrowse::ui::render(&self.state, self.rows, self.cols);
        self.terminal.draw(&frame)
    }
}

async fn run(config: Config) -> dirbrowse::Result<()> {
    let source: Arc<dyn DirectorySource> = Arc::new(HttpSource::new(config.endpoint.clone()));

    let initial = if config.prefetch {
        prefetch(source.as_ref()).await
    } else {
        InitialSnapshot::default()
    };

    let (controller, mut responses) = FetchController::new(Arc::clone(&source));
    let (cols, rows) = terminal::size()?;
    let mut session = Session {
        state: initialize(&config, initial),
        controller,
        terminal: TerminalGuard::enter()?,
        rows: usize::from(rows),
        cols: usize::from(cols),
    };
    let mut keys = spawn_key_reader();

    let commit_timer = tokio::time::sleep(config.debounce());
    tokio::pin!(commit_timer);
    let mut armed = false;

    session.dispatch(&Event::Mount, &mut commit_timer, &mut armed)?;

    loop {
        let event = tokio::select! {
            term_event = keys.recv() => match classify(term_event, session.state.input_mode) {
                Input::Dispatch(event) => event,
                Input::Resized { cols, rows } => {
                    session.cols = cols;
                    session.rows = rows;
                    Event::Resize
                }
                Input::Ignore => continue,
                Input::Closed => {
                    tracing::warn!("terminal input closed");
                    break;
                }
            },
            Some(response) = responses.recv() => {
                if !session.controller.accept(&response) {
                    continue;
                }
                Event::FetchCompleted(response.outcome)
            }
            () = &mut commit_timer, if armed => {
                armed = false;
                Event::CommitQuery
            }
        };

        if !session.dispatch(&event, &mut commit_timer, &mut armed)? {
            break;
        }
    }

    session.controller.abort();
    tracing::info!("directory browser exiting");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("dirbrowse: {e}");
            eprintln!("usage: dirbrowse [config=<file>] [key=value ...]");
            return ExitCode::from(2);
        }
    };

    init_tracing(&config);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "directory browser failed");
            eprintln!("dirbrowse: {e}");
            ExitCode::FAILURE
        }
    }
}
