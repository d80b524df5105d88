use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::{thread_rng, Rng};

use platformer::assets::Images;
use platformer::config::{Settings, FRAME, SPRITE_IDS};
use platformer::display::{self, TerminalSurface};
use platformer::entities::Flow;
use platformer::game::Game;
use platformer::input::{InputState, Key};

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw alternate-screen mode while playing, so log lines
/// go to a file instead of stderr.
fn init_logging(path: &Path) {
    match File::create(path) {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(err) => {
            eprintln!("logging disabled: cannot open {}: {}", path.display(), err);
        }
    }
}

// ── Input translation ─────────────────────────────────────────────────────────

fn map_key(code: &KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        _ => None,
    }
}

/// Fold one terminal event into the frame's input state.
///
/// Esc and Ctrl+C leave the program regardless of game mode.
fn apply_event<W: Write>(
    event: Event,
    input: &mut InputState,
    surface: &mut TerminalSurface<W>,
) -> Flow {
    match event {
        Event::Key(KeyEvent { code, kind, modifiers, .. }) => {
            if kind == KeyEventKind::Press {
                match code {
                    KeyCode::Esc => return Flow::Quit,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Flow::Quit;
                    }
                    _ => {}
                }
            }
            if let Some(key) = map_key(&code) {
                match kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => input.press(key),
                    KeyEventKind::Release => input.release(key),
                }
            }
        }
        Event::Mouse(MouseEvent { kind, column, row, .. }) => {
            let (x, y) = surface.to_world(column, row);
            match kind {
                MouseEventKind::Down(MouseButton::Left) => input.click(x, y),
                MouseEventKind::Moved | MouseEventKind::Drag(_) => input.move_pointer(x, y),
                _ => {}
            }
        }
        Event::Resize(cols, rows) => surface.resize(cols, rows),
        _ => {}
    }
    Flow::Continue
}

// ── Frame loop ────────────────────────────────────────────────────────────────

fn run<W: Write>(
    surface: &mut TerminalSurface<W>,
    rx: &mpsc::Receiver<Event>,
    game: &mut Game,
    images: &Images,
) -> std::io::Result<()> {
    let mut input = InputState::new();

    loop {
        let frame_start = Instant::now();
        input.begin_frame();

        // Drain all pending input events (non-blocking)
        while let Ok(ev) = rx.try_recv() {
            if apply_event(ev, &mut input, surface) == Flow::Quit {
                log::info!("quit requested from keyboard");
                return Ok(());
            }
        }

        if game.update(&input) == Flow::Quit {
            return Ok(());
        }
        input.end_frame();

        display::render(surface, game, images)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let settings = Settings::from_env();
    init_logging(&settings.log_path);

    let seed = settings.seed.unwrap_or_else(|| thread_rng().gen());
    log::info!(
        "starting: assets={}, seed={}",
        settings.assets_dir.display(),
        seed
    );

    let images = Images::load_dir(&settings.assets_dir, &SPRITE_IDS);
    let mut game = Game::new(seed);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Key-release events are only available on kitty-protocol terminals;
    // elsewhere held keys expire through the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking event reads live on their own thread so the frame loop never
    // waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = terminal::size().and_then(|(cols, rows)| {
        let mut surface = TerminalSurface::new(&mut out, cols, rows);
        run(&mut surface, &rx, &mut game, &images)
    });

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("terminal error: {}", err);
    }
    log::info!("exiting with score {}", game.player.score);
    result
}
