//! Twoslit - two-slit interference in the terminal.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use twoslit::app::App;
use twoslit::input;
use twoslit::physics::{Parameters, DEFAULT_D, DEFAULT_THETA0};
use twoslit::util::TerminalGuard;
use twoslit::{ui, util};

#[derive(Parser, Debug)]
#[command(name = "twoslit")]
#[command(about = "Two-slit, far-field interference viewer", long_about = None)]
struct Args {
    /// Initial slit spacing in wavelengths (0 to 10)
    #[arg(long, default_value_t = DEFAULT_D, allow_negative_numbers = true)]
    d: f64,

    /// Initial incidence angle in units of pi (-0.5 to 0.5)
    #[arg(long, default_value_t = DEFAULT_THETA0, allow_negative_numbers = true)]
    theta0: f64,

    /// Print the sample table as CSV and exit
    #[arg(long)]
    dump: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        truncate_log(args.log.as_deref())?;
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Twoslit");
    }

    let initial = match Parameters::new(args.d, args.theta0) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("Rejected initial parameters: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        },
    };

    let app = App::new(initial);

    if args.dump {
        let stdout = io::stdout();
        util::write_samples(&mut stdout.lock(), &app.pattern)?;
        tracing::info!("Dumped {} samples", app.pattern.samples.len());
        return Ok(());
    }

    // Setup terminal; the guard restores it on every exit path
    let mut guard = TerminalGuard::enter()?;
    let res = run_in_terminal(app);

    // Restore terminal
    guard.restore()?;

    if let Err(err) = res {
        tracing::error!("Event loop failed: {}", err);
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Twoslit exited");
    }

    Ok(())
}

/// Start each logged session with an empty file.
fn truncate_log(path: Option<&std::path::Path>) -> Result<()> {
    if let Some(path) = path {
        std::fs::File::create(path)?;
    }
    Ok(())
}

fn run_in_terminal(app: App) -> Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    let res = run_app(&mut terminal, app);
    terminal.show_cursor()?;
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = input::map_key(key) {
                    if !app.apply(action) {
                        return Ok(());
                    }
                }
            },
            Event::Mouse(MouseEvent {
                kind, column, row, ..
            }) => match kind {
                MouseEventKind::Down(MouseButton::Left) => app.mouse_down(column, row),
                MouseEventKind::Drag(MouseButton::Left) => app.mouse_drag(column, row),
                MouseEventKind::Up(MouseButton::Left) => app.mouse_up(),
                MouseEventKind::Moved => app.mouse_move(column, row),
                _ => {},
            },
            _ => {},
        }
    }
}
