//! headzoom: zoom into one heading's section of an outline document.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use headzoom::{app_state, config, input, report, ui, zoom};
use log::{info, LevelFilter};
use ratatui::crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "headzoom")]
#[command(about = "Zoom into a heading's section of an outline document", long_about = None)]
struct Args {
    /// Files or directories to open
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// File extensions to match when scanning directories
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Print each document's outline as JSON and exit
    #[arg(long)]
    outline: bool,

    /// Write a debug log to this file
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

fn setup_logging(path: &Path) -> io::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ));
        })
        .level(LevelFilter::Debug)
        .chain(fern::log_file(path)?)
        .apply()
        .map_err(io::Error::other)
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(ref path) = args.log {
        setup_logging(path)?;
    }

    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let paths = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths
    };
    let files = input::find_documents(paths, &cfg.file_extensions)?;

    if files.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let controller = zoom::ZoomController::from_config(&cfg);

    if args.outline {
        let reports = files
            .iter()
            .map(|path| {
                let text = input::read_text(path)?;
                Ok(report::OutlineReport::build(
                    &path.display().to_string(),
                    &text,
                    controller.format(),
                ))
            })
            .collect::<io::Result<Vec<_>>>()?;
        let json = serde_json::to_string_pretty(&reports).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    let documents = files
        .iter()
        .map(|path| input::load_document(path))
        .collect::<io::Result<Vec<_>>>()?;
    info!("opened {} documents", documents.len());

    run_tui(app_state::AppState::new(documents, controller))
}

fn run_tui(mut app: app_state::AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                app.handle_key(key);
            }
            Event::Mouse(mouse) => {
                app.handle_mouse(mouse);
            }
            _ => {}
        }
    }
    Ok(())
}
