mod app;
mod config;
mod engine;
mod error;
mod events;
mod log;
mod range;
mod tui;

use anyhow::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use tokio::sync::mpsc;

use app::App;
use config::{CliOverrides, Config};
use engine::DisplayUpdate;
use events::{Action, EventHandler};

const USAGE: &str = "\
Usage: numpick [OPTIONS]

Options:
  -m, --max <N>          Upper bound of the range (default 45)
  -i, --instant          Start with instant result enabled
  -x, --exclude <IDS>    Comma-separated ids never drawn, e.g. 3,17
  -c, --config <PATH>    Config file (default ~/.config/numpick/config.toml)
  -h, --help             Print help
  -V, --version          Print version";

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum CliCommand {
    Run {
        overrides: CliOverrides,
        config_path: Option<PathBuf>,
    },
    Help,
    Version,
}

/// Parse CLI arguments (without the program name).
///
/// Malformed arguments produce a warning and are ignored.
fn parse_args(args: impl IntoIterator<Item = String>) -> CliCommand {
    let mut overrides = CliOverrides::default();
    let mut config_path = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return CliCommand::Help,
            "--version" | "-V" => return CliCommand::Version,
            "--instant" | "-i" => overrides.instant_mode = true,
            "--max" | "-m" => match args.next() {
                Some(value) => overrides.upper_bound = Some(value),
                None => eprintln!("Warning: {} requires a number", arg),
            },
            "--exclude" | "-x" => match args.next() {
                Some(value) => overrides.exclude = Some(parse_id_list(&value)),
                None => eprintln!("Warning: {} requires a list of ids", arg),
            },
            "--config" | "-c" => match args.next() {
                Some(value) => config_path = Some(PathBuf::from(value)),
                None => eprintln!("Warning: {} requires a path", arg),
            },
            _ => eprintln!("Warning: ignoring unknown argument '{}'", arg),
        }
    }

    CliCommand::Run {
        overrides,
        config_path,
    }
}

/// Parse "3, 17,21" into ids, skipping anything that isn't a positive integer.
fn parse_id_list(text: &str) -> Vec<u32> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| match part.parse::<u32>() {
            Ok(id) if id >= 1 => Some(id),
            _ => {
                eprintln!("Warning: '{}' is not a valid id, skipping", part);
                None
            }
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let (overrides, config_path) = match parse_args(std::env::args().skip(1)) {
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Version => {
            println!("numpick {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        CliCommand::Run {
            overrides,
            config_path,
        } => (overrides, config_path),
    };

    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
    }
    log::install_panic_hook();

    let config = Config::load(config_path.as_deref()).with_overrides(overrides);
    log::log_session(&config);

    // Setup terminal
    tui::setup_terminal()?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // Display updates flow from the engine's task back to this loop
    let (display_tx, mut display_rx) = mpsc::unbounded_channel::<DisplayUpdate>();
    let mut app = App::new(&config, display_tx);

    // Run the app
    let result = run_app(&mut terminal, &mut app, &mut display_rx).await;

    // Restore terminal
    tui::restore_terminal()?;
    terminal.show_cursor()?;
    log::log("=== numpick exiting ===");

    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    display_rx: &mut mpsc::UnboundedReceiver<DisplayUpdate>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            // Terminal events (keyboard, mouse)
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        if action != Action::None {
                            log::log_event(&format!("{:?}", action));
                            app.dispatch(action);
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            // Engine output, applied in the order produced
            Some(update) = display_rx.recv() => {
                app.apply_display_update(update);
                // Catch up on a backlog before redrawing; skipped frames are only cosmetic
                while let Ok(update) = display_rx.try_recv() {
                    app.apply_display_update(update);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        assert_eq!(
            parse_args(args(&[])),
            CliCommand::Run {
                overrides: CliOverrides::default(),
                config_path: None,
            }
        );
    }

    #[test]
    fn test_parse_args_all_options() {
        let command = parse_args(args(&["-m", "30", "--instant", "--exclude", "3, 5,x,0", "-c", "/tmp/np.toml"]));
        assert_eq!(
            command,
            CliCommand::Run {
                overrides: CliOverrides {
                    upper_bound: Some("30".to_string()),
                    instant_mode: true,
                    exclude: Some(vec![3, 5]),
                },
                config_path: Some(PathBuf::from("/tmp/np.toml")),
            }
        );
    }

    #[test]
    fn test_parse_args_help_and_version() {
        assert_eq!(parse_args(args(&["--instant", "-h"])), CliCommand::Help);
        assert_eq!(parse_args(args(&["-V"])), CliCommand::Version);
    }

    #[test]
    fn test_parse_args_missing_value_ignored() {
        assert_eq!(
            parse_args(args(&["--max"])),
            CliCommand::Run {
                overrides: CliOverrides::default(),
                config_path: None,
            }
        );
    }
}
