mod actions;
mod app;
mod render;
mod sample;
mod terminal;

use std::fs::File;
use std::io;
use std::path::PathBuf;

use crossterm::event::{Event, EventStream, MouseButton, MouseEventKind};
use futures::StreamExt;
use log::{debug, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;
use treelist::input::convert_key_event;
use treelist::node::load_nodes;
use treelist::tree::validate_unique_ids;
use treelist::{TreeConfig, TreeError};

use app::{Flow, Host};
use terminal::TerminalGuard;

const USAGE: &str = "usage: treelist-tui [--config <config.json>] [nodes.json]";

#[derive(Debug, Error)]
enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Usage(String),
}

#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    nodes: Option<PathBuf>,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, AppError> {
        let mut options = Options::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| AppError::Usage("--config needs a path".to_string()))?;
                    options.config = Some(path.into());
                }
                flag if flag.starts_with('-') => {
                    return Err(AppError::Usage(format!("unknown flag '{flag}'")));
                }
                path if options.nodes.is_none() => options.nodes = Some(path.into()),
                extra => return Err(AppError::Usage(format!("unexpected argument '{extra}'"))),
            }
        }
        Ok(options)
    }
}

async fn run(options: Options) -> Result<(), AppError> {
    let nodes = match &options.nodes {
        Some(path) => load_nodes(path)?,
        None => sample::nodes(),
    };
    validate_unique_ids(&nodes)?;
    let config = match &options.config {
        Some(path) => TreeConfig::from_json_file(path)?,
        None => TreeConfig::default(),
    };
    info!("Loaded {} root nodes, config {:?}", nodes.len(), config);

    let mut host = Host::new(nodes, config);
    let mut guard = TerminalGuard::new()?;
    let mut events = EventStream::new();

    loop {
        let (width, height) = crossterm::terminal::size()?;
        host.draw(guard.stdout(), width, height)?;

        let Some(event) = events.next().await else {
            break;
        };
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                log::error!("Event stream error: {}", e);
                continue;
            }
        };
        debug!("Crossterm event: {:?}", event);

        let flow = match event {
            Event::Key(key_event) => match convert_key_event(key_event) {
                Some(key) => host.handle_key(key),
                None => Flow::Continue,
            },
            Event::Mouse(mouse) => {
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        host.handle_click(mouse.column, mouse.row)
                    }
                    MouseEventKind::ScrollUp => host.scroll_by(-3),
                    MouseEventKind::ScrollDown => host.scroll_by(3),
                    _ => {}
                }
                Flow::Continue
            }
            _ => Flow::Continue,
        };

        if flow == Flow::Quit {
            info!("Quit requested");
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let log_file = File::create("treelist-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let result = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => run(options).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if matches!(e, AppError::Usage(_)) {
            eprintln!("{USAGE}");
        }
        std::process::exit(1);
    }
}
