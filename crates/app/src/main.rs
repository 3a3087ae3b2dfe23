use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use study_core::model::Deck;
use study_core::study::StudyState;
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "Flashcard Study App";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidStartCard { raw: String },
    StartCardOutOfRange { card: usize, total: usize },
    BlankTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidStartCard { raw } => write!(f, "invalid --start-card value: {raw}"),
            ArgsError::StartCardOutOfRange { card, total } => {
                write!(f, "--start-card {card} is outside 1..={total}")
            }
            ArgsError::BlankTitle => write!(f, "--title must not be blank"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--start-card <n>] [--title <text>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --start-card 1");
    eprintln!("  --title \"{DEFAULT_TITLE}\"");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLASHCARDS_START_CARD, FLASHCARDS_TITLE, RUST_LOG");
}

struct DesktopApp {
    deck: Arc<Deck>,
    start_index: usize,
    title: String,
}

impl DesktopApp {
    /// # Errors
    ///
    /// Returns `study_core::Error::Study` if the start card is not in `deck`.
    fn new(deck: Arc<Deck>, args: &Args) -> Result<Self, study_core::Error> {
        let state = StudyState::starting_at(deck.len(), args.start_index())?;
        Ok(Self {
            deck,
            start_index: state.index(),
            title: args.title.clone(),
        })
    }
}

impl UiApp for DesktopApp {
    fn deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    fn start_index(&self) -> usize {
        self.start_index
    }

    fn title(&self) -> String {
        self.title.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    /// One-based, as typed by the user.
    start_card: usize,
    title: String,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Launch(Args),
    Help,
}

impl Args {
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
        total: usize,
    ) -> Result<Command, ArgsError> {
        let mut start_raw = env("FLASHCARDS_START_CARD");
        let mut title = env("FLASHCARDS_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--start-card" => start_raw = Some(require_value(&mut args, "--start-card")?),
                "--title" => title = require_value(&mut args, "--title")?,
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let start_card = match start_raw {
            Some(raw) => parse_start_card(&raw, total)?,
            None => 1,
        };
        if title.trim().is_empty() {
            return Err(ArgsError::BlankTitle);
        }

        Ok(Command::Launch(Self { start_card, title }))
    }

    fn start_index(&self) -> usize {
        self.start_card - 1
    }
}

fn parse_start_card(raw: &str, total: usize) -> Result<usize, ArgsError> {
    let card: usize = raw
        .trim()
        .parse()
        .map_err(|_| ArgsError::InvalidStartCard {
            raw: raw.to_string(),
        })?;
    if card == 0 || card > total {
        return Err(ArgsError::StartCardOutOfRange { card, total });
    }
    Ok(card)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let deck = Deck::builtin();
    let cmd = Args::parse(
        std::env::args().skip(1),
        |key| std::env::var(key).ok(),
        deck.len().get(),
    )
    .inspect_err(|_| print_usage())?;

    let args = match cmd {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Launch(args) => args,
    };

    log::info!(
        "starting on card {} of {} (title: {:?})",
        args.start_card,
        deck.len(),
        args.title
    );

    let app = DesktopApp::new(Arc::new(deck.clone()), &args)?;
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app.title())
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
