#![forbid(unsafe_code)]

mod config;
mod defaults;
mod http;
mod prompt;
mod render;

use clap::Parser;
use config::{
    Cli, Command, ContactArgs, PlannerCommand, Settings, ShopCommand, TodoCommand, Variant,
};
use ld_app::{
    AppError, ContactDesk, FormSubmitter, FormVariant, IMPORT_OK, JokePanel, Planner,
    PlannerDraft, Portfolio, QuizFrame, QuizPanel, Shop, TodoBoard,
};
use ld_core::clock::SystemClock;
use ld_core::form::ContactInput;
use ld_core::gate::{Confirmer, FixedAnswer};
use ld_core::portfolio::Theme;
use ld_core::text;
use ld_storage::{KvStore, MemoryKv, SqliteKv, StorageError};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LISTDECK_LOG";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Config(String),
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            _ => 1,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();
    if let Err(err) = run(cli) {
        eprintln!("listdeck: {err}");
        std::process::exit(err.exit_code());
    }
}

/// Opens the configured backend. Every controller gets its own handle; the
/// in-memory variant shares one set of slots for the whole run.
struct Backends {
    memory: Option<MemoryKv>,
    storage_dir: PathBuf,
}

impl Backends {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            memory: settings.memory.then(MemoryKv::new),
            storage_dir: settings
                .storage_dir
                .clone()
                .unwrap_or_else(defaults::default_storage_dir),
        }
    }

    fn open(&self) -> Result<Box<dyn KvStore>, StorageError> {
        match &self.memory {
            Some(kv) => Ok(Box::new(kv.clone())),
            None => {
                tracing::debug!(dir = %self.storage_dir.display(), "opening store");
                Ok(Box::new(SqliteKv::open(&self.storage_dir)?))
            }
        }
    }
}

fn confirmer(assume_yes: bool) -> Box<dyn Confirmer> {
    if assume_yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(prompt::StdinConfirmer::new(
            std::io::stdin().lock(),
            std::io::stdout(),
        ))
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = cli.settings;
    let backends = Backends::from_settings(&settings);
    match cli.command {
        Command::Todo(command) => run_todo(command, &settings, &backends),
        Command::Planner(command) => run_planner(command, &settings, &backends),
        Command::Shop(command) => run_shop(command, &settings, &backends),
        Command::Quiz => run_quiz(),
        Command::Joke => run_joke(&settings),
        Command::Contact(args) => run_contact(args, &settings),
        Command::Theme { toggle } => run_theme(toggle, &backends),
    }
}

fn run_todo(command: TodoCommand, settings: &Settings, backends: &Backends) -> Result<(), CliError> {
    let mut board = TodoBoard::open(backends.open()?, Box::new(SystemClock));
    match command {
        TodoCommand::List { filter } => board.set_filter(filter),
        TodoCommand::Add { text } => {
            let id = board.add(&text)?;
            println!("Added #{id}.");
        }
        TodoCommand::Edit { id, text } => {
            text::required(&text).map_err(AppError::from)?;
            if !board.edit(id, Some(&text)) {
                return Err(AppError::UnknownItem(id).into());
            }
        }
        TodoCommand::Toggle { id } => {
            if !board.toggle(id) {
                return Err(AppError::UnknownItem(id).into());
            }
        }
        TodoCommand::Remove { id } => {
            if !board.store().contains(id) {
                return Err(AppError::UnknownItem(id).into());
            }
            if !board.remove(id, confirmer(settings.yes).as_mut())? {
                println!("Kept #{id}.");
            }
        }
        TodoCommand::ClearCompleted => {
            let removed = board.clear_completed(confirmer(settings.yes).as_mut())?;
            println!("Removed {removed} completed task(s).");
        }
    }
    print!("{}", render::todo(board.frame()));
    Ok(())
}

fn run_planner(
    command: PlannerCommand,
    settings: &Settings,
    backends: &Backends,
) -> Result<(), CliError> {
    let mut planner = Planner::open(backends.open()?, Box::new(SystemClock));
    match command {
        PlannerCommand::List { search, category } => {
            planner.set_search(search);
            planner.set_category(category);
        }
        PlannerCommand::Add {
            text,
            category,
            due,
        } => {
            planner.submit(PlannerDraft {
                text,
                category,
                due_date: due,
            })?;
        }
        PlannerCommand::Edit {
            id,
            text,
            category,
            due,
        } => {
            let mut draft = planner
                .begin_edit(id)
                .ok_or(AppError::UnknownItem(id))?;
            if let Some(text) = text {
                draft.text = text;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(due) = due {
                draft.due_date = Some(due);
            }
            let outcome = planner.submit(draft);
            planner.cancel_edit();
            outcome?;
        }
        PlannerCommand::Toggle { id } => {
            if !planner.toggle(id) {
                return Err(AppError::UnknownItem(id).into());
            }
        }
        PlannerCommand::Remove { id } => {
            if !planner.tasks().iter().any(|t| t.id == id) {
                return Err(AppError::UnknownItem(id).into());
            }
            if !planner.remove(id, confirmer(settings.yes).as_mut())? {
                println!("Kept #{id}.");
            }
        }
        PlannerCommand::Export { out } => {
            let json = planner.export_json()?;
            std::fs::write(&out, json)?;
            tracing::info!(path = %out.display(), tasks = planner.tasks().len(), "planner exported");
            println!("Exported {} task(s) to {}.", planner.tasks().len(), out.display());
            return Ok(());
        }
        PlannerCommand::Import { file } => {
            let payload = std::fs::read_to_string(&file)?;
            planner.import_json(&payload)?;
            println!("{IMPORT_OK}");
        }
    }
    print!("{}", render::planner(planner.frame()));
    Ok(())
}

fn run_shop(command: ShopCommand, settings: &Settings, backends: &Backends) -> Result<(), CliError> {
    let shop = Shop::open(backends.open()?, usize::from(settings.page_size));
    let mut confirmer = confirmer(settings.yes);
    let outcome = shop_session(shop, command, confirmer.as_mut())?;
    print!("{}", outcome.output);
    for notice in &outcome.notices {
        eprintln!("! {notice}");
    }
    Ok(())
}

struct ShopOutcome {
    output: String,
    /// Store notices raised during the run, each reported once.
    notices: Vec<String>,
}

fn shop_session(
    mut shop: Shop,
    command: ShopCommand,
    confirmer: &mut dyn Confirmer,
) -> Result<ShopOutcome, CliError> {
    let mut notices = shop.frame().notices.clone();
    let opened_at = shop.renders();
    let output = match command {
        ShopCommand::List {
            search,
            category,
            sort,
            page,
        } => {
            shop.set_search(search);
            shop.set_category(category);
            shop.set_sort(sort);
            shop.go_to(page);
            render::shop(shop.frame())
        }
        ShopCommand::Add { product } => {
            let message = shop.add_to_cart(product)?;
            format!("{message}\ncart: {}\n", shop.cart_count())
        }
        ShopCommand::Cart => render::cart(&shop.cart_view()),
        ShopCommand::Remove { line } => {
            if !shop.lines().iter().any(|l| l.id == line) {
                return Err(AppError::UnknownItem(line).into());
            }
            shop.remove_line(line, confirmer)?;
            render::cart(&shop.cart_view())
        }
        ShopCommand::Checkout => format!("{}\n", shop.checkout().message()),
    };
    if shop.renders() > opened_at {
        notices.extend(shop.frame().notices.iter().cloned());
    }
    Ok(ShopOutcome { output, notices })
}

fn run_quiz() -> Result<(), CliError> {
    let mut panel = QuizPanel::with_default_bank()?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut stdout = std::io::stdout();

    loop {
        print!("{}", render::quiz(panel.frame()));
        let QuizFrame::Question { answers, .. } = panel.frame() else {
            return Ok(());
        };
        let count = answers.len();
        if panel.session().can_advance() {
            write!(stdout, "Enter for {}: ", panel.session().advance_label())?;
            stdout.flush()?;
            if prompt::read_line(&mut input).is_none() {
                return Ok(());
            }
            panel.advance()?;
            continue;
        }

        write!(stdout, "Your answer (1-{count}, q to quit): ")?;
        stdout.flush()?;
        let Some(line) = prompt::read_line(&mut input) else {
            return Ok(());
        };
        if line.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        match line.parse::<usize>() {
            Ok(choice) if (1..=count).contains(&choice) => {
                let marks = panel.answer(choice - 1)?;
                println!("{}", if marks.was_correct() { "Correct!" } else { "Wrong." });
            }
            _ => println!("Pick a number between 1 and {count}."),
        }
    }
}

fn run_joke(settings: &Settings) -> Result<(), CliError> {
    let client = http::client(settings.http_timeout_s)?;
    let mut panel = JokePanel::new(http::HttpJokeSource::new(client, &settings.joke_url));
    eprintln!("{}", panel.widget().button_label());
    panel.fetch();
    println!("{}", panel.display().text());
    Ok(())
}

fn run_contact(args: ContactArgs, settings: &Settings) -> Result<(), CliError> {
    let input = ContactInput {
        name: args.name,
        email: args.email,
        message: args.message,
        honeypot: args.honeypot,
    };
    match args.variant {
        Variant::Strict => {
            let submitter = http::SimulatedSubmitter::new(settings.submit_delay_ms);
            send_contact(ContactDesk::new(FormVariant::Strict, submitter), &input);
        }
        Variant::Portfolio => {
            let endpoint = settings.form_endpoint.clone().ok_or_else(|| {
                CliError::Config(
                    "the portfolio form needs --form-endpoint or LISTDECK_FORM_ENDPOINT".to_string(),
                )
            })?;
            let client = http::client(settings.http_timeout_s)?;
            let submitter = http::HttpFormSubmitter::new(client, endpoint);
            send_contact(ContactDesk::new(FormVariant::Portfolio, submitter), &input);
        }
    }
    Ok(())
}

fn send_contact<S: FormSubmitter>(mut desk: ContactDesk<S>, input: &ContactInput) {
    eprintln!("Submitting...");
    let report = desk.submit(input);
    for error in &report.field_errors {
        println!("{}: {}", error.field.as_str(), error.message);
    }
    if let Some(status) = report.status {
        println!("{status}");
    }
}

fn run_theme(toggle: bool, backends: &Backends) -> Result<(), CliError> {
    let mut portfolio = Portfolio::open(backends.open()?);
    let theme = if toggle {
        portfolio.toggle_theme()
    } else {
        portfolio.theme()
    };
    for notice in portfolio.take_notices() {
        eprintln!("! {notice}");
    }
    let name = match theme {
        Theme::Dark => "dark",
        Theme::Light => "light",
    };
    println!("theme: {name} (toggle shows {})", theme.icon());
    Ok(())
}
