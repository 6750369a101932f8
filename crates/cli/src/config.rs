#![forbid(unsafe_code)]

use clap::{Args, Parser, Subcommand, ValueEnum};
use ld_core::ids::ItemId;
use ld_core::joke::DEFAULT_JOKE_URL;
use ld_core::view::{Selector, SortKey};
use std::convert::Infallible;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "listdeck", version)]
#[command(about = "Task lists, a small shop, a quiz and friends, kept in a local store")]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) settings: Settings,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Args)]
pub(crate) struct Settings {
    /// Store directory (default: <repo root or cwd>/.listdeck).
    #[arg(long, global = true, env = "LISTDECK_STORAGE_DIR")]
    pub(crate) storage_dir: Option<PathBuf>,

    /// Keep everything in memory for this run.
    #[arg(long, global = true)]
    pub(crate) memory: bool,

    #[arg(
        long,
        global = true,
        env = "LISTDECK_PAGE_SIZE",
        default_value_t = 6,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub(crate) page_size: u16,

    #[arg(long, global = true, env = "LISTDECK_JOKE_URL", default_value = DEFAULT_JOKE_URL)]
    pub(crate) joke_url: String,

    /// Where the portfolio contact form posts to.
    #[arg(long, global = true, env = "LISTDECK_FORM_ENDPOINT")]
    pub(crate) form_endpoint: Option<String>,

    /// Simulated delay of the strict contact form.
    #[arg(long, global = true, env = "LISTDECK_SUBMIT_DELAY_MS", default_value_t = 1500)]
    pub(crate) submit_delay_ms: u64,

    #[arg(long, global = true, env = "LISTDECK_HTTP_TIMEOUT_S", default_value_t = 15)]
    pub(crate) http_timeout_s: u64,

    /// Answer every confirmation with yes.
    #[arg(short = 'y', long, global = true, env = "LISTDECK_ASSUME_YES")]
    pub(crate) yes: bool,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Checklist with a status filter.
    #[command(subcommand)]
    Todo(TodoCommand),
    /// Categorised tasks with due dates, import and export.
    #[command(subcommand)]
    Planner(PlannerCommand),
    /// Product catalog and cart.
    #[command(subcommand)]
    Shop(ShopCommand),
    /// Interactive three-question quiz.
    Quiz,
    /// Fetch one programming joke.
    Joke,
    /// Send the contact form.
    Contact(ContactArgs),
    /// Show or flip the portfolio theme.
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum TodoCommand {
    List {
        #[arg(long, default_value = "all", value_parser = parse_selector)]
        filter: Selector,
    },
    Add {
        text: String,
    },
    Edit {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
        text: String,
    },
    Toggle {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
    },
    Remove {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
    },
    ClearCompleted,
}

#[derive(Debug, Subcommand)]
pub(crate) enum PlannerCommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all", value_parser = parse_selector)]
        category: Selector,
    },
    Add {
        text: String,
        #[arg(long, default_value = "")]
        category: String,
        /// YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
    },
    Edit {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// YYYY-MM-DD; an empty value clears it.
        #[arg(long)]
        due: Option<String>,
    },
    Toggle {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
    },
    Remove {
        #[arg(value_parser = parse_item_id)]
        id: ItemId,
    },
    Export {
        #[arg(long, default_value = ld_app::EXPORT_FILE_NAME)]
        out: PathBuf,
    },
    Import {
        file: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum ShopCommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all", value_parser = parse_selector)]
        category: Selector,
        #[arg(long, default_value = "default", value_parser = SortKey::parse)]
        sort: SortKey,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    Add {
        #[arg(value_parser = parse_item_id)]
        product: ItemId,
    },
    Cart,
    Remove {
        #[arg(value_parser = parse_item_id)]
        line: ItemId,
    },
    Checkout,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub(crate) enum Variant {
    #[default]
    Strict,
    Portfolio,
}

#[derive(Debug, Args)]
pub(crate) struct ContactArgs {
    #[arg(long, value_enum, default_value_t = Variant::Strict)]
    pub(crate) variant: Variant,
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    #[arg(long, default_value = "")]
    pub(crate) email: String,
    #[arg(long, default_value = "")]
    pub(crate) message: String,
    #[arg(long, default_value = "", hide = true)]
    pub(crate) honeypot: String,
}

fn parse_item_id(raw: &str) -> Result<ItemId, ld_core::ids::ItemIdError> {
    ItemId::parse(raw)
}

fn parse_selector(raw: &str) -> Result<Selector, Infallible> {
    Ok(Selector::parse(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_pages() {
        let cli = Cli::try_parse_from(["listdeck", "shop", "list"]).expect("parse");
        assert_eq!(cli.settings.page_size, 6);
        assert_eq!(cli.settings.submit_delay_ms, 1500);
        assert_eq!(cli.settings.joke_url, DEFAULT_JOKE_URL);
        let Command::Shop(ShopCommand::List { sort, category, page, .. }) = cli.command else {
            panic!("expected shop list");
        };
        assert_eq!(sort, SortKey::Insertion);
        assert_eq!(category, Selector::All);
        assert_eq!(page, 1);
    }

    #[test]
    fn zero_page_size_is_a_usage_error() {
        let err = Cli::try_parse_from(["listdeck", "--page-size", "0", "shop", "list"])
            .expect_err("page size 0");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn ids_accept_a_hash_prefix() {
        let cli = Cli::try_parse_from(["listdeck", "todo", "toggle", "#4"]).expect("parse");
        let Command::Todo(TodoCommand::Toggle { id }) = cli.command else {
            panic!("expected todo toggle");
        };
        assert_eq!(id, ItemId::new(4));
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        assert!(Cli::try_parse_from(["listdeck", "shop", "list", "--sort", "cheapest"]).is_err());
    }
}
