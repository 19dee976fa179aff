//! Folio CLI — browse the portfolio gallery from the terminal.
//!
//! Commands:
//! - `login` / `logout` / `whoami` — session management
//! - `list` — fetch, filter, and paginate the gallery
//! - `like` / `comment` — react to an entry (then the list is refetched)
//! - `submit` — post a new entry
//! - `options` — print the fixed filter sets

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use folio_client::{HttpApi, NewEntry, PortfolioStore, Session, TokenStore};
use folio_core::domain::taxonomy;
use folio_core::ListView;

mod config;
mod render;

#[derive(Parser)]
#[command(name = "folio", about = "Folio CLI — portfolio gallery client")]
struct Cli {
    /// API base URL. Falls back to FOLIO_API_URL, then the config file.
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session token.
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
    /// Log out and discard the session token.
    Logout,
    /// Show the current user.
    Whoami,
    /// List gallery entries with optional filters and a page number.
    List {
        /// Case-insensitive keyword over title and description.
        #[arg(long, default_value = "")]
        keyword: String,

        /// Exact industry (see `folio options`).
        #[arg(long, default_value = "")]
        industry: String,

        /// Exact experience bracket (see `folio options`).
        #[arg(long, default_value = "")]
        experience: String,

        /// Exact main color (see `folio options`).
        #[arg(long, default_value = "")]
        color: String,

        /// Page number (1-based, clamped to the filtered total).
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Like an entry.
    Like {
        /// Entry ID.
        id: u64,
    },
    /// Comment on an entry.
    Comment {
        /// Entry ID.
        id: u64,

        /// Comment text.
        text: String,
    },
    /// Submit a new entry.
    Submit {
        #[arg(long)]
        title: String,

        #[arg(long)]
        url: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        industry: String,

        #[arg(long)]
        experience: String,

        #[arg(long)]
        color: String,
    },
    /// Print the fixed industry, experience, and color sets.
    Options,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Options = cli.command {
        print_options();
        return Ok(());
    }

    let api_url = config::resolve_api_url(cli.api_url)?;
    let mut api = HttpApi::new(&api_url)?;
    let tokens = TokenStore::default_path()
        .map(TokenStore::new)
        .context("no per-user config directory on this platform")?;

    // Attempt session restore before anything else; a dead token is
    // silently discarded and the command runs unauthenticated.
    let mut session = Session::new();
    session.restore(&mut api, &tokens);

    match cli.command {
        Commands::Login { email, password } => {
            let user = session.login(&mut api, &tokens, &email, &password)?;
            println!("logged in as {} <{}>", user.name, user.email);
            Ok(())
        }
        Commands::Logout => {
            session.logout(&mut api, &tokens)?;
            println!("logged out");
            Ok(())
        }
        Commands::Whoami => {
            match session.current_user() {
                Some(user) => {
                    let role = if user.is_admin { " (admin)" } else { "" };
                    println!("{} <{}>{role}", user.name, user.email);
                }
                None => println!("not logged in"),
            }
            Ok(())
        }
        Commands::List {
            keyword,
            industry,
            experience,
            color,
            page,
        } => run_list(&api, &session, keyword, industry, experience, color, page),
        Commands::Like { id } => {
            require_login(&session)?;
            let mut store = PortfolioStore::new();
            store.like(&api, id)?;
            let likes = store
                .entries()
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.likes_count());
            match likes {
                Some(n) => println!("liked entry {id} ({n} likes)"),
                None => println!("liked entry {id}"),
            }
            Ok(())
        }
        Commands::Comment { id, text } => {
            require_login(&session)?;
            let mut store = PortfolioStore::new();
            store.comment(&api, id, &text)?;
            println!("commented on entry {id}");
            Ok(())
        }
        Commands::Submit {
            title,
            url,
            description,
            industry,
            experience,
            color,
        } => {
            require_login(&session)?;
            let entry = NewEntry {
                title,
                description,
                url,
                industry,
                experience,
                color,
            };
            let mut store = PortfolioStore::new();
            store.create(&api, &entry)?;
            println!("submitted ({} entries now listed)", store.entries().len());
            Ok(())
        }
        Commands::Options => unreachable!("handled above"),
    }
}

fn run_list(
    api: &HttpApi,
    session: &Session,
    keyword: String,
    industry: String,
    experience: String,
    color: String,
    page: usize,
) -> Result<()> {
    let mut store = PortfolioStore::new();
    store.fetch_all(api)?;

    let mut view = ListView::default();
    if !keyword.is_empty() {
        view.set_keyword(keyword);
    }
    if !industry.is_empty() {
        view.set_industry(industry);
    }
    if !experience.is_empty() {
        view.set_experience(experience);
    }
    if !color.is_empty() {
        view.set_color(color);
    }
    view.goto_page(page, store.entries());

    let page_view = view.select(store.entries());
    if page_view.entries.is_empty() {
        println!("no entries match");
        return Ok(());
    }

    println!(
        "{} of {} entries (page {}/{})",
        page_view.entries.len(),
        page_view.filtered_total,
        page_view.pagination.current,
        page_view.pagination.total_pages
    );
    println!();
    for entry in &page_view.entries {
        println!("{}", render::card(entry, session.current_user()));
    }
    if let Some(line) = render::pagination_line(&page_view.pagination) {
        println!("{line}");
    }
    Ok(())
}

fn require_login(session: &Session) -> Result<()> {
    if !session.is_authenticated() {
        bail!("not logged in — run `folio login --email … --password …` first");
    }
    Ok(())
}

fn print_options() {
    println!("industries:");
    for industry in taxonomy::INDUSTRIES {
        println!("  {industry}");
    }
    println!("experience brackets:");
    for bracket in taxonomy::EXPERIENCE_BRACKETS {
        println!("  {bracket}");
    }
    println!("colors:");
    for color in taxonomy::COLORS {
        println!("  {color}");
    }
}
