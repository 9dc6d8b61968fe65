use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};

use inventory::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use inventory::catalog::command::load_books_cmd::{LoadBooksCommand, LoadBooksCommandRequest};
use inventory::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, DELETE_PROMPT};
use inventory::catalog::command::toggle_status_cmd::{ToggleStatusCommand, ToggleStatusCommandRequest};
use inventory::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use inventory::catalog::domain::CatalogService;
use inventory::catalog::factory::create_catalog_service;
use inventory::catalog::render::{render_catalog, render_summary, render_validation_errors};
use inventory::catalog::state::{CatalogAction, CatalogState};
use inventory::catalog::validation::BookForm;
use inventory::catalog::view::clamp_page;
use inventory::core::command::{Command, CommandError};
use inventory::core::domain::Configuration;
use inventory::core::library::{is_known_genre, BookStatus, ALL_GENRES, GENRES};
use inventory::core::repository::{RepositoryStore, STORE_NAMES};
use inventory::utils::logging::setup_tracing;

#[derive(Debug, Parser)]
#[command(name = "inventory", version, about = "Manage a library catalog through its REST API")]
struct Cli {
    /// Base url of the book collection, e.g. http://localhost:3000/booksdata
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Books shown per page
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Backing store. `memory` is a demo mode: every run starts with an empty
    /// catalog and its writes are lost when the process exits
    #[arg(long, global = true, default_value = "remote", value_parser = STORE_NAMES)]
    store: String,

    /// Emit logs as json
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List books, optionally filtered and paginated
    List(ListArgs),
    /// Show total, available and borrowed counts
    Summary,
    /// Add a new book
    Add(AddArgs),
    /// Edit an existing book; omitted fields keep their current value
    Edit(EditArgs),
    /// Borrow an available book or return a borrowed one
    Toggle {
        id: String,
    },
    /// Delete a book after confirmation
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Case-insensitive match against title or author
    #[arg(long, short)]
    search: Option<String>,
    /// One of the offered genres (Fiction, Tech, History, Science, Other) or All
    #[arg(long, short, default_value = ALL_GENRES)]
    genre: String,
    #[arg(long, short, default_value_t = 1)]
    page: usize,
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    author: String,
    #[arg(long)]
    isbn: String,
    #[arg(long)]
    genre: String,
    #[arg(long, value_enum)]
    status: Option<StatusArg>,
}

#[derive(Debug, Args)]
struct EditArgs {
    id: String,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    author: Option<String>,
    #[arg(long)]
    isbn: Option<String>,
    #[arg(long)]
    genre: Option<String>,
    #[arg(long, value_enum)]
    status: Option<StatusArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusArg {
    Available,
    Borrowed,
}

impl From<StatusArg> for BookStatus {
    fn from(other: StatusArg) -> Self {
        match other {
            StatusArg::Available => BookStatus::Available,
            StatusArg::Borrowed => BookStatus::Borrowed,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Validation { errors }) => {
            eprint!("{}", render_validation_errors(&errors));
            ExitCode::FAILURE
        }
        Err(CommandError::NotConfirmed { .. }) => {
            eprintln!("Delete cancelled.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let mut config = Configuration::from_env()?;
    if let Some(url) = cli.api_url.as_deref() {
        config = config.with_base_url(url);
    }
    if let Some(size) = cli.page_size {
        config = config.with_books_per_page(size);
    }
    setup_tracing(config.log_level.as_str(), cli.log_json);
    let store = RepositoryStore::from(cli.store);
    debug!("using {:?} store at {}", store, config.base_url);

    let service: Arc<dyn CatalogService> = Arc::from(create_catalog_service(&config, store)?);
    let mut state = CatalogState::from_config(&config);
    dispatch(cli.command, service, &mut state, &mut io::stdout(), prompt_confirm).await
}

// Loads the catalog, then runs one command against it, writing rendered
// output to `out`. `confirm` is asked before an unforced delete.
async fn dispatch<W, F>(command: Commands, service: Arc<dyn CatalogService>, state: &mut CatalogState,
                        out: &mut W, confirm: F) -> Result<(), CommandError>
    where W: Write, F: Fn(&str) -> bool {
    // startup fetch; a failure leaves the banner in state for rendering
    if let Err(err) = LoadBooksCommand::new(service.clone())
        .execute(state, LoadBooksCommandRequest::default()).await {
        emit(out, render_catalog(state).as_str())?;
        return Err(err);
    }

    match command {
        Commands::List(args) => {
            state.apply(CatalogAction::SetSelectedGenre(args.genre));
            state.apply(CatalogAction::SetSearchTerm(args.search.unwrap_or_default()));
            state.apply(CatalogAction::SetCurrentPage(args.page));
            let page = clamp_page(state);
            state.apply(CatalogAction::SetCurrentPage(page));
            emit(out, render_catalog(state).as_str())?;
        }
        Commands::Summary => {
            emit(out, render_summary(state).as_str())?;
        }
        Commands::Add(args) => {
            let mut form = BookForm::new(&args.title, &args.author, &args.isbn, &args.genre);
            form.status = args.status.map(BookStatus::from);
            warn_unknown_genre(form.genre.as_str());
            let res = AddBookCommand::new(service.clone())
                .execute(state, AddBookCommandRequest::new(form)).await;
            finish(state, out, res.map(|r| format!("Added book {} ({})", r.book.title, r.book.id)))?;
        }
        Commands::Edit(args) => {
            let book = state.find_book(args.id.as_str()).cloned()
                .ok_or_else(|| CommandError::NotFound { message: format!("book {} not found", args.id) })?;
            state.apply(CatalogAction::StartEditing(book.clone()));
            let form = merge_edit(BookForm::from(&book), args);
            warn_unknown_genre(form.genre.as_str());
            let res = UpdateBookCommand::new(service.clone())
                .execute(state, UpdateBookCommandRequest::new(form)).await;
            finish(state, out, res.map(|r| format!("Updated book {} ({})", r.book.title, r.book.id)))?;
        }
        Commands::Toggle { id } => {
            let res = ToggleStatusCommand::new(service.clone())
                .execute(state, ToggleStatusCommandRequest::new(&id)).await;
            finish(state, out, res.map(|r| format!("Book {} is now {}", r.book.title, r.book.status)))?;
        }
        Commands::Delete { id, yes } => {
            let confirmed = yes || confirm(DELETE_PROMPT);
            let res = RemoveBookCommand::new(service.clone())
                .execute(state, RemoveBookCommandRequest::new(&id, confirmed)).await;
            finish(state, out, res.map(|r| format!("Deleted book {}", r.book_id)))?;
        }
    }
    Ok(())
}

// Omitted edit flags keep the value pre-filled from the record.
fn merge_edit(mut form: BookForm, args: EditArgs) -> BookForm {
    if let Some(title) = args.title { form.title = title; }
    if let Some(author) = args.author { form.author = author; }
    if let Some(isbn) = args.isbn { form.isbn = isbn; }
    if let Some(genre) = args.genre { form.genre = genre; }
    if let Some(status) = args.status { form.status = Some(status.into()); }
    form
}

fn warn_unknown_genre(genre: &str) {
    let genre = genre.trim();
    if !genre.is_empty() && !is_known_genre(genre) {
        warn!("genre {:?} is not one of {}", genre, GENRES.join(", "));
    }
}

// Writes the outcome followed by the refreshed catalog.
// Remote failures show the banner recorded in state above the unchanged catalog.
fn finish<W: Write>(state: &CatalogState, out: &mut W, res: Result<String, CommandError>) -> Result<(), CommandError> {
    match res {
        Ok(message) => {
            emit(out, format!("{}\n", message).as_str())?;
            emit(out, render_catalog(state).as_str())
        }
        Err(err) => {
            if state.error.is_some() {
                emit(out, render_catalog(state).as_str())?;
            }
            Err(err)
        }
    }
}

fn emit<W: Write>(out: &mut W, text: &str) -> Result<(), CommandError> {
    out.write_all(text.as_bytes())
        .map_err(|err| CommandError::Other { message: format!("failed to write output {}", err), reason_code: None })
}

fn prompt_confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
