//! Nexus CLI
//!
//! Command-line front end for Business Nexus. Runs the same guards, loaders
//! and actions as the browser app and prints the resulting views.
//!
//! The session is kept in a TOML file between runs (see `[session] path`).

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nexus::actions::{dispatch, Action, FormFields, Outcome};
use nexus::api::{LoginPayload, RegisterPayload, RequestStatus};
use nexus::app::{AppContext, Navigator, Notifier};
use nexus::config::{generate_default_config, Config};
use nexus::dom::{render_html, render_text};
use nexus::guard::require_auth;
use nexus::http::ReqwestTransport;
use nexus::routes::Route;
use nexus::session::{FileStore, Role};
use nexus::views::{self, Surface, ViewState};

#[derive(Parser)]
#[command(name = "nexus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Business Nexus from the terminal")]
#[command(long_about = "Browse entrepreneurs and investors, send and answer collaboration requests,\nchat with other members and manage your Business Nexus profile.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/nexus/config.toml, then ./nexus.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Site origin, overriding the configured one
    #[arg(long, global = true)]
    pub origin: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and sign in
    Register {
        username: String,
        email: String,
        #[arg(short, long)]
        password: String,
        /// investor or entrepreneur
        #[arg(short, long)]
        role: Role,
    },

    /// Sign in
    Login {
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show who is signed in
    Whoami,

    /// Show the dashboard for your role
    Dashboard,

    /// List entrepreneurs (investors)
    Entrepreneurs,

    /// List investors (entrepreneurs)
    Investors,

    /// Show sent (investor) or received (entrepreneur) requests
    Requests,

    /// Send a collaboration request to an entrepreneur
    SendRequest {
        /// Entrepreneur user id
        entrepreneur_id: u64,
    },

    /// Accept a pending request
    Accept { id: u64 },

    /// Reject a pending request
    Reject { id: u64 },

    /// Show a user's profile
    Profile {
        /// User id
        user_id: u64,
    },

    /// Replace your profile; without fields, list the editable ones
    EditProfile {
        /// Fields in key=value format
        #[arg(short = 'F', long = "field")]
        fields: Vec<String>,
    },

    /// Show who viewed your profile
    Views {
        /// Mark every view as seen first
        #[arg(long)]
        mark_seen: bool,
    },

    /// Show unread messages per sender
    Messages,

    /// Show the conversation with a user and mark it read
    Chat {
        /// User id
        user_id: u64,
    },

    /// Send a chat message, then show the conversation
    SendMessage {
        /// Recipient user id
        user_id: u64,
        content: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Navigator, notifier and surface backed by stdout/stderr
struct Terminal {
    format: OutputFormat,
    failed: Cell<bool>,
    redirect: RefCell<Option<Route>>,
}

impl Terminal {
    fn new(format: OutputFormat) -> Self {
        Self {
            format,
            failed: Cell::new(false),
            redirect: RefCell::new(None),
        }
    }

    fn fail(&self) {
        self.failed.set(true);
    }

    /// Explain a pending guard redirect; there are no pages to move to here
    fn report_redirect(&self) {
        match self.redirect.borrow_mut().take() {
            Some(Route::Login) => {
                eprintln!("Not signed in. Run `nexus login` first.");
                self.fail();
            }
            Some(Route::Home) => {
                eprintln!("Not available for your role.");
                self.fail();
            }
            _ => {}
        }
    }
}

impl Navigator for Terminal {
    fn navigate(&self, route: &Route) {
        *self.redirect.borrow_mut() = Some(route.clone());
    }
}

impl Notifier for Terminal {
    fn alert(&self, message: &str) {
        println!("{}", message);
    }
}

impl Surface for Terminal {
    fn show(&self, state: ViewState) {
        if state == ViewState::Loading {
            return;
        }
        if matches!(state, ViewState::Error(_)) {
            self.fail();
        }
        let nodes = state.into_nodes();
        let out = match self.format {
            OutputFormat::Text => render_text(&nodes),
            OutputFormat::Html => render_html(&nodes),
        };
        if !out.is_empty() {
            println!("{}", out);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loaded = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(origin) = &cli.origin {
        loaded.config.api.origin = origin.clone();
    }

    init_logging(&loaded.config);
    loaded.log();
    let config = loaded.config;

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let base = config.base_url()?;
    let session_path = expand_home(&config.session.path);
    tracing::debug!(base = %base, session = ?session_path, "Resolved client settings");

    let terminal = Rc::new(Terminal::new(cli.format));
    let ctx = AppContext::new(
        base,
        Rc::new(ReqwestTransport::new()),
        Rc::new(FileStore::new(session_path)),
        terminal.clone(),
        terminal.clone(),
    );

    run(&ctx, &terminal, cli.command).await?;
    terminal.report_redirect();

    if terminal.failed.get() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run(ctx: &AppContext, terminal: &Terminal, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Register {
            username,
            email,
            password,
            role,
        } => {
            let payload = RegisterPayload {
                username,
                email,
                password,
                role,
            };
            if !nexus::auth::register(ctx, &payload).await {
                terminal.fail();
            }
        }

        Commands::Login { email, password } => {
            if nexus::auth::login(ctx, &LoginPayload { email, password }).await {
                let session = ctx.session.current();
                println!(
                    "Signed in as {} ({})",
                    session.username.unwrap_or_default(),
                    session.role.map(|r| r.as_str()).unwrap_or("unknown role")
                );
            } else {
                terminal.fail();
            }
        }

        Commands::Logout => {
            nexus::auth::logout(ctx);
            terminal.redirect.borrow_mut().take();
            println!("Signed out");
        }

        Commands::Whoami => {
            let session = ctx.session.current();
            if session.is_authenticated() {
                println!(
                    "{} ({})",
                    session.username.unwrap_or_default(),
                    session.role.map(|r| r.as_str()).unwrap_or("unknown role")
                );
            } else {
                println!("Not signed in");
            }
        }

        Commands::Dashboard => match ctx.session.role() {
            Some(Role::Entrepreneur) => views::dashboard::entrepreneur(ctx, terminal, terminal).await,
            _ => views::dashboard::investor(ctx, terminal, terminal).await,
        },

        Commands::Entrepreneurs => views::entrepreneurs::load(ctx, terminal).await,

        Commands::Investors => views::investors::load(ctx, terminal).await,

        Commands::Requests => match ctx.session.role() {
            Some(Role::Investor) => views::outgoing::load(ctx, terminal).await,
            _ => views::incoming::load(ctx, terminal).await,
        },

        Commands::SendRequest { entrepreneur_id } => {
            if require_auth(ctx, Some(Role::Investor)) {
                act(ctx, terminal, Action::SendRequest { entrepreneur_id }, None).await;
            }
        }

        Commands::Accept { id } => decide(ctx, terminal, id, RequestStatus::Accepted).await,

        Commands::Reject { id } => decide(ctx, terminal, id, RequestStatus::Rejected).await,

        Commands::Profile { user_id } => views::profile::load(ctx, terminal, user_id).await,

        Commands::EditProfile { fields } => {
            if fields.is_empty() {
                views::edit_profile::load(ctx, terminal).await;
            } else if require_auth(ctx, None) {
                let form = parse_fields(&fields)?;
                act(ctx, terminal, Action::SubmitProfile, Some(form)).await;
            }
        }

        Commands::Views { mark_seen } => {
            if require_auth(ctx, None) {
                if mark_seen {
                    act(ctx, terminal, Action::MarkViewsSeen, None).await;
                }
                views::profile_views::refresh(ctx, terminal).await;
            }
        }

        Commands::Messages => views::messages::load(ctx, terminal).await,

        Commands::Chat { user_id } => views::conversation::load(ctx, terminal, user_id).await,

        Commands::SendMessage { user_id, content } => {
            if require_auth(ctx, None) {
                let mut form = FormFields::new();
                form.insert("content".to_string(), content);
                let action = Action::SendMessage { recipient_id: user_id };
                if act(ctx, terminal, action, Some(form)).await == Outcome::Reload {
                    views::conversation::refresh(ctx, terminal, user_id).await;
                }
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

async fn decide(ctx: &AppContext, terminal: &Terminal, id: u64, status: RequestStatus) {
    if !require_auth(ctx, Some(Role::Entrepreneur)) {
        return;
    }
    if act(ctx, terminal, Action::UpdateRequest { id, status }, None).await == Outcome::Reload {
        views::incoming::refresh(ctx, terminal).await;
    }
}

async fn act(ctx: &AppContext, terminal: &Terminal, action: Action, form: Option<FormFields>) -> Outcome {
    let outcome = dispatch(ctx, &action, form).await;
    if outcome == Outcome::Failed {
        terminal.fail();
    }
    outcome
}

fn parse_fields(pairs: &[String]) -> anyhow::Result<FormFields> {
    let mut form = FormFields::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                form.insert(key.to_string(), value.to_string());
            }
            _ => bail!("Invalid field {:?}, expected key=value", pair),
        }
    }
    Ok(form)
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => Path::new(path).to_path_buf(),
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nexus={}", config.logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
