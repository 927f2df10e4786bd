use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use lifelink::completion::DoneMap;
use lifelink::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Define CLI-specific enums for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FlowCli {
    Sdlc,
    Stlc,
}

impl From<FlowCli> for Flow {
    fn from(flow: FlowCli) -> Self {
        match flow {
            FlowCli::Sdlc => Flow::Sdlc,
            FlowCli::Stlc => Flow::Stlc,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatCli {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoleCli {
    Client,
    Admin,
    Receptionist,
}

impl From<RoleCli> for Role {
    fn from(role: RoleCli) -> Self {
        match role {
            RoleCli::Client => Role::Client,
            RoleCli::Admin => Role::Admin,
            RoleCli::Receptionist => Role::Receptionist,
        }
    }
}

/// Score the links drawn between SDLC and STLC stages
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional settings JSON file
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Override the store directory
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Override the rule table JSON file
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the stages of the integration diagram, or of a single flow
    Stages {
        #[arg(long, value_enum)]
        flow: Option<FlowCli>,
    },
    /// Show the rule checklist, score and connections
    Status {
        /// Print the full view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Draw a connection between two stages
    Connect { source: String, target: String },
    /// Replace the connections with a renderer edge list (JSON array)
    Import { path: PathBuf },
    /// Remove every connection
    Clear,
    /// Mark stages of a flow as completed
    Complete {
        #[arg(value_enum)]
        flow: FlowCli,
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Clear the completed stages of a flow
    Reset {
        #[arg(value_enum)]
        flow: FlowCli,
    },
    /// Manage user records
    #[command(subcommand)]
    User(UserCommand),
    /// Log in; completes the STLC and the suggested SDLC stages
    Login { id: String, password: String },
    /// Write the traceability report
    Export {
        #[arg(short, long, value_enum, default_value = "text")]
        format: FormatCli,
        /// Output directory (defaults to the configured export directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    /// Create a user
    Add {
        name: String,
        #[arg(short, long, value_enum, default_value = "client")]
        role: RoleCli,
        #[arg(short, long)]
        password: String,
    },
    /// Delete a user by id
    Remove { id: String },
    /// List users
    List,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.settings.as_deref())
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load settings: {}", e)));
    if let Some(store) = cli.store {
        settings.store_dir = store;
    }
    if let Some(rules) = cli.rules {
        settings.rules_path = Some(rules);
    }

    let rules = settings
        .rule_table()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load rule table: {}", e)));
    let integration = Integration::new(StageCatalog::integration(), rules)
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid rule table: {}", e)));
    let mut state = AppState::load(JsonFileStore::new(&settings.store_dir));

    match cli.command {
        Command::Stages { flow } => print_stages(flow.map(Flow::from), &state),
        Command::Status { json } => print_status(&integration, &state, json),
        Command::Connect { source, target } => {
            for id in [&source, &target] {
                if !integration.catalog().contains(id) {
                    log::warn!("'{}' is not a stage of the integration diagram", id);
                }
            }
            let connection = Connection::new(source, target);
            println!("Connected {}", connection);
            state
                .add_connection(connection)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            print_score(&integration, &state);
        }
        Command::Import { path } => {
            let json = fs::read_to_string(&path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read '{}': {}", path.display(), e))
            });
            let connections = json
                .as_str()
                .into_connections()
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to import edges: {}", e)));
            println!("Imported {} connections", connections.len());
            state
                .set_connections(connections)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            print_score(&integration, &state);
        }
        Command::Clear => {
            state
                .clear_connections()
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("All connections removed.");
        }
        Command::Complete { flow, ids } => {
            let flow = Flow::from(flow);
            let known: Vec<&str> = flow.local_ids().collect();
            for id in &ids {
                if !known.contains(&id.as_str()) {
                    log::warn!("'{}' is not a {} stage", id, flow);
                }
            }
            state
                .mark_completed(flow, ids)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            let done = state.completed().set(flow);
            println!("{} completed: {}", flow, join_or_none(done.iter()));
        }
        Command::Reset { flow } => {
            let flow = Flow::from(flow);
            state
                .reset_completed(flow)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("{} completion cleared.", flow);
        }
        Command::User(command) => run_user_command(command, &mut state),
        Command::Login { id, password } => match state.login_and_complete(&id, &password) {
            Ok(()) => {
                println!("Login successful. Test flow completed.");
                print_score(&integration, &state);
            }
            Err(e) => exit_with_error(&e.to_string()),
        },
        Command::Export { format, out } => {
            let format = match format {
                FormatCli::Json => ExportFormat::Json,
                FormatCli::Text => ExportFormat::Text,
            };
            let evaluation = integration.evaluate(&state);
            let (file_name, content) = integration
                .report(&evaluation, &state)
                .render(format, chrono::Utc::now())
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to render report: {}", e)));
            let dir = out.unwrap_or(settings.export_dir);
            if let Err(e) = fs::create_dir_all(&dir) {
                exit_with_error(&format!("Failed to create '{}': {}", dir.display(), e));
            }
            let path = dir.join(file_name);
            fs::write(&path, content).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path.display(), e))
            });
            println!("  -> Wrote report to '{}'", path.display());
        }
    }
}

fn run_user_command(command: UserCommand, state: &mut AppState) {
    match command {
        UserCommand::Add {
            name,
            role,
            password,
        } => match state.add_user(NewUser::new(name, role.into(), password)) {
            Ok(user) => println!("Created user {} ({}) with id {}", user.name, user.role, user.id),
            Err(e) => exit_with_error(&e.to_string()),
        },
        UserCommand::Remove { id } => match state.remove_user(&id) {
            Ok(true) => println!("Removed user {}", id),
            Ok(false) => exit_with_error(&format!("No user with id '{}'", id)),
            Err(e) => exit_with_error(&e.to_string()),
        },
        UserCommand::List => {
            if state.users().is_empty() {
                println!("No users yet.");
            }
            for user in state.users() {
                println!("{}  {} ({})", user.id, user.name, user.role);
            }
        }
    }
}

fn print_stages(flow: Option<Flow>, state: &AppState) {
    let catalog = match flow {
        Some(flow) => StageCatalog::for_flow(flow),
        None => StageCatalog::integration(),
    };
    let done = DoneMap::build(&catalog, state.completed());
    for stage in catalog.iter() {
        let mark = if done.is_done(&stage.id) { "x" } else { " " };
        println!("[{}] {:<18} {}", mark, stage.id, stage.label);
    }
}

fn print_score(integration: &Integration, state: &AppState) {
    let evaluation = integration.evaluate(state);
    println!("Integration status: {}%", evaluation.score);
    if let Some(warning) = integration.warning(&evaluation) {
        println!("Warning: {}", warning);
    }
}

fn print_status(integration: &Integration, state: &AppState, json: bool) {
    let view = integration.view(state);
    if json {
        let output = serde_json::to_string_pretty(&view)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize view: {}", e)));
        println!("{}", output);
        return;
    }

    println!("\n--- Integration: SDLC + STLC ---");
    if let Some(warning) = &view.warning {
        println!("Warning: {}", warning);
    }
    println!("Integration status: {}%", view.evaluation.score);

    println!("\n--- Rules ---");
    for rule in &view.evaluation.results {
        let status = if rule.satisfied { "OK" } else { "MISSING" };
        println!("  [{:<7}] {} {}", status, rule.id, rule.label);
    }

    println!("\n--- Connections ---");
    if view.edges.is_empty() {
        println!("  (no connections drawn)");
    }
    for (i, edge) in view.edges.iter().enumerate() {
        let confirmed = if edge.confirmed { " [confirmed]" } else { "" };
        println!("  {}. {}{}", i + 1, edge.connection, confirmed);
    }
    println!();
}

fn join_or_none<'a>(ids: impl Iterator<Item = &'a String>) -> String {
    let joined = ids.join(", ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
