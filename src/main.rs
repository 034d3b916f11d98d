use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tabled::{builder::Builder, settings::Style, Table, Tabled};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use billing_portal::config::{
    config_dir, find_client, find_service, load_clients_with_state, load_config,
    load_services_with_state, load_state, next_client_id, save_state, Attachment, ClientDetails,
    Company, FileSettingsStore, ServiceRecord, Settings, SettingsStore, CLIENTS_TEMPLATE,
    CONFIG_TEMPLATE, SERVICES_TEMPLATE,
};
use billing_portal::error::{PortalError, Result};
use billing_portal::validate::{validate_attachment, validate_password_change};
use billing_portal::view::{
    aggregate_by_client, format_date, format_money, is_urgent, ClientAggregate, Column,
    ColumnVisibility, DashboardSummary, PageView, ViewFilter,
};

#[derive(Parser)]
#[command(name = "portal")]
#[command(version, about = "Client billing portal: balances, statements and account settings", long_about = None)]
struct Cli {
    /// Path to config directory (default: XDG config dir or ~/.portal)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with seed files
    Init,

    /// List services, one row per billable item
    Services {
        /// Filter by client, concept or description
        #[arg(short, long)]
        search: Option<String>,

        /// Page to show (out-of-range pages clamp)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show balances grouped by client
    Balances {
        /// Filter by client name
        #[arg(short, long)]
        search: Option<String>,

        /// Page to show (out-of-range pages clamp)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the client directory
    Clients {
        /// Filter by name, email or company
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show the account statement of one client
    Statement {
        /// Client identifier from clients.toml
        client: String,
    },

    /// Add a client to the directory
    ClientAdd {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        /// Name their services are billed under
        #[arg(long)]
        company: String,
    },

    /// Change a client's contact details
    ClientEdit {
        /// Client identifier from clients.toml
        client: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, conflicts_with = "clear_phone")]
        phone: Option<String>,

        /// Remove the phone number
        #[arg(long)]
        clear_phone: bool,

        #[arg(long)]
        company: Option<String>,
    },

    /// Archive a client
    Archive {
        /// Client identifier from clients.toml
        client: String,
    },

    /// Reactivate an archived client
    Activate {
        /// Client identifier from clients.toml
        client: String,
    },

    /// Show totals across all services
    Dashboard,

    /// Attach a payment receipt (image or PDF) to a service
    Attach {
        /// Service identifier from services.toml
        service: String,

        /// Receipt file
        file: PathBuf,
    },

    /// Show or change which columns 'services' displays
    Columns {
        #[arg(long, value_enum, value_name = "COLUMN")]
        show: Vec<Column>,

        #[arg(long, value_enum, value_name = "COLUMN")]
        hide: Vec<Column>,

        #[arg(long, value_enum, value_name = "COLUMN")]
        toggle: Vec<Column>,
    },

    /// Show or set the logo URL
    Logo {
        /// New logo URL
        url: Option<String>,

        /// Remove the configured logo
        #[arg(long, conflicts_with = "url")]
        clear: bool,
    },

    /// Show or update account details
    Account {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Registered business name
        #[arg(long)]
        legal_name: Option<String>,

        #[arg(long)]
        tax_id: Option<String>,

        /// Fiscal address
        #[arg(long)]
        address: Option<String>,
    },

    /// Change the account password
    AccountPassword {
        #[arg(long = "new", value_name = "PASSWORD")]
        new_password: String,

        #[arg(long, value_name = "PASSWORD")]
        confirm: String,
    },

    /// List notifications
    Notifications {
        /// Mark one notification as read
        #[arg(long, value_name = "ID")]
        read: Option<u32>,

        /// Mark all notifications as read
        #[arg(long, conflicts_with = "read")]
        read_all: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };
    debug!(config_dir = %cfg_dir.display(), "resolved config directory");

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Services { search, page, json } => cmd_services(&cfg_dir, search, page, json),
        Commands::Balances { search, page, json } => cmd_balances(&cfg_dir, search, page, json),
        Commands::Clients { search } => cmd_clients(&cfg_dir, search),
        Commands::Statement { client } => cmd_statement(&cfg_dir, &client),
        Commands::ClientAdd {
            name,
            email,
            phone,
            company,
        } => cmd_client_add(
            &cfg_dir,
            ClientDetails {
                name,
                email,
                phone,
                company,
            },
        ),
        Commands::ClientEdit {
            client,
            name,
            email,
            phone,
            clear_phone,
            company,
        } => {
            let phone = if clear_phone { Some(None) } else { phone.map(Some) };
            cmd_client_edit(&cfg_dir, &client, name, email, phone, company)
        }
        Commands::Archive { client } => cmd_set_archived(&cfg_dir, &client, true),
        Commands::Activate { client } => cmd_set_archived(&cfg_dir, &client, false),
        Commands::Dashboard => cmd_dashboard(&cfg_dir),
        Commands::Attach { service, file } => cmd_attach(&cfg_dir, &service, &file),
        Commands::Columns { show, hide, toggle } => cmd_columns(&cfg_dir, &show, &hide, &toggle),
        Commands::Logo { url, clear } => cmd_logo(&cfg_dir, url, clear),
        Commands::Account {
            name,
            email,
            legal_name,
            tax_id,
            address,
        } => cmd_account(&cfg_dir, name, email, legal_name, tax_id, address),
        Commands::AccountPassword {
            new_password,
            confirm,
        } => cmd_account_password(&cfg_dir, &new_password, &confirm),
        Commands::Notifications { read, read_all } => cmd_notifications(&cfg_dir, read, read_all),
    }
}

fn require_config_dir(cfg_dir: &Path) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(PortalError::ConfigNotFound(cfg_dir.to_path_buf()));
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Initialize config directory with seed files
fn cmd_init(cfg_dir: &Path) -> Result<()> {
    if cfg_dir.exists() {
        return Err(PortalError::AlreadyInitialized(cfg_dir.to_path_buf()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::write(cfg_dir.join("config.toml"), CONFIG_TEMPLATE)?;
    fs::write(cfg_dir.join("services.toml"), SERVICES_TEMPLATE)?;
    fs::write(cfg_dir.join("clients.toml"), CLIENTS_TEMPLATE)?;
    info!(path = %cfg_dir.display(), "initialized config directory");

    println!("Initialized portal config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Set your company name:  $EDITOR {}/config.toml",
        cfg_dir.display()
    );
    println!(
        "  2. Record services:        $EDITOR {}/services.toml",
        cfg_dir.display()
    );
    println!(
        "  3. Add your clients:       $EDITOR {}/clients.toml",
        cfg_dir.display()
    );
    println!();
    println!("Then review balances with: portal balances");

    Ok(())
}

// Table row structs for tabled
#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "CLIENT")]
    client: String,
    #[tabled(rename = "SERVICES")]
    services: usize,
    #[tabled(rename = "UNPAID")]
    unpaid: usize,
    #[tabled(rename = "TOTAL")]
    total: String,
    #[tabled(rename = "OWED")]
    owed: String,
    #[tabled(rename = "STATUS")]
    status: &'static str,
}

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "COMPANY")]
    company: String,
    #[tabled(rename = "OWED")]
    owed: String,
}

#[derive(Tabled)]
struct ColumnRow {
    #[tabled(rename = "COLUMN")]
    column: String,
    #[tabled(rename = "SHOWN")]
    shown: &'static str,
}

#[derive(Tabled)]
struct NotificationRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "MESSAGE")]
    message: String,
    #[tabled(rename = "STATUS")]
    status: &'static str,
}

fn client_label(client: &str) -> &str {
    if client.is_empty() {
        "(no client)"
    } else {
        client
    }
}

fn cell(service: &ServiceRecord, column: Column, currency_symbol: &str) -> String {
    match column {
        Column::Date => format_date(service.date),
        Column::Client => client_label(&service.client).to_string(),
        Column::Concept => service.concept.clone(),
        Column::Description => service.description.clone(),
        Column::Total => format_money(service.amount, currency_symbol),
        Column::Invoice => service.invoice_status.to_string(),
        Column::Payment => service.payment_status.to_string(),
        Column::Attachment => if service.attachment { "yes" } else { "-" }.to_string(),
    }
}

/// Services table honoring column visibility. Overdue unpaid rows get a `!`.
fn render_services_table(
    services: &[&ServiceRecord],
    columns: &ColumnVisibility,
    currency_symbol: &str,
    today: NaiveDate,
) -> String {
    let visible = columns.visible();
    let mut builder = Builder::default();

    let mut header = vec!["".to_string(), "ID".to_string()];
    header.extend(visible.iter().map(|c| c.header().to_string()));
    builder.push_record(header);

    for service in services {
        let marker = if is_urgent(service, today) { "!" } else { "" };
        let mut row = vec![marker.to_string(), service.id.clone()];
        row.extend(visible.iter().map(|c| cell(service, *c, currency_symbol)));
        builder.push_record(row);
    }

    builder.build().with(Style::rounded()).to_string()
}

fn print_page_footer<T>(view: &PageView<T>, noun: &str) {
    println!();
    println!(
        "Page {} of {} ({} {noun})",
        view.page, view.total_pages, view.total_matches
    );
    if view.has_previous() {
        println!("Previous page: --page {}", view.page - 1);
    }
    if view.has_next() {
        println!("Next page: --page {}", view.page + 1);
    }
}

/// Logo from settings, else the one in config.toml
fn effective_logo<'a>(company: &'a Company, settings: &'a Settings) -> Option<&'a str> {
    settings
        .logo_url
        .as_deref()
        .or(company.logo_url.as_deref())
}

fn print_brand(company: &Company, settings: &Settings) {
    println!("{}", company.name);
    if let Some(logo) = effective_logo(company, settings) {
        println!("Logo: {logo}");
    }
    println!("{}", "-".repeat(50));
}

/// List services (table view)
fn cmd_services(cfg_dir: &Path, search: Option<String>, page: usize, json: bool) -> Result<()> {
    require_config_dir(cfg_dir)?;

    let config = load_config(cfg_dir)?;
    let settings = FileSettingsStore::new(cfg_dir).load()?;
    let state = load_state(cfg_dir)?;
    let services = load_services_with_state(cfg_dir, &state)?;

    let filter = ViewFilter::new(config.view.page_size)
        .with_search(search.unwrap_or_default())
        .with_page(page);
    let view = filter.apply(&services);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if view.is_empty() {
        if filter.search().is_empty() {
            println!("No services recorded.");
            println!("Add services to: {}/services.toml", cfg_dir.display());
        } else {
            println!("No services match '{}'.", filter.search());
        }
        return Ok(());
    }

    let table = render_services_table(
        &view.items,
        &settings.columns,
        &config.view.currency_symbol,
        today(),
    );
    println!("{table}");
    print_page_footer(&view, "services");
    println!("Rows marked ! are unpaid from a previous month.");

    Ok(())
}

/// Show balances grouped by client (card view)
fn cmd_balances(cfg_dir: &Path, search: Option<String>, page: usize, json: bool) -> Result<()> {
    require_config_dir(cfg_dir)?;

    let config = load_config(cfg_dir)?;
    let state = load_state(cfg_dir)?;
    let services = load_services_with_state(cfg_dir, &state)?;
    let aggregates = aggregate_by_client(&services);

    let filter = ViewFilter::new(config.view.page_size)
        .with_search(search.unwrap_or_default())
        .with_page(page);
    let view = filter.apply(&aggregates);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if view.is_empty() {
        if filter.search().is_empty() {
            println!("No clients to show.");
        } else {
            println!("No clients match '{}'.", filter.search());
        }
        return Ok(());
    }

    let symbol = &config.view.currency_symbol;
    let rows: Vec<BalanceRow> = view
        .items
        .iter()
        .map(|agg| BalanceRow {
            client: client_label(agg.client).to_string(),
            services: agg.services.len(),
            unpaid: agg.pending_count(),
            total: format_money(agg.total_amount, symbol),
            owed: format_money(agg.total_pending, symbol),
            status: if agg.has_balance() { "DUE" } else { "PAID" },
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    let owed: Decimal = view.items.iter().map(|agg| agg.total_pending).sum();
    println!("Owed on this page: {}", format_money(owed, symbol));
    print_page_footer(&view, "clients");

    Ok(())
}

fn owed_by_company<'a>(aggregates: &[ClientAggregate<'a>]) -> HashMap<&'a str, Decimal> {
    aggregates
        .iter()
        .map(|agg| (agg.client, agg.total_pending))
        .collect()
}

/// List the client directory, active clients first
fn cmd_clients(cfg_dir: &Path, search: Option<String>) -> Result<()> {
    require_config_dir(cfg_dir)?;

    let config = load_config(cfg_dir)?;
    let state = load_state(cfg_dir)?;
    let clients = load_clients_with_state(cfg_dir, &state)?;
    let services = load_services_with_state(cfg_dir, &state)?;
    let owed = owed_by_company(&aggregate_by_client(&services));

    if clients.is_empty() {
        println!("No clients configured.");
        println!("Add clients to: {}/clients.toml", cfg_dir.display());
        return Ok(());
    }

    let filter = ViewFilter::new(config.view.page_size).with_search(search.unwrap_or_default());
    let matching = filter.matching(&clients);
    let (archived, active): (Vec<_>, Vec<_>) = matching
        .into_iter()
        .partition(|c| state.is_archived(&c.id, c.archived));

    let to_rows = |list: &[&billing_portal::Client]| -> Vec<ClientRow> {
        list.iter()
            .map(|c| ClientRow {
                id: c.id.clone(),
                name: c.name.clone(),
                email: c.email.clone(),
                company: c.company.clone(),
                owed: format_money(
                    owed.get(c.company.as_str()).copied().unwrap_or(Decimal::ZERO),
                    &config.view.currency_symbol,
                ),
            })
            .collect()
    };

    if active.is_empty() {
        if filter.search().is_empty() {
            println!("No active clients.");
        } else {
            println!("No active clients match '{}'.", filter.search());
        }
    } else {
        println!("{}", Table::new(to_rows(&active)).with(Style::rounded()));
    }

    if !archived.is_empty() {
        println!();
        println!("Archived clients");
        println!("{}", Table::new(to_rows(&archived)).with(Style::rounded()));
    }

    Ok(())
}

/// Show one client's account statement
fn cmd_statement(cfg_dir: &Path, client_id: &str) -> Result<()> {
    require_config_dir(cfg_dir)?;

    let config = load_config(cfg_dir)?;
    let state = load_state(cfg_dir)?;
    let clients = load_clients_with_state(cfg_dir, &state)?;
    let client = find_client(&clients, client_id)?;
    let settings = FileSettingsStore::new(cfg_dir).load()?;
    let services = load_services_with_state(cfg_dir, &state)?;

    let theirs: Vec<&ServiceRecord> = services
        .iter()
        .filter(|s| s.client == client.company)
        .collect();
    let today = today();
    let summary = DashboardSummary::from_services(theirs.iter().copied(), today);
    let symbol = &config.view.currency_symbol;

    print_brand(&config.company, &settings);
    println!("Statement for {} ({})", client.name, client.company);
    println!("Email:            {}", client.email);
    if let Some(phone) = &client.phone {
        println!("Phone:            {phone}");
    }
    if state.is_archived(&client.id, client.archived) {
        println!("Status:           ARCHIVED");
    }
    println!("Total billed:     {}", format_money(summary.total_amount, symbol));
    println!("Owed:             {}", format_money(summary.total_pending, symbol));
    println!(
        "Services:         {} ({} completed, {} unpaid)",
        summary.total_services, summary.completed_services, summary.pending_payments
    );
    println!();

    if theirs.is_empty() {
        println!("No services recorded for {}.", client.company);
        return Ok(());
    }

    println!(
        "{}",
        render_services_table(&theirs, &settings.columns, symbol, today)
    );
    if summary.urgent_payments > 0 {
        println!(
            "{} overdue payment(s) marked with !",
            summary.urgent_payments
        );
    }

    Ok(())
}

/// Add a client. The new entry lives in state.toml, not clients.toml.
fn cmd_client_add(cfg_dir: &Path, details: ClientDetails) -> Result<()> {
    require_config_dir(cfg_dir)?;

    let mut state = load_state(cfg_dir)?;
    let clients = load_clients_with_state(cfg_dir, &state)?;
    let id = next_client_id(&clients);

    let message = format!("Client {} added", details.name);
    state.clients.insert(id.clone(), details);
    state.notify(message.clone(), Local::now().naive_local());
    save_state(cfg_dir, &state)?;

    println!("{message} with id {id}");
    Ok(())
}

/// Change contact details. `phone` of `Some(None)` removes the number.
fn cmd_client_edit(
    cfg_dir: &Path,
    client_id: &str,
    name: Option<String>,
    email: Option<String>,
    phone: Option<Option<String>>,
    company: Option<String>,
) -> Result<()> {
    require_config_dir(cfg_dir)?;

    let mut state = load_state(cfg_dir)?;
    let clients = load_clients_with_state(cfg_dir, &state)?;
    let client = find_client(&clients, client_id)?;

    let mut details = client.details();
    if let Some(v) = name {
        details.name = v;
    }
    if let Some(v) = email {
        details.email = v;
    }
    if let Some(v) = phone {
        details.phone = v;
    }
    if let Some(v) = company {
        details.company = v;
    }

    if details == client.details() {
        println!("No changes for {}", client.name);
        return Ok(());
    }

    let message = format!("Client {} updated", details.name);
    state.clients.insert(client.id.clone(), details);
    state.notify(message.clone(), Local::now().naive_local());
    save_state(cfg_dir, &state)?;

    println!("{message}");
    Ok(())
}

/// Archive or reactivate a client
fn cmd_set_archived(cfg_dir: &Path, client_id: &str, archived: bool) -> Result<()> {
    require_config_dir(cfg_dir)?;

    let mut state = load_state(cfg_dir)?;
    let clients = load_clients_with_state(cfg_dir, &state)?;
    let client = find_client(&clients, client_id)?;

    let verb = if archived { "archived" } else { "activated" };
    if state.is_archived(&client.id, client.archived) == archived {
        println!("{} is already {}", client.name, verb);
        return Ok(());
    }

    state.archived.insert(client.id.clone(), archived);
    state.notify(
        format!("Client {} {}", client.name, verb),
        Local::now().naive_local(),
    );
    save_state(cfg_dir, &state)?;

    println!("Client {} {}", client.name, verb);
    Ok(())
}

/// Show totals across all services
fn cmd_dashboard(cfg_dir: &Path) -> Result<()> {
    require_config_dir(cfg_dir)?;

    let config = load_config(cfg_dir)?;
    let settings = FileSettingsStore::new(cfg_dir).load()?;
    let state = load_state(cfg_dir)?;
    let services = load_services_with_state(cfg_dir, &state)?;
    let summary = DashboardSummary::from_services(&services, today());
    let symbol = &config.view.currency_symbol;

    print_brand(&config.company, &settings);
    println!("Total balance:      {}", format_money(summary.total_amount, symbol));
    println!("Owed:               {}", format_money(summary.total_pending, symbol));
    println!("Total services:     {}", summary.total_services);
    println!("Completed services: {}", summary.completed_services);
    println!("Pending payments:   {}", summary.pending_payments);
    println!("Overdue payments:   {}", summary.urgent_payments);
    println!("With receipts:      {}", summary.attachments);

    let unread = state.unread_count();
    if unread > 0 {
        println!();
        println!("{unread} unread notification(s). Run 'portal notifications' to see them.");
    }

    Ok(())
}

/// Attach a receipt to a service. Only the file name and type are recorded.
fn cmd_attach(cfg_dir: &Path, service_id: &str, file: &Path) -> Result<()> {
    require_config_dir(cfg_dir)?;

    let mut state = load_state(cfg_dir)?;
    let services = load_services_with_state(cfg_dir, &state)?;
    let service = find_service(&services, service_id)?;

    let mime = validate_attachment(file)?;
    if !file.is_file() {
        return Err(PortalError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a file", file.display()),
        )));
    }

    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    let replaced = service.attachment;

    state.attachments.push(Attachment {
        service: service.id.clone(),
        file: file_name.clone(),
        mime: mime.to_string(),
        date: today(),
    });
    state.notify(
        format!("{} attached to service {}", file_name, service.id),
        Local::now().naive_local(),
    );
    save_state(cfg_dir, &state)?;

    if replaced {
        println!("Replaced receipt for service {} with {file_name} ({mime})", service.id);
    } else {
        println!("Attached {file_name} to service {} ({mime})", service.id);
    }
    Ok(())
}

/// Show or change column visibility
fn cmd_columns(cfg_dir: &Path, show: &[Column], hide: &[Column], toggle: &[Column]) -> Result<()> {
    require_config_dir(cfg_dir)?;

    let store = FileSettingsStore::new(cfg_dir);
    let settings = if show.is_empty() && hide.is_empty() && toggle.is_empty() {
        store.load()?
    } else {
        store.update(|s| {
            for column in show {
                s.columns.set(*column, true);
            }
            for column in hide {
                s.columns.set(*column, false);
            }
            for column in toggle {
                s.columns.toggle(*column);
            }
        })?
    };

    let rows: Vec<ColumnRow> = Column::ALL
        .iter()
        .map(|c| ColumnRow {
            column: c.to_string(),
            shown: if settings.columns.is_visible(*c) { "yes" } else { "no" },
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));

    Ok(())
}

/// Show or set the logo URL
fn cmd_logo(cfg_dir: &Path, url: Option<String>, clear: bool) -> Result<()> {
    require_config_dir(cfg_dir)?;

    let config = load_config(cfg_dir)?;
    let store = FileSettingsStore::new(cfg_dir);
    let settings = match (url, clear) {
        (Some(url), _) => store.update(|s| s.logo_url = Some(url))?,
        (None, true) => store.update(|s| s.logo_url = None)?,
        (None, false) => store.load()?,
    };

    match effective_logo(&config.company, &settings) {
        Some(logo) if settings.logo_url.is_some() => println!("Logo: {logo}"),
        Some(logo) => println!("Logo: {logo} (from config.toml)"),
        None => println!("No logo configured."),
    }
    Ok(())
}

/// Show or update account details
fn cmd_account(
    cfg_dir: &Path,
    name: Option<String>,
    email: Option<String>,
    legal_name: Option<String>,
    tax_id: Option<String>,
    address: Option<String>,
) -> Result<()> {
    require_config_dir(cfg_dir)?;

    let store = FileSettingsStore::new(cfg_dir);
    let changed = name.is_some()
        || email.is_some()
        || legal_name.is_some()
        || tax_id.is_some()
        || address.is_some();

    let settings = if changed {
        let settings = store.update(|s| {
            let account = &mut s.account;
            if let Some(v) = name {
                account.name = v;
            }
            if let Some(v) = email {
                account.email = v;
            }
            if let Some(v) = legal_name {
                account.legal_name = v;
            }
            if let Some(v) = tax_id {
                account.tax_id = v;
            }
            if let Some(v) = address {
                account.fiscal_address = v;
            }
        })?;
        println!("Account details updated.");
        settings
    } else {
        store.load()?
    };

    let account = &settings.account;
    let or_dash = |v: &str| if v.is_empty() { "-".to_string() } else { v.to_string() };
    println!("Name:           {}", or_dash(&account.name));
    println!("Email:          {}", or_dash(&account.email));
    println!("Legal name:     {}", or_dash(&account.legal_name));
    println!("Tax ID:         {}", or_dash(&account.tax_id));
    println!("Fiscal address: {}", or_dash(&account.fiscal_address));

    Ok(())
}

/// Validate a password change. There is no credential store to update.
fn cmd_account_password(cfg_dir: &Path, new_password: &str, confirm: &str) -> Result<()> {
    require_config_dir(cfg_dir)?;
    validate_password_change(new_password, confirm)?;
    println!("Password updated.");
    Ok(())
}

/// List notifications, optionally marking them read
fn cmd_notifications(cfg_dir: &Path, read: Option<u32>, read_all: bool) -> Result<()> {
    require_config_dir(cfg_dir)?;

    let mut state = load_state(cfg_dir)?;
    if let Some(id) = read {
        if !state.mark_read(id) {
            return Err(PortalError::NotificationNotFound(id));
        }
        save_state(cfg_dir, &state)?;
    } else if read_all && state.mark_all_read() > 0 {
        save_state(cfg_dir, &state)?;
    }

    if state.notifications.is_empty() {
        println!("No notifications.");
        return Ok(());
    }

    let rows: Vec<NotificationRow> = state
        .notifications
        .iter()
        .rev()
        .map(|n| NotificationRow {
            id: n.id,
            date: n.created.format("%Y-%m-%d %H:%M").to_string(),
            message: n.message.clone(),
            status: if n.read { "read" } else { "NEW" },
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
    println!("Unread: {}", state.unread_count());

    Ok(())
}
