mod client;
mod portal;
mod service;
mod settings;
mod state;

pub use client::{Client, ClientDetails};
pub use portal::{Company, Config, ViewSettings, DEFAULT_PAGE_SIZE};
pub use service::{InvoiceStatus, PaymentStatus, ServiceFile, ServiceRecord};
pub use settings::{
    AccountProfile, FileSettingsStore, MemorySettingsStore, Settings, SettingsStore,
};
pub use state::{Attachment, Notification, State};

use crate::error::{PortalError, Result};
use directories::ProjectDirs;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Get the config directory path (XDG config dir, falling back to ~/.portal/)
pub fn config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "portal") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    let home = std::env::var_os("HOME").map(PathBuf::from).ok_or_else(|| {
        PortalError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".portal"))
}

fn load_toml<T: DeserializeOwned>(path: PathBuf) -> Result<T> {
    if !path.exists() {
        return Err(PortalError::ConfigFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    debug!(path = %path.display(), bytes = content.len(), "loading");
    toml::from_str(&content).map_err(|e| PortalError::ConfigParse { path, source: e })
}

/// Load config.toml
pub fn load_config(config_dir: &Path) -> Result<Config> {
    let config: Config = load_toml(config_dir.join("config.toml"))?;
    if config.view.page_size == 0 {
        return Err(PortalError::InvalidPageSize(0));
    }
    Ok(config)
}

/// Load services.toml in file order. Ids must be unique and amounts
/// non-negative.
pub fn load_services(config_dir: &Path) -> Result<Vec<ServiceRecord>> {
    let file: ServiceFile = load_toml(config_dir.join("services.toml"))?;

    let mut seen = HashSet::new();
    for service in &file.services {
        if !seen.insert(service.id.as_str()) {
            return Err(PortalError::DuplicateService(service.id.clone()));
        }
        if service.amount < Decimal::ZERO {
            return Err(PortalError::NegativeAmount(service.id.clone()));
        }
    }

    Ok(file.services)
}

/// Load clients.toml in the order the clients are written
pub fn load_clients(config_dir: &Path) -> Result<Vec<Client>> {
    let clients: IndexMap<String, Client> = load_toml(config_dir.join("clients.toml"))?;
    Ok(clients
        .into_iter()
        .map(|(id, client)| Client { id, ..client })
        .collect())
}

/// Directory as shown to the user: clients.toml with edits from state
/// applied, then clients added since.
pub fn load_clients_with_state(config_dir: &Path, state: &State) -> Result<Vec<Client>> {
    let mut clients = load_clients(config_dir)?;
    for client in clients.iter_mut() {
        if let Some(details) = state.clients.get(&client.id) {
            client.apply(details);
        }
    }

    let added: Vec<Client> = state
        .clients
        .iter()
        .filter(|(id, _)| !clients.iter().any(|c| &c.id == *id))
        .map(|(id, details)| Client::from_details(id.as_str(), details))
        .collect();
    clients.extend(added);
    Ok(clients)
}

/// One past the highest numeric id
pub fn next_client_id(clients: &[Client]) -> String {
    let highest = clients
        .iter()
        .filter_map(|c| c.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (highest + 1).to_string()
}

pub fn find_client<'a>(clients: &'a [Client], id: &str) -> Result<&'a Client> {
    clients
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| PortalError::ClientNotFound(id.to_string()))
}

pub fn find_service<'a>(services: &'a [ServiceRecord], id: &str) -> Result<&'a ServiceRecord> {
    services
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| PortalError::ServiceNotFound(id.to_string()))
}

/// Load state.toml (default if missing)
pub fn load_state(config_dir: &Path) -> Result<State> {
    let path = config_dir.join("state.toml");
    if !path.exists() {
        return Ok(State::default());
    }
    load_toml(path)
}

/// Save state.toml
pub fn save_state(config_dir: &Path, state: &State) -> Result<()> {
    let path = config_dir.join("state.toml");
    let content = toml::to_string_pretty(state).map_err(|e| PortalError::ConfigWrite {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    fs::write(&path, content)?;
    info!(path = %path.display(), "state saved");
    Ok(())
}

/// Services as shown to the user: seed records plus attachments uploaded since.
pub fn load_services_with_state(config_dir: &Path, state: &State) -> Result<Vec<ServiceRecord>> {
    let services = load_services(config_dir)?;
    Ok(services
        .into_iter()
        .map(|service| {
            let attachment = service.attachment || state.attachment_for(&service.id).is_some();
            ServiceRecord {
                attachment,
                ..service
            }
        })
        .collect())
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[company]
name = "Portal Financiero"
# logo_url = "https://example.com/logo.png"   # optional, overridden by 'portal logo'

[view]
page_size = 4          # clients per page in 'portal balances'
currency_symbol = "$"
"#;

/// Template content for services.toml
pub const SERVICES_TEMPLATE: &str = r#"# Billable services. 'client' groups services into balances and must match
# exactly (case-sensitive). invoice = generated | pending, payment = paid | pending.

[[service]]
id = "1"
date = "2023-03-01"
client = "Empresa A"
concept = "Asesoría Financiera"
description = "Asesoría mensual de finanzas empresariales"
amount = 5000
invoice = "generated"
payment = "paid"
attachment = true

[[service]]
id = "2"
date = "2023-03-15"
client = "Empresa B"
concept = "Soporte Técnico"
description = "Soporte técnico para sistemas de contabilidad"
amount = 3500
invoice = "generated"
payment = "pending"

[[service]]
id = "3"
date = "2023-04-01"
client = "Empresa A"
concept = "Asesoría Financiera"
description = "Asesoría mensual de finanzas empresariales"
amount = 5000
invoice = "pending"
payment = "pending"

[[service]]
id = "4"
date = "2023-04-10"
client = "Empresa C"
concept = "Consultoría Fiscal"
description = "Análisis de obligaciones fiscales"
amount = 7500
invoice = "generated"
payment = "paid"
attachment = true

[[service]]
id = "5"
date = "2023-05-01"
client = "Empresa A"
concept = "Asesoría Financiera"
description = "Asesoría mensual de finanzas empresariales"
amount = 5000
invoice = "generated"
payment = "pending"

[[service]]
id = "6"
date = "2023-05-15"
client = "Empresa D"
concept = "Consultoría Legal"
description = "Asesoría legal para cumplimiento normativo"
amount = 6200
invoice = "pending"
payment = "pending"

[[service]]
id = "7"
date = "2023-06-01"
client = "Empresa A"
concept = "Asesoría Financiera"
description = "Asesoría mensual de finanzas empresariales"
amount = 5000
invoice = "generated"
payment = "pending"

[[service]]
id = "8"
date = "2023-06-20"
client = "Empresa B"
concept = "Capacitación"
description = "Capacitación en herramientas de contabilidad"
amount = 4500
invoice = "generated"
payment = "paid"
"#;

/// Template content for clients.toml
pub const CLIENTS_TEMPLATE: &str = r#"# Client directory. The table name (e.g., ["1"]) is the client id used by
# statement/archive/activate. 'company' must match the client name used in
# services.toml for balances to line up.

["1"]
name = "Carlos Rodríguez"
email = "carlos@empresa.com"
phone = "555-1234"
company = "Empresa A"

["2"]
name = "María González"
email = "maria@negocio.com"
phone = "555-5678"
company = "Empresa B"

["3"]
name = "Juan López"
email = "juan@startup.com"
phone = "555-9012"
company = "Empresa C"

["4"]
name = "Ana Martínez"
email = "ana@antiguocliente.com"
phone = "555-3456"
company = "Antiguos Negocios"
archived = true
"#;
