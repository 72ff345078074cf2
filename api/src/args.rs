use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use plately_core::domain::common::{
    DemandCurve, DemandModelKind, MenuSourceConfig, PlatelyConfig, PosConfig, SimulationConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "plately-api", about = "Menu pricing simulation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub simulation: SimulationArgs,

    #[command(flatten)]
    pub pos: PosArgs,
}

impl Default for Args {
    fn default() -> Self {
        Self::parse_from(["plately-api"])
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5555"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "/api/v1")]
    pub root_path: String,

    #[arg(long = "server-tls-cert", env = "SERVER_TLS_CERT", requires = "tls_key")]
    pub tls_cert: Option<PathBuf>,

    #[arg(long = "server-tls-key", env = "SERVER_TLS_KEY", requires = "tls_cert")]
    pub tls_key: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemandModelArg {
    LogLinear,
    Linear,
    Agents,
}

impl From<DemandModelArg> for DemandModelKind {
    fn from(value: DemandModelArg) -> Self {
        match value {
            DemandModelArg::LogLinear => DemandModelKind::ConstantElasticity(DemandCurve::LogLinear),
            DemandModelArg::Linear => DemandModelKind::ConstantElasticity(DemandCurve::Linear),
            DemandModelArg::Agents => DemandModelKind::Agents,
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct SimulationArgs {
    #[arg(
        long = "demand-model",
        env = "DEMAND_MODEL",
        value_enum,
        default_value = "log-linear"
    )]
    pub demand_model: DemandModelArg,

    #[arg(long = "simulation-seed", env = "SIMULATION_SEED")]
    pub seed: Option<u64>,

    #[arg(long = "num-agents", env = "NUM_AGENTS", default_value_t = 100)]
    pub num_agents: usize,

    #[arg(long = "budget-min", env = "AGENT_BUDGET_MIN", default_value_t = 20.0)]
    pub budget_min: f64,

    #[arg(long = "budget-max", env = "AGENT_BUDGET_MAX", default_value_t = 100.0)]
    pub budget_max: f64,

    #[arg(long = "sensitivity-min", env = "AGENT_SENSITIVITY_MIN", default_value_t = 0.2)]
    pub sensitivity_min: f64,

    #[arg(long = "sensitivity-max", env = "AGENT_SENSITIVITY_MAX", default_value_t = 0.8)]
    pub sensitivity_max: f64,

    #[arg(
        long = "max-items-per-agent",
        env = "MAX_ITEMS_PER_AGENT",
        default_value_t = 3
    )]
    pub max_items_per_agent: usize,

    /// JSON menu definition; the built-in sample menu is used when absent.
    #[arg(long = "menu-file", env = "MENU_FILE")]
    pub menu_file: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct PosArgs {
    #[arg(
        long = "toast-base-url",
        env = "TOAST_BASE_URL",
        default_value = "https://ws.toasttab.com"
    )]
    pub toast_base_url: String,

    #[arg(long = "toast-restaurant-guid", env = "TOAST_RESTAURANT_GUID")]
    pub toast_restaurant_guid: Option<String>,

    #[arg(long = "toast-api-key", env = "TOAST_API_KEY", hide_env_values = true)]
    pub toast_api_key: Option<String>,

    #[arg(long = "toast-client-id", env = "TOAST_CLIENT_ID")]
    pub toast_client_id: Option<String>,

    #[arg(
        long = "toast-client-secret",
        env = "TOAST_CLIENT_SECRET",
        hide_env_values = true
    )]
    pub toast_client_secret: Option<String>,

    #[arg(long = "toast-page-size", env = "TOAST_PAGE_SIZE", default_value_t = 500)]
    pub toast_page_size: u32,
}

impl PosArgs {
    /// `None` when nothing Toast-related was supplied. A partial setup is
    /// passed through so the client can reject it at start-up.
    fn to_config(&self) -> Option<PosConfig> {
        let any_set = self.toast_restaurant_guid.is_some()
            || self.toast_api_key.is_some()
            || self.toast_client_id.is_some()
            || self.toast_client_secret.is_some();
        if !any_set {
            return None;
        }

        Some(PosConfig {
            base_url: self.toast_base_url.clone(),
            restaurant_guid: self.toast_restaurant_guid.clone().unwrap_or_default(),
            api_key: self.toast_api_key.clone(),
            client_id: self.toast_client_id.clone(),
            client_secret: self.toast_client_secret.clone(),
            page_size: self.toast_page_size,
        })
    }
}

impl From<Args> for PlatelyConfig {
    fn from(args: Args) -> Self {
        let simulation = &args.simulation;

        Self {
            simulation: SimulationConfig {
                model: simulation.demand_model.into(),
                num_agents: simulation.num_agents,
                budget_range: (simulation.budget_min, simulation.budget_max),
                sensitivity_range: (simulation.sensitivity_min, simulation.sensitivity_max),
                max_items_per_agent: simulation.max_items_per_agent,
                seed: simulation.seed,
            },
            menu_source: simulation
                .menu_file
                .clone()
                .map(MenuSourceConfig::File)
                .unwrap_or_default(),
            pos: args.pos.to_config(),
        }
    }
}
