use std::net::IpAddr;

pub const DEFAULT_TENANT_ID: &str = "main_tenant";

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreBackend,
    pub host: IpAddr,
    pub port: u16,
    pub tenant_id: String,
    pub users_container: String,
    pub appointments_container: String,
    pub max_body_size: usize,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    Postgres { database_url: String },
    Memory,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let store = match env_or("BOOKINGS_STORE", "postgres").as_str() {
            "postgres" => StoreBackend::Postgres {
                database_url: env_required("DATABASE_URL")?,
            },
            "memory" => StoreBackend::Memory,
            other => return Err(format!("Invalid BOOKINGS_STORE: {other}")),
        };

        let host: IpAddr = env_or("BOOKINGS_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid BOOKINGS_HOST: {e}"))?;

        let port: u16 = env_or("BOOKINGS_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid BOOKINGS_PORT: {e}"))?;

        let tenant_id = env_or("BOOKINGS_TENANT_ID", DEFAULT_TENANT_ID);
        if tenant_id.trim().is_empty() {
            return Err("BOOKINGS_TENANT_ID must not be empty".to_string());
        }

        let users_container = env_or("BOOKINGS_USERS_CONTAINER", "users");
        let appointments_container = env_or("BOOKINGS_APPOINTMENTS_CONTAINER", "appointments");
        if users_container == appointments_container {
            return Err(
                "BOOKINGS_USERS_CONTAINER and BOOKINGS_APPOINTMENTS_CONTAINER must differ"
                    .to_string(),
            );
        }

        let max_body_size: usize = env_or("BOOKINGS_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid BOOKINGS_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("BOOKINGS_LOG_LEVEL", "info");

        Ok(Config {
            store,
            host,
            port,
            tenant_id,
            users_container,
            appointments_container,
            max_body_size,
            log_level,
        })
    }

    /// In-memory configuration with the default tenant and container names.
    pub fn in_memory() -> Self {
        Config {
            store: StoreBackend::Memory,
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            tenant_id: DEFAULT_TENANT_ID.to_string(),
            users_container: "users".to_string(),
            appointments_container: "appointments".to_string(),
            max_body_size: 65_536,
            log_level: "warn".to_string(),
        }
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
