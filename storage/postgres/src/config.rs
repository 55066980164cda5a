//! Connection parameters for a single PostgreSQL session.

use std::fmt;

/// Host, port, database and credentials of the benchmark session.
///
/// Every field has a default (`localhost:5432`, database, user and password `root`),
/// so `PostgresConfig::default()` targets a local development server.
#[derive(Clone, PartialEq, Eq)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_owned(),
            port: 5432,
            dbname: "root".to_owned(),
            user: "root".to_owned(),
            password: "root".to_owned(),
        }
    }
}

impl PostgresConfig {
    pub fn builder() -> PostgresConfigBuilder { PostgresConfigBuilder { config: PostgresConfig::default() } }

    /// libpq style `key=value` connection string.
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} dbname={} user={} password={}",
            quote_value(&self.host),
            self.port,
            quote_value(&self.dbname),
            quote_value(&self.user),
            quote_value(&self.password),
        )
    }

    /// `host:port/dbname`, safe to log.
    pub fn target(&self) -> String { format!("{}:{}/{}", self.host, self.port, self.dbname) }
}

impl fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Builder for PostgresConfig with sensible defaults.
#[derive(Debug, Clone)]
pub struct PostgresConfigBuilder {
    config: PostgresConfig,
}

impl PostgresConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn dbname(mut self, dbname: impl Into<String>) -> Self {
        self.config.dbname = dbname.into();
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.config.user = user.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    pub fn build(self) -> PostgresConfig { self.config }
}

// libpq: values with whitespace or quotes must be single-quoted, with `'` and `\` escaped
fn quote_value(value: &str) -> String {
    if !value.is_empty() && !value.chars().any(|c| c.is_whitespace() || c == '\'' || c == '\\') {
        return value.to_owned();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for char in value.chars() {
        if char == '\'' || char == '\\' {
            quoted.push('\\');
        }
        quoted.push(char);
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PostgresConfig::default();
        assert_eq!(config.connection_string(), "host=localhost port=5432 dbname=root user=root password=root");
        assert_eq!(config.target(), "localhost:5432/root");
    }

    #[test]
    fn test_builder_overrides() {
        let config = PostgresConfig::builder().host("db.internal").port(15432).dbname("bench").user("postgres").password("postgres").build();
        assert_eq!(config.connection_string(), "host=db.internal port=15432 dbname=bench user=postgres password=postgres");
        assert_eq!(config.target(), "db.internal:15432/bench");
    }

    #[test]
    fn test_values_are_quoted() {
        let config = PostgresConfig::builder().password("it's a secret").user("").build();
        assert_eq!(config.connection_string(), r"host=localhost port=5432 dbname=root user='' password='it\'s a secret'");
        assert_eq!(quote_value(r"back\slash"), r"'back\\slash'");
    }

    #[test]
    fn test_debug_hides_password() {
        let config = PostgresConfig::builder().password("hunter2").build();
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("localhost"));
    }
}
