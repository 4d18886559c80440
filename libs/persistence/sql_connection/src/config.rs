use std::time::Duration;

pub trait DbConnectConfig {
    fn uri(&self) -> &str;
}

/// Configure database connection pool data
pub trait DbOptionsConfig {
    fn max_conn(&self) -> Option<u32> { None }
    fn min_conn(&self) -> Option<u32> { None }
    fn wait_timeout(&self) -> Duration { Duration::from_millis(2000) }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PostgresDbConfig {
    pub uri: String,
    pub max_conn: Option<u32>,
    pub min_conn: Option<u32>,
}

impl DbConnectConfig for PostgresDbConfig {
    fn uri(&self) -> &str { &self.uri }
}

impl DbOptionsConfig for PostgresDbConfig {
    fn max_conn(&self) -> Option<u32> { self.max_conn }

    fn min_conn(&self) -> Option<u32> { self.min_conn }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_config_from_json() {
        let config: PostgresDbConfig = serde_json::from_str(
            r#"{"uri": "postgresql://localhost/wow", "max_conn": 8, "min_conn": null}"#,
        )
        .unwrap();

        assert_eq!(config.uri(), "postgresql://localhost/wow");
        assert_eq!(config.max_conn(), Some(8));
        assert_eq!(config.min_conn(), None);
        assert_eq!(config.wait_timeout(), Duration::from_millis(2000));
    }
}
