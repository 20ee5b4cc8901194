use std::time::Duration;

/// Where to connect and which collection to benchmark.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub collection: String,
    /// Upper bound on server selection, which is what an unreachable endpoint runs into.
    pub connect_timeout: Duration,
}

impl MongoConfig {
    pub fn uri(&self) -> String { format!("mongodb://{}:{}", self.host, self.port) }

    pub fn endpoint(&self) -> String { format!("{}:{}", self.host, self.port) }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            database: "benchmark".to_string(),
            collection: "test_data".to_string(),
            connect_timeout: Duration::from_secs(5),
        }
    }
}
