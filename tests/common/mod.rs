use hits_service::config::AppConfig;
use hits_service::services::MongoDb;
use hits_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");

        let db_name = format!("hits_test_{}", Uuid::new_v4().simple());

        let mut config = AppConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = Some(db_name.clone());

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the readiness endpoint
        let client = reqwest::Client::new();
        let ready_url = format!("http://127.0.0.1:{}/ready", port);
        for _ in 0..50 {
            if client.get(&ready_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Drops the per-test database.
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
