use crate::dtos::MessageResponse;
use crate::error::AppError;
use crate::models::{MessageRecord, PageHit};
use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, FindOneOptions, IndexOptions, ReturnDocument},
    Client as MongoClient, Collection, Database, IndexModel,
};

const HITS_COLLECTION: &str = "hits";
const MESSAGES_COLLECTION: &str = "test";
const FALLBACK_DATABASE: &str = "hits_db";

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Connects and selects the database: the configured name when given,
    /// otherwise whatever default database the connection string designates.
    pub async fn connect(uri: &str, database: Option<&str>) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = match database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(FALLBACK_DATABASE)),
        };
        tracing::info!(database = %db.name(), "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for hits-service");

        // Unique index on page: exactly one counter record per page key.
        let page_index = IndexModel::builder()
            .keys(doc! { "page": 1 })
            .options(
                IndexOptions::builder()
                    .name("page_idx".to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        self.hits().create_index(page_index, None).await.map_err(|e| {
            tracing::error!("Failed to create page index on hits collection: {}", e);
            AppError::from(e)
        })?;
        tracing::info!("Created unique index on hits.page");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// Increments the visit counter for `page` and returns the new count.
    ///
    /// A single find-and-modify round trip: the upsert creates the record
    /// with count 1 on first visit, and `ReturnDocument::After` yields the
    /// post-increment value. Concurrent visits therefore each observe a
    /// distinct count; there is no read-then-write window to lose updates in.
    pub async fn record_hit(&self, page: &str) -> Result<i64, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let hit = self
            .hits()
            .find_one_and_update(doc! { "page": page }, doc! { "$inc": { "count": 1_i64 } }, options)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| {
                // Unreachable with upsert + ReturnDocument::After.
                AppError::InternalError(anyhow::anyhow!(
                    "upsert for page '{}' returned no document",
                    page
                ))
            })?;

        Ok(hit.count)
    }

    /// Inserts a new message record, then reads it back by its assigned id
    /// with the `_id` field projected out.
    pub async fn record_message(&self, message: &str) -> Result<MessageResponse, AppError> {
        let inserted = self
            .messages()
            .insert_one(MessageRecord::new(message), None)
            .await
            .map_err(AppError::from)?;

        let options = FindOneOptions::builder()
            .projection(doc! { "_id": 0 })
            .build();

        self.db
            .collection::<MessageResponse>(MESSAGES_COLLECTION)
            .find_one(doc! { "_id": inserted.inserted_id }, options)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| {
                AppError::NotFound(anyhow::anyhow!("inserted message record not found"))
            })
    }

    pub fn hits(&self) -> Collection<PageHit> {
        self.db.collection(HITS_COLLECTION)
    }

    pub fn messages(&self) -> Collection<MessageRecord> {
        self.db.collection(MESSAGES_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
