// ==================== USER STORE ====================
// Persistence of user documents.
// Handlers only see the `UserStore` trait; the implementation is picked at startup.

use crate::{
    database::MongoDB,
    models::{NewUser, UserDocument, USERS_COLLECTION},
    utils::AppError,
};
use async_trait::async_trait;
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every stored user, in whatever order the store returns them.
    async fn list_users(&self) -> Result<Vec<UserDocument>, AppError>;

    /// Persists `user` under a freshly assigned identifier.
    async fn create_user(&self, user: NewUser) -> Result<UserDocument, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

/// Store backed by the `users` collection.
pub struct MongoUserStore {
    db: MongoDB,
    users: Collection<Document>,
}

impl MongoUserStore {
    pub fn new(db: MongoDB) -> Self {
        let users = db.database().collection::<Document>(USERS_COLLECTION);
        Self { db, users }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn list_users(&self) -> Result<Vec<UserDocument>, AppError> {
        let mut cursor = self.users.find(doc! {}).await?;

        let mut users = Vec::new();
        while let Some(result) = cursor.next().await {
            let document = result?;
            users.push(UserDocument::from_document(document).map_err(AppError::DatabaseError)?);
        }

        Ok(users)
    }

    async fn create_user(&self, user: NewUser) -> Result<UserDocument, AppError> {
        let document = user.into_document(ObjectId::new());
        self.users.insert_one(&document).await?;

        UserDocument::from_document(document).map_err(AppError::DatabaseError)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.ping().await?;
        Ok(())
    }
}

/// Stand-in used when no MongoDB client could be built (missing or
/// unparsable connection string). Every operation fails, so requests get the
/// generic storage error instead of the process refusing to start.
pub struct UnavailableUserStore {
    reason: String,
}

impl UnavailableUserStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> AppError {
        AppError::DatabaseError(format!("database unavailable: {}", self.reason))
    }
}

#[async_trait]
impl UserStore for UnavailableUserStore {
    async fn list_users(&self) -> Result<Vec<UserDocument>, AppError> {
        Err(self.error())
    }

    async fn create_user(&self, _user: NewUser) -> Result<UserDocument, AppError> {
        Err(self.error())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(self.error())
    }
}
