use crate::{
    models::{NewUser, UserDocument},
    services::UserStore,
    utils::AppError,
};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use tokio::sync::RwLock;

/// In-process store for handler tests.
#[derive(Default)]
pub struct MemoryUserStore {
    documents: RwLock<Vec<Document>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_users(&self) -> Result<Vec<UserDocument>, AppError> {
        let documents = self.documents.read().await;
        documents
            .iter()
            .cloned()
            .map(|document| UserDocument::from_document(document).map_err(AppError::DatabaseError))
            .collect()
    }

    async fn create_user(&self, user: NewUser) -> Result<UserDocument, AppError> {
        let document = user.into_document(ObjectId::new());
        self.documents.write().await.push(document.clone());
        UserDocument::from_document(document).map_err(AppError::DatabaseError)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
