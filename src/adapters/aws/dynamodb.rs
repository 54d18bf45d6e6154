use crate::domain::video::VideoRecord;
use crate::error::AppError;
use crate::ports::repository::VideoRepository;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

/// DynamoVideoRepository implements VideoRepository for AWS DynamoDB.
///
/// Table layout: partition key `video_id` (S), attributes `user_id` (S) and
/// the optional `title` / `video_url` / `thumbnail_url` strings.
#[derive(Clone)]
pub struct DynamoVideoRepository {
    client: Client,
    table_name: String,
}

impl DynamoVideoRepository {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

fn string_attr(
    item: &std::collections::HashMap<String, AttributeValue>,
    name: &str,
) -> Option<String> {
    item.get(name).and_then(|v| v.as_s().ok()).cloned()
}

fn uuid_attr(
    item: &std::collections::HashMap<String, AttributeValue>,
    name: &str,
) -> Result<Uuid, AppError> {
    let raw = string_attr(item, name)
        .ok_or_else(|| AppError::Internal(format!("video record missing {}", name)))?;
    Uuid::parse_str(&raw)
        .map_err(|e| AppError::Internal(format!("video record has invalid {}: {}", name, e)))
}

#[async_trait]
impl VideoRepository for DynamoVideoRepository {
    async fn get_video(&self, id: Uuid) -> Result<Option<VideoRecord>, AppError> {
        let resp = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("video_id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("video lookup failed: {}", e)))?;

        let Some(item) = resp.item else {
            return Ok(None);
        };

        Ok(Some(VideoRecord {
            id: uuid_attr(&item, "video_id")?,
            user_id: uuid_attr(&item, "user_id")?,
            title: string_attr(&item, "title"),
            video_url: string_attr(&item, "video_url"),
            thumbnail_url: string_attr(&item, "thumbnail_url"),
        }))
    }

    async fn update_video(&self, record: &VideoRecord) -> Result<(), AppError> {
        let mut put = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .item("video_id", AttributeValue::S(record.id.to_string()))
            .item("user_id", AttributeValue::S(record.user_id.to_string()));

        if let Some(ref title) = record.title {
            put = put.item("title", AttributeValue::S(title.clone()));
        }
        if let Some(ref video_url) = record.video_url {
            put = put.item("video_url", AttributeValue::S(video_url.clone()));
        }
        if let Some(ref thumbnail_url) = record.thumbnail_url {
            put = put.item("thumbnail_url", AttributeValue::S(thumbnail_url.clone()));
        }

        put.send()
            .await
            .map_err(|e| AppError::Persist(format!("video update failed: {}", e)))?;
        Ok(())
    }
}
