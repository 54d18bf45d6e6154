pub mod dynamodb;
pub mod s3;

pub use dynamodb::DynamoVideoRepository;
pub use s3::S3ObjectStore;
