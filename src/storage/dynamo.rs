//! DynamoDB-backed implementation of the table store.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::types::AttributeValue as SdkAttributeValue;

use super::TableStore;
use super::config::AwsTableConfig;
use crate::attr::{AttributeValue, Item};
use crate::error::{Error, Result};

/// Table store backed by a managed DynamoDB table.
///
/// The client is built once at startup and holds the connection pool and
/// credentials for every subsequent operation; no per-request setup happens.
pub struct DynamoTable {
    client: Client,
    table: String,
}

impl DynamoTable {
    /// Connects to the engine.
    ///
    /// Credentials are sourced from the environment (`AWS_ACCESS_KEY_ID`,
    /// `AWS_SECRET_ACCESS_KEY`); the region comes from the configuration.
    pub async fn connect(config: &AwsTableConfig) -> Result<Self> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        Ok(Self {
            client: Client::new(&sdk_config),
            table: config.table.clone(),
        })
    }

    /// Wraps an existing client, for callers that build their own SDK config.
    pub fn with_client(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait]
impl TableStore for DynamoTable {
    async fn put_item(&self, item: Item) -> Result<()> {
        let item: HashMap<String, SdkAttributeValue> = item
            .into_iter()
            .map(|(name, attr)| (name, to_sdk(attr)))
            .collect();

        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Item>> {
        let output = self
            .client
            .scan()
            .table_name(&self.table)
            .send()
            .await
            .map_err(classify)?;

        // Only the first page is read. The continuation key is not followed,
        // so tables larger than one scan page come back truncated.
        if output.last_evaluated_key().is_some() {
            tracing::debug!(
                table = %self.table,
                "scan response truncated, continuation key not followed"
            );
        }

        output.items().iter().map(from_sdk_item).collect()
    }
}

/// Converts our attribute encoding into the SDK's.
fn to_sdk(attr: AttributeValue) -> SdkAttributeValue {
    match attr {
        AttributeValue::S(s) => SdkAttributeValue::S(s),
        AttributeValue::N(n) => SdkAttributeValue::N(n),
        AttributeValue::Bool(b) => SdkAttributeValue::Bool(b),
        AttributeValue::Null(b) => SdkAttributeValue::Null(b),
        AttributeValue::L(items) => SdkAttributeValue::L(items.into_iter().map(to_sdk).collect()),
        AttributeValue::M(fields) => SdkAttributeValue::M(
            fields
                .into_iter()
                .map(|(name, field)| (name, to_sdk(field)))
                .collect(),
        ),
    }
}

/// Converts an SDK attribute back into our encoding.
///
/// Binary and set attributes cannot originate from this service's writes;
/// finding one in the table means the item was written by something else.
fn from_sdk(attr: &SdkAttributeValue) -> Result<AttributeValue> {
    match attr {
        SdkAttributeValue::S(s) => Ok(AttributeValue::S(s.clone())),
        SdkAttributeValue::N(n) => Ok(AttributeValue::N(n.clone())),
        SdkAttributeValue::Bool(b) => Ok(AttributeValue::Bool(*b)),
        SdkAttributeValue::Null(b) => Ok(AttributeValue::Null(*b)),
        SdkAttributeValue::L(items) => Ok(AttributeValue::L(
            items.iter().map(from_sdk).collect::<Result<Vec<_>>>()?,
        )),
        SdkAttributeValue::M(fields) => {
            let mut converted = std::collections::BTreeMap::new();
            for (name, field) in fields {
                converted.insert(name.clone(), from_sdk(field)?);
            }
            Ok(AttributeValue::M(converted))
        }
        other => Err(Error::Encoding(format!(
            "unsupported attribute type in stored item: {:?}",
            other
        ))),
    }
}

fn from_sdk_item(item: &HashMap<String, SdkAttributeValue>) -> Result<Item> {
    let mut converted = Item::new();
    for (name, attr) in item {
        converted.insert(name.clone(), from_sdk(attr)?);
    }
    Ok(converted)
}

/// Classifies an SDK failure into the closed error-kind set.
///
/// The mapping keys off the engine's error code so the same classification
/// covers both modeled and unmodeled service errors.
fn classify<E>(err: SdkError<E>) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match &err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            Error::Connectivity(DisplayErrorContext(&err).to_string())
        }
        SdkError::ServiceError(_) => {
            let message = err
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| DisplayErrorContext(&err).to_string());
            match err.code().unwrap_or_default() {
                "ProvisionedThroughputExceededException"
                | "RequestLimitExceeded"
                | "ThrottlingException" => Error::Throttled(message),
                "ValidationException" | "ResourceNotFoundException" => Error::Validation(message),
                "AccessDeniedException"
                | "UnrecognizedClientException"
                | "InvalidSignatureException"
                | "MissingAuthenticationTokenException" => Error::Unauthorized(message),
                _ => Error::Storage(message),
            }
        }
        _ => Error::Storage(DisplayErrorContext(&err).to_string()),
    }
}
