use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{ClientError, ClientResult};
use super::model::{Card, CardDraft, CardPatch, Stack, StackPatch};

/// Typed operations the stores issue against the stacks/cards service.
///
/// The trait seam exists so the stores can be driven by a scripted in-memory
/// remote in tests; production code uses [`HttpRemote`].
#[async_trait]
pub trait RemoteApi: Send + Sync {
    async fn fetch_all_stacks(&self) -> ClientResult<Vec<Stack>>;
    async fn create_stack(&self, name: &str, cover: &str) -> ClientResult<Stack>;
    async fn update_stack(&self, id: &str, patch: &StackPatch) -> ClientResult<Stack>;
    async fn delete_stack(&self, id: &str) -> ClientResult<()>;

    async fn fetch_all_cards(&self) -> ClientResult<Vec<Card>>;
    async fn create_card(&self, draft: &CardDraft) -> ClientResult<Card>;
    async fn update_card(&self, id: &str, patch: &CardPatch) -> ClientResult<Card>;
    async fn delete_card(&self, id: &str) -> ClientResult<()>;
    async fn move_card(&self, id: &str, target_stack_id: &str) -> ClientResult<Card>;
}

#[derive(Debug, Serialize, Deserialize)]
struct CoverDto {
    #[serde(rename = "type")]
    kind: String,
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StackDto {
    id: String,
    name: String,
    cover: CoverDto,
    card_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardDto {
    id: String,
    stack_id: String,
    name: String,
    description: Option<String>,
    cover: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateStackBody {
    name: String,
    cover: CoverDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateStackBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cover: Option<CoverDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateCardBody {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    cover: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCardBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cover: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveCardBody {
    stack_id: String,
}

/// On the wire a stack cover is `{ "type": ..., "value": ... }`; the client
/// keeps it as one opaque style string of the form `type:value`.
fn cover_from_wire(cover: CoverDto) -> String {
    format!("{}:{}", cover.kind, cover.value)
}

fn cover_to_wire(cover: &str) -> CoverDto {
    match cover.split_once(':') {
        Some((kind, value)) if matches!(kind, "color" | "gradient" | "image") => CoverDto {
            kind: kind.to_string(),
            value: value.to_string(),
        },
        // Bare values are treated as plain colors
        _ => CoverDto {
            kind: "color".to_string(),
            value: cover.to_string(),
        },
    }
}

impl From<StackDto> for Stack {
    fn from(dto: StackDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            cover: cover_from_wire(dto.cover),
            card_count: dto.card_count,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

impl From<CardDto> for Card {
    fn from(dto: CardDto) -> Self {
        Self {
            id: dto.id,
            stack_id: dto.stack_id,
            name: dto.name,
            description: dto.description,
            cover: dto.cover,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

/// [`RemoteApi`] implementation over the REST surface of the service.
#[derive(Clone)]
pub struct HttpRemote {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRemote {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(&self, response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("request failed with status {}", status),
        };
        Err(ClientError::Network(message))
    }
}

#[async_trait]
impl RemoteApi for HttpRemote {
    async fn fetch_all_stacks(&self) -> ClientResult<Vec<Stack>> {
        let response = self.http.get(self.url("/api/stacks")).send().await?;
        let stacks: Vec<StackDto> = self.check(response).await?.json().await?;
        Ok(stacks.into_iter().map(|s| s.into()).collect())
    }

    async fn create_stack(&self, name: &str, cover: &str) -> ClientResult<Stack> {
        let body = CreateStackBody {
            name: name.to_string(),
            cover: cover_to_wire(cover),
        };
        let response = self
            .http
            .post(self.url("/api/stacks"))
            .json(&body)
            .send()
            .await?;
        let stack: StackDto = self.check(response).await?.json().await?;
        Ok(stack.into())
    }

    async fn update_stack(&self, id: &str, patch: &StackPatch) -> ClientResult<Stack> {
        let body = UpdateStackBody {
            name: patch.name.clone(),
            cover: patch.cover.as_deref().map(cover_to_wire),
        };
        let response = self
            .http
            .put(self.url(&format!("/api/stacks/{}", id)))
            .json(&body)
            .send()
            .await?;
        let stack: StackDto = self.check(response).await?.json().await?;
        Ok(stack.into())
    }

    async fn delete_stack(&self, id: &str) -> ClientResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/stacks/{}", id)))
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn fetch_all_cards(&self) -> ClientResult<Vec<Card>> {
        let response = self.http.get(self.url("/api/cards")).send().await?;
        let cards: Vec<CardDto> = self.check(response).await?.json().await?;
        Ok(cards.into_iter().map(|c| c.into()).collect())
    }

    async fn create_card(&self, draft: &CardDraft) -> ClientResult<Card> {
        let body = CreateCardBody {
            name: draft.name.clone(),
            description: draft.description.clone(),
            cover: draft.cover.clone(),
        };
        let response = self
            .http
            .post(self.url(&format!("/api/stacks/{}/cards", draft.stack_id)))
            .json(&body)
            .send()
            .await?;
        let card: CardDto = self.check(response).await?.json().await?;
        Ok(card.into())
    }

    async fn update_card(&self, id: &str, patch: &CardPatch) -> ClientResult<Card> {
        let body = UpdateCardBody {
            name: patch.name.clone(),
            description: patch.description.clone(),
            cover: patch.cover.clone(),
        };
        let response = self
            .http
            .put(self.url(&format!("/api/cards/{}", id)))
            .json(&body)
            .send()
            .await?;
        let card: CardDto = self.check(response).await?.json().await?;
        Ok(card.into())
    }

    async fn delete_card(&self, id: &str) -> ClientResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/cards/{}", id)))
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn move_card(&self, id: &str, target_stack_id: &str) -> ClientResult<Card> {
        let body = MoveCardBody {
            stack_id: target_stack_id.to_string(),
        };
        let response = self
            .http
            .patch(self.url(&format!("/api/cards/{}/move", id)))
            .json(&body)
            .send()
            .await?;
        let card: CardDto = self.check(response).await?.json().await?;
        Ok(card.into())
    }
}
