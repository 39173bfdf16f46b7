use serde::{Deserialize, Serialize};

use super::{Comment, Tag, Timestamp, Vote};

/// A published article with its embedded tags, votes and comments, as
/// returned by the article read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub id: uuid::Uuid,
    pub title: String,
    pub article_img_url: String,
    pub description: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub tags: Vec<Tag>,
    pub votes: Vec<Vote>,
    pub comments: Vec<Comment>,
}

impl Article {
    /// Whether the given account has voted for this article.
    #[must_use]
    pub fn voted_by(&self, user_id: uuid::Uuid) -> bool {
        self.votes.iter().any(|vote| vote.user_id == user_id)
    }
}

/// Body for `POST /article/create`. Tags are referenced by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleCreateRequest {
    pub title: String,
    pub article_img_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: String,
    pub tags: Vec<i64>,
}

/// Body for `PUT /article/{id}/update`. Absent fields are left
/// untouched by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_img_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CommentAuthor;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn sample_article(voter: Uuid) -> Article {
        let article_id = Uuid::new_v4();
        Article {
            id: article_id,
            title: "on-ownership".to_string(),
            article_img_url: "https://img.example.com/ownership.png".to_string(),
            description: "Borrowing explained".to_string(),
            content: "<p>The borrow checker...</p>".to_string(),
            created_at: Timestamp(Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap()),
            updated_at: None,
            tags: vec![Tag {
                id: 3,
                parent_id: None,
                name: "rust".to_string(),
            }],
            votes: vec![Vote {
                article_id,
                user_id: voter,
            }],
            comments: vec![Comment {
                id: 1,
                comment: "Great read".to_string(),
                created_at: Timestamp(Utc.with_ymd_and_hms(2026, 1, 11, 9, 0, 0).unwrap()),
                updated_at: None,
                user: CommentAuthor {
                    id: voter,
                    first_name: "Ada".to_string(),
                    last_name: "Lovelace".to_string(),
                },
            }],
        }
    }

    #[test]
    fn voted_by_matches_on_user_id() {
        let voter = Uuid::new_v4();
        let article = sample_article(voter);

        assert!(article.voted_by(voter));
        assert!(!article.voted_by(Uuid::new_v4()));
    }

    #[test]
    fn article_roundtrips_with_embedded_collections() {
        let article = sample_article(Uuid::new_v4());
        let json = serde_json::to_string(&article).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();

        assert_eq!(back, article);
        assert_eq!(back.tags.len(), 1);
        assert_eq!(back.comments.len(), 1);
    }

    #[test]
    fn update_request_skips_unset_fields() {
        let update = ArticleUpdateRequest {
            title: Some("new-title".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"title":"new-title"}"#
        );
    }
}
