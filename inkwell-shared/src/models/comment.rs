use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A reader comment attached to an article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub comment: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub user: CommentAuthor,
}

/// The comment author's public identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentAuthor {
    pub id: uuid::Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl CommentAuthor {
    /// Display name rendered next to the comment.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body for comment creation and edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentRequest {
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn author_full_name() {
        let author = CommentAuthor {
            id: Uuid::new_v4(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
        };
        assert_eq!(author.full_name(), "Grace Hopper");
    }
}
