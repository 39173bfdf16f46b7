use serde::{Deserialize, Serialize};

/// A single vote on an article.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Vote {
    pub article_id: uuid::Uuid,
    pub user_id: uuid::Uuid,
}

/// Whether the vote endpoint added or removed the caller's vote.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VoteState {
    Add,
    Remove,
}

/// Outcome of `GET /vote/{article_id}` — the endpoint toggles the
/// caller's vote and reports which way it went.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteReceipt {
    pub state: VoteState,
    pub user_id: uuid::Uuid,
    pub article_id: uuid::Uuid,
}

impl VoteReceipt {
    /// The vote row this receipt refers to.
    #[must_use]
    pub fn vote(&self) -> Vote {
        Vote {
            article_id: self.article_id,
            user_id: self.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn vote_state_wire_format() {
        assert_eq!(serde_json::to_string(&VoteState::Add).unwrap(), "\"add\"");
        let parsed: VoteState = serde_json::from_str("\"remove\"").unwrap();
        assert_eq!(parsed, VoteState::Remove);
    }

    #[test]
    fn receipt_projects_vote_row() {
        let receipt = VoteReceipt {
            state: VoteState::Add,
            user_id: Uuid::new_v4(),
            article_id: Uuid::new_v4(),
        };
        let vote = receipt.vote();
        assert_eq!(vote.user_id, receipt.user_id);
        assert_eq!(vote.article_id, receipt.article_id);
    }
}
