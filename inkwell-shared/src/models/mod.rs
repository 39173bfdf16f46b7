pub mod article;
pub mod comment;
pub mod errors;
pub mod tag;
pub mod timestamp;
pub mod user;
pub mod vote;

pub use article::{Article, ArticleCreateRequest, ArticleUpdateRequest};
pub use comment::{Comment, CommentAuthor, CommentRequest};
pub use errors::ErrorDetail;
pub use tag::{Tag, TagCreateRequest};
pub use timestamp::Timestamp;
pub use user::{
    AccountSummary, AuthSession, CurrentUser, EmailUpdateRequest, LoginForm, LogoutRequest,
    NameUpdateRequest, PasswordUpdateAck, PasswordUpdateRequest, RegisterRequest, Role,
};
pub use vote::{Vote, VoteReceipt, VoteState};
