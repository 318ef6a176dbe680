//! String identifiers tagged at compile time with the entity they belong to.
//!
//! ```
//! use taggedid::article::ArticleId;
//! use taggedid::user::UserId;
//!
//! let user_id = UserId::new("john-sundell");
//! let article_id: ArticleId = "article-01".into();
//!
//! assert_eq!(user_id.to_string(), "john-sundell");
//! assert_eq!(serde_json::to_string(&article_id).unwrap(), r#""article-01""#);
//! ```

pub mod article;
pub mod error;
pub mod taggedid;
pub mod user;

pub use error::Error;
pub use taggedid::TaggedId;
