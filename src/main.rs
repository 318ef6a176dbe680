use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

use taggedid::article::{Article, ArticleManager};
use taggedid::user::User;
use taggedid::Error;

const LOG_LEVEL: Level = Level::DEBUG;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(LOG_LEVEL)
        .with_span_events(FmtSpan::NEW)
        .compact()
        .init();

    let john = User {
        id: "john-sundell".into(),
        name: "John Sundel".into(),
    };
    info!("created user {}", john.id);

    let json = john.to_json_string()?;
    println!("{}", json);

    let decoded: User = serde_json::from_str(&json)?;
    info!("decoded user {} back from json", decoded.id);

    let some_article = Article {
        id: "article-01".into(),
        title: "My First Article".into(),
    };
    let mut article_manager = ArticleManager::new();

    // articles are only ever found by an ArticleId, so passing john.id here
    // would not compile
    match article_manager.find(&some_article.id) {
        Some(article) => info!("found article {}", article.id),
        None => info!("article {} is not managed yet", some_article.id),
    }

    article_manager.insert(some_article.clone());
    let article = article_manager
        .find(&some_article.id)
        .ok_or(Error::ArticleDoesNotExist {
            article_id: some_article.id.clone(),
        })?;
    println!("{}", serde_json::to_string(&article)?);

    Ok(())
}
