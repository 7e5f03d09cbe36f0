use chrono::{Duration, Utc};

use bizadvisor::application::ports::{
    ChatRepository, FileRepository, RepositoryError, UserRepository,
};
use bizadvisor::domain::{Chat, Message, UploadedFile, UserProfile};

use crate::helpers::test_postgres::TestPostgres;

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn given_postgres_container_when_running_migrations_then_tables_exist() {
    let pg = TestPostgres::new().await;

    let (tables,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM information_schema.tables WHERE table_name IN ('users', 'files', 'chats', 'messages')",
    )
    .fetch_one(&pg.pool)
    .await
    .unwrap();

    assert_eq!(tables, 4);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn given_registered_user_when_storing_files_and_chats_then_round_trips_through_postgres() {
    let pg = TestPostgres::new().await;
    let user = UserProfile::new("anna".to_string(), "Bean Bar".to_string(), "coffee".to_string());
    pg.users.create_user(&user).await.unwrap();

    let duplicate = UserProfile::new("anna".to_string(), String::new(), "tea".to_string());
    assert!(matches!(
        pg.users.create_user(&duplicate).await,
        Err(RepositoryError::ConstraintViolation(_))
    ));

    let mut older = UploadedFile::new(user.id, "nov.txt".to_string());
    older.uploaded_at = Utc::now() - Duration::minutes(5);
    older.size_bytes = 10;
    let newer = UploadedFile::new(user.id, "dec.xlsx".to_string());
    pg.files.insert_file(&older).await.unwrap();
    pg.files.insert_file(&newer).await.unwrap();

    let files = pg.files.list_files(user.id).await.unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].filename, "dec.xlsx");
    assert_eq!(files[1].size_bytes, 10);
    assert_eq!(files[1].storage_path, older.storage_path);

    let chat = Chat::from_first_question(user.id, "How is December?");
    pg.chats.create_chat(&chat).await.unwrap();
    let message = Message::new(
        chat.id,
        user.id,
        "How is December?".to_string(),
        "Fine.".to_string(),
        "reports".to_string(),
    );
    pg.chats.append_message(&message).await.unwrap();

    let stats = pg.users.get_user_stats(user.id).await.unwrap();
    assert_eq!(stats.files_count, 2);
    assert_eq!(stats.messages_count, 1);

    let history = pg.chats.get_messages(chat.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].answer, "Fine.");
    assert_eq!(history[0].category, "reports");

    assert!(pg.chats.delete_chat(user.id, chat.id).await.unwrap());
    assert!(pg.chats.get_messages(chat.id).await.unwrap().is_empty());
    assert!(pg.files.delete_file(user.id, newer.id).await.unwrap());
    assert!(!pg.files.delete_file(user.id, newer.id).await.unwrap());
}
