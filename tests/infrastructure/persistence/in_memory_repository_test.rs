use chrono::{Duration, Utc};

use bizadvisor::application::ports::{
    ChatRepository, FileRepository, RepositoryError, UserRepository,
};
use bizadvisor::domain::{Chat, ChatId, Message, UploadedFile, UserProfile};
use bizadvisor::infrastructure::persistence::InMemoryRepository;

async fn repository_with_user(username: &str) -> (InMemoryRepository, UserProfile) {
    let repository = InMemoryRepository::new();
    let user = UserProfile::new(username.to_string(), String::new(), "retail".to_string());
    repository.create_user(&user).await.unwrap();
    (repository, user)
}

#[tokio::test]
async fn given_taken_username_when_creating_user_then_violates_constraint() {
    let (repository, _) = repository_with_user("anna").await;
    let twin = UserProfile::new("anna".to_string(), String::new(), "retail".to_string());

    let result = repository.create_user(&twin).await;

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
}

#[tokio::test]
async fn given_files_uploaded_over_time_when_listing_then_newest_first() {
    let (repository, user) = repository_with_user("anna").await;
    let mut older = UploadedFile::new(user.id, "old.txt".to_string());
    older.uploaded_at = Utc::now() - Duration::minutes(5);
    let newer = UploadedFile::new(user.id, "new.txt".to_string());
    repository.insert_file(&newer).await.unwrap();
    repository.insert_file(&older).await.unwrap();

    let files = repository.list_files(user.id).await.unwrap();

    let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, vec!["new.txt", "old.txt"]);
}

#[tokio::test]
async fn given_file_of_unknown_user_when_inserting_then_violates_constraint() {
    let repository = InMemoryRepository::new();
    let file = UploadedFile::new(Default::default(), "a.txt".to_string());

    let result = repository.insert_file(&file).await;

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
}

#[tokio::test]
async fn given_touched_chat_when_listing_then_it_comes_first() {
    let (repository, user) = repository_with_user("anna").await;
    let first = Chat::new(user.id, Some("first".to_string()));
    let second = Chat::new(user.id, Some("second".to_string()));
    repository.create_chat(&first).await.unwrap();
    repository.create_chat(&second).await.unwrap();

    repository
        .touch_chat(first.id, Utc::now() + Duration::minutes(1))
        .await
        .unwrap();
    let chats = repository.list_chats(user.id).await.unwrap();

    assert_eq!(chats[0].id, first.id);
    assert_eq!(chats[1].id, second.id);
}

#[tokio::test]
async fn given_chat_with_messages_when_deleting_then_messages_and_counts_go_too() {
    let (repository, user) = repository_with_user("anna").await;
    let chat = Chat::new(user.id, None);
    repository.create_chat(&chat).await.unwrap();
    for question in ["q1", "q2"] {
        let message = Message::new(
            chat.id,
            user.id,
            question.to_string(),
            "a".to_string(),
            String::new(),
        );
        repository.append_message(&message).await.unwrap();
    }
    assert_eq!(repository.get_user_stats(user.id).await.unwrap().messages_count, 2);

    assert!(repository.delete_chat(user.id, chat.id).await.unwrap());

    assert!(repository.get_messages(chat.id).await.unwrap().is_empty());
    assert_eq!(repository.get_user_stats(user.id).await.unwrap().messages_count, 0);
    assert!(!repository.delete_chat(user.id, chat.id).await.unwrap());
}

#[tokio::test]
async fn given_other_users_chat_when_reading_or_deleting_then_it_is_invisible() {
    let (repository, owner) = repository_with_user("anna").await;
    let stranger = UserProfile::new("boris".to_string(), String::new(), "cafe".to_string());
    repository.create_user(&stranger).await.unwrap();
    let chat = Chat::new(owner.id, None);
    repository.create_chat(&chat).await.unwrap();

    assert!(repository.get_chat(stranger.id, chat.id).await.unwrap().is_none());
    assert!(!repository.delete_chat(stranger.id, chat.id).await.unwrap());
    assert!(repository.get_chat(owner.id, chat.id).await.unwrap().is_some());
}

#[tokio::test]
async fn given_message_for_unknown_chat_when_appending_then_violates_constraint() {
    let (repository, user) = repository_with_user("anna").await;
    let message = Message::new(
        ChatId::new(),
        user.id,
        "q".to_string(),
        "a".to_string(),
        String::new(),
    );

    let result = repository.append_message(&message).await;

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
}
