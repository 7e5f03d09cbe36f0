use bizadvisor::domain::{Chat, DEFAULT_CHAT_TITLE, UserId};

#[test]
fn given_short_question_when_opening_chat_then_title_is_the_question() {
    let chat = Chat::from_first_question(UserId::new(), "How is my cafe doing?");

    assert_eq!(chat.title, "How is my cafe doing?");
    assert_eq!(chat.created_at, chat.updated_at);
}

#[test]
fn given_long_question_when_opening_chat_then_title_is_cut_to_fifty_chars() {
    let question = "ж".repeat(60);

    let chat = Chat::from_first_question(UserId::new(), &question);

    assert_eq!(chat.title, format!("{}...", "ж".repeat(50)));
}

#[test]
fn given_exactly_fifty_chars_when_opening_chat_then_title_is_kept_whole() {
    let question = "a".repeat(50);

    let chat = Chat::from_first_question(UserId::new(), &question);

    assert_eq!(chat.title, question);
}

#[test]
fn given_blank_title_when_creating_chat_then_uses_default() {
    assert_eq!(Chat::new(UserId::new(), None).title, DEFAULT_CHAT_TITLE);
    assert_eq!(
        Chat::new(UserId::new(), Some("   ".to_string())).title,
        DEFAULT_CHAT_TITLE
    );
    assert_eq!(
        Chat::new(UserId::new(), Some(" Budget ".to_string())).title,
        "Budget"
    );
}
