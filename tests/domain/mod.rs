mod chat_test;
mod content_type_test;
