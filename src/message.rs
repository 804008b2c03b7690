#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Error,
}

// A line for the status console under the current screen.
#[derive(Clone, Debug)]
pub struct Message {
    pub content: String,
    pub message_type: MessageType,
}

impl Message {
    pub fn new(message_type: MessageType, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            message_type,
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageType::Info, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageType::Error, content)
    }
}
