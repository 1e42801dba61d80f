use serenity::all::{CreateEmbed, EditInteractionResponse};

/// What a command shows the invoking user.
pub enum Reply {
    Message(String),
    Embed(CreateEmbed),
}

impl Reply {
    /// Builds the edit that replaces the deferred response.
    pub fn into_response(self) -> EditInteractionResponse {
        match self {
            Self::Message(content) => EditInteractionResponse::new().content(content),
            Self::Embed(embed) => EditInteractionResponse::new().embed(embed),
        }
    }
}
