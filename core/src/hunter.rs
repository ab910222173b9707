use serde::{Deserialize, Serialize};

/// Longest hunter name accepted, in characters.
pub const MAX_NAME_LEN: usize = 20;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Avatar {
    Nova,
    Vex,
    Shadow,
    Cypher,
}

impl Default for Avatar {
    fn default() -> Self {
        Self::Nova
    }
}

impl Avatar {
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::Nova => "Nova",
            Self::Vex => "Vex",
            Self::Shadow => "Shadow",
            Self::Cypher => "Cypher",
        }
    }
}

/// The player's character, shown next to every reaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunter {
    name: String,
    avatar: Avatar,
}

impl Hunter {
    /// Cuts `name` to [`MAX_NAME_LEN`] characters and trims it, a blank name falls back to
    /// the avatar's own.
    pub fn new(avatar: Avatar, name: &str) -> Self {
        let name: String = name.chars().take(MAX_NAME_LEN).collect();
        let name = match name.trim() {
            "" => avatar.default_name().to_owned(),
            trimmed => trimmed.to_owned(),
        };
        Self { name, avatar }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar(&self) -> Avatar {
        self.avatar
    }
}

impl Default for Hunter {
    fn default() -> Self {
        Self::new(Avatar::default(), "")
    }
}
