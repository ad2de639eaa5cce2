use serde::{Deserialize, Serialize};

/// Author of a message as it arrives from the thread loader
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MessageAuthor {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// The signed-in user looking at the thread
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub id: String,
}

impl Viewer {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
