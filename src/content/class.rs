use serde::Deserialize;
use serde::Serialize;

/// The nine actor typologies a profile can belong to.
///
/// Wire codes are stable identifiers used in content files and the
/// confusability table; display names are what the player sees and
/// what gets logged.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Class {
    #[serde(rename = "BOT")]
    Bot,
    #[serde(rename = "TROLL")]
    Troll,
    #[serde(rename = "STATE_MEDIA")]
    StateMedia,
    #[serde(rename = "AGENCY")]
    Agency,
    #[serde(rename = "GRASS")]
    Grass,
    #[serde(rename = "INFL")]
    Influencer,
    #[serde(rename = "NEWS")]
    News,
    #[serde(rename = "FACT")]
    Fact,
    #[serde(rename = "TNS")]
    Tns,
}

impl Class {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Bot,
            Self::Troll,
            Self::StateMedia,
            Self::Agency,
            Self::Grass,
            Self::Influencer,
            Self::News,
            Self::Fact,
            Self::Tns,
        ]
    }
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Bot => "BOT",
            Self::Troll => "TROLL",
            Self::StateMedia => "STATE_MEDIA",
            Self::Agency => "AGENCY",
            Self::Grass => "GRASS",
            Self::Influencer => "INFL",
            Self::News => "NEWS",
            Self::Fact => "FACT",
            Self::Tns => "TNS",
        }
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bot => "Bot Ağı",
            Self::Troll => "Trol Çiftliği",
            Self::StateMedia => "Devlet Destekli Medya",
            Self::Agency => "Kampanya Ajansı",
            Self::Grass => "Gönüllü Partizan Topluluk",
            Self::Influencer => "Kanaat Önderi/Influencer",
            Self::News => "Bağımsız Gazeteci/Haber",
            Self::Fact => "Doğrulama Kuruluşu",
            Self::Tns => "Platform Güven/Güvenlik",
        }
    }
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Bot => "🤖",
            Self::Troll => "😈",
            Self::StateMedia => "🏛️",
            Self::Agency => "🎯",
            Self::Grass => "🌱",
            Self::Influencer => "🎤",
            Self::News => "📰",
            Self::Fact => "✅",
            Self::Tns => "🛡️",
        }
    }
    /// Reverse lookup by display name.
    pub fn named(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.name() == name)
    }
}

impl TryFrom<&str> for Class {
    type Error = crate::Error;
    fn try_from(code: &str) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .ok_or_else(|| crate::Error::UnknownClass {
                code: code.to_string(),
            })
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
