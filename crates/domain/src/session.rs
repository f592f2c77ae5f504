//! Session configuration and conversation data model.
//!
//! The persona/scenario/difficulty catalogues are fixed enums.  Each entry
//! carries a stable uppercase token that is substituted verbatim into the
//! generated prompts, and a kebab-case wire name used by config files and the
//! CLI.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chat::Role;
use crate::error::{Error, Result};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Language
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The two supported session languages.  Fixed for the session lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    /// Lenient tag parse: anything starting with `en` (case-insensitive) is
    /// English; everything else, including the empty string, is Chinese.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("en") {
            Language::En
        } else {
            Language::Zh
        }
    }

    pub fn is_english(self) -> bool {
        self == Language::En
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Catalogues
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Customer persona archetype for the simulated shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaId {
    HighNetWorth,
    Tourist,
    Hesitant,
    GiftBuyer,
    PriceSensitive,
}

impl PersonaId {
    pub const ALL: [PersonaId; 5] = [
        PersonaId::HighNetWorth,
        PersonaId::Tourist,
        PersonaId::Hesitant,
        PersonaId::GiftBuyer,
        PersonaId::PriceSensitive,
    ];

    /// Stable token substituted verbatim into generated prompts.
    pub fn token(self) -> &'static str {
        match self {
            PersonaId::HighNetWorth => "HNWI",
            PersonaId::Tourist => "TOURIST",
            PersonaId::Hesitant => "HESITANT",
            PersonaId::GiftBuyer => "GIFT",
            PersonaId::PriceSensitive => "PRICE_SENSITIVE",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PersonaId::HighNetWorth => "high-net-worth",
            PersonaId::Tourist => "tourist",
            PersonaId::Hesitant => "hesitant",
            PersonaId::GiftBuyer => "gift-buyer",
            PersonaId::PriceSensitive => "price-sensitive",
        }
    }
}

impl FromStr for PersonaId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PersonaId::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::Config(format!("unknown persona '{s}'")))
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role-play scenario the session takes place in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioId {
    FirstVisit,
    VipReturn,
    GiftForBoss,
    DutyFree,
    OnlineConsult,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 5] = [
        ScenarioId::FirstVisit,
        ScenarioId::VipReturn,
        ScenarioId::GiftForBoss,
        ScenarioId::DutyFree,
        ScenarioId::OnlineConsult,
    ];

    /// Stable token substituted verbatim into generated prompts.
    pub fn token(self) -> &'static str {
        match self {
            ScenarioId::FirstVisit => "FIRST_VISIT",
            ScenarioId::VipReturn => "VIP_RETURN",
            ScenarioId::GiftForBoss => "GIFT_FOR_BOSS",
            ScenarioId::DutyFree => "DUTY_FREE",
            ScenarioId::OnlineConsult => "ONLINE_CONSULT",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioId::FirstVisit => "first-visit",
            ScenarioId::VipReturn => "vip-return",
            ScenarioId::GiftForBoss => "gift-for-boss",
            ScenarioId::DutyFree => "duty-free",
            ScenarioId::OnlineConsult => "online-consult",
        }
    }
}

impl FromStr for ScenarioId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ScenarioId::ALL
            .into_iter()
            .find(|sc| sc.as_str() == s)
            .ok_or_else(|| Error::Config(format!("unknown scenario '{s}'")))
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] =
        [Difficulty::Basic, Difficulty::Intermediate, Difficulty::Advanced];

    /// Stable token substituted verbatim into generated prompts.
    pub fn token(self) -> &'static str {
        match self {
            Difficulty::Basic => "BASIC",
            Difficulty::Intermediate => "INTERMEDIATE",
            Difficulty::Advanced => "ADVANCED",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Basic => "basic",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| Error::Config(format!("unknown difficulty '{s}'")))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Session configuration
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Immutable per-session configuration, fixed once the session starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub persona: PersonaId,
    pub scenario: ScenarioId,
    pub difficulty: Difficulty,
    pub brand: String,
    #[serde(default)]
    pub language: Language,
}

impl SessionConfig {
    /// Reject incomplete configuration before any network call is made.
    pub fn validate(&self) -> Result<()> {
        if self.brand.trim().is_empty() {
            return Err(Error::Config("brand must not be empty".into()));
        }
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Turns and session state
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Trainee,
    Customer,
}

impl Speaker {
    /// The wire role this speaker maps to when history is replayed as
    /// chat-completion context.
    pub fn role(self) -> Role {
        match self {
            Speaker::Trainee => Role::User,
            Speaker::Customer => Role::Assistant,
        }
    }
}

/// One utterance in the conversation.  Turns are appended in conversation
/// order and never mutated or removed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn now(speaker: Speaker, text: impl Into<String>) -> Self {
        Self { speaker, text: text.into(), timestamp: Utc::now() }
    }
}

/// Conversation state machine.
///
/// Transitions are monotonic and irreversible:
/// `Active -> {Purchased, Left} -> Ended`, or `Active -> Ended` when the
/// trainee ends the session early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Active,
    Purchased,
    Left,
    Ended,
}

impl SessionState {
    /// Any state other than `Active` refuses further turns.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionState::Active)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Active => "active",
            SessionState::Purchased => "purchased",
            SessionState::Left => "left",
            SessionState::Ended => "ended",
        };
        f.write_str(s)
    }
}
