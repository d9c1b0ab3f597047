//! Typed events produced from a single log line.
//!
//! [`Event`] is a closed set. Every variant wraps a struct carrying the line's
//! `time` plus its own fields, and serializes with a `type` tag equal to the
//! variant name.

use crate::types::{Equation, Player, Position, PositionFloat, Velocity};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

macro_rules! events {
    ($($name:ident),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "type")]
        pub enum Event {
            $($name($name)),*
        }

        impl Event {
            /// Every type tag, in declaration order.
            pub const TYPES: &'static [&'static str] = &[$(stringify!($name)),*];

            /// The discriminant tag, identical to the serialized `type` field.
            pub fn type_name(&self) -> &'static str {
                match self {
                    $(Event::$name(_) => stringify!($name)),*
                }
            }

            pub fn time(&self) -> NaiveDateTime {
                match self {
                    $(Event::$name(e) => e.time),*
                }
            }
        }

        $(
            impl From<$name> for Event {
                fn from(event: $name) -> Self {
                    Event::$name(event)
                }
            }
        )*
    };
}

events![
    ServerMessage,
    FreezTimeStart,
    WorldMatchStart,
    WorldRoundStart,
    WorldRoundRestart,
    WorldRoundEnd,
    WorldGameCommencing,
    TeamScored,
    TeamNotice,
    PlayerConnected,
    PlayerDisconnected,
    PlayerEntered,
    PlayerBanned,
    PlayerSwitched,
    PlayerSay,
    PlayerPurchase,
    PlayerKill,
    PlayerKillAssist,
    PlayerAttack,
    PlayerKilledBomb,
    PlayerKilledSuicide,
    PlayerPickedUp,
    PlayerDropped,
    PlayerMoneyChange,
    PlayerBombGot,
    PlayerBombPlanted,
    PlayerBombDropped,
    PlayerBombBeginDefuse,
    PlayerBombDefused,
    PlayerThrew,
    PlayerBlinded,
    ProjectileSpawned,
    GameOver,
    ServerCvar,
    Get5Event,
    Rcon,
    PlayerKillOther,
    Unknown,
];

// ---------------------------------------------------------------------------
// Server and world
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerMessage {
    pub time: NaiveDateTime,
    pub text: String,
}

/// Freeze time began, logged before every round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreezTimeStart {
    pub time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldMatchStart {
    pub time: NaiveDateTime,
    pub map: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldRoundStart {
    pub time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldRoundRestart {
    pub time: NaiveDateTime,
    /// Seconds until the restart.
    pub timeleft: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldRoundEnd {
    pub time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldGameCommencing {
    pub time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamScored {
    pub time: NaiveDateTime,
    pub side: String,
    pub score: i64,
    pub num_players: i64,
}

/// Round result notice, e.g. `SFUI_Notice_CTs_Win`, with the score after the round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamNotice {
    pub time: NaiveDateTime,
    pub side: String,
    pub notice: String,
    pub score_ct: i64,
    pub score_t: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerCvar {
    pub time: NaiveDateTime,
    pub key: String,
    pub value: String,
}

// ---------------------------------------------------------------------------
// Connection lifecycle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConnected {
    pub time: NaiveDateTime,
    pub player: Player,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDisconnected {
    pub time: NaiveDateTime,
    pub player: Player,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntered {
    pub time: NaiveDateTime,
    pub player: Player,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBanned {
    pub time: NaiveDateTime,
    pub player: Player,
    /// Free text such as `for 5.00 minutes` or `permanently`.
    pub duration: String,
    pub by: String,
}

// ---------------------------------------------------------------------------
// Player actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSwitched {
    pub time: NaiveDateTime,
    pub player: Player,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSay {
    pub time: NaiveDateTime,
    pub player: Player,
    pub text: String,
    /// Sent with `say_team`.
    pub team: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPurchase {
    pub time: NaiveDateTime,
    pub player: Player,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPickedUp {
    pub time: NaiveDateTime,
    pub player: Player,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDropped {
    pub time: NaiveDateTime,
    pub player: Player,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerMoneyChange {
    pub time: NaiveDateTime,
    pub player: Player,
    pub equation: Equation,
    /// Item bought, empty when the change was not a purchase.
    pub purchase: String,
}

// ---------------------------------------------------------------------------
// Combat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerKill {
    pub time: NaiveDateTime,
    pub attacker: Player,
    #[serde(rename = "attacker_pos")]
    pub attacker_position: Position,
    pub victim: Player,
    #[serde(rename = "victim_pos")]
    pub victim_position: Position,
    pub weapon: String,
    pub headshot: bool,
    pub penetrated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerKillAssist {
    pub time: NaiveDateTime,
    pub attacker: Player,
    pub victim: Player,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAttack {
    pub time: NaiveDateTime,
    pub attacker: Player,
    #[serde(rename = "attacker_pos")]
    pub attacker_position: Position,
    pub victim: Player,
    #[serde(rename = "victim_pos")]
    pub victim_position: Position,
    pub weapon: String,
    pub damage: i64,
    pub damage_armor: i64,
    /// Victim health after the hit.
    pub health: i64,
    /// Victim armor after the hit.
    pub armor: i64,
    pub hitgroup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerKilledBomb {
    pub time: NaiveDateTime,
    pub player: Player,
    #[serde(rename = "pos")]
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerKilledSuicide {
    pub time: NaiveDateTime,
    pub player: Player,
    #[serde(rename = "pos")]
    pub position: Position,
    pub with: String,
}

/// A player destroyed something that is not a player (a vent, a window...).
///
/// The victim is an entity, so only its class name and entity id are known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerKillOther {
    pub time: NaiveDateTime,
    pub attacker: Player,
    #[serde(rename = "attacker_pos")]
    pub attacker_position: Position,
    pub victim: String,
    pub victim_id: String,
    #[serde(rename = "victim_pos")]
    pub victim_position: Position,
    pub weapon: String,
}

// ---------------------------------------------------------------------------
// Bomb
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBombGot {
    pub time: NaiveDateTime,
    pub player: Player,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBombPlanted {
    pub time: NaiveDateTime,
    pub player: Player,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBombDropped {
    pub time: NaiveDateTime,
    pub player: Player,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBombBeginDefuse {
    pub time: NaiveDateTime,
    pub player: Player,
    pub kit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBombDefused {
    pub time: NaiveDateTime,
    pub player: Player,
}

// ---------------------------------------------------------------------------
// Grenades
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerThrew {
    pub time: NaiveDateTime,
    pub player: Player,
    #[serde(rename = "pos")]
    pub position: Position,
    /// Only set for flashbangs; 0 otherwise.
    pub entindex: i64,
    pub grenade: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBlinded {
    pub time: NaiveDateTime,
    pub attacker: Player,
    pub victim: Player,
    /// Blind duration in seconds.
    #[serde(rename = "for")]
    pub duration: f32,
    pub entindex: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSpawned {
    pub time: NaiveDateTime,
    #[serde(rename = "pos")]
    pub position: PositionFloat,
    pub velocity: Velocity,
}

// ---------------------------------------------------------------------------
// Match end
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOver {
    pub time: NaiveDateTime,
    pub mode: String,
    pub map_group: String,
    pub map: String,
    pub score_ct: i64,
    pub score_t: i64,
    /// Match length in minutes.
    pub duration: i64,
}

// ---------------------------------------------------------------------------
// get5 match management
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Get5Event {
    pub time: NaiveDateTime,
    pub matchid: String,
    pub params: Get5EventParams,
    pub event: Get5EventKind,
}

/// The `params` object of a get5 event. Which fields are set depends on the
/// event; unset numbers and strings are left out when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Get5EventParams {
    #[serde(skip_serializing_if = "is_zero")]
    pub map_number: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub map_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub team1_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub team1_score: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub team1_series_score: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub team2_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub team2_score: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub team2_series_score: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub headshot: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub weapon: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub reason: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub file: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub site: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stage: String,
    pub victim: String,
    pub attacker: String,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// get5 sub-event names. Anything outside this set is not a get5 event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Get5EventKind {
    SeriesStart,
    MapVeto,
    MapPick,
    SidePicked,
    KnifeStart,
    KnifeWon,
    GoingLive,
    PlayerDeath,
    RoundEnd,
    SideSwap,
    MapEnd,
    SeriesEnd,
    BackupLoaded,
    MatchConfigLoadFail,
    ClientSay,
    BombPlanted,
    BombDefused,
    BombExploded,
    PlayerConnect,
    PlayerDisconnect,
    TeamReady,
    TeamUnready,
}

impl Get5EventKind {
    pub const ALL: [Get5EventKind; 22] = [
        Get5EventKind::SeriesStart,
        Get5EventKind::MapVeto,
        Get5EventKind::MapPick,
        Get5EventKind::SidePicked,
        Get5EventKind::KnifeStart,
        Get5EventKind::KnifeWon,
        Get5EventKind::GoingLive,
        Get5EventKind::PlayerDeath,
        Get5EventKind::RoundEnd,
        Get5EventKind::SideSwap,
        Get5EventKind::MapEnd,
        Get5EventKind::SeriesEnd,
        Get5EventKind::BackupLoaded,
        Get5EventKind::MatchConfigLoadFail,
        Get5EventKind::ClientSay,
        Get5EventKind::BombPlanted,
        Get5EventKind::BombDefused,
        Get5EventKind::BombExploded,
        Get5EventKind::PlayerConnect,
        Get5EventKind::PlayerDisconnect,
        Get5EventKind::TeamReady,
        Get5EventKind::TeamUnready,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Get5EventKind::SeriesStart => "series_start",
            Get5EventKind::MapVeto => "map_veto",
            Get5EventKind::MapPick => "map_pick",
            Get5EventKind::SidePicked => "side_picked",
            Get5EventKind::KnifeStart => "knife_start",
            Get5EventKind::KnifeWon => "knife_won",
            Get5EventKind::GoingLive => "going_live",
            Get5EventKind::PlayerDeath => "player_death",
            Get5EventKind::RoundEnd => "round_end",
            Get5EventKind::SideSwap => "side_swap",
            Get5EventKind::MapEnd => "map_end",
            Get5EventKind::SeriesEnd => "series_end",
            Get5EventKind::BackupLoaded => "backup_loaded",
            Get5EventKind::MatchConfigLoadFail => "match_config_load_fail",
            Get5EventKind::ClientSay => "client_say",
            Get5EventKind::BombPlanted => "bomb_planted",
            Get5EventKind::BombDefused => "bomb_defused",
            Get5EventKind::BombExploded => "bomb_exploded",
            Get5EventKind::PlayerConnect => "player_connect",
            Get5EventKind::PlayerDisconnect => "player_disconnect",
            Get5EventKind::TeamReady => "team_ready",
            Get5EventKind::TeamUnready => "team_unready",
        }
    }
}

impl std::fmt::Display for Get5EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Administration and fallback
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rcon {
    pub time: NaiveDateTime,
    pub ip: String,
    /// Any unsigned 32-bit value is kept; the log does not range-check it.
    pub port: u32,
    pub command: String,
}

/// A well-formed line whose payload no recognizer accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unknown {
    pub time: NaiveDateTime,
    /// The payload exactly as it followed the timestamp prefix.
    pub raw: String,
}
