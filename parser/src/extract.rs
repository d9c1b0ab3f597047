//! Field extractors: turn the capture groups of a matched payload into an [`Event`].
//!
//! Extraction never fails the line. Numeric groups that do not parse become
//! zero, missing optional groups read as empty strings, and the two second-stage
//! decoders (get5 JSON and the rcon port) fall back to [`Unknown`].

use crate::event::*;
use crate::types::{Equation, Player, Position, PositionFloat, Velocity};
use chrono::NaiveDateTime;
use regex::Captures;
use serde::Deserialize;
use tracing::warn;

/// Builds an event from the payload's capture groups.
pub type Extractor = fn(NaiveDateTime, &Captures<'_>) -> Event;

// ---------------------------------------------------------------------------
// Parse-or-default helpers
// ---------------------------------------------------------------------------

/// Capture group `index`, or `""` when the group did not take part in the match.
pub fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map(|m| m.as_str()).unwrap_or("")
}

/// Base-10 integer, 0 when the text is not one.
pub fn to_int(value: &str) -> i64 {
    value.parse().unwrap_or(0)
}

pub fn to_float(value: &str) -> f32 {
    value.parse().unwrap_or(0.0)
}

fn int_at(caps: &Captures<'_>, index: usize) -> i64 {
    to_int(group(caps, index))
}

fn float_at(caps: &Captures<'_>, index: usize) -> f32 {
    to_float(group(caps, index))
}

fn text_at(caps: &Captures<'_>, index: usize) -> String {
    group(caps, index).to_string()
}

/// Player from the four groups starting at `start`: name, id, steam id, side.
fn player_at(caps: &Captures<'_>, start: usize) -> Player {
    Player {
        name: text_at(caps, start),
        id: int_at(caps, start + 1),
        steam_id: text_at(caps, start + 2),
        side: text_at(caps, start + 3),
    }
}

/// Player from three groups; the line carries no side.
fn player_without_side(caps: &Captures<'_>, start: usize) -> Player {
    Player {
        name: text_at(caps, start),
        id: int_at(caps, start + 1),
        steam_id: text_at(caps, start + 2),
        side: String::new(),
    }
}

fn position_at(caps: &Captures<'_>, start: usize) -> Position {
    Position {
        x: int_at(caps, start),
        y: int_at(caps, start + 1),
        z: int_at(caps, start + 2),
    }
}

/// The whole matched payload, used when a second-stage parse gives up.
fn unknown(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    Unknown {
        time,
        raw: text_at(caps, 0),
    }
    .into()
}

// ---------------------------------------------------------------------------
// Server and world
// ---------------------------------------------------------------------------

pub fn server_message(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    ServerMessage {
        time,
        text: text_at(caps, 1),
    }
    .into()
}

pub fn freeze_time_start(time: NaiveDateTime, _caps: &Captures<'_>) -> Event {
    FreezTimeStart { time }.into()
}

pub fn world_match_start(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    WorldMatchStart {
        time,
        map: text_at(caps, 1),
    }
    .into()
}

pub fn world_round_start(time: NaiveDateTime, _caps: &Captures<'_>) -> Event {
    WorldRoundStart { time }.into()
}

pub fn world_round_restart(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    WorldRoundRestart {
        time,
        timeleft: int_at(caps, 1),
    }
    .into()
}

pub fn world_round_end(time: NaiveDateTime, _caps: &Captures<'_>) -> Event {
    WorldRoundEnd { time }.into()
}

pub fn world_game_commencing(time: NaiveDateTime, _caps: &Captures<'_>) -> Event {
    WorldGameCommencing { time }.into()
}

pub fn team_scored(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    TeamScored {
        time,
        side: text_at(caps, 1),
        score: int_at(caps, 2),
        num_players: int_at(caps, 3),
    }
    .into()
}

pub fn team_notice(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    TeamNotice {
        time,
        side: text_at(caps, 1),
        notice: text_at(caps, 2),
        score_ct: int_at(caps, 3),
        score_t: int_at(caps, 4),
    }
    .into()
}

pub fn server_cvar(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    ServerCvar {
        time,
        key: text_at(caps, 1),
        value: text_at(caps, 2),
    }
    .into()
}

// ---------------------------------------------------------------------------
// Connection lifecycle
// ---------------------------------------------------------------------------

pub fn player_connected(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerConnected {
        time,
        player: player_without_side(caps, 1),
        address: text_at(caps, 4),
    }
    .into()
}

pub fn player_disconnected(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerDisconnected {
        time,
        player: player_at(caps, 1),
        reason: text_at(caps, 5),
    }
    .into()
}

pub fn player_entered(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerEntered {
        time,
        player: player_without_side(caps, 1),
    }
    .into()
}

pub fn player_banned(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerBanned {
        time,
        player: player_without_side(caps, 1),
        duration: text_at(caps, 4),
        by: text_at(caps, 5),
    }
    .into()
}

// ---------------------------------------------------------------------------
// Player actions
// ---------------------------------------------------------------------------

pub fn player_switched(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerSwitched {
        time,
        player: player_without_side(caps, 1),
        from: text_at(caps, 4),
        to: text_at(caps, 5),
    }
    .into()
}

pub fn player_say(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerSay {
        time,
        player: player_at(caps, 1),
        team: group(caps, 5) == "_team",
        text: text_at(caps, 6),
    }
    .into()
}

pub fn player_purchase(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerPurchase {
        time,
        player: player_at(caps, 1),
        item: text_at(caps, 5),
    }
    .into()
}

pub fn player_picked_up(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerPickedUp {
        time,
        player: player_at(caps, 1),
        item: text_at(caps, 5),
    }
    .into()
}

pub fn player_dropped(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerDropped {
        time,
        player: player_at(caps, 1),
        item: text_at(caps, 5),
    }
    .into()
}

pub fn player_money_change(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerMoneyChange {
        time,
        player: player_at(caps, 1),
        equation: Equation {
            a: int_at(caps, 5),
            b: int_at(caps, 6),
            result: int_at(caps, 7),
        },
        purchase: text_at(caps, 8),
    }
    .into()
}

// ---------------------------------------------------------------------------
// Combat
// ---------------------------------------------------------------------------

pub fn player_kill(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    let modifiers = group(caps, 16);
    PlayerKill {
        time,
        attacker: player_at(caps, 1),
        attacker_position: position_at(caps, 5),
        victim: player_at(caps, 8),
        victim_position: position_at(caps, 12),
        weapon: text_at(caps, 15),
        headshot: modifiers.contains("headshot"),
        penetrated: modifiers.contains("penetrated"),
    }
    .into()
}

pub fn player_kill_assist(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerKillAssist {
        time,
        attacker: player_at(caps, 1),
        victim: player_at(caps, 5),
    }
    .into()
}

pub fn player_attack(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerAttack {
        time,
        attacker: player_at(caps, 1),
        attacker_position: position_at(caps, 5),
        victim: player_at(caps, 8),
        victim_position: position_at(caps, 12),
        weapon: text_at(caps, 15),
        damage: int_at(caps, 16),
        damage_armor: int_at(caps, 17),
        health: int_at(caps, 18),
        armor: int_at(caps, 19),
        hitgroup: text_at(caps, 20),
    }
    .into()
}

pub fn player_killed_bomb(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerKilledBomb {
        time,
        player: player_at(caps, 1),
        position: position_at(caps, 5),
    }
    .into()
}

pub fn player_killed_suicide(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerKilledSuicide {
        time,
        player: player_at(caps, 1),
        position: position_at(caps, 5),
        with: text_at(caps, 8),
    }
    .into()
}

pub fn player_kill_other(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerKillOther {
        time,
        attacker: player_at(caps, 1),
        attacker_position: position_at(caps, 5),
        victim: text_at(caps, 8),
        victim_id: text_at(caps, 9),
        victim_position: position_at(caps, 10),
        weapon: text_at(caps, 13),
    }
    .into()
}

// ---------------------------------------------------------------------------
// Bomb
// ---------------------------------------------------------------------------

pub fn player_bomb_got(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerBombGot {
        time,
        player: player_at(caps, 1),
    }
    .into()
}

pub fn player_bomb_planted(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerBombPlanted {
        time,
        player: player_at(caps, 1),
    }
    .into()
}

pub fn player_bomb_dropped(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerBombDropped {
        time,
        player: player_at(caps, 1),
    }
    .into()
}

pub fn player_bomb_begin_defuse(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerBombBeginDefuse {
        time,
        player: player_at(caps, 1),
        kit: group(caps, 5) != "out",
    }
    .into()
}

pub fn player_bomb_defused(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerBombDefused {
        time,
        player: player_at(caps, 1),
    }
    .into()
}

// ---------------------------------------------------------------------------
// Grenades
// ---------------------------------------------------------------------------

pub fn player_threw(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerThrew {
        time,
        player: player_at(caps, 1),
        grenade: text_at(caps, 5),
        position: position_at(caps, 6),
        entindex: int_at(caps, 9),
    }
    .into()
}

pub fn player_blinded(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    PlayerBlinded {
        time,
        victim: player_at(caps, 1),
        duration: float_at(caps, 5),
        attacker: player_at(caps, 6),
        entindex: int_at(caps, 10),
    }
    .into()
}

pub fn projectile_spawned(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    ProjectileSpawned {
        time,
        position: PositionFloat {
            x: float_at(caps, 1),
            y: float_at(caps, 2),
            z: float_at(caps, 3),
        },
        velocity: Velocity {
            x: float_at(caps, 4),
            y: float_at(caps, 5),
            z: float_at(caps, 6),
        },
    }
    .into()
}

// ---------------------------------------------------------------------------
// Match end, get5, rcon
// ---------------------------------------------------------------------------

pub fn game_over(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    GameOver {
        time,
        mode: text_at(caps, 1),
        map_group: text_at(caps, 2),
        map: text_at(caps, 3),
        score_ct: int_at(caps, 4),
        score_t: int_at(caps, 5),
        duration: int_at(caps, 6),
    }
    .into()
}

/// The JSON object logged after `get5_event: `.
#[derive(Debug, Deserialize)]
pub struct Get5Envelope {
    pub matchid: String,
    #[serde(default)]
    pub params: Get5EventParams,
    pub event: Get5EventKind,
}

/// Second-stage decoder for the get5 payload, independent of the outer match.
pub fn decode_get5(json: &str) -> Result<Get5Envelope, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn get5_event(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    match decode_get5(group(caps, 1)) {
        Ok(envelope) => Get5Event {
            time,
            matchid: envelope.matchid,
            params: envelope.params,
            event: envelope.event,
        }
        .into(),
        Err(e) => {
            warn!("Failed to decode get5 event payload: {}", e);
            unknown(time, caps)
        }
    }
}

pub fn rcon(time: NaiveDateTime, caps: &Captures<'_>) -> Event {
    match group(caps, 2).parse::<u32>() {
        Ok(port) => Rcon {
            time,
            ip: text_at(caps, 1),
            port,
            command: text_at(caps, 3),
        }
        .into(),
        Err(e) => {
            warn!("Invalid rcon source port '{}': {}", group(caps, 2), e);
            unknown(time, caps)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use regex::Regex;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 10, 15)
            .unwrap()
            .and_hms_opt(18, 30, 30)
            .unwrap()
    }

    #[test]
    fn test_to_int_defaults_to_zero() {
        assert_eq!(to_int("42"), 42);
        assert_eq!(to_int("-7"), -7);
        assert_eq!(to_int(""), 0);
        assert_eq!(to_int("12a"), 0);
        assert_eq!(to_int("99999999999999999999999"), 0);
    }

    #[test]
    fn test_to_float_defaults_to_zero() {
        assert_eq!(to_float("2.5"), 2.5);
        assert_eq!(to_float("-1.25"), -1.25);
        assert_eq!(to_float("abc"), 0.0);
        assert_eq!(to_float(""), 0.0);
    }

    #[test]
    fn test_missing_group_reads_empty() {
        let re = Regex::new(r"^(a)(b)?$").unwrap();
        let caps = re.captures("a").unwrap();
        assert_eq!(group(&caps, 1), "a");
        assert_eq!(group(&caps, 2), "");
        assert_eq!(group(&caps, 9), "");
    }

    #[test]
    fn test_non_numeric_group_becomes_zero() {
        // A looser pattern than the built-in one lets non-digits through.
        let re = Regex::new(r#"^Team "(\w+)" scored "(\w+)" with "(\w+)" players$"#).unwrap();
        let caps = re.captures(r#"Team "CT" scored "seven" with "4" players"#).unwrap();

        match team_scored(at(), &caps) {
            Event::TeamScored(e) => {
                assert_eq!(e.side, "CT");
                assert_eq!(e.score, 0);
                assert_eq!(e.num_players, 4);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_decode_get5_envelope() {
        let envelope = decode_get5(
            r#"{"matchid":"42","params":{"map_number":2,"map_name":"de_nuke","team1_name":"A","team2_name":"B"},"event":"going_live"}"#,
        )
        .unwrap();
        assert_eq!(envelope.matchid, "42");
        assert_eq!(envelope.event, Get5EventKind::GoingLive);
        assert_eq!(envelope.params.map_number, 2);
        assert_eq!(envelope.params.map_name, "de_nuke");
        assert_eq!(envelope.params.team2_name, "B");
    }

    #[test]
    fn test_decode_get5_rejects_unknown_event_name() {
        assert!(decode_get5(r#"{"matchid":"1","params":{},"event":"pizza_ordered"}"#).is_err());
    }

    #[test]
    fn test_rcon_port_overflow_falls_back() {
        let re = Regex::new(r#"^rcon from "(.*):(\d+)": command "(.*)"$"#).unwrap();
        let payload = r#"rcon from "10.0.0.1:4294967296": command "status""#;
        let caps = re.captures(payload).unwrap();

        match rcon(at(), &caps) {
            Event::Unknown(e) => assert_eq!(e.raw, payload),
            other => panic!("unexpected event {:?}", other),
        }
    }
}
