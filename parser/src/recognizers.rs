//! Built-in recognizer catalog.
//!
//! Each constant is the payload grammar for one event type. Patterns are
//! anchored when the [`Recognizer`] is built, so they must cover the whole
//! payload. Server-written lines match exactly one pattern.
//!
//! Chat text and player names are free text, so a player can type something
//! that also reads as a connect or kill line. Patterns that end in a
//! player-controlled tail (`say`, `committed suicide with`) are therefore listed
//! first in [`all_recognizers`] and win over every other player-prefixed pattern.
//!
//! Player groups come in fours (`name`, `id`, `steam_id`, `side`) and positions
//! in threes, which is what the extractors in `extract.rs` index into.
//!
//! To add a recognizer, write its pattern here, its extractor in `extract.rs`,
//! and list it in [`all_recognizers`].

use crate::extract;
use crate::registry::Recognizer;
use tracing::info;

pub const SERVER_MESSAGE: &str = r#"server_message: "(.*)""#;
pub const FREEZ_TIME_START: &str = r#"Starting Freeze period"#;
pub const WORLD_MATCH_START: &str = r#"World triggered "Match_Start" on "(.+)""#;
pub const WORLD_ROUND_START: &str = r#"World triggered "Round_Start""#;
pub const WORLD_ROUND_RESTART: &str = r#"World triggered "Restart_Round_\((\d+)_seconds?\)""#;
pub const WORLD_ROUND_END: &str = r#"World triggered "Round_End""#;
pub const WORLD_GAME_COMMENCING: &str = r#"World triggered "Game_Commencing""#;
pub const TEAM_SCORED: &str = r#"Team "(CT|TERRORIST)" scored "(\d+)" with "(\d+)" players"#;
pub const TEAM_NOTICE: &str =
    r#"Team "(CT|TERRORIST)" triggered "(\w+)" \(CT "(\d+)"\) \(T "(\d+)"\)"#;
pub const SERVER_CVAR: &str = r#"server_cvar: "(\w+)" "(.*)""#;

pub const PLAYER_CONNECTED: &str = r#""(.+)<(\d+)><([\w:]+)><>" connected, address "(.*)""#;
pub const PLAYER_DISCONNECTED: &str =
    r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT|Unassigned|)>" disconnected \(reason "(.*)"\)"#;
pub const PLAYER_ENTERED: &str = r#""(.+)<(\d+)><([\w:]+)><>" entered the game"#;
pub const PLAYER_BANNED: &str =
    r#"Banid: "(.+)<(\d+)><([\w:]+)><\w*>" was banned "([\w. ]+)" by "(\w+)""#;

pub const PLAYER_SWITCHED: &str = r#""(.+)<(\d+)><([\w:]+)>" switched from team <(Unassigned|Spectator|TERRORIST|CT)> to <(Unassigned|Spectator|TERRORIST|CT)>"#;
pub const PLAYER_SAY: &str = r#""(.+?)<(\d+)><([\w:]+)><(TERRORIST|CT)>" say(_team)? "(.*)""#;
pub const PLAYER_PURCHASE: &str = r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" purchased "(\w+)""#;
pub const PLAYER_PICKED_UP: &str = r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" picked up "(\w+)""#;
pub const PLAYER_DROPPED: &str =
    r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT|Unassigned)>" dropped "(\w+)""#;
pub const PLAYER_MONEY_CHANGE: &str = r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" money change (\d+)\+?(-?\d+) = \$(\d+) \(tracked\)(?: \(purchase: (\w+)\))?"#;

pub const PLAYER_KILL: &str = r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" \[(-?\d+) (-?\d+) (-?\d+)\] killed "(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" \[(-?\d+) (-?\d+) (-?\d+)\] with "(\w+)"(?: ?\(([\w ]*)\))?"#;
pub const PLAYER_KILL_ASSIST: &str = r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" assisted killing "(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>""#;
pub const PLAYER_ATTACK: &str = r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" \[(-?\d+) (-?\d+) (-?\d+)\] attacked "(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" \[(-?\d+) (-?\d+) (-?\d+)\] with "(\w+)" \(damage "(\d+)"\) \(damage_armor "(\d+)"\) \(health "(\d+)"\) \(armor "(\d+)"\) \(hitgroup "([\w ]+)"\)"#;
pub const PLAYER_KILLED_BOMB: &str = r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" \[(-?\d+) (-?\d+) (-?\d+)\] was killed by the bomb\."#;
pub const PLAYER_KILLED_SUICIDE: &str = r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" \[(-?\d+) (-?\d+) (-?\d+)\] committed suicide with "(.*)""#;
pub const PLAYER_KILL_OTHER: &str = r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" \[(-?\d+) (-?\d+) (-?\d+)\] killed other "(.+)<(\d+)>" \[(-?\d+) (-?\d+) (-?\d+)\] with "(\w+)""#;

pub const PLAYER_BOMB_GOT: &str =
    r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" triggered "Got_The_Bomb""#;
pub const PLAYER_BOMB_PLANTED: &str =
    r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" triggered "Planted_The_Bomb"(?: at bombsite \w+)?"#;
pub const PLAYER_BOMB_DROPPED: &str =
    r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" triggered "Dropped_The_Bomb""#;
pub const PLAYER_BOMB_BEGIN_DEFUSE: &str =
    r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" triggered "Begin_Bomb_Defuse_With(out)?_Kit""#;
pub const PLAYER_BOMB_DEFUSED: &str =
    r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" triggered "Defused_The_Bomb""#;

pub const PLAYER_THREW: &str = r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" threw (\w+) \[(-?\d+) (-?\d+) (-?\d+)\](?: flashbang entindex (\d+))?\)?"#;
pub const PLAYER_BLINDED: &str = r#""(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" blinded for ([\d.]+) by "(.+)<(\d+)><([\w:]+)><(TERRORIST|CT)>" from flashbang entindex (\d+) ?"#;
pub const PROJECTILE_SPAWNED: &str = r#"Molotov projectile spawned at (-?\d+\.\d+) (-?\d+\.\d+) (-?\d+\.\d+), velocity (-?\d+\.\d+) (-?\d+\.\d+) (-?\d+\.\d+)"#;

pub const GAME_OVER: &str = r#"Game Over: (\w+) (\w+) (\w+) score (\d+):(\d+) after (\d+) min"#;
pub const GET5_EVENT: &str = r#"get5_event: (\{.*\})"#;
pub const RCON: &str = r#"rcon from "(.*):(\d+)": command "(.*)""#;

/// Build recognizers from `Name => PATTERN, extractor` entries. The name
/// doubles as the recognizer name and must match the event tag it produces.
#[macro_export]
macro_rules! recognizers {
    ($($name:ident => $pattern:expr, $extract:path);* $(;)?) => {
        vec![
            $(
                $crate::registry::Recognizer::new(
                    stringify!($name),
                    $pattern,
                    $extract as $crate::extract::Extractor,
                )
                    .expect(concat!("built-in pattern for ", stringify!($name), " must compile"))
            ),*
        ]
    };
}

/// Every built-in recognizer, in precedence order.
pub fn all_recognizers() -> Vec<Recognizer> {
    info!("Compiling built-in recognizers");

    recognizers![
        // Free-text tails first.
        PlayerSay => PLAYER_SAY, extract::player_say;
        PlayerKilledSuicide => PLAYER_KILLED_SUICIDE, extract::player_killed_suicide;
        ServerMessage => SERVER_MESSAGE, extract::server_message;
        FreezTimeStart => FREEZ_TIME_START, extract::freeze_time_start;
        WorldMatchStart => WORLD_MATCH_START, extract::world_match_start;
        WorldRoundStart => WORLD_ROUND_START, extract::world_round_start;
        WorldRoundRestart => WORLD_ROUND_RESTART, extract::world_round_restart;
        WorldRoundEnd => WORLD_ROUND_END, extract::world_round_end;
        WorldGameCommencing => WORLD_GAME_COMMENCING, extract::world_game_commencing;
        TeamScored => TEAM_SCORED, extract::team_scored;
        TeamNotice => TEAM_NOTICE, extract::team_notice;
        PlayerConnected => PLAYER_CONNECTED, extract::player_connected;
        PlayerDisconnected => PLAYER_DISCONNECTED, extract::player_disconnected;
        PlayerEntered => PLAYER_ENTERED, extract::player_entered;
        PlayerBanned => PLAYER_BANNED, extract::player_banned;
        PlayerSwitched => PLAYER_SWITCHED, extract::player_switched;
        PlayerPurchase => PLAYER_PURCHASE, extract::player_purchase;
        PlayerKill => PLAYER_KILL, extract::player_kill;
        PlayerKillOther => PLAYER_KILL_OTHER, extract::player_kill_other;
        PlayerKillAssist => PLAYER_KILL_ASSIST, extract::player_kill_assist;
        PlayerAttack => PLAYER_ATTACK, extract::player_attack;
        PlayerKilledBomb => PLAYER_KILLED_BOMB, extract::player_killed_bomb;
        PlayerPickedUp => PLAYER_PICKED_UP, extract::player_picked_up;
        PlayerDropped => PLAYER_DROPPED, extract::player_dropped;
        PlayerMoneyChange => PLAYER_MONEY_CHANGE, extract::player_money_change;
        PlayerBombGot => PLAYER_BOMB_GOT, extract::player_bomb_got;
        PlayerBombPlanted => PLAYER_BOMB_PLANTED, extract::player_bomb_planted;
        PlayerBombDropped => PLAYER_BOMB_DROPPED, extract::player_bomb_dropped;
        PlayerBombBeginDefuse => PLAYER_BOMB_BEGIN_DEFUSE, extract::player_bomb_begin_defuse;
        PlayerBombDefused => PLAYER_BOMB_DEFUSED, extract::player_bomb_defused;
        PlayerThrew => PLAYER_THREW, extract::player_threw;
        PlayerBlinded => PLAYER_BLINDED, extract::player_blinded;
        ProjectileSpawned => PROJECTILE_SPAWNED, extract::projectile_spawned;
        GameOver => GAME_OVER, extract::game_over;
        ServerCvar => SERVER_CVAR, extract::server_cvar;
        Get5Event => GET5_EVENT, extract::get5_event;
        Rcon => RCON, extract::rcon;
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::fixtures::SAMPLES;
    use crate::registry::RecognizerTable;
    use crate::timestamp::{split_line, Framing};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_all_patterns_compile() {
        let recognizers = all_recognizers();
        assert_eq!(recognizers.len(), Event::TYPES.len() - 1);
    }

    #[test]
    fn test_recognizer_names_are_event_tags() {
        for recognizer in all_recognizers() {
            assert!(
                Event::TYPES.iter().any(|tag| *tag == recognizer.name()),
                "recognizer {} has no event type",
                recognizer.name()
            );
        }
    }

    #[test]
    fn test_every_event_type_has_a_sample() {
        for tag in Event::TYPES {
            assert!(SAMPLES.iter().any(|(t, _)| t == tag), "no sample for {}", tag);
        }
    }

    #[test]
    fn test_samples_match_exactly_one_recognizer() {
        let table = RecognizerTable::new();

        for (tag, line) in SAMPLES {
            let (_, payload) = split_line(line, Framing::Standard).unwrap();
            let names: Vec<&str> = table.matching(payload).map(|r| r.name()).collect();

            if *tag == "Unknown" {
                assert!(names.is_empty(), "{} matched {:?}", payload, names);
            } else {
                assert_eq!(names, vec![*tag], "payload: {}", payload);
            }
        }
    }

    #[rstest]
    #[case(r#"<7><BOT><>" connected, address "1.2.3.4"#, false)]
    #[case(r#"<1><BOT><CT>" purchased "ak47"#, false)]
    #[case(r#"<1><BOT><CT>" [0 0 0] killed "B<3><BOT><TERRORIST>" [1 1 1] with "ak47"#, true)]
    #[case(r#"<1><BOT><CT>" [0 0 0] committed suicide with "world"#, false)]
    #[case(r#"<1><BOT><CT>" say "nested"#, true)]
    fn test_chat_cannot_forge_other_events(#[case] text: &str, #[case] team: bool) {
        let verb = if team { "say_team" } else { "say" };
        let payload = format!(r#""Player1<5><STEAM_1:1:111><CT>" {} "{}""#, verb, text);
        let table = RecognizerTable::new();
        let time = NaiveDate::from_ymd_opt(2022, 10, 15)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();

        assert_eq!(table.find(&payload).map(|r| r.name()), Some("PlayerSay"));
        match table.dispatch(time, &payload) {
            Event::PlayerSay(e) => {
                assert_eq!(e.player.name, "Player1");
                assert_eq!(e.player.id, 5);
                assert_eq!(e.team, team);
                assert_eq!(e.text, text);
            }
            other => panic!("chat dispatched as {:?}", other),
        }
    }

    #[test]
    fn test_free_text_recognizers_come_first() {
        let names: Vec<String> = all_recognizers()
            .iter()
            .take(2)
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, vec!["PlayerSay", "PlayerKilledSuicide"]);
    }

    #[test]
    fn test_patterns_reject_trailing_text() {
        let table = RecognizerTable::new();
        assert!(table.find(r#"World triggered "Round_Start" extra"#).is_none());
        assert!(table.find(r#"prefix Starting Freeze period"#).is_none());
    }
}
