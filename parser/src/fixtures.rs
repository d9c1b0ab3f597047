//! Sample log lines shared by the unit tests, one or more per event type.

pub const SAMPLES: &[(&str, &str)] = &[
    ("ServerMessage", r#"L 10/15/2022 - 18:30:00: server_message: "quit""#),
    ("FreezTimeStart", r#"L 10/15/2022 - 18:30:00: Starting Freeze period"#),
    ("WorldMatchStart", r#"L 10/15/2022 - 18:30:00: World triggered "Match_Start" on "de_dust2""#),
    ("WorldRoundStart", r#"L 10/15/2022 - 18:30:00: World triggered "Round_Start""#),
    ("WorldRoundRestart", r#"L 10/15/2022 - 18:30:00: World triggered "Restart_Round_(3_seconds)""#),
    ("WorldRoundRestart", r#"L 10/15/2022 - 18:30:00: World triggered "Restart_Round_(1_second)""#),
    ("WorldRoundEnd", r#"L 10/15/2022 - 18:30:00: World triggered "Round_End""#),
    ("WorldGameCommencing", r#"L 10/15/2022 - 18:30:00: World triggered "Game_Commencing""#),
    ("TeamScored", r#"L 10/15/2022 - 18:30:00: Team "TERRORIST" scored "3" with "5" players"#),
    ("TeamNotice", r#"L 10/15/2022 - 18:30:00: Team "CT" triggered "SFUI_Notice_CTs_Win" (CT "4") (T "2")"#),
    ("ServerCvar", r#"L 10/15/2022 - 18:30:00: server_cvar: "mp_freezetime" "15""#),
    ("PlayerConnected", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><>" connected, address "10.0.0.5:27005""#),
    ("PlayerDisconnected", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" disconnected (reason "Disconnect")"#),
    ("PlayerDisconnected", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><>" disconnected (reason "Kicked by Console")"#),
    ("PlayerEntered", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><>" entered the game"#),
    ("PlayerBanned", r#"L 10/15/2022 - 18:30:00: Banid: "Player1<5><STEAM_1:1:111><>" was banned "for 5.00 minutes" by "Console""#),
    ("PlayerSwitched", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111>" switched from team <Unassigned> to <CT>"#),
    ("PlayerSay", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" say "gl hf""#),
    ("PlayerSay", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" say_team "rush b""#),
    ("PlayerPurchase", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" purchased "ak47""#),
    ("PlayerKill", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" [-100 200 -30] killed "Player2<6><STEAM_1:0:222><TERRORIST>" [50 60 -70] with "ak47""#),
    ("PlayerKill", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" [-100 200 -30] killed "Player2<6><STEAM_1:0:222><TERRORIST>" [50 60 -70] with "awp" (headshot penetrated)"#),
    ("PlayerKillOther", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" [-100 200 -30] killed other "func_breakable<210>" [12 13 14] with "knife""#),
    ("PlayerKillAssist", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" assisted killing "Player2<6><STEAM_1:0:222><TERRORIST>""#),
    ("PlayerAttack", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" [-100 200 -30] attacked "Player2<6><STEAM_1:0:222><TERRORIST>" [50 60 -70] with "glock" (damage "27") (damage_armor "3") (health "73") (armor "97") (hitgroup "left leg")"#),
    ("PlayerKilledBomb", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" [1 2 3] was killed by the bomb."#),
    ("PlayerKilledSuicide", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" [1 2 3] committed suicide with "world""#),
    ("PlayerPickedUp", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><TERRORIST>" picked up "c4""#),
    ("PlayerDropped", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><Unassigned>" dropped "knife""#),
    ("PlayerMoneyChange", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" money change 3250-2700 = $550 (tracked) (purchase: weapon_ak47)"#),
    ("PlayerMoneyChange", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" money change 800+3250 = $4050 (tracked)"#),
    ("PlayerBombGot", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><TERRORIST>" triggered "Got_The_Bomb""#),
    ("PlayerBombPlanted", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><TERRORIST>" triggered "Planted_The_Bomb""#),
    ("PlayerBombPlanted", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><TERRORIST>" triggered "Planted_The_Bomb" at bombsite A"#),
    ("PlayerBombDropped", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><TERRORIST>" triggered "Dropped_The_Bomb""#),
    ("PlayerBombBeginDefuse", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" triggered "Begin_Bomb_Defuse_With_Kit""#),
    ("PlayerBombBeginDefuse", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" triggered "Begin_Bomb_Defuse_Without_Kit""#),
    ("PlayerBombDefused", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" triggered "Defused_The_Bomb""#),
    ("PlayerThrew", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" threw flashbang [-380 1287 -167] flashbang entindex 162)"#),
    ("PlayerThrew", r#"L 10/15/2022 - 18:30:00: "Player1<5><STEAM_1:1:111><CT>" threw hegrenade [10 20 30]"#),
    ("PlayerBlinded", r#"L 10/15/2022 - 18:30:00: "Player2<6><STEAM_1:0:222><TERRORIST>" blinded for 2.43 by "Player1<5><STEAM_1:1:111><CT>" from flashbang entindex 162 "#),
    ("ProjectileSpawned", r#"L 10/15/2022 - 18:30:00: Molotov projectile spawned at -1234.500000 100.250000 -50.000000, velocity 300.125000 -12.000000 150.500000"#),
    ("GameOver", r#"L 10/15/2022 - 18:30:00: Game Over: competitive mg_active de_dust2 score 16:10 after 45 min"#),
    ("Get5Event", r#"L 10/15/2022 - 18:30:00: get5_event: {"matchid":"example_match","params":{"map_number":1,"map_name":"de_mirage","team1_name":"Alpha","team1_score":16,"team2_name":"Bravo","team2_score":12},"event":"map_end"}"#),
    ("Rcon", r#"L 10/15/2022 - 18:30:00: rcon from "192.168.1.10:51234": command "mp_restartgame 1""#),
    ("Unknown", r#"L 10/15/2022 - 18:30:00: some totally unrecognized freeform text"#),
];
