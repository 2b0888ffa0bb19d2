//! Static correction tables for known-bad upstream records
//!
//! Trigger internal names missing from [`TRIGGER_NAMES`] are unused on the map
//! and make any route through them unresolvable when sifting. A display name
//! containing `|` covers a trigger that spans several in-game locations.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Internal trigger name to confirmed display name
static TRIGGER_NAME_ENTRIES: &[(&str, &str)] = &[
    ("t_spawn", "T-Spawn (G: 0)"),
    ("main_ramp", "Main Ramp (G: 0)"),
    ("tower_top", "Tower Top (G: 0)"),
    ("banana_ramp", "Banana Ramp (G: 0)"),
    ("banana_hole", "Banana Hole (G: 1)"),
    ("tower_platform", "Tower Platform (G: 0)"),
    ("jail_wall_02", "Jail Wall (G: 0)"),
    ("jail_floor_02", "Jail Floor (G: 0)"),
    ("long_ramp", "Long Ramp (G: 0)"),
    ("t2_tower_platform", "T2 Tower Platform (G: 0)"),
    ("t2_right_hole", "T2 Right Hole (G: 1)"),
    ("t2_left_wing", "T2 Left Wing (G: 0)"),
    ("t2_right_wing", "T2 Right Wing (G: 0)"),
    ("spawn_roof_water", "Spawn Roof Water (G: 0)"),
    ("ski_sign", "Ski Sign (G: 0)"),
    ("left_wedge", "Left Wing (G: 0)"),
    ("middle_wing", "Middle Wing (G: 0)"),
    ("main_blunt_ramp", "Center Wedge (G: 0)"),
    ("healbot_platform", "Healbot Platform (G: 0)"),
    ("section_ramp", "Section Ramp (G: 0)"),
    ("section_slant", "Section Slant (G: 0)"),
    ("mini_ramp_spine", "Mini Ramp Tip (G: 0)"),
    ("mini_ramp02", "Mini Ramp (G: 0)"),
    ("sriracha", "Sriracha (G: 0)"),
    ("tower_base_water", "Tower Run-up Water (G: 0)"),
    ("triomino_2", "Triomino 2 (G: 0)"),
    ("mario_room_teleport", "Mario Room Teleporter (G: 0)"),
    ("t_spawn_hole_front", "T-Spawn Hole Front (G: 1)"),
    ("gun_room", "Gun Room (G: 0)"),
    ("center_wedge_platform", "Center Wedge Platform (G: 0)"),
    ("main_wings", "Center Wings (G: 0)"),
    ("main_drag", "Center Ramp (G: 0)"),
    ("t2_center_platform", "T2 Center Platform (G: 0)"),
    ("through_t2_tower", "Through T2 Tower (G: 0)"),
    ("fish_ramp", "Fish Hook Ramp (G: 0)"),
    ("awp_platform", "Awp Platform (G: 0)"),
    ("healbot_sign", "Healbot Sign (G: 0)"),
    ("awp_ramp", "Awp Ramp (G: 0)"),
    ("behind_main_ramp_trigger", "Behind Main Ramp (G: 1)"),
    ("fish_hook_wedge", "Fish Hook Wedge (G: 0)"),
    ("elevator_mid_entrance", "Elevator Hole (G: 1)"),
    ("behind_long_ramp", "Behind Long Ramp (G: 1)"),
    ("t_spawn_water", "T-Spawn Water (G: 0)"),
    ("behind_t2_tower_wedge", "Rear T2 Tower Wedge (G: 0)"),
    ("through_t2_back_left", "Through T2 Back Left (G: 0)"),
    ("through_t2_back_right", "Through T2 Back Right (G: 0)"),
    ("through_t2_front_right", "Through T2 Front Right (G: 1)"),
    ("rear_spawn_ramp", "Rear Spawn Ramp (G: 0)"),
    ("gun_room_ramp", "Gun Room Ramp (G: 0)"),
    ("ct_spawn_teleporter", "CT-Spawn Teleporter (G: 0)"),
    ("tower_sign", "Tower Sign (G: 0)"),
    ("t_spawn_hole_back", "T-Spawn Hole Back (G: 1)"),
    ("healbot_ramp", "Healbot Ramp (G: 0)"),
    ("ct_spawn", "CT-Spawn (G: 0)"),
    ("side_spawn_ladder", "Side Spawn Ladder (G: 0)"),
    ("elevator", "Elevator (G: 1)"),
    ("elevator_exit", "Elevator Exit (G: 0)"),
    ("tower_box1", "Tower Box 1 (G: 0)"),
    ("banana_platform", "Banana Slant (G: 0)"),
    ("triomino2", "Triomino 2 (G: 0)"),
    ("t1_ladder", "T1 Ladder (G: 0)"),
    ("triomino1", "Triomino 1 (G: 0)"),
    ("triomino3", "Triomino 3 (G: 0)"),
    ("t1_right_platform", "T1 Right Platform (G: 0)"),
    ("bonus_platform", "Bonus Platform (G: 0)"),
    ("letter_t1", "Letter T1 Top (G: 0)"),
    ("t_spawn_slant", "T-Spawn Slant (G: 0)"),
    ("ct_scout_pad", "CT Scout Pad (G: 0)"),
    ("jail_box_1", "Jail Box 1 (G: 0)"),
    ("right_wedge", "Right Wing (G: 0)"),
    ("behind_spawn", "Behind Spawn (G: 1)"),
    ("jail_booster_tip", "Jail Booster Tip (G: 0)"),
    ("long_ramp_slant", "Long Ramp Slant (G: 0)"),
    ("kevin_ramp", "Kevin Ramp (G: 0)"),
    ("keith_ramp", "Keith Ramp (G: 0)"),
    ("diddy_platform", "Diddy Ramp Platform (G: 0)"),
    ("behind_mario_tower", "Behind Tower (G: 0)"),
    ("elevator_entrance", "Elevator Entrance (G: 0)"),
    ("ct_spawn_hole_front", "CT-Spawn Hole Front (G: 1)"),
    ("ct_spawn_hole_back", "CT-Spawn Hole Back (G: 1)"),
    ("t1_right_rail", "T1 Right Rail (G: 0)"),
    ("spawn_roof_platform", "Spawn Roof Platform (G: 0)"),
    ("hamburger", "Humburger (G: 0)"),
    ("telepad", "Telepad Water (G: 0)"),
    ("jail_ledge02", "Jail Ledge (G: 0)"),
    ("under_awp", "Under Awp Ramp (G: 1)"),
    ("t2_big_water", "T2 Big Water (G: 0)"),
    ("ct_spawn_slant", "CT-Spawn Slant (G: 0)"),
    ("kevin_ramp_tip", "Kevin Ramp Tip (G: 0)"),
    ("t2_left_box_2", "T2 Top Left Block (G: 0)"),
    ("jail_box_3", "Jail Box 3 (G: 0)"),
    ("north_east_booster_platform", "North East Booster Platform (G: 0)"),
    ("north_east_booster", "North East Booster (G: 0)"),
    ("ramp_horn", "Bonus Ramp (G: 0)"),
    ("bonus_cube", "Bonus Cube (G: 0)"),
    ("bonus_rear_slant", "Bonus Rear Slant (G: 0)"),
    ("t2_tower_water02", "T2 Tower Water (G: 0)"),
    ("reset", "Healbot Leader (G: 0)"),
    ("behind_t2_tower_wedge_t", "Rear T2 Tower Wedge Tip (G: 0)"),
    ("t2_left_hole", "T2 Left Hole (G: 1)"),
    ("section_ramp_tip", "Section Ramp Tip (G: 0)"),
    ("left_wedge_tip", "Left Wing Tip (G: 0)"),
    ("side_spawn_lower_platform", "Side Spawn Lower Platform (G: 0)"),
    ("t1_water", "T1 Water (G: 0)"),
    ("under_blunt", "Under Center Ramps (G: 1)"),
    ("tower_run_up_w", "Tower Base Water (G: 0)"),
    ("gun_room_sign", "Gun Room Sign (G: 0)"),
    ("under_rear", "Under Rear Spawn Ramp (G: 1)"),
    ("jail_side_rail", "Jail Side Rail (G: 0)"),
    ("starlight", "Starlight North (G: 0)"),
    ("t2_right_box_2", "T2 Top Right Block (G: 0)"),
    ("under_t2_right_wing", "Under T2 Right Wing (G: 1)"),
    ("t_spawn_teleporter", "T-Spawn Teleporter (G: 0)"),
    ("spawn_divide", "Spawn Divide (G: 0)"),
    ("ground_teleporter", "Ground Teleporter (G: 0)"),
    ("spawn_roof_booster", "Spawn Roof Booster (G: 0)"),
    ("through_t2_front_left", "Through T2 Front Left (G: 1)"),
    ("side_spawn_platform", "Side Spawn Upper Platform (G: 0)"),
    ("t1_left_platform", "T1 Left Platform (G: 0)"),
    ("t1_left_rail", "T1 Left Rail (G: 0)"),
    ("healbot_ramp_tip", "Healbot Ramp Tip (G: 0)"),
    ("idk", "Diddy Rampz (G: 0)"),
    ("t2_left_window", "T2 Left Window (G: 1)"),
    ("north_east_ramp", "North East Booster (G: 0)"),
    ("under_lower_boost", "Rear Spawn Mini Hole (G: 1)"),
    ("telepad_derevo", "Telepad Tower (G: 0)"),
    ("t1_bashnya", "Totem (G: 0)"),
    ("nlo_platform", "UFO Roof (G: 0)"),
    ("t2_right_window", "T2 Right Window (G: 1)"),
    ("t2_big_water_outskirts", "T2 Big Water Outskirts (G: 0)"),
    ("t2_ladder", "Healbot Ladder (G: 0)"),
    ("lower_platform_push", "Side Spawn Booster (G: 0)"),
    ("hamburger_slant", "Hamburger Slant (G: 0)"),
    ("halisha_throne_upper", "Trickgxds Title (G: 0)"),
    ("halisha_throne_lower", "Trickgxds Throne (G: 0)"),
    ("under_t2_left_wing", "Under T2 Left Wing (G: 1)"),
    ("fish_booster", "Low Fish Booster (G: 0)"),
    ("fish_platform", "Fish Platform (G: 0)"),
    ("fish_ramp_wedge", "Fish Hook Wedge (G: 0)"),
    ("j_teleporter", "Jail Teleporter (G: 0)"),
    ("main_drag_tip", "Center Ramp Tip (G: 0)"),
    ("middle_awp_platform", "Middle Awp Ground (G: 0)"),
    ("spawn_divide_top", "Spawn Divide Top (G: 0)"),
    ("t1_middle_ramp_lower", "T1 Middle Lower Ramp (G: 0)"),
    ("t2_big_hole_left", "T2 Big Left Hole (G: 1)"),
    ("\\nt2_big_hole_left", "T2 Big Left Hole (G: 1)"),
    ("t2_big_hole_right", "T2 Big Right Hole (G: 1)"),
    ("t2_left_box_1", "T2 Bottom Left Block (G: 0)"),
    ("t2_right_box_1", "T2 Bottom Right Block (G: 0)"),
    ("t2_spawn_teleporter", "T2 Teleporter (G: 0)"),
    ("throw_middle_awp", "Through Middle Awp (G: 1)"),
    ("tower_middle_plarform", "Tower Left Middle Platform (G: 0)|Tower Right Middle Platform (G: 0)"),
    ("tower_middle_ramp", "Tower Middle Ramp (G: 0)"),
    ("ground_ramp", "Ground Ramp (G: 0)"),
    ("t1_middle_hole", "T1 Middle Hole (G: 1)"),
    ("fish_booster_bigger", "Bigger Fish Booster (G: 0)"),
    ("fish_booster_middle", "Middle Fish Booster (G: 0)"),
    ("t2_center_down_ramp", "T2 Center Down Left Ramp (G: 0)|T2 Center Down Right Ramp (G: 0)"),
    ("t2_center_down_platform", "T2 Center Down Platform (G: 0)"),
    ("w_bezdna", "Weapon Abyss (G: 0)"),
    ("w_bezdna_lower", "Weapon Lower Abyss (G: 0)"),
    ("t1_bezdna", "T1 Abyss Tower (G: 0)"),
    ("t1_bezdna_lower", "T1 Abyss (G: 0)"),
    ("t1_middle_ramp_upper", "T1 Middle Ramp Upper (G: 0)"),
    ("tower_lower_box_1", "Tower Lower Box 1 (G: 0)"),
    ("fish_ramp_tip", "Fish Hook Ramp Tip (G: 0)"),
    ("jail_box_2", "Jail Box 2 (G: 0)"),
    ("tower_box3", "Tower Box 3 (G: 0)"),
    ("tower_box2", "Tower Box 2 (G: 0)"),
    ("telepad_jtct_ramp", "Telepad J T CT Ramp (G: 0)"),
    ("telepad_t2_t1_ramp", "Telepad T2 T1 Ramp (G: 0)"),
    ("jail_box_4", "Jail Box 4 (G: 0)"),
    ("t_spawn_hole", "T-Spawn Hole (G: 1)"),
    ("elevator_mid_tip", "Elevator Hole Tip (G: 0)"),
    ("t2_big_hole_right_platform", "T2 Big Right Hole Ground (G: 0)"),
    ("tower_derevo", "Tower Tree (G: 0)"),
    ("t2_big_hole_left_platform", "T2 Big Left Hole Ground (G: 0)"),
    ("elevator_window_tip", "Elevator Window Tip (G: 0)"),
    ("t2_left_window_platform", "T2 Left Window Ground (G: 0)"),
    ("t2_right_window_platform", "T2 Right Window Ground (G: 0)"),
    ("ground_ramp_reverse", "Ground Ramp Reverse (G: 0)"),
    ("ct_spawn_hole", "CT-Spawn Hole (G: 1)"),
    ("awp_tower_tip", "Front Awp Window Tip (G: 0)|Rear Awp Window Tip (G: 0)"),
    ("t2_right_window_tip", "T2 Right Window Tip (G: 0)"),
    ("t2_left_window_tip", "T2 Left Window Tip (G: 0)"),
    ("ring", "Ring (G: 1)"),
    ("tower_box", "T2 Tower Box (G: 0)"),
    ("t2_big_water_ramp", "T2 Big Water Ramp (G: 0)"),
    ("w_bezdna_lower_ramp", "Weapon Lower Abyss Ramp (G: 0)"),
    ("tower_scout_platform", "Scout Platform (G: 0)"),
    ("t_scout_pad", "T Scout Pad (G: 0)"),
    ("fish_mini_ramp", "Fish Mini Ramp (G: 0)"),
    ("tower_lower_box_2", "Tower Lower Box 2 (G: 0)"),
    ("sriracha_tip", "Sriracha Tip (G: 0)"),
];

/// Mis-encoded or outdated player names to the name the player goes by
static PLAYER_NAME_ENTRIES: &[(&str, &str)] = &[
    ("ÐŸÐ¾Ð²ÐµÐ»Ð¸Ñ‚ÐµÐ»ÑŒ Ñ‚Ñ€ÑŽÐ³Ðµ", "Evvvai"),
    ("Using 5 fingers? - Ð¿Ð¸Ð´Ð¾Ñ€Ð°", "Parta"),
    ("Autostrafing issues", "Halisha"),
    ("xpuctoc", "Halisha"),
    ("Insomniac King", "KingYoshi"),
    ("games are just waste of time", "Abyss"),
    ("Ñ€Ð°Ñ€Ð¸", "Rari"),
    ("yakiness", "Yakiness"),
    ("cykaeblanishevlagalishe", "Tsye"),
    ("ghostie", "Ghostie"),
];

/// Steam64 ids of retired accounts to the account now in use
static PLAYER_ID64_ENTRIES: &[(&str, &str)] = &[
    ("76561198059585682", "76561198279987304"),
    ("76561198058934072", "76561198150200931"),
];

pub static TRIGGER_NAMES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TRIGGER_NAME_ENTRIES.iter().copied().collect());

pub static PLAYER_NAMES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PLAYER_NAME_ENTRIES.iter().copied().collect());

pub static PLAYER_ID64S: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PLAYER_ID64_ENTRIES.iter().copied().collect());

/// Canonical display name for a trigger, `None` if the trigger is unused
pub fn trigger_display_name(internal: &str) -> Option<&'static str> {
    TRIGGER_NAMES.get(internal).copied()
}

/// Corrected player name, or the source name when no override exists
pub fn player_name(name: &str) -> &str {
    PLAYER_NAMES.get(name).copied().unwrap_or(name)
}

/// Corrected Steam64 id, or the source id when no override exists
pub fn player_id64(id64: &str) -> &str {
    PLAYER_ID64S.get(id64).copied().unwrap_or(id64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_lookup() {
        assert_eq!(trigger_display_name("t_spawn"), Some("T-Spawn (G: 0)"));
        assert_eq!(trigger_display_name("left_wedge"), Some("Left Wing (G: 0)"));
        assert_eq!(trigger_display_name(r"\nt2_big_hole_left"), Some("T2 Big Left Hole (G: 1)"));
        assert_eq!(trigger_display_name("tower_water"), None);
        assert_eq!(trigger_display_name("sw"), None);
    }

    #[test]
    fn test_player_overrides_fall_back_to_source() {
        assert_eq!(player_name("xpuctoc"), "Halisha");
        assert_eq!(player_name("Evvvai"), "Evvvai");
        assert_eq!(player_id64("76561198059585682"), "76561198279987304");
        assert_eq!(player_id64("76561190000000000"), "76561190000000000");
    }

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        assert_eq!(TRIGGER_NAMES.len(), TRIGGER_NAME_ENTRIES.len());
        assert_eq!(PLAYER_NAMES.len(), PLAYER_NAME_ENTRIES.len());
    }
}
