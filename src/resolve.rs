//! Foreign-key lookups between the extracted Trick Gxds tables

use serde::Serialize;
use tracing::debug;

use crate::parser::Table;
use crate::schema::tables::{player, route, trigger};
use crate::sift;

pub const STEAM_PROFILE_URL: &str = "https://steamcommunity.com/profiles/";

/// Resolved trick author
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    #[serde(rename = "PlayerName")]
    pub player_name: String,
    #[serde(rename = "ProfileURL")]
    pub profile_url: String,
}

/// Look up a player by id.
///
/// With `sift`, the display name and Steam64 id are each replaced by their
/// override when one exists.
pub fn find_author(players: &Table, player_id: i64, sift: bool) -> Option<Author> {
    let row = players.find_by_id(player_id)?;

    let mut name = row.text(player::NAME).unwrap_or_default();
    let mut id64 = row.text(player::STEAM_ID64)?;

    if sift {
        name = sift::player_name(name);
        id64 = sift::player_id64(id64);
    }

    Some(Author {
        player_name: name.to_string(),
        profile_url: format!("{}{}", STEAM_PROFILE_URL, id64),
    })
}

/// Resolve a trick's route into trigger names, in route-table order.
///
/// Fails as a whole (`None`) when the trick has no route rows, a referenced
/// trigger is missing, or a trigger name is empty. With `sift`, names are
/// mapped to their canonical display names and an unmapped name also fails.
pub fn find_route(routes: &Table, triggers: &Table, trick_id: i64, sift: bool) -> Option<Vec<String>> {
    let trigger_ids: Vec<i64> = routes
        .rows
        .iter()
        .filter(|row| row.int(route::TRICK_ID) == Some(trick_id))
        .filter_map(|row| row.int(route::TRIGGER_ID))
        .collect();

    if trigger_ids.is_empty() {
        return None;
    }

    let mut names = Vec::with_capacity(trigger_ids.len());
    for trigger_id in trigger_ids {
        let Some(row) = triggers.find_by_id(trigger_id) else {
            debug!(trick_id, trigger_id, "route references unknown trigger");
            return None;
        };

        let internal = row.text(trigger::NAME).unwrap_or_default();
        let name = if sift {
            match sift::trigger_display_name(internal) {
                Some(display) => display,
                None => {
                    debug!(trick_id, trigger = internal, "route passes an unused trigger");
                    return None;
                }
            }
        } else {
            internal
        };

        if name.is_empty() {
            return None;
        }
        names.push(name.to_string());
    }

    Some(names)
}
