//! Table schema definitions for the Trick Gxds SQL dump
//!
//! Each pattern is applied to one physical line of an `INSERT INTO ... VALUES`
//! statement. Optional fields accept the bare `NULL` marker in place of a value.

use once_cell::sync::Lazy;

use super::types::*;

// =============================================================================
// Column positions
// =============================================================================

pub mod player {
    pub const ID: usize = 0;
    pub const STEAM_ID2: usize = 1;
    pub const STEAM_ID64: usize = 2;
    pub const NAME: usize = 3;
    pub const STEAM_VANITY_ID: usize = 4;
    pub const AVATAR_URL: usize = 5;
    pub const AVATAR_CUSTOM_URL: usize = 6;
    pub const DASHBOARD_URL: usize = 7;
    pub const JOIN_DATE: usize = 8;
    pub const LAST_SITE_LOGIN_DATE: usize = 9;
    pub const LAST_SERVER_LOGIN_DATE: usize = 10;
    pub const ROLE: usize = 11;
}

pub mod route {
    pub const ID: usize = 0;
    pub const TRICK_ID: usize = 1;
    pub const TRIGGER_ID: usize = 2;
}

pub mod trick {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    pub const POINTS: usize = 2;
    pub const VELOCITY: usize = 3;
    pub const CREATE_DATE: usize = 4;
    pub const AUTHOR_ID: usize = 5;
}

pub mod trigger {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    pub const ALT_NAME: usize = 2;
    pub const X: usize = 3;
    pub const Y: usize = 4;
    pub const Z: usize = 5;
    pub const IMAGE_URL: usize = 6;
}

// =============================================================================
// Tables
// =============================================================================

const PLAYER_PATTERN: &str = concat!(
    r"^.*\((?P<id>\d+),\s?'(?P<steam_id2>STEAM_[0-5]:[0-1]:\d+)',\s?'?(?P<steam_id64>\d{17})'?,",
    r"\s?'(?P<name>.*?)',",
    r"\s?(?:'https://steamcommunity\.com/id/(?P<steam_vanity_id>[a-zA-Z0-9_-]{2,32})/?'|NULL),",
    r"\s?(?:'(?P<avatar_url>.*?)'|NULL),",
    r"\s?(?:'(?P<avatar_custom_url>.*?)'|NULL),",
    r"\s?(?:'(?P<dashboard_url>.*?)'|NULL),",
    r"\s?(?:'(?P<join_date>.*?)'|NULL),",
    r"\s?(?:'(?P<last_site_login_date>.*?)'|NULL),",
    r"\s?(?:'(?P<last_server_login_date>.*?)'|NULL),",
    r"\s?(?:'(?P<role>.*?)'|NULL)\),?.*$",
);

pub static PLAYERS: TableSchema = TableSchema {
    name: "players",
    source_file: "players.sql",
    pattern: PLAYER_PATTERN,
    regex: Lazy::new(|| row_regex(PLAYER_PATTERN)),
    columns: &[
        Column::new("Id", ColumnType::Integer),
        Column::new("SteamId2", ColumnType::Text),
        Column::new("SteamId64", ColumnType::Text),
        Column::new("Name", ColumnType::Text),
        Column::new("SteamVanityId", ColumnType::Text),
        Column::new("AvatarURL", ColumnType::Text),
        Column::new("AvatarCustomURL", ColumnType::Text),
        Column::new("DashboardURL", ColumnType::Text),
        Column::new("JoinDate", ColumnType::Text),
        Column::new("LastSiteLoginDate", ColumnType::Text),
        Column::new("LastServerLoginDate", ColumnType::Text),
        Column::new("Role", ColumnType::Text),
    ],
};

const ROUTE_PATTERN: &str = r"^.*\((?P<id>\d+),\s?(?P<trick_id>\d+),\s?(?P<trigger_id>\d+)\),?.*$";

pub static ROUTES: TableSchema = TableSchema {
    name: "routes",
    source_file: "routes.sql",
    pattern: ROUTE_PATTERN,
    regex: Lazy::new(|| row_regex(ROUTE_PATTERN)),
    columns: &[
        Column::new("Id", ColumnType::Integer),
        Column::new("TrickId", ColumnType::Integer),
        Column::new("TriggerId", ColumnType::Integer),
    ],
};

// The trailing literal `1` is a constant column in the dump and is not captured.
const TRICK_PATTERN: &str = concat!(
    r"^.*\((?P<id>\d+),\s?'(?P<name>.*?)',\s?(?P<points>\d+),\s?(?P<velocity>\d+),",
    r"\s?(?:'(?P<create_date>.*?)'|NULL),\s?(?P<author_id>\d+),\s?1\),?.*$",
);

pub static TRICKS: TableSchema = TableSchema {
    name: "tricks",
    source_file: "tricks.sql",
    pattern: TRICK_PATTERN,
    regex: Lazy::new(|| row_regex(TRICK_PATTERN)),
    columns: &[
        Column::new("Id", ColumnType::Integer),
        Column::new("Name", ColumnType::Text),
        Column::new("Points", ColumnType::Integer),
        Column::new("PreSpeedLock", ColumnType::InvertedFlag),
        Column::new("CreateDate", ColumnType::Text),
        Column::new("AuthorId", ColumnType::Integer),
    ],
};

const TRIGGER_PATTERN: &str = concat!(
    r"^.*\((?P<id>\d+),\s?'(?P<name>.*?)',\s?(?:'(?P<alt_name>.*?)'|NULL),",
    r"\s?(?:(?P<x>-?\d+|-?\d+\.\d+)|NULL),",
    r"\s?(?:(?P<y>-?\d+|-?\d+\.\d+)|NULL),",
    r"\s?(?:(?P<z>-?\d+|-?\d+\.\d+)|NULL),",
    r"\s?1,\s?(?:'(?P<image_url>.*?)'|NULL)\),?.*$",
);

pub static TRIGGERS: TableSchema = TableSchema {
    name: "triggers",
    source_file: "triggers.sql",
    pattern: TRIGGER_PATTERN,
    regex: Lazy::new(|| row_regex(TRIGGER_PATTERN)),
    columns: &[
        Column::new("Id", ColumnType::Integer),
        Column::new("Name", ColumnType::Text),
        Column::new("AltName", ColumnType::Text),
        Column::new("X", ColumnType::Real),
        Column::new("Y", ColumnType::Real),
        Column::new("Z", ColumnType::Real),
        Column::new("ImageURL", ColumnType::Text),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> [&'static TableSchema; 4] {
        [&PLAYERS, &ROUTES, &TRICKS, &TRIGGERS]
    }

    #[test]
    fn test_patterns_compile_with_matching_arity() {
        for table in tables() {
            assert_eq!(table.regex().as_str(), table.pattern);
            assert_eq!(table.regex().captures_len() - 1, table.arity(), "{}", table.name);
        }
    }

    #[test]
    fn test_source_files() {
        let files: Vec<&str> = tables().iter().map(|t| t.source_file).collect();
        assert_eq!(files, vec!["players.sql", "routes.sql", "tricks.sql", "triggers.sql"]);
    }
}
