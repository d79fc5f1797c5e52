use serde::Deserialize;

/// Bounds applied when creating a room
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomsConfig {
    #[serde(default = "default_min_seats")]
    pub min_seats: u32,
    #[serde(default = "default_max_seats")]
    pub max_seats: u32,
}

impl Default for RoomsConfig {
    fn default() -> Self {
        Self {
            min_seats: default_min_seats(),
            max_seats: default_max_seats(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_min_seats() -> u32 {
    4
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_seats() -> u32 {
    12
}
