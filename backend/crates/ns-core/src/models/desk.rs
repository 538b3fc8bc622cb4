use crate::DeskStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Desk {
    pub id: Uuid,
    /// Human-facing code, unique (e.g. "D-101")
    pub desk_code: String,
    pub status: DeskStatus,
    /// Relative position on the floor map, 0.0..=1.0
    pub map_x: f64,
    pub map_y: f64,
    /// Payload encoded in the desk's QR sticker
    pub qr_code_value: String,
    pub created_at: DateTime<Utc>,
}

impl Desk {
    pub fn new(desk_code: &str, status: DeskStatus, map_x: f64, map_y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            desk_code: desk_code.to_string(),
            status,
            map_x,
            map_y,
            qr_code_value: format!("desk/{}", desk_code),
            created_at: Utc::now(),
        }
    }
}
