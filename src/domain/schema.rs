// Records shared with the backend schema (users, dashboard_layouts)
use super::layout::LayoutMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// A user's layouts as stored server-side: an opaque JSON blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayoutRecord {
    pub id: Option<i64>,
    pub user_id: i64,
    pub layout: serde_json::Value,
}

impl DashboardLayoutRecord {
    pub fn from_layouts(user_id: i64, layouts: &LayoutMap) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: None,
            user_id,
            layout: serde_json::to_value(layouts)?,
        })
    }

    pub fn layouts(&self) -> Result<LayoutMap, serde_json::Error> {
        serde_json::from_value(self.layout.clone())
    }
}
