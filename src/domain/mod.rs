// Domain layer - dashboard modes, widgets, layouts and the data they show
pub mod artist;
pub mod chat;
pub mod layout;
pub mod mode;
pub mod schema;
pub mod widget;
