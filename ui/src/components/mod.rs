pub mod app;
pub mod backend_api;
pub mod local_storage;
pub mod message_list;
pub mod nav_bar;
pub mod portal_state;
pub mod stats_panel;
pub mod status_toggle;
pub mod toast_view;
