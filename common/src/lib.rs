pub mod backend;
pub mod config;
pub mod controller;
pub mod greeting;
pub mod nav;
pub mod persist;
pub mod state;
pub mod toast;
