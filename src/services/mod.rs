// External services
// Clients for the remote APIs the page depends on

pub mod emoji_api;
