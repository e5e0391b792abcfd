pub mod coerce;
pub mod document;
pub mod extract;
pub mod fetch;
pub mod game_id;
pub mod headers;
pub mod http_client;
pub mod pipeline;
pub mod records;
pub mod roles;
pub mod store;
