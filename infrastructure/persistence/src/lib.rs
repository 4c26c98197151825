pub mod db;
pub mod firebase {
    pub mod app;
    pub mod credentials;
    pub mod token;
}
pub mod group {
    pub mod entity;
    pub mod repository;
}
pub mod message {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
