mod patient;
mod repository;
mod user;
