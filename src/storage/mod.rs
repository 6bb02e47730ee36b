mod models;
mod postgres;
mod querier;
mod store;

pub use self::{
    models::{ContactDraft, Post, PostDraft},
    postgres::{DBPool, migrate, new_db_pool},
    querier::Querier,
    store::Store,
};
