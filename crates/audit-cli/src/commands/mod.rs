pub mod category;
pub mod dispatch;
pub mod export;
pub mod filters;
pub mod nav;
pub mod schema;
pub mod search;
pub mod serve;
pub mod shared;
pub mod show;
pub mod stats;
pub mod validate;
