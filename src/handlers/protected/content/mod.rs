pub mod collection;
pub mod play;
pub mod record;
pub mod utils;

// Re-export handler functions for use in routing
pub use collection::create as content_create;
pub use collection::list as content_list;
pub use play::play as content_play;
pub use record::delete as content_delete;
pub use record::get as content_get;
pub use record::update as content_update;
