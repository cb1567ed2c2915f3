mod event;
pub use event::EventRecord;
