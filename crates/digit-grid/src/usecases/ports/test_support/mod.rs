mod mock_page;
mod scripted_source;

pub use mock_page::MockPage;
pub use scripted_source::ScriptedSource;
