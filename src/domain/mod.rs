//! Resource collections over flat JSON documents, plus the static user directory.

pub mod collection;
pub mod events;
pub mod messages;
pub mod participants;
pub mod responses;
pub mod surveys;
pub mod users;

pub use collection::{Collection, DataError, JsonObject, Layout, RecordDocument};
pub use events::Events;
pub use messages::Messages;
pub use participants::Participants;
pub use responses::SurveyResponses;
pub use surveys::Surveys;
pub use users::{UserDirectory, UserRecord};
