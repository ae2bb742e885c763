//! Typed CRUD clients for the admin entities.
//!
//! These are thin wrappers over the shared dispatcher+recovery pair with no
//! session semantics of their own. Errors surface raw and typed; callers
//! re-fetch full lists after a mutation rather than merging incrementally,
//! so no ordering is guaranteed across independent clients.

pub mod greetings;
pub mod health;
pub mod intents;
pub mod kb;
pub mod logs;
pub mod website;

pub use greetings::{GreetingEntry, GreetingPatch, GreetingsClient, NewGreeting};
pub use health::{ComponentStatus, HealthClient, HealthReport};
pub use intents::{Intent, IntentPatch, IntentsClient, NewIntent};
pub use kb::{Category, KbEntry, KbEntryPatch, KnowledgeBaseClient, NewKbEntry};
pub use logs::{ChatLog, LogPage, LogQuery, LogsClient, SourceIdSet};
pub use website::{
    CrawlStatus, CrawlTrigger, NewWebsiteSource, WebsiteClient, WebsiteSource, WebsiteSourcePatch,
};
