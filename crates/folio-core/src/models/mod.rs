pub mod art;
pub mod experience;
pub mod fields;
pub mod profile;
pub mod project;
pub mod query;
pub mod skill;

pub use art::ArtEntry;
pub use experience::ExperienceEntry;
pub use profile::Profile;
pub use project::ProjectEntry;
pub use query::QueryEntry;
pub use skill::SkillEntry;
