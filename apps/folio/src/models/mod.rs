pub mod resume;
pub mod ui;

pub use resume::{
    Certification, ImpactMeter, PersonalInfo, Project, ResumeDocument, Skill, Strand,
    TimelineEntry,
};
pub use ui::{Theme, UiState, ALL_SKILLS};
