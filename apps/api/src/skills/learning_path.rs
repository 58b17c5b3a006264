//! Learning Path: composes filter → priority → courses into the development-path output.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::skills::courses::{resolve_courses, CourseRecommendation};
use crate::skills::gap_filter::{displayed_skills, filter_technical_skills};
use crate::skills::priority::{assign_priority, Priority};

/// One technical gap with its tier and resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub priority: Priority,
    pub priority_label: String,
    pub courses: Vec<CourseRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub has_gaps: bool,
    /// Technical skills that passed classification, before the display cap.
    pub total_technical: usize,
    pub skills: Vec<SkillGap>,
    /// General growth areas, only populated when there are no technical gaps.
    pub suggestions: Vec<String>,
}

const NO_GAP_SUGGESTIONS: &[&str] = &[
    "Advanced certifications in your field",
    "Leadership and management skills",
    "Emerging technologies in your domain",
];

/// Builds the learning path for a list of raw missing-skill strings.
pub fn build_learning_path<S: AsRef<str>>(missing_skills: &[S]) -> LearningPath {
    let technical = filter_technical_skills(missing_skills);
    debug!(
        "Skill gap filter kept {} of {} candidates",
        technical.len(),
        missing_skills.len()
    );

    if technical.is_empty() {
        return LearningPath {
            has_gaps: false,
            total_technical: 0,
            skills: vec![],
            suggestions: NO_GAP_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        };
    }

    let skills = displayed_skills(&technical)
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            let priority = assign_priority(index);
            SkillGap {
                skill: skill.clone(),
                priority,
                priority_label: priority.label().to_string(),
                courses: resolve_courses(skill),
            }
        })
        .collect();

    LearningPath {
        has_gaps: true,
        total_technical: technical.len(),
        skills,
        suggestions: vec![],
    }
}
