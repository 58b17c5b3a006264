//! Course Resolver: maps a skill to learning resources.
//!
//! Lookup order: exact key → first partial key match in catalog order → synthesized
//! search fallback. The catalog is a declared-order slice, so partial matches are
//! reproducible for skills that hit several keys ("react native" → `react`).

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
    #[serde(rename = "All Levels")]
    AllLevels,
}

/// A single learning resource attached to a skill gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub title: String,
    pub platform: String,
    pub url: String,
    pub level: CourseLevel,
}

struct CatalogCourse {
    title: &'static str,
    platform: &'static str,
    url: &'static str,
    level: CourseLevel,
}

impl From<&CatalogCourse> for CourseRecommendation {
    fn from(course: &CatalogCourse) -> Self {
        Self {
            title: course.title.to_string(),
            platform: course.platform.to_string(),
            url: course.url.to_string(),
            level: course.level,
        }
    }
}

const fn course(
    title: &'static str,
    platform: &'static str,
    url: &'static str,
    level: CourseLevel,
) -> CatalogCourse {
    CatalogCourse {
        title,
        platform,
        url,
        level,
    }
}

use CourseLevel::{Advanced, AllLevels, Beginner, Intermediate};

/// Keyed by lower-case skill name. Order matters for partial matching.
#[rustfmt::skip]
const COURSE_CATALOG: &[(&str, &[CatalogCourse])] = &[
    // Programming languages
    ("python", &[
        course("Python for Everybody Specialization", "Coursera", "https://www.coursera.org/specializations/python", Beginner),
        course("Complete Python Bootcamp", "Udemy", "https://www.udemy.com/course/complete-python-bootcamp/", AllLevels),
    ]),
    ("javascript", &[
        course("JavaScript Algorithms and Data Structures", "freeCodeCamp", "https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures/", AllLevels),
        course("Modern JavaScript From The Beginning", "Udemy", "https://www.udemy.com/course/modern-javascript-from-the-beginning/", AllLevels),
    ]),
    ("java", &[
        course("Java Programming and Software Engineering", "Coursera", "https://www.coursera.org/specializations/java-programming", Beginner),
        course("Java Programming Masterclass", "Udemy", "https://www.udemy.com/course/java-the-complete-java-developer-course/", AllLevels),
    ]),
    ("react", &[
        course("React - The Complete Guide", "Udemy", "https://www.udemy.com/course/react-the-complete-guide-incl-redux/", AllLevels),
        course("Full-Stack Web Development with React", "Coursera", "https://www.coursera.org/specializations/full-stack-react", Intermediate),
    ]),
    ("node", &[
        course("The Complete Node.js Developer Course", "Udemy", "https://www.udemy.com/course/the-complete-nodejs-developer-course-2/", AllLevels),
        course("Server-side Development with NodeJS", "Coursera", "https://www.coursera.org/learn/server-side-nodejs", Intermediate),
    ]),
    ("android", &[
        course("The Complete Android Developer Course", "Udemy", "https://www.udemy.com/course/complete-android-n-developer-course/", AllLevels),
        course("Android App Development Specialization", "Coursera", "https://www.coursera.org/specializations/android-app-development", Beginner),
        course("Advanced Android with Kotlin", "Google Developers", "https://developer.android.com/courses", Advanced),
    ]),
    ("kotlin", &[
        course("Kotlin for Java Developers", "Coursera", "https://www.coursera.org/learn/kotlin-for-java-developers", Intermediate),
        course("Kotlin Programming: The Comprehensive Course", "Udemy", "https://www.udemy.com/course/kotlin-course/", AllLevels),
    ]),
    ("sdk", &[
        course("Android SDK Platform Tools", "Android Developers", "https://developer.android.com/studio/releases/platform-tools", AllLevels),
        course("Mobile App Development", "Coursera", "https://www.coursera.org/specializations/mobile-app-development", Intermediate),
    ]),
    ("api", &[
        course("REST API Design, Development & Management", "Udemy", "https://www.udemy.com/course/rest-api/", AllLevels),
        course("APIs and Web Services", "Coursera", "https://www.coursera.org/learn/web-services-api", Intermediate),
    ]),
    // Cloud & DevOps
    ("aws", &[
        course("AWS Certified Solutions Architect", "Coursera", "https://www.coursera.org/learn/aws-cloud-technical-essentials", Beginner),
        course("Ultimate AWS Certified Solutions Architect Associate", "Udemy", "https://www.udemy.com/course/aws-certified-solutions-architect-associate-saa-c03/", AllLevels),
    ]),
    ("docker", &[
        course("Docker and Kubernetes: The Complete Guide", "Udemy", "https://www.udemy.com/course/docker-and-kubernetes-the-complete-guide/", AllLevels),
        course("Introduction to Containers w/ Docker, Kubernetes", "Coursera", "https://www.coursera.org/learn/ibm-containers-docker-kubernetes-openshift", Beginner),
    ]),
    ("kubernetes", &[
        course("Kubernetes for the Absolute Beginners", "Udemy", "https://www.udemy.com/course/learn-kubernetes/", Beginner),
        course("Getting Started with Google Kubernetes Engine", "Coursera", "https://www.coursera.org/learn/google-kubernetes-engine", Intermediate),
    ]),
    // Data science & ML
    ("machine learning", &[
        course("Machine Learning Specialization", "Coursera", "https://www.coursera.org/specializations/machine-learning-introduction", Beginner),
        course("Machine Learning A-Z", "Udemy", "https://www.udemy.com/course/machinelearning/", AllLevels),
    ]),
    ("tensorflow", &[
        course("DeepLearning.AI TensorFlow Developer", "Coursera", "https://www.coursera.org/professional-certificates/tensorflow-in-practice", Intermediate),
        course("TensorFlow 2.0 Complete Course", "Udemy", "https://www.udemy.com/course/tensorflow-2/", AllLevels),
    ]),
    ("data analysis", &[
        course("Google Data Analytics Professional Certificate", "Coursera", "https://www.coursera.org/professional-certificates/google-data-analytics", Beginner),
        course("The Data Science Course: Complete Data Science", "Udemy", "https://www.udemy.com/course/the-data-science-course-complete-data-science-bootcamp/", AllLevels),
    ]),
    // Databases
    ("sql", &[
        course("SQL for Data Science", "Coursera", "https://www.coursera.org/learn/sql-for-data-science", Beginner),
        course("The Complete SQL Bootcamp", "Udemy", "https://www.udemy.com/course/the-complete-sql-bootcamp/", AllLevels),
    ]),
    ("mongodb", &[
        course("MongoDB - The Complete Developer Guide", "Udemy", "https://www.udemy.com/course/mongodb-the-complete-developers-guide/", AllLevels),
        course("MongoDB Basics", "MongoDB University", "https://university.mongodb.com/", Beginner),
    ]),
    // Practices
    ("agile", &[
        course("Agile with Atlassian Jira", "Coursera", "https://www.coursera.org/learn/agile-atlassian-jira", Beginner),
        course("Agile Crash Course: Agile Project Management", "Udemy", "https://www.udemy.com/course/agile-crash-course/", AllLevels),
    ]),
    ("git", &[
        course("Version Control with Git", "Coursera", "https://www.coursera.org/learn/version-control-with-git", Beginner),
        course("Git Complete: The definitive guide", "Udemy", "https://www.udemy.com/course/git-complete/", AllLevels),
    ]),
    ("communication", &[
        course("Improving Communication Skills", "Coursera", "https://www.coursera.org/learn/wharton-communication-skills", AllLevels),
        course("Communication Skills Machine", "Udemy", "https://www.udemy.com/course/communication-skills-training/", AllLevels),
    ]),
];

const SEARCH_ENGINE_URL: &str = "https://www.google.com/search";

/// Resolves a skill to a non-empty list of course recommendations. Never fails.
pub fn resolve_courses(skill: &str) -> Vec<CourseRecommendation> {
    match find_catalog_entry(&skill.to_lowercase()) {
        Some(courses) => courses.iter().map(CourseRecommendation::from).collect(),
        None => vec![fallback_course(skill)],
    }
}

fn find_catalog_entry(skill_lower: &str) -> Option<&'static [CatalogCourse]> {
    if let Some(&(_, courses)) = COURSE_CATALOG.iter().find(|(key, _)| *key == skill_lower) {
        return Some(courses);
    }

    // A blank skill would be "contained" in every key, or in any multi-word key
    if skill_lower.trim().is_empty() {
        return None;
    }

    COURSE_CATALOG
        .iter()
        .find(|(key, _)| skill_lower.contains(key) || key.contains(skill_lower))
        .map(|(_, courses)| *courses)
}

/// Single generic entry pointing at a web search for the raw skill.
fn fallback_course(skill: &str) -> CourseRecommendation {
    let query = format!("learn {skill} course");
    let url = Url::parse_with_params(SEARCH_ENGINE_URL, &[("q", query.as_str())])
        .map(String::from)
        .unwrap_or_else(|_| SEARCH_ENGINE_URL.to_string());

    CourseRecommendation {
        title: format!("Learn {skill} - Comprehensive Guide"),
        platform: "Search Online".to_string(),
        url,
        level: CourseLevel::AllLevels,
    }
}
