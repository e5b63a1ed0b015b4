use serde::{Deserialize, Serialize};

/// The résumé data document as loaded from JSON.
/// Immutable once loaded; a re-fetch replaces the whole value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub impact_meters: Vec<ImpactMeter>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    #[serde(default)]
    pub taglines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactMeter {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl ImpactMeter {
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }

    pub fn unit(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }

    /// Text shown once the counter has finished: `prefix + value + unit`.
    pub fn final_text(&self) -> String {
        format!("{}{}{}", self.prefix(), self.value, self.unit())
    }
}

/// Which of the two parallel timeline tracks an entry belongs to.
/// Values other than the two known tracks land in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    Industrial,
    Data,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub role: String,
    pub company: String,
    pub strand: Strand,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    /// 0.0 – 1.0
    pub proficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub code_url: String,
    pub live_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub url: String,
}

impl ResumeDocument {
    /// Distinct skill categories in first-seen order.
    pub fn skill_categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for skill in &self.skills {
            if !seen.contains(&skill.category.as_str()) {
                seen.push(&skill.category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "personalInfo": { "name": "Ada Lovelace", "taglines": ["Engineer", "Analyst"] },
        "impactMeters": [
            { "label": "Savings", "value": 150, "prefix": "$", "unit": "M" },
            { "label": "Models shipped", "value": 12 }
        ],
        "timeline": [
            { "period": "2020-2022", "role": "Engineer", "company": "Acme",
              "strand": "industrial", "points": ["Did X"] },
            { "period": "2022-2024", "role": "Scientist", "company": "Initech",
              "strand": "quantum", "points": [] }
        ],
        "skills": [
            { "name": "Rust", "category": "Engineering", "proficiency": 0.9 },
            { "name": "Stats", "category": "Data Science", "proficiency": 0.8 },
            { "name": "Go", "category": "Engineering", "proficiency": 0.5 }
        ],
        "projects": [
            { "name": "Folio", "description": "This site", "codeUrl": "https://c", "liveUrl": "https://l" }
        ],
        "certifications": [
            { "name": "CKA", "issuer": "CNCF", "url": "https://cert" }
        ]
    }"#;

    #[test]
    fn test_parses_camel_case_document() {
        let doc: ResumeDocument = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(doc.personal_info.name, "Ada Lovelace");
        assert_eq!(doc.personal_info.taglines.len(), 2);
        assert_eq!(doc.projects[0].code_url, "https://c");
        assert_eq!(doc.projects[0].live_url, "https://l");
        assert_eq!(doc.certifications[0].issuer, "CNCF");
    }

    #[test]
    fn test_unknown_strand_falls_back_to_other() {
        let doc: ResumeDocument = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(doc.timeline[0].strand, Strand::Industrial);
        assert_eq!(doc.timeline[1].strand, Strand::Other);
    }

    #[test]
    fn test_meter_optional_prefix_and_unit() {
        let doc: ResumeDocument = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(doc.impact_meters[0].final_text(), "$150M");
        assert_eq!(doc.impact_meters[1].final_text(), "12");
    }

    #[test]
    fn test_fractional_meter_keeps_decimals() {
        let meter = ImpactMeter {
            label: "Uplift".to_string(),
            value: 2.5,
            prefix: None,
            unit: Some("x".to_string()),
        };
        assert_eq!(meter.final_text(), "2.5x");
    }

    #[test]
    fn test_skill_categories_first_seen_order() {
        let doc: ResumeDocument = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(doc.skill_categories(), vec!["Engineering", "Data Science"]);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let doc: ResumeDocument =
            serde_json::from_str(r#"{ "personalInfo": { "name": "X" } }"#).unwrap();
        assert!(doc.timeline.is_empty());
        assert!(doc.skills.is_empty());
        assert!(doc.personal_info.taglines.is_empty());
    }
}
