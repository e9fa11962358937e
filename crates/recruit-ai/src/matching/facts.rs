use serde::{Deserialize, Serialize};

/// Identifier wrapper for job descriptions, assigned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JdId(pub String);

/// Identifier wrapper for resumes, assigned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResumeId(pub String);

/// Delivery-style classification of a project or role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryType {
    HandsOn,
    Hybrid,
    Governance,
}

impl DeliveryType {
    pub const fn label(self) -> &'static str {
        match self {
            DeliveryType::HandsOn => "hands-on",
            DeliveryType::Hybrid => "hybrid",
            DeliveryType::Governance => "governance",
        }
    }

    /// Classification fallback when extraction left the field empty: PMO
    /// and governance titles read as oversight, builder titles as hands-on,
    /// anything else as a mix.
    pub fn from_role(role: &str) -> Self {
        let role = role.to_lowercase();
        if role.contains("pmo") || role.contains("governance") {
            DeliveryType::Governance
        } else if role.contains("lead") || role.contains("developer") || role.contains("engineer") {
            DeliveryType::HandsOn
        } else {
            DeliveryType::Hybrid
        }
    }
}

/// Snapshot of one delivered project from the extraction step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFact {
    pub name: String,
    pub domain: String,
    pub role: String,
    pub tech_stack: Vec<String>,
    pub team_size: u32,
    pub budget_usd_thousands: f64,
    pub duration_months: u32,
    pub production_launch: bool,
    pub risk_events: Vec<String>,
    pub delivery_type: Option<DeliveryType>,
}

impl ProjectFact {
    /// Declared delivery type, else the role-title inference.
    pub fn effective_delivery_type(&self) -> DeliveryType {
        self.delivery_type
            .unwrap_or_else(|| DeliveryType::from_role(&self.role))
    }
}

/// One employment row. Start and end stay raw ("YYYY-MM", the sentinel
/// "present"/"current"/"now", or null) so the gap calculator can apply its
/// tolerant month parsing instead of failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkEntry {
    pub company: String,
    pub title: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// One education row; either a "YYYY-MM" end date or a bare graduation year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub end: Option<String>,
    pub graduation_year: Option<i32>,
}

/// Career-wide aggregates the extraction step reports directly; used as
/// fallbacks when the project list is too sparse to derive them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerSummary {
    pub production_launches: u32,
    pub largest_team: u32,
    pub largest_budget_thousands: f64,
    pub enterprise: bool,
    pub multi_year: bool,
}

/// Extracted resume facts; the only candidate-side input to both scorers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeFacts {
    pub candidate_name: String,
    pub domains: Vec<String>,
    pub skills: Vec<String>,
    pub methodologies: Vec<String>,
    pub experience_years: f64,
    pub projects: Vec<ProjectFact>,
    pub work_history: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    pub career_summary: CareerSummary,
}

impl ResumeFacts {
    /// Candidate name for reports; extraction sometimes leaves it blank.
    pub fn display_name(&self) -> &str {
        let name = self.candidate_name.trim();
        if name.is_empty() {
            "Unknown Candidate"
        } else {
            name
        }
    }
}

/// Scale expectations a job description states outright.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleRequirements {
    pub enterprise: bool,
    pub multi_year: bool,
    pub large_budget: bool,
}

/// Extracted job-description facts; the only JD-side input to both scorers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JdFacts {
    pub domains: Vec<String>,
    pub mandatory_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub tools: Vec<String>,
    pub methodologies: Vec<String>,
    pub min_experience_years: f64,
    pub critical_deliveries_required: u32,
    pub risk_areas_expected: u32,
    pub delivery_style: DeliveryType,
    pub scale_requirements: ScaleRequirements,
    /// Raw posting text, consulted only by the documented inference
    /// fallback when the structured counts above are zero.
    pub text: String,
}

impl Default for JdFacts {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            mandatory_skills: Vec::new(),
            preferred_skills: Vec::new(),
            tools: Vec::new(),
            methodologies: Vec::new(),
            min_experience_years: 0.0,
            critical_deliveries_required: 0,
            risk_areas_expected: 0,
            delivery_style: DeliveryType::HandsOn,
            scale_requirements: ScaleRequirements::default(),
            text: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_type_inference_from_role_titles() {
        assert_eq!(
            DeliveryType::from_role("PMO Director"),
            DeliveryType::Governance
        );
        assert_eq!(
            DeliveryType::from_role("Senior Backend Engineer"),
            DeliveryType::HandsOn
        );
        assert_eq!(DeliveryType::from_role("Tech Lead"), DeliveryType::HandsOn);
        assert_eq!(
            DeliveryType::from_role("Delivery Manager"),
            DeliveryType::Hybrid
        );
    }

    #[test]
    fn effective_delivery_type_prefers_the_declared_value() {
        let project = ProjectFact {
            role: "PMO Director".to_string(),
            delivery_type: Some(DeliveryType::HandsOn),
            ..ProjectFact::default()
        };
        assert_eq!(project.effective_delivery_type(), DeliveryType::HandsOn);

        let inferred = ProjectFact {
            role: "PMO Director".to_string(),
            ..ProjectFact::default()
        };
        assert_eq!(inferred.effective_delivery_type(), DeliveryType::Governance);
    }

    #[test]
    fn blank_candidate_names_render_as_unknown() {
        let resume = ResumeFacts {
            candidate_name: "   ".to_string(),
            ..ResumeFacts::default()
        };
        assert_eq!(resume.display_name(), "Unknown Candidate");
    }

    #[test]
    fn fact_records_deserialize_with_defaults() {
        let jd: JdFacts = serde_json::from_str(r#"{"mandatory_skills":["python"]}"#)
            .expect("minimal jd parses");
        assert_eq!(jd.mandatory_skills, vec!["python"]);
        assert_eq!(jd.delivery_style, DeliveryType::HandsOn);
        assert_eq!(jd.critical_deliveries_required, 0);

        let resume: ResumeFacts =
            serde_json::from_str(r#"{"candidate_name":"Asha Rao"}"#).expect("minimal resume parses");
        assert!(resume.projects.is_empty());
        assert_eq!(resume.experience_years, 0.0);
    }
}
