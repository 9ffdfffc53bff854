//! Integration tests for the skill gap analyzer

use skill_gap_analyzer::advice::{
    AdviceError, AdviceResult, AdviceService, ImprovementTips, LearningPath, ReportAssembler,
};
use skill_gap_analyzer::analysis::{classify, SkillExtractor, SkillLevel, SkillMap, SkillOntology};
use skill_gap_analyzer::input;
use std::path::Path;
use std::time::Duration;

fn fixture_ontology() -> SkillOntology {
    SkillOntology::load(Path::new("tests/fixtures/skill_ontology.json")).unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let text = input::extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    assert!(text.contains("John Doe"));
    assert!(text.contains("Python"));
    assert!(text.contains("Machine Learning"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let text = input::extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    assert!(text.contains("John Doe"));
    assert!(text.contains("Python"));
    // Markdown formatting must be stripped
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let result = input::extract_text(Path::new("tests/fixtures/skill_ontology.json")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let result = input::extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_extraction_pipeline_from_fixture_resume() {
    let text = input::extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let ontology = fixture_ontology();
    let extractor = SkillExtractor::new(&ontology).unwrap();
    let observed = extractor.extract(&text);

    // "5+ years of Python" and "Advanced Machine Learning" are expert tier
    assert_eq!(observed.get("Python").unwrap().get(), 5);
    assert_eq!(observed.get("Machine Learning").unwrap().get(), 5);
    // "Proficient in SQL" is advanced tier
    assert_eq!(observed.get("SQL").unwrap().get(), 4);
    // "Familiar with Docker" is basic tier
    assert_eq!(observed.get("Docker").unwrap().get(), 2);
    // mentioned without any proficiency phrase
    assert_eq!(observed.get("TensorFlow").unwrap().get(), 1);
}

#[test]
fn test_classification_of_extracted_against_requirements() {
    let observed: SkillMap = serde_json::from_str(
        r#"{"Python": 3, "Machine Learning": 2}"#,
    )
    .unwrap();
    let required: SkillMap =
        serde_json::from_str(&std::fs::read_to_string("tests/fixtures/job_requirements.json").unwrap())
            .unwrap();

    let gap = classify(&observed, &required);

    assert!(gap.matching.is_empty());
    assert_eq!(gap.below_level.len(), 2);
    assert_eq!(gap.missing.len(), 1);
    assert_eq!(gap.below_level["Python"].gap(), 1);
    assert_eq!(gap.missing["Data Analysis"].current_level, 0);
}

/// Advice double that returns canned payloads, with optional garbage mode.
struct FakeAdviceService {
    malformed_for: Option<&'static str>,
}

impl AdviceService for FakeAdviceService {
    async fn learning_path(
        &self,
        skill: &str,
        current_level: u8,
        target_level: u8,
    ) -> AdviceResult<LearningPath> {
        if self.malformed_for == Some(skill) {
            return Err(AdviceError::Malformed("unparseable response".to_string()));
        }
        Ok(LearningPath {
            skill: skill.to_string(),
            current_level,
            target_level,
            learning_path: vec![format!("Study {} fundamentals", skill)],
            ..LearningPath::default()
        })
    }

    async fn improvement_tips(
        &self,
        skill: &str,
        current_level: u8,
    ) -> AdviceResult<ImprovementTips> {
        Ok(ImprovementTips {
            skill: skill.to_string(),
            current_level,
            target_level: current_level + 1,
            tips: vec!["Ship a project".to_string()],
        })
    }
}

#[tokio::test]
async fn test_end_to_end_report_assembly() {
    let text = input::extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let ontology = fixture_ontology();
    let observed = SkillExtractor::new(&ontology).unwrap().extract(&text);

    let required: SkillMap = serde_json::from_str(
        r#"{"Python": 4, "Machine Learning": 3, "Data Analysis": 3, "Kubernetes": 2}"#,
    )
    .unwrap();

    let gap = classify(&observed, &required);
    let assembler = ReportAssembler::new(
        FakeAdviceService { malformed_for: None },
        Duration::from_secs(5),
    );
    let report = assembler.assemble(gap).await;

    // Python (5) and ML (5) exceed requirements; the other two are missing
    assert_eq!(report.gap.matching.len(), 2);
    assert_eq!(report.gap.missing.len(), 2);
    assert!(report.learning_paths.contains_key("Data Analysis"));
    assert!(report.learning_paths.contains_key("Kubernetes"));
    // matching skills never receive eager advice
    assert!(!report.learning_paths.contains_key("Python"));
    assert!(report.failures.is_empty());
}

#[tokio::test]
async fn test_malformed_advice_is_a_soft_failure() {
    let observed: SkillMap = serde_json::from_str(r#"{"Python": 3}"#).unwrap();
    let required: SkillMap =
        serde_json::from_str(r#"{"Python": 4, "Data Analysis": 3}"#).unwrap();

    let gap = classify(&observed, &required);
    let assembler = ReportAssembler::new(
        FakeAdviceService {
            malformed_for: Some("Data Analysis"),
        },
        Duration::from_secs(5),
    );
    let report = assembler.assemble(gap).await;

    // the failed skill is still reported missing, just without advice
    assert!(report.gap.missing.contains_key("Data Analysis"));
    assert!(report.advice_for("Data Analysis").is_none());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].skill, "Data Analysis");

    // Python's advice was unaffected
    assert!(report.advice_for("Python").is_some());
}

#[tokio::test]
async fn test_empty_resume_yields_all_missing() {
    let ontology = fixture_ontology();
    let observed = SkillExtractor::new(&ontology).unwrap().extract("");
    assert!(observed.is_empty());

    let required: SkillMap = serde_json::from_str(r#"{"Python": 4}"#).unwrap();
    let gap = classify(&observed, &required);
    assert_eq!(gap.missing.len(), 1);
    assert!(gap.matching.is_empty());
    assert!(gap.below_level.is_empty());
}

#[test]
fn test_malformed_requirements_are_rejected_at_the_boundary() {
    let result: Result<SkillMap, _> = serde_json::from_str(r#"{"Python": 9}"#);
    assert!(result.is_err());

    let result: Result<SkillMap, _> = serde_json::from_str(r#"{"Python": 0}"#);
    assert!(result.is_err());
}

#[test]
fn test_skill_level_boundaries() {
    assert!(SkillLevel::try_from(1).is_ok());
    assert!(SkillLevel::try_from(5).is_ok());
    assert!(SkillLevel::try_from(0).is_err());
    assert!(SkillLevel::try_from(6).is_err());
}
