//! Integration test: model-driven generation with a scripted model
//!
//! The text model is replaced by a fixed script so the whole pipeline
//! (prompts -> answers -> assembly -> report) runs offline.

use async_trait::async_trait;
use coc_chargen::core::{ChargenError, GeneratorConfig, Result};
use coc_chargen::llm::{CharacterGenerator, GeneratedTexts, TextGenerator};
use coc_chargen::render::{render_json, render_text, report_filename, ReportOptions};
use coc_chargen::skills::SkillCatalog;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use std::sync::Mutex;

struct ScriptedModel {
    answers: Mutex<Vec<&'static str>>,
}

impl ScriptedModel {
    fn new(mut answers: Vec<&'static str>) -> Self {
        answers.reverse();
        Self {
            answers: Mutex::new(answers),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedModel {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        self.answers
            .lock()
            .unwrap()
            .pop()
            .map(str::to_string)
            .ok_or_else(|| ChargenError::Llm("script exhausted".into()))
    }
}

fn shipped_catalog() -> SkillCatalog {
    SkillCatalog::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("data/skills.json")).unwrap()
}

const DESCRIPTION: &str = "Agnes Whitlow\n34\nNight-shift nurse\n\nAgnes works nights at a small hospital on the moors.\n\nShe has started to keep a diary of the patients who vanish.";

#[tokio::test]
async fn test_scripted_generation_end_to_end() {
    let model = ScriptedModel::new(vec![
        DESCRIPTION,
        "Education (EDU), DEX, POW, CON, INT, APP, SIZ, STR.",
        "Ideology/Beliefs: everyone deserves care\nTrait: calm under pressure",
        "First Aid, Medicine, Psychology, Listen, Spot Hidden, Persuade, Language (Own), Science (Pharmacy)",
        "Drive Auto, Art/Craft (Photography), Occult, Necromancy",
    ]);
    let catalog = shipped_catalog();
    let config = GeneratorConfig::default();
    let generator = CharacterGenerator::new(&model, &catalog, &config);
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    let pc = generator.generate("a nurse", &mut rng).await.unwrap();

    assert_eq!(pc.profile.name, "Agnes Whitlow");
    assert_eq!(pc.profile.age, "34");
    assert_eq!(pc.profile.occupation, "Night-shift nurse");
    assert!(pc.profile.backstory.starts_with("Agnes works nights"));

    assert_eq!(pc.skills.get("First Aid", None).unwrap().value(), 70);
    assert_eq!(pc.skills.get("Medicine", None).unwrap().value(), 60);
    // EDU 80 beats the rung of 40
    assert_eq!(pc.skills.get("Language (Own)", None).unwrap().value(), 80);
    assert_eq!(pc.skills.get("Science", Some("Pharmacy")).unwrap().value(), 40);
    assert_eq!(pc.skills.get("Credit Rating", None).unwrap().value(), 40);
    assert_eq!(pc.skills.get("Art/Craft", Some("Photography")).unwrap().value(), 25);
    assert!(pc.skills.iter().all(|s| s.skill_name != "Necromancy"));

    let text = render_text(
        &pc,
        &ReportOptions {
            debug_section: true,
            request: Some("a nurse"),
        },
    );
    assert!(text.starts_with("Agnes Whitlow, Age: 34, Occupation: Night-shift nurse\n"));
    assert!(text.contains("First Aid: 70% (35/14)\n"));
    assert!(text.ends_with("Drive Auto, Art/Craft (Photography), Occult, Necromancy\n"));

    assert_eq!(report_filename(&pc), "Agnes_Whitlow_34_Night_shift_nurse.txt");

    let json: serde_json::Value = serde_json::from_str(&render_json(&pc).unwrap()).unwrap();
    assert_eq!(json["profile"]["occupation"], "Night-shift nurse");
}

#[test]
fn test_assemble_from_saved_texts_is_deterministic() {
    let catalog = shipped_catalog();
    let config = GeneratorConfig::default();
    let model = ScriptedModel::new(Vec::new());
    let generator = CharacterGenerator::new(&model, &catalog, &config);

    let texts = GeneratedTexts {
        description: DESCRIPTION.into(),
        attribute_priority: "DEX, STR, CON, SIZ, INT, APP, POW, EDU".into(),
        traits: String::new(),
        occupational_skills: "Dodge, Stealth".into(),
        interest_skills: "Climb".into(),
    };

    let a = generator
        .assemble(&texts, &mut ChaCha8Rng::seed_from_u64(7))
        .unwrap();
    let b = generator
        .assemble(&texts, &mut ChaCha8Rng::seed_from_u64(7))
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(a.skills.get("Dodge", None).unwrap().value(), 70);
}
