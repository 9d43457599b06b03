//! Line-oriented text report and JSON output

use crate::character::Character;
use crate::core::error::Result;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Extra material appended after the sheet
#[derive(Debug, Clone, Default)]
pub struct ReportOptions<'a> {
    /// Append the raw request and skill lists
    pub debug_section: bool,
    /// The player's original request, shown in the debug section
    pub request: Option<&'a str>,
}

/// Render the sheet as plain text
pub fn render_text(pc: &Character, options: &ReportOptions<'_>) -> String {
    let mut out = String::new();
    let profile = &pc.profile;

    let _ = writeln!(
        out,
        "{}, Age: {}, Occupation: {}",
        profile.name, profile.age, profile.occupation
    );
    let _ = writeln!(out, "{}", pc.attributes);
    let _ = writeln!(out, "{}", pc.scores);
    out.push_str("--\n");
    for skill in pc.skills.sorted() {
        let _ = writeln!(out, "{}", skill);
    }
    out.push_str("--\n");
    out.push_str("Backstory:\n\n");
    let _ = writeln!(out, "{}", profile.backstory);
    out.push('\n');
    let _ = writeln!(out, "{}", profile.traits);

    if options.debug_section {
        out.push_str("--\nDebug\n");
        if let Some(request) = options.request {
            let _ = writeln!(out, "{}", request);
        }
        let _ = writeln!(out, "{}", pc.occupational_skills);
        let _ = writeln!(out, "{}", pc.interest_skills);
    }

    out
}

/// Render the whole record as pretty JSON
pub fn render_json(pc: &Character) -> Result<String> {
    Ok(serde_json::to_string_pretty(pc)?)
}

/// `"{name} {age} {occupation}.txt"` with anything outside `[A-Za-z0-9.]` as `_`
pub fn report_filename(pc: &Character) -> String {
    let rough = format!(
        "{} {} {}.txt",
        pc.profile.name, pc.profile.age, pc.profile.occupation
    );
    rough
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '_' })
        .collect()
}

/// Write the text report into `dir`, returning the file path
pub fn write_report(dir: &Path, pc: &Character, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(report_filename(pc));
    fs::write(&path, text)?;
    tracing::info!(path = %path.display(), "Wrote character report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{AttributeSet, DamageBonus, DerivedScores, Profile};
    use crate::skills::{DefaultValue, SkillDefinition, SkillSet};

    fn sample() -> Character {
        let attributes = AttributeSet::from_scores([40, 50, 60, 50, 80, 50, 60, 70]);
        let mut skills = SkillSet::new();
        let library = SkillDefinition::new("Library Use", false, DefaultValue::Fixed(20));
        let language = SkillDefinition::new("Language", true, DefaultValue::Fixed(1));
        skills
            .get_or_insert(&library, None, &attributes)
            .raise_to_at_least(70);
        skills
            .get_or_insert(&language, Some("Latin".into()), &attributes)
            .raise_to_at_least(60);

        Character {
            profile: Profile {
                name: "Edgar Finch".into(),
                age: "63".into(),
                occupation: "Professor, Languages".into(),
                backstory: "Edgar teaches.".into(),
                traits: "Trait: patient".into(),
            },
            attributes,
            scores: DerivedScores {
                hp: 11,
                mp: 12,
                build: 0,
                movement: 7,
                luck: 55,
                damage_bonus: DamageBonus(0),
            },
            skills,
            occupational_skills: "Library Use, Language (Latin)".into(),
            interest_skills: "".into(),
        }
    }

    #[test]
    fn test_render_text_layout() {
        let text = render_text(&sample(), &ReportOptions::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Edgar Finch, Age: 63, Occupation: Professor, Languages");
        assert_eq!(
            lines[1],
            "STR: 40, CON: 50, SIZ: 60, DEX: 50, INT: 80, APP: 50, POW: 60, EDU: 70"
        );
        assert_eq!(lines[2], "HP: 11, DB: 0, Build: 0, Move: 7, MP: 12, Luck: 55");
        assert_eq!(lines[3], "--");
        assert_eq!(lines[4], "Language (Latin): 60% (30/12)");
        assert_eq!(lines[5], "Library Use: 70% (35/14)");
        assert_eq!(lines[6], "--");
        assert_eq!(lines[7], "Backstory:");
        assert!(!text.contains("Debug"));
    }

    #[test]
    fn test_render_text_debug_section() {
        let options = ReportOptions {
            debug_section: true,
            request: Some("a professor"),
        };
        let text = render_text(&sample(), &options);
        assert!(text.contains("--\nDebug\na professor\nLibrary Use, Language (Latin)\n"));
    }

    #[test]
    fn test_report_filename_sanitized() {
        assert_eq!(
            report_filename(&sample()),
            "Edgar_Finch_63_Professor__Languages.txt"
        );
    }

    #[test]
    fn test_render_json_round_trips_key_fields() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["profile"]["name"], "Edgar Finch");
        assert_eq!(value["scores"]["move"], 7);
        assert_eq!(value["skills"][0]["skill_name"], "Library Use");
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let pc = sample();
        let path = write_report(dir.path(), &pc, "hello").unwrap();
        assert_eq!(path.file_name().unwrap(), "Edgar_Finch_63_Professor__Languages.txt");
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }
}
