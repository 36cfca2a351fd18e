use crate::model::FolderType;
use lazy_static::lazy_static;
use regex::Regex;

/// One folder-name date rule: a named regex whose first three capture
/// groups are (year, month, day), tagged with the folder type it implies.
///
/// Rules are evaluated in order and the first match wins, so textual
/// prefix rules sit ahead of bare-numeric ones and suffix variants sit
/// after the separators they would otherwise shadow. Supporting a new
/// prefix or recording-source suffix means appending a rule, not touching
/// the extractor.
pub struct DateRule {
    pub name: &'static str,
    pub folder_type: FolderType,
    pub regex: Regex,
}

fn rule(name: &'static str, folder_type: FolderType, pattern: &str) -> DateRule {
    DateRule {
        name,
        folder_type,
        regex: Regex::new(pattern).unwrap(),
    }
}

lazy_static! {
    /// Bare `19xx`/`20xx` container folders, handled ahead of the rules.
    pub static ref YEAR_ONLY: Regex = Regex::new(r"^(19\d{2}|20\d{2})$").unwrap();

    pub static ref DATE_RULES: Vec<DateRule> = vec![
        // gd82-09-20, gd1981-02-26
        rule("gd_yy", FolderType::GdPrefix, r"gd(\d{2})-(\d{2})-(\d{2})(?:\b|\.)"),
        rule("gd_yyyy", FolderType::GdPrefix, r"gd(\d{4})-(\d{2})-(\d{2})(?:\b|\.)"),
        // 1972-10-18, 72-10-18, 72.10.18, 1972.10.18, 72_10_18, 1972_10_18
        rule("bare_yyyy_dash", FolderType::DateOnly, r"(?:^|\b)(\d{4})-(\d{2})-(\d{2})(?:\b|\.)"),
        rule("bare_yy_dash", FolderType::DateOnly, r"(?:^|\b)(\d{2})-(\d{2})-(\d{2})(?:\b|\.)"),
        rule("bare_yy_dot", FolderType::DateOnly, r"(?:^|\b)(\d{2})\.(\d{2})\.(\d{2})(?:\b|\.)"),
        rule("bare_yyyy_dot", FolderType::DateOnly, r"(?:^|\b)(\d{4})\.(\d{2})\.(\d{2})(?:\b|\.)"),
        rule("bare_yy_underscore", FolderType::DateOnly, r"(?:^|\b)(\d{2})_(\d{2})_(\d{2})(?:\b|\.)"),
        rule("bare_yyyy_underscore", FolderType::DateOnly, r"(?:^|\b)(\d{4})_(\d{2})_(\d{2})(?:\b|\.)"),
        // Recording-source suffixes glue the day to a word character, so
        // the boundary-terminated rules above never see these.
        // gd68-11-01sbd, gd1970-11-23sbd, gd70-3-24sbd
        rule("gd_yy_sbd", FolderType::GdPrefix, r"gd(\d{2})-(\d{2})-(\d{2})sbd"),
        rule("gd_yyyy_sbd", FolderType::GdPrefix, r"gd(\d{4})-(\d{2})-(\d{2})sbd"),
        rule("gd_yy_short_month_sbd", FolderType::GdPrefix, r"gd(\d{2})-(\d{1})-(\d{2})sbd"),
        // gd70-06-06acoustic, gd72-05-07set1
        rule("gd_yy_source", FolderType::GdPrefix, r"gd(\d{2})-(\d{2})-(\d{2})(?:acoustic|set\d)"),
        // 1969 Extravaganza - 4-06-69 (the trailing two-digit year is ignored)
        rule("year_label", FolderType::DateOnly, r"(\d{4})(?:\s+\w+\s+-\s+)(\d{1,2})-(\d{2})-(\d{2})"),
        // gd1977-04-27d1
        rule("gd_yyyy_disc", FolderType::GdPrefix, r"gd(\d{4})-(\d{2})-(\d{2})d\d"),
        // gd1972.05.23.GEMS.SBD
        rule("gd_gems", FolderType::GdPrefix, r"gd(\d{4})\.(\d{2})\.(\d{2})(?:\.GEMS|\.SBD)"),
        // jg1976-01-09 (Jerry Garcia)
        rule("jg_yyyy", FolderType::DateOnly, r"jg(\d{4})-(\d{2})-(\d{2})"),
    ];
}

/// Run the ordered rule list over a folder name. Returns the matching rule
/// and the raw (year, month, day) tokens of the first rule that hits.
pub fn match_folder_name<'a>(
    name: &'a str,
) -> Option<(&'static DateRule, &'a str, &'a str, &'a str)> {
    for rule in DATE_RULES.iter() {
        if let Some(caps) = rule.regex.captures(name) {
            let year = caps.get(1)?.as_str();
            let month = caps.get(2)?.as_str();
            let day = caps.get(3)?.as_str();
            return Some((rule, year, month, day));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched_rule(name: &str) -> &'static str {
        match_folder_name(name).map(|(r, _, _, _)| r.name).unwrap()
    }

    #[test]
    fn test_gd_two_digit_year() {
        let (rule, y, m, d) = match_folder_name("gd82-09-20").unwrap();
        assert_eq!(rule.name, "gd_yy");
        assert_eq!((y, m, d), ("82", "09", "20"));
        assert_eq!(rule.folder_type, FolderType::GdPrefix);
    }

    #[test]
    fn test_gd_four_digit_year() {
        let (rule, y, m, d) = match_folder_name("gd1981-02-26.sbeok.shnf").unwrap();
        assert_eq!(rule.name, "gd_yyyy");
        assert_eq!((y, m, d), ("1981", "02", "26"));
    }

    #[test]
    fn test_bare_separators() {
        assert_eq!(matched_rule("1972-10-18 soundboard"), "bare_yyyy_dash");
        assert_eq!(matched_rule("72.10.18"), "bare_yy_dot");
        assert_eq!(matched_rule("1972_10_18"), "bare_yyyy_underscore");
    }

    #[test]
    fn test_source_suffixes_fall_through_to_later_rules() {
        // No word boundary between the day and the suffix, so the plain
        // gd rules skip these.
        assert_eq!(matched_rule("gd68-11-01sbd"), "gd_yy_sbd");
        assert_eq!(matched_rule("gd1970-11-23sbd"), "gd_yyyy_sbd");
        assert_eq!(matched_rule("gd70-3-24sbd"), "gd_yy_short_month_sbd");
        assert_eq!(matched_rule("gd70-06-06acoustic"), "gd_yy_source");
        assert_eq!(matched_rule("gd72-05-07set1"), "gd_yy_source");
        assert_eq!(matched_rule("gd1977-04-27d1"), "gd_yyyy_disc");
        assert_eq!(matched_rule("gd1972.05.23.GEMS.SBD"), "gd_gems");
    }

    #[test]
    fn test_year_label_uses_folder_year() {
        let (rule, y, m, d) = match_folder_name("1969 Extravaganza - 4-06-69").unwrap();
        assert_eq!(rule.name, "year_label");
        assert_eq!((y, m, d), ("1969", "4", "06"));
        assert_eq!(rule.folder_type, FolderType::DateOnly);
    }

    #[test]
    fn test_jg_prefix_is_date_only() {
        let (rule, y, _, _) = match_folder_name("jg1976-01-09").unwrap();
        assert_eq!(rule.name, "jg_yyyy");
        assert_eq!(rule.folder_type, FolderType::DateOnly);
        assert_eq!(y, "1976");
    }

    #[test]
    fn test_no_match() {
        assert!(match_folder_name("random_notes").is_none());
        assert!(match_folder_name("artwork scans").is_none());
    }

    #[test]
    fn test_year_only_pattern() {
        assert!(YEAR_ONLY.is_match("1983"));
        assert!(YEAR_ONLY.is_match("2003"));
        assert!(!YEAR_ONLY.is_match("1983 remasters"));
        assert!(!YEAR_ONLY.is_match("1883"));
    }
}
