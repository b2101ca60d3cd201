//! Consumer-side selections over a project list. None of these modify the registry.

use crate::domain::model::ProjectRecord;

/// Every record except blank templates, in registry order.
pub fn displayable(projects: &[ProjectRecord]) -> impl Iterator<Item = &ProjectRecord> {
    projects.iter().filter(|p| !p.is_template())
}

pub fn starred(projects: &[ProjectRecord]) -> impl Iterator<Item = &ProjectRecord> {
    displayable(projects).filter(|p| p.starred)
}

pub fn find_by_name<'a>(projects: &'a [ProjectRecord], name: &str) -> Option<&'a ProjectRecord> {
    projects.iter().find(|p| p.name == name)
}

pub fn summary_line(record: &ProjectRecord) -> String {
    let marker = if record.starred { "*" } else { " " };
    let name = if record.is_template() {
        "(template)"
    } else {
        record.name.as_str()
    };
    let href = if record.href.is_empty() {
        "-"
    } else {
        record.href.as_str()
    };
    format!("{} {} <{}> [{}]", marker, name, href, record.tags.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builtin;

    #[test]
    fn test_displayable_skips_only_template() {
        let all = builtin::projects();
        let names: Vec<&str> = displayable(&all).map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "createPokémon.team",
                "Pelican Metadata Generator",
                "Civic engagement in Europe",
                "Przepis na LibreOffice",
                "My blog",
            ]
        );
    }

    #[test]
    fn test_starred_keeps_order() {
        let all = builtin::projects();
        let names: Vec<&str> = starred(&all).map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["createPokémon.team", "Pelican Metadata Generator"]);
    }

    #[test]
    fn test_summary_line() {
        let all = builtin::projects();
        assert_eq!(
            summary_line(&all[5]),
            "  My blog </blog/> [Pelican, Jinja2 (HTML, SCSS), writing]"
        );
        assert_eq!(summary_line(&all[0]), "  (template) <-> []");
        assert!(summary_line(&all[1]).starts_with("* createPokémon.team"));
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let all = builtin::projects();
        assert!(find_by_name(&all, "My blog").is_some());
        assert!(find_by_name(&all, "my blog").is_none());
    }
}
