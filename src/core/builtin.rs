use crate::domain::model::ProjectRecord;
use crate::domain::ports::ProjectSource;
use crate::utils::error::Result;

fn tags(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

/// The portfolio as shipped. The first entry is intentionally blank and serves as a template.
pub fn projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            name: String::new(),
            href: String::new(),
            imagetitle: String::new(),
            tags: Vec::new(),
            description: String::new(),
            starred: false,
        },
        ProjectRecord {
            name: "createPokémon.team".to_string(),
            href: "https://createpokemon.team/".to_string(),
            imagetitle: "createpokemonteam".to_string(),
            tags: tags(&["Python 3", "Angular", "TypeScript", "SCSS"]),
            description: "Web application that helps you build your own Pokémon team in any core series game.\n\
                <a href=\"https://github.com/mirzal/create-pokemon-team\">Github</a>."
                .to_string(),
            starred: true,
        },
        ProjectRecord {
            name: "Pelican Metadata Generator".to_string(),
            href: "https://github.com/mirzal/pelican-metadata-generator".to_string(),
            imagetitle: "pelican".to_string(),
            tags: tags(&["Python 3", "PyQt 5", "unittest", "Markdown"]),
            description: "Graphical application to create <a href=\"https://blog.getpelican.com/\">Pelican</a> post metadata."
                .to_string(),
            starred: true,
        },
        ProjectRecord {
            name: "Civic engagement in Europe".to_string(),
            href: "https://mzalewski.shinyapps.io/ESS-civic-engagement".to_string(),
            imagetitle: "ess".to_string(),
            tags: tags(&[
                "R",
                "ggplot2",
                "Shiny (HTML, CSS)",
                "data wrangling",
                "visualisation",
            ]),
            description: "R Shiny application to explore changes in civic engagement index in various European countries over time."
                .to_string(),
            starred: false,
        },
        ProjectRecord {
            name: "Przepis na LibreOffice".to_string(),
            href: "http://przepis-na-lo.pl/".to_string(),
            imagetitle: "przepis-na-lo".to_string(),
            tags: tags(&["Wordpress", "PHP", "HTML", "CSS", "writing"]),
            description: "My discontinued blog focused on <a href=\"https://libreoffice.org/\">LibreOffice</a> tips and tricks. \
                It was relatively popular in Polish open source and academic communities, \
                attracting about 20 000 unique visitors in peak months."
                .to_string(),
            starred: false,
        },
        ProjectRecord {
            name: "My blog".to_string(),
            href: "/blog/".to_string(),
            imagetitle: "blog".to_string(),
            tags: tags(&["Pelican", "Jinja2 (HTML, SCSS)", "writing"]),
            description: "My current blog, focused mainly on tech and testing.".to_string(),
            starred: false,
        },
    ]
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl ProjectSource for BuiltinSource {
    fn load(&self) -> Result<Vec<ProjectRecord>> {
        Ok(projects())
    }

    fn describe(&self) -> String {
        "built-in project list".to_string()
    }
}
