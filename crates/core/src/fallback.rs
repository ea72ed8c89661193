//! Static document served when live retrieval fails.
//!
//! Every image here is a same-origin absolute path so the fallback renders
//! without any network access beyond the page's own origin.

use crate::model::{MultimediaItem, PortfolioDocument, Project, WipProject};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn poster(description: &str, image: &str) -> MultimediaItem {
    MultimediaItem {
        title: "Poster Design".to_string(),
        description: description.to_string(),
        image: image.to_string(),
    }
}

/// Build the hard-coded fallback document.
///
/// Always replaces a failed load wholesale; never merged with partial data.
pub fn fallback_document() -> PortfolioDocument {
    PortfolioDocument {
        projects: vec![
            Project {
                id: 1,
                title: "Portfolio Website".to_string(),
                description: "A sleek and responsive portfolio website built with React, \
                              Tailwind CSS, and Framer Motion to showcase my work and skills."
                    .to_string(),
                image: "/images/project/1.png".to_string(),
                github_url: "https://github.com/Yugabharathi21/Portfolio-Webpage".to_string(),
                live_url: Some("https://yugabharathi21.netlify.app".to_string()),
                technologies: strings(&["React", "Tailwind CSS", "TypeScript", "Framer Motion"]),
            },
            Project {
                id: 2,
                title: "Event Promotion Website".to_string(),
                description: "A futuristic Fallout 3 terminal-style event website designed for \
                              Crescita 2k25, featuring a retro UI and immersive experience."
                    .to_string(),
                image: "/images/project/2.png".to_string(),
                github_url: "https://github.com/Yugabharathi21/final-crescita/tree/main"
                    .to_string(),
                live_url: Some("https://cse-crescita-25.netlify.app/".to_string()),
                technologies: strings(&["React", "Tailwind CSS", "TypeScript"]),
            },
        ],
        multimedia: vec![
            poster(
                "A tribute poster designed for my idol Lewis Hamilton on his birthday.",
                "/images/multimedia/1.png",
            ),
            poster(
                "Promotional poster created for a college club event.",
                "/images/multimedia/2.png",
            ),
            poster(
                "Event-themed poster crafted for my college club.",
                "/images/multimedia/3.png",
            ),
            poster(
                "Creative poster made for a university-level event promotion.",
                "/images/multimedia/4.png",
            ),
        ],
        wip: vec![WipProject {
            id: 1,
            title: "Ox-Inventory Revamp by SPZYT".to_string(),
            description: "A complete visual and functional revamp of the popular ox-inventory \
                          system, customized for enhanced UX and FiveM gameplay integration."
                .to_string(),
            image: "/images/project/7.png".to_string(),
            github_url: "https://github.com/Yugabharathi21/Think-Forge".to_string(),
            technologies: strings(&["Lua", "JavaScript", "FiveM", "HTML", "CSS"]),
        }],
    }
}
